//! Daily COP Child Token - Entry Points
//!
//! Handlers live in:
//! - `common::{ledger, permit, roles}` - shared token logic
//! - `bridge` - withdraw/deposit accounting

use common::address::validate_account;
use common::ledger::{
    execute_approve, execute_burn_from, execute_decrease_allowance, execute_increase_allowance,
    execute_mint, execute_transfer, execute_transfer_from, init_token, query_allowance,
    query_balance, query_token_info, query_total_supply, transfer_any_erc20, TokenInfo,
};
use common::permit::{execute_permit, query_domain_separator, query_nonces};
use common::roles::{
    check_role, execute_grant_role, execute_renounce_role, execute_revoke_role, grant_role,
    query_has_role, query_role_admin, query_role_member, query_role_member_count, Role,
    DEFAULT_ADMIN_ROLE,
};
use common::ContractError;
use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Uint256,
};
use cw2::set_contract_version;

use crate::bridge::{execute_deposit, execute_withdraw, query_layer1_supply};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::state::{
    CONTRACT_NAME, CONTRACT_VERSION, LAYER1_SUPPLY, TOKEN_DECIMALS, TOKEN_NAME, TOKEN_SYMBOL,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let admin = validate_account(deps.api, &msg.admin)?;
    let minter = validate_account(deps.api, &msg.minter)?;
    let child_chain_manager = validate_account(deps.api, &msg.child_chain_manager)?;

    init_token(
        deps.storage,
        &TokenInfo {
            name: TOKEN_NAME.to_string(),
            symbol: TOKEN_SYMBOL.to_string(),
            decimals: TOKEN_DECIMALS,
        },
    )?;
    LAYER1_SUPPLY.save(deps.storage, &Uint256::zero())?;

    grant_role(deps.storage, &DEFAULT_ADMIN_ROLE, &admin)?;
    grant_role(deps.storage, &Role::Minter.id(), &minter)?;
    grant_role(deps.storage, &Role::Depositor.id(), &child_chain_manager)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", admin)
        .add_attribute("minter", minter)
        .add_attribute("child_chain_manager", child_chain_manager))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Ledger
        ExecuteMsg::Transfer { recipient, amount } => {
            execute_transfer(deps, env, info, recipient, amount)
        }
        ExecuteMsg::TransferFrom {
            owner,
            recipient,
            amount,
        } => execute_transfer_from(deps, env, info, owner, recipient, amount),
        ExecuteMsg::Approve { spender, amount } => execute_approve(deps, info, spender, amount),
        ExecuteMsg::IncreaseAllowance { spender, amount } => {
            execute_increase_allowance(deps, info, spender, amount)
        }
        ExecuteMsg::DecreaseAllowance { spender, amount } => {
            execute_decrease_allowance(deps, info, spender, amount)
        }
        ExecuteMsg::Mint { recipient, amount } => {
            execute_mint(deps, info, Role::Minter, recipient, amount)
        }
        ExecuteMsg::BurnFrom { owner, amount } => execute_burn_from(deps, info, owner, amount),

        // Permit
        ExecuteMsg::Permit {
            owner,
            spender,
            value,
            deadline,
            signature,
        } => execute_permit(deps, env, owner, spender, value, deadline, signature),

        // Bridge
        ExecuteMsg::Withdraw { amount } => execute_withdraw(deps, info, amount),
        ExecuteMsg::Deposit { user, deposit_data } => {
            execute_deposit(deps, info, user, deposit_data)
        }

        // Roles
        ExecuteMsg::GrantRole { role, account } => execute_grant_role(deps, info, role, account),
        ExecuteMsg::RevokeRole { role, account } => execute_revoke_role(deps, info, role, account),
        ExecuteMsg::RenounceRole { role } => execute_renounce_role(deps, info, role),

        // Recovery
        ExecuteMsg::TransferAnyErc20 {
            token,
            recipient,
            amount,
        } => {
            check_role(deps.storage, &DEFAULT_ADMIN_ROLE, &info.sender)?;
            transfer_any_erc20(deps.as_ref(), &env, token, recipient, amount)
        }
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Balance { address } => to_json_binary(&query_balance(deps, address)?),
        QueryMsg::Allowance { owner, spender } => {
            to_json_binary(&query_allowance(deps, owner, spender)?)
        }
        QueryMsg::TotalSupply {} => to_json_binary(&query_total_supply(deps)?),
        QueryMsg::TokenInfo {} => to_json_binary(&query_token_info(deps)?),
        QueryMsg::Nonces { owner } => to_json_binary(&query_nonces(deps, owner)?),
        QueryMsg::DomainSeparator {} => to_json_binary(&query_domain_separator(env)?),
        QueryMsg::Layer1Supply {} => to_json_binary(&query_layer1_supply(deps)?),
        QueryMsg::HasRole { role, account } => {
            to_json_binary(&query_has_role(deps, role, account)?)
        }
        QueryMsg::RoleMemberCount { role } => to_json_binary(&query_role_member_count(deps, role)?),
        QueryMsg::RoleMember { role, index } => {
            to_json_binary(&query_role_member(deps, role, index)?)
        }
        QueryMsg::RoleAdmin { role } => to_json_binary(&query_role_admin(role)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::{mock_dependencies, mock_env, mock_info};
    use cosmwasm_std::{from_json, Addr};

    use crate::msg::{Layer1SupplyResponse, TokenInfoResponse};

    #[test]
    fn test_instantiate_assigns_roles() {
        let mut deps = mock_dependencies();
        instantiate(
            deps.as_mut(),
            mock_env(),
            mock_info("terra1deployer", &[]),
            InstantiateMsg {
                admin: "terra1admin".to_string(),
                minter: "terra1minter".to_string(),
                child_chain_manager: "terra1manager".to_string(),
            },
        )
        .unwrap();

        let has = |role: Role, account: &str| {
            common::roles::has_role(&deps.storage, &role.id(), &Addr::unchecked(account)).unwrap()
        };
        assert!(has(Role::DefaultAdmin, "terra1admin"));
        assert!(has(Role::Minter, "terra1minter"));
        assert!(has(Role::Depositor, "terra1manager"));
        assert!(!has(Role::Burner, "terra1admin"));

        let info: TokenInfoResponse =
            from_json(query(deps.as_ref(), mock_env(), QueryMsg::TokenInfo {}).unwrap()).unwrap();
        assert_eq!(info.name, "Daily COP");
        assert_eq!(info.symbol, "DLYCOP");
        assert_eq!(info.decimals, 18);
        assert_eq!(info.total_supply, Uint256::zero());

        let layer1: Layer1SupplyResponse =
            from_json(query(deps.as_ref(), mock_env(), QueryMsg::Layer1Supply {}).unwrap())
                .unwrap();
        assert_eq!(layer1.layer1_supply, Uint256::zero());

        let version = cw2::get_contract_version(&deps.storage).unwrap();
        assert_eq!(version.contract, CONTRACT_NAME);
    }
}
