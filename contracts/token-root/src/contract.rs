use common::address::validate_account;
use common::ledger::{
    execute_approve, execute_burn_from, execute_decrease_allowance, execute_increase_allowance,
    execute_mint, execute_transfer, execute_transfer_from, init_token, query_allowance,
    query_balance, query_token_info, query_total_supply, transfer_any_erc20, TokenInfo,
};
use common::permit::{execute_permit, query_domain_separator, query_nonces};
use common::roles::{
    execute_grant_role, execute_renounce_role, execute_revoke_role, grant_role, query_has_role,
    query_role_admin, query_role_member, query_role_member_count, Role, DEFAULT_ADMIN_ROLE,
};
use common::ContractError;
use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::owner::{check_owner, execute_transfer_ownership, query_owner};
use crate::state::{
    CONTRACT_NAME, CONTRACT_VERSION, OWNER, TOKEN_DECIMALS, TOKEN_NAME, TOKEN_SYMBOL,
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let admin = validate_account(deps.api, &msg.admin)?;
    let predicate_proxy = validate_account(deps.api, &msg.predicate_proxy)?;

    init_token(
        deps.storage,
        &TokenInfo {
            name: TOKEN_NAME.to_string(),
            symbol: TOKEN_SYMBOL.to_string(),
            decimals: TOKEN_DECIMALS,
        },
    )?;
    OWNER.save(deps.storage, &admin)?;

    grant_role(deps.storage, &DEFAULT_ADMIN_ROLE, &admin)?;
    grant_role(deps.storage, &Role::Predicate.id(), &predicate_proxy)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", admin)
        .add_attribute("predicate_proxy", predicate_proxy))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
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
            execute_mint(deps, info, Role::Predicate, recipient, amount)
        }
        ExecuteMsg::BurnFrom { owner, amount } => execute_burn_from(deps, info, owner, amount),
        ExecuteMsg::Permit {
            owner,
            spender,
            value,
            deadline,
            signature,
        } => execute_permit(deps, env, owner, spender, value, deadline, signature),
        ExecuteMsg::GrantRole { role, account } => execute_grant_role(deps, info, role, account),
        ExecuteMsg::RevokeRole { role, account } => execute_revoke_role(deps, info, role, account),
        ExecuteMsg::RenounceRole { role } => execute_renounce_role(deps, info, role),
        ExecuteMsg::TransferOwnership { new_owner } => {
            execute_transfer_ownership(deps, info, new_owner)
        }
        ExecuteMsg::TransferAnyErc20 {
            token,
            recipient,
            amount,
        } => {
            check_owner(deps.as_ref(), &info.sender)?;
            transfer_any_erc20(deps.as_ref(), &env, token, recipient, amount)
        }
    }
}

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
        QueryMsg::Owner {} => to_json_binary(&query_owner(deps)?),
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

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
