use common::address::validate_account;
use common::msg::TokenExecuteMsg;
use common::roles::{
    check_role, execute_grant_role, execute_renounce_role, execute_revoke_role, grant_role,
    query_has_role, query_role_admin, query_role_member, query_role_member_count, Role,
    DEFAULT_ADMIN_ROLE,
};
use common::ContractError;
use cosmwasm_std::{
    entry_point, to_json_binary, Binary, CosmosMsg, Deps, DepsMut, Env, MessageInfo, Response,
    StdResult, Uint256, WasmMsg,
};
use cw2::set_contract_version;

use crate::msg::{ConfigResponse, CostResponse, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, DEFAULT_COST};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let admin = validate_account(deps.api, &msg.admin)?;
    let relayer = validate_account(deps.api, &msg.relayer)?;
    let token = deps.api.addr_validate(&msg.token)?;
    let cost = msg.cost.unwrap_or_else(|| Uint256::from(DEFAULT_COST));

    CONFIG.save(deps.storage, &Config { token, cost })?;
    grant_role(deps.storage, &DEFAULT_ADMIN_ROLE, &admin)?;
    grant_role(deps.storage, &Role::Relayer.id(), &relayer)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", admin)
        .add_attribute("relayer", relayer)
        .add_attribute("cost", cost.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::TransferWithPermit {
            owner,
            recipient,
            value,
            deadline,
            signature,
        } => execute_transfer_with_permit(
            deps, env, info, owner, recipient, value, deadline, signature,
        ),
        ExecuteMsg::GrantRole { role, account } => execute_grant_role(deps, info, role, account),
        ExecuteMsg::RevokeRole { role, account } => execute_revoke_role(deps, info, role, account),
        ExecuteMsg::RenounceRole { role } => execute_renounce_role(deps, info, role),
    }
}

#[allow(clippy::too_many_arguments)]
fn execute_transfer_with_permit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    owner: String,
    recipient: String,
    value: Uint256,
    deadline: u64,
    signature: Binary,
) -> Result<Response, ContractError> {
    check_role(deps.storage, &Role::Relayer.id(), &info.sender)?;

    let config = CONFIG.load(deps.storage)?;
    if value <= config.cost {
        return Err(ContractError::InsufficientValue);
    }
    let amount = value.checked_sub(config.cost)?;

    let owner = validate_account(deps.api, &owner)?;
    let recipient = validate_account(deps.api, &recipient)?;

    // Executed in order; a failure in any of them reverts the others
    let token_msgs = [
        TokenExecuteMsg::Permit {
            owner: owner.to_string(),
            spender: env.contract.address.to_string(),
            value,
            deadline,
            signature,
        },
        TokenExecuteMsg::TransferFrom {
            owner: owner.to_string(),
            recipient: info.sender.to_string(),
            amount: config.cost,
        },
        TokenExecuteMsg::TransferFrom {
            owner: owner.to_string(),
            recipient: recipient.to_string(),
            amount,
        },
    ];
    let messages = token_msgs
        .iter()
        .map(|msg| -> StdResult<CosmosMsg> {
            Ok(CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: config.token.to_string(),
                msg: to_json_binary(msg)?,
                funds: vec![],
            }))
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("method", "transfer_with_permit")
        .add_attribute("owner", owner)
        .add_attribute("recipient", recipient)
        .add_attribute("relayer", info.sender)
        .add_attribute("value", value.to_string())
        .add_attribute("cost", config.cost.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Cost {} => to_json_binary(&query_cost(deps)?),
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
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

fn query_cost(deps: Deps) -> StdResult<CostResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(CostResponse { cost: config.cost })
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        token: config.token,
        cost: config.cost,
    })
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
