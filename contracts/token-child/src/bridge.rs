//! Bridge accounting
//!
//! `Withdraw` burns on this chain so the tokens can be released on the root
//! chain; `Deposit` mints tokens the root chain has locked for this one.
//! `LAYER1_SUPPLY` tracks what is currently out on the root chain, so a
//! deposit can never exceed what was withdrawn.

use common::address::{is_zero_address, validate_account};
use common::eip712::abi_decode_uint256;
use common::ledger::{burn, mint};
use common::roles::{check_role, Role};
use common::ContractError;
use cosmwasm_std::{Binary, Deps, DepsMut, MessageInfo, Response, StdResult, Uint256};

use crate::msg::Layer1SupplyResponse;
use crate::state::LAYER1_SUPPLY;

pub fn execute_withdraw(
    deps: DepsMut,
    info: MessageInfo,
    amount: Uint256,
) -> Result<Response, ContractError> {
    let event = burn(deps.storage, &info.sender, amount)?;

    let layer1_supply = LAYER1_SUPPLY.load(deps.storage)?.checked_add(amount)?;
    LAYER1_SUPPLY.save(deps.storage, &layer1_supply)?;

    Ok(Response::new()
        .add_event(event)
        .add_attribute("method", "withdraw")
        .add_attribute("account", info.sender)
        .add_attribute("amount", amount.to_string())
        .add_attribute("layer1_supply", layer1_supply.to_string()))
}

pub fn execute_deposit(
    deps: DepsMut,
    info: MessageInfo,
    user: String,
    deposit_data: Binary,
) -> Result<Response, ContractError> {
    check_role(deps.storage, &Role::Depositor.id(), &info.sender)?;

    let amount = abi_decode_uint256(deposit_data.as_slice()).ok_or(
        ContractError::InvalidDepositData {
            got: deposit_data.len(),
        },
    )?;
    let user = validate_account(deps.api, &user)?;
    if is_zero_address(&user) {
        return Err(ContractError::ZeroAddress);
    }

    let layer1_supply = LAYER1_SUPPLY.load(deps.storage)?.checked_sub(amount)?;
    LAYER1_SUPPLY.save(deps.storage, &layer1_supply)?;
    let event = mint(deps.storage, &user, amount)?;

    Ok(Response::new()
        .add_event(event)
        .add_attribute("method", "deposit")
        .add_attribute("user", user)
        .add_attribute("amount", amount.to_string())
        .add_attribute("layer1_supply", layer1_supply.to_string()))
}

pub fn query_layer1_supply(deps: Deps) -> StdResult<Layer1SupplyResponse> {
    Ok(Layer1SupplyResponse {
        layer1_supply: LAYER1_SUPPLY.load(deps.storage)?,
    })
}
