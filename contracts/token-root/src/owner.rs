//! Single-owner access for the recovery hatch

use common::address::{is_zero_address, validate_account};
use common::ContractError;
use cosmwasm_std::{Addr, Deps, DepsMut, MessageInfo, Response, StdResult};

use crate::msg::OwnerResponse;
use crate::state::OWNER;

pub fn check_owner(deps: Deps, sender: &Addr) -> Result<(), ContractError> {
    if OWNER.load(deps.storage)? != *sender {
        return Err(ContractError::UnauthorizedOwner);
    }
    Ok(())
}

pub fn execute_transfer_ownership(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    check_owner(deps.as_ref(), &info.sender)?;

    let new_owner = validate_account(deps.api, &new_owner)?;
    if is_zero_address(&new_owner) {
        return Err(ContractError::ZeroAddress);
    }
    OWNER.save(deps.storage, &new_owner)?;

    Ok(Response::new()
        .add_attribute("method", "transfer_ownership")
        .add_attribute("previous_owner", info.sender)
        .add_attribute("new_owner", new_owner))
}

pub fn query_owner(deps: Deps) -> StdResult<OwnerResponse> {
    Ok(OwnerResponse {
        owner: OWNER.load(deps.storage)?,
    })
}
