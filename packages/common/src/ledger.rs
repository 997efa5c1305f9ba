//! Balance, allowance and supply bookkeeping shared by both token variants
//!
//! Invariant: the sum of all balances equals the total supply. Only `mint`
//! and `burn` move the supply; `transfer` debits and credits in equal
//! amounts. All arithmetic is checked and fails with `ArithmeticFault`.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, CosmosMsg, Deps, DepsMut, Env, Event, MessageInfo, Response, StdResult,
    Storage, Uint128, Uint256, WasmMsg,
};
use cw20::Cw20ExecuteMsg;
use cw_storage_plus::{Item, Map};

use crate::address::{is_zero_address, validate_account, zero_address};
use crate::error::ContractError;
use crate::msg::{AllowanceResponse, BalanceResponse, TokenInfoResponse, TotalSupplyResponse};
use crate::roles::{check_role, Role};

/// Token metadata
#[cw_serde]
pub struct TokenInfo {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

pub const TOKEN_INFO: Item<TokenInfo> = Item::new("token_info");

pub const TOTAL_SUPPLY: Item<Uint256> = Item::new("total_supply");

/// Key: account, Value: balance
pub const BALANCES: Map<&Addr, Uint256> = Map::new("balance");

/// Key: (owner, spender), Value: remaining allowance
pub const ALLOWANCES: Map<(&Addr, &Addr), Uint256> = Map::new("allowance");

/// Store token metadata and start with an empty supply
pub fn init_token(storage: &mut dyn Storage, info: &TokenInfo) -> StdResult<()> {
    TOKEN_INFO.save(storage, info)?;
    TOTAL_SUPPLY.save(storage, &Uint256::zero())
}

// ============================================================================
// Primitives
// ============================================================================

pub fn balance_of(storage: &dyn Storage, account: &Addr) -> StdResult<Uint256> {
    Ok(BALANCES.may_load(storage, account)?.unwrap_or_default())
}

pub fn allowance_of(storage: &dyn Storage, owner: &Addr, spender: &Addr) -> StdResult<Uint256> {
    Ok(ALLOWANCES
        .may_load(storage, (owner, spender))?
        .unwrap_or_default())
}

pub fn total_supply(storage: &dyn Storage) -> StdResult<Uint256> {
    Ok(TOTAL_SUPPLY.may_load(storage)?.unwrap_or_default())
}

pub fn transfer_event(from: &Addr, to: &Addr, amount: Uint256) -> Event {
    Event::new("transfer")
        .add_attribute("from", from)
        .add_attribute("to", to)
        .add_attribute("amount", amount.to_string())
}

pub fn approval_event(owner: &Addr, spender: &Addr, amount: Uint256) -> Event {
    Event::new("approval")
        .add_attribute("owner", owner)
        .add_attribute("spender", spender)
        .add_attribute("amount", amount.to_string())
}

/// Create `amount` new tokens for `to`.
pub fn mint(storage: &mut dyn Storage, to: &Addr, amount: Uint256) -> Result<Event, ContractError> {
    if is_zero_address(to) {
        return Err(ContractError::ZeroAddress);
    }

    let supply = total_supply(storage)?.checked_add(amount)?;
    let balance = balance_of(storage, to)?.checked_add(amount)?;
    TOTAL_SUPPLY.save(storage, &supply)?;
    BALANCES.save(storage, to, &balance)?;

    Ok(transfer_event(&zero_address(), to, amount))
}

/// Destroy `amount` tokens held by `from`.
pub fn burn(storage: &mut dyn Storage, from: &Addr, amount: Uint256) -> Result<Event, ContractError> {
    let balance = balance_of(storage, from)?;
    if balance < amount {
        return Err(ContractError::InsufficientBalance);
    }

    let supply = total_supply(storage)?.checked_sub(amount)?;
    BALANCES.save(storage, from, &balance.checked_sub(amount)?)?;
    TOTAL_SUPPLY.save(storage, &supply)?;

    Ok(transfer_event(from, &zero_address(), amount))
}

/// Move `amount` from `from` to `to`. `token` is the ledger contract itself,
/// which is never a valid recipient.
pub fn transfer(
    storage: &mut dyn Storage,
    token: &Addr,
    from: &Addr,
    to: &Addr,
    amount: Uint256,
) -> Result<Event, ContractError> {
    check_recipient(token, to)?;

    let from_balance = balance_of(storage, from)?;
    if from_balance < amount {
        return Err(ContractError::InsufficientBalance);
    }
    BALANCES.save(storage, from, &from_balance.checked_sub(amount)?)?;

    // Read after the debit so a self-transfer nets to zero
    let to_balance = balance_of(storage, to)?.checked_add(amount)?;
    BALANCES.save(storage, to, &to_balance)?;

    Ok(transfer_event(from, to, amount))
}

/// Reject the zero address and the token contract as transfer recipients
pub fn check_recipient(token: &Addr, to: &Addr) -> Result<(), ContractError> {
    if to == token {
        return Err(ContractError::SelfAddressRecipient);
    }
    if is_zero_address(to) {
        return Err(ContractError::ZeroAddress);
    }
    Ok(())
}

/// Overwrite the allowance of `spender` over `owner`'s tokens.
pub fn set_allowance(
    storage: &mut dyn Storage,
    owner: &Addr,
    spender: &Addr,
    amount: Uint256,
) -> Result<Event, ContractError> {
    if is_zero_address(spender) {
        return Err(ContractError::ZeroAddress);
    }
    ALLOWANCES.save(storage, (owner, spender), &amount)?;
    Ok(approval_event(owner, spender, amount))
}

/// Add `amount` to the allowance of `spender`; returns the new allowance.
pub fn increase_allowance(
    storage: &mut dyn Storage,
    owner: &Addr,
    spender: &Addr,
    amount: Uint256,
) -> Result<Uint256, ContractError> {
    if is_zero_address(spender) {
        return Err(ContractError::ZeroAddress);
    }
    let allowance = allowance_of(storage, owner, spender)?.checked_add(amount)?;
    ALLOWANCES.save(storage, (owner, spender), &allowance)?;
    Ok(allowance)
}

/// Consume `amount` of the allowance `spender` holds over `owner`'s tokens.
pub fn spend_allowance(
    storage: &mut dyn Storage,
    owner: &Addr,
    spender: &Addr,
    amount: Uint256,
) -> Result<(), ContractError> {
    let allowance = allowance_of(storage, owner, spender)?;
    if allowance < amount {
        return Err(ContractError::InsufficientAllowance);
    }
    ALLOWANCES.save(storage, (owner, spender), &allowance.checked_sub(amount)?)?;
    Ok(())
}

// ============================================================================
// Execute handlers
// ============================================================================

/// Mint tokens; the caller must hold `minter_role`.
pub fn execute_mint(
    deps: DepsMut,
    info: MessageInfo,
    minter_role: Role,
    recipient: String,
    amount: Uint256,
) -> Result<Response, ContractError> {
    check_role(deps.storage, &minter_role.id(), &info.sender)?;

    let recipient = validate_account(deps.api, &recipient)?;
    let event = mint(deps.storage, &recipient, amount)?;

    Ok(Response::new()
        .add_event(event)
        .add_attribute("method", "mint")
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount.to_string()))
}

/// Burn tokens of `owner` out of the allowance granted to a BURNER_ROLE holder.
pub fn execute_burn_from(
    deps: DepsMut,
    info: MessageInfo,
    owner: String,
    amount: Uint256,
) -> Result<Response, ContractError> {
    check_role(deps.storage, &Role::Burner.id(), &info.sender)?;

    let owner = validate_account(deps.api, &owner)?;
    spend_allowance(deps.storage, &owner, &info.sender, amount)?;
    let event = burn(deps.storage, &owner, amount)?;

    Ok(Response::new()
        .add_event(event)
        .add_attribute("method", "burn_from")
        .add_attribute("owner", owner)
        .add_attribute("amount", amount.to_string()))
}

pub fn execute_transfer(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
    amount: Uint256,
) -> Result<Response, ContractError> {
    let recipient = validate_account(deps.api, &recipient)?;
    let event = transfer(
        deps.storage,
        &env.contract.address,
        &info.sender,
        &recipient,
        amount,
    )?;

    Ok(Response::new()
        .add_event(event)
        .add_attribute("method", "transfer")
        .add_attribute("from", info.sender)
        .add_attribute("to", recipient)
        .add_attribute("amount", amount.to_string()))
}

pub fn execute_transfer_from(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    owner: String,
    recipient: String,
    amount: Uint256,
) -> Result<Response, ContractError> {
    let owner = validate_account(deps.api, &owner)?;
    let recipient = validate_account(deps.api, &recipient)?;
    check_recipient(&env.contract.address, &recipient)?;

    spend_allowance(deps.storage, &owner, &info.sender, amount)?;
    let event = transfer(
        deps.storage,
        &env.contract.address,
        &owner,
        &recipient,
        amount,
    )?;

    Ok(Response::new()
        .add_event(event)
        .add_attribute("method", "transfer_from")
        .add_attribute("spender", info.sender)
        .add_attribute("from", owner)
        .add_attribute("to", recipient)
        .add_attribute("amount", amount.to_string()))
}

pub fn execute_approve(
    deps: DepsMut,
    info: MessageInfo,
    spender: String,
    amount: Uint256,
) -> Result<Response, ContractError> {
    let spender = validate_account(deps.api, &spender)?;
    let event = set_allowance(deps.storage, &info.sender, &spender, amount)?;

    Ok(Response::new()
        .add_event(event)
        .add_attribute("method", "approve")
        .add_attribute("spender", spender)
        .add_attribute("amount", amount.to_string()))
}

pub fn execute_increase_allowance(
    deps: DepsMut,
    info: MessageInfo,
    spender: String,
    amount: Uint256,
) -> Result<Response, ContractError> {
    let spender = validate_account(deps.api, &spender)?;
    let allowance = increase_allowance(deps.storage, &info.sender, &spender, amount)?;

    Ok(Response::new()
        .add_event(approval_event(&info.sender, &spender, allowance))
        .add_attribute("method", "increase_allowance")
        .add_attribute("spender", spender)
        .add_attribute("allowance", allowance.to_string()))
}

pub fn execute_decrease_allowance(
    deps: DepsMut,
    info: MessageInfo,
    spender: String,
    amount: Uint256,
) -> Result<Response, ContractError> {
    let spender = validate_account(deps.api, &spender)?;
    let current = allowance_of(deps.storage, &info.sender, &spender)?;
    if current < amount {
        return Err(ContractError::InsufficientAllowance);
    }
    let event = set_allowance(deps.storage, &info.sender, &spender, current - amount)?;

    Ok(Response::new()
        .add_event(event)
        .add_attribute("method", "decrease_allowance")
        .add_attribute("spender", spender)
        .add_attribute("allowance", (current - amount).to_string()))
}

/// Move a foreign CW20 token held by this contract. Authorization is the
/// caller's responsibility; this ledger's balances are untouched.
pub fn transfer_any_erc20(
    deps: Deps,
    env: &Env,
    token: String,
    recipient: String,
    amount: Uint256,
) -> Result<Response, ContractError> {
    let token = deps.api.addr_validate(&token)?;
    if token == env.contract.address {
        return Err(ContractError::InvalidAddress {
            reason: "token must be a contract other than this ledger".to_string(),
        });
    }
    let recipient = validate_account(deps.api, &recipient)?;
    let amount = Uint128::try_from(amount)?;

    let msg = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: recipient.to_string(),
            amount,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(msg)
        .add_attribute("method", "transfer_any_erc20")
        .add_attribute("token", token)
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount.to_string()))
}

// ============================================================================
// Queries
// ============================================================================

pub fn query_balance(deps: Deps, address: String) -> StdResult<BalanceResponse> {
    let address = validate_account(deps.api, &address)?;
    Ok(BalanceResponse {
        balance: balance_of(deps.storage, &address)?,
    })
}

pub fn query_allowance(deps: Deps, owner: String, spender: String) -> StdResult<AllowanceResponse> {
    let owner = validate_account(deps.api, &owner)?;
    let spender = validate_account(deps.api, &spender)?;
    Ok(AllowanceResponse {
        allowance: allowance_of(deps.storage, &owner, &spender)?,
    })
}

pub fn query_total_supply(deps: Deps) -> StdResult<TotalSupplyResponse> {
    Ok(TotalSupplyResponse {
        total_supply: total_supply(deps.storage)?,
    })
}

pub fn query_token_info(deps: Deps) -> StdResult<TokenInfoResponse> {
    let info = TOKEN_INFO.load(deps.storage)?;
    Ok(TokenInfoResponse {
        name: info.name,
        symbol: info.symbol,
        decimals: info.decimals,
        total_supply: total_supply(deps.storage)?,
    })
}
