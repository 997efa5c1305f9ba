//! State definitions for the Daily COP child token
//!
//! Ledger, permit and role storage live in `common`; this contract only adds
//! the bridge reserve counter.

use cosmwasm_std::Uint256;
use cw_storage_plus::Item;

/// Contract name for migration
pub const CONTRACT_NAME: &str = "crates.io:dailycop-token-child";

/// Contract version for migration
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const TOKEN_NAME: &str = "Daily COP";
pub const TOKEN_SYMBOL: &str = "DLYCOP";
pub const TOKEN_DECIMALS: u8 = 18;

/// Tokens burned here by `Withdraw` and not yet minted back by `Deposit`
pub const LAYER1_SUPPLY: Item<Uint256> = Item::new("layer1_supply");
