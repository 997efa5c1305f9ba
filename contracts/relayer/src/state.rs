use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint256};
use cw_storage_plus::Item;

pub const CONTRACT_NAME: &str = "crates.io:dailycop-relayer";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// 100 tokens with 18 decimals
pub const DEFAULT_COST: u128 = 100_000_000_000_000_000_000;

#[cw_serde]
pub struct Config {
    /// Token the permits are signed for
    pub token: Addr,
    /// Fee paid to the operator per relayed transfer
    pub cost: Uint256,
}

pub const CONFIG: Item<Config> = Item::new("config");
