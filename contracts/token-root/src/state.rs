use cosmwasm_std::Addr;
use cw_storage_plus::Item;

pub const CONTRACT_NAME: &str = "crates.io:dailycop-token-root";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const TOKEN_NAME: &str = "Daily COP";
pub const TOKEN_SYMBOL: &str = "DLYCOP";
pub const TOKEN_DECIMALS: u8 = 18;

/// Sole account allowed to move foreign CW20 tokens out of this contract
pub const OWNER: Item<Addr> = Item::new("owner");
