//! Account codec
//!
//! Ledger accounts come in two shapes:
//!
//! - native chain addresses, validated by the host `Api`
//! - EVM-style `0x`-prefixed 20-byte hex addresses, normalized to lowercase
//!
//! Only EVM-style accounts can sign permits, because the permit signer is
//! identified by `keccak256(pubkey)[12..]` exactly like on an EVM chain.

use cosmwasm_std::{Addr, Api, StdError, StdResult};

use crate::eip712::keccak256;

/// The all-zero EVM address. Mint sources and burn sinks are reported from/to it.
pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// Validate a user supplied account string and return its canonical `Addr`.
pub fn validate_account(api: &dyn Api, account: &str) -> StdResult<Addr> {
    if is_evm_address(account) {
        let raw = parse_evm_address(account)?;
        return Ok(Addr::unchecked(encode_evm_address(&raw)));
    }
    api.addr_validate(account)
}

/// Whether the account is the zero address
pub fn is_zero_address(addr: &Addr) -> bool {
    addr.as_str() == ZERO_ADDRESS
}

/// The zero address as an `Addr`
pub fn zero_address() -> Addr {
    Addr::unchecked(ZERO_ADDRESS)
}

fn is_evm_address(account: &str) -> bool {
    account.starts_with("0x") || account.starts_with("0X")
}

/// Parse a 0x-prefixed hex EVM address to 20 bytes
pub fn parse_evm_address(addr: &str) -> StdResult<[u8; 20]> {
    let hex_str = addr
        .strip_prefix("0x")
        .or_else(|| addr.strip_prefix("0X"))
        .unwrap_or(addr);

    if hex_str.len() != 40 {
        return Err(StdError::generic_err(format!(
            "Invalid EVM address length: expected 40 hex chars, got {}",
            hex_str.len()
        )));
    }

    let bytes =
        hex::decode(hex_str).map_err(|e| StdError::generic_err(format!("Invalid hex: {}", e)))?;

    let mut result = [0u8; 20];
    result.copy_from_slice(&bytes);
    Ok(result)
}

/// Encode 20 bytes to a lowercase EVM hex string with 0x prefix
pub fn encode_evm_address(bytes: &[u8; 20]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Derive the EVM address of an uncompressed secp256k1 public key.
///
/// Accepts the 65-byte SEC1 form (`0x04 || x || y`) returned by
/// `Api::secp256k1_recover_pubkey`.
pub fn evm_address_from_pubkey(pubkey: &[u8]) -> StdResult<[u8; 20]> {
    if pubkey.len() != 65 || pubkey[0] != 0x04 {
        return Err(StdError::generic_err(format!(
            "Expected 65-byte uncompressed public key, got {} bytes",
            pubkey.len()
        )));
    }
    let hash = keccak256(&pubkey[1..]);
    let mut result = [0u8; 20];
    result.copy_from_slice(&hash[12..]);
    Ok(result)
}
