//! Daily COP Child Token - Bridged Ledger for the Child Chain
//!
//! The child-chain side of the Daily COP token. Besides the shared ledger it
//! carries the bridge hooks:
//!
//! # Withdraw (child -> root)
//! 1. Holder calls `Withdraw`, burning tokens here
//! 2. `layer1_supply` grows by the burned amount
//! 3. The root chain releases the same amount
//!
//! # Deposit (root -> child)
//! 1. Root chain locks tokens
//! 2. The child chain manager (DEPOSITOR_ROLE) calls `Deposit`
//! 3. Tokens are minted here and `layer1_supply` shrinks
//!
//! # Roles
//! - DEFAULT_ADMIN_ROLE: grants and revokes roles, recovers foreign CW20s
//! - MINTER_ROLE: `Mint`
//! - BURNER_ROLE: `BurnFrom`
//! - DEPOSITOR_ROLE: `Deposit`

pub mod bridge;
pub mod contract;
pub mod msg;
pub mod state;

pub use common::ContractError;
