//! Daily COP Root Token - Ledger on the Root Chain
//!
//! Tokens are minted here only by the bridge predicate (PREDICATE_ROLE) when
//! they are released from the child chain. Holders can grant allowances with
//! signed permits, and the owner can move stray CW20 tokens out.

pub mod contract;
pub mod msg;
pub mod owner;
pub mod state;

pub use common::ContractError;
