//! Relayer - Gasless Daily COP Transfers
//!
//! A relayer operator submits a holder's signed permit together with a
//! transfer request and is paid a fixed `cost` out of the transferred value.
//!
//! # Flow
//! 1. Holder signs a permit for `value` with this contract as spender
//! 2. Operator (RELAYER_ROLE) calls `TransferWithPermit`
//! 3. This contract submits the permit to the token
//! 4. `cost` goes to the operator, `value - cost` to the recipient
//!
//! Steps 3 and 4 are sub-messages; if any of them fails the whole
//! transaction reverts.

pub mod contract;
pub mod msg;
pub mod state;

pub use common::ContractError;
