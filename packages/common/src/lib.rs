//! Common - Shared Ledger, Permit and Role Logic for the Daily COP Contracts
//!
//! Both token contracts (root and child) and the fee-charging relayer are
//! thin entry points over the modules in this package:
//!
//! - [`roles`]: enumerable role registry with a single admin role
//! - [`ledger`]: balances, allowances and supply with checked arithmetic
//! - [`permit`]: EIP-712 signed allowance grants verified with secp256k1
//!   public-key recovery
//!
//! # Accounts
//! Accounts are native chain addresses or EVM-style `0x` hex addresses; see
//! [`address`].

pub mod address;
pub mod eip712;
pub mod error;
pub mod ledger;
pub mod msg;
pub mod permit;
pub mod roles;

pub use crate::address::{validate_account, ZERO_ADDRESS};
pub use crate::eip712::{keccak256, permit_digest, PermitDomain, PermitMessage};
pub use crate::error::ContractError;
pub use crate::ledger::TokenInfo;
pub use crate::roles::{Role, RoleId, DEFAULT_ADMIN_ROLE};
