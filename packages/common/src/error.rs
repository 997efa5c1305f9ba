//! Error types shared by the Daily COP token and relayer contracts
//!
//! Every variant aborts the whole execute message. The host rolls back all
//! storage writes of the transaction, so no handler attempts local recovery.

use cosmwasm_std::{ConversionOverflowError, OverflowError, StdError};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: account {account} is missing role {role}")]
    Unauthorized { account: String, role: String },

    #[error("Unauthorized: caller is not the owner")]
    UnauthorizedOwner,

    // ========================================================================
    // Ledger Errors
    // ========================================================================

    #[error("Zero address is not a valid account for this operation")]
    ZeroAddress,

    #[error("Address can not be the token contract's address")]
    SelfAddressRecipient,

    #[error("Insufficient balance")]
    InsufficientBalance,

    #[error("Insufficient allowance")]
    InsufficientAllowance,

    #[error("Arithmetic operation underflowed or overflowed: {reason}")]
    ArithmeticFault { reason: String },

    // ========================================================================
    // Permit Errors
    // ========================================================================

    #[error("Permit expired: deadline {deadline} is before block time {now}")]
    ExpiredPermit { deadline: u64, now: u64 },

    #[error("Invalid signature")]
    InvalidSignature,

    // ========================================================================
    // Relayer Errors
    // ========================================================================

    #[error("The value is not enough to cover the cost and a transfer")]
    InsufficientValue,

    // ========================================================================
    // Validation Errors
    // ========================================================================

    #[error("Invalid hash length: expected 32 bytes, got {got}")]
    InvalidHashLength { got: usize },

    #[error("Invalid address: {reason}")]
    InvalidAddress { reason: String },

    #[error("Invalid deposit data: expected a single ABI-encoded uint256 (32 bytes), got {got} bytes")]
    InvalidDepositData { got: usize },
}

impl From<OverflowError> for ContractError {
    fn from(err: OverflowError) -> Self {
        ContractError::ArithmeticFault {
            reason: err.to_string(),
        }
    }
}

impl From<ConversionOverflowError> for ContractError {
    fn from(err: ConversionOverflowError) -> Self {
        ContractError::ArithmeticFault {
            reason: err.to_string(),
        }
    }
}
