//! Message and response types shared by the token and relayer contracts

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, Uint256};

// ============================================================================
// Token messages used by other contracts
// ============================================================================

/// Subset of the token execute interface that the relayer drives.
///
/// Serializes to the same JSON as the matching variants of each token
/// contract's `ExecuteMsg`.
#[cw_serde]
pub enum TokenExecuteMsg {
    Permit {
        owner: String,
        spender: String,
        value: Uint256,
        deadline: u64,
        signature: Binary,
    },
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint256,
    },
}

// ============================================================================
// Ledger query responses
// ============================================================================

#[cw_serde]
pub struct BalanceResponse {
    pub balance: Uint256,
}

#[cw_serde]
pub struct AllowanceResponse {
    pub allowance: Uint256,
}

#[cw_serde]
pub struct TotalSupplyResponse {
    pub total_supply: Uint256,
}

#[cw_serde]
pub struct TokenInfoResponse {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: Uint256,
}

// ============================================================================
// Permit query responses
// ============================================================================

#[cw_serde]
pub struct NoncesResponse {
    /// Nonce the next permit of this owner must be signed with
    pub nonce: u64,
}

#[cw_serde]
pub struct DomainSeparatorResponse {
    pub domain_separator: Binary,
}

// ============================================================================
// Role query responses
// ============================================================================

#[cw_serde]
pub struct HasRoleResponse {
    pub has_role: bool,
}

#[cw_serde]
pub struct RoleMemberCountResponse {
    pub count: u32,
}

#[cw_serde]
pub struct RoleMemberResponse {
    pub member: Addr,
}

#[cw_serde]
pub struct RoleAdminResponse {
    pub admin_role: Binary,
}
