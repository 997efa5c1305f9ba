//! Message types for the Daily COP child token

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Binary, Uint256};

pub use common::msg::{
    AllowanceResponse, BalanceResponse, DomainSeparatorResponse, HasRoleResponse, NoncesResponse,
    RoleAdminResponse, RoleMemberCountResponse, RoleMemberResponse, TokenInfoResponse,
    TotalSupplyResponse,
};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    /// Receives DEFAULT_ADMIN_ROLE
    pub admin: String,
    /// Receives MINTER_ROLE
    pub minter: String,
    /// Bridge entry point; receives DEPOSITOR_ROLE
    pub child_chain_manager: String,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Ledger
    // ========================================================================
    Transfer {
        recipient: String,
        amount: Uint256,
    },
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint256,
    },
    Approve {
        spender: String,
        amount: Uint256,
    },
    IncreaseAllowance {
        spender: String,
        amount: Uint256,
    },
    DecreaseAllowance {
        spender: String,
        amount: Uint256,
    },

    /// Authorization: MINTER_ROLE
    Mint {
        recipient: String,
        amount: Uint256,
    },

    /// Burn out of an allowance the owner granted to the caller.
    ///
    /// Authorization: BURNER_ROLE
    BurnFrom {
        owner: String,
        amount: Uint256,
    },

    // ========================================================================
    // Permit
    // ========================================================================
    /// Grant an allowance with an EIP-712 signature of the owner.
    /// Anyone may submit it.
    Permit {
        owner: String,
        spender: String,
        value: Uint256,
        /// Unix seconds
        deadline: u64,
        /// 65 bytes, r || s || v
        signature: Binary,
    },

    // ========================================================================
    // Bridge
    // ========================================================================
    /// Burn the caller's tokens to release them on the root chain
    Withdraw { amount: Uint256 },

    /// Mint tokens released from the root chain.
    ///
    /// Authorization: DEPOSITOR_ROLE
    Deposit {
        user: String,
        /// One ABI-encoded uint256
        deposit_data: Binary,
    },

    // ========================================================================
    // Roles
    // ========================================================================
    GrantRole {
        role: Binary,
        account: String,
    },
    RevokeRole {
        role: Binary,
        account: String,
    },
    RenounceRole {
        role: Binary,
    },

    // ========================================================================
    // Recovery
    // ========================================================================
    /// Send CW20 tokens held by this contract.
    ///
    /// Authorization: DEFAULT_ADMIN_ROLE
    TransferAnyErc20 {
        token: String,
        recipient: String,
        amount: Uint256,
    },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(BalanceResponse)]
    Balance { address: String },

    #[returns(AllowanceResponse)]
    Allowance { owner: String, spender: String },

    #[returns(TotalSupplyResponse)]
    TotalSupply {},

    #[returns(TokenInfoResponse)]
    TokenInfo {},

    /// Nonce the next permit of `owner` must be signed with
    #[returns(NoncesResponse)]
    Nonces { owner: String },

    #[returns(DomainSeparatorResponse)]
    DomainSeparator {},

    /// Tokens withdrawn to the root chain and not yet deposited back
    #[returns(Layer1SupplyResponse)]
    Layer1Supply {},

    #[returns(HasRoleResponse)]
    HasRole { role: Binary, account: String },

    #[returns(RoleMemberCountResponse)]
    RoleMemberCount { role: Binary },

    #[returns(RoleMemberResponse)]
    RoleMember { role: Binary, index: u32 },

    #[returns(RoleAdminResponse)]
    RoleAdmin { role: Binary },
}

#[cw_serde]
pub struct Layer1SupplyResponse {
    pub layer1_supply: Uint256,
}
