//! Message types for the Daily COP root token

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint256};

pub use common::msg::{
    AllowanceResponse, BalanceResponse, DomainSeparatorResponse, HasRoleResponse, NoncesResponse,
    RoleAdminResponse, RoleMemberCountResponse, RoleMemberResponse, TokenInfoResponse,
    TotalSupplyResponse,
};

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    /// Receives DEFAULT_ADMIN_ROLE and becomes the owner
    pub admin: String,
    /// Bridge predicate; receives PREDICATE_ROLE
    pub predicate_proxy: String,
}

#[cw_serde]
pub enum ExecuteMsg {
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
    /// Authorization: PREDICATE_ROLE
    Mint {
        recipient: String,
        amount: Uint256,
    },
    /// Authorization: BURNER_ROLE
    BurnFrom {
        owner: String,
        amount: Uint256,
    },
    Permit {
        owner: String,
        spender: String,
        value: Uint256,
        deadline: u64,
        signature: Binary,
    },
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
    /// Authorization: owner
    TransferOwnership {
        new_owner: String,
    },
    /// Send CW20 tokens held by this contract.
    ///
    /// Authorization: owner
    TransferAnyErc20 {
        token: String,
        recipient: String,
        amount: Uint256,
    },
}

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

    #[returns(NoncesResponse)]
    Nonces { owner: String },

    #[returns(DomainSeparatorResponse)]
    DomainSeparator {},

    #[returns(OwnerResponse)]
    Owner {},

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
pub struct OwnerResponse {
    pub owner: Addr,
}
