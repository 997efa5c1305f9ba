use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint256};

pub use common::msg::{
    HasRoleResponse, RoleAdminResponse, RoleMemberCountResponse, RoleMemberResponse,
};

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    /// Receives DEFAULT_ADMIN_ROLE
    pub admin: String,
    /// Receives RELAYER_ROLE
    pub relayer: String,
    /// Daily COP token contract
    pub token: String,
    /// Defaults to 100 tokens
    pub cost: Option<Uint256>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Submit `owner`'s permit for `value` to this contract, then pay the
    /// cost to the caller and the rest to `recipient`.
    ///
    /// Authorization: RELAYER_ROLE
    TransferWithPermit {
        owner: String,
        recipient: String,
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
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(CostResponse)]
    Cost {},

    #[returns(ConfigResponse)]
    Config {},

    #[returns(HasRoleResponse)]
    HasRole { role: Binary, account: String },

    /// Number of accounts holding `role`; with `RoleMember` lists relayers
    #[returns(RoleMemberCountResponse)]
    RoleMemberCount { role: Binary },

    #[returns(RoleMemberResponse)]
    RoleMember { role: Binary, index: u32 },

    #[returns(RoleAdminResponse)]
    RoleAdmin { role: Binary },
}

#[cw_serde]
pub struct CostResponse {
    pub cost: Uint256,
}

#[cw_serde]
pub struct ConfigResponse {
    pub token: Addr,
    pub cost: Uint256,
}
