//! Role registry
//!
//! Maps a 32-byte role identifier to an insertion-ordered, enumerable set of
//! members. `DEFAULT_ADMIN_ROLE` administers every role, itself included.
//!
//! Members are stored as an index-addressed array plus a reverse index, so
//! membership checks are a single read and revocation swaps the last member
//! into the freed slot.

use cosmwasm_std::{
    Addr, Binary, Deps, DepsMut, Event, MessageInfo, Response, StdError, StdResult, Storage,
};
use cw_storage_plus::Map;

use crate::address::validate_account;
use crate::eip712::{bytes32_to_hex, keccak256};
use crate::error::ContractError;
use crate::msg::{HasRoleResponse, RoleAdminResponse, RoleMemberCountResponse, RoleMemberResponse};

/// 32-byte role identifier
pub type RoleId = [u8; 32];

/// Admin role of every role in the system
pub const DEFAULT_ADMIN_ROLE: RoleId = [0u8; 32];

/// Key: (role, index), Value: member
const ROLE_MEMBERS: Map<(&[u8], u32), Addr> = Map::new("role_members");

/// Key: (role, member), Value: index into ROLE_MEMBERS
const ROLE_MEMBER_INDEX: Map<(&[u8], &Addr), u32> = Map::new("role_member_index");

/// Key: role, Value: number of members
const ROLE_MEMBER_COUNT: Map<&[u8], u32> = Map::new("role_member_count");

/// Roles known to the Daily COP contracts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    DefaultAdmin,
    Minter,
    Burner,
    Depositor,
    Predicate,
    Relayer,
}

impl Role {
    pub fn name(&self) -> &'static str {
        match self {
            Role::DefaultAdmin => "DEFAULT_ADMIN_ROLE",
            Role::Minter => "MINTER_ROLE",
            Role::Burner => "BURNER_ROLE",
            Role::Depositor => "DEPOSITOR_ROLE",
            Role::Predicate => "PREDICATE_ROLE",
            Role::Relayer => "RELAYER_ROLE",
        }
    }

    /// keccak256 of the role name; the default admin role is all zeros
    pub fn id(&self) -> RoleId {
        match self {
            Role::DefaultAdmin => DEFAULT_ADMIN_ROLE,
            _ => keccak256(self.name().as_bytes()),
        }
    }

    pub fn id_binary(&self) -> Binary {
        Binary::from(self.id().to_vec())
    }
}

/// Parse a role identifier received in a message
pub fn parse_role_id(role: &Binary) -> Result<RoleId, ContractError> {
    role.as_slice()
        .try_into()
        .map_err(|_| ContractError::InvalidHashLength { got: role.len() })
}

/// Admin role of `role`. Every role is administered by the default admin.
pub fn role_admin(_role: &RoleId) -> RoleId {
    DEFAULT_ADMIN_ROLE
}

pub fn has_role(storage: &dyn Storage, role: &RoleId, account: &Addr) -> StdResult<bool> {
    Ok(ROLE_MEMBER_INDEX.has(storage, (role.as_slice(), account)))
}

/// Fail with `Unauthorized` unless `account` holds `role`
pub fn check_role(storage: &dyn Storage, role: &RoleId, account: &Addr) -> Result<(), ContractError> {
    if !has_role(storage, role, account)? {
        return Err(ContractError::Unauthorized {
            account: account.to_string(),
            role: bytes32_to_hex(role),
        });
    }
    Ok(())
}

pub fn role_member_count(storage: &dyn Storage, role: &RoleId) -> StdResult<u32> {
    Ok(ROLE_MEMBER_COUNT
        .may_load(storage, role.as_slice())?
        .unwrap_or(0))
}

pub fn role_member(storage: &dyn Storage, role: &RoleId, index: u32) -> StdResult<Addr> {
    ROLE_MEMBERS
        .may_load(storage, (role.as_slice(), index))?
        .ok_or_else(|| {
            StdError::not_found(format!("member {} of role {}", index, bytes32_to_hex(role)))
        })
}

/// Add `account` to `role` without an authorization check.
///
/// Returns `false` when the account already held the role.
pub fn grant_role(storage: &mut dyn Storage, role: &RoleId, account: &Addr) -> StdResult<bool> {
    if has_role(storage, role, account)? {
        return Ok(false);
    }

    let count = role_member_count(storage, role)?;
    ROLE_MEMBERS.save(storage, (role.as_slice(), count), account)?;
    ROLE_MEMBER_INDEX.save(storage, (role.as_slice(), account), &count)?;
    ROLE_MEMBER_COUNT.save(storage, role.as_slice(), &(count + 1))?;
    Ok(true)
}

/// Remove `account` from `role` without an authorization check.
///
/// Returns `false` when the account did not hold the role.
pub fn revoke_role(storage: &mut dyn Storage, role: &RoleId, account: &Addr) -> StdResult<bool> {
    let Some(index) = ROLE_MEMBER_INDEX.may_load(storage, (role.as_slice(), account))? else {
        return Ok(false);
    };

    let last = role_member_count(storage, role)? - 1;
    if index != last {
        let moved = ROLE_MEMBERS.load(storage, (role.as_slice(), last))?;
        ROLE_MEMBERS.save(storage, (role.as_slice(), index), &moved)?;
        ROLE_MEMBER_INDEX.save(storage, (role.as_slice(), &moved), &index)?;
    }
    ROLE_MEMBERS.remove(storage, (role.as_slice(), last));
    ROLE_MEMBER_INDEX.remove(storage, (role.as_slice(), account));
    ROLE_MEMBER_COUNT.save(storage, role.as_slice(), &last)?;
    Ok(true)
}

fn role_event(kind: &str, role: &RoleId, account: &Addr, sender: &Addr) -> Event {
    Event::new(kind)
        .add_attribute("role", bytes32_to_hex(role))
        .add_attribute("account", account)
        .add_attribute("sender", sender)
}

// ============================================================================
// Execute handlers
// ============================================================================

/// Grant a role (caller must hold the role's admin role).
pub fn execute_grant_role(
    deps: DepsMut,
    info: MessageInfo,
    role: Binary,
    account: String,
) -> Result<Response, ContractError> {
    let role = parse_role_id(&role)?;
    check_role(deps.storage, &role_admin(&role), &info.sender)?;

    let account = validate_account(deps.api, &account)?;
    let mut response = Response::new()
        .add_attribute("method", "grant_role")
        .add_attribute("role", bytes32_to_hex(&role))
        .add_attribute("account", account.as_str());

    if grant_role(deps.storage, &role, &account)? {
        response = response.add_event(role_event("role_granted", &role, &account, &info.sender));
    }
    Ok(response)
}

/// Revoke a role (caller must hold the role's admin role).
pub fn execute_revoke_role(
    deps: DepsMut,
    info: MessageInfo,
    role: Binary,
    account: String,
) -> Result<Response, ContractError> {
    let role = parse_role_id(&role)?;
    check_role(deps.storage, &role_admin(&role), &info.sender)?;

    let account = validate_account(deps.api, &account)?;
    let mut response = Response::new()
        .add_attribute("method", "revoke_role")
        .add_attribute("role", bytes32_to_hex(&role))
        .add_attribute("account", account.as_str());

    if revoke_role(deps.storage, &role, &account)? {
        response = response.add_event(role_event("role_revoked", &role, &account, &info.sender));
    }
    Ok(response)
}

/// Drop the caller's own membership of a role.
pub fn execute_renounce_role(
    deps: DepsMut,
    info: MessageInfo,
    role: Binary,
) -> Result<Response, ContractError> {
    let role = parse_role_id(&role)?;

    let mut response = Response::new()
        .add_attribute("method", "renounce_role")
        .add_attribute("role", bytes32_to_hex(&role))
        .add_attribute("account", info.sender.as_str());

    if revoke_role(deps.storage, &role, &info.sender)? {
        response =
            response.add_event(role_event("role_revoked", &role, &info.sender, &info.sender));
    }
    Ok(response)
}

// ============================================================================
// Queries
// ============================================================================

fn parse_role_query(role: &Binary) -> StdResult<RoleId> {
    parse_role_id(role).map_err(|e| StdError::generic_err(e.to_string()))
}

pub fn query_has_role(deps: Deps, role: Binary, account: String) -> StdResult<HasRoleResponse> {
    let role = parse_role_query(&role)?;
    let account = validate_account(deps.api, &account)?;
    Ok(HasRoleResponse {
        has_role: has_role(deps.storage, &role, &account)?,
    })
}

pub fn query_role_member_count(deps: Deps, role: Binary) -> StdResult<RoleMemberCountResponse> {
    let role = parse_role_query(&role)?;
    Ok(RoleMemberCountResponse {
        count: role_member_count(deps.storage, &role)?,
    })
}

pub fn query_role_member(deps: Deps, role: Binary, index: u32) -> StdResult<RoleMemberResponse> {
    let role = parse_role_query(&role)?;
    Ok(RoleMemberResponse {
        member: role_member(deps.storage, &role, index)?,
    })
}

pub fn query_role_admin(role: Binary) -> StdResult<RoleAdminResponse> {
    let role = parse_role_query(&role)?;
    Ok(RoleAdminResponse {
        admin_role: Binary::from(role_admin(&role).to_vec()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::{mock_dependencies, mock_info};

    fn members(storage: &dyn Storage, role: &RoleId) -> Vec<String> {
        let count = role_member_count(storage, role).unwrap();
        (0..count)
            .map(|i| role_member(storage, role, i).unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_role_ids() {
        assert_eq!(Role::DefaultAdmin.id(), [0u8; 32]);
        // Matches the RELAYER_ROLE id reported by the EVM AccessControl revert string
        assert_eq!(
            bytes32_to_hex(&Role::Relayer.id()),
            "0xe2b7fb3b832174769106daebcfd6d1970523240dda11281102db9363b83b0dc4"
        );
        assert_eq!(
            bytes32_to_hex(&Role::Minter.id()),
            "0x9f2df0fed2c77648de5860a4cc508cd0818c85b8b8a1ab4ceeef8d981c8956a6"
        );
        assert_eq!(
            bytes32_to_hex(&Role::Depositor.id()),
            "0x8f4f2da22e8ac8f11e15f9fc141cddbb5deea8800186560abb6e68c5496619a9"
        );
        assert_eq!(
            bytes32_to_hex(&Role::Predicate.id()),
            "0x12ff340d0cd9c652c747ca35727e68c547d0f0bfa7758d2e77f75acef481b4f2"
        );
        assert_eq!(
            bytes32_to_hex(&Role::Burner.id()),
            "0x3c11d16cbaffd01df69ce1c404f6340ee057498f5f00246190ea54220576a848"
        );
    }

    #[test]
    fn test_enumeration_follows_grant_order() {
        let mut deps = mock_dependencies();
        let role = Role::Relayer.id();
        for name in ["terra1a", "terra1b", "terra1c"] {
            assert!(grant_role(deps.as_mut().storage, &role, &Addr::unchecked(name)).unwrap());
        }
        // Granting twice is a no-op
        assert!(!grant_role(deps.as_mut().storage, &role, &Addr::unchecked("terra1b")).unwrap());

        assert_eq!(members(&deps.storage, &role), vec!["terra1a", "terra1b", "terra1c"]);
    }

    #[test]
    fn test_revoke_swaps_last_member_in() {
        let mut deps = mock_dependencies();
        let role = Role::Minter.id();
        for name in ["terra1a", "terra1b", "terra1c"] {
            grant_role(deps.as_mut().storage, &role, &Addr::unchecked(name)).unwrap();
        }

        assert!(revoke_role(deps.as_mut().storage, &role, &Addr::unchecked("terra1a")).unwrap());
        assert_eq!(members(&deps.storage, &role), vec!["terra1c", "terra1b"]);
        assert!(!has_role(&deps.storage, &role, &Addr::unchecked("terra1a")).unwrap());

        // The moved member can still be revoked through its new index
        assert!(revoke_role(deps.as_mut().storage, &role, &Addr::unchecked("terra1c")).unwrap());
        assert_eq!(members(&deps.storage, &role), vec!["terra1b"]);

        assert!(!revoke_role(deps.as_mut().storage, &role, &Addr::unchecked("terra1c")).unwrap());
        assert!(role_member(&deps.storage, &role, 1).is_err());
    }

    #[test]
    fn test_grant_requires_admin() {
        let mut deps = mock_dependencies();
        let admin = Addr::unchecked("terra1admin");
        grant_role(deps.as_mut().storage, &DEFAULT_ADMIN_ROLE, &admin).unwrap();

        let err = execute_grant_role(
            deps.as_mut(),
            mock_info("terra1user", &[]),
            Role::Minter.id_binary(),
            "terra1user".to_string(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ContractError::Unauthorized {
                account: "terra1user".to_string(),
                role: bytes32_to_hex(&DEFAULT_ADMIN_ROLE),
            }
        );

        let res = execute_grant_role(
            deps.as_mut(),
            mock_info("terra1admin", &[]),
            Role::Minter.id_binary(),
            "terra1user".to_string(),
        )
        .unwrap();
        assert_eq!(res.events.len(), 1);
        assert_eq!(res.events[0].ty, "role_granted");
        assert!(has_role(&deps.storage, &Role::Minter.id(), &Addr::unchecked("terra1user")).unwrap());
    }

    #[test]
    fn test_renounce_role() {
        let mut deps = mock_dependencies();
        let user = Addr::unchecked("terra1user");
        grant_role(deps.as_mut().storage, &Role::Burner.id(), &user).unwrap();

        execute_renounce_role(deps.as_mut(), mock_info("terra1user", &[]), Role::Burner.id_binary())
            .unwrap();
        assert!(!has_role(&deps.storage, &Role::Burner.id(), &user).unwrap());
    }

    #[test]
    fn test_role_id_length_checked() {
        let err = parse_role_id(&Binary::from(vec![1u8; 20])).unwrap_err();
        assert_eq!(err, ContractError::InvalidHashLength { got: 20 });
    }
}
