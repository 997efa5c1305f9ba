//! Signed allowance grants
//!
//! An EVM key holder signs an EIP-712 `Permit` off-chain; anyone may submit
//! it. The per-owner nonce is part of the signed struct, so a permit is
//! accepted at most once.

use cosmwasm_std::{Addr, Api, Binary, Deps, DepsMut, Env, Response, StdResult, Uint256};
use cw_storage_plus::Map;

use crate::address::{encode_evm_address, evm_address_from_pubkey, validate_account};
use crate::eip712::{permit_digest, PermitDomain, PermitMessage};
use crate::error::ContractError;
use crate::ledger::{approval_event, increase_allowance};
use crate::msg::{DomainSeparatorResponse, NoncesResponse};

/// Key: owner, Value: nonce of the next permit
pub const NONCES: Map<&Addr, u64> = Map::new("permit_nonces");

/// secp256k1 group order divided by two. Signatures with a larger `s` are
/// malleable twins of a low-`s` signature.
const SECP256K1_HALF_ORDER: [u8; 32] = [
    0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0x5d, 0x57, 0x6e, 0x73, 0x57, 0xa4, 0x50, 0x1d, 0xdf, 0xe9, 0x2f, 0x46, 0x68, 0x1b, 0x20, 0xa0,
];

pub fn nonce_of(deps: Deps, owner: &Addr) -> StdResult<u64> {
    Ok(NONCES.may_load(deps.storage, owner)?.unwrap_or(0))
}

/// Domain of this token contract
pub fn domain(env: &Env) -> PermitDomain<'_> {
    PermitDomain::daily_cop(&env.block.chain_id, env.contract.address.as_str())
}

/// Recover the EVM address that produced a 65-byte `r || s || v` signature
/// over `digest`.
pub fn recover_signer(
    api: &dyn Api,
    digest: &[u8; 32],
    signature: &[u8],
) -> Result<Addr, ContractError> {
    if signature.len() != 65 {
        return Err(ContractError::InvalidSignature);
    }
    let recovery_param = match signature[64] {
        0 | 27 => 0,
        1 | 28 => 1,
        _ => return Err(ContractError::InvalidSignature),
    };
    if signature[32..64] > SECP256K1_HALF_ORDER[..] {
        return Err(ContractError::InvalidSignature);
    }

    let pubkey = api
        .secp256k1_recover_pubkey(digest, &signature[..64], recovery_param)
        .map_err(|_| ContractError::InvalidSignature)?;
    let signer = evm_address_from_pubkey(&pubkey).map_err(|_| ContractError::InvalidSignature)?;
    Ok(Addr::unchecked(encode_evm_address(&signer)))
}

/// Consume a signed permit: bump the owner's nonce and add `value` to the
/// spender's allowance.
pub fn execute_permit(
    deps: DepsMut,
    env: Env,
    owner: String,
    spender: String,
    value: Uint256,
    deadline: u64,
    signature: Binary,
) -> Result<Response, ContractError> {
    let now = env.block.time.seconds();
    if now > deadline {
        return Err(ContractError::ExpiredPermit { deadline, now });
    }

    let owner = validate_account(deps.api, &owner)?;
    let spender = validate_account(deps.api, &spender)?;
    let nonce = nonce_of(deps.as_ref(), &owner)?;

    let digest = permit_digest(
        &domain(&env),
        &PermitMessage {
            owner: owner.as_str(),
            spender: spender.as_str(),
            value,
            nonce,
            deadline,
        },
    );
    let signer = recover_signer(deps.api, &digest, signature.as_slice())?;
    if signer != owner {
        return Err(ContractError::InvalidSignature);
    }

    NONCES.save(deps.storage, &owner, &(nonce + 1))?;
    let allowance = increase_allowance(deps.storage, &owner, &spender, value)?;

    Ok(Response::new()
        .add_event(approval_event(&owner, &spender, allowance))
        .add_attribute("method", "permit")
        .add_attribute("owner", owner)
        .add_attribute("spender", spender)
        .add_attribute("value", value.to_string())
        .add_attribute("nonce", nonce.to_string()))
}

pub fn query_nonces(deps: Deps, owner: String) -> StdResult<NoncesResponse> {
    let owner = validate_account(deps.api, &owner)?;
    Ok(NoncesResponse {
        nonce: nonce_of(deps, &owner)?,
    })
}

pub fn query_domain_separator(env: Env) -> StdResult<DomainSeparatorResponse> {
    Ok(DomainSeparatorResponse {
        domain_separator: Binary::from(domain(&env).separator().to_vec()),
    })
}
