//! EIP-712 typed data hashing for token permits
//!
//! Produces the digest a wallet signs with `eth_signTypedData_v4` for the
//! following schema. Contract and chain identities on a CosmWasm chain are
//! strings, so they are declared as `string` and hashed like any dynamic
//! field.
//!
//! ```text
//! EIP712Domain(string name,string version,string chainId,string verifyingContract)
//! Permit(string owner,string spender,uint256 value,uint256 nonce,uint256 deadline)
//! ```
//!
//! # Byte Layout
//! - domainSeparator = keccak256(typeHash ‖ keccak(name) ‖ keccak(version) ‖ keccak(chainId) ‖ keccak(verifyingContract))
//! - structHash      = keccak256(typeHash ‖ keccak(owner) ‖ keccak(spender) ‖ value ‖ nonce ‖ deadline)
//! - digest          = keccak256(0x19 ‖ 0x01 ‖ domainSeparator ‖ structHash)
//!
//! All uint256 words are big-endian and left-padded to 32 bytes.

use cosmwasm_std::Uint256;
use tiny_keccak::{Hasher, Keccak};

/// Token name bound into the permit domain
pub const PERMIT_DOMAIN_NAME: &str = "DailyCopToken";

/// Permit domain version
pub const PERMIT_DOMAIN_VERSION: &str = "1";

pub const DOMAIN_TYPE: &str =
    "EIP712Domain(string name,string version,string chainId,string verifyingContract)";

pub const PERMIT_TYPE: &str =
    "Permit(string owner,string spender,uint256 value,uint256 nonce,uint256 deadline)";

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Domain fields of a permit signature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermitDomain<'a> {
    pub name: &'a str,
    pub version: &'a str,
    pub chain_id: &'a str,
    pub verifying_contract: &'a str,
}

impl<'a> PermitDomain<'a> {
    /// Domain of the Daily COP token deployed at `verifying_contract` on `chain_id`
    pub fn daily_cop(chain_id: &'a str, verifying_contract: &'a str) -> Self {
        Self {
            name: PERMIT_DOMAIN_NAME,
            version: PERMIT_DOMAIN_VERSION,
            chain_id,
            verifying_contract,
        }
    }

    pub fn separator(&self) -> [u8; 32] {
        let mut data = [0u8; 160];
        data[0..32].copy_from_slice(&keccak256(DOMAIN_TYPE.as_bytes()));
        data[32..64].copy_from_slice(&keccak256(self.name.as_bytes()));
        data[64..96].copy_from_slice(&keccak256(self.version.as_bytes()));
        data[96..128].copy_from_slice(&keccak256(self.chain_id.as_bytes()));
        data[128..160].copy_from_slice(&keccak256(self.verifying_contract.as_bytes()));
        keccak256(&data)
    }
}

/// Fields of a single permit, nonce included
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermitMessage<'a> {
    pub owner: &'a str,
    pub spender: &'a str,
    pub value: Uint256,
    pub nonce: u64,
    pub deadline: u64,
}

impl PermitMessage<'_> {
    pub fn struct_hash(&self) -> [u8; 32] {
        let mut data = [0u8; 192];
        data[0..32].copy_from_slice(&keccak256(PERMIT_TYPE.as_bytes()));
        data[32..64].copy_from_slice(&keccak256(self.owner.as_bytes()));
        data[64..96].copy_from_slice(&keccak256(self.spender.as_bytes()));
        data[96..128].copy_from_slice(&self.value.to_be_bytes());
        data[128..160].copy_from_slice(&u64_word(self.nonce));
        data[160..192].copy_from_slice(&u64_word(self.deadline));
        keccak256(&data)
    }
}

/// Compute the digest to be signed for `message` under `domain`
pub fn permit_digest(domain: &PermitDomain, message: &PermitMessage) -> [u8; 32] {
    let mut data = [0u8; 66];
    data[0] = 0x19;
    data[1] = 0x01;
    data[2..34].copy_from_slice(&domain.separator());
    data[34..66].copy_from_slice(&message.struct_hash());
    keccak256(&data)
}

/// Decode a single ABI-encoded `uint256`. Returns `None` unless the input is
/// exactly one 32-byte word.
pub fn abi_decode_uint256(data: &[u8]) -> Option<Uint256> {
    let word: [u8; 32] = data.try_into().ok()?;
    Some(Uint256::from_be_bytes(word))
}

/// ABI-encode a single `uint256`
pub fn abi_encode_uint256(value: Uint256) -> [u8; 32] {
    value.to_be_bytes()
}

/// Convert 32-byte hash to hex string (for attributes)
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}

// uint256 word - u64 goes into bytes 24-31, bytes 0-23 remain zero
fn u64_word(value: u64) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[24..].copy_from_slice(&value.to_be_bytes());
    word
}
