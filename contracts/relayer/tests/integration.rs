//! Integration tests for the relayer driving a Daily COP child token.

use common::eip712::{permit_digest, PermitDomain, PermitMessage};
use common::roles::Role;
use common::ContractError;
use cosmwasm_std::{Addr, Binary, Uint256};
use cw_multi_test::{App, ContractWrapper, Executor};
use k256::ecdsa::SigningKey;

use relayer::msg::{
    ConfigResponse, CostResponse, ExecuteMsg, HasRoleResponse, InstantiateMsg, QueryMsg,
    RoleMemberCountResponse, RoleMemberResponse,
};
use token_child::msg::{
    AllowanceResponse, BalanceResponse, ExecuteMsg as TokenExecuteMsg,
    InstantiateMsg as TokenInstantiateMsg, NoncesResponse, QueryMsg as TokenQueryMsg,
};

const HOLDER: &str = "0x7e5f4552091a69125d5dfcb7b8c2659029395bdf";

// ============================================================================
// Test Setup
// ============================================================================

fn contract_token() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        token_child::contract::execute,
        token_child::contract::instantiate,
        token_child::contract::query,
    );
    Box::new(contract)
}

fn contract_relayer() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        relayer::contract::execute,
        relayer::contract::instantiate,
        relayer::contract::query,
    );
    Box::new(contract)
}

fn ether(n: u128) -> Uint256 {
    Uint256::from(n) * Uint256::from(1_000_000_000_000_000_000u128)
}

struct Suite {
    app: App,
    token: Addr,
    relayer: Addr,
    admin: Addr,
    operator: Addr,
}

/// Child token with `minted` tokens on HOLDER, and a relayer with the default cost
fn setup(minted: Uint256) -> Suite {
    let mut app = App::default();
    let admin = Addr::unchecked("terra1admin");
    let operator = Addr::unchecked("terra1operator");

    let token_code = app.store_code(contract_token());
    let token = app
        .instantiate_contract(
            token_code,
            admin.clone(),
            &TokenInstantiateMsg {
                admin: admin.to_string(),
                minter: admin.to_string(),
                child_chain_manager: "terra1manager".to_string(),
            },
            &[],
            "dailycop-child",
            None,
        )
        .unwrap();

    app.execute_contract(
        admin.clone(),
        token.clone(),
        &TokenExecuteMsg::Mint {
            recipient: HOLDER.to_string(),
            amount: minted,
        },
        &[],
    )
    .unwrap();

    let relayer_code = app.store_code(contract_relayer());
    let relayer = app
        .instantiate_contract(
            relayer_code,
            admin.clone(),
            &InstantiateMsg {
                admin: admin.to_string(),
                relayer: operator.to_string(),
                token: token.to_string(),
                cost: None,
            },
            &[],
            "dailycop-relayer",
            Some(admin.to_string()),
        )
        .unwrap();

    Suite {
        app,
        token,
        relayer,
        admin,
        operator,
    }
}

impl Suite {
    /// HOLDER's permit for the relayer contract
    fn sign_permit(&self, value: Uint256, nonce: u64, deadline: u64) -> Binary {
        let chain_id = self.app.block_info().chain_id;
        let digest = permit_digest(
            &PermitDomain::daily_cop(&chain_id, self.token.as_str()),
            &PermitMessage {
                owner: HOLDER,
                spender: self.relayer.as_str(),
                value,
                nonce,
                deadline,
            },
        );
        let mut secret = [0u8; 32];
        secret[31] = 1;
        let key = SigningKey::from_slice(&secret).unwrap();
        let (signature, recovery_id) = key.sign_prehash_recoverable(&digest).unwrap();
        let mut bytes = signature.to_bytes().to_vec();
        bytes.push(27 + recovery_id.to_byte());
        Binary::from(bytes)
    }

    fn deadline(&self) -> u64 {
        self.app.block_info().time.seconds() + 3600
    }

    fn balance(&self, address: &str) -> Uint256 {
        let res: BalanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                &self.token,
                &TokenQueryMsg::Balance {
                    address: address.to_string(),
                },
            )
            .unwrap();
        res.balance
    }

    fn nonce(&self) -> u64 {
        let res: NoncesResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                &self.token,
                &TokenQueryMsg::Nonces {
                    owner: HOLDER.to_string(),
                },
            )
            .unwrap();
        res.nonce
    }

    fn relay(
        &mut self,
        sender: &Addr,
        recipient: &str,
        value: Uint256,
    ) -> anyhow::Result<cw_multi_test::AppResponse> {
        let deadline = self.deadline();
        let signature = self.sign_permit(value, self.nonce(), deadline);
        self.app.execute_contract(
            sender.clone(),
            self.relayer.clone(),
            &ExecuteMsg::TransferWithPermit {
                owner: HOLDER.to_string(),
                recipient: recipient.to_string(),
                value,
                deadline,
                signature,
            },
            &[],
        )
    }
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_instantiate_roles_and_cost() {
    let suite = setup(ether(1));

    let cost: CostResponse = suite
        .app
        .wrap()
        .query_wasm_smart(&suite.relayer, &QueryMsg::Cost {})
        .unwrap();
    assert_eq!(cost.cost, ether(100));

    let config: ConfigResponse = suite
        .app
        .wrap()
        .query_wasm_smart(&suite.relayer, &QueryMsg::Config {})
        .unwrap();
    assert_eq!(config.token, suite.token);
    assert_eq!(config.cost, ether(100));

    for (role, account) in [
        (Role::DefaultAdmin, "terra1admin"),
        (Role::Relayer, "terra1operator"),
    ] {
        let res: HasRoleResponse = suite
            .app
            .wrap()
            .query_wasm_smart(
                &suite.relayer,
                &QueryMsg::HasRole {
                    role: role.id_binary(),
                    account: account.to_string(),
                },
            )
            .unwrap();
        assert!(res.has_role);
    }
}

#[test]
fn test_list_relayers() {
    let mut suite = setup(ether(1));
    suite
        .app
        .execute_contract(
            suite.admin.clone(),
            suite.relayer.clone(),
            &ExecuteMsg::GrantRole {
                role: Role::Relayer.id_binary(),
                account: "terra1second".to_string(),
            },
            &[],
        )
        .unwrap();

    let count: RoleMemberCountResponse = suite
        .app
        .wrap()
        .query_wasm_smart(
            &suite.relayer,
            &QueryMsg::RoleMemberCount {
                role: Role::Relayer.id_binary(),
            },
        )
        .unwrap();
    assert_eq!(count.count, 2);

    let relayers: Vec<Addr> = (0..count.count)
        .map(|index| {
            let res: RoleMemberResponse = suite
                .app
                .wrap()
                .query_wasm_smart(
                    &suite.relayer,
                    &QueryMsg::RoleMember {
                        role: Role::Relayer.id_binary(),
                        index,
                    },
                )
                .unwrap();
            res.member
        })
        .collect();
    assert_eq!(
        relayers,
        vec![
            Addr::unchecked("terra1operator"),
            Addr::unchecked("terra1second")
        ]
    );
}

// ============================================================================
// TransferWithPermit
// ============================================================================

#[test]
fn test_split_between_relayer_and_recipient() {
    let minted = ether(99_999_999);
    let mut suite = setup(minted);
    let operator = suite.operator.clone();

    suite.relay(&operator, "terra1recipient", minted).unwrap();

    assert_eq!(suite.balance("terra1operator"), ether(100));
    assert_eq!(suite.balance("terra1recipient"), minted - ether(100));
    assert_eq!(suite.balance(HOLDER), Uint256::zero());
    assert_eq!(suite.nonce(), 1);

    let allowance: AllowanceResponse = suite
        .app
        .wrap()
        .query_wasm_smart(
            &suite.token,
            &TokenQueryMsg::Allowance {
                owner: HOLDER.to_string(),
                spender: suite.relayer.to_string(),
            },
        )
        .unwrap();
    assert_eq!(allowance.allowance, Uint256::zero());
}

#[test]
fn test_value_equal_to_cost_rejected() {
    let mut suite = setup(ether(1_000));
    let operator = suite.operator.clone();

    let res = suite.relay(&operator, "terra1recipient", ether(100));
    let err_str = res.unwrap_err().root_cause().to_string();
    assert_eq!(err_str, ContractError::InsufficientValue.to_string());
    assert_eq!(
        err_str,
        "The value is not enough to cover the cost and a transfer"
    );
    assert_eq!(suite.nonce(), 0);
}

#[test]
fn test_only_relayer_role() {
    let mut suite = setup(ether(1_000));
    let outsider = Addr::unchecked("terra1outsider");

    let res = suite.relay(&outsider, "terra1recipient", ether(500));
    let err_str = res.unwrap_err().root_cause().to_string();
    assert_eq!(
        err_str,
        ContractError::Unauthorized {
            account: outsider.to_string(),
            role: format!("0x{}", hex::encode(Role::Relayer.id())),
        }
        .to_string()
    );
    assert_eq!(suite.balance(HOLDER), ether(1_000));
}

#[test]
fn test_failed_transfer_reverts_permit_and_fee() {
    let mut suite = setup(ether(1_000));
    let operator = suite.operator.clone();
    let token = suite.token.to_string();

    // Last sub-message fails; the permit and the fee transfer before it must not persist
    let res = suite.relay(&operator, &token, ether(500));
    let err_str = res.unwrap_err().root_cause().to_string();
    assert_eq!(err_str, ContractError::SelfAddressRecipient.to_string());

    assert_eq!(suite.nonce(), 0);
    assert_eq!(suite.balance(HOLDER), ether(1_000));
    assert_eq!(suite.balance("terra1operator"), Uint256::zero());
}

#[test]
fn test_expired_permit_propagates() {
    let mut suite = setup(ether(1_000));
    let deadline = suite.app.block_info().time.seconds() - 1;
    let signature = suite.sign_permit(ether(500), 0, deadline);

    let res = suite.app.execute_contract(
        suite.operator.clone(),
        suite.relayer.clone(),
        &ExecuteMsg::TransferWithPermit {
            owner: HOLDER.to_string(),
            recipient: "terra1recipient".to_string(),
            value: ether(500),
            deadline,
            signature,
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.starts_with("Permit expired"));
    assert_eq!(suite.balance(HOLDER), ether(1_000));
}

#[test]
fn test_signature_for_other_value_rejected() {
    let mut suite = setup(ether(1_000));
    let deadline = suite.deadline();
    let signature = suite.sign_permit(ether(200), 0, deadline);

    let res = suite.app.execute_contract(
        suite.operator.clone(),
        suite.relayer.clone(),
        &ExecuteMsg::TransferWithPermit {
            owner: HOLDER.to_string(),
            recipient: "terra1recipient".to_string(),
            value: ether(900),
            deadline,
            signature,
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert_eq!(err_str, ContractError::InvalidSignature.to_string());
    assert_eq!(suite.balance(HOLDER), ether(1_000));
}

#[test]
fn test_revoked_relayer_rejected() {
    let mut suite = setup(ether(1_000));
    let operator = suite.operator.clone();
    suite
        .app
        .execute_contract(
            suite.admin.clone(),
            suite.relayer.clone(),
            &ExecuteMsg::RevokeRole {
                role: Role::Relayer.id_binary(),
                account: operator.to_string(),
            },
            &[],
        )
        .unwrap();

    let res = suite.relay(&operator, "terra1recipient", ether(500));
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("missing role"));
}
