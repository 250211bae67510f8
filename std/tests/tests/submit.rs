use proptest::prelude::*;
use tswap_std::{
    err::{EncodingErr, OverflowErr, SwapClientErr},
    instruction::{AccountMeta, Instruction},
    num_bigint::BigUint,
    trade::{DepositAllArgs, DepositSingleArgs, SwapArgs, WithdrawAllArgs, WithdrawSingleArgs},
    typedefs::unsigned64::Unsigned64,
    SwapClient,
};

use crate::common::{
    create_pda, initialized_swap_account, swap_authority, MockErr, MockLedger, FEE_ACCOUNT, PAYER,
    POOL_MINT, SWAP, TOKEN_ACCOUNT_A, TOKEN_ACCOUNT_B, TOKEN_PROGRAM,
};

const USER_A: [u8; 32] = [0x11; 32];

const USER_B: [u8; 32] = [0x22; 32];

const USER_POOL: [u8; 32] = [0x33; 32];

const HOST_FEE: [u8; 32] = [0x44; 32];

fn client(ledger: &MockLedger) -> SwapClient<&MockLedger, [u8; 32]> {
    SwapClient::from_fetched(
        ledger,
        PAYER,
        tswap_std::ID,
        SWAP,
        &initialized_swap_account(),
        create_pda,
    )
    .unwrap()
}

fn only_submission(ledger: &MockLedger) -> Instruction {
    let mut subs = ledger.submissions();
    assert_eq!(subs.len(), 1);
    let sub = subs.pop().unwrap();
    assert_eq!(sub.signers, [PAYER]);
    assert_eq!(sub.ixs.len(), 1);
    sub.ixs.into_iter().next().unwrap()
}

fn pubkeys(ix: &Instruction) -> Vec<[u8; 32]> {
    ix.accounts.iter().map(|m| m.pubkey).collect()
}

fn swap_args(host_fee_account: Option<[u8; 32]>) -> SwapArgs {
    SwapArgs {
        user_source: USER_A,
        pool_source: TOKEN_ACCOUNT_A,
        pool_destination: TOKEN_ACCOUNT_B,
        user_destination: USER_B,
        host_fee_account,
        amount_in: Unsigned64::from(1_000_000),
        minimum_amount_out: Unsigned64::from(1),
    }
}

#[tokio::test]
async fn swap_submits_one_ix() {
    let ledger = MockLedger::default();
    let c = client(&ledger);
    assert_eq!(c.swap(&swap_args(None)).await, Ok(0));

    let ix = only_submission(&ledger);
    assert_eq!(ix, c.swap_ix(&swap_args(None)).unwrap());
    assert_eq!(ix.program_id, tswap_std::ID);
    assert_eq!(ix.data.len(), 17);
    assert_eq!(
        pubkeys(&ix),
        [
            SWAP,
            swap_authority().0,
            USER_A,
            TOKEN_ACCOUNT_A,
            TOKEN_ACCOUNT_B,
            USER_B,
            POOL_MINT,
            FEE_ACCOUNT,
            TOKEN_PROGRAM,
        ]
    );
}

#[tokio::test]
async fn swap_with_host_fee() {
    let ledger = MockLedger::default();
    let c = client(&ledger);
    c.swap(&swap_args(Some(HOST_FEE))).await.unwrap();

    let ix = only_submission(&ledger);
    assert_eq!(ix.accounts.len(), 10);
    assert_eq!(ix.accounts.last(), Some(&AccountMeta::writable(HOST_FEE)));
}

#[tokio::test]
async fn deposit_all() {
    let ledger = MockLedger::default();
    let c = client(&ledger);
    c.deposit_all_token_types(&DepositAllArgs {
        user_account_a: USER_A,
        user_account_b: USER_B,
        pool_account: USER_POOL,
        pool_token_amount: Unsigned64::from(100),
        maximum_token_a_amount: Unsigned64::from(200),
        maximum_token_b_amount: Unsigned64::from(300),
    })
    .await
    .unwrap();

    let ix = only_submission(&ledger);
    assert_eq!(ix.discm(), Some(2));
    assert_eq!(ix.data.len(), 25);
    assert_eq!(
        pubkeys(&ix),
        [
            SWAP,
            swap_authority().0,
            USER_A,
            USER_B,
            TOKEN_ACCOUNT_A,
            TOKEN_ACCOUNT_B,
            POOL_MINT,
            USER_POOL,
            TOKEN_PROGRAM,
        ]
    );
}

#[tokio::test]
async fn withdraw_all() {
    let ledger = MockLedger::default();
    let c = client(&ledger);
    c.withdraw_all_token_types(&WithdrawAllArgs {
        user_account_a: USER_A,
        user_account_b: USER_B,
        pool_account: USER_POOL,
        pool_token_amount: Unsigned64::from(100),
        ..Default::default()
    })
    .await
    .unwrap();

    let ix = only_submission(&ledger);
    assert_eq!(ix.discm(), Some(3));
    assert_eq!(ix.data.len(), 25);
    assert_eq!(
        pubkeys(&ix),
        [
            SWAP,
            swap_authority().0,
            POOL_MINT,
            USER_POOL,
            TOKEN_ACCOUNT_A,
            TOKEN_ACCOUNT_B,
            USER_A,
            USER_B,
            FEE_ACCOUNT,
            TOKEN_PROGRAM,
        ]
    );
}

#[tokio::test]
async fn deposit_single() {
    let ledger = MockLedger::default();
    let c = client(&ledger);
    c.deposit_single_token_type_exact_amount_in(&DepositSingleArgs {
        user_account: USER_B,
        pool_account: USER_POOL,
        source_token_amount: Unsigned64::from(10),
        minimum_pool_token_amount: Unsigned64::from(9),
    })
    .await
    .unwrap();

    let ix = only_submission(&ledger);
    assert_eq!(ix.discm(), Some(4));
    assert_eq!(ix.data.len(), 17);
    assert_eq!(
        pubkeys(&ix),
        [
            SWAP,
            swap_authority().0,
            USER_B,
            TOKEN_ACCOUNT_A,
            TOKEN_ACCOUNT_B,
            POOL_MINT,
            USER_POOL,
            TOKEN_PROGRAM,
        ]
    );
}

#[tokio::test]
async fn withdraw_single() {
    let ledger = MockLedger::default();
    let c = client(&ledger);
    c.withdraw_single_token_type_exact_amount_out(&WithdrawSingleArgs {
        user_account: USER_A,
        pool_account: USER_POOL,
        destination_token_amount: Unsigned64::from(10),
        maximum_pool_token_amount: Unsigned64::from(11),
    })
    .await
    .unwrap();

    let ix = only_submission(&ledger);
    assert_eq!(ix.discm(), Some(5));
    assert_eq!(ix.data.len(), 17);
    assert_eq!(
        pubkeys(&ix),
        [
            SWAP,
            swap_authority().0,
            POOL_MINT,
            USER_POOL,
            TOKEN_ACCOUNT_A,
            TOKEN_ACCOUNT_B,
            USER_A,
            FEE_ACCOUNT,
            TOKEN_PROGRAM,
        ]
    );
}

#[tokio::test]
async fn submit_err_passthrough() {
    let ledger = MockLedger {
        submit_err: Some(MockErr("insufficient funds")),
        ..Default::default()
    };
    let c = client(&ledger);
    assert_eq!(
        c.swap(&swap_args(None)).await,
        Err(SwapClientErr::Ledger(MockErr("insufficient funds")))
    );
}

#[tokio::test]
async fn unencodable_amount_never_submitted() {
    let ledger = MockLedger::default();
    let c = client(&ledger);
    let res = c
        .swap(&SwapArgs {
            amount_in: Unsigned64::new(BigUint::from(1u8) << 64usize),
            ..swap_args(None)
        })
        .await;
    assert_eq!(
        res,
        Err(SwapClientErr::Encoding(EncodingErr {
            field: "amount_in",
            overflow: OverflowErr { byte_len: 9 }
        }))
    );
    assert!(ledger.submissions().is_empty());
}

proptest! {
    #[test]
    fn amounts_encoded_le_in_declared_order(x: u64, y: u64, z: u64) {
        let ledger = MockLedger::default();
        let c = client(&ledger);

        let swap = c
            .swap_ix(&SwapArgs {
                amount_in: x.into(),
                minimum_amount_out: y.into(),
                ..swap_args(None)
            })
            .unwrap();
        prop_assert_eq!(swap.discm(), Some(1));
        prop_assert_eq!(&swap.data[1..9], &x.to_le_bytes());
        prop_assert_eq!(&swap.data[9..17], &y.to_le_bytes());

        let deposit = c
            .deposit_all_token_types_ix(&DepositAllArgs {
                user_account_a: USER_A,
                user_account_b: USER_B,
                pool_account: USER_POOL,
                pool_token_amount: x.into(),
                maximum_token_a_amount: y.into(),
                maximum_token_b_amount: z.into(),
            })
            .unwrap();
        prop_assert_eq!(deposit.discm(), Some(2));
        prop_assert_eq!(&deposit.data[1..9], &x.to_le_bytes());
        prop_assert_eq!(&deposit.data[9..17], &y.to_le_bytes());
        prop_assert_eq!(&deposit.data[17..25], &z.to_le_bytes());

        // building never submits
        prop_assert!(ledger.submissions().is_empty());
    }
}
