use tswap_std::{
    err::{SwapClientErr, TruncatedInputErr},
    ledger::Account,
    typedefs::{curve_type::CurveType, unsigned64::Unsigned64},
    SwapClient,
};

use crate::common::{
    create_pda, initialized_swap_account, swap_account, swap_authority, swap_record, MockErr,
    MockLedger, FEE_ACCOUNT, PAYER, POOL_MINT, SWAP, TOKEN_ACCOUNT_A,
};

async fn load(
    ledger: &MockLedger,
) -> Result<SwapClient<&MockLedger, [u8; 32]>, SwapClientErr<MockErr>> {
    SwapClient::load_existing(ledger, PAYER, tswap_std::ID, SWAP, create_pda).await
}

#[tokio::test]
async fn loads_initialized_swap() {
    let ledger = MockLedger::default().with_account(SWAP, initialized_swap_account());
    let client = load(&ledger).await.unwrap();

    let (authority, nonce) = swap_authority();
    assert_eq!(client.authority(), &authority);
    assert_eq!(client.state().nonce, nonce);
    assert_eq!(client.swap_addr(), &SWAP);
    assert_eq!(client.program_id(), &tswap_std::ID);
    assert_eq!(client.payer(), &PAYER);
    assert_eq!(client.state().token_account_a, TOKEN_ACCOUNT_A);
    assert_eq!(client.state().token_pool, POOL_MINT);
    assert_eq!(client.state().fee_account, FEE_ACCOUNT);
    assert_eq!(client.state().fees.trade.numerator, Unsigned64::from(25));
    assert_eq!(client.curve_type(), Some(CurveType::ConstantProduct));
    assert!(ledger.submissions().is_empty());
}

#[tokio::test]
async fn fee_ratios_of_loaded_swap() {
    let ledger = MockLedger::default().with_account(SWAP, initialized_swap_account());
    let fees = load(&ledger).await.unwrap().fee_ratios().unwrap();
    assert_eq!(
        [fees.trade, fees.owner_trade, fees.owner_withdraw, fees.host].map(|r| (r.n, r.d)),
        [(25, 10_000), (5, 10_000), (0, 0), (20, 100)]
    );
}

#[tokio::test]
async fn not_found() {
    let ledger = MockLedger::default();
    assert_eq!(
        load(&ledger).await.err(),
        Some(SwapClientErr::AccountNotFound { pk: SWAP })
    );
}

#[tokio::test]
async fn wrong_owner() {
    let other = [0x0E; 32];
    let ledger = MockLedger::default().with_account(
        SWAP,
        Account {
            owner: other,
            ..initialized_swap_account()
        },
    );
    assert_eq!(
        load(&ledger).await.err(),
        Some(SwapClientErr::OwnerMismatch {
            pk: SWAP,
            expected: tswap_std::ID,
            actual: other
        })
    );
}

#[tokio::test]
async fn truncated() {
    let mut data = swap_record(1, swap_authority().1, 0);
    data.truncate(100);
    let ledger = MockLedger::default().with_account(SWAP, swap_account(data));
    assert_eq!(
        load(&ledger).await.err(),
        Some(SwapClientErr::AccDeser {
            pk: SWAP,
            err: TruncatedInputErr {
                expected: 324,
                actual: 100
            }
        })
    );
}

#[tokio::test]
async fn uninitialized() {
    let ledger = MockLedger::default()
        .with_account(SWAP, swap_account(swap_record(0, swap_authority().1, 0)));
    assert_eq!(
        load(&ledger).await.err(),
        Some(SwapClientErr::UninitializedAccount { pk: SWAP })
    );
}

#[tokio::test]
async fn unknown_curve_type_still_loads() {
    let ledger = MockLedger::default()
        .with_account(SWAP, swap_account(swap_record(1, swap_authority().1, 9)));
    let client = load(&ledger).await.unwrap();
    assert_eq!(client.state().curve_type, 9);
    assert_eq!(client.curve_type(), None);
}

#[tokio::test]
async fn no_valid_pda() {
    let ledger = MockLedger::default().with_account(SWAP, initialized_swap_account());
    let res = SwapClient::load_existing(&ledger, PAYER, tswap_std::ID, SWAP, |_, _| None).await;
    assert_eq!(res.err(), Some(SwapClientErr::NoValidPda));
}

#[tokio::test]
async fn fetch_err_passthrough() {
    let ledger = MockLedger {
        fetch_err: Some(MockErr("rpc down")),
        ..Default::default()
    };
    assert_eq!(
        load(&ledger).await.err(),
        Some(SwapClientErr::Ledger(MockErr("rpc down")))
    );
}
