use tswap_std::{
    accounts::swap_state::SwapState,
    create::CreateSwapArgs,
    err::SwapClientErr,
    instructions::{
        create_account::CreateAccountIxData,
        initialize::{InitializeIxArgs, InitializeIxData, INITIALIZE_IX_DISCM},
    },
    keys::SYSTEM_PROGRAM_ID,
    ledger::Account,
    pda::find_authority,
    SwapClient,
};

use crate::common::{
    create_pda, find_pda, swap_record, MockErr, MockLedger, FEE_ACCOUNT, MINT_A, MINT_B, PAYER,
    POOL_MINT, RENT_EXEMPT_LAMPORTS, SWAP, TOKEN_ACCOUNT_A, TOKEN_ACCOUNT_B, TOKEN_PROGRAM,
};

const DESTINATION_POOL_ACCOUNT: [u8; 32] = [0xD1; 32];

fn create_args() -> CreateSwapArgs {
    let (authority, nonce) = find_authority(find_pda, &SWAP, &tswap_std::ID).unwrap();
    CreateSwapArgs {
        program_id: tswap_std::ID,
        authority,
        token_account_a: TOKEN_ACCOUNT_A,
        token_account_b: TOKEN_ACCOUNT_B,
        token_pool: POOL_MINT,
        mint_a: MINT_A,
        mint_b: MINT_B,
        fee_account: FEE_ACCOUNT,
        destination_pool_account: DESTINATION_POOL_ACCOUNT,
        token_program_id: TOKEN_PROGRAM,
        ix_args: InitializeIxArgs {
            trade_fee_numerator: 25,
            trade_fee_denominator: 10_000,
            owner_trade_fee_numerator: 5,
            owner_trade_fee_denominator: 10_000,
            host_fee_numerator: 20,
            host_fee_denominator: 100,
            ..Default::default()
        },
        nonce,
    }
}

#[tokio::test]
async fn create_then_initialize_atomically() {
    let ledger = MockLedger::default();
    let args = create_args();
    let (client, confirmation) = SwapClient::create_new(&ledger, PAYER, &SWAP, &args)
        .await
        .unwrap();
    assert_eq!(confirmation, 0);

    assert_eq!(ledger.rent_queries(), [324]);

    let subs = ledger.submissions();
    assert_eq!(subs.len(), 1);
    let sub = &subs[0];
    assert_eq!(sub.signers, [PAYER, SWAP]);

    let [create, init] = sub.ixs.as_slice() else {
        panic!("expected 2 ixs, got {}", sub.ixs.len());
    };

    assert_eq!(create.program_id, SYSTEM_PROGRAM_ID);
    assert_eq!(create.accounts[0].pubkey, PAYER);
    assert_eq!(create.accounts[1].pubkey, SWAP);
    assert!(create.accounts.iter().all(|m| m.is_signer && m.is_writable));
    let create_args = CreateAccountIxData::parse_no_discm(create.data[4..].try_into().unwrap());
    assert_eq!(create_args.lamports, RENT_EXEMPT_LAMPORTS);
    assert_eq!(create_args.space, 324);
    assert_eq!(create_args.owner, tswap_std::ID);

    assert_eq!(init.program_id, tswap_std::ID);
    assert_eq!(init.discm(), Some(INITIALIZE_IX_DISCM));
    assert_eq!(init.accounts[0].pubkey, SWAP);
    assert_eq!(init.accounts[1].pubkey, args.authority);
    assert_eq!(init.accounts[6].pubkey, DESTINATION_POOL_ACCOUNT);
    let init_args = InitializeIxData::parse_no_discm(init.data[1..].try_into().unwrap());
    assert_eq!(init_args.nonce, args.nonce);
    assert_eq!(init_args.trade_fee_denominator, 10_000);

    assert_eq!(client.authority(), &args.authority);
    assert_eq!(client.swap_addr(), &SWAP);
    assert!(client.state().is_initialized);
}

#[tokio::test]
async fn created_state_matches_what_load_would_decode() {
    let ledger = MockLedger::default();
    let args = create_args();
    let (created, _) = SwapClient::create_new(&ledger, PAYER, &SWAP, &args)
        .await
        .unwrap();

    let fetched = MockLedger::default().with_account(
        SWAP,
        Account {
            owner: tswap_std::ID,
            data: swap_record(1, args.nonce, 0).into_boxed_slice(),
        },
    );
    let loaded = SwapClient::load_existing(&fetched, PAYER, tswap_std::ID, SWAP, create_pda)
        .await
        .unwrap();

    assert_eq!(created.authority(), loaded.authority());
    assert_eq!(created.state(), loaded.state());
    assert_eq!(
        created.state(),
        &SwapState {
            curve_parameters: [0; 32],
            ..args.expected_state()
        }
    );
}

#[tokio::test]
async fn submit_err_passthrough() {
    let ledger = MockLedger {
        submit_err: Some(MockErr("blockhash not found")),
        ..Default::default()
    };
    let res = SwapClient::create_new(&ledger, PAYER, &SWAP, &create_args()).await;
    assert_eq!(
        res.err(),
        Some(SwapClientErr::Ledger(MockErr("blockhash not found")))
    );
    assert_eq!(ledger.rent_queries(), [324]);
}
