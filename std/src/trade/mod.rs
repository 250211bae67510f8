//! Per-variant user-facing args. The swap's own accounts come from the client.

use tswap_core::typedefs::unsigned64::Unsigned64;

pub mod instruction;
pub mod submit;

#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct SwapArgs {
    pub user_source: [u8; 32],

    /// The swap's reserves of the input token
    pub pool_source: [u8; 32],

    /// The swap's reserves of the output token
    pub pool_destination: [u8; 32],

    pub user_destination: [u8; 32],

    /// Pool token account to pay host fees to
    pub host_fee_account: Option<[u8; 32]>,

    pub amount_in: Unsigned64,
    pub minimum_amount_out: Unsigned64,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct DepositAllArgs {
    pub user_account_a: [u8; 32],
    pub user_account_b: [u8; 32],

    /// User's pool token account
    pub pool_account: [u8; 32],

    pub pool_token_amount: Unsigned64,
    pub maximum_token_a_amount: Unsigned64,
    pub maximum_token_b_amount: Unsigned64,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct WithdrawAllArgs {
    pub user_account_a: [u8; 32],
    pub user_account_b: [u8; 32],

    /// User's pool token account
    pub pool_account: [u8; 32],

    pub pool_token_amount: Unsigned64,
    pub minimum_token_a_amount: Unsigned64,
    pub minimum_token_b_amount: Unsigned64,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct DepositSingleArgs {
    /// User's token A or token B account
    pub user_account: [u8; 32],

    /// User's pool token account
    pub pool_account: [u8; 32],

    pub source_token_amount: Unsigned64,
    pub minimum_pool_token_amount: Unsigned64,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct WithdrawSingleArgs {
    /// User's token A or token B account
    pub user_account: [u8; 32],

    /// User's pool token account
    pub pool_account: [u8; 32],

    pub destination_token_amount: Unsigned64,
    pub maximum_pool_token_amount: Unsigned64,
}
