use generic_array_struct::generic_array_struct;

use crate::{
    codec::{caba, csba},
    instruction::{keys_signer_writable_to_metas, Instruction},
    instructions::internal_utils::impl_accs_common,
    typedefs::fee_ratio::{FeeRatio, Fees},
};

// Accounts

#[generic_array_struct(builder pub)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct InitializeIxAccs<T> {
    /// New, uninitialized swap state account
    pub swap: T,

    pub authority: T,

    /// Token A reserves, owned by `authority`
    pub token_account_a: T,

    /// Token B reserves, owned by `authority`
    pub token_account_b: T,

    /// Pool token mint, mint authority must be `authority`
    pub token_pool: T,

    pub fee_account: T,

    /// Receives the initial pool token supply
    pub destination_pool_account: T,

    pub token_program: T,
}

impl_accs_common!(InitializeIxAccs, INITIALIZE_IX_ACCS_LEN);

pub type InitializeIxKeysOwned = InitializeIxAccs<[u8; 32]>;

pub type InitializeIxAccFlags = InitializeIxAccs<bool>;

pub const INITIALIZE_IX_IS_WRITER: InitializeIxAccFlags = InitializeIxAccFlags::memset(false)
    .const_with_swap(true)
    .const_with_token_pool(true)
    .const_with_destination_pool_account(true);

pub const INITIALIZE_IX_IS_SIGNER: InitializeIxAccFlags = InitializeIxAccFlags::memset(false);

// Data

pub const INITIALIZE_IX_DISCM: u8 = 0;

pub const INITIALIZE_IX_DATA_LEN: usize = 99;

/// Fee and `amp` fields are plain u64s, unlike every other instruction's
/// [`crate::typedefs::unsigned64::Unsigned64`] amounts
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InitializeIxArgs {
    pub nonce: u8,
    pub trade_fee_numerator: u64,
    pub trade_fee_denominator: u64,
    pub owner_trade_fee_numerator: u64,
    pub owner_trade_fee_denominator: u64,
    pub owner_withdraw_fee_numerator: u64,
    pub owner_withdraw_fee_denominator: u64,
    pub host_fee_numerator: u64,
    pub host_fee_denominator: u64,
    pub curve_type: u8,
    pub amp: u64,

    /// Reserved
    pub curve_parameters: [u8; 24],
}

impl InitializeIxArgs {
    #[inline]
    pub fn fees(&self) -> Fees {
        Fees {
            trade: FeeRatio::from_u64s(self.trade_fee_numerator, self.trade_fee_denominator),
            owner_trade: FeeRatio::from_u64s(
                self.owner_trade_fee_numerator,
                self.owner_trade_fee_denominator,
            ),
            owner_withdraw: FeeRatio::from_u64s(
                self.owner_withdraw_fee_numerator,
                self.owner_withdraw_fee_denominator,
            ),
            host: FeeRatio::from_u64s(self.host_fee_numerator, self.host_fee_denominator),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct InitializeIxData([u8; INITIALIZE_IX_DATA_LEN]);

impl InitializeIxData {
    pub const DATA_LEN: usize = INITIALIZE_IX_DATA_LEN;

    #[inline]
    pub const fn new(
        InitializeIxArgs {
            nonce,
            trade_fee_numerator,
            trade_fee_denominator,
            owner_trade_fee_numerator,
            owner_trade_fee_denominator,
            owner_withdraw_fee_numerator,
            owner_withdraw_fee_denominator,
            host_fee_numerator,
            host_fee_denominator,
            curve_type,
            amp,
            curve_parameters,
        }: InitializeIxArgs,
    ) -> Self {
        const A: usize = INITIALIZE_IX_DATA_LEN;

        let mut d = [0u8; A];

        d = caba::<A, 0, 1>(d, &[INITIALIZE_IX_DISCM]);
        d = caba::<A, 1, 1>(d, &[nonce]);
        d = caba::<A, 2, 8>(d, &trade_fee_numerator.to_le_bytes());
        d = caba::<A, 10, 8>(d, &trade_fee_denominator.to_le_bytes());
        d = caba::<A, 18, 8>(d, &owner_trade_fee_numerator.to_le_bytes());
        d = caba::<A, 26, 8>(d, &owner_trade_fee_denominator.to_le_bytes());
        d = caba::<A, 34, 8>(d, &owner_withdraw_fee_numerator.to_le_bytes());
        d = caba::<A, 42, 8>(d, &owner_withdraw_fee_denominator.to_le_bytes());
        d = caba::<A, 50, 8>(d, &host_fee_numerator.to_le_bytes());
        d = caba::<A, 58, 8>(d, &host_fee_denominator.to_le_bytes());
        d = caba::<A, 66, 1>(d, &[curve_type]);
        d = caba::<A, 67, 8>(d, &amp.to_le_bytes());
        d = caba::<A, 75, 24>(d, &curve_parameters);

        Self(d)
    }

    #[inline]
    pub const fn as_buf(&self) -> &[u8; INITIALIZE_IX_DATA_LEN] {
        &self.0
    }

    #[inline]
    pub const fn parse_no_discm(data: &[u8; 98]) -> InitializeIxArgs {
        let (nonce, rest) = csba::<98, 1, 97>(data);
        let (trade_fee_numerator, rest) = csba::<97, 8, 89>(rest);
        let (trade_fee_denominator, rest) = csba::<89, 8, 81>(rest);
        let (owner_trade_fee_numerator, rest) = csba::<81, 8, 73>(rest);
        let (owner_trade_fee_denominator, rest) = csba::<73, 8, 65>(rest);
        let (owner_withdraw_fee_numerator, rest) = csba::<65, 8, 57>(rest);
        let (owner_withdraw_fee_denominator, rest) = csba::<57, 8, 49>(rest);
        let (host_fee_numerator, rest) = csba::<49, 8, 41>(rest);
        let (host_fee_denominator, rest) = csba::<41, 8, 33>(rest);
        let (curve_type, rest) = csba::<33, 1, 32>(rest);
        let (amp, curve_parameters) = csba::<32, 8, 24>(rest);

        InitializeIxArgs {
            nonce: nonce[0],
            trade_fee_numerator: u64::from_le_bytes(*trade_fee_numerator),
            trade_fee_denominator: u64::from_le_bytes(*trade_fee_denominator),
            owner_trade_fee_numerator: u64::from_le_bytes(*owner_trade_fee_numerator),
            owner_trade_fee_denominator: u64::from_le_bytes(*owner_trade_fee_denominator),
            owner_withdraw_fee_numerator: u64::from_le_bytes(*owner_withdraw_fee_numerator),
            owner_withdraw_fee_denominator: u64::from_le_bytes(*owner_withdraw_fee_denominator),
            host_fee_numerator: u64::from_le_bytes(*host_fee_numerator),
            host_fee_denominator: u64::from_le_bytes(*host_fee_denominator),
            curve_type: curve_type[0],
            amp: u64::from_le_bytes(*amp),
            curve_parameters: *curve_parameters,
        }
    }
}

/// Infallible: every arg is already fixed-width
pub fn initialize_ix(
    program_id: &[u8; 32],
    keys: &InitializeIxKeysOwned,
    args: InitializeIxArgs,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: keys_signer_writable_to_metas(
            keys.as_ref(),
            INITIALIZE_IX_IS_SIGNER.as_ref(),
            INITIALIZE_IX_IS_WRITER.as_ref(),
        ),
        data: InitializeIxData::new(args).as_buf().to_vec(),
    }
}
