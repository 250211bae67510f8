use core::mem::{align_of, size_of};

use crate::{
    err::TruncatedInputErr,
    typedefs::{
        curve_type::CurveType,
        fee_ratio::{FeeRatio, Fees},
    },
};

/// Size of the swap program's state account
pub const SWAP_STATE_LEN: usize = 324;

/// Layout version tag the swap program writes for the current layout
///
/// The record is 1-byte tagged: this byte precedes `is_initialized`,
/// so every other field sits one byte past its untagged offset.
pub const SWAP_STATE_VERSION_V1: u8 = 1;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SwapState {
    /// Layout version tag. Opaque to this crate
    pub version: u8,

    pub is_initialized: bool,

    /// Bump seed of the swap authority PDA
    pub nonce: u8,

    pub token_program_id: [u8; 32],

    /// Swap's token A reserves
    pub token_account_a: [u8; 32],

    /// Swap's token B reserves
    pub token_account_b: [u8; 32],

    /// Pool token mint
    pub token_pool: [u8; 32],

    pub mint_a: [u8; 32],

    pub mint_b: [u8; 32],

    /// Pool token account that receives trade and withdrawal fees
    pub fee_account: [u8; 32],

    pub fees: Fees,

    /// Raw tag, see [`Self::try_curve_type`]
    pub curve_type: u8,

    /// Interpretation depends on `curve_type`
    pub curve_parameters: [u8; 32],
}

impl SwapState {
    /// Decodes the state from the first [`SWAP_STATE_LEN`] bytes of `acc_data`,
    /// ignoring any trailing bytes.
    ///
    /// Never fails on field values. Callers must check
    /// [`Self::is_initialized`] themselves.
    #[inline]
    pub fn decode(acc_data: &[u8]) -> Result<Self, TruncatedInputErr> {
        SwapStatePacked::of_acc_data(acc_data).map(SwapStatePacked::to_swap_state)
    }

    /// Returns `None` for tags this crate does not know about
    #[inline]
    pub const fn try_curve_type(&self) -> Option<CurveType> {
        CurveType::try_from_u8(self.curve_type)
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SwapStatePacked {
    version: u8,
    is_initialized: u8,
    nonce: u8,
    token_program_id: [u8; 32],
    token_account_a: [u8; 32],
    token_account_b: [u8; 32],
    token_pool: [u8; 32],
    mint_a: [u8; 32],
    mint_b: [u8; 32],
    fee_account: [u8; 32],
    trade_fee_numerator: [u8; 8],
    trade_fee_denominator: [u8; 8],
    owner_trade_fee_numerator: [u8; 8],
    owner_trade_fee_denominator: [u8; 8],
    owner_withdraw_fee_numerator: [u8; 8],
    owner_withdraw_fee_denominator: [u8; 8],
    host_fee_numerator: [u8; 8],
    host_fee_denominator: [u8; 8],
    curve_type: u8,
    curve_parameters: [u8; 32],
}

const _ASSERT_PACKED_LEN: () = assert!(size_of::<SwapStatePacked>() == SWAP_STATE_LEN);

const _ASSERT_PACKED_ALIGN: () = assert!(align_of::<SwapStatePacked>() == 1);

impl SwapStatePacked {
    #[inline]
    pub const fn of_acc_data_arr(acc_data_arr: &[u8; SWAP_STATE_LEN]) -> &Self {
        // safety:
        // - Self is only u8s and u8 arrays so has no padding
        // - align == 1 and size == SWAP_STATE_LEN checked at compile-time above
        unsafe { &*core::ptr::from_ref(acc_data_arr).cast() }
    }

    /// # Errors
    /// If `acc_data` is shorter than [`SWAP_STATE_LEN`]. Trailing bytes are ignored.
    #[inline]
    pub const fn of_acc_data(acc_data: &[u8]) -> Result<&Self, TruncatedInputErr> {
        match acc_data.first_chunk::<SWAP_STATE_LEN>() {
            Some(arr) => Ok(Self::of_acc_data_arr(arr)),
            None => Err(TruncatedInputErr {
                expected: SWAP_STATE_LEN,
                actual: acc_data.len(),
            }),
        }
    }

    #[inline]
    pub fn to_swap_state(&self) -> SwapState {
        let Self {
            version,
            is_initialized,
            nonce,
            token_program_id,
            token_account_a,
            token_account_b,
            token_pool,
            mint_a,
            mint_b,
            fee_account,
            trade_fee_numerator,
            trade_fee_denominator,
            owner_trade_fee_numerator,
            owner_trade_fee_denominator,
            owner_withdraw_fee_numerator,
            owner_withdraw_fee_denominator,
            host_fee_numerator,
            host_fee_denominator,
            curve_type,
            curve_parameters,
        } = self;
        SwapState {
            version: *version,
            // any nonzero bit pattern is true
            is_initialized: *is_initialized != 0,
            nonce: *nonce,
            token_program_id: *token_program_id,
            token_account_a: *token_account_a,
            token_account_b: *token_account_b,
            token_pool: *token_pool,
            mint_a: *mint_a,
            mint_b: *mint_b,
            fee_account: *fee_account,
            fees: Fees {
                trade: FeeRatio::from_le_arrs(trade_fee_numerator, trade_fee_denominator),
                owner_trade: FeeRatio::from_le_arrs(
                    owner_trade_fee_numerator,
                    owner_trade_fee_denominator,
                ),
                owner_withdraw: FeeRatio::from_le_arrs(
                    owner_withdraw_fee_numerator,
                    owner_withdraw_fee_denominator,
                ),
                host: FeeRatio::from_le_arrs(host_fee_numerator, host_fee_denominator),
            },
            curve_type: *curve_type,
            curve_parameters: *curve_parameters,
        }
    }
}

impl From<&SwapStatePacked> for SwapState {
    #[inline]
    fn from(value: &SwapStatePacked) -> Self {
        value.to_swap_state()
    }
}
