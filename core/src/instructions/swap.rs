use core::iter::once;

use alloc::vec::Vec;
use generic_array_struct::generic_array_struct;

use crate::{
    err::EncodingErr,
    instruction::{keys_signer_writable_to_metas, AccountMeta, Instruction},
    instructions::{
        generic::two_amts::TwoAmtsIxData,
        internal_utils::{encode_amt, impl_accs_common},
    },
    typedefs::unsigned64::Unsigned64,
};

// Accounts

#[generic_array_struct(builder pub)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct SwapIxAccs<T> {
    pub swap: T,
    pub authority: T,
    pub user_source: T,
    pub pool_source: T,
    pub pool_destination: T,
    pub user_destination: T,
    pub pool_mint: T,
    pub fee_account: T,
    pub token_program: T,
}

impl_accs_common!(SwapIxAccs, SWAP_IX_ACCS_LEN);

pub type SwapIxKeysOwned = SwapIxAccs<[u8; 32]>;

pub type SwapIxAccFlags = SwapIxAccs<bool>;

pub const SWAP_IX_IS_WRITER: SwapIxAccFlags = SwapIxAccFlags::memset(true)
    .const_with_swap(false)
    .const_with_authority(false)
    .const_with_token_program(false);

pub const SWAP_IX_IS_SIGNER: SwapIxAccFlags = SwapIxAccFlags::memset(false);

/// Optional host fee account, appended after [`SwapIxAccs`] when present
pub const SWAP_IX_HOST_FEE_IS_WRITER: bool = true;

pub const SWAP_IX_HOST_FEE_IS_SIGNER: bool = false;

// Data

pub const SWAP_IX_DISCM: u8 = 1;

pub type SwapIxData = TwoAmtsIxData<SWAP_IX_DISCM>;

#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct SwapIxArgs {
    pub amount_in: Unsigned64,
    pub minimum_amount_out: Unsigned64,
}

impl SwapIxArgs {
    /// # Errors
    /// If either amount does not fit in 8 bytes
    #[inline]
    pub fn to_ix_data(&self) -> Result<SwapIxData, EncodingErr> {
        let Self {
            amount_in,
            minimum_amount_out,
        } = self;
        Ok(SwapIxData::new([
            &encode_amt("amount_in", amount_in)?,
            &encode_amt("minimum_amount_out", minimum_amount_out)?,
        ]))
    }

    #[inline]
    pub fn parse_no_discm(data: &[u8; 16]) -> Self {
        let [amount_in, minimum_amount_out] = SwapIxData::parse_no_discm(data);
        Self {
            amount_in: Unsigned64::from_le_arr(&amount_in),
            minimum_amount_out: Unsigned64::from_le_arr(&minimum_amount_out),
        }
    }
}

/// `host_fee_account`, if `Some`, is appended as the 10th account
pub fn swap_ix(
    program_id: &[u8; 32],
    keys: &SwapIxKeysOwned,
    host_fee_account: Option<&[u8; 32]>,
    args: &SwapIxArgs,
) -> Result<Instruction, EncodingErr> {
    let data = args.to_ix_data()?;
    let fixed = keys_signer_writable_to_metas(
        keys.as_ref(),
        SWAP_IX_IS_SIGNER.as_ref(),
        SWAP_IX_IS_WRITER.as_ref(),
    );
    let accounts: Vec<AccountMeta> = match host_fee_account {
        None => fixed,
        Some(h) => fixed
            .into_iter()
            .chain(once(AccountMeta::new(
                *h,
                SWAP_IX_HOST_FEE_IS_SIGNER,
                SWAP_IX_HOST_FEE_IS_WRITER,
            )))
            .collect(),
    };
    Ok(Instruction {
        program_id: *program_id,
        accounts,
        data: data.as_buf().to_vec(),
    })
}
