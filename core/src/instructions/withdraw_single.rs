use generic_array_struct::generic_array_struct;

use crate::{
    err::EncodingErr,
    instruction::{keys_signer_writable_to_metas, Instruction},
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
pub struct WithdrawSingleIxAccs<T> {
    pub swap: T,
    pub authority: T,
    pub pool_mint: T,
    pub source_pool_account: T,
    pub from_a: T,
    pub from_b: T,

    /// User's token A or token B account to withdraw to
    pub user_account: T,

    pub fee_account: T,
    pub token_program: T,
}

impl_accs_common!(WithdrawSingleIxAccs, WITHDRAW_SINGLE_IX_ACCS_LEN);

pub type WithdrawSingleIxKeysOwned = WithdrawSingleIxAccs<[u8; 32]>;

pub type WithdrawSingleIxAccFlags = WithdrawSingleIxAccs<bool>;

pub const WITHDRAW_SINGLE_IX_IS_WRITER: WithdrawSingleIxAccFlags =
    WithdrawSingleIxAccFlags::memset(true)
        .const_with_swap(false)
        .const_with_authority(false)
        .const_with_token_program(false);

pub const WITHDRAW_SINGLE_IX_IS_SIGNER: WithdrawSingleIxAccFlags =
    WithdrawSingleIxAccFlags::memset(false);

// Data

pub const WITHDRAW_SINGLE_IX_DISCM: u8 = 5;

pub type WithdrawSingleIxData = TwoAmtsIxData<WITHDRAW_SINGLE_IX_DISCM>;

#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct WithdrawSingleIxArgs {
    pub destination_token_amount: Unsigned64,
    pub maximum_pool_token_amount: Unsigned64,
}

impl WithdrawSingleIxArgs {
    #[inline]
    pub fn to_ix_data(&self) -> Result<WithdrawSingleIxData, EncodingErr> {
        let Self {
            destination_token_amount,
            maximum_pool_token_amount,
        } = self;
        Ok(WithdrawSingleIxData::new([
            &encode_amt("destination_token_amount", destination_token_amount)?,
            &encode_amt("maximum_pool_token_amount", maximum_pool_token_amount)?,
        ]))
    }

    #[inline]
    pub fn parse_no_discm(data: &[u8; 16]) -> Self {
        let [destination_token_amount, maximum_pool_token_amount] =
            WithdrawSingleIxData::parse_no_discm(data);
        Self {
            destination_token_amount: Unsigned64::from_le_arr(&destination_token_amount),
            maximum_pool_token_amount: Unsigned64::from_le_arr(&maximum_pool_token_amount),
        }
    }
}

pub fn withdraw_single_ix(
    program_id: &[u8; 32],
    keys: &WithdrawSingleIxKeysOwned,
    args: &WithdrawSingleIxArgs,
) -> Result<Instruction, EncodingErr> {
    let data = args.to_ix_data()?;
    Ok(Instruction {
        program_id: *program_id,
        accounts: keys_signer_writable_to_metas(
            keys.as_ref(),
            WITHDRAW_SINGLE_IX_IS_SIGNER.as_ref(),
            WITHDRAW_SINGLE_IX_IS_WRITER.as_ref(),
        ),
        data: data.as_buf().to_vec(),
    })
}
