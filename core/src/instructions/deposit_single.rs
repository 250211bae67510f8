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
pub struct DepositSingleIxAccs<T> {
    pub swap: T,
    pub authority: T,

    /// User's token A or token B account
    pub source: T,

    pub into_a: T,
    pub into_b: T,
    pub pool_token: T,
    pub pool_account: T,
    pub token_program: T,
}

impl_accs_common!(DepositSingleIxAccs, DEPOSIT_SINGLE_IX_ACCS_LEN);

pub type DepositSingleIxKeysOwned = DepositSingleIxAccs<[u8; 32]>;

pub type DepositSingleIxAccFlags = DepositSingleIxAccs<bool>;

pub const DEPOSIT_SINGLE_IX_IS_WRITER: DepositSingleIxAccFlags =
    DepositSingleIxAccFlags::memset(true)
        .const_with_swap(false)
        .const_with_authority(false)
        .const_with_token_program(false);

pub const DEPOSIT_SINGLE_IX_IS_SIGNER: DepositSingleIxAccFlags =
    DepositSingleIxAccFlags::memset(false);

// Data

pub const DEPOSIT_SINGLE_IX_DISCM: u8 = 4;

pub type DepositSingleIxData = TwoAmtsIxData<DEPOSIT_SINGLE_IX_DISCM>;

#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct DepositSingleIxArgs {
    pub source_token_amount: Unsigned64,
    pub minimum_pool_token_amount: Unsigned64,
}

impl DepositSingleIxArgs {
    #[inline]
    pub fn to_ix_data(&self) -> Result<DepositSingleIxData, EncodingErr> {
        let Self {
            source_token_amount,
            minimum_pool_token_amount,
        } = self;
        Ok(DepositSingleIxData::new([
            &encode_amt("source_token_amount", source_token_amount)?,
            &encode_amt("minimum_pool_token_amount", minimum_pool_token_amount)?,
        ]))
    }

    #[inline]
    pub fn parse_no_discm(data: &[u8; 16]) -> Self {
        let [source_token_amount, minimum_pool_token_amount] =
            DepositSingleIxData::parse_no_discm(data);
        Self {
            source_token_amount: Unsigned64::from_le_arr(&source_token_amount),
            minimum_pool_token_amount: Unsigned64::from_le_arr(&minimum_pool_token_amount),
        }
    }
}

pub fn deposit_single_ix(
    program_id: &[u8; 32],
    keys: &DepositSingleIxKeysOwned,
    args: &DepositSingleIxArgs,
) -> Result<Instruction, EncodingErr> {
    let data = args.to_ix_data()?;
    Ok(Instruction {
        program_id: *program_id,
        accounts: keys_signer_writable_to_metas(
            keys.as_ref(),
            DEPOSIT_SINGLE_IX_IS_SIGNER.as_ref(),
            DEPOSIT_SINGLE_IX_IS_WRITER.as_ref(),
        ),
        data: data.as_buf().to_vec(),
    })
}
