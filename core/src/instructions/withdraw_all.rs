use generic_array_struct::generic_array_struct;

use crate::{
    err::EncodingErr,
    instruction::{keys_signer_writable_to_metas, Instruction},
    instructions::{
        generic::three_amts::ThreeAmtsIxData,
        internal_utils::{encode_amt, impl_accs_common},
    },
    typedefs::unsigned64::Unsigned64,
};

// Accounts

#[generic_array_struct(builder pub)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct WithdrawAllIxAccs<T> {
    pub swap: T,
    pub authority: T,
    pub pool_mint: T,

    /// User's pool token account to burn from
    pub source_pool_account: T,

    /// Swap's token A reserves
    pub from_a: T,

    /// Swap's token B reserves
    pub from_b: T,

    pub user_account_a: T,
    pub user_account_b: T,
    pub fee_account: T,
    pub token_program: T,
}

impl_accs_common!(WithdrawAllIxAccs, WITHDRAW_ALL_IX_ACCS_LEN);

pub type WithdrawAllIxKeysOwned = WithdrawAllIxAccs<[u8; 32]>;

pub type WithdrawAllIxAccFlags = WithdrawAllIxAccs<bool>;

pub const WITHDRAW_ALL_IX_IS_WRITER: WithdrawAllIxAccFlags = WithdrawAllIxAccFlags::memset(true)
    .const_with_swap(false)
    .const_with_authority(false)
    .const_with_token_program(false);

pub const WITHDRAW_ALL_IX_IS_SIGNER: WithdrawAllIxAccFlags = WithdrawAllIxAccFlags::memset(false);

// Data

pub const WITHDRAW_ALL_IX_DISCM: u8 = 3;

pub type WithdrawAllIxData = ThreeAmtsIxData<WITHDRAW_ALL_IX_DISCM>;

#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct WithdrawAllIxArgs {
    /// Pool tokens to burn
    pub pool_token_amount: Unsigned64,
    pub minimum_token_a_amount: Unsigned64,
    pub minimum_token_b_amount: Unsigned64,
}

impl WithdrawAllIxArgs {
    #[inline]
    pub fn to_ix_data(&self) -> Result<WithdrawAllIxData, EncodingErr> {
        let Self {
            pool_token_amount,
            minimum_token_a_amount,
            minimum_token_b_amount,
        } = self;
        Ok(WithdrawAllIxData::new([
            &encode_amt("pool_token_amount", pool_token_amount)?,
            &encode_amt("minimum_token_a_amount", minimum_token_a_amount)?,
            &encode_amt("minimum_token_b_amount", minimum_token_b_amount)?,
        ]))
    }

    #[inline]
    pub fn parse_no_discm(data: &[u8; 24]) -> Self {
        let [p, a, b] = WithdrawAllIxData::parse_no_discm(data);
        Self {
            pool_token_amount: Unsigned64::from_le_arr(&p),
            minimum_token_a_amount: Unsigned64::from_le_arr(&a),
            minimum_token_b_amount: Unsigned64::from_le_arr(&b),
        }
    }
}

pub fn withdraw_all_ix(
    program_id: &[u8; 32],
    keys: &WithdrawAllIxKeysOwned,
    args: &WithdrawAllIxArgs,
) -> Result<Instruction, EncodingErr> {
    let data = args.to_ix_data()?;
    Ok(Instruction {
        program_id: *program_id,
        accounts: keys_signer_writable_to_metas(
            keys.as_ref(),
            WITHDRAW_ALL_IX_IS_SIGNER.as_ref(),
            WITHDRAW_ALL_IX_IS_WRITER.as_ref(),
        ),
        data: data.as_buf().to_vec(),
    })
}
