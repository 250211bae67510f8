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
pub struct DepositAllIxAccs<T> {
    pub swap: T,
    pub authority: T,

    /// User's token A account
    pub source_a: T,

    /// User's token B account
    pub source_b: T,

    /// Swap's token A reserves
    pub into_a: T,

    /// Swap's token B reserves
    pub into_b: T,

    /// Pool token mint
    pub pool_token: T,

    /// User's pool token account to mint to
    pub pool_account: T,

    pub token_program: T,
}

impl_accs_common!(DepositAllIxAccs, DEPOSIT_ALL_IX_ACCS_LEN);

pub type DepositAllIxKeysOwned = DepositAllIxAccs<[u8; 32]>;

pub type DepositAllIxAccFlags = DepositAllIxAccs<bool>;

pub const DEPOSIT_ALL_IX_IS_WRITER: DepositAllIxAccFlags = DepositAllIxAccFlags::memset(true)
    .const_with_swap(false)
    .const_with_authority(false)
    .const_with_token_program(false);

pub const DEPOSIT_ALL_IX_IS_SIGNER: DepositAllIxAccFlags = DepositAllIxAccFlags::memset(false);

// Data

pub const DEPOSIT_ALL_IX_DISCM: u8 = 2;

pub type DepositAllIxData = ThreeAmtsIxData<DEPOSIT_ALL_IX_DISCM>;

#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct DepositAllIxArgs {
    /// Pool tokens to mint
    pub pool_token_amount: Unsigned64,
    pub maximum_token_a_amount: Unsigned64,
    pub maximum_token_b_amount: Unsigned64,
}

impl DepositAllIxArgs {
    #[inline]
    pub fn to_ix_data(&self) -> Result<DepositAllIxData, EncodingErr> {
        let Self {
            pool_token_amount,
            maximum_token_a_amount,
            maximum_token_b_amount,
        } = self;
        Ok(DepositAllIxData::new([
            &encode_amt("pool_token_amount", pool_token_amount)?,
            &encode_amt("maximum_token_a_amount", maximum_token_a_amount)?,
            &encode_amt("maximum_token_b_amount", maximum_token_b_amount)?,
        ]))
    }

    #[inline]
    pub fn parse_no_discm(data: &[u8; 24]) -> Self {
        let [p, a, b] = DepositAllIxData::parse_no_discm(data);
        Self {
            pool_token_amount: Unsigned64::from_le_arr(&p),
            maximum_token_a_amount: Unsigned64::from_le_arr(&a),
            maximum_token_b_amount: Unsigned64::from_le_arr(&b),
        }
    }
}

pub fn deposit_all_ix(
    program_id: &[u8; 32],
    keys: &DepositAllIxKeysOwned,
    args: &DepositAllIxArgs,
) -> Result<Instruction, EncodingErr> {
    let data = args.to_ix_data()?;
    Ok(Instruction {
        program_id: *program_id,
        accounts: keys_signer_writable_to_metas(
            keys.as_ref(),
            DEPOSIT_ALL_IX_IS_SIGNER.as_ref(),
            DEPOSIT_ALL_IX_IS_WRITER.as_ref(),
        ),
        data: data.as_buf().to_vec(),
    })
}
