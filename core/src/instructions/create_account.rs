//! System program `CreateAccount`, used to allocate and fund
//! the swap state account before initializing it.

use generic_array_struct::generic_array_struct;

use crate::{
    codec::{caba, csba},
    instruction::{keys_signer_writable_to_metas, Instruction},
    instructions::internal_utils::impl_accs_common,
    keys::SYSTEM_PROGRAM_ID,
};

// Accounts

#[generic_array_struct(builder pub)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct CreateAccountIxAccs<T> {
    /// Funding account
    pub from: T,
    pub new_account: T,
}

impl_accs_common!(CreateAccountIxAccs, CREATE_ACCOUNT_IX_ACCS_LEN);

pub type CreateAccountIxKeysOwned = CreateAccountIxAccs<[u8; 32]>;

pub type CreateAccountIxAccFlags = CreateAccountIxAccs<bool>;

pub const CREATE_ACCOUNT_IX_IS_WRITER: CreateAccountIxAccFlags =
    CreateAccountIxAccFlags::memset(true);

pub const CREATE_ACCOUNT_IX_IS_SIGNER: CreateAccountIxAccFlags =
    CreateAccountIxAccFlags::memset(true);

// Data

/// System program instructions are discriminated by a u32, not a u8
pub const CREATE_ACCOUNT_IX_DISCM: u32 = 0;

pub const CREATE_ACCOUNT_IX_DATA_LEN: usize = 52;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CreateAccountIxArgs {
    pub lamports: u64,

    /// Bytes of account data to allocate
    pub space: u64,

    /// Program to assign the new account to
    pub owner: [u8; 32],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct CreateAccountIxData([u8; CREATE_ACCOUNT_IX_DATA_LEN]);

impl CreateAccountIxData {
    pub const DATA_LEN: usize = CREATE_ACCOUNT_IX_DATA_LEN;

    #[inline]
    pub const fn new(
        CreateAccountIxArgs {
            lamports,
            space,
            owner,
        }: CreateAccountIxArgs,
    ) -> Self {
        const A: usize = CREATE_ACCOUNT_IX_DATA_LEN;

        let mut d = [0u8; A];

        d = caba::<A, 0, 4>(d, &CREATE_ACCOUNT_IX_DISCM.to_le_bytes());
        d = caba::<A, 4, 8>(d, &lamports.to_le_bytes());
        d = caba::<A, 12, 8>(d, &space.to_le_bytes());
        d = caba::<A, 20, 32>(d, &owner);

        Self(d)
    }

    #[inline]
    pub const fn as_buf(&self) -> &[u8; CREATE_ACCOUNT_IX_DATA_LEN] {
        &self.0
    }

    #[inline]
    pub const fn parse_no_discm(data: &[u8; 48]) -> CreateAccountIxArgs {
        let (lamports, rest) = csba::<48, 8, 40>(data);
        let (space, owner) = csba::<40, 8, 32>(rest);

        CreateAccountIxArgs {
            lamports: u64::from_le_bytes(*lamports),
            space: u64::from_le_bytes(*space),
            owner: *owner,
        }
    }
}

pub fn create_account_ix(
    keys: &CreateAccountIxKeysOwned,
    args: CreateAccountIxArgs,
) -> Instruction {
    Instruction {
        program_id: SYSTEM_PROGRAM_ID,
        accounts: keys_signer_writable_to_metas(
            keys.as_ref(),
            CREATE_ACCOUNT_IX_IS_SIGNER.as_ref(),
            CREATE_ACCOUNT_IX_IS_WRITER.as_ref(),
        ),
        data: CreateAccountIxData::new(args).as_buf().to_vec(),
    }
}
