//! The boundary between this crate and whatever talks to the ledger.
//!
//! Implementors own transport, commitment, fee payment and retry policy.
//! Nothing in this crate retries or times out.

use std::future::Future;

use tswap_core::instruction::Instruction;

/// Account as fetched from the ledger, with only the fields this crate reads
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Account {
    pub owner: [u8; 32],
    pub data: Box<[u8]>,
}

pub trait Ledger {
    /// Passed through to callers unchanged
    type Err;
}

pub trait LedgerRead: Ledger {
    /// `Ok(None)` if the account does not exist
    fn get_account_info(
        &self,
        pk: &[u8; 32],
    ) -> impl Future<Output = Result<Option<Account>, Self::Err>>;

    fn get_minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
    ) -> impl Future<Output = Result<u64, Self::Err>>;
}

/// Something that can authorize a submission. Key management is left to implementors
pub trait Signer {
    fn pubkey(&self) -> [u8; 32];
}

pub trait LedgerWrite: Ledger {
    type Confirmation;

    /// Submits `ixs` as a single atomic unit signed by every one of `signers`
    fn submit(
        &self,
        ixs: &[Instruction],
        signers: &[&dyn Signer],
    ) -> impl Future<Output = Result<Self::Confirmation, Self::Err>>;
}

impl<T: Ledger + ?Sized> Ledger for &T {
    type Err = T::Err;
}

impl<T: LedgerRead + ?Sized> LedgerRead for &T {
    #[inline]
    fn get_account_info(
        &self,
        pk: &[u8; 32],
    ) -> impl Future<Output = Result<Option<Account>, Self::Err>> {
        (**self).get_account_info(pk)
    }

    #[inline]
    fn get_minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
    ) -> impl Future<Output = Result<u64, Self::Err>> {
        (**self).get_minimum_balance_for_rent_exemption(data_len)
    }
}

impl<T: LedgerWrite + ?Sized> LedgerWrite for &T {
    type Confirmation = T::Confirmation;

    #[inline]
    fn submit(
        &self,
        ixs: &[Instruction],
        signers: &[&dyn Signer],
    ) -> impl Future<Output = Result<Self::Confirmation, Self::Err>> {
        (**self).submit(ixs, signers)
    }
}

impl<T: Signer + ?Sized> Signer for &T {
    #[inline]
    fn pubkey(&self) -> [u8; 32] {
        (**self).pubkey()
    }
}

/// A bare public key, for ledgers that sign out-of-band
impl Signer for [u8; 32] {
    #[inline]
    fn pubkey(&self) -> [u8; 32] {
        *self
    }
}
