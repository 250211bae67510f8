use tracing::{info, instrument, warn};
use tswap_core::{
    accounts::swap_state::{SwapState, SWAP_STATE_LEN},
    err::OverflowErr,
    typedefs::{curve_type::CurveType, fee_ratio::FeeRatios},
};

// Re-exports
pub use tswap_core::*;

use crate::{
    err::SwapClientErr,
    ledger::{Account, Ledger, LedgerRead, Signer},
    pda::create_authority,
    utils::b58,
};

pub mod create;
pub mod err;
pub mod ledger;
pub mod pda;
pub mod trade;

mod utils;

/// A single swap's resolved addresses, plus what's needed to submit to it.
///
/// Never refetches: a client reflects the swap as of construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapClient<L, S> {
    pub(crate) ledger: L,
    pub(crate) payer: S,
    pub(crate) program_id: [u8; 32],
    pub(crate) swap: [u8; 32],
    pub(crate) authority: [u8; 32],
    pub(crate) state: SwapState,
}

/// Constructors
impl<L, S> SwapClient<L, S> {
    /// No checks are made that `authority` is derived from `swap` and `state.nonce`
    #[inline]
    pub const fn new(
        ledger: L,
        payer: S,
        program_id: [u8; 32],
        swap: [u8; 32],
        authority: [u8; 32],
        state: SwapState,
    ) -> Self {
        Self {
            ledger,
            payer,
            program_id,
            swap,
            authority,
            state,
        }
    }
}

impl<L: Ledger, S: Signer> SwapClient<L, S> {
    /// The synchronous part of [`Self::load_existing`], over an already-fetched account
    pub fn from_fetched(
        ledger: L,
        payer: S,
        program_id: [u8; 32],
        swap: [u8; 32],
        account: &Account,
        create_pda: impl FnOnce(&[&[u8]], &[u8; 32]) -> Option<[u8; 32]>,
    ) -> Result<Self, SwapClientErr<L::Err>> {
        if account.owner != program_id {
            return Err(SwapClientErr::OwnerMismatch {
                pk: swap,
                expected: program_id,
                actual: account.owner,
            });
        }
        let state = SwapState::decode(&account.data)
            .map_err(|err| SwapClientErr::AccDeser { pk: swap, err })?;
        if !state.is_initialized {
            return Err(SwapClientErr::UninitializedAccount { pk: swap });
        }
        let authority = create_authority(create_pda, &swap, state.nonce, &program_id)
            .ok_or(SwapClientErr::NoValidPda)?;
        Ok(Self::new(ledger, payer, program_id, swap, authority, state))
    }
}

impl<L: LedgerRead, S: Signer> SwapClient<L, S> {
    /// Fetches and validates an existing swap
    #[instrument(skip_all, fields(swap = %b58(&swap), program_id = %b58(&program_id)))]
    pub async fn load_existing(
        ledger: L,
        payer: S,
        program_id: [u8; 32],
        swap: [u8; 32],
        create_pda: impl FnOnce(&[&[u8]], &[u8; 32]) -> Option<[u8; 32]>,
    ) -> Result<Self, SwapClientErr<L::Err>> {
        let account = match ledger
            .get_account_info(&swap)
            .await
            .map_err(SwapClientErr::Ledger)?
        {
            Some(a) => a,
            None => {
                warn!("swap account not found");
                return Err(SwapClientErr::AccountNotFound { pk: swap });
            }
        };
        let res = Self::from_fetched(ledger, payer, program_id, swap, &account, create_pda);
        match &res {
            Ok(c) => info!(
                nonce = c.state.nonce,
                curve_type = c.state.curve_type,
                "loaded swap"
            ),
            Err(_) => warn!(data_len = account.data.len(), "rejected swap account"),
        }
        res
    }

    /// Minimum lamports for a swap state account to be rent-exempt
    #[inline]
    pub async fn min_balance_rent_exempt(&self) -> Result<u64, SwapClientErr<L::Err>> {
        min_balance_rent_exempt(&self.ledger).await
    }
}

/// Minimum lamports for a swap state account to be rent-exempt
#[inline]
pub async fn min_balance_rent_exempt<L: LedgerRead>(
    ledger: &L,
) -> Result<u64, SwapClientErr<L::Err>> {
    ledger
        .get_minimum_balance_for_rent_exemption(SWAP_STATE_LEN)
        .await
        .map_err(SwapClientErr::Ledger)
}

/// Accessors
impl<L, S> SwapClient<L, S> {
    #[inline]
    pub const fn ledger(&self) -> &L {
        &self.ledger
    }

    #[inline]
    pub const fn payer(&self) -> &S {
        &self.payer
    }

    #[inline]
    pub const fn program_id(&self) -> &[u8; 32] {
        &self.program_id
    }

    #[inline]
    pub const fn swap_addr(&self) -> &[u8; 32] {
        &self.swap
    }

    #[inline]
    pub const fn authority(&self) -> &[u8; 32] {
        &self.authority
    }

    #[inline]
    pub const fn state(&self) -> &SwapState {
        &self.state
    }

    /// # Errors
    /// If any stored fee half does not fit in a u64
    #[inline]
    pub fn fee_ratios(&self) -> Result<FeeRatios, OverflowErr> {
        self.state.fees.to_ratios()
    }

    /// `None` if the swap's curve type is not one this crate knows about
    #[inline]
    pub const fn curve_type(&self) -> Option<CurveType> {
        self.state.try_curve_type()
    }
}
