use std::{error::Error, fmt::Display};

// Re-exports to maintain -core compat
pub use tswap_core::err::*;

use crate::utils::Bs58PkString;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwapClientErr<E> {
    AccountNotFound {
        pk: [u8; 32],
    },
    OwnerMismatch {
        pk: [u8; 32],
        expected: [u8; 32],
        actual: [u8; 32],
    },
    UninitializedAccount {
        pk: [u8; 32],
    },
    AccDeser {
        pk: [u8; 32],
        err: TruncatedInputErr,
    },
    NoValidPda,
    Encoding(EncodingErr),

    /// Returned by the ledger, untouched
    Ledger(E),
}

impl<E> From<EncodingErr> for SwapClientErr<E> {
    #[inline]
    fn from(e: EncodingErr) -> Self {
        Self::Encoding(e)
    }
}

impl<E: Display> Display for SwapClientErr<E> {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AccountNotFound { pk } => f.write_fmt(format_args!(
                "AccountNotFound. {}",
                Bs58PkString::encode(pk)
            )),
            Self::OwnerMismatch {
                pk,
                expected,
                actual,
            } => f.write_fmt(format_args!(
                "OwnerMismatch. {} owned by {}, expected {}",
                Bs58PkString::encode(pk),
                Bs58PkString::encode(actual),
                Bs58PkString::encode(expected)
            )),
            Self::UninitializedAccount { pk } => f.write_fmt(format_args!(
                "UninitializedAccount. {}",
                Bs58PkString::encode(pk)
            )),
            Self::AccDeser { pk, err } => f.write_fmt(format_args!(
                "AccDeser. {}: {err}",
                Bs58PkString::encode(pk)
            )),
            Self::NoValidPda => f.write_str("NoValidPda"),
            Self::Encoding(e) => e.fmt(f),
            Self::Ledger(e) => e.fmt(f),
        }
    }
}

impl<E: Error + 'static> Error for SwapClientErr<E> {
    #[inline]
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::AccDeser { err, .. } => Some(err),
            Self::Encoding(e) => Some(e),
            Self::Ledger(e) => Some(e),
            _ => None,
        }
    }
}
