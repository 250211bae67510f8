//! Token amount backed by an arbitrary-precision unsigned integer.
//!
//! Construction never range-checks. The 64-bit bound is enforced exactly once,
//! when the value is serialized into its 8-byte little-endian wire form
//! ([`Unsigned64::to_le_bytes`]), so intermediate arithmetic can exceed it freely.

use core::{
    fmt::Display,
    ops::{Add, Mul},
    str::FromStr,
};

use num_bigint::{BigUint, ParseBigIntError};

use crate::{
    codec::U64_LEN,
    err::{InvalidLengthErr, OverflowErr},
};

#[derive(Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Unsigned64(BigUint);

/// Constructors
impl Unsigned64 {
    #[inline]
    pub const fn new(v: BigUint) -> Self {
        Self(v)
    }

    /// # Errors
    /// If `buf.len() != 8`
    #[inline]
    pub fn from_le_bytes(buf: &[u8]) -> Result<Self, InvalidLengthErr> {
        match buf.len() {
            U64_LEN => Ok(Self(BigUint::from_bytes_le(buf))),
            actual => Err(InvalidLengthErr { actual }),
        }
    }

    #[inline]
    pub fn from_le_arr(arr: &[u8; U64_LEN]) -> Self {
        Self(BigUint::from_bytes_le(arr))
    }
}

/// Serialization
impl Unsigned64 {
    /// Little-endian, zero-padded on the high end.
    ///
    /// # Errors
    /// If the value's minimal byte representation is longer than 8 bytes
    #[inline]
    pub fn to_le_bytes(&self) -> Result<[u8; U64_LEN], OverflowErr> {
        // zero serializes to [0]
        let minimal = self.0.to_bytes_le();
        let mut res = [0u8; U64_LEN];
        res.get_mut(..minimal.len())
            .ok_or(OverflowErr {
                byte_len: minimal.len(),
            })?
            .copy_from_slice(&minimal);
        Ok(res)
    }

    #[inline]
    pub fn to_u64(&self) -> Result<u64, OverflowErr> {
        self.to_le_bytes().map(u64::from_le_bytes)
    }
}

/// Accessors + arithmetic
impl Unsigned64 {
    #[inline]
    pub const fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    #[inline]
    pub fn into_biguint(self) -> BigUint {
        self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.bits() == 0
    }

    /// Returns `None` if `rhs > self`
    #[inline]
    pub fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        if self.0 >= rhs.0 {
            Some(Self(&self.0 - &rhs.0))
        } else {
            None
        }
    }

    /// Floor division. Returns `None` if `rhs == 0`
    #[inline]
    pub fn checked_div(&self, rhs: &Self) -> Option<Self> {
        if rhs.is_zero() {
            None
        } else {
            Some(Self(&self.0 / &rhs.0))
        }
    }
}

impl Add for Unsigned64 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Mul for Unsigned64 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl From<u64> for Unsigned64 {
    #[inline]
    fn from(v: u64) -> Self {
        Self(BigUint::from(v))
    }
}

impl From<BigUint> for Unsigned64 {
    #[inline]
    fn from(v: BigUint) -> Self {
        Self(v)
    }
}

impl TryFrom<&Unsigned64> for u64 {
    type Error = OverflowErr;

    #[inline]
    fn try_from(v: &Unsigned64) -> Result<Self, Self::Error> {
        v.to_u64()
    }
}

/// Decimal digits only, no sign
impl FromStr for Unsigned64 {
    type Err = ParseBigIntError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigUint::from_str(s).map(Self)
    }
}

impl Display for Unsigned64 {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.0.fmt(f)
    }
}
