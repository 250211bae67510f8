use core::fmt::Display;

use sanctum_u64_ratio::Ratio;

use crate::{codec::U64_LEN, err::OverflowErr};

use super::unsigned64::Unsigned64;

/// A (numerator, denominator) pair as stored by the swap program.
///
/// No invariant is enforced between the two halves: a zero denominator
/// is representable because the program state may hold one.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct FeeRatio {
    pub numerator: Unsigned64,
    pub denominator: Unsigned64,
}

impl FeeRatio {
    #[inline]
    pub fn from_le_arrs(numerator: &[u8; U64_LEN], denominator: &[u8; U64_LEN]) -> Self {
        Self {
            numerator: Unsigned64::from_le_arr(numerator),
            denominator: Unsigned64::from_le_arr(denominator),
        }
    }

    #[inline]
    pub fn from_u64s(numerator: u64, denominator: u64) -> Self {
        Self {
            numerator: numerator.into(),
            denominator: denominator.into(),
        }
    }

    /// # Errors
    /// If either half does not fit in a u64
    #[inline]
    pub fn to_ratio(&self) -> Result<Ratio<u64, u64>, OverflowErr> {
        Ok(Ratio {
            n: self.numerator.to_u64()?,
            d: self.denominator.to_u64()?,
        })
    }
}

impl Display for FeeRatio {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let Self {
            numerator,
            denominator,
        } = self;
        f.write_fmt(format_args!("{numerator}/{denominator}"))
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Fees {
    pub trade: FeeRatio,
    pub owner_trade: FeeRatio,
    pub owner_withdraw: FeeRatio,
    pub host: FeeRatio,
}

/// [`Fees`] with every half narrowed to u64
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeeRatios {
    pub trade: Ratio<u64, u64>,
    pub owner_trade: Ratio<u64, u64>,
    pub owner_withdraw: Ratio<u64, u64>,
    pub host: Ratio<u64, u64>,
}

impl Fees {
    /// # Errors
    /// If any numerator or denominator does not fit in a u64
    #[inline]
    pub fn to_ratios(&self) -> Result<FeeRatios, OverflowErr> {
        let Self {
            trade,
            owner_trade,
            owner_withdraw,
            host,
        } = self;
        Ok(FeeRatios {
            trade: trade.to_ratio()?,
            owner_trade: owner_trade.to_ratio()?,
            owner_withdraw: owner_withdraw.to_ratio()?,
            host: host.to_ratio()?,
        })
    }
}
