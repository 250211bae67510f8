use crate::codec::{caba, csba};

pub const TWO_AMTS_IX_DATA_LEN: usize = 17;

/// Discriminant followed by 2 little-endian u64 amounts.
///
/// Used by Swap, DepositSingleTokenTypeExactAmountIn
/// and WithdrawSingleTokenTypeExactAmountOut
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct TwoAmtsIxData<const DISCM: u8>([u8; TWO_AMTS_IX_DATA_LEN]);

#[inline]
pub const fn new_two_amts_ix_data(
    discm: u8,
    [a, b]: [&[u8; 8]; 2],
) -> [u8; TWO_AMTS_IX_DATA_LEN] {
    const A: usize = TWO_AMTS_IX_DATA_LEN;

    let mut d = [0u8; A];

    d = caba::<A, 0, 1>(d, &[discm]);
    d = caba::<A, 1, 8>(d, a);
    d = caba::<A, 9, 8>(d, b);

    d
}

/// Returns the 2 raw little-endian amounts, in order
#[inline]
pub const fn two_amts_ix_data_parse_no_discm(data: &[u8; 16]) -> [[u8; 8]; 2] {
    let (a, b) = csba::<16, 8, 8>(data);
    [*a, *b]
}

impl<const DISCM: u8> TwoAmtsIxData<DISCM> {
    pub const DATA_LEN: usize = TWO_AMTS_IX_DATA_LEN;

    #[inline]
    pub const fn new(amts: [&[u8; 8]; 2]) -> Self {
        Self(new_two_amts_ix_data(DISCM, amts))
    }

    #[inline]
    pub const fn as_buf(&self) -> &[u8; TWO_AMTS_IX_DATA_LEN] {
        &self.0
    }

    #[inline]
    pub const fn parse_no_discm(data: &[u8; 16]) -> [[u8; 8]; 2] {
        two_amts_ix_data_parse_no_discm(data)
    }
}
