use crate::codec::{caba, csba};

pub const THREE_AMTS_IX_DATA_LEN: usize = 25;

/// Discriminant followed by 3 little-endian u64 amounts.
///
/// Used by DepositAllTokenTypes and WithdrawAllTokenTypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct ThreeAmtsIxData<const DISCM: u8>([u8; THREE_AMTS_IX_DATA_LEN]);

#[inline]
pub const fn new_three_amts_ix_data(
    discm: u8,
    [a, b, c]: [&[u8; 8]; 3],
) -> [u8; THREE_AMTS_IX_DATA_LEN] {
    const A: usize = THREE_AMTS_IX_DATA_LEN;

    let mut d = [0u8; A];

    d = caba::<A, 0, 1>(d, &[discm]);
    d = caba::<A, 1, 8>(d, a);
    d = caba::<A, 9, 8>(d, b);
    d = caba::<A, 17, 8>(d, c);

    d
}

/// Returns the 3 raw little-endian amounts, in order
#[inline]
pub const fn three_amts_ix_data_parse_no_discm(data: &[u8; 24]) -> [[u8; 8]; 3] {
    let (a, rest) = csba::<24, 8, 16>(data);
    let (b, c) = csba::<16, 8, 8>(rest);
    [*a, *b, *c]
}

impl<const DISCM: u8> ThreeAmtsIxData<DISCM> {
    pub const DATA_LEN: usize = THREE_AMTS_IX_DATA_LEN;

    #[inline]
    pub const fn new(amts: [&[u8; 8]; 3]) -> Self {
        Self(new_three_amts_ix_data(DISCM, amts))
    }

    #[inline]
    pub const fn as_buf(&self) -> &[u8; THREE_AMTS_IX_DATA_LEN] {
        &self.0
    }

    #[inline]
    pub const fn parse_no_discm(data: &[u8; 24]) -> [[u8; 8]; 3] {
        three_amts_ix_data_parse_no_discm(data)
    }
}
