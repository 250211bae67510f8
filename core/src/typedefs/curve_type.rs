/// Pricing formula selector stored in the swap state.
///
/// The swap state keeps the raw tag byte; tags outside of this enum
/// are structurally valid and only surface as `None` when interpreted.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveType {
    /// Uniswap-style x * y = k
    ConstantProduct = 0,

    /// Always X of token A for 1 token B, X set at init
    ConstantPrice = 1,

    Stable = 2,

    /// Constant product with an additional offset on the token B side
    Offset = 3,
}

impl CurveType {
    #[inline]
    pub const fn try_from_u8(v: u8) -> Option<Self> {
        Some(match v {
            0 => Self::ConstantProduct,
            1 => Self::ConstantPrice,
            2 => Self::Stable,
            3 => Self::Offset,
            _ => return None,
        })
    }

    #[inline]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }
}

impl From<CurveType> for u8 {
    #[inline]
    fn from(v: CurveType) -> Self {
        v.to_u8()
    }
}
