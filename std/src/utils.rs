use bs58_fixed::Bs58String;

pub(crate) type Bs58PkString = Bs58String<44>;

/// For log fields
#[inline]
pub(crate) fn b58(pk: &[u8; 32]) -> Bs58PkString {
    Bs58PkString::encode(pk)
}
