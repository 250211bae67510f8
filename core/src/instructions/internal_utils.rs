use crate::{err::EncodingErr, typedefs::unsigned64::Unsigned64};

/// `memset()` and `AsRef<[T]>` for a `#[generic_array_struct]` account template
macro_rules! impl_accs_common {
    ($Accs:ident, $LEN:ident) => {
        impl<T: Copy> $Accs<T> {
            #[inline]
            pub const fn memset(val: T) -> Self {
                Self([val; $LEN])
            }
        }

        impl<T> AsRef<[T]> for $Accs<T> {
            #[inline]
            fn as_ref(&self) -> &[T] {
                &self.0
            }
        }
    };
}
pub(crate) use impl_accs_common;

/// Tags the overflow with the name of the arg that caused it
#[inline]
pub(crate) fn encode_amt(field: &'static str, amt: &Unsigned64) -> Result<[u8; 8], EncodingErr> {
    amt.to_le_bytes()
        .map_err(|overflow| EncodingErr { field, overflow })
}
