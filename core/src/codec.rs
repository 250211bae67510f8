//! Fixed-width field primitives.
//!
//! All layouts in this crate are purely positional: a record's encoded length
//! is the sum of its fields' widths, with no padding and no alignment.

use crate::err::LengthMismatchErr;

pub const IDENTIFIER_LEN: usize = 32;

pub const U64_LEN: usize = 8;

pub const U8_LEN: usize = 1;

#[inline]
fn fixed_of<const N: usize>(bytes: &[u8]) -> Result<[u8; N], LengthMismatchErr> {
    bytes.try_into().map_err(|_| LengthMismatchErr {
        expected: N,
        actual: bytes.len(),
    })
}

/// Errors if `bytes` is not exactly [`IDENTIFIER_LEN`] long
#[inline]
pub fn encode_identifier(bytes: &[u8]) -> Result<[u8; IDENTIFIER_LEN], LengthMismatchErr> {
    fixed_of(bytes)
}

/// Errors if `field` is not exactly [`IDENTIFIER_LEN`] long
#[inline]
pub fn decode_identifier(field: &[u8]) -> Result<[u8; IDENTIFIER_LEN], LengthMismatchErr> {
    fixed_of(field)
}

#[inline]
pub const fn encode_u8(v: u8) -> [u8; U8_LEN] {
    [v]
}

#[inline]
pub const fn decode_u8([v]: &[u8; U8_LEN]) -> u8 {
    *v
}

// This does not seem to produce different bytecode compared to
// .copy_from_slice(), but it allows us to retain `const`
/// caba = `const_assign_byte_array`
#[inline]
pub(crate) const fn caba<const A: usize, const START: usize, const LEN: usize>(
    mut arr: [u8; A],
    val: &[u8; LEN],
) -> [u8; A] {
    const {
        assert!(START + LEN <= A);
    }

    let mut i = 0;
    while i < LEN {
        arr[START + i] = val[i];
        i += 1;
    }
    arr
}

/// csba = `const_split_byte_array`
#[inline]
pub(crate) const fn csba<const M: usize, const N: usize, const X: usize>(
    data: &[u8; M],
) -> (&[u8; N], &[u8; X]) {
    const {
        assert!(N <= M);
        assert!(X == M - N)
    }

    // Safety: bounds checked above
    let (a, b) = unsafe { data.split_at_unchecked(N) };

    // SAFETY: data is guaranteed to be of length M
    // and we are splitting it into two slices of length N and X (i.e M-N)
    (unsafe { &*a.as_ptr().cast::<[u8; N]>() }, unsafe {
        &*b.as_ptr().cast::<[u8; X]>()
    })
}
