use core::{error::Error, fmt::Display};

/// A fixed-width field was given a buffer of the wrong size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LengthMismatchErr {
    pub expected: usize,
    pub actual: usize,
}

impl Display for LengthMismatchErr {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let Self { expected, actual } = self;
        f.write_fmt(format_args!(
            "LengthMismatch. Expected {expected} bytes, got {actual}"
        ))
    }
}

impl Error for LengthMismatchErr {}

/// Account data shorter than the fixed record it should contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TruncatedInputErr {
    /// Minimum number of bytes required
    pub expected: usize,
    pub actual: usize,
}

impl Display for TruncatedInputErr {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let Self { expected, actual } = self;
        f.write_fmt(format_args!(
            "TruncatedInput. Expected at least {expected} bytes, got {actual}"
        ))
    }
}

impl Error for TruncatedInputErr {}

/// [`crate::typedefs::unsigned64::Unsigned64`] was decoded from
/// a buffer that is not exactly 8 bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidLengthErr {
    pub actual: usize,
}

impl Display for InvalidLengthErr {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!(
            "InvalidLength. Expected 8 bytes, got {}",
            self.actual
        ))
    }
}

impl Error for InvalidLengthErr {}

/// Value does not fit in 8 bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverflowErr {
    /// Length of the value's minimal little-endian byte representation
    pub byte_len: usize,
}

impl Display for OverflowErr {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!(
            "Overflow. Value requires {} bytes, max 8",
            self.byte_len
        ))
    }
}

impl Error for OverflowErr {}

/// An instruction argument could not be encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EncodingErr {
    /// Name of the offending instruction arg
    pub field: &'static str,
    pub overflow: OverflowErr,
}

impl Display for EncodingErr {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let Self { field, overflow } = self;
        f.write_fmt(format_args!("EncodingError. {field}: {overflow}"))
    }
}

impl Error for EncodingErr {
    #[inline]
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.overflow)
    }
}
