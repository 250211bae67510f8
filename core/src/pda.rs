use const_crypto::ed25519::derive_program_address;

/// Seeds to use with create-program-address to get the swap authority
/// from the nonce stored in [`crate::accounts::swap_state::SwapState`]
#[inline]
pub const fn authority_create_seeds<'a>(
    swap: &'a [u8; 32],
    nonce: &'a [u8; 1],
) -> [&'a [u8]; 2] {
    [swap, nonce]
}

/// Seeds to use with find-program-address to get the swap authority and the
/// nonce to pass to [`crate::instructions::initialize`] for a new swap
#[inline]
pub const fn authority_find_seeds(swap: &[u8; 32]) -> [&[u8]; 1] {
    [swap]
}

/// Returns (authority, nonce)
#[inline]
pub const fn const_find_authority(swap: &[u8; 32], prog_id: &[u8; 32]) -> ([u8; 32], u8) {
    derive_program_address(&authority_find_seeds(swap), prog_id)
}
