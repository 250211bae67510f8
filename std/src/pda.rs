// Re-exports to maintain -core compat
pub use tswap_core::pda::*;

/// Returns (authority, nonce)
#[inline]
pub fn find_authority(
    find_pda: impl FnOnce(&[&[u8]], &[u8; 32]) -> Option<([u8; 32], u8)>,
    swap: &[u8; 32],
    program_id: &[u8; 32],
) -> Option<([u8; 32], u8)> {
    find_pda(&authority_find_seeds(swap), program_id)
}

#[inline]
pub fn create_authority(
    create_pda: impl FnOnce(&[&[u8]], &[u8; 32]) -> Option<[u8; 32]>,
    swap: &[u8; 32],
    nonce: u8,
    program_id: &[u8; 32],
) -> Option<[u8; 32]> {
    create_pda(&authority_create_seeds(swap, &[nonce]), program_id)
}
