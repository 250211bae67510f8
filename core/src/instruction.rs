use alloc::vec::Vec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountMeta {
    pub pubkey: [u8; 32],
    pub is_signer: bool,
    pub is_writable: bool,
}

impl AccountMeta {
    #[inline]
    pub const fn new(pubkey: [u8; 32], is_signer: bool, is_writable: bool) -> Self {
        Self {
            pubkey,
            is_signer,
            is_writable,
        }
    }

    #[inline]
    pub const fn readonly(pubkey: [u8; 32]) -> Self {
        Self::new(pubkey, false, false)
    }

    #[inline]
    pub const fn writable(pubkey: [u8; 32]) -> Self {
        Self::new(pubkey, false, true)
    }
}

/// A single request addressed to an on-ledger program.
///
/// `accounts` order is part of the wire contract.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Instruction {
    pub program_id: [u8; 32],
    pub accounts: Vec<AccountMeta>,
    pub data: Vec<u8>,
}

impl Instruction {
    /// First byte of `data`. `None` for empty payloads
    #[inline]
    pub fn discm(&self) -> Option<u8> {
        self.data.first().copied()
    }
}

/// All 3 iterators must have the same length
#[inline]
pub fn keys_signer_writable_to_metas<'a>(
    keys: impl IntoIterator<Item = &'a [u8; 32]>,
    signer: impl IntoIterator<Item = &'a bool>,
    writable: impl IntoIterator<Item = &'a bool>,
) -> Vec<AccountMeta> {
    keys.into_iter()
        .zip(signer)
        .zip(writable)
        .map(|((key, signer), writable)| AccountMeta::new(*key, *signer, *writable))
        .collect()
}
