macro_rules! id_str {
    ($ID_STR:ident, $ID:ident, $pkstr:expr) => {
        pub const $ID_STR: &str = $pkstr;
        pub const $ID: [u8; 32] = const_crypto::bs58::decode_pubkey($ID_STR);
    };
}
pub(crate) use id_str;

id_str!(
    TOKEN_PROGRAM_ID_STR,
    TOKEN_PROGRAM_ID,
    "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA"
);

id_str!(
    SYSTEM_PROGRAM_ID_STR,
    SYSTEM_PROGRAM_ID,
    "11111111111111111111111111111111"
);
