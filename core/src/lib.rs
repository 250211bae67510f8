#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Re-exports
pub use num_bigint;
pub use sanctum_u64_ratio;

pub mod accounts;
pub mod codec;
pub mod err;
pub mod instruction;
pub mod instructions;
pub mod keys;
pub mod pda;
pub mod typedefs;

keys::id_str!(ID_STR, ID, "SwapsVeCiPHMUAtzQWZw7RjsKjgCjhwU55QGu4U1Szw");
