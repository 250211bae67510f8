mod internal_utils;

pub mod ag;
pub mod create_account;
pub mod deposit_all;
pub mod deposit_single;
pub mod generic;
pub mod initialize;
pub mod swap;
pub mod withdraw_all;
pub mod withdraw_single;
