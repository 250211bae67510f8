//! Payload layouts shared by more than one instruction variant

pub mod three_amts;
pub mod two_amts;
