pub mod curve_type;
pub mod fee_ratio;
pub mod unsigned64;
