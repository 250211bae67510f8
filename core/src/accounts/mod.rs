pub mod swap_state;
