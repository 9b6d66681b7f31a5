//! Utility modules for the darwin-smc crate.
//!
//! - `bindings`: the SMC frame layout and the IOKit functions used to exchange it

pub mod bindings;
