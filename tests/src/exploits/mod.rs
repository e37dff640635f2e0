//! Attack simulations against the provider.

pub mod invalid_curve;
pub mod tampering;
