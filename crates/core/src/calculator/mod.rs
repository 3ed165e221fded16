//! Investment calculators.

mod sip;

pub use sip::{calculate_sip, try_calculate_sip, SipInput, SipProjection};

#[cfg(test)]
mod sip_tests;
