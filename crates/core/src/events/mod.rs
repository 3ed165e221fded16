//! Domain events module.
//!
//! Event types and the sink trait the data service emits through after
//! each successful mutation.

mod domain_event;
mod sink;

pub use domain_event::*;
pub use sink::*;
