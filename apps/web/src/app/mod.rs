// Session state and the user-triggered lifecycles.

pub mod actions;
pub mod state;

pub use state::{AcquisitionState, App};
