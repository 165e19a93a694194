// Export our modules for use in the wasm entry point and the native tests.
pub mod app;
pub mod domain;
pub mod error;
pub mod geo;
pub mod net;
pub mod payload;
pub mod render;
pub mod ui;

pub use domain::{Candidate, Card, Coordinates, Place, SuggestionRequest, SuggestionResponse};
pub use error::SuggestError;
