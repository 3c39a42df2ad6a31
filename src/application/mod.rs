// Application layer - use cases and validation on top of the domain state.

pub mod error;
pub mod service;

pub use error::*;
pub use service::*;
