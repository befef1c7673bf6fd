//! Utility modules for the access engine
//!
//! - **error**: Error handling and the crate-wide `Result` alias
//! - **logging**: Tracing subscriber setup for embedding applications

pub mod error;
pub mod logging;

// Re-export commonly used types for convenience
pub use error::{PainelError, Result};
pub use logging::{LoggingConfig, init_logging};
