//! UML Draft backend.
//!
//! Receives the project JSON the editor generates from a diagram and
//! acknowledges it. Code generation from the project hooks in here.

mod config;
mod error;
mod routes;

pub use config::{BIND_ADDR_ENV, DEFAULT_BIND_ADDR, ServerConfig};
pub use error::{ApiError, ConfigError};
pub use routes::{GENERATE_PATH, GenerateReply, app};
