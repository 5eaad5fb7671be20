// Orgcost Core - Domain Model & Cost Use Cases
// NO infrastructure dependencies: no I/O, no terminal output

pub mod application;
pub mod domain;
pub mod error;

pub use error::{AppError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
