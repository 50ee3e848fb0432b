pub use error::AppError;

/// Main architecture layers (dependency flow: CLI → Core → Storage)
pub mod cli; // Terminal views and command dispatch
pub mod core; // Services and view-models
pub mod storage; // Configuration persistence

/// Support modules (used across layers)
pub mod api; // Data model
pub mod display; // Output formatting
pub mod error; // Error handling
pub mod utils; // Shared utilities and helpers

pub type Result<T> = std::result::Result<T, AppError>;
