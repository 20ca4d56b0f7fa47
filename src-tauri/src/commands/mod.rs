mod export;
mod registry;
mod session;

// Re-export all commands for convenience
pub use export::*;
pub use session::*;
