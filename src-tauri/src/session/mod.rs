mod commands;
mod controller;
mod events;
mod state_machine;
mod store;

// Public exports
pub use commands::SessionCommand;
pub use controller::Controller;
pub use events::{SessionStateChanged, TranscriptChanged};
pub use state_machine::{
    SessionAction, SessionEvent, SessionState, SessionStateManager, TransitionRejection,
    TransitionResult,
};
pub use store::{SessionSnapshot, SessionStore, SharedSessionStore};
