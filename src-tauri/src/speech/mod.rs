mod error;
mod events;
mod host;
mod narrator;
mod webview;

// Re-export public types
pub use error::CapabilityError;
pub use events::SpeechDirective;
pub use host::SpeechHost;
pub use narrator::Narrator;
pub use webview::WebviewHost;
