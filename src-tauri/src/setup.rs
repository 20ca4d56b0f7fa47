use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use log::info;
use tauri::Manager;
use tokio::sync::mpsc;

use crate::session::{
    Controller, SessionCommand, SessionStateManager, SessionStore, SharedSessionStore,
};
use crate::speech::WebviewHost;

/// Commands sit here only until the controller drains them
const COMMAND_CHANNEL_CAPACITY: usize = 100;

pub struct SessionCommandSender {
    pub sender: mpsc::Sender<SessionCommand>,
}

/// Whether the webview reported a usable recognition capability.
///
/// Reported once at startup; recording commands are rejected while false
/// and the frontend renders its fallback notice instead of the controls.
pub struct RecognitionSupport {
    supported: AtomicBool,
}

impl RecognitionSupport {
    pub fn new() -> Self {
        Self {
            supported: AtomicBool::new(true),
        }
    }

    pub fn set(&self, supported: bool) {
        self.supported.store(supported, Ordering::Relaxed);
    }

    pub fn is_supported(&self) -> bool {
        self.supported.load(Ordering::Relaxed)
    }
}

impl Default for RecognitionSupport {
    fn default() -> Self {
        Self::new()
    }
}

pub fn setup_app(app: &mut tauri::App<tauri::Wry>) -> Result<(), Box<dyn std::error::Error>> {
    info!("Voxpad v{}", env!("CARGO_PKG_VERSION"));

    // ========================================
    // CHANNEL-BASED ARCHITECTURE WITH CONTROLLER
    // Setup creates the channel and wires components together
    // ========================================

    // Create channel for session commands (Tauri commands → Controller)
    let (command_tx, command_rx) = mpsc::channel::<SessionCommand>(COMMAND_CHANNEL_CAPACITY);
    let state_manager = Arc::new(SessionStateManager::new());
    let store: SharedSessionStore = Arc::new(Mutex::new(SessionStore::new()));

    // The webview hosts the actual speech engines; the controller only
    // talks to it through the bridge
    let host = Box::new(WebviewHost::new(app.app_handle().clone()));

    let controller = Controller::new(
        command_rx,
        app.app_handle().clone(),
        state_manager.clone(),
        store.clone(),
        host,
    );

    // Spawn controller in its own thread; it blocks on the command channel
    std::thread::spawn(move || {
        controller.run();
    });

    // Store sender and shared state for Tauri commands
    app.manage(SessionCommandSender { sender: command_tx });
    app.manage(state_manager);
    app.manage(store);
    app.manage(RecognitionSupport::new());

    Ok(())
}
