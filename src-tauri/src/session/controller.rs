use std::sync::Arc;

use tauri_specta::Event;
use tokio::sync::mpsc::Receiver;

use crate::error::Error;
use crate::language::Language;
use crate::session::{
    commands::SessionCommand,
    events::{SessionStateChanged, TranscriptChanged},
    SessionAction, SessionEvent, SessionStateManager, SharedSessionStore, TransitionResult,
};
use crate::speech::{CapabilityError, SpeechHost};

pub struct Controller {
    command_rx: Receiver<SessionCommand>,
    app_handle: tauri::AppHandle,
    state_manager: Arc<SessionStateManager>,
    store: SharedSessionStore,
    host: Box<dyn SpeechHost>,
}

impl Controller {
    pub fn new(
        command_rx: Receiver<SessionCommand>,
        app_handle: tauri::AppHandle,
        state_manager: Arc<SessionStateManager>,
        store: SharedSessionStore,
        host: Box<dyn SpeechHost>,
    ) -> Self {
        // Ensure we start in Idle state
        state_manager.reset();

        Controller {
            command_rx,
            app_handle,
            state_manager,
            store,
            host,
        }
    }

    /// Main control loop - consumes self, runs in a dedicated thread.
    ///
    /// Being the single consumer of the command channel makes this the only
    /// writer of session state; commands from the UI and push updates from
    /// the recognition capability are applied strictly in arrival order.
    pub fn run(mut self) {
        while let Some(command) = self.command_rx.blocking_recv() {
            match command {
                SessionCommand::TranscriptUpdate(text) => self.handle_transcript_update(text),
                SessionCommand::SetLanguage(language) => self.handle_set_language(language),
                SessionCommand::Toggle => self.dispatch(SessionEvent::Toggle),
                SessionCommand::Reset => self.dispatch(SessionEvent::Reset),
                SessionCommand::CaptureFailed(reason) => self.handle_capture_failed(reason),
            }
        }
    }

    /// Run an event through the state machine and execute whatever action
    /// it yields
    fn dispatch(&self, event: SessionEvent) {
        match self.state_manager.transition(event) {
            Ok(TransitionResult::Changed { action, .. })
            | Ok(TransitionResult::Unchanged { action }) => {
                if let Some(action) = action {
                    self.execute_action(action);
                }
            }
            Err(rejection) => {
                log::warn!("{}", rejection);
            }
        }
    }

    /// Execute action returned by the state machine
    fn execute_action(&self, action: SessionAction) {
        match action {
            SessionAction::StartCapture => {
                if let Err(e) = self.handle_start() {
                    log::error!("Error starting capture: {:?}", e);
                    // Reset state on error
                    self.state_manager.reset();
                }
            }
            SessionAction::StopCapture => {
                if let Err(e) = self.handle_stop() {
                    log::error!("Error stopping capture: {:?}", e);
                }
            }
            SessionAction::ClearTranscript => self.handle_clear(),
            SessionAction::StopAndClear => {
                if let Err(e) = self.handle_stop_silent() {
                    log::error!("Error stopping capture during reset: {:?}", e);
                }
                self.handle_clear();
            }
        }
    }

    fn handle_start(&self) -> Result<(), Error> {
        // Language is read at the moment capture starts; changing it later
        // does not affect a capture already in flight
        let language = self.store.lock().unwrap().language();

        if let Err(e) = self.host.start_recognition(language) {
            self.emit_capability_error("recognition", &e);
            return Err(Error::from(e));
        }

        SessionStateChanged::Started.emit(&self.app_handle)?;
        Ok(())
    }

    fn handle_stop(&self) -> Result<(), Error> {
        self.host.stop_recognition()?;
        SessionStateChanged::Stopped.emit(&self.app_handle)?;
        Ok(())
    }

    /// Stop the capability without announcing a Stopped state; used by
    /// reset, which emits its own event
    fn handle_stop_silent(&self) -> Result<(), Error> {
        self.host.stop_recognition()?;
        Ok(())
    }

    fn handle_clear(&self) {
        self.store.lock().unwrap().clear_transcript();

        let cleared = TranscriptChanged {
            text: String::new(),
            char_count: 0,
        };
        if let Err(e) = cleared.emit(&self.app_handle) {
            log::error!("Failed to emit transcript-cleared event: {:?}", e);
        }
        if let Err(e) = SessionStateChanged::Reset.emit(&self.app_handle) {
            log::error!("Failed to emit session-reset event: {:?}", e);
        }
    }

    fn handle_transcript_update(&self, text: String) {
        // The capability only feeds us while listening; anything arriving
        // after a stop raced the channel and is dropped
        if !self.state_manager.is_listening() {
            log::debug!("Ignoring transcript update while idle");
            return;
        }

        let char_count = {
            let mut store = self.store.lock().unwrap();
            store.set_transcript(text.clone());
            store.char_count() as u32
        };

        let event = TranscriptChanged { text, char_count };
        if let Err(e) = event.emit(&self.app_handle) {
            log::error!("Failed to emit transcript-changed event: {:?}", e);
        }
    }

    fn handle_set_language(&self, language: Language) {
        self.store.lock().unwrap().set_language(language);

        if let Err(e) = (SessionStateChanged::LanguageChanged { language }).emit(&self.app_handle) {
            log::error!("Failed to emit language-changed event: {:?}", e);
        }
    }

    fn handle_capture_failed(&self, reason: String) {
        match self.state_manager.transition(SessionEvent::CaptureFailed) {
            Ok(_) => {
                let error = CapabilityError::from_capture_reason(reason);
                log::error!("Capture failed: {}", error);
                self.emit_capability_error("recognition", &error);
            }
            Err(rejection) => {
                log::warn!("{}", rejection);
            }
        }
    }

    fn emit_capability_error(&self, error_type: &str, error: &CapabilityError) {
        let event = SessionStateChanged::Error {
            error_type: error_type.to_string(),
            error_message: format!("{}", error),
            user_message: error.user_message(),
        };

        if let Err(emit_err) = event.emit(&self.app_handle) {
            log::error!("Failed to emit capability-error event: {}", emit_err);
        }
    }
}
