//! Session state machine - single source of truth for valid state transitions
//!
//! State diagram:
//! ```text
//! Idle ──Toggle──> Listening ──Toggle──> Idle
//!   │                   │
//! [Reset]            [Reset]──> Idle (stops capture, clears transcript)
//!   │                   │
//!   └──> Idle        [CaptureFailed]──> Idle
//! ```
//!
//! Note: Reset is accepted in every state so it stays idempotent - from
//! Idle the state is unchanged but the clear action still runs.

use std::sync::Mutex;

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum SessionEvent {
    /// Start or stop listening, depending on the current state
    Toggle,
    /// Stop any capture and clear the transcript
    Reset,
    /// The recognition capability reported a failure mid-capture
    CaptureFailed,
}

/// Actions the Controller should perform after a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    /// Start continuous recognition with the current language
    StartCapture,
    /// Stop the recognition capability
    StopCapture,
    /// Clear the transcript (derived character count follows)
    ClearTranscript,
    /// Stop the recognition capability, then clear the transcript
    StopAndClear,
}

/// Session states
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum SessionState {
    /// Not capturing audio
    Idle,
    /// The recognition capability is actively capturing and transcribing
    Listening,
}

impl SessionState {
    pub fn is_listening(self) -> bool {
        self == Self::Listening
    }
}

/// Result of a successful state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionResult {
    /// State changed
    Changed {
        from: SessionState,
        to: SessionState,
        action: Option<SessionAction>,
    },
    /// Event was valid but the state didn't change (idempotent reset)
    Unchanged { action: Option<SessionAction> },
}

/// Reason a transition was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{attempted_event} event rejected in {current_state} state")]
pub struct TransitionRejection {
    pub current_state: SessionState,
    pub attempted_event: SessionEvent,
}

/// Thread-safe session state manager
#[derive(Debug)]
pub struct SessionStateManager {
    state: Mutex<SessionState>,
}

impl SessionStateManager {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(SessionState::Idle),
        }
    }

    /// Get the current state (read-only, thread-safe)
    pub fn current(&self) -> SessionState {
        *self.state.lock().unwrap()
    }

    /// Check if the session is currently capturing audio
    pub fn is_listening(&self) -> bool {
        self.current().is_listening()
    }

    /// Attempt a state transition based on an event
    ///
    /// This is the ONLY way to change state - ensures all transitions are valid.
    pub fn transition(
        &self,
        event: SessionEvent,
    ) -> Result<TransitionResult, TransitionRejection> {
        let mut state = self.state.lock().unwrap();
        let current = *state;

        match Self::compute_transition(current, event) {
            Some((new_state, action)) => {
                if new_state == current {
                    return Ok(TransitionResult::Unchanged { action });
                }

                *state = new_state;
                Ok(TransitionResult::Changed {
                    from: current,
                    to: new_state,
                    action,
                })
            }
            None => Err(TransitionRejection {
                current_state: current,
                attempted_event: event,
            }),
        }
    }

    /// Pure function: compute what transition should happen (if any)
    /// Returns None if the transition is invalid
    fn compute_transition(
        current: SessionState,
        event: SessionEvent,
    ) -> Option<(SessionState, Option<SessionAction>)> {
        match current {
            SessionState::Idle => match event {
                SessionEvent::Toggle => Some((
                    SessionState::Listening,
                    Some(SessionAction::StartCapture),
                )),
                // Reset while idle only clears the transcript
                SessionEvent::Reset => {
                    Some((SessionState::Idle, Some(SessionAction::ClearTranscript)))
                }
                SessionEvent::CaptureFailed => None,
            },

            SessionState::Listening => match event {
                SessionEvent::Toggle => {
                    Some((SessionState::Idle, Some(SessionAction::StopCapture)))
                }
                SessionEvent::Reset => {
                    Some((SessionState::Idle, Some(SessionAction::StopAndClear)))
                }
                // The capability already gave up; no stop action needed
                SessionEvent::CaptureFailed => Some((SessionState::Idle, None)),
            },
        }
    }

    /// Reset to Idle state
    ///
    /// Used for error recovery when starting the capture fails.
    pub fn reset(&self) {
        *self.state.lock().unwrap() = SessionState::Idle;
    }
}

impl Default for SessionStateManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_returns_to_idle() {
        let manager = SessionStateManager::new();

        let first = manager.transition(SessionEvent::Toggle).unwrap();
        assert_eq!(
            first,
            TransitionResult::Changed {
                from: SessionState::Idle,
                to: SessionState::Listening,
                action: Some(SessionAction::StartCapture),
            }
        );
        assert!(manager.is_listening());

        let second = manager.transition(SessionEvent::Toggle).unwrap();
        assert_eq!(
            second,
            TransitionResult::Changed {
                from: SessionState::Listening,
                to: SessionState::Idle,
                action: Some(SessionAction::StopCapture),
            }
        );
        assert!(!manager.is_listening());
    }

    #[test]
    fn reset_while_listening_stops_and_clears() {
        let manager = SessionStateManager::new();
        manager.transition(SessionEvent::Toggle).unwrap();

        let result = manager.transition(SessionEvent::Reset).unwrap();
        assert_eq!(
            result,
            TransitionResult::Changed {
                from: SessionState::Listening,
                to: SessionState::Idle,
                action: Some(SessionAction::StopAndClear),
            }
        );
        assert!(!manager.is_listening());
    }

    #[test]
    fn reset_is_idempotent() {
        let manager = SessionStateManager::new();

        for _ in 0..2 {
            let result = manager.transition(SessionEvent::Reset).unwrap();
            assert_eq!(
                result,
                TransitionResult::Unchanged {
                    action: Some(SessionAction::ClearTranscript),
                }
            );
            assert_eq!(manager.current(), SessionState::Idle);
        }
    }

    #[test]
    fn capture_failure_only_valid_while_listening() {
        let manager = SessionStateManager::new();

        let rejection = manager.transition(SessionEvent::CaptureFailed).unwrap_err();
        assert_eq!(rejection.current_state, SessionState::Idle);
        assert_eq!(rejection.attempted_event, SessionEvent::CaptureFailed);

        manager.transition(SessionEvent::Toggle).unwrap();
        let result = manager.transition(SessionEvent::CaptureFailed).unwrap();
        assert_eq!(
            result,
            TransitionResult::Changed {
                from: SessionState::Listening,
                to: SessionState::Idle,
                action: None,
            }
        );
    }
}
