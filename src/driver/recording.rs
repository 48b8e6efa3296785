use crate::driver::{Action, ObservationSink, TransitionEvent};
use crate::report::RunTranscript;
use crate::wizard::{Stage, StageFailures};
use std::sync::{Arc, Mutex, PoisonError};

/// A shared view onto a transcript that a [`RecordingSink`] keeps writing to.
///
/// The sink itself moves into the session; the handle stays with the caller
/// so the recording can be inspected afterwards.
#[derive(Debug, Clone, Default)]
pub struct TranscriptHandle(Arc<Mutex<RunTranscript>>);

impl TranscriptHandle {
    /// A copy of everything recorded so far.
    pub fn snapshot(&self) -> RunTranscript {
        self.lock().clone()
    }

    /// Drains the recording, leaving the handle empty.
    pub fn take(&self) -> RunTranscript {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, RunTranscript> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A sink that records every observation into a [`RunTranscript`].
#[derive(Debug, Default)]
pub struct RecordingSink {
    transcript: TranscriptHandle,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The handle to keep before moving the sink into a session.
    pub fn handle(&self) -> TranscriptHandle {
        self.transcript.clone()
    }
}

impl ObservationSink for RecordingSink {
    fn transition(&mut self, event: TransitionEvent) {
        self.transcript.lock().push_transition(event);
    }

    fn rejection(&mut self, stage: Stage, blocked: Action, failures: &StageFailures) {
        self.transcript
            .lock()
            .push_rejection(stage, blocked, failures.clone());
    }
}
