use crate::driver::{Action, TransitionEvent};
use crate::error::TranscriptError;
use crate::wizard::{Stage, StageFailures, WizardState};
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};

/// One observed event in a wizard run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TranscriptEntry {
    /// The session moved between states; carries the draft as it stood on
    /// arrival.
    Transition(TransitionEvent),
    /// A submission was refused without moving the session.
    Rejection {
        stage: Stage,
        blocked: Action,
        failures: StageFailures,
    },
}

/// The ordered record of everything a [`RecordingSink`] observed during a
/// run: every transition and every rejection, in the order they happened.
///
/// Transcripts serialize to a compact bincode artifact, so a run captured on
/// one machine can be inspected on another.
///
/// [`RecordingSink`]: crate::driver::RecordingSink
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunTranscript {
    entries: Vec<TranscriptEntry>,
}

impl RunTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_transition(&mut self, event: TransitionEvent) {
        self.entries.push(TranscriptEntry::Transition(event));
    }

    pub fn push_rejection(&mut self, stage: Stage, blocked: Action, failures: StageFailures) {
        self.entries.push(TranscriptEntry::Rejection {
            stage,
            blocked,
            failures,
        });
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The transitions alone, in order.
    pub fn transitions(&self) -> impl Iterator<Item = &TransitionEvent> {
        self.entries.iter().filter_map(|entry| match entry {
            TranscriptEntry::Transition(event) => Some(event),
            TranscriptEntry::Rejection { .. } => None,
        })
    }

    /// The rejections alone, in order.
    pub fn rejections(&self) -> impl Iterator<Item = (Stage, Action, &StageFailures)> {
        self.entries.iter().filter_map(|entry| match entry {
            TranscriptEntry::Rejection {
                stage,
                blocked,
                failures,
            } => Some((*stage, *blocked, failures)),
            TranscriptEntry::Transition(_) => None,
        })
    }

    /// Where the last recorded transition left the session, if any
    /// transition was recorded at all.
    pub fn final_state(&self) -> Option<WizardState> {
        self.transitions().last().map(|event| event.to)
    }

    /// Saves the transcript to a file using the bincode format.
    pub fn save(&self, path: &str) -> Result<(), TranscriptError> {
        let bytes = encode_to_vec(self, standard())
            .map_err(|e| TranscriptError::Encode(e.to_string()))?;
        let mut file = fs::File::create(path).map_err(|e| TranscriptError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        file.write_all(&bytes).map_err(|e| TranscriptError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Loads a transcript from a file.
    pub fn from_file(path: &str) -> Result<Self, TranscriptError> {
        let mut file = fs::File::open(path).map_err(|e| TranscriptError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| TranscriptError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_bytes(&bytes)
    }

    /// Deserializes a transcript from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TranscriptError> {
        decode_from_slice(bytes, standard())
            .map(|(transcript, _)| transcript) // bincode 2 returns a tuple (data, bytes_read)
            .map_err(|e| TranscriptError::Decode(e.to_string()))
    }
}
