use crate::messages::MessageCatalog;
use crate::report::{RunTranscript, TranscriptEntry};
use crate::wizard::StageFailures;
use itertools::Itertools;
use std::fmt::Write;

/// Renders a [`RunTranscript`] into a human-readable report.
///
/// Failure text goes through the configured [`MessageCatalog`], so the report
/// quotes exactly what a user of the observed product would have read on
/// screen.
pub struct TranscriptFormatter {
    catalog: MessageCatalog,
}

impl TranscriptFormatter {
    pub fn new(catalog: MessageCatalog) -> Self {
        Self { catalog }
    }

    pub fn render(&self, transcript: &RunTranscript) -> String {
        let mut output = String::new();
        writeln!(
            &mut output,
            "======== WIZARD RUN ({} events) ========",
            transcript.len()
        )
        .unwrap();

        for (i, entry) in transcript.entries().iter().enumerate() {
            match entry {
                TranscriptEntry::Transition(event) => {
                    writeln!(&mut output, "{:03}: {} -> {}", i, event.from, event.to).unwrap();
                }
                TranscriptEntry::Rejection {
                    stage,
                    blocked,
                    failures,
                } => {
                    writeln!(
                        &mut output,
                        "{:03}: rejected at {} ('{}' stays disabled): {}",
                        i,
                        stage,
                        blocked,
                        self.describe(failures)
                    )
                    .unwrap();
                }
            }
        }

        match transcript.final_state() {
            Some(state) => writeln!(&mut output, "final state: {}", state).unwrap(),
            None => writeln!(&mut output, "final state: (no transitions recorded)").unwrap(),
        }
        output
    }

    fn describe(&self, failures: &StageFailures) -> String {
        match failures {
            StageFailures::Fields(errors) => errors
                .iter()
                .map(|error| self.catalog.render(error))
                .join("; "),
            StageFailures::Schedule(error) => error.to_string(),
        }
    }
}

impl Default for TranscriptFormatter {
    fn default() -> Self {
        Self::new(MessageCatalog::spanish())
    }
}
