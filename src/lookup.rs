use crate::api::AccountInfo;
use crate::error::LookupError;

/// Progress of the most recent lookup. The payload lives inside the
/// variant, so a result and an error can never coexist.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Success(AccountInfo),
    Failed(String),
}

/// A network request handed to the lookup service, tagged with the
/// submission counter so late replies from superseded requests can be told
/// apart from the current one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub address: String,
    pub generation: u64,
}

/// The widget's owned state: the raw input text plus the lookup phase.
#[derive(Debug, Clone, Default)]
pub struct LookupState {
    address: String,
    phase: Phase,
    generation: u64,
}

impl LookupState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Replaces the input text verbatim, no trimming on keystroke.
    pub fn set_address(&mut self, text: String) {
        self.address = text;
    }

    /// Decides what a submit does with the current input. Empty or
    /// all-whitespace input fails locally and never reaches the network;
    /// anything else moves to `Loading` and yields exactly one submission
    /// carrying the raw address.
    pub fn submit(&mut self) -> Option<Submission> {
        if self.address.trim().is_empty() {
            self.phase = Phase::Failed(LookupError::EmptyInput.to_string());
            return None;
        }

        self.generation += 1;
        self.phase = Phase::Loading;
        Some(Submission {
            address: self.address.clone(),
            generation: self.generation,
        })
    }

    /// Applies the outcome of a submission. Outcomes from superseded
    /// submissions are discarded so an out-of-order reply cannot overwrite
    /// the state of a newer one.
    pub fn finish(&mut self, generation: u64, outcome: Result<AccountInfo, LookupError>) {
        if generation != self.generation {
            return;
        }

        self.phase = match outcome {
            Ok(info) => Phase::Success(info),
            Err(e) => Phase::Failed(e.to_string()),
        };
    }
}
