
use std::error::Error;
use std::fmt::Display;

/// Errors raised while turning a corpus into training examples.
///
/// `InvalidConfiguration` is raised before any work starts (bad window size,
/// vocabulary size, or negative-sample count) and is never retried.
/// `CorpusIntegrity` aborts a whole corpus pass when a sequence holds an id
/// outside the vocabulary; a partially built dataset is never returned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SamplerError {
    InvalidConfiguration(String),
    CorpusIntegrity {
        sequence: usize,
        position: usize,
        id: usize,
        vocab_size: usize,
    },
}

impl Display for SamplerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SamplerError::InvalidConfiguration(msg) => {
                write!(f, "invalid configuration: {}", msg)
            }
            SamplerError::CorpusIntegrity { sequence, position, id, vocab_size } => {
                write!(
                    f,
                    "corpus integrity: sequence {} position {} holds id {} outside vocabulary of size {}",
                    sequence, position, id, vocab_size
                )
            }
        }
    }
}

impl Error for SamplerError {}
