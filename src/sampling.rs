
// imports
use crate::error::SamplerError;

// word-frequency approximation constant (Euler-Mascheroni), used when
// estimating the frequency of the rank-i word under a Zipfian assumption
const EULER_GAMMA: f64 = 0.577;

// default aggressiveness of the subsampling, matching common word2vec setups
const DEFAULT_SAMPLING_FACTOR: f64 = 1e-5;

/// Rank-indexed keep-probabilities for subsampling frequent tokens.
///
/// `probs[i]` is the probability that a token with id `i` is retained as a
/// target when it appears in a sequence. Ids are assumed to be assigned by
/// descending corpus frequency (id 1 most frequent), so the most common
/// tokens get the smallest keep-probability and rare tokens are kept almost
/// always. The table depends only on the vocabulary size, not on actual
/// counts: the frequency of rank i is approximated by the Zipfian estimate
/// `1 / (i * (ln(i) + gamma) + 0.5 - 1 / (12 i))`.
///
/// Id 0 is the padding sentinel and never reaches the table in practice,
/// since padding positions are skipped during pair extraction.
#[derive(Clone, Debug, PartialEq)]
pub struct SamplingTable {
    probs: Vec<f64>,
}

impl SamplingTable {

    pub fn new(vocab_size: usize) -> Result<SamplingTable, SamplerError> {
        SamplingTable::with_factor(vocab_size, DEFAULT_SAMPLING_FACTOR)
    }

    pub fn with_factor(vocab_size: usize, sampling_factor: f64) -> Result<SamplingTable, SamplerError> {

        if vocab_size == 0 {
            return Err(SamplerError::InvalidConfiguration(
                "vocab_size must be positive to build a sampling table".to_string(),
            ));
        }

        // keep = min(1, sqrt(factor / frequency(rank))), rank 0 treated as rank 1
        let probs = (0..vocab_size)
            .map(|i| {
                let rank = i.max(1) as f64;
                let inv_fq = rank * (rank.ln() + EULER_GAMMA) + 0.5 - 1.0 / (12.0 * rank);
                (sampling_factor * inv_fq).sqrt().min(1.0)
            })
            .collect();

        Ok(SamplingTable { probs })
    }

    pub fn len(&self) -> usize {
        self.probs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probs.is_empty()
    }

    // out-of-range ids are kept unconditionally
    pub fn keep(&self, id: usize) -> f64 {
        self.probs.get(id).copied().unwrap_or(1.0).clamp(0.0, 1.0)
    }
}
