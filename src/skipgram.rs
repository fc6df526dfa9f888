
// imports
use crate::error::SamplerError;
use crate::sampling::SamplingTable;

use rand::Rng;

pub struct SkipGrams {}

impl SkipGrams {

    /// Extracts the positive (target, context) pairs of one sequence.
    ///
    /// For every non-padding position an effective window is drawn uniformly
    /// from `{1..window_size}`, and every non-padding neighbor within that
    /// window (both sides) yields one pair. Varying the window per occurrence
    /// samples distant neighbors less often than adjacent ones. When a
    /// sampling table is supplied, each target is first retained with
    /// probability `table.keep(target)`; a dropped target contributes no
    /// pairs but can still serve as context for its neighbors.
    ///
    /// Pair direction is not deduplicated: `(a, b)` and `(b, a)` are both
    /// emitted whenever the windowing realizes both co-occurrence directions.
    /// Output order follows sequence positions, but callers should not rely
    /// on it.
    ///
    /// `sequence_index` only labels integrity errors, so a failing corpus
    /// pass can report which line was malformed.
    pub fn extract<R: Rng>(
        sequence: &[usize],
        sequence_index: usize,
        window_size: usize,
        vocab_size: usize,
        table: Option<&SamplingTable>,
        rng: &mut R,
    ) -> Result<Vec<(usize, usize)>, SamplerError> {

        if window_size < 1 {
            return Err(SamplerError::InvalidConfiguration(
                "window_size must be at least 1".to_string(),
            ));
        }
        if vocab_size == 0 {
            return Err(SamplerError::InvalidConfiguration(
                "vocab_size must be positive".to_string(),
            ));
        }

        let n = sequence.len() as i64;
        let mut pairs: Vec<(usize, usize)> = Vec::new();

        for t in 0..n {

            let target = sequence[t as usize];

            // padding is skipped, it is filler not vocabulary
            if target == 0 {
                continue;
            }
            if target >= vocab_size {
                return Err(SamplerError::CorpusIntegrity {
                    sequence: sequence_index,
                    position: t as usize,
                    id: target,
                    vocab_size,
                });
            }

            // subsample frequent targets before spending a window draw on them
            if let Some(table) = table {
                if rng.gen::<f64>() >= table.keep(target) {
                    continue;
                }
            }

            let effective_window = rng.gen_range(1..=window_size) as i64;

            for j in -effective_window..=effective_window {

                if j == 0 {
                    continue;
                }
                let pos = t + j;
                if pos < 0 || pos >= n {
                    continue;
                }

                let context = sequence[pos as usize];
                if context == 0 {
                    continue;
                }
                if context >= vocab_size {
                    return Err(SamplerError::CorpusIntegrity {
                        sequence: sequence_index,
                        position: pos as usize,
                        id: context,
                        vocab_size,
                    });
                }

                pairs.push((target, context));
            }
        }

        Ok(pairs)
    }
}
