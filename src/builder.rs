
// imports
use crate::dataset::{Dataset, TrainingExample};
use crate::error::SamplerError;
use crate::negative::NegativeSampler;
use crate::sampling::SamplingTable;
use crate::skipgram::SkipGrams;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

/// Drives one corpus pass: every sequence is run through pair extraction,
/// negative sampling and example assembly, and the results are folded into
/// one `Dataset` in corpus order.
///
/// Sequences are processed on the rayon pool. Each one derives its own rng
/// seed from the run seed and its corpus index, so the dataset of a fixed
/// seed is identical for any thread count and scheduling order.
pub struct DatasetBuilder {
    window_size: usize,
    num_ns: usize,
    vocab_size: usize,
    seed: u64,
    table: Option<SamplingTable>,
    negative: NegativeSampler,
}

impl DatasetBuilder {

    pub fn new(
        window_size: usize,
        num_ns: usize,
        vocab_size: usize,
        seed: u64,
        subsample: bool,
    ) -> Result<DatasetBuilder, SamplerError> {

        if window_size < 1 {
            return Err(SamplerError::InvalidConfiguration(
                "window_size must be at least 1".to_string(),
            ));
        }

        // the sampler validates vocab_size and num_ns before any work starts
        let negative = NegativeSampler::new(num_ns, vocab_size)?;
        let table = if subsample {
            Some(SamplingTable::new(vocab_size)?)
        } else {
            None
        };

        Ok(DatasetBuilder {
            window_size,
            num_ns,
            vocab_size,
            seed,
            table,
            negative,
        })
    }

    // splitmix64 of (seed, index), a cheap way to give every sequence an
    // independent stream without coordinating between workers
    fn sequence_seed(&self, index: usize) -> u64 {
        let mut z = self
            .seed
            .wrapping_add((index as u64).wrapping_add(1).wrapping_mul(0x9E3779B97F4A7C15));
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }

    fn build_sequence(
        &self,
        index: usize,
        sequence: &[usize],
    ) -> Result<Vec<TrainingExample>, SamplerError> {

        // one rng per sequence, consumed in traversal order: window and
        // retention draws during extraction, then negatives pair by pair
        let mut rng = StdRng::seed_from_u64(self.sequence_seed(index));

        let pairs = SkipGrams::extract(
            sequence,
            index,
            self.window_size,
            self.vocab_size,
            self.table.as_ref(),
            &mut rng,
        )?;

        let mut examples = Vec::with_capacity(pairs.len());
        for pair in pairs {
            let negatives = self.negative.draw(&mut rng);
            examples.push(TrainingExample::assemble(pair, negatives, self.num_ns)?);
        }

        Ok(examples)
    }

    /// Runs the full pass. Any malformed sequence fails the whole corpus: a
    /// partial dataset would silently under-represent it.
    pub fn build(&self, corpus: &[Vec<usize>]) -> Result<Dataset, SamplerError> {

        let per_sequence: Vec<Vec<TrainingExample>> = corpus
            .par_iter()
            .enumerate()
            .map(|(index, sequence)| self.build_sequence(index, sequence))
            .collect::<Result<Vec<Vec<TrainingExample>>, SamplerError>>()?;

        let mut dataset = Dataset::new();
        for examples in per_sequence {
            for example in examples {
                dataset.push(example);
            }
        }

        Ok(dataset)
    }
}


#[cfg(test)]
mod tests {

    use super::DatasetBuilder;
    use crate::error::SamplerError;

    fn toy_corpus() -> Vec<Vec<usize>> {
        vec![
            vec![1, 2, 3, 4, 5, 0, 0, 0],
            vec![5, 6, 7, 1, 2, 3, 0, 0],
            vec![0, 0, 0, 0, 0, 0, 0, 0],
            vec![7, 1, 4, 4, 2, 6, 5, 3],
        ]
    }

    #[test]
    fn fixed_seed_reproduces_the_dataset() {

        // subsampling off so the toy corpus yields a dense dataset
        let builder = DatasetBuilder::new(2, 3, 8, 99, false).unwrap();

        let first = builder.build(&toy_corpus()).unwrap();
        let second = builder.build(&toy_corpus()).unwrap();

        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn every_example_honors_the_shape_and_label_invariants() {

        let num_ns = 3;
        let vocab_size = 8;
        let builder = DatasetBuilder::new(2, num_ns, vocab_size, 5, false).unwrap();
        let dataset = builder.build(&toy_corpus()).unwrap();
        assert!(!dataset.is_empty());

        for k in 0..dataset.len() {

            let target = dataset.targets()[k];
            let context = &dataset.contexts()[k];
            let label = &dataset.labels()[k];

            assert_eq!(context.len(), num_ns + 1);
            assert_eq!(label.len(), num_ns + 1);

            // exactly one positive label, at the true context slot
            assert_eq!(label[0], 1);
            assert_eq!(label.iter().map(|l| *l as usize).sum::<usize>(), 1);

            // padding never leaks into targets or true contexts
            assert_ne!(target, 0);
            assert_ne!(context[0], 0);

            assert!(target < vocab_size);
            for id in context {
                assert!(*id < vocab_size);
            }
        }
    }

    #[test]
    fn subsampled_pass_still_honors_the_invariants() {

        let builder = DatasetBuilder::new(2, 2, 8, 11, true).unwrap();
        let dataset = builder.build(&toy_corpus()).unwrap();

        // a tiny vocabulary is aggressively subsampled, the pass may well
        // come back empty, but whatever survives must be well-formed
        for k in 0..dataset.len() {
            assert_ne!(dataset.targets()[k], 0);
            assert_eq!(dataset.contexts()[k].len(), 3);
            assert_eq!(dataset.labels()[k][0], 1);
        }
    }

    #[test]
    fn malformed_sequence_fails_the_whole_pass() {

        let builder = DatasetBuilder::new(2, 3, 8, 1, false).unwrap();
        let corpus = vec![vec![1, 2, 3, 0], vec![1, 8, 2, 0]];

        match builder.build(&corpus) {
            Err(SamplerError::CorpusIntegrity { sequence, id, .. }) => {
                assert_eq!(sequence, 1);
                assert_eq!(id, 8);
            }
            other => panic!("expected CorpusIntegrity, got {:?}", other),
        }
    }

    #[test]
    fn configuration_is_validated_before_any_work() {

        assert!(matches!(
            DatasetBuilder::new(0, 4, 8, 1, false),
            Err(SamplerError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            DatasetBuilder::new(2, 4, 0, 1, false),
            Err(SamplerError::InvalidConfiguration(_))
        ));
        // cannot draw more distinct negatives than the vocabulary holds
        assert!(matches!(
            DatasetBuilder::new(2, 8, 8, 1, false),
            Err(SamplerError::InvalidConfiguration(_))
        ));
    }
}
