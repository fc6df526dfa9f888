
// imports
use crate::error::SamplerError;

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

/// One supervised example: classify the true context of `target` against
/// `num_ns` sampled negatives.
///
/// `context[0]` is the true context, the rest are negatives; `label` is the
/// parallel `[1, 0, 0, ...]` vector, so both always hold `num_ns + 1` values
/// and exactly one label entry is 1.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingExample {
    pub target: usize,
    pub context: Vec<usize>,
    pub label: Vec<u8>,
}

impl TrainingExample {

    /// Combines one positive pair with its negatives. `num_ns` is the
    /// configured draw size; a mismatch with the supplied negatives means a
    /// broken sampler contract upstream.
    pub fn assemble(
        pair: (usize, usize),
        negatives: Vec<usize>,
        num_ns: usize,
    ) -> Result<TrainingExample, SamplerError> {

        if negatives.len() != num_ns {
            return Err(SamplerError::InvalidConfiguration(format!(
                "expected {} negatives per example, sampler produced {}",
                num_ns,
                negatives.len()
            )));
        }

        let (target, true_context) = pair;

        let mut context = Vec::with_capacity(num_ns + 1);
        context.push(true_context);
        context.extend(negatives);

        let mut label = vec![0u8; num_ns + 1];
        label[0] = 1;

        Ok(TrainingExample { target, context, label })
    }
}


/// Three index-aligned collections: `targets[k]`, `contexts[k]` and
/// `labels[k]` together form one example. Built once per corpus pass and
/// immutable afterward; shuffling and batching are the training side's job.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    targets: Vec<usize>,
    contexts: Vec<Vec<usize>>,
    labels: Vec<Vec<u8>>,
}

impl Dataset {

    pub fn new() -> Dataset {
        Dataset::default()
    }

    pub fn push(&mut self, example: TrainingExample) {
        self.targets.push(example.target);
        self.contexts.push(example.context);
        self.labels.push(example.label);
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn targets(&self) -> &[usize] {
        &self.targets
    }

    pub fn contexts(&self) -> &[Vec<usize>] {
        &self.contexts
    }

    pub fn labels(&self) -> &[Vec<u8>] {
        &self.labels
    }

    /// Re-shapes the three collections into dense arrays for export: targets
    /// of shape (N,), contexts and labels of shape (N, num_ns + 1).
    pub fn to_arrays(&self) -> Result<(Array1<i64>, Array2<i64>, Array2<i64>), SamplerError> {

        let n = self.targets.len();
        let width = self.contexts.first().map_or(0, Vec::len);

        let mut context_flat: Vec<i64> = Vec::with_capacity(n * width);
        let mut label_flat: Vec<i64> = Vec::with_capacity(n * width);

        for (context, label) in self.contexts.iter().zip(&self.labels) {
            if context.len() != width || label.len() != width {
                return Err(SamplerError::InvalidConfiguration(format!(
                    "ragged dataset rows, expected width {}",
                    width
                )));
            }
            context_flat.extend(context.iter().map(|id| *id as i64));
            label_flat.extend(label.iter().map(|l| *l as i64));
        }

        let targets = Array1::from(
            self.targets.iter().map(|t| *t as i64).collect::<Vec<i64>>(),
        );
        let contexts = Array2::from_shape_vec((n, width), context_flat)
            .map_err(|e| SamplerError::InvalidConfiguration(e.to_string()))?;
        let labels = Array2::from_shape_vec((n, width), label_flat)
            .map_err(|e| SamplerError::InvalidConfiguration(e.to_string()))?;

        Ok((targets, contexts, labels))
    }
}


#[cfg(test)]
mod tests {

    use super::{Dataset, TrainingExample};
    use crate::error::SamplerError;

    #[test]
    fn true_context_leads_and_labels_mark_it() {

        let example = TrainingExample::assemble((3, 6), vec![1, 0, 4, 2], 4).unwrap();

        assert_eq!(example.target, 3);
        assert_eq!(example.context.len(), 5);
        assert_eq!(example.context[0], 6);
        assert_eq!(example.label, vec![1, 0, 0, 0, 0]);
    }

    #[test]
    fn zero_negatives_make_a_single_slot_example() {

        // vocab of one real token, no negatives to draw
        let example = TrainingExample::assemble((2, 5), Vec::new(), 0).unwrap();

        assert_eq!(example.context, vec![5]);
        assert_eq!(example.label, vec![1]);
    }

    #[test]
    fn negatives_length_mismatch_is_rejected() {
        match TrainingExample::assemble((3, 6), vec![1, 2], 4) {
            Err(SamplerError::InvalidConfiguration(_)) => {}
            other => panic!("expected InvalidConfiguration, got {:?}", other),
        }
    }

    #[test]
    fn arrays_are_index_aligned_with_the_examples() {

        let mut dataset = Dataset::new();
        dataset.push(TrainingExample::assemble((3, 6), vec![1, 4], 2).unwrap());
        dataset.push(TrainingExample::assemble((5, 2), vec![0, 7], 2).unwrap());
        assert_eq!(dataset.len(), 2);

        let (targets, contexts, labels) = dataset.to_arrays().unwrap();
        assert_eq!(targets.shape(), &[2]);
        assert_eq!(contexts.shape(), &[2, 3]);
        assert_eq!(labels.shape(), &[2, 3]);

        assert_eq!(targets[0], 3);
        assert_eq!(contexts[[0, 0]], 6);
        assert_eq!(contexts[[1, 0]], 2);
        assert_eq!(labels[[0, 0]], 1);
        assert_eq!(labels[[0, 1]], 0);
    }

    #[test]
    fn empty_dataset_exports_empty_arrays() {
        let dataset = Dataset::new();
        let (targets, contexts, labels) = dataset.to_arrays().unwrap();
        assert_eq!(targets.len(), 0);
        assert_eq!(contexts.shape(), &[0, 0]);
        assert_eq!(labels.shape(), &[0, 0]);
    }
}
