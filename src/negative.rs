
// imports
use crate::error::SamplerError;

use rand::Rng;

/// Draws negative context ids from a log-uniform distribution over `[0, V)`.
///
/// Under the most-frequent-first id convention of the vocabulary builder,
/// `P(k) = (ln(k + 2) - ln(k + 1)) / ln(V + 1)`, so frequent (low) ids are
/// exponentially more likely than rare ones. This approximates the noise
/// distribution of noise-contrastive estimation without holding any
/// per-token counts. If the vocabulary is not ordered by descending
/// frequency the bias rationale no longer holds.
///
/// The ids of one draw are pairwise distinct, but the true context of the
/// positive pair may appear among them: rejecting it would skew the noise
/// distribution, and the occasional collision is accepted training noise.
#[derive(Clone, Debug)]
pub struct NegativeSampler {
    num_ns: usize,
    vocab_size: usize,
    log_range: f64,
}

impl NegativeSampler {

    pub fn new(num_ns: usize, vocab_size: usize) -> Result<NegativeSampler, SamplerError> {

        if vocab_size == 0 {
            return Err(SamplerError::InvalidConfiguration(
                "vocab_size must be positive".to_string(),
            ));
        }
        if num_ns >= vocab_size {
            return Err(SamplerError::InvalidConfiguration(format!(
                "cannot draw {} distinct negatives from a vocabulary of size {}",
                num_ns, vocab_size
            )));
        }

        Ok(NegativeSampler {
            num_ns,
            vocab_size,
            log_range: ((vocab_size + 1) as f64).ln(),
        })
    }

    pub fn num_ns(&self) -> usize {
        self.num_ns
    }

    /// Draws `num_ns` pairwise-distinct ids; deterministic for a fixed rng
    /// stream, so a seeded run reproduces its negatives draw for draw.
    pub fn draw<R: Rng>(&self, rng: &mut R) -> Vec<usize> {

        let mut picked: Vec<usize> = Vec::with_capacity(self.num_ns);

        // inverse transform: floor(exp(u * ln(V + 1))) - 1 lands in [0, V)
        // num_ns < vocab_size guarantees this loop terminates
        while picked.len() < self.num_ns {
            let u: f64 = rng.gen();
            let id = ((u * self.log_range).exp().floor() as usize)
                .saturating_sub(1)
                .min(self.vocab_size - 1);
            if !picked.contains(&id) {
                picked.push(id);
            }
        }

        picked
    }
}


#[cfg(test)]
mod tests {

    use super::NegativeSampler;
    use crate::error::SamplerError;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn draws_distinct_ids_within_the_vocabulary() {

        let sampler = NegativeSampler::new(4, 8).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let negatives = sampler.draw(&mut rng);
        assert_eq!(negatives.len(), 4);
        for (i, id) in negatives.iter().enumerate() {
            assert!(*id < 8);
            assert!(!negatives[..i].contains(id));
        }
    }

    #[test]
    fn same_seed_reproduces_the_same_draws() {

        let sampler = NegativeSampler::new(4, 8).unwrap();

        let mut a = StdRng::seed_from_u64(123);
        let mut b = StdRng::seed_from_u64(123);

        // call ordinal matters: compare several consecutive draws
        for _ in 0..10 {
            assert_eq!(sampler.draw(&mut a), sampler.draw(&mut b));
        }
    }

    #[test]
    fn low_ids_are_sampled_far_more_often() {

        // under log-uniform sampling over [0, 100), id 0 carries ~15% of the
        // mass while id 99 carries ~0.2%, so the gap is unambiguous
        let sampler = NegativeSampler::new(1, 100).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let mut low = 0usize;
        let mut high = 0usize;
        for _ in 0..10000 {
            let id = sampler.draw(&mut rng)[0];
            if id == 0 {
                low += 1;
            }
            if id == 99 {
                high += 1;
            }
        }
        assert!(low > 10 * (high + 1));
    }

    #[test]
    fn zero_negatives_yield_an_empty_draw() {
        let sampler = NegativeSampler::new(0, 1).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(sampler.draw(&mut rng).is_empty());
    }

    #[test]
    fn oversized_request_is_rejected_before_sampling() {
        match NegativeSampler::new(8, 8) {
            Err(SamplerError::InvalidConfiguration(_)) => {}
            other => panic!("expected InvalidConfiguration, got {:?}", other),
        }
    }
}
