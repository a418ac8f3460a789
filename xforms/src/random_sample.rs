//! Random sampling as a filtering transformation.

use rand::Rng;

use crate::{Filter, filter};

/// Creates a [`Filter`] transducer that forwards each input independently
/// with probability `prob`.
///
/// Each step draws a fresh uniform value in `[0, 1)` from
/// [`rand::thread_rng`] and forwards iff it is below `prob`.
/// `random_sample(0.0)` never forwards and `random_sample(1.0)` always
/// forwards; no other setting is deterministic. For reproducible sampling
/// use [`random_sample_with`].
pub fn random_sample<In>(prob: f64) -> Filter<impl FnMut(&In) -> bool> {
    random_sample_with(prob, rand::thread_rng())
}

/// Creates a [`Filter`] transducer that forwards each input independently
/// with probability `prob`, drawing from the given `rng`.
pub fn random_sample_with<In, R>(prob: f64, mut rng: R) -> Filter<impl FnMut(&In) -> bool>
where
    R: Rng,
{
    filter(move |_input| rng.gen_range(0.0..1.0) < prob)
}
