//! Randomness for the substituted suffix.
//! The generator asks a `SuffixSource` for each draw so tests can script collisions.

use rand::Rng;
use rand::distr::Alphanumeric;
use rand::rngs::ThreadRng;

use crate::template::SUFFIX_LEN;

/// Supplies six-character suffixes drawn from `[A-Za-z0-9]`.
pub trait SuffixSource {
    /// Produce the next suffix candidate.
    fn next_suffix(&mut self) -> [u8; SUFFIX_LEN];
}

/// `SuffixSource` backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomSuffix<R> {
    rng: R,
}

impl<R: Rng> RandomSuffix<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSuffix<ThreadRng> {
    /// Thread-local generator, reseeded from the OS.
    pub fn thread_local() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> SuffixSource for RandomSuffix<R> {
    fn next_suffix(&mut self) -> [u8; SUFFIX_LEN] {
        let mut out = [0u8; SUFFIX_LEN];
        for b in out.iter_mut() {
            *b = self.rng.sample(Alphanumeric);
        }
        out
    }
}

impl<S: SuffixSource + ?Sized> SuffixSource for &mut S {
    fn next_suffix(&mut self) -> [u8; SUFFIX_LEN] {
        (**self).next_suffix()
    }
}
