use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

/// Source of lucky-draw randomness.
///
/// Given the registry indices of the eligible members, returns the registry
/// index of the winner. The controller rejects any answer outside `eligible`.
pub trait Picker {
    fn pick(&mut self, eligible: &[usize]) -> Option<usize>;
}

/// Uniform selection over eligible members, regardless of contribution.
/// Seeded once per process.
#[derive(Debug, Clone)]
pub struct Fair(SmallRng);

impl Fair {
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Default for Fair {
    fn default() -> Self {
        Self(SmallRng::from_rng(&mut rand::rng()))
    }
}

impl Picker for Fair {
    fn pick(&mut self, eligible: &[usize]) -> Option<usize> {
        eligible.choose(&mut self.0).copied()
    }
}

impl<F> Picker for F
where
    F: FnMut(&[usize]) -> Option<usize>,
{
    fn pick(&mut self, eligible: &[usize]) -> Option<usize> {
        self(eligible)
    }
}
