use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded RNG for one game session; the same seed replays the same random moves.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }

    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.random_range(0..items.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut first = SessionRng::new(7);
        let mut second = SessionRng::new(7);
        let a: Vec<usize> = (0..16).map(|_| first.random_range(0..9)).collect();
        let b: Vec<usize> = (0..16).map(|_| second.random_range(0..9)).collect();
        assert_eq!(a, b);
        assert_eq!(first.seed(), 7);
    }

    #[test]
    fn test_choose_from_empty_slice() {
        let mut rng = SessionRng::new(1);
        let items: [u8; 0] = [];
        assert_eq!(rng.choose(&items), None);
    }

    #[test]
    fn test_choose_stays_in_slice() {
        let mut rng = SessionRng::from_random();
        let items = [3, 5, 8];
        for _ in 0..50 {
            assert!(items.contains(rng.choose(&items).unwrap()));
        }
    }
}
