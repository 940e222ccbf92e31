use rand::Rng;

use crate::caller_engine::models::MAX_NUMBER;

/// The balls not yet called, in draw order. The next ball is the last element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    balls: Vec<u8>,
}

impl Pool {
    /// Build 1..=75 and shuffle it with `rng`.
    pub fn new_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut balls: Vec<u8> = (1..=MAX_NUMBER).collect();

        // Fisher-Yates shuffle
        for i in (1..balls.len()).rev() {
            let j = rng.gen_range(0..=i);
            balls.swap(i, j);
        }

        Pool { balls }
    }

    /// Take the next ball off the end; `None` once empty.
    pub fn draw(&mut self) -> Option<u8> {
        self.balls.pop()
    }

    pub fn len(&self) -> usize {
        self.balls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    pub fn contains(&self, n: u8) -> bool {
        self.balls.contains(&n)
    }

    /// Remaining balls; the last element is drawn next.
    pub fn as_slice(&self) -> &[u8] {
        &self.balls
    }
}

/// A fresh, uniformly shuffled pool of all 75 numbers.
pub fn generate_pool<R: Rng>(rng: &mut R) -> Pool {
    Pool::new_shuffled(rng)
}
