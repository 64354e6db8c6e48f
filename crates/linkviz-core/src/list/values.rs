use rand::{Rng, SeedableRng, rngs::StdRng};

/// Smallest value a [`ValueSource`] produces by default.
pub const DEFAULT_MIN_VALUE: i64 = 1;

/// Largest value a [`ValueSource`] produces by default.
pub const DEFAULT_MAX_VALUE: i64 = 100;

/// Generator for node values that were not supplied by the user.
///
/// A seeded source always yields the same sequence, which keeps scripted
/// sessions and tests reproducible.
///
/// # Examples
///
/// ```
/// # use linkviz_core::list::ValueSource;
/// let mut a = ValueSource::new(1, 100, Some(7));
/// let mut b = ValueSource::new(1, 100, Some(7));
/// let first = a.next_value();
/// assert_eq!(first, b.next_value());
/// assert!((1..=100).contains(&first));
/// ```
#[derive(Debug, Clone)]
pub struct ValueSource {
    rng: StdRng,
    min: i64,
    max: i64,
}

impl ValueSource {
    /// Creates a source producing values in `min..=max`.
    ///
    /// The bounds are swapped if given in the wrong order. Without a seed the
    /// generator is seeded from the operating system.
    pub fn new(min: i64, max: i64, seed: Option<u64>) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng, min, max }
    }

    /// Creates a seeded source over the default range
    pub fn seeded(seed: u64) -> Self {
        Self::new(DEFAULT_MIN_VALUE, DEFAULT_MAX_VALUE, Some(seed))
    }

    /// Returns the next generated value
    pub fn next_value(&mut self) -> i64 {
        self.rng.random_range(self.min..=self.max)
    }

    /// Returns the inclusive `(min, max)` range of generated values
    pub fn range(&self) -> (i64, i64) {
        (self.min, self.max)
    }
}

impl Default for ValueSource {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_VALUE, DEFAULT_MAX_VALUE, None)
    }
}
