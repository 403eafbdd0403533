//! Weighted categorical sampling over static distribution tables.
use rand::Rng;

/// Ordered list of `(category, weight)` pairs.
///
/// Tables are built once as statics; construction rejects an empty entry list,
/// so in a `static` initializer an empty table is a compile error.
#[derive(Debug, Clone, Copy)]
pub struct DistributionTable<T: 'static> {
    name: &'static str,
    entries: &'static [(T, u32)],
}

impl<T: Copy + PartialEq + 'static> DistributionTable<T> {
    /// Create a table from a non-empty slice of weighted entries.
    ///
    /// # Panics
    ///
    /// Panics when `entries` is empty.
    #[must_use]
    pub const fn new(name: &'static str, entries: &'static [(T, u32)]) -> Self {
        assert!(!entries.is_empty(), "distribution table needs an entry");
        Self { name, entries }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn entries(&self) -> &'static [(T, u32)] {
        self.entries
    }

    #[must_use]
    pub fn total_weight(&self) -> u32 {
        self.entries
            .iter()
            .fold(0_u32, |acc, (_, weight)| acc.saturating_add(*weight))
    }

    /// Category returned when the table cannot be sampled by weight.
    #[must_use]
    pub fn fallback(&self) -> T {
        self.entries[self.entries.len() - 1].0
    }

    /// Declared share of `category` as a fraction of the total weight.
    #[must_use]
    pub fn share(&self, category: T) -> f64 {
        let total = self.total_weight();
        if total == 0 {
            return 0.0;
        }
        let weight: u32 = self
            .entries
            .iter()
            .filter(|(entry, _)| *entry == category)
            .map(|(_, weight)| *weight)
            .sum();
        f64::from(weight) / f64::from(total)
    }

    /// Draw one category with probability proportional to its weight.
    ///
    /// A table whose weights sum to zero yields [`Self::fallback`].
    pub fn sample<R>(&self, rng: &mut R) -> T
    where
        R: Rng + ?Sized,
    {
        let total = self.total_weight();
        if total == 0 {
            log::warn!(
                "distribution table '{}' has zero total weight; using fallback",
                self.name
            );
            return self.fallback();
        }

        let mut roll = rng.gen_range(0..total);
        for (category, weight) in self.entries {
            if roll < *weight {
                return *category;
            }
            roll -= *weight;
        }

        self.fallback()
    }
}
