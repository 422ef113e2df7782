//! Per-category display ID counters

use draftwatch_domain::{Category, DisplayId};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

/// Next sequence number for each category
///
/// Counters only move forward: seeding and [`observe`](Self::observe) raise
/// a counter past the highest number seen, and every allocation consumes the
/// current value before incrementing it. Two allocations from the same
/// counters therefore never share a number within a category. Once
/// `u32::MAX` has been handed out the category is exhausted and allocation
/// returns `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCounters {
    next: [Option<u32>; 3],
}

impl CategoryCounters {
    /// Counters with nothing allocated yet; every category starts at 1
    pub fn new() -> Self {
        Self { next: [Some(1); 3] }
    }

    /// Counters seeded from previously allocated display IDs
    ///
    /// Each category starts one past the highest number found for its prefix.
    /// Identifiers that are not `ERE-n`, `SHP-n` or `SHD-n` are skipped, as
    /// are identifiers numbered `u32::MAX`, which leave nothing to count past.
    ///
    /// # Examples
    ///
    /// ```
    /// use draftwatch_domain::Category;
    /// use draftwatch_extractor::CategoryCounters;
    ///
    /// let counters = CategoryCounters::seeded(["ERE-005", "SHP-002", "bogus"]);
    /// assert_eq!(counters.peek(Category::ErectionDrawings), Some(6));
    /// assert_eq!(counters.peek(Category::Shipper), Some(3));
    /// assert_eq!(counters.peek(Category::ShopDrawings), Some(1));
    /// ```
    pub fn seeded<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counters = Self::new();
        counters.observe_all(ids);
        counters
    }

    /// Raise counters past every recognised identifier; returns how many matched
    pub fn observe_all<I, S>(&mut self, ids: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut matched = 0;
        let mut skipped = 0;
        for id in ids {
            if self.observe(id.as_ref()) {
                matched += 1;
            } else {
                skipped += 1;
            }
        }
        debug!("Observed {} display IDs, skipped {} malformed", matched, skipped);
        matched
    }

    /// Raise the matching category's counter past `id`
    ///
    /// Returns `false` without touching anything when `id` is malformed or
    /// its number has no successor.
    pub fn observe(&mut self, id: &str) -> bool {
        let Some(id) = DisplayId::parse(id) else {
            return false;
        };
        let Some(after) = id.number().checked_add(1) else {
            return false;
        };
        let slot = &mut self.next[id.category().index()];
        if let Some(next) = slot {
            *next = (*next).max(after);
        }
        true
    }

    /// The number the next allocation in `category` will receive, or `None`
    /// when the category is exhausted
    pub fn peek(&self, category: Category) -> Option<u32> {
        self.next[category.index()]
    }

    /// Take the next display ID for `category`
    ///
    /// Returns `None` once every number in the category has been issued.
    pub fn allocate(&mut self, category: Category) -> Option<DisplayId> {
        let slot = &mut self.next[category.index()];
        let number = (*slot)?;
        *slot = number.checked_add(1);
        Some(DisplayId::new(category, number))
    }
}

impl Default for CategoryCounters {
    fn default() -> Self {
        Self::new()
    }
}

/// Category counters shared between threads
///
/// Holding the lock for a whole parse keeps each parse's allocations
/// contiguous and rules out collisions between concurrent parses.
#[derive(Debug, Clone, Default)]
pub struct SharedCounters {
    inner: Arc<Mutex<CategoryCounters>>,
}

impl SharedCounters {
    /// Wrap counters for shared use
    pub fn new(counters: CategoryCounters) -> Self {
        Self {
            inner: Arc::new(Mutex::new(counters)),
        }
    }

    /// Run `f` with exclusive access to the counters
    ///
    /// A poisoned lock is recovered: counters are only ever raised, so the
    /// state a panicking holder left behind is still safe to allocate from.
    pub fn with<R>(&self, f: impl FnOnce(&mut CategoryCounters) -> R) -> R {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// Copy of the current counter values
    pub fn snapshot(&self) -> CategoryCounters {
        self.with(|counters| counters.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;
    use std::thread;

    #[test]
    fn test_fresh_counters_start_at_one() {
        let mut counters = CategoryCounters::new();
        assert_eq!(counters.allocate(Category::ShopDrawings).unwrap().to_string(), "SHD-001");
        assert_eq!(counters.allocate(Category::ShopDrawings).unwrap().to_string(), "SHD-002");
        assert_eq!(counters.allocate(Category::Shipper).unwrap().to_string(), "SHP-001");
    }

    #[test]
    fn test_seeding_takes_maximum_per_prefix() {
        let mut counters = CategoryCounters::seeded(["ERE-005", "ERE-002", "SHP-002", "SHP-010"]);
        assert_eq!(counters.allocate(Category::ErectionDrawings).unwrap().to_string(), "ERE-006");
        assert_eq!(counters.allocate(Category::Shipper).unwrap().to_string(), "SHP-011");
        assert_eq!(counters.allocate(Category::ShopDrawings).unwrap().to_string(), "SHD-001");
    }

    #[test]
    fn test_malformed_seeds_are_ignored() {
        let mut counters = CategoryCounters::new();
        let matched = counters.observe_all(["DIT-2024-005", "ERE-", "ISS-009", "", "SHD-12x"]);
        assert_eq!(matched, 0);
        assert_eq!(counters, CategoryCounters::new());
    }

    #[test]
    fn test_observe_never_lowers() {
        let mut counters = CategoryCounters::seeded(["SHP-020"]);
        assert!(counters.observe("SHP-003"));
        assert_eq!(counters.peek(Category::Shipper), Some(21));
    }

    #[test]
    fn test_largest_number_is_not_a_seed() {
        let mut counters = CategoryCounters::new();
        assert!(!counters.observe("ERE-4294967295"));
        assert_eq!(counters.peek(Category::ErectionDrawings), Some(1));

        let mut counters = CategoryCounters::seeded(["ERE-4294967295", "ERE-007"]);
        assert_eq!(counters.allocate(Category::ErectionDrawings).unwrap().to_string(), "ERE-008");
    }

    #[test]
    fn test_exhausted_category_stops_allocating() {
        let mut counters = CategoryCounters::seeded(["ERE-4294967294"]);
        let last = counters.allocate(Category::ErectionDrawings).unwrap();
        assert_eq!(last.number(), u32::MAX);
        assert_eq!(counters.peek(Category::ErectionDrawings), None);
        assert_eq!(counters.allocate(Category::ErectionDrawings), None);
        assert_eq!(counters.allocate(Category::ErectionDrawings), None);

        // Other categories are unaffected, and observing cannot revive it.
        assert!(counters.observe("ERE-005"));
        assert_eq!(counters.peek(Category::ErectionDrawings), None);
        assert_eq!(counters.allocate(Category::Shipper).unwrap().to_string(), "SHP-001");
    }

    #[test]
    fn test_shared_counters_across_threads() {
        let shared = SharedCounters::new(CategoryCounters::seeded(["SHD-100"]));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || {
                    (0..25)
                        .map(|_| shared.with(|c| c.allocate(Category::ShopDrawings).unwrap()))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "duplicate id {}", id);
            }
        }
        assert_eq!(seen.len(), 200);
        assert_eq!(shared.snapshot().peek(Category::ShopDrawings), Some(301));
    }

    proptest! {
        #[test]
        fn prop_allocations_never_collide(
            seeds in proptest::collection::vec((0usize..3, 0u32..5_000), 0..20),
            picks in proptest::collection::vec(0usize..3, 0..60),
        ) {
            let seed_ids: Vec<String> = seeds
                .iter()
                .map(|&(idx, n)| DisplayId::new(Category::ALL[idx], n).to_string())
                .collect();
            let mut counters = CategoryCounters::seeded(&seed_ids);

            let mut issued = HashSet::new();
            for idx in picks {
                let id = counters.allocate(Category::ALL[idx]).unwrap();
                prop_assert!(!seed_ids.contains(&id.to_string()));
                prop_assert!(issued.insert(id));
            }
        }

        #[test]
        fn prop_counters_are_monotonic(ids in proptest::collection::vec("(ERE|SHP|SHD|XYZ)-[0-9]{1,4}", 0..30)) {
            let mut counters = CategoryCounters::new();
            for id in &ids {
                let before = Category::ALL.map(|c| counters.peek(c).unwrap_or(u32::MAX));
                counters.observe(id);
                let after = Category::ALL.map(|c| counters.peek(c).unwrap_or(u32::MAX));
                for i in 0..3 {
                    prop_assert!(after[i] >= before[i]);
                }
            }
        }
    }
}
