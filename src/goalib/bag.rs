use std::collections::BTreeMap;

use crate::triplet::Triplet;

/// Remaining-count map shared by all three orderings.
///
/// Counts are signed: firing on a value whose count is already zero drives it
/// negative, and a negative count is still "present" to the cursor skip.
#[derive(Debug, Clone, Default)]
pub struct Bag {
    counts: BTreeMap<Triplet, i64>,
    remaining: usize,
}

impl Bag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, item: Triplet) {
        *self.counts.entry(item).or_insert(0) += 1;
        self.remaining += 1;
    }

    pub fn count(&self, item: &Triplet) -> i64 {
        self.counts.get(item).copied().unwrap_or(0)
    }

    /// Decrement the count for `item` unconditionally and return the new count.
    pub fn take(&mut self, item: &Triplet) -> i64 {
        let count = self.counts.entry(*item).or_insert(0);
        if *count > 0 {
            self.remaining -= 1;
        }
        *count -= 1;
        *count
    }

    /// Unconsumed instances, ignoring values that were over-consumed.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }
}

impl FromIterator<Triplet> for Bag {
    fn from_iter<I: IntoIterator<Item = Triplet>>(iter: I) -> Self {
        let mut bag = Bag::new();
        for item in iter {
            bag.insert(item);
        }
        bag
    }
}

#[cfg(test)]
mod tests {
    use super::Bag;
    use crate::triplet::Triplet;

    #[test]
    fn test_duplicates_counted() {
        let t = Triplet::new(4, 0, 0);
        let mut bag = [t, t, Triplet::new(1, 2, 3)].into_iter().collect::<Bag>();
        assert_eq!(bag.distinct(), 2);
        assert_eq!(bag.count(&t), 2);
        assert_eq!(bag.remaining(), 3);
        assert_eq!(bag.take(&t), 1);
        assert_eq!(bag.take(&t), 0);
        assert_eq!(bag.remaining(), 1);
    }

    #[test]
    fn test_over_consumption_goes_negative() {
        let t = Triplet::new(5, 5, 3);
        let mut bag = [t].into_iter().collect::<Bag>();
        assert_eq!(bag.take(&t), 0);
        assert_eq!(bag.take(&t), -1);
        assert_eq!(bag.count(&t), -1);
        assert_eq!(bag.remaining(), 0);
        assert!(bag.is_empty());
    }

    #[test]
    fn test_unknown_value() {
        let bag = Bag::new();
        assert_eq!(bag.count(&Triplet::new(1, 1, 1)), 0);
        assert!(bag.is_empty());
    }
}
