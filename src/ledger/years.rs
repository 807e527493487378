//! Year index
//!
//! The ascending, duplicate-free set of years that have at least one
//! transaction. Kept sorted by inserting in place; never re-sorted.

/// Sorted set of transaction years
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YearIndex {
    years: Vec<i32>,
}

impl YearIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a persisted list, which must already be strictly ascending
    pub fn from_sorted(years: Vec<i32>) -> Result<Self, String> {
        if let Some(pair) = years.windows(2).find(|w| w[0] >= w[1]) {
            return Err(format!(
                "years must be strictly ascending, found {} before {}",
                pair[0], pair[1]
            ));
        }
        Ok(Self { years })
    }

    /// Record a year, returning whether it was newly inserted
    pub fn ensure(&mut self, year: i32) -> bool {
        match self.years.binary_search(&year) {
            Ok(_) => false,
            Err(pos) => {
                self.years.insert(pos, year);
                true
            }
        }
    }

    pub fn contains(&self, year: i32) -> bool {
        self.years.binary_search(&year).is_ok()
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.years
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.years.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_order_inserts_stay_sorted() {
        let mut index = YearIndex::new();
        assert!(index.ensure(2023));
        assert!(index.ensure(2021));
        assert!(index.ensure(2022));
        assert_eq!(index.as_slice(), &[2021, 2022, 2023]);
    }

    #[test]
    fn test_existing_year_not_duplicated() {
        let mut index = YearIndex::new();
        index.ensure(2024);
        assert!(!index.ensure(2024));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_append_past_end() {
        let mut index = YearIndex::new();
        index.ensure(1999);
        index.ensure(2030);
        assert_eq!(index.as_slice(), &[1999, 2030]);
        assert!(index.contains(2030));
        assert!(!index.contains(2000));
    }

    #[test]
    fn test_sorted_after_every_insert() {
        let mut index = YearIndex::new();
        for year in [2010, 2005, 2020, 2005, 2015, 2000, 2025, 2010] {
            index.ensure(year);
            assert!(index.as_slice().windows(2).all(|w| w[0] < w[1]));
        }
        assert_eq!(index.as_slice(), &[2000, 2005, 2010, 2015, 2020, 2025]);
    }

    #[test]
    fn test_from_sorted() {
        assert!(YearIndex::from_sorted(vec![2020, 2021]).is_ok());
        assert!(YearIndex::from_sorted(vec![]).is_ok());
        assert!(YearIndex::from_sorted(vec![2021, 2020]).is_err());
        assert!(YearIndex::from_sorted(vec![2020, 2020]).is_err());
    }
}
