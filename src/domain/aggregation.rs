//! Grouping of violation records by address and threshold filtering.

use std::collections::HashMap;

use crate::domain::entities::{AddressGroup, ViolationRecord};

/// Default number of records an address must exceed to earn a postcard.
pub const DEFAULT_THRESHOLD: usize = 3;

/// Address groups in the order each address was first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressGroups {
    groups: Vec<AddressGroup>,
}

impl AddressGroups {
    /// Groups records by [`ViolationRecord::address_key`].
    ///
    /// First-seen order of addresses and input order of records within an
    /// address are both preserved.
    pub fn aggregate<I>(records: I) -> Self
    where
        I: IntoIterator<Item = ViolationRecord>,
    {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut groups: Vec<AddressGroup> = Vec::new();

        for record in records {
            let key = record.address_key();
            let slot = *index.entry(key).or_insert_with_key(|key| {
                groups.push(AddressGroup::new(key.clone()));
                groups.len() - 1
            });
            groups[slot].push(record);
        }

        Self { groups }
    }

    /// Keeps only groups with strictly more than `threshold` records.
    ///
    /// An address with exactly `threshold` records has not yet been escalated.
    pub fn above_threshold(self, threshold: usize) -> Self {
        Self {
            groups: self
                .groups
                .into_iter()
                .filter(|group| group.len() > threshold)
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&AddressGroup> {
        self.groups.iter().find(|group| group.key() == key)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AddressGroup> {
        self.groups.iter()
    }
}

impl IntoIterator for AddressGroups {
    type Item = AddressGroup;
    type IntoIter = std::vec::IntoIter<AddressGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<'a> IntoIterator for &'a AddressGroups {
    type Item = &'a AddressGroup;
    type IntoIter = std::slice::Iter<'a, AddressGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(house: &str, street: &str, date: &str) -> ViolationRecord {
        ViolationRecord {
            date: date.to_string(),
            house_number: house.to_string(),
            street: street.to_string(),
            overflow: true,
            not_out: false,
            not_at_curb: false,
            details: String::new(),
        }
    }

    #[test]
    fn test_aggregate_preserves_first_seen_order() {
        let groups = AddressGroups::aggregate(vec![
            record("9", " Oak Ave", "2018-01-01"),
            record("12", " Elm St", "2018-01-02"),
            record("9", " Oak Ave", "2018-01-03"),
        ]);

        let keys: Vec<_> = groups.iter().map(AddressGroup::key).collect();
        assert_eq!(keys, vec!["9 Oak Ave", "12 Elm St"]);

        let oak = groups.get("9 Oak Ave").unwrap();
        let dates: Vec<_> = oak.records().iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, vec!["2018-01-01", "2018-01-03"]);
    }

    #[test]
    fn test_aggregate_does_not_normalize_whitespace_or_case() {
        let groups = AddressGroups::aggregate(vec![
            record("12", " Elm St", "2018-01-01"),
            record("12", "  Elm St", "2018-01-02"),
            record("12", " ELM ST", "2018-01-03"),
        ]);

        assert_eq!(groups.len(), 3);
    }

    #[test]
    fn test_threshold_is_strictly_greater() {
        let at_threshold = (0..3).map(|i| record("1", " A St", &format!("d{i}")));
        let above_threshold = (0..4).map(|i| record("2", " B St", &format!("d{i}")));

        let groups = AddressGroups::aggregate(at_threshold.chain(above_threshold));
        let kept = groups.above_threshold(3);

        assert_eq!(kept.len(), 1);
        assert!(kept.get("1 A St").is_none());
        assert_eq!(kept.get("2 B St").unwrap().len(), 4);
    }

    #[test]
    fn test_threshold_zero_keeps_every_group() {
        let groups = AddressGroups::aggregate(vec![record("1", " A St", "d")]);

        assert_eq!(groups.above_threshold(0).len(), 1);
    }

    #[test]
    fn test_aggregate_empty_input() {
        let groups = AddressGroups::aggregate(Vec::new());

        assert!(groups.is_empty());
        assert!(groups.above_threshold(DEFAULT_THRESHOLD).is_empty());
    }
}
