//! All violations recorded against one address.

use super::ViolationRecord;

/// Records sharing one address key, in input order.
///
/// Every record is assumed to carry the same house number and street; this is
/// guaranteed by the grouping step and not checked again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressGroup {
    key: String,
    records: Vec<ViolationRecord>,
}

impl AddressGroup {
    pub fn new(key: String) -> Self {
        Self {
            key,
            records: Vec::new(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn records(&self) -> &[ViolationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn push(&mut self, record: ViolationRecord) {
        self.records.push(record);
    }

    /// The address printed on the card, taken from the first record.
    pub fn display_address(&self) -> String {
        self.records
            .first()
            .map(ViolationRecord::display_address)
            .unwrap_or_default()
    }

    /// Dates of the first and last record of the whole group.
    pub fn date_span(&self) -> Option<(&str, &str)> {
        let first = self.records.first()?;
        let last = self.records.last()?;
        Some((first.date.as_str(), last.date.as_str()))
    }
}
