//! Violation records: the raw source row, the normalized record the postcard
//! pipeline works on, and the stored entity behind the submission API.

use chrono::NaiveDate;

/// One of the three collection problems a driver can tick for an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationFlag {
    Overflow,
    NotOut,
    NotAtCurb,
}

impl ViolationFlag {
    /// Column header used for this flag in CSV exports and the database.
    pub fn column(self) -> &'static str {
        match self {
            ViolationFlag::Overflow => "OVER FLOW",
            ViolationFlag::NotOut => "NOT OUT",
            ViolationFlag::NotAtCurb => "NOT AT CURB",
        }
    }
}

/// A source row as read from a CSV file or a database tuple.
///
/// `None` stands for a database NULL. CSV cells are always `Some`, possibly
/// empty.
#[derive(Debug, Clone, Default)]
pub struct RawViolation {
    pub date: Option<String>,
    pub house_number: Option<String>,
    pub street: Option<String>,
    pub overflow: Option<String>,
    pub not_out: Option<String>,
    pub not_at_curb: Option<String>,
    pub details: Option<String>,
}

/// One observed incident at one address, normalized for rendering.
///
/// Built once per input row and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViolationRecord {
    pub date: String,
    pub house_number: String,
    pub street: String,
    pub overflow: bool,
    pub not_out: bool,
    pub not_at_curb: bool,
    pub details: String,
}

impl ViolationRecord {
    /// Grouping key: house number and street concatenated verbatim.
    ///
    /// No whitespace or case folding is applied, so `"12 Elm St"` and
    /// `"12  Elm St"` are different addresses.
    pub fn address_key(&self) -> String {
        format!("{}{}", self.house_number, self.street)
    }

    /// Address as printed on the card.
    pub fn display_address(&self) -> String {
        format!("{} {}", self.house_number, self.street)
    }

    /// True when at least one problem flag is set.
    pub fn is_substantive(&self) -> bool {
        self.overflow || self.not_out || self.not_at_curb
    }

    pub fn has_details(&self) -> bool {
        !self.details.is_empty()
    }

    /// Set flags in their fixed print order.
    pub fn flags(&self) -> impl Iterator<Item = ViolationFlag> {
        [
            (self.overflow, ViolationFlag::Overflow),
            (self.not_out, ViolationFlag::NotOut),
            (self.not_at_curb, ViolationFlag::NotAtCurb),
        ]
        .into_iter()
        .filter_map(|(set, flag)| set.then_some(flag))
    }
}

impl From<RawViolation> for ViolationRecord {
    /// NULLs become empty strings; a flag is set when its cell is non-empty.
    fn from(raw: RawViolation) -> Self {
        let is_set = |cell: Option<String>| cell.is_some_and(|v| !v.is_empty());

        Self {
            date: raw.date.unwrap_or_default(),
            house_number: raw.house_number.unwrap_or_default(),
            street: raw.street.unwrap_or_default(),
            overflow: is_set(raw.overflow),
            not_out: is_set(raw.not_out),
            not_at_curb: is_set(raw.not_at_curb),
            details: raw.details.unwrap_or_default(),
        }
    }
}

/// A violation as stored by the submission API.
#[derive(Debug, Clone)]
pub struct Violation {
    pub id: i64,
    pub date: NaiveDate,
    pub house_number: String,
    pub street: String,
    pub overflow: bool,
    pub not_out: bool,
    pub not_at_curb: bool,
    pub details: Option<String>,
}

/// Input for recording a new violation.
///
/// A `None` date means "today" as seen by the database.
#[derive(Debug, Clone)]
pub struct NewViolation {
    pub date: Option<NaiveDate>,
    pub house_number: String,
    pub street: String,
    pub overflow: bool,
    pub not_out: bool,
    pub not_at_curb: bool,
    pub details: Option<String>,
}
