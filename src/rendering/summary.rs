//! Summaries of an address group's problem flags and driver notes.
//!
//! Both summarizers keep only the trailing entries of the relevant subset
//! (arrival order, not a date sort) and lead with a disclaimer when older
//! entries were dropped.

use crate::domain::entities::{AddressGroup, ViolationFlag, ViolationRecord};

/// Most violations that fit on the back of a card.
pub const MAX_VIOLATIONS_PRINTED: usize = 4;

/// Most driver notes that fit on the back of a card.
pub const MAX_DETAILS_PRINTED: usize = 2;

const LIST_OPEN: &str = "\\begin{itemize}[noitemsep]\n\\scriptsize\n";
const LIST_CLOSE: &str = "\\end{itemize}\n";

/// Which summary a [`Summary`] was built for; selects its lead sentences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryKind {
    Violations,
    Details,
}

/// Older entries that were left off the card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Truncation {
    pub total: usize,
    pub first_date: String,
    pub last_date: String,
}

/// One bullet on the card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryItem {
    pub date: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    kind: SummaryKind,
    truncation: Option<Truncation>,
    items: Vec<SummaryItem>,
}

impl Summary {
    pub fn kind(&self) -> SummaryKind {
        self.kind
    }

    pub fn truncation(&self) -> Option<&Truncation> {
        self.truncation.as_ref()
    }

    pub fn items(&self) -> &[SummaryItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Markup for the card body. Empty summaries render as nothing at all.
    pub fn to_latex(&self) -> String {
        if self.is_empty() {
            return String::new();
        }

        let mut out = self.lead();
        out.push_str(LIST_OPEN);
        for item in &self.items {
            out.push_str(&format!("\\item {} {}\n", item.date, item.text));
        }
        out.push_str(LIST_CLOSE);
        out
    }

    fn lead(&self) -> String {
        match (self.kind, &self.truncation) {
            (SummaryKind::Violations, None) => {
                "We had the following problems collecting your trash:\n".to_string()
            }
            (SummaryKind::Violations, Some(t)) => format!(
                "We had {} problems collecting your trash in the period between {} and {}, \
                 and show only the most recent {} here.\n\n",
                t.total,
                t.first_date,
                t.last_date,
                spelled(MAX_VIOLATIONS_PRINTED)
            ),
            (SummaryKind::Details, None) => {
                "We have the following notes regarding removing your trash:\n".to_string()
            }
            (SummaryKind::Details, Some(t)) => format!(
                "There were {} comments about your trash pickup reported between {} and {}, \
                 but only the last {} are shown here.\n\n",
                t.total,
                t.first_date,
                t.last_date,
                spelled(MAX_DETAILS_PRINTED)
            ),
        }
    }
}

/// Card sentence for a problem flag.
pub fn flag_sentence(flag: ViolationFlag) -> &'static str {
    match flag {
        ViolationFlag::Overflow => "Your trash was overflowing making it difficult to pick-up.",
        ViolationFlag::NotOut => "Your trash was not out.",
        ViolationFlag::NotAtCurb => {
            "Your trash was not close to the curb, which slowed down pick-up."
        }
    }
}

/// Summarizes the substantive records of a group.
///
/// The disclaimer's date range spans the substantive records only.
pub fn summarize_violations(group: &AddressGroup) -> Summary {
    summarize_violation_records(group.records())
}

/// Same as [`summarize_violations`] over a bare slice, for one-record cards.
pub fn summarize_violation_records(records: &[ViolationRecord]) -> Summary {
    let substantive: Vec<&ViolationRecord> =
        records.iter().filter(|r| r.is_substantive()).collect();

    let truncation = (substantive.len() > MAX_VIOLATIONS_PRINTED).then(|| Truncation {
        total: substantive.len(),
        first_date: substantive[0].date.clone(),
        last_date: substantive[substantive.len() - 1].date.clone(),
    });

    let items = trailing(&substantive, MAX_VIOLATIONS_PRINTED)
        .iter()
        .flat_map(|record| {
            record.flags().map(|flag| SummaryItem {
                date: record.date.clone(),
                text: flag_sentence(flag).to_string(),
            })
        })
        .collect();

    Summary {
        kind: SummaryKind::Violations,
        truncation,
        items,
    }
}

/// Summarizes the driver notes of a group.
///
/// Unlike [`summarize_violations`], the disclaimer's date range spans the
/// whole group, not only the records carrying notes.
pub fn summarize_details(group: &AddressGroup) -> Summary {
    let detailed: Vec<&ViolationRecord> =
        group.records().iter().filter(|r| r.has_details()).collect();

    let truncation = if detailed.len() > MAX_DETAILS_PRINTED {
        group.date_span().map(|(first, last)| Truncation {
            total: detailed.len(),
            first_date: first.to_string(),
            last_date: last.to_string(),
        })
    } else {
        None
    };

    let items = trailing(&detailed, MAX_DETAILS_PRINTED)
        .iter()
        .map(|record| SummaryItem {
            date: record.date.clone(),
            text: record.details.clone(),
        })
        .collect();

    Summary {
        kind: SummaryKind::Details,
        truncation,
        items,
    }
}

fn trailing<T>(items: &[T], cap: usize) -> &[T] {
    &items[items.len().saturating_sub(cap)..]
}

fn spelled(n: usize) -> String {
    const WORDS: [&str; 11] = [
        "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    ];
    WORDS
        .get(n)
        .map(|w| w.to_string())
        .unwrap_or_else(|| n.to_string())
}
