//! Postcard generation: group, filter, render.

use std::io::{self, Write};
use std::sync::Arc;

use crate::domain::AddressGroups;
use crate::domain::entities::ViolationRecord;
use crate::domain::repositories::ViolationRepository;
use crate::error::AppError;
use crate::rendering::{DocumentWriter, assemble_document, render_card};

/// Addresses that earned a postcard in one run.
#[derive(Debug, Clone)]
pub struct PostcardBatch {
    threshold: usize,
    total_addresses: usize,
    groups: AddressGroups,
}

impl PostcardBatch {
    /// Groups `records` by address and keeps addresses with more than
    /// `threshold` records.
    pub fn from_records<I>(records: I, threshold: usize) -> Self
    where
        I: IntoIterator<Item = ViolationRecord>,
    {
        let all = AddressGroups::aggregate(records);
        let total_addresses = all.len();
        let groups = all.above_threshold(threshold);

        tracing::info!(
            considered = groups.len(),
            total = total_addresses,
            threshold,
            "Considering {} addresses out of {} using a threshold of {}",
            groups.len(),
            total_addresses,
            threshold
        );

        Self {
            threshold,
            total_addresses,
            groups,
        }
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Distinct addresses seen before filtering.
    pub fn total_addresses(&self) -> usize {
        self.total_addresses
    }

    /// Number of postcards the batch will print.
    pub fn card_count(&self) -> usize {
        self.groups.len()
    }

    pub fn groups(&self) -> &AddressGroups {
        &self.groups
    }

    /// Streams the document to `out` card by card.
    ///
    /// # Errors
    ///
    /// Any write error aborts the whole document.
    pub fn write_to<W: Write>(&self, out: W) -> io::Result<W> {
        let mut writer = DocumentWriter::begin(out)?;
        for group in &self.groups {
            writer.write_card(&render_card(group))?;
        }
        writer.finish()
    }

    pub fn to_document(&self) -> String {
        assemble_document(&self.groups)
    }
}

/// Builds postcard batches from the violation store.
pub struct PostcardService {
    repository: Arc<dyn ViolationRepository>,
}

impl PostcardService {
    pub fn new(repository: Arc<dyn ViolationRepository>) -> Self {
        Self { repository }
    }

    /// Loads every stored violation and builds the batch for `threshold`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn build_batch(&self, threshold: usize) -> Result<PostcardBatch, AppError> {
        let records = self.repository.list_records().await?;
        tracing::debug!(rows = records.len(), "loaded violation records");
        Ok(PostcardBatch::from_records(records, threshold))
    }
}
