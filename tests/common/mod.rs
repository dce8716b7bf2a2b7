#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::routing::get;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::io::Write;
use std::sync::{Arc, Mutex};
use tempfile::NamedTempFile;

use curbside_postcards::api::handlers::health_handler;
use curbside_postcards::api::routes::api_routes;
use curbside_postcards::domain::entities::{NewViolation, Violation, ViolationRecord};
use curbside_postcards::domain::repositories::{Offender, ViolationRepository};
use curbside_postcards::error::AppError;
use curbside_postcards::state::AppState;

pub const CSV_HEADER: &str = "DATE,HOUSE #,STREET,OVER FLOW,NOT OUT,NOT AT CURB,DETAILS\n";

/// Date every violation submitted without one is stamped with.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2018, 1, 2).unwrap()
}

/// Violation storage held in memory, ordered by insertion like the table's `id`.
#[derive(Default)]
pub struct InMemoryViolationRepository {
    rows: Mutex<Vec<Violation>>,
    offline: bool,
}

impl InMemoryViolationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose every call fails, as if the database were down.
    pub fn offline() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            offline: true,
        }
    }

    fn check_online(&self) -> Result<(), AppError> {
        if self.offline {
            return Err(AppError::internal(
                "Database error",
                serde_json::json!({ "reason": "connection refused" }),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl ViolationRepository for InMemoryViolationRepository {
    async fn create(&self, new_violation: NewViolation) -> Result<Violation, AppError> {
        self.check_online()?;

        let mut rows = self.rows.lock().unwrap();
        let violation = Violation {
            id: rows.len() as i64 + 1,
            date: new_violation.date.unwrap_or_else(today),
            house_number: new_violation.house_number,
            street: new_violation.street,
            overflow: new_violation.overflow,
            not_out: new_violation.not_out,
            not_at_curb: new_violation.not_at_curb,
            details: new_violation.details,
        };
        rows.push(violation.clone());
        Ok(violation)
    }

    async fn list_records(&self) -> Result<Vec<ViolationRecord>, AppError> {
        self.check_online()?;

        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .map(|v| ViolationRecord {
                date: v.date.format("%Y-%m-%d").to_string(),
                house_number: v.house_number.clone(),
                street: v.street.clone(),
                overflow: v.overflow,
                not_out: v.not_out,
                not_at_curb: v.not_at_curb,
                details: v.details.clone().unwrap_or_default(),
            })
            .collect())
    }

    async fn worst_offenders(&self, limit: i64) -> Result<Vec<Offender>, AppError> {
        self.check_online()?;

        let rows = self.rows.lock().unwrap();
        let mut counts: HashMap<String, i64> = HashMap::new();
        for v in rows.iter() {
            let address = format!("{} {}", v.house_number.trim(), v.street.trim());
            *counts.entry(address).or_default() += 1;
        }

        let mut offenders: Vec<Offender> = counts
            .into_iter()
            .map(|(address, offences)| Offender { address, offences })
            .collect();
        offenders.sort_by(|a, b| b.offences.cmp(&a.offences).then(a.address.cmp(&b.address)));
        offenders.truncate(limit as usize);
        Ok(offenders)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check_online()
    }
}

pub fn create_test_state(repository: InMemoryViolationRepository) -> AppState {
    AppState::new(Arc::new(repository), 3)
}

/// The HTTP surface without path normalization, which `TestServer` cannot wrap.
pub fn create_test_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_routes())
        .with_state(state)
}

pub fn new_violation(house: &str, street: &str, date: &str) -> NewViolation {
    NewViolation {
        date: Some(NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap()),
        house_number: house.to_string(),
        street: street.to_string(),
        overflow: true,
        not_out: false,
        not_at_curb: false,
        details: None,
    }
}

/// Writes `rows` under the standard header to a temporary CSV file.
pub fn write_csv(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(CSV_HEADER.as_bytes()).unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file.flush().unwrap();
    file
}
