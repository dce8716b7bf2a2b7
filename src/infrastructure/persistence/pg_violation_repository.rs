//! PostgreSQL implementation of the violation repository.
//!
//! Column names follow the spreadsheet the log started as (`"HOUSE #"`,
//! `"OVER FLOW"`, ...), so every identifier is quoted.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewViolation, RawViolation, Violation, ViolationRecord};
use crate::domain::repositories::{Offender, ViolationRepository};
use crate::error::AppError;

/// Stored value for a ticked flag. Unticked flags are stored as NULL.
const FLAG_MARK: &str = "X";

/// `DATE, HOUSE #, STREET, OVER FLOW, NOT OUT, NOT AT CURB, DETAILS`, in that order.
type RecordRow = (
    Option<NaiveDate>,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
);

type StoredRow = (
    i64,
    NaiveDate,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
);

/// PostgreSQL repository for the `violations` table.
pub struct PgViolationRepository {
    pool: Arc<PgPool>,
}

impl PgViolationRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ViolationRepository for PgViolationRepository {
    async fn create(&self, new_violation: NewViolation) -> Result<Violation, AppError> {
        let row: StoredRow = sqlx::query_as(
            r#"
            INSERT INTO violations
                ("DATE", "HOUSE #", "STREET", "OVER FLOW", "NOT OUT", "NOT AT CURB", "DETAILS")
            VALUES (COALESCE($1::date, CURRENT_DATE), $2, $3, $4, $5, $6, $7)
            RETURNING id, "DATE", "HOUSE #", "STREET", "OVER FLOW", "NOT OUT", "NOT AT CURB", "DETAILS"
            "#,
        )
        .bind(new_violation.date)
        .bind(&new_violation.house_number)
        .bind(&new_violation.street)
        .bind(flag_cell(new_violation.overflow))
        .bind(flag_cell(new_violation.not_out))
        .bind(flag_cell(new_violation.not_at_curb))
        .bind(&new_violation.details)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(violation_from_row(row))
    }

    async fn list_records(&self) -> Result<Vec<ViolationRecord>, AppError> {
        let rows: Vec<RecordRow> = sqlx::query_as(
            r#"
            SELECT "DATE", "HOUSE #", "STREET", "OVER FLOW", "NOT OUT", "NOT AT CURB", "DETAILS"
            FROM violations
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(record_from_row).collect())
    }

    async fn worst_offenders(&self, limit: i64) -> Result<Vec<Offender>, AppError> {
        let rows: Vec<(Option<String>, i64)> = sqlx::query_as(
            r#"
            SELECT trim("HOUSE #") || ' ' || trim("STREET") AS address, COUNT(*) AS offences
            FROM violations
            GROUP BY 1
            ORDER BY 2 DESC, 1
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|(address, offences)| Offender {
                address: address.unwrap_or_default(),
                offences,
            })
            .collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;
        Ok(())
    }
}

fn flag_cell(set: bool) -> Option<&'static str> {
    set.then_some(FLAG_MARK)
}

fn is_marked(cell: &Option<String>) -> bool {
    cell.as_deref().is_some_and(|v| !v.is_empty())
}

/// Positional row to normalized record; NULLs become empty strings.
fn record_from_row(row: RecordRow) -> ViolationRecord {
    let (date, house_number, street, overflow, not_out, not_at_curb, details) = row;

    ViolationRecord::from(RawViolation {
        date: date.map(|d| d.format("%Y-%m-%d").to_string()),
        house_number,
        street,
        overflow,
        not_out,
        not_at_curb,
        details,
    })
}

fn violation_from_row(row: StoredRow) -> Violation {
    let (id, date, house_number, street, overflow, not_out, not_at_curb, details) = row;

    Violation {
        id,
        date,
        house_number: house_number.unwrap_or_default(),
        street: street.unwrap_or_default(),
        overflow: is_marked(&overflow),
        not_out: is_marked(&not_out),
        not_at_curb: is_marked(&not_at_curb),
        details,
    }
}
