//! Draftwatch Storage Layer
//!
//! Implements the IssueStore trait on SQLite.
//!
//! # Architecture
//!
//! - One `issues` table keyed by the UUIDv7 storage key
//! - Display IDs are unique and double as the seed set for category counters
//! - Review history and notes are kept as JSON array columns
//!
//! # Examples
//!
//! ```no_run
//! use draftwatch_store::SqliteStore;
//!
//! let store = SqliteStore::new(":memory:").unwrap();
//! // Store is now ready for issue operations
//! ```

#![warn(missing_docs)]

use draftwatch_domain::traits::{IssueQuery, IssueStore};
use draftwatch_domain::{
    Category, DisplayId, IssueKey, IssueRecord, IssueStatus, ParsedIssueDraft, UploadMetadata,
};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Issue not found
    #[error("Issue not found: {0}")]
    NotFound(String),

    /// Invalid data format
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Display ID already taken
    #[error("Duplicate display ID: {0}")]
    Duplicate(String),

    /// Review history could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

const SELECT_COLUMNS: &str = "SELECT key, display_id, job_number, category, description, status,
            resolution_notes, assignee, date_reported, review_history, squad,
            uploaded_by, resolution_date, last_status_change, notes
     FROM issues";

/// SQLite-based implementation of IssueStore
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Each thread should have its own SqliteStore instance.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Create a new SqliteStore with the given database path
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use draftwatch_store::SqliteStore;
    ///
    /// let store = SqliteStore::new("draftwatch.db").unwrap();
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let mut store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&mut self) -> Result<(), StoreError> {
        let schema = include_str!("schema.sql");
        self.conn.execute_batch(schema)?;
        Ok(())
    }

    /// Number of stored issues
    pub fn count(&self) -> Result<usize, StoreError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM issues", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Map a row selected with [`SELECT_COLUMNS`] to a record
    fn row_to_record(row: &Row<'_>) -> rusqlite::Result<IssueRecord> {
        let key: String = row.get(0)?;
        let key = IssueKey::from_string(&key).map_err(|e| conversion_error(0, Type::Text, e))?;

        let display_id: String = row.get(1)?;
        let id = DisplayId::parse(&display_id).ok_or_else(|| {
            conversion_error(1, Type::Text, format!("Unknown display ID: {}", display_id))
        })?;

        let category: String = row.get(3)?;
        let category = Category::parse(&category)
            .ok_or_else(|| conversion_error(3, Type::Text, format!("Unknown category: {}", category)))?;

        let status: String = row.get(5)?;
        let status = IssueStatus::parse(&status)
            .ok_or_else(|| conversion_error(5, Type::Text, format!("Unknown status: {}", status)))?;

        let history: String = row.get(9)?;
        let review_history = serde_json::from_str(&history)
            .map_err(|e| conversion_error(9, Type::Text, e.to_string()))?;

        let notes: String = row.get(14)?;
        let notes = serde_json::from_str(&notes)
            .map_err(|e| conversion_error(14, Type::Text, e.to_string()))?;

        Ok(IssueRecord {
            key,
            id,
            job_number: row.get(2)?,
            category,
            description: row.get(4)?,
            status,
            resolution_notes: row.get(6)?,
            assignee: row.get(7)?,
            date_reported: row.get(8)?,
            review_history,
            squad: row.get(10)?,
            uploaded_by: row.get(11)?,
            resolution_date: row.get(12)?,
            last_status_change: row.get(13)?,
            notes,
        })
    }
}

/// Overwrite the mutable columns of the row with `record`'s key
///
/// Category and display ID are fixed at creation and never rewritten.
fn write_record(conn: &Connection, record: &IssueRecord) -> Result<(), StoreError> {
    let history = serde_json::to_string(&record.review_history)?;
    let notes = serde_json::to_string(&record.notes)?;

    let changed = conn.execute(
        "UPDATE issues SET job_number = ?2, description = ?3, status = ?4,
                resolution_notes = ?5, assignee = ?6, date_reported = ?7,
                review_history = ?8, squad = ?9, uploaded_by = ?10,
                resolution_date = ?11, last_status_change = ?12, notes = ?13
         WHERE key = ?1",
        params![
            record.key.to_string(),
            &record.job_number,
            &record.description,
            record.status.as_str(),
            &record.resolution_notes,
            &record.assignee,
            record.date_reported,
            history,
            &record.squad,
            &record.uploaded_by,
            record.resolution_date,
            record.last_status_change,
            notes,
        ],
    )?;

    if changed == 0 {
        return Err(StoreError::NotFound(record.id.to_string()));
    }
    Ok(())
}

fn conversion_error(column: usize, ty: Type, message: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(column, ty, Box::new(StoreError::InvalidData(message)))
}

impl IssueStore for SqliteStore {
    type Error = StoreError;

    fn known_display_ids(&self) -> Result<Vec<String>, Self::Error> {
        let mut stmt = self.conn.prepare("SELECT display_id FROM issues")?;
        let ids = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(ids)
    }

    fn create_batch(
        &mut self,
        drafts: Vec<ParsedIssueDraft>,
        metadata: &UploadMetadata,
    ) -> Result<Vec<IssueRecord>, Self::Error> {
        let tx = self.conn.transaction()?;
        let mut created = Vec::with_capacity(drafts.len());

        for draft in drafts {
            let display_id = draft.id.to_string();

            let exists: bool = tx
                .query_row(
                    "SELECT 1 FROM issues WHERE display_id = ?1",
                    params![&display_id],
                    |_| Ok(true),
                )
                .optional()?
                .unwrap_or(false);

            if exists {
                return Err(StoreError::Duplicate(display_id));
            }

            let record = IssueRecord::from_draft(draft, metadata, IssueKey::new());
            let history = serde_json::to_string(&record.review_history)?;
            let notes = serde_json::to_string(&record.notes)?;

            tx.execute(
                "INSERT INTO issues (key, display_id, category, seq, job_number, description, status,
                                     resolution_notes, assignee, date_reported, review_history,
                                     squad, uploaded_by, resolution_date, last_status_change, notes)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)",
                params![
                    record.key.to_string(),
                    &display_id,
                    record.category.as_str(),
                    record.id.number(),
                    &record.job_number,
                    &record.description,
                    record.status.as_str(),
                    &record.resolution_notes,
                    &record.assignee,
                    record.date_reported,
                    history,
                    &record.squad,
                    &record.uploaded_by,
                    record.resolution_date,
                    record.last_status_change,
                    notes,
                ],
            )?;

            created.push(record);
        }

        tx.commit()?;
        debug!("Stored batch of {} issues", created.len());
        Ok(created)
    }

    fn get_issue(&self, id: &DisplayId) -> Result<Option<IssueRecord>, Self::Error> {
        let sql = format!("{} WHERE display_id = ?1", SELECT_COLUMNS);
        let record = self
            .conn
            .query_row(&sql, params![id.to_string()], Self::row_to_record)
            .optional()?;
        Ok(record)
    }

    fn list_issues(&self, query: &IssueQuery) -> Result<Vec<IssueRecord>, Self::Error> {
        let mut sql = format!("{} WHERE 1=1", SELECT_COLUMNS);
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(category) = query.category {
            sql.push_str(" AND category = ?");
            params.push(Box::new(category.as_str()));
        }

        if let Some(status) = query.status {
            sql.push_str(" AND status = ?");
            params.push(Box::new(status.as_str()));
        }

        if let Some(job_number) = &query.job_number {
            sql.push_str(" AND job_number = ?");
            params.push(Box::new(job_number.clone()));
        }

        if let Some(squad) = &query.squad {
            sql.push_str(" AND squad = ?");
            params.push(Box::new(squad.clone()));
        }

        // SQLite's lower() folds ASCII only
        if let Some(term) = query.search.as_deref().filter(|t| !t.is_empty()) {
            sql.push_str(
                " AND (instr(lower(description), ?) > 0
                       OR instr(job_number, ?) > 0
                       OR instr(lower(display_id), ?) > 0)",
            );
            let lowered = term.to_lowercase();
            params.push(Box::new(lowered.clone()));
            params.push(Box::new(term.to_string()));
            params.push(Box::new(lowered));
        }

        sql.push_str(" ORDER BY category, seq");

        if let Some(limit) = query.limit {
            sql.push_str(" LIMIT ?");
            params.push(Box::new(limit as i64));
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let param_refs: Vec<&dyn rusqlite::ToSql> = params.iter().map(|p| p.as_ref()).collect();

        let records = stmt
            .query_map(&param_refs[..], Self::row_to_record)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }

    fn update_issue(&mut self, record: &IssueRecord) -> Result<(), Self::Error> {
        write_record(&self.conn, record)
    }

    fn update_batch(&mut self, records: &[IssueRecord]) -> Result<(), Self::Error> {
        let tx = self.conn.transaction()?;
        for record in records {
            write_record(&tx, record)?;
        }
        tx.commit()?;
        debug!("Updated batch of {} issues", records.len());
        Ok(())
    }

    fn delete_issues(&mut self, ids: &[DisplayId]) -> Result<usize, Self::Error> {
        let tx = self.conn.transaction()?;
        let mut deleted = 0;
        for id in ids {
            let display_id = id.to_string();
            let changed = tx.execute("DELETE FROM issues WHERE display_id = ?1", params![&display_id])?;
            if changed == 0 {
                return Err(StoreError::NotFound(display_id));
            }
            deleted += changed;
        }
        tx.commit()?;
        debug!("Deleted {} issues", deleted);
        Ok(deleted)
    }
}
