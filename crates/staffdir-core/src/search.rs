//! Search layer — case-insensitive substring match over the joined directory.
//!
//! An employee matches when the query occurs in its name, its position, its
//! department's name or its department's city's name. Both sides go through
//! the session's Unicode `lower()` inside SQLite and are compared with
//! `instr`, so `%` and `_` in a query are plain characters.

use crate::error::Result;
use crate::store::{employee_record, Session, EMPLOYEE_RECORD_SELECT};
use crate::types::EmployeeRecord;
use rusqlite::params;
use tracing::debug;

const MATCH_CLAUSE: &str = "
WHERE instr(lower(e.name), lower(?1)) > 0
   OR instr(lower(e.position), lower(?1)) > 0
   OR instr(lower(d.name), lower(?1)) > 0
   OR instr(lower(c.name), lower(?1)) > 0
ORDER BY e.id
";

/// Run a directory search.
///
/// A query that is empty after trimming returns an empty list without
/// touching the database. Otherwise the trimmed query is matched and the
/// results come back ordered by employee id, each employee at most once.
/// Missing department or city names are replaced by `none_label`.
pub fn search(session: &Session, query: &str, none_label: &str) -> Result<Vec<EmployeeRecord>> {
    let needle = query.trim();
    if needle.is_empty() {
        return Ok(Vec::new());
    }

    let sql = format!("{EMPLOYEE_RECORD_SELECT}{MATCH_CLAUSE}");
    let mut stmt = session.connection().prepare(&sql)?;
    let rows = stmt.query_map(params![needle], |row| employee_record(row, none_label))?;
    let results = rows.collect::<rusqlite::Result<Vec<_>>>()?;
    debug!(query = needle, hits = results.len(), "search complete");
    Ok(results)
}
