//! Store — the SQLite database holding cities, departments and employees.
//!
//! [`Store`] is just the database path. Each unit of work opens a [`Session`]
//! (one connection), which is closed when dropped. Every session enables
//! foreign-key enforcement and installs a Unicode-aware `lower()` SQL
//! function, so case folding happens inside SQLite for any script, not only
//! ASCII.

use crate::error::{Result, StoreError};
use crate::types::{DepartmentOption, EmployeeRecord, NewEmployee};
use rusqlite::functions::FunctionFlags;
use rusqlite::types::ValueRef;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Column default for `employee.position`. Must match [`SCHEMA`].
pub const DEFAULT_POSITION: &str = "Специалист";

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS city (
  id   INTEGER PRIMARY KEY,
  name VARCHAR(100) NOT NULL
);
CREATE TABLE IF NOT EXISTS department (
  id      INTEGER PRIMARY KEY,
  name    VARCHAR(100) NOT NULL,
  city_id INTEGER REFERENCES city(id)
);
CREATE TABLE IF NOT EXISTS employee (
  id            INTEGER PRIMARY KEY,
  name          VARCHAR(100) NOT NULL,
  position      VARCHAR(100) NOT NULL DEFAULT 'Специалист',
  department_id INTEGER REFERENCES department(id)
);
";

/// Employee joined with its department and city. Callers append `WHERE` /
/// `ORDER BY` clauses; the five selected columns are read by
/// [`employee_record`].
pub(crate) const EMPLOYEE_RECORD_SELECT: &str = "
SELECT e.id, e.name, e.position, d.name, c.name
FROM employee AS e
LEFT JOIN department AS d ON d.id = e.department_id
LEFT JOIN city AS c ON c.id = d.city_id
";

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

/// Handle to the database file. Cheap to clone; holds no open connection.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Open (creating if needed) the database at `path` and bootstrap the
    /// schema. Existing tables are left untouched.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let store = Self { path };
        let session = store.session()?;
        session.conn.execute_batch(SCHEMA)?;
        info!(path = %store.path.display(), "database schema ready");
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a new session. The connection lives as long as the returned value.
    pub fn session(&self) -> Result<Session> {
        let conn = Connection::open(&self.path)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        register_unicode_lower(&conn)?;
        debug!(path = %self.path.display(), "session opened");
        Ok(Session { conn })
    }
}

/// Replace SQLite's ASCII-only `lower()` with one that folds any script.
fn register_unicode_lower(conn: &Connection) -> Result<()> {
    conn.create_scalar_function(
        "lower",
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let lowered = match ctx.get_raw(0) {
                ValueRef::Null => None,
                ValueRef::Integer(i) => Some(i.to_string()),
                ValueRef::Real(f) => Some(f.to_string()),
                ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
                    Some(String::from_utf8_lossy(bytes).to_lowercase())
                }
            };
            Ok(lowered)
        },
    )?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// One open connection, scoped to a request or a CLI command.
pub struct Session {
    pub(crate) conn: Connection,
}

impl Session {
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn city_count(&self) -> Result<i64> {
        let n = self
            .conn
            .query_row("SELECT COUNT(*) FROM city", [], |row| row.get(0))?;
        Ok(n)
    }

    /// Every department with its city name, ordered by id.
    pub fn departments(&self) -> Result<Vec<DepartmentOption>> {
        let mut stmt = self.conn.prepare(
            "SELECT d.id, d.name, c.name
             FROM department AS d
             LEFT JOIN city AS c ON c.id = d.city_id
             ORDER BY d.id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(DepartmentOption {
                id: row.get(0)?,
                name: row.get(1)?,
                city: row.get(2)?,
            })
        })?;
        rows.collect::<rusqlite::Result<Vec<_>>>().map_err(Into::into)
    }

    /// Every employee with department and city resolved, ordered by id.
    /// Absent relationships become `none_label`.
    pub fn employees(&self, none_label: &str) -> Result<Vec<EmployeeRecord>> {
        let sql = format!("{EMPLOYEE_RECORD_SELECT} ORDER BY e.id");
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], |row| employee_record(row, none_label))?;
        rows.collect::<rusqlite::Result<Vec<_>>>().map_err(Into::into)
    }

    /// Look up a single employee by id.
    pub fn employee(&self, id: i64, none_label: &str) -> Result<Option<EmployeeRecord>> {
        let sql = format!("{EMPLOYEE_RECORD_SELECT} WHERE e.id = ?1");
        let record = self
            .conn
            .query_row(&sql, params![id], |row| employee_record(row, none_label))
            .optional()?;
        Ok(record)
    }

    pub fn insert_city(&mut self, name: &str) -> Result<i64> {
        let tx = self.conn.transaction()?;
        let id = insert_city(&tx, name)?;
        tx.commit()?;
        Ok(id)
    }

    pub fn insert_department(&mut self, name: &str, city_id: Option<i64>) -> Result<i64> {
        let tx = self.conn.transaction()?;
        let id = insert_department(&tx, name, city_id)?;
        tx.commit()?;
        Ok(id)
    }

    /// Insert one employee inside its own transaction.
    ///
    /// Any failure (blank name, unknown department id) rolls the transaction
    /// back before the error is returned; nothing is written.
    pub fn insert_employee(&mut self, new: &NewEmployee) -> Result<i64> {
        if new.name.trim().is_empty() {
            return Err(StoreError::invalid("employee name must not be blank"));
        }
        let tx = self.conn.transaction()?;
        let id = insert_employee(&tx, new)?;
        tx.commit()?;
        info!(id, name = %new.name, department_id = ?new.department_id, "employee added");
        Ok(id)
    }
}

// ---------------------------------------------------------------------------
// Row helpers (shared with seed / search)
// ---------------------------------------------------------------------------

pub(crate) fn insert_city(conn: &Connection, name: &str) -> rusqlite::Result<i64> {
    conn.execute("INSERT INTO city (name) VALUES (?1)", params![name])?;
    Ok(conn.last_insert_rowid())
}

pub(crate) fn insert_department(
    conn: &Connection,
    name: &str,
    city_id: Option<i64>,
) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO department (name, city_id) VALUES (?1, ?2)",
        params![name, city_id],
    )?;
    Ok(conn.last_insert_rowid())
}

pub(crate) fn insert_employee(conn: &Connection, new: &NewEmployee) -> rusqlite::Result<i64> {
    match &new.position {
        Some(position) => conn.execute(
            "INSERT INTO employee (name, position, department_id) VALUES (?1, ?2, ?3)",
            params![new.name, position, new.department_id],
        )?,
        None => conn.execute(
            "INSERT INTO employee (name, department_id) VALUES (?1, ?2)",
            params![new.name, new.department_id],
        )?,
    };
    Ok(conn.last_insert_rowid())
}

/// Map a row of [`EMPLOYEE_RECORD_SELECT`] to an [`EmployeeRecord`].
pub(crate) fn employee_record(row: &Row<'_>, none_label: &str) -> rusqlite::Result<EmployeeRecord> {
    let department: Option<String> = row.get(3)?;
    let city: Option<String> = row.get(4)?;
    Ok(EmployeeRecord {
        id: row.get(0)?,
        name: row.get(1)?,
        position: row.get(2)?,
        department: department.unwrap_or_else(|| none_label.to_string()),
        city: city.unwrap_or_else(|| none_label.to_string()),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
