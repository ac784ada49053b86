//! Database fixtures used across harnesses.
//!
//! [`seeded_store`] gives the sample directory that a first startup would
//! create; [`empty_store`] gives the bare schema.

#![allow(dead_code)]

use staffdir_core::{seed::seed_if_empty, Store};
use tempfile::TempDir;

/// The "none" label used by every harness.
pub const NONE: &str = "Нет";

/// Sample employees grouped the way the seed lays them out.
pub const MOSCOW_EMPLOYEES: &[&str] = &["Иван Иванов", "Мария Петрова", "Петр Сидоров"];
pub const SPB_EMPLOYEES: &[&str] = &["Анна Козлова", "Дмитрий Волков"];
pub const IT_EMPLOYEES: &[&str] = &["Иван Иванов", "Петр Сидоров"];

/// A store plus the temporary directory that owns its file. Keep the whole
/// value alive for as long as the store is used.
pub struct TestStore {
    pub dir: TempDir,
    pub store: Store,
}

impl TestStore {
    pub fn db_path(&self) -> std::path::PathBuf {
        self.store.path().to_path_buf()
    }
}

/// A fresh database with the schema only.
pub fn empty_store() -> TestStore {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = Store::open(dir.path().join("employees.db")).expect("open store");
    TestStore { dir, store }
}

/// A fresh database holding the sample cities, departments and employees.
pub fn seeded_store() -> TestStore {
    let fixture = empty_store();
    let mut session = fixture.store.session().expect("session");
    assert!(seed_if_empty(&mut session).expect("seed"), "fresh store must seed");
    drop(session);
    fixture
}
