//! Bootstrap seeding of the sample directory.
//!
//! [`seed_if_empty`] checks the `city` row count once and, when it is zero,
//! inserts [`SAMPLE_CITIES`], [`SAMPLE_DEPARTMENTS`] and [`SAMPLE_EMPLOYEES`]
//! in a single transaction. Two processes starting against the same empty
//! file at the same moment can both seed.

use crate::error::Result;
use crate::store::{self, Session};
use crate::types::NewEmployee;
use tracing::{debug, info};

pub const SAMPLE_CITIES: &[&str] = &["Москва", "Санкт-Петербург"];

/// `(department name, index into SAMPLE_CITIES)`
pub const SAMPLE_DEPARTMENTS: &[(&str, usize)] = &[("IT", 0), ("HR", 0), ("Sales", 1)];

/// `(name, position, index into SAMPLE_DEPARTMENTS)`
pub const SAMPLE_EMPLOYEES: &[(&str, &str, usize)] = &[
    ("Иван Иванов", "Разработчик", 0),
    ("Мария Петрова", "Менеджер", 1),
    ("Петр Сидоров", "Аналитик", 0),
    ("Анна Козлова", "Специалист", 2),
    ("Дмитрий Волков", "Директор", 2),
];

/// Insert the sample rows if the `city` table is empty.
///
/// Returns `true` when rows were inserted.
pub fn seed_if_empty(session: &mut Session) -> Result<bool> {
    let cities = session.city_count()?;
    if cities > 0 {
        debug!(cities, "directory already populated, skipping seed");
        return Ok(false);
    }

    let tx = session.conn.transaction()?;

    let city_ids = SAMPLE_CITIES
        .iter()
        .map(|name| store::insert_city(&tx, name))
        .collect::<rusqlite::Result<Vec<i64>>>()?;

    let department_ids = SAMPLE_DEPARTMENTS
        .iter()
        .map(|(name, city)| store::insert_department(&tx, name, Some(city_ids[*city])))
        .collect::<rusqlite::Result<Vec<i64>>>()?;

    for (name, position, department) in SAMPLE_EMPLOYEES {
        let new = NewEmployee::new(*name)
            .position(*position)
            .department(department_ids[*department]);
        store::insert_employee(&tx, &new)?;
    }

    tx.commit()?;
    info!(
        cities = SAMPLE_CITIES.len(),
        departments = SAMPLE_DEPARTMENTS.len(),
        employees = SAMPLE_EMPLOYEES.len(),
        "seeded sample directory"
    );
    Ok(true)
}
