//! Test builders — ergonomic construction of custom directories.
//!
//! These builders are designed for readability in test setup, not for
//! production use. They panic on invalid input rather than returning `Result`.

#![allow(dead_code)]

use staffdir_core::{NewEmployee, Store};
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// DirectoryBuilder
// ---------------------------------------------------------------------------

/// Fluent builder that inserts cities, departments and employees by name.
///
/// # Example
///
/// ```rust,ignore
/// let ids = DirectoryBuilder::new(&store)
///     .city("Казань")
///     .department("QA", Some("Казань"))
///     .employee("Олег", "Тестировщик", Some("QA"))
///     .build();
/// ```
pub struct DirectoryBuilder<'a> {
    store: &'a Store,
    cities: HashMap<String, i64>,
    departments: HashMap<String, i64>,
    employees: HashMap<String, i64>,
}

/// Ids assigned to everything a [`DirectoryBuilder`] inserted, keyed by name.
#[derive(Debug, Default)]
pub struct DirectoryIds {
    pub cities: HashMap<String, i64>,
    pub departments: HashMap<String, i64>,
    pub employees: HashMap<String, i64>,
}

impl<'a> DirectoryBuilder<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self {
            store,
            cities: HashMap::new(),
            departments: HashMap::new(),
            employees: HashMap::new(),
        }
    }

    pub fn city(mut self, name: &str) -> Self {
        let id = self
            .store
            .session()
            .expect("session")
            .insert_city(name)
            .expect("insert city");
        self.cities.insert(name.to_string(), id);
        self
    }

    /// `city` must already have been added with [`city`](Self::city).
    pub fn department(mut self, name: &str, city: Option<&str>) -> Self {
        let city_id = city.map(|c| self.cities[c]);
        let id = self
            .store
            .session()
            .expect("session")
            .insert_department(name, city_id)
            .expect("insert department");
        self.departments.insert(name.to_string(), id);
        self
    }

    /// `department` must already have been added with
    /// [`department`](Self::department).
    pub fn employee(mut self, name: &str, position: &str, department: Option<&str>) -> Self {
        let mut new = NewEmployee::new(name).position(position);
        if let Some(dept) = department {
            new = new.department(self.departments[dept]);
        }
        let id = self
            .store
            .session()
            .expect("session")
            .insert_employee(&new)
            .expect("insert employee");
        self.employees.insert(name.to_string(), id);
        self
    }

    pub fn build(self) -> DirectoryIds {
        DirectoryIds {
            cities: self.cities,
            departments: self.departments,
            employees: self.employees,
        }
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Insert `n` employees named `"{prefix} {i}"` into a single department.
pub fn bulk_employees(store: &Store, prefix: &str, n: usize) -> Vec<i64> {
    let mut session = store.session().expect("session");
    let city = session.insert_city("Bulk City").expect("insert city");
    let dept = session
        .insert_department("Bulk Dept", Some(city))
        .expect("insert department");
    (0..n)
        .map(|i| {
            session
                .insert_employee(&NewEmployee::new(format!("{prefix} {i}")).department(dept))
                .expect("insert employee")
        })
        .collect()
}
