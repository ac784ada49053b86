//! Core types for staffdir-core.
//!
//! The tables themselves (`city`, `department`, `employee`) are declared in
//! [`store`](crate::store). The types here are what goes in and out of them:
//! [`NewEmployee`] for inserts, and [`EmployeeRecord`] / [`DepartmentOption`]
//! as the flattened, joined views handed to the presentation layer.

use serde::Serialize;

/// Input for [`Session::insert_employee`](crate::store::Session::insert_employee).
///
/// `position: None` lets the column default apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub name: String,
    pub position: Option<String>,
    pub department_id: Option<i64>,
}

impl NewEmployee {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: None,
            department_id: None,
        }
    }

    pub fn position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    pub fn department(mut self, department_id: i64) -> Self {
        self.department_id = Some(department_id);
        self
    }
}

/// One employee with its department and city names resolved.
///
/// This is the exact shape serialised by the JSON search endpoint. Absent
/// relationships are already replaced by the "none" label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeRecord {
    pub id: i64,
    pub name: String,
    pub position: String,
    pub department: String,
    pub city: String,
}

/// A department together with the name of its city, for the add form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentOption {
    pub id: i64,
    pub name: String,
    pub city: Option<String>,
}

impl std::fmt::Display for DepartmentOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.city {
            Some(city) => write!(f, "{} ({})", self.name, city),
            None => write!(f, "{}", self.name),
        }
    }
}
