//! staffdir-core — staff directory core library.
//!
//! This crate owns everything below the HTTP layer: the entity types, the
//! layered configuration, the SQLite store and the search query.
//!
//! # Architecture
//!
//! ```text
//! Store ──► Session ──► Search ──► Web
//!   │          │
//!   └── Seed   └──► Insert / listings
//! ```
//!
//! A [`Store`](store::Store) is only a path; every unit of work opens its own
//! [`Session`](store::Session) and drops it when done.

pub mod config;
pub mod error;
pub mod search;
pub mod seed;
pub mod store;
pub mod types;

pub use error::{Result, StoreError};
pub use search::search;
pub use store::{Session, Store};
pub use types::{DepartmentOption, EmployeeRecord, NewEmployee};
