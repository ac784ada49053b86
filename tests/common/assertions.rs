//! Domain-specific assertion macros for staffdir harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that show the
//! whole result set, so it is obvious which employee was missing or
//! duplicated.

/// Assert that `results` contains exactly one record named `name`.
///
/// ```rust,ignore
/// assert_found_once!(results, "Иван Иванов");
/// ```
#[macro_export]
macro_rules! assert_found_once {
    ($results:expr, $name:expr) => {{
        let results: &[staffdir_core::EmployeeRecord] = &$results;
        let name: &str = $name;
        let hits = results.iter().filter(|r| r.name == name).count();
        if hits != 1 {
            panic!(
                "assert_found_once! failed: {:?} found {} times.\n  Results: {:?}",
                name,
                hits,
                results.iter().map(|r| r.name.as_str()).collect::<Vec<_>>()
            );
        }
    }};
}

/// Assert that the names in `results`, in order, equal `expected`.
///
/// ```rust,ignore
/// assert_names!(results, ["Иван Иванов", "Петр Сидоров"]);
/// ```
#[macro_export]
macro_rules! assert_names {
    ($results:expr, $expected:expr) => {{
        let results: &[staffdir_core::EmployeeRecord] = &$results;
        let actual: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
        let expected: Vec<&str> = $expected.iter().map(|s| &**s).collect();
        pretty_assertions::assert_eq!(actual, expected);
    }};
}
