//! Server-rendered HTML pages.
//!
//! Each page is a plain string built around a shared [`layout`]. Anything
//! that comes from the database goes through [`escape`].

use staffdir_core::DepartmentOption;
use std::fmt::Write as _;

const TITLE: &str = "Справочник сотрудников";

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

pub fn index() -> String {
    layout(
        TITLE,
        r#"<h1>Справочник сотрудников</h1>
<ul class="menu">
  <li><a href="/search">Поиск сотрудников</a></li>
  <li><a href="/add">Добавить сотрудника</a></li>
</ul>"#,
    )
}

pub fn search() -> String {
    layout(
        "Поиск",
        r#"<h1>Поиск сотрудников</h1>
<form id="searchForm" onsubmit="return false;">
  <input type="text" id="searchInput" placeholder="Имя, должность, отдел или город" autofocus>
  <button type="button" id="searchBtn">Найти</button>
</form>
<div id="results"></div>
<p><a href="/">На главную</a></p>"#,
    )
}

/// The add-employee form. Departments are listed as "Name (City)".
pub fn add(departments: &[DepartmentOption]) -> String {
    let mut options = String::new();
    for dept in departments {
        // Writing to a String cannot fail.
        let _ = writeln!(
            options,
            r#"    <option value="{}">{}</option>"#,
            dept.id,
            escape(&dept.to_string())
        );
    }

    let body = format!(
        r#"<h1>Добавить сотрудника</h1>
<form method="post" action="/add_employee">
  <label>Имя <input type="text" name="name" required></label>
  <label>Должность <input type="text" name="position"></label>
  <label>Отдел
  <select name="department_id" required>
{options}  </select>
  </label>
  <button type="submit">Добавить</button>
</form>
<p><a href="/">На главную</a></p>"#
    );
    layout("Добавить сотрудника", &body)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="ru">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
  <script src="/static/script.js" defer></script>
</head>
<body>
<div id="container">
{body}
</div>
</body>
</html>
"#,
        title = escape(title),
    )
}

/// Minimal HTML escaping for text and attribute values.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
