//! Sample users shown in the demo table.

use lintel::prelude::*;
use lintel::RecordError;
use serde_json::Value;

const USERS_JSON: &str = r#"[
    { "id": 1, "name": "John Doe", "email": "john@example.com", "role": "Admin", "status": "Active" },
    { "id": 2, "name": "Jane Smith", "email": "jane@example.com", "role": "User", "status": "Active" },
    { "id": 3, "name": "Bob Johnson", "email": "bob@example.com", "role": "Editor", "status": "Inactive" },
    { "id": 4, "name": "Alice Brown", "email": "alice@example.com", "role": "User", "status": "Active" },
    { "id": 5, "name": "Charlie Wilson", "email": "charlie@example.com", "role": "Admin", "status": "Pending" }
]"#;

/// Parse the bundled users.
pub fn users() -> Result<Vec<Record>, RecordError> {
    Record::list_from_str(USERS_JSON)
}

/// Columns of the users table.
pub fn user_columns() -> Vec<Column<Record>> {
    vec![
        Column::new("id", "ID").sortable(),
        Column::new("name", "Name").sortable(),
        Column::new("email", "Email").sortable(),
        Column::new("role", "Role").sortable(),
        Column::new("status", "Status")
            .sortable()
            .render(|value, _, _| status_badge(value)),
    ]
}

fn badge_color(status: &str) -> Color {
    match status {
        "Active" => Color::Success,
        "Inactive" => Color::Error,
        _ => Color::Warning,
    }
}

/// Colored status badge.
pub fn status_badge(value: &Value) -> Node {
    let status = text_of(value);
    let style = Style::new().fg(badge_color(&status)).bold();
    Node::text_styled(format!("● {status}"), style)
}

/// "N user(s) selected: a, b" line for a selection emission.
pub fn selection_summary(rows: &[Record]) -> String {
    let names: Vec<String> = rows.iter().map(|r| r.field_text("name")).collect();
    if names.is_empty() {
        return "0 user(s) selected".to_string();
    }
    format!("{} user(s) selected: {}", names.len(), names.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_users_parse() {
        let users = users().unwrap();
        assert_eq!(users.len(), 5);
        assert_eq!(users[4].field_text("name"), "Charlie Wilson");
        assert_eq!(*users[2].id(), RecordId::Int(3));
    }

    #[test]
    fn test_user_columns_are_sortable() {
        let columns = user_columns();
        let keys: Vec<&str> = columns.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, ["id", "name", "email", "role", "status"]);
        assert!(columns.iter().all(|c| c.sortable));
    }

    #[test]
    fn test_badge_colors() {
        let color = |s: &str| status_badge(&Value::from(s)).style().fg;
        assert_eq!(color("Active"), Some(Color::Success));
        assert_eq!(color("Inactive"), Some(Color::Error));
        assert_eq!(color("Pending"), Some(Color::Warning));
    }

    #[test]
    fn test_selection_summary() {
        let users = users().unwrap();
        assert_eq!(selection_summary(&[]), "0 user(s) selected");
        assert_eq!(
            selection_summary(&users[..2]),
            "2 user(s) selected: John Doe, Jane Smith"
        );
    }
}
