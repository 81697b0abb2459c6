//! Header-click sort cycle and the sorted view.

use std::cmp::Ordering;

use crate::record::TableRow;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Orient an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// The active sort: which field, which direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortDirective {
    pub field: String,
    pub direction: SortDirection,
}

impl SortDirective {
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Descending,
        }
    }

    /// Directive after a header click on a column reading `field`.
    ///
    /// unsorted -> ascending -> descending -> unsorted. Clicking a column
    /// other than the sorted one always starts at ascending.
    pub fn cycle(current: Option<&SortDirective>, field: &str) -> Option<SortDirective> {
        match current {
            Some(directive) if directive.field == field => match directive.direction {
                SortDirection::Ascending => Some(Self::descending(field)),
                SortDirection::Descending => None,
            },
            _ => Some(Self::ascending(field)),
        }
    }

    /// Direction for the given field, if this directive sorts by it.
    pub fn direction_for(&self, field: &str) -> Option<SortDirection> {
        (self.field == field).then_some(self.direction)
    }
}

/// Indices of `rows` in display order.
///
/// Without a directive this is input order. With one, rows are ordered by
/// the textual form of the sort field, compared lexicographically. The sort
/// is stable in both directions.
pub fn sorted_order<T: TableRow>(rows: &[T], directive: Option<&SortDirective>) -> Vec<usize> {
    let mut order: Vec<usize> = (0..rows.len()).collect();
    let Some(directive) = directive else {
        return order;
    };

    let keys: Vec<String> = rows
        .iter()
        .map(|row| row.field_text(&directive.field))
        .collect();
    order.sort_by(|&a, &b| directive.direction.apply(keys[a].cmp(&keys[b])));
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;

    fn names(rows: &[Record], order: &[usize]) -> Vec<String> {
        order.iter().map(|&i| rows[i].field_text("name")).collect()
    }

    #[test]
    fn test_cycle_same_field() {
        let asc = SortDirective::cycle(None, "name");
        assert_eq!(asc, Some(SortDirective::ascending("name")));
        let desc = SortDirective::cycle(asc.as_ref(), "name");
        assert_eq!(desc, Some(SortDirective::descending("name")));
        assert_eq!(SortDirective::cycle(desc.as_ref(), "name"), None);
    }

    #[test]
    fn test_cycle_other_field_starts_ascending() {
        let desc = SortDirective::descending("name");
        assert_eq!(
            SortDirective::cycle(Some(&desc), "email"),
            Some(SortDirective::ascending("email"))
        );
    }

    #[test]
    fn test_lexicographic_not_numeric() {
        let rows = vec![
            Record::new(1).set("n", 9),
            Record::new(2).set("n", 10),
            Record::new(3).set("n", 100),
        ];
        let order = sorted_order(&rows, Some(&SortDirective::ascending("n")));
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn test_missing_sorts_as_empty() {
        let rows = vec![
            Record::new(1).set("name", "Bob"),
            Record::new(2),
            Record::new(3).set("name", serde_json::Value::Null),
        ];
        let order = sorted_order(&rows, Some(&SortDirective::ascending("name")));
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn test_stable_both_directions() {
        let rows = vec![
            Record::new(1).set("role", "User").set("name", "a"),
            Record::new(2).set("role", "Admin").set("name", "b"),
            Record::new(3).set("role", "User").set("name", "c"),
            Record::new(4).set("role", "Admin").set("name", "d"),
        ];
        let asc = sorted_order(&rows, Some(&SortDirective::ascending("role")));
        assert_eq!(names(&rows, &asc), vec!["b", "d", "a", "c"]);

        let desc = sorted_order(&rows, Some(&SortDirective::descending("role")));
        assert_eq!(names(&rows, &desc), vec!["a", "c", "b", "d"]);
    }

    #[test]
    fn test_no_directive_is_input_order() {
        let rows = vec![Record::new(2), Record::new(1)];
        assert_eq!(sorted_order(&rows, None), vec![0, 1]);
    }
}
