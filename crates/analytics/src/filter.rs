use core_types::Table;
use std::collections::HashSet;

/// Keeps the rows whose category is in `categories`, in their original order.
///
/// An empty selection yields an empty table: zero selected categories means
/// "show nothing", never "show everything".
pub fn filter(table: &Table, categories: &HashSet<String>) -> Table {
    if categories.is_empty() {
        return Table::empty();
    }
    table
        .iter()
        .filter(|row| categories.contains(&row.category))
        .cloned()
        .collect()
}
