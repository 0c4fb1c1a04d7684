use std::cmp::Ordering;
use std::num::NonZeroUsize;

use practice_core::{
    Row, SortDirection, SortState, TableView, TextFilter, compare_cells, filter,
    render::render_table, render_text, sort,
};

fn people() -> Vec<Row> {
    [
        ("Alice", "Tester", "34"),
        ("bob", "Developer", "9"),
        ("Carol", "Tester", "27"),
        ("Dave", "Manager", "41"),
        ("Eve", "Developer", "27"),
    ]
    .into_iter()
    .map(|(name, role, age)| Row::new([("name", name), ("role", role), ("age", age)]))
    .collect()
}

fn names(rows: &[Row]) -> Vec<&str> {
    rows.iter().map(|row| row.get("name")).collect()
}

#[test]
fn numeric_cells_compare_numerically() {
    assert_eq!(compare_cells("9", "34"), Ordering::Less);
    assert_eq!(compare_cells("10.5", "10.25"), Ordering::Greater);
    assert_eq!(compare_cells("-3", "2"), Ordering::Less);
}

#[test]
fn mixed_cells_fall_back_to_text() {
    assert_eq!(compare_cells("9", "abc"), Ordering::Less);
    assert_eq!(compare_cells("bob", "Carol"), Ordering::Less);
    assert_eq!(compare_cells("alice", "Alice"), Ordering::Less);
    assert_eq!(compare_cells("a", "A"), Ordering::Less);
}

#[test]
fn accented_text_sorts_with_its_base_letter() {
    assert_eq!(compare_cells("Émile", "Zed"), Ordering::Less);
    assert_eq!(compare_cells("Emile", "Émile"), Ordering::Less);
    assert_eq!(compare_cells("Émile", "Emma"), Ordering::Less);

    let rows = [("Zed", "1"), ("Émile", "2"), ("Adam", "3")]
        .into_iter()
        .map(|(name, age)| Row::new([("name", name), ("age", age)]))
        .collect::<Vec<_>>();
    let names = sort(&rows, "name", SortDirection::Ascending)
        .iter()
        .map(|row| row.get("name").to_string())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["Adam", "Émile", "Zed"]);
}

#[test]
fn filter_keeps_original_order() {
    let rows = people();
    let testers = filter(&rows, |row| row.get("role") == "Tester")
        .map(|row| row.get("name"))
        .collect::<Vec<_>>();
    assert_eq!(testers, vec!["Alice", "Carol"]);
}

#[test]
fn text_filter_is_case_insensitive() {
    let rows = people();
    let query = TextFilter::new("DEV");
    let matches = filter(&rows, |row| query.matches(row)).count();
    assert_eq!(matches, 2);

    let by_name = TextFilter::on_column("a", "name");
    let names = filter(&rows, |row| by_name.matches(row))
        .map(|row| row.get("name"))
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["Alice", "Carol", "Dave"]);

    assert_eq!(filter(&rows, |row| TextFilter::new("  ").matches(row)).count(), 5);
}

#[test]
fn sort_by_age_is_numeric_and_stable() {
    let rows = people();
    let ascending = sort(&rows, "age", SortDirection::Ascending);
    assert_eq!(names(&ascending), vec!["bob", "Carol", "Eve", "Alice", "Dave"]);

    let descending = sort(&rows, "age", SortDirection::Descending);
    assert_eq!(names(&descending), vec!["Dave", "Alice", "Carol", "Eve", "bob"]);
}

#[test]
fn sort_by_name_ignores_case() {
    let rows = people();
    let sorted = sort(&rows, "name", SortDirection::Ascending);
    assert_eq!(names(&sorted), vec!["Alice", "bob", "Carol", "Dave", "Eve"]);
}

#[test]
fn sort_state_toggles_and_resets() {
    let mut state = SortState::default();
    assert_eq!(state.toggle("name"), SortDirection::Ascending);
    assert_eq!(state.toggle("name"), SortDirection::Descending);
    assert_eq!(state.toggle("age"), SortDirection::Ascending);
    assert_eq!(state.key.as_deref(), Some("age"));
    assert_eq!(state.toggle("age"), SortDirection::Descending);
    assert_eq!(state.toggle("age"), SortDirection::Ascending);
}

#[test]
fn table_view_combines_filter_and_sort() {
    let columns = vec!["name".to_string(), "role".to_string(), "age".to_string()];
    let mut table = TableView::new(columns, people());
    table.set_filter("tester");
    table.sort_by("age");
    let visible = table
        .visible_rows()
        .into_iter()
        .map(|row| row.get("name"))
        .collect::<Vec<_>>();
    assert_eq!(visible, vec!["Carol", "Alice"]);

    table.sort_by("age");
    let visible = table
        .visible_rows()
        .into_iter()
        .map(|row| row.get("name"))
        .collect::<Vec<_>>();
    assert_eq!(visible, vec!["Alice", "Carol"]);
    assert_eq!(table.rows().len(), 5);
}

#[test]
fn filtering_resets_pagination() {
    let columns = vec!["name".to_string()];
    let page_size = NonZeroUsize::new(2).unwrap();
    let mut table = TableView::new(columns, people()).with_pagination(page_size);
    assert_eq!(table.pager().unwrap().page_count(), 3);
    assert!(table.next_page());
    assert!(table.next_page());
    assert!(!table.next_page());
    assert_eq!(table.current_rows().len(), 1);

    table.set_filter("e");
    let pager = table.pager().unwrap();
    assert_eq!(pager.current_page(), 1);
    assert_eq!(pager.total_rows(), table.visible_rows().len());
}

#[test]
fn render_table_reports_sort_and_rows() {
    let columns = vec!["name".to_string(), "age".to_string()];
    let mut table = TableView::new(columns, people());
    table.sort_by("name");
    let text = render_text(&render_table(&table));
    assert!(text.starts_with("name | age\nAlice | 34"));
    assert!(text.contains("Matching rows: 5"));
    assert!(text.contains("Sorted by name (ascending)"));
}

#[test]
fn rows_deserialize_from_plain_maps() {
    let row: Row = serde_json::from_str(r#"{"name":"Zed","age":"50"}"#).expect("row");
    assert_eq!(row.get("name"), "Zed");
    assert_eq!(row.get("missing"), "");
}
