//! End-to-end flow over a realistic row set: header activations drive the
//! sort state, rows reorder through the active column's comparator.

use chrono::NaiveDate;
use colsort_core::{SortDirection, SortState, TableSort, comparators};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
struct MovieRow {
    title: &'static str,
    release_date: Option<NaiveDate>,
    rating: Option<f32>,
}

fn movie(title: &'static str, released: Option<(i32, u32, u32)>, rating: Option<f32>) -> MovieRow {
    MovieRow {
        title,
        release_date: released.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
        rating,
    }
}

fn catalog() -> Vec<MovieRow> {
    vec![
        movie("Charlie", Some((2019, 6, 1)), Some(7.5)),
        movie("Alice", Some((2023, 1, 15)), None),
        movie("Bob", None, Some(8.5)),
    ]
}

fn titles(rows: &[MovieRow]) -> Vec<&'static str> {
    rows.iter().map(|row| row.title).collect()
}

struct Keys {
    title: Uuid,
    release_date: Uuid,
    rating: Uuid,
}

fn table() -> (Keys, TableSort<Uuid, MovieRow>) {
    let keys = Keys {
        title: Uuid::new_v4(),
        release_date: Uuid::new_v4(),
        rating: Uuid::new_v4(),
    };
    let sort = TableSort::builder()
        .column_with(keys.title, comparators::by_key(|row: &MovieRow| row.title))
        .column_with(
            keys.release_date,
            comparators::by_optional_key(|row: &MovieRow| row.release_date),
        )
        .column_with(
            keys.rating,
            comparators::by_float_key(|row: &MovieRow| row.rating),
        )
        .build();
    (keys, sort)
}

#[test]
fn header_activations_drive_row_order() {
    let (keys, sort) = table();
    let rows = catalog();

    // First activation of the title header sorts ascending.
    sort.apply(sort.header_sort_props(keys.title).on_activate);
    assert_eq!(titles(&sort.sorted(&rows)), vec!["Alice", "Bob", "Charlie"]);
    assert_eq!(
        sort.header_sort_props(keys.title).aria_sort(),
        "ascending"
    );
    assert_eq!(sort.header_sort_props(keys.rating).aria_sort(), "none");

    // Second activation flips to descending.
    sort.apply(sort.header_sort_props(keys.title).on_activate);
    assert_eq!(titles(&sort.sorted(&rows)), vec!["Charlie", "Bob", "Alice"]);

    // Activating another header replaces the sort, ascending again.
    sort.apply(sort.header_sort_props(keys.release_date).on_activate);
    assert_eq!(sort.sort_column(), Some(keys.release_date));
    assert_eq!(sort.sort_direction(), Some(SortDirection::Ascending));
    // Bob has no release date and sorts last.
    assert_eq!(titles(&sort.sorted(&rows)), vec!["Charlie", "Alice", "Bob"]);
}

#[test]
fn explicit_descending_flips_missing_value_placement() {
    let (keys, sort) = table();
    let rows = catalog();

    sort.set_column_sort(keys.rating, SortDirection::Descending);

    // Descending swaps comparator arguments, so the missing-last rule of
    // the ascending comparator turns into missing-first here.
    assert_eq!(titles(&sort.sorted(&rows)), vec!["Alice", "Bob", "Charlie"]);

    sort.set_column_sort(keys.rating, SortDirection::Ascending);
    assert_eq!(titles(&sort.sorted(&rows)), vec!["Charlie", "Bob", "Alice"]);
}

#[test]
fn subscribers_see_the_latest_state_after_a_burst() {
    let (keys, sort) = table();
    let mut updates = sort.subscribe();

    sort.toggle_column_sort(keys.title);
    sort.toggle_column_sort(keys.title);
    sort.set_column_sort(keys.rating, SortDirection::Descending);

    assert!(updates.has_changed().unwrap());
    assert_eq!(
        *updates.borrow_and_update(),
        SortState::with_sort(keys.rating, SortDirection::Descending)
    );
    assert!(!updates.has_changed().unwrap());
}
