//! Minimal host loop: header activations drive the sort state, the "view"
//! prints the table each cycle.
//!
//! ```sh
//! cargo run -p colsort-core --example movie_table
//! ```

use colsort_core::{TableSort, comparators};

#[derive(Debug, Clone)]
struct Movie {
    title: &'static str,
    year: u16,
    rating: Option<f32>,
}

fn main() {
    let movies = vec![
        Movie { title: "The Long Haul", year: 2019, rating: Some(7.2) },
        Movie { title: "Afterglow", year: 2023, rating: Some(8.1) },
        Movie { title: "Quiet Harbor", year: 2021, rating: None },
        Movie { title: "Second Wind", year: 2019, rating: Some(6.4) },
    ];

    let sort = TableSort::builder()
        .column_with("title", comparators::by_key(|movie: &Movie| movie.title))
        .column_with("year", comparators::by_key(|movie: &Movie| movie.year))
        .column_with("rating", comparators::by_float_key(|movie: &Movie| movie.rating))
        .build();

    // Two "clicks" on the year header: ascending, then descending.
    for _ in 0..2 {
        let header = sort.header_sort_props("year");
        sort.apply(header.on_activate);
        render(&sort, &sort.sorted(&movies));
    }

    // An explicit message from elsewhere in the UI, e.g. a "best rated"
    // shortcut.
    sort.apply(colsort_core::SortMessage::Set(
        "rating",
        colsort_core::SortDirection::Descending,
    ));
    render(&sort, &sort.sorted(&movies));
}

fn render(sort: &TableSort<&'static str, Movie>, rows: &[Movie]) {
    let column = sort.sort_column().unwrap_or("none");
    let direction = sort
        .sort_direction()
        .map(|direction| direction.as_str())
        .unwrap_or("none");
    println!("-- sorted by {column} ({direction})");
    for movie in rows {
        let rating = movie
            .rating
            .map(|rating| format!("{rating:.1}"))
            .unwrap_or_else(|| "-".to_string());
        println!("   {:<16} {}  {}", movie.title, movie.year, rating);
    }
}
