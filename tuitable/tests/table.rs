use tuitable::{Column, Direction, Indicator, Row, Table};

fn sample_table() -> Table {
    Table::with_rows(
        vec![Column::new("Name", 12), Column::new("Size", 10)],
        vec![
            Row::new(["banana", "1,024"]),
            Row::new(["Apple", "512"]),
            Row::new(["cherry", "N/A"]),
            Row::new(["date", "2,048"]),
        ],
    )
}

fn first_column(table: &Table) -> Vec<String> {
    table
        .rows()
        .iter()
        .map(|row| row.cell(0).unwrap_or("").to_string())
        .collect()
}

fn emphasized_count(table: &Table) -> usize {
    (0..table.column_count())
        .filter(|&i| table.indicator(i).emphasized())
        .count()
}

// ============================================================================
// Click toggling
// ============================================================================

#[test]
fn test_first_click_sorts_ascending() {
    let mut table = sample_table();
    assert_eq!(table.toggle_sort(0), Some(Direction::Asc));
    assert_eq!(first_column(&table), ["Apple", "banana", "cherry", "date"]);
    assert_eq!(table.sort(), Some((0, Direction::Asc)));
}

#[test]
fn test_second_click_sorts_descending() {
    let mut table = sample_table();
    table.toggle_sort(0);
    assert_eq!(table.toggle_sort(0), Some(Direction::Desc));
    assert_eq!(first_column(&table), ["date", "cherry", "banana", "Apple"]);
}

#[test]
fn test_third_click_is_ascending_again() {
    let mut table = sample_table();
    table.toggle_sort(0);
    table.toggle_sort(0);
    assert_eq!(table.toggle_sort(0), Some(Direction::Asc));
}

#[test]
fn test_toggle_memory_survives_visiting_another_column() {
    let mut table = sample_table();

    // Leave column 0 at descending, then activate column 1.
    table.toggle_sort(0);
    table.toggle_sort(0);
    assert_eq!(table.toggle_sort(1), Some(Direction::Asc));

    // Column 0 displays neutral, but its memory still says descending,
    // so the next click continues the toggle to ascending.
    assert_eq!(table.indicator(0), Indicator::Neutral);
    assert_eq!(table.toggle_sort(0), Some(Direction::Asc));
}

#[test]
fn test_each_column_toggles_independently() {
    let mut table = sample_table();
    assert_eq!(table.toggle_sort(0), Some(Direction::Asc));
    assert_eq!(table.toggle_sort(1), Some(Direction::Asc));
    assert_eq!(table.toggle_sort(0), Some(Direction::Desc));
    assert_eq!(table.toggle_sort(1), Some(Direction::Desc));
}

// ============================================================================
// Indicators
// ============================================================================

#[test]
fn test_fresh_table_shows_all_neutral() {
    let table = sample_table();
    assert_eq!(table.indicator(0), Indicator::Neutral);
    assert_eq!(table.indicator(1), Indicator::Neutral);
    assert_eq!(emphasized_count(&table), 0);
    assert_eq!(table.sort(), None);
}

#[test]
fn test_at_most_one_emphasized_indicator() {
    let mut table = sample_table();
    for &column in &[0, 1, 0, 0, 1] {
        table.toggle_sort(column);
        assert_eq!(emphasized_count(&table), 1);
    }
}

#[test]
fn test_indicator_tracks_direction() {
    let mut table = sample_table();
    table.toggle_sort(1);
    assert_eq!(table.indicator(1), Indicator::Ascending);
    table.toggle_sort(1);
    assert_eq!(table.indicator(1), Indicator::Descending);
}

#[test]
fn test_indicator_glyphs() {
    assert_eq!(Indicator::Neutral.glyph(), "↕");
    assert_eq!(Indicator::Ascending.glyph(), "▲");
    assert_eq!(Indicator::Descending.glyph(), "▼");
    assert!(!Indicator::Neutral.emphasized());
    assert!(Indicator::Ascending.emphasized());
    assert!(Indicator::Descending.emphasized());
}

// ============================================================================
// Row integrity
// ============================================================================

#[test]
fn test_sorting_permutes_rows_only() {
    let mut table = sample_table();
    let mut before: Vec<Row> = table.rows().to_vec();

    table.toggle_sort(1);
    let mut after: Vec<Row> = table.rows().to_vec();

    before.sort_by(|a, b| a.cells().cmp(b.cells()));
    after.sort_by(|a, b| a.cells().cmp(b.cells()));
    assert_eq!(before, after);
}

#[test]
fn test_out_of_range_column_is_ignored() {
    let mut table = sample_table();
    let before = first_column(&table);

    assert_eq!(table.toggle_sort(5), None);
    assert_eq!(first_column(&table), before);
    assert_eq!(table.sort(), None);
}

#[test]
fn test_rows_shorter_than_the_sort_column_keep_their_order() {
    let mut table = Table::with_rows(
        vec![Column::new("Name", 12), Column::new("Size", 10)],
        vec![Row::new(["c"]), Row::new(["a"]), Row::new(["b"])],
    );
    assert_eq!(table.toggle_sort(1), Some(Direction::Asc));
    assert_eq!(first_column(&table), ["c", "a", "b"]);
}

#[test]
fn test_mixed_short_rows_do_not_panic() {
    let mut table = Table::with_rows(
        vec![Column::new("Name", 12), Column::new("Size", 10)],
        vec![
            Row::new(["long", "9"]),
            Row::new(["short"]),
            Row::new(["other long", "1"]),
        ],
    );
    table.toggle_sort(1);
    assert_eq!(table.len(), 3);
}

#[test]
fn test_empty_table_sorts_without_rows() {
    let mut table = Table::new(vec![Column::new("Name", 12)]);
    assert_eq!(table.toggle_sort(0), Some(Direction::Asc));
    assert!(table.is_empty());
}

// ============================================================================
// Explicit sorts and row replacement
// ============================================================================

#[test]
fn test_sort_by_seeds_toggle_memory() {
    let mut table = sample_table();
    assert!(table.sort_by(0, Direction::Desc));
    assert_eq!(table.indicator(0), Indicator::Descending);
    assert_eq!(table.toggle_sort(0), Some(Direction::Asc));
}

#[test]
fn test_sort_by_out_of_range_is_rejected() {
    let mut table = sample_table();
    assert!(!table.sort_by(9, Direction::Asc));
    assert_eq!(table.sort(), None);
}

#[test]
fn test_set_rows_clears_the_active_sort_but_not_memory() {
    let mut table = sample_table();
    table.toggle_sort(0);

    table.set_rows(vec![Row::new(["zeta", "1"]), Row::new(["alpha", "2"])]);
    assert_eq!(table.sort(), None);
    assert_eq!(emphasized_count(&table), 0);
    assert_eq!(first_column(&table), ["zeta", "alpha"]);

    // Memory left at ascending, so the next toggle is descending.
    assert_eq!(table.toggle_sort(0), Some(Direction::Desc));
}

#[test]
fn test_clear_sort_resets_display_only() {
    let mut table = sample_table();
    table.toggle_sort(0);
    let order = first_column(&table);

    table.clear_sort();
    assert_eq!(table.sort(), None);
    assert_eq!(emphasized_count(&table), 0);
    assert_eq!(first_column(&table), order);
    assert_eq!(table.toggle_sort(0), Some(Direction::Desc));
}
