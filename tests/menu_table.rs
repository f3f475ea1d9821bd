use weekly_menu::{MenuError, MenuTable, SheetRows};

fn monday() -> SheetRows {
    SheetRows::new(
        "Monday",
        vec![
            vec!["Breakfast", "Eggs, Toast"],
            vec![" Lunch ", "a, b,,c ,"],
            vec!["Snack", ""],
        ],
    )
}

#[test]
fn build_trims_and_drops_empty_items() {
    let table = MenuTable::build(&[monday()]).expect("table built");

    assert_eq!(
        table.items_for("Monday", "Breakfast"),
        Some(&["Eggs".to_string(), "Toast".to_string()][..])
    );
    assert_eq!(
        table.items_for("Monday", "Lunch"),
        Some(&["a".to_string(), "b".to_string(), "c".to_string()][..])
    );
    assert_eq!(table.count_for("Monday", "Breakfast"), 2);
}

#[test]
fn known_meal_without_items_is_not_absent() {
    let table = MenuTable::build(&[monday()]).expect("table built");

    assert_eq!(table.items_for("Monday", "Snack"), Some(&[][..]));
    assert_eq!(table.count_for("Monday", "Snack"), 0);
    assert_eq!(table.items_for("Monday", "Dinner"), None);
    assert_eq!(table.items_for("Funday", "Breakfast"), None);
    assert_eq!(table.count_for("Funday", "Breakfast"), 0);
}

#[test]
fn day_and_meal_keys_are_case_sensitive() {
    let table = MenuTable::build(&[monday()]).expect("table built");

    assert_eq!(table.items_for("monday", "Breakfast"), None);
    assert_eq!(table.items_for("Monday", "breakfast"), None);
}

#[test]
fn contains_item_ignores_case() {
    let sheet = SheetRows::new("Tuesday", vec![vec!["Breakfast", "eggs, Crème brûlée"]]);
    let table = MenuTable::build(&[sheet]).expect("table built");

    assert!(table.contains_item("Tuesday", "Breakfast", "EGGS"));
    assert!(table.contains_item("Tuesday", "Breakfast", "CRÈME BRÛLÉE"));
    assert!(!table.contains_item("Tuesday", "Breakfast", "Toast"));
    assert!(!table.contains_item("Tuesday", "Dinner", "eggs"));
}

#[test]
fn duplicate_meal_rows_keep_the_last_one() {
    let sheet = SheetRows::new(
        "Monday",
        vec![
            vec!["Breakfast", "Eggs, Toast"],
            vec!["Breakfast", "Porridge"],
        ],
    );
    let table = MenuTable::build(&[sheet]).expect("table built");

    assert_eq!(
        table.items_for("Monday", "Breakfast"),
        Some(&["Porridge".to_string()][..])
    );
}

#[test]
fn blank_rows_are_skipped_and_extra_cells_ignored() {
    let sheet = SheetRows::new(
        "Monday",
        vec![
            vec!["", "", ""],
            vec!["Dinner", "Soup", "ignored note"],
            vec!["  ", " ", ""],
        ],
    );
    let table = MenuTable::build(&[sheet]).expect("table built");

    assert_eq!(table.meals("Monday").map(|meals| meals.len()), Some(1));
    assert_eq!(
        table.items_for("Monday", "Dinner"),
        Some(&["Soup".to_string()][..])
    );
}

#[test]
fn single_cell_row_is_malformed() {
    let sheet = SheetRows::new("Monday", vec![vec!["Breakfast", "Eggs"], vec!["Lunch"]]);

    match MenuTable::build(&[sheet]) {
        Err(MenuError::MalformedRow { sheet, row, .. }) => {
            assert_eq!(sheet, "Monday");
            assert_eq!(row, 2);
        }
        other => panic!("expected a malformed row error, got {other:?}"),
    }
}

#[test]
fn items_without_meal_name_are_malformed() {
    let sheet = SheetRows::new("Monday", vec![vec!["  ", "Eggs"]]);

    assert!(matches!(
        MenuTable::build(&[sheet]),
        Err(MenuError::MalformedRow { row: 1, .. })
    ));
}

#[test]
fn empty_sheet_still_yields_a_day() {
    let empty = SheetRows::new("Sunday", Vec::<Vec<&str>>::new());
    let table = MenuTable::build(&[monday(), empty]).expect("table built");

    assert_eq!(table.days().collect::<Vec<_>>(), vec!["Monday", "Sunday"]);
    assert!(table.meals("Sunday").is_some_and(|meals| meals.is_empty()));
    assert_eq!(table.items_for("Sunday", "Breakfast"), None);
}

#[test]
fn display_lists_days_and_meals() {
    let table = MenuTable::build(&[monday()]).expect("table built");

    assert_eq!(
        table.to_string(),
        "Monday\n  Breakfast: Eggs, Toast\n  Lunch: a, b, c\n  Snack: (none)\n"
    );
}

#[test]
fn meal_instance_uses_stored_items() {
    let table = MenuTable::build(&[monday()]).expect("table built");

    let instance = table
        .meal_instance("Monday", "Breakfast", "2024-02-10")
        .expect("meal exists");
    assert_eq!(
        instance.to_string(),
        "Monday (2024-02-10), Breakfast meal:\n- Eggs\n- Toast\n"
    );
    assert!(table.meal_instance("Funday", "Breakfast", "2024-02-10").is_none());
}
