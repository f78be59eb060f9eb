use dealsheet::state::columns::ColumnId;
use dealsheet::state::deal::{self, Deal};
use dealsheet::state::prefs::UiPrefs;
use dealsheet::state::view;

fn visible_ids(deals: &[Deal], prefs: &UiPrefs) -> Vec<String> {
    view::visible_row_indices(deals, prefs)
        .into_iter()
        .map(|index| deals[index].id.clone())
        .collect()
}

#[test]
fn test_unsorted_view_keeps_store_order() {
    let deals = deal::seed_deals();
    let prefs = UiPrefs::default();

    let rows = view::visible_row_indices(&deals, &prefs);
    assert_eq!(rows, (0..10).collect::<Vec<_>>());
}

#[test]
fn test_sort_by_amount_ascending() {
    let deals = deal::seed_deals();
    let mut prefs = UiPrefs::default();
    prefs.toggle_sort(ColumnId::Amount, false);

    let ids = visible_ids(&deals, &prefs);
    assert_eq!(
        ids,
        vec![
            "D-1007", "D-1001", "D-1010", "D-1004", "D-1009", "D-1005", "D-1002", "D-1006",
            "D-1003", "D-1008",
        ]
    );
}

#[test]
fn test_descending_reverses_ascending_for_distinct_keys() {
    // All seed amounts are distinct, so flipping the direction must
    // produce the exact reverse order.
    let deals = deal::seed_deals();
    let mut prefs = UiPrefs::default();

    prefs.toggle_sort(ColumnId::Amount, false);
    let ascending = visible_ids(&deals, &prefs);

    prefs.toggle_sort(ColumnId::Amount, false);
    let descending = visible_ids(&deals, &prefs);

    let mut reversed = ascending.clone();
    reversed.reverse();
    assert_eq!(descending, reversed);
}

#[test]
fn test_sort_by_company_is_case_insensitive() {
    let mut deals = deal::seed_deals();
    deal::apply_edit(
        &mut deals,
        "D-1010",
        deal::DealEdit::Company("acme corp 2".into()),
    );
    let mut prefs = UiPrefs::default();
    prefs.toggle_sort(ColumnId::Company, false);

    let ids = visible_ids(&deals, &prefs);
    assert_eq!(ids[0], "D-1001");
    assert_eq!(ids[1], "D-1010");
}

#[test]
fn test_multi_sort_groups_then_orders_within_group() {
    let deals = deal::seed_deals();
    let mut prefs = UiPrefs::default();
    prefs.toggle_sort(ColumnId::Stage, true);
    prefs.toggle_sort(ColumnId::Amount, true);

    let ids = visible_ids(&deals, &prefs);
    assert_eq!(
        ids,
        vec![
            // Lost
            "D-1004",
            // New, by amount
            "D-1007", "D-1001", "D-1010", "D-1006",
            // Qualified, by amount
            "D-1009", "D-1005", "D-1002",
            // Won, by amount
            "D-1003", "D-1008",
        ]
    );
}

#[test]
fn test_sort_is_stable_for_equal_keys() {
    let deals = deal::seed_deals();
    let mut prefs = UiPrefs::default();
    prefs.toggle_sort(ColumnId::Stage, false);

    // Within each stage group the seed order must survive.
    let ids = visible_ids(&deals, &prefs);
    assert_eq!(
        ids,
        vec![
            "D-1004", "D-1001", "D-1006", "D-1007", "D-1010", "D-1002", "D-1005", "D-1009",
            "D-1003", "D-1008",
        ]
    );
}

#[test]
fn test_substring_filter_is_case_insensitive() {
    let deals = deal::seed_deals();
    let mut prefs = UiPrefs::default();
    prefs.set_filter(ColumnId::Company, "corp".into());

    let ids = visible_ids(&deals, &prefs);
    assert_eq!(ids, vec!["D-1001", "D-1009"]);
}

#[test]
fn test_exact_filter_on_stage() {
    let deals = deal::seed_deals();
    let mut prefs = UiPrefs::default();
    prefs.set_filter(ColumnId::Stage, "Won".into());

    let ids = visible_ids(&deals, &prefs);
    assert_eq!(ids, vec!["D-1003", "D-1008"]);
}

#[test]
fn test_exact_filter_on_status() {
    let deals = deal::seed_deals();
    let mut prefs = UiPrefs::default();
    prefs.set_filter(ColumnId::Status, "On Hold".into());

    let ids = visible_ids(&deals, &prefs);
    assert_eq!(ids, vec!["D-1006"]);
}

#[test]
fn test_filters_combine_with_and() {
    let deals = deal::seed_deals();
    let mut prefs = UiPrefs::default();
    prefs.set_filter(ColumnId::Stage, "New".into());
    prefs.set_filter(ColumnId::Company, "o".into());

    let ids = visible_ids(&deals, &prefs);
    assert_eq!(ids, vec!["D-1001", "D-1010"]);
}

#[test]
fn test_filter_and_sort_compose() {
    let deals = deal::seed_deals();
    let mut prefs = UiPrefs::default();
    prefs.set_filter(ColumnId::Stage, "New".into());
    prefs.toggle_sort(ColumnId::Amount, false);
    prefs.toggle_sort(ColumnId::Amount, false);

    let ids = visible_ids(&deals, &prefs);
    assert_eq!(ids, vec!["D-1006", "D-1010", "D-1001", "D-1007"]);
}

#[test]
fn test_totals_cover_full_store_regardless_of_filter() {
    let deals = deal::seed_deals();
    let mut prefs = UiPrefs::default();

    let before = view::totals(&deals);
    assert_eq!(before.count, 10);
    assert_eq!(before.sum, 300500.0);
    assert_eq!(before.avg, 30050.0);

    prefs.set_filter(ColumnId::Stage, "Won".into());
    assert_eq!(view::visible_row_indices(&deals, &prefs).len(), 2);

    let after = view::totals(&deals);
    assert_eq!(after, before);
}

#[test]
fn test_totals_empty_store() {
    let totals = view::totals(&[]);
    assert_eq!(totals.count, 0);
    assert_eq!(totals.sum, 0.0);
    assert_eq!(totals.avg, 0.0);
}

#[test]
fn test_visible_columns_default_order_and_widths() {
    let prefs = UiPrefs::default();
    let columns = view::visible_columns(&prefs);

    assert_eq!(columns.len(), 7);
    assert_eq!(columns[0], (ColumnId::Company, 260.0));
    assert_eq!(columns[6], (ColumnId::Notes, 320.0));
}

#[test]
fn test_hidden_column_leaves_sequence_and_width_survives() {
    let mut prefs = UiPrefs::default();
    prefs.set_width(ColumnId::Owner, 240.0);
    prefs.toggle_hidden(ColumnId::Owner);

    let columns = view::visible_columns(&prefs);
    assert_eq!(columns.len(), 6);
    assert!(columns.iter().all(|(col, _)| *col != ColumnId::Owner));

    prefs.toggle_hidden(ColumnId::Owner);
    let columns = view::visible_columns(&prefs);
    assert!(columns.contains(&(ColumnId::Owner, 240.0)));
}

#[test]
fn test_notes_sort_puts_missing_first() {
    let deals = deal::seed_deals();
    let mut prefs = UiPrefs::default();
    prefs.toggle_sort(ColumnId::Notes, false);

    let ids = visible_ids(&deals, &prefs);
    // Five records have no notes and keep their store order up front.
    assert_eq!(
        &ids[..5],
        &["D-1005", "D-1007", "D-1008", "D-1009", "D-1010"]
    );
    assert_eq!(ids[5], "D-1003");
}

#[test]
fn test_all_visible_selected_tracks_view() {
    let deals = deal::seed_deals();
    let mut prefs = UiPrefs::default();
    prefs.set_filter(ColumnId::Stage, "Won".into());

    let rows = view::visible_row_indices(&deals, &prefs);
    assert!(!view::all_visible_selected(&deals, &rows, &prefs.selection));

    let ids = view::visible_ids(&deals, &rows);
    prefs.set_selected(ids, true);
    let rows = view::visible_row_indices(&deals, &prefs);
    assert!(view::all_visible_selected(&deals, &rows, &prefs.selection));
}

#[test]
fn test_all_visible_selected_is_false_for_empty_view() {
    let deals = deal::seed_deals();
    let prefs = UiPrefs::default();
    assert!(!view::all_visible_selected(&deals, &[], &prefs.selection));
}

#[test]
fn test_cell_text_formats_amount_and_enums() {
    let deals = deal::seed_deals();
    assert_eq!(view::cell_text(&deals[0], ColumnId::Amount), "12,000");
    assert_eq!(view::cell_text(&deals[0], ColumnId::Stage), "New");
    assert_eq!(view::cell_text(&deals[5], ColumnId::Status), "On Hold");
    assert_eq!(view::cell_text(&deals[4], ColumnId::Notes), "");
}
