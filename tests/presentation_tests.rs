mod common;
use common::{init_store, seed_reference, setup_test_db};
use incidentlog::core::columns::{OCCURRENCE_COLUMNS, headers};
use incidentlog::core::presentation::PresentationState;
use incidentlog::errors::AppError;
use incidentlog::models::filter::OccurrenceFilter;
use incidentlog::models::occurrence::OccurrenceDraft;

fn draft(deposit: i64, kind: i64, year: &str, amount: &str, comment: &str) -> OccurrenceDraft {
    OccurrenceDraft {
        deposit_id: deposit,
        emergency_type_id: kind,
        year: year.to_string(),
        injured_amount: amount.to_string(),
        comment: comment.to_string(),
    }
}

#[test]
fn test_load_builds_lookups_and_empty_list() {
    let db = init_store("presentation_load");
    let (d, t) = seed_reference(&db, &["North", "South"], &["Fire"]);

    let state = PresentationState::load(&db).unwrap();
    assert_eq!(state.lookups().deposits.len(), 2);
    assert_eq!(state.lookups().deposit_name(d[1]), "South");
    assert_eq!(state.lookups().type_name(t[0]), "Fire");
    assert!(state.occurrences().is_empty());
    assert!(state.charts().is_empty());
    assert!(state.filter().is_empty());
}

#[test]
fn test_filter_scenario_with_two_deposits() {
    let db = init_store("presentation_filter_scenario");
    let (d, t) = seed_reference(&db, &["D1", "D2"], &["T1"]);

    let mut state = PresentationState::load(&db).unwrap();
    let id = state.add(&draft(d[0], t[0], "2020", "50000", "test")).unwrap();

    state.set_filter(OccurrenceFilter::by_deposit(d[0])).unwrap();
    assert_eq!(state.occurrences().len(), 1);
    let occ = &state.occurrences()[0];
    assert_eq!(occ.id, id);
    assert_eq!(occ.year, 2020);
    assert_eq!(occ.injured_amount, 50000.0);
    assert_eq!(occ.comment, "test");

    state.set_filter(OccurrenceFilter::by_deposit(d[1])).unwrap();
    assert!(state.occurrences().is_empty());
    assert!(state.charts().is_empty());

    state.set_filter(OccurrenceFilter::by_type(t[0])).unwrap();
    assert_eq!(state.occurrences().len(), 1);

    state.set_filter(OccurrenceFilter::all()).unwrap();
    assert!(state.occurrences().iter().any(|o| o.id == id));
}

#[test]
fn test_add_and_remove_reload_list_and_charts() {
    let db = init_store("presentation_add_remove");
    let (d, t) = seed_reference(&db, &["D1"], &["T1"]);

    let mut state = PresentationState::load(&db).unwrap();
    for year in ["2019", "2019", "2020"] {
        state.add(&draft(d[0], t[0], year, "10", "")).unwrap();
    }

    assert_eq!(state.occurrences().len(), 3);
    assert_eq!(state.charts().bar_count(d[0], 2019), Some(2));
    assert_eq!(state.charts().bar_count(d[0], 2020), Some(1));

    // list is year-descending: row 0 is the 2020 record
    let removed = state.selected(0).unwrap().id;
    assert!(state.remove_selected(0).unwrap());
    assert_eq!(state.occurrences().len(), 2);
    assert!(state.occurrences().iter().all(|o| o.id != removed));
    assert_eq!(state.charts().years, [2019]);

    assert!(!state.remove(removed).unwrap());
    assert_eq!(state.occurrences().len(), 2);
}

#[test]
fn test_remove_selected_out_of_range_is_not_found() {
    let db = init_store("presentation_bad_row");
    seed_reference(&db, &["D1"], &["T1"]);

    let mut state = PresentationState::load(&db).unwrap();
    let err = state.remove_selected(3).unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)), "{err}");
}

#[test]
fn test_reload_sees_changes_from_another_session() {
    let db = init_store("presentation_external_change");
    let (d, t) = seed_reference(&db, &["D1"], &["T1"]);

    let mut viewer = PresentationState::load(&db).unwrap();
    let mut editor = PresentationState::load(&db).unwrap();
    editor.add(&draft(d[0], t[0], "2021", "1", "")).unwrap();

    assert!(viewer.occurrences().is_empty());
    viewer.reload().unwrap();
    assert_eq!(viewer.occurrences().len(), 1);

    seed_reference(&db, &["D2"], &[]);
    viewer.reload_all().unwrap();
    assert_eq!(viewer.lookups().deposits.len(), 2);
}

#[test]
fn test_failed_add_leaves_list_untouched() {
    let db = init_store("presentation_failed_add");
    let (d, t) = seed_reference(&db, &["D1"], &["T1"]);

    let mut state = PresentationState::load(&db).unwrap();
    state.add(&draft(d[0], t[0], "2020", "1", "")).unwrap();

    assert!(state.add(&draft(d[0], t[0], "2020", "-5", "")).is_err());
    assert!(state.add(&draft(d[0] + 9, t[0], "2020", "5", "")).is_err());
    assert_eq!(state.occurrences().len(), 1);
}

#[test]
fn test_table_rows_follow_column_descriptors() {
    let db = init_store("presentation_table_rows");
    let (d, t) = seed_reference(&db, &["Karier-3"], &["Flooding"]);

    let mut state = PresentationState::load(&db).unwrap();
    state.add(&draft(d[0], t[0], "2018", "1234,5", "pump failure")).unwrap();

    assert_eq!(
        headers(),
        ["Deposit", "Year", "Damage amount", "Emergency type", "Comment"]
    );

    let rows = state.table_rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].len(), OCCURRENCE_COLUMNS.len());
    assert_eq!(
        rows[0],
        ["Karier-3", "2018", "1234.50", "Flooding", "pump failure"]
    );
}

#[test]
fn test_load_missing_database_fails() {
    let db = setup_test_db("presentation_missing_db");
    let err = PresentationState::load(&db).err().expect("must fail");
    assert!(matches!(err, AppError::StoreUnavailable { .. }), "{err}");
}
