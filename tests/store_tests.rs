mod common;
use common::{init_store, seed_reference, setup_test_db};
use incidentlog::core::add::AddLogic;
use incidentlog::core::del::DeleteLogic;
use incidentlog::core::reference::ReferenceLogic;
use incidentlog::db::pool::DbPool;
use incidentlog::db::queries::{
    count_occurrences, insert_occurrence, list_deposits, list_emergency_types, list_occurrences,
};
use incidentlog::errors::AppError;
use incidentlog::models::filter::OccurrenceFilter;
use incidentlog::models::occurrence::{NewOccurrence, OccurrenceDraft};

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
fn test_reference_lists_keep_insertion_order() {
    let db = init_store("store_reference_order");
    let (deps, types) = seed_reference(&db, &["Alpha", "Beta", "Gamma"], &["Fire", "Collapse"]);

    let pool = DbPool::open_existing(&db).unwrap();
    let deposits = list_deposits(&pool.conn).unwrap();
    let names: Vec<&str> = deposits.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, ["Alpha", "Beta", "Gamma"]);
    assert_eq!(deposits.iter().map(|d| d.id).collect::<Vec<_>>(), deps);

    let kinds = list_emergency_types(&pool.conn).unwrap();
    assert_eq!(kinds.len(), 2);
    assert_eq!(kinds[1].id, types[1]);
    assert_eq!(kinds[1].name, "Collapse");
}

#[test]
fn test_filter_combinations_return_exact_subsets() {
    let db = init_store("store_filter_combinations");
    let (d, t) = seed_reference(&db, &["D1", "D2"], &["T1", "T2"]);
    let mut pool = DbPool::open_existing(&db).unwrap();

    let rows = [
        (d[0], t[0], "2018"),
        (d[0], t[1], "2019"),
        (d[1], t[0], "2020"),
        (d[1], t[1], "2021"),
        (d[0], t[0], "2022"),
    ];
    for (dep, kind, year) in rows {
        AddLogic::apply(&mut pool, &draft(dep, kind, year, "10", "")).unwrap();
    }

    let all = list_occurrences(&pool.conn, &OccurrenceFilter::all()).unwrap();
    assert_eq!(all.len(), rows.len());

    for dep in [None, Some(d[0]), Some(d[1])] {
        for kind in [None, Some(t[0]), Some(t[1])] {
            let filter = OccurrenceFilter::from_ids(dep, kind);
            let got = list_occurrences(&pool.conn, &filter).unwrap();

            let expected: Vec<i64> = all
                .iter()
                .filter(|o| dep.is_none_or(|id| o.deposit_id == id))
                .filter(|o| kind.is_none_or(|id| o.emergency_type_id == id))
                .map(|o| o.id)
                .collect();

            assert_eq!(got.iter().map(|o| o.id).collect::<Vec<_>>(), expected);
        }
    }
}

#[test]
fn test_zero_ids_mean_no_filter() {
    let db = init_store("store_zero_sentinel");
    let (d, t) = seed_reference(&db, &["D1"], &["T1"]);
    let mut pool = DbPool::open_existing(&db).unwrap();
    AddLogic::apply(&mut pool, &draft(d[0], t[0], "2020", "1", "")).unwrap();

    let filter = OccurrenceFilter::from_ids(Some(0), Some(0));
    assert!(filter.is_empty());
    assert_eq!(list_occurrences(&pool.conn, &filter).unwrap().len(), 1);
}

#[test]
fn test_occurrences_ordered_by_year_descending() {
    let db = init_store("store_ordering");
    let (d, t) = seed_reference(&db, &["D1"], &["T1"]);
    let mut pool = DbPool::open_existing(&db).unwrap();

    let first = AddLogic::apply(&mut pool, &draft(d[0], t[0], "2019", "1", "a")).unwrap();
    AddLogic::apply(&mut pool, &draft(d[0], t[0], "2021", "1", "b")).unwrap();
    let third = AddLogic::apply(&mut pool, &draft(d[0], t[0], "2019", "1", "c")).unwrap();

    let list = list_occurrences(&pool.conn, &OccurrenceFilter::all()).unwrap();
    let years: Vec<i32> = list.iter().map(|o| o.year).collect();
    assert_eq!(years, [2021, 2019, 2019]);
    // newest record first within a year
    assert_eq!(list[1].id, third);
    assert_eq!(list[2].id, first);
}

#[test]
fn test_insert_then_list_round_trip() {
    let db = init_store("store_round_trip");
    let (d, t) = seed_reference(&db, &["D1"], &["T1"]);
    let mut pool = DbPool::open_existing(&db).unwrap();

    let expected = NewOccurrence {
        deposit_id: d[0],
        emergency_type_id: t[0],
        year: 2020,
        injured_amount: 50000.0,
        comment: "test".to_string(),
    };
    let id = AddLogic::apply(&mut pool, &draft(d[0], t[0], "2020", "50000", " test ")).unwrap();

    let list = list_occurrences(&pool.conn, &OccurrenceFilter::all()).unwrap();
    let matching: Vec<_> = list.iter().filter(|o| expected.matches(o)).collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].id, id);
}

#[test]
fn test_delete_is_idempotent() {
    let db = init_store("store_delete_idempotent");
    let (d, t) = seed_reference(&db, &["D1"], &["T1"]);
    let mut pool = DbPool::open_existing(&db).unwrap();

    let keep = AddLogic::apply(&mut pool, &draft(d[0], t[0], "2019", "5", "keep")).unwrap();
    let gone = AddLogic::apply(&mut pool, &draft(d[0], t[0], "2020", "7", "gone")).unwrap();

    // unknown id: nothing changes
    assert!(!DeleteLogic::apply(&mut pool, 9_999).unwrap());
    assert_eq!(count_occurrences(&pool.conn).unwrap(), 2);

    assert!(DeleteLogic::apply(&mut pool, gone).unwrap());
    assert!(!DeleteLogic::apply(&mut pool, gone).unwrap());

    let list = list_occurrences(&pool.conn, &OccurrenceFilter::all()).unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].id, keep);
    assert!(list.iter().all(|o| o.id != gone));
}

#[test]
fn test_unknown_deposit_or_type_is_constraint_violation() {
    let db = init_store("store_constraint");
    let (d, t) = seed_reference(&db, &["D1"], &["T1"]);
    let mut pool = DbPool::open_existing(&db).unwrap();

    let err = AddLogic::apply(&mut pool, &draft(d[0] + 100, t[0], "2020", "1", "")).unwrap_err();
    assert!(matches!(err, AppError::ConstraintViolation(_)), "{err}");

    let err = AddLogic::apply(&mut pool, &draft(d[0], t[0] + 100, "2020", "1", "")).unwrap_err();
    assert!(matches!(err, AppError::ConstraintViolation(_)), "{err}");

    assert_eq!(count_occurrences(&pool.conn).unwrap(), 0);
}

#[test]
fn test_foreign_keys_enforced_by_store() {
    let db = init_store("store_fk_enforced");
    let pool = DbPool::open_existing(&db).unwrap();

    let occ = NewOccurrence {
        deposit_id: 42,
        emergency_type_id: 43,
        year: 2020,
        injured_amount: 1.0,
        comment: String::new(),
    };
    let err = insert_occurrence(&pool.conn, &occ).unwrap_err();
    assert!(matches!(err, AppError::ConstraintViolation(_)), "{err}");
}

#[test]
fn test_invalid_text_is_validation_error() {
    let db = init_store("store_validation");
    let (d, t) = seed_reference(&db, &["D1"], &["T1"]);
    let mut pool = DbPool::open_existing(&db).unwrap();

    for (year, amount) in [
        ("twenty", "10"),
        ("2020", "lots"),
        ("2020", "-1"),
        ("1850", "10"),
        ("", "10"),
        ("2020", ""),
    ] {
        let err = AddLogic::apply(&mut pool, &draft(d[0], t[0], year, amount, "")).unwrap_err();
        assert!(
            matches!(err, AppError::Validation(_)),
            "year={year:?} amount={amount:?}: {err}"
        );
    }

    let err = AddLogic::apply(&mut pool, &draft(0, t[0], "2020", "1", "")).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    assert_eq!(count_occurrences(&pool.conn).unwrap(), 0);
}

#[test]
fn test_duplicate_reference_name_is_rejected() {
    let db = init_store("store_duplicate_reference");
    seed_reference(&db, &["Alpha"], &["Fire"]);
    let mut pool = DbPool::open_existing(&db).unwrap();

    let err = ReferenceLogic::add_deposit(&mut pool, "Alpha").unwrap_err();
    assert!(matches!(err, AppError::ConstraintViolation(_)), "{err}");

    let err = ReferenceLogic::add_emergency_type(&mut pool, "   ").unwrap_err();
    assert!(matches!(err, AppError::Validation(_)), "{err}");
}

#[test]
fn test_missing_database_is_store_unavailable() {
    let db = setup_test_db("store_missing_file");
    let err = DbPool::open_existing(&db).err().expect("missing file must fail");
    assert!(matches!(err, AppError::StoreUnavailable { .. }), "{err}");
}
