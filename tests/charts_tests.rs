use incidentlog::core::charts::{ChartData, LinePoint};
use incidentlog::models::deposit::Deposit;
use incidentlog::models::emergency_type::EmergencyType;
use incidentlog::models::lookups::Lookups;
use incidentlog::models::occurrence::Occurrence;
use std::collections::BTreeSet;

fn occ(id: i64, deposit_id: i64, year: i32, amount: f64) -> Occurrence {
    Occurrence {
        id,
        deposit_id,
        emergency_type_id: 1,
        year,
        injured_amount: amount,
        comment: String::new(),
    }
}

fn lookups() -> Lookups {
    Lookups::new(
        vec![
            Deposit {
                id: 1,
                name: "D1".to_string(),
            },
            Deposit {
                id: 2,
                name: "D2".to_string(),
            },
            Deposit {
                id: 3,
                name: "D3".to_string(),
            },
        ],
        vec![EmergencyType {
            id: 1,
            name: "Fire".to_string(),
        }],
    )
}

fn sample() -> Vec<Occurrence> {
    vec![
        occ(1, 1, 2019, 100.0),
        occ(2, 1, 2019, 50.0),
        occ(3, 1, 2020, 75.5),
        occ(4, 2, 2021, 10.0),
        occ(5, 3, 2017, 0.0),
        occ(6, 3, 2021, 20.0),
    ]
}

#[test]
fn test_bar_counts_per_deposit_and_year() {
    let list = vec![
        occ(1, 1, 2019, 1.0),
        occ(2, 1, 2019, 1.0),
        occ(3, 1, 2020, 1.0),
    ];
    let charts = ChartData::build(&list, &lookups());

    assert_eq!(charts.years, [2019, 2020]);
    assert_eq!(charts.bar_count(1, 2019), Some(2));
    assert_eq!(charts.bar_count(1, 2020), Some(1));
    assert_eq!(charts.bar[0].counts, [2, 1]);
}

#[test]
fn test_year_axis_is_union_and_every_series_is_complete() {
    let list = sample();
    let charts = ChartData::build(&list, &lookups());

    let distinct: BTreeSet<i32> = list.iter().map(|o| o.year).collect();
    assert_eq!(charts.years, distinct.into_iter().collect::<Vec<_>>());

    for series in &charts.bar {
        assert_eq!(series.counts.len(), charts.years.len());
    }
    // D2 only has 2021
    assert_eq!(charts.bar_count(2, 2017), Some(0));
    assert_eq!(charts.bar_count(2, 2021), Some(1));

    let total: u32 = charts.bar.iter().flat_map(|s| s.counts.iter()).sum();
    assert_eq!(total as usize, list.len());
}

#[test]
fn test_pie_counts_populated_years_not_occurrences() {
    let list = sample();
    let charts = ChartData::build(&list, &lookups());

    let values: Vec<(i64, u32)> = charts.pie.iter().map(|s| (s.deposit_id, s.value)).collect();
    // D1 has three occurrences over two years
    assert_eq!(values, [(1, 2), (2, 1), (3, 2)]);

    let pairs: BTreeSet<(i64, i32)> = list.iter().map(|o| (o.deposit_id, o.year)).collect();
    assert_eq!(charts.pie_total() as usize, pairs.len());
    assert_ne!(charts.pie_total() as usize, list.len());
}

#[test]
fn test_line_points_follow_year_and_amount() {
    let charts = ChartData::build(&sample(), &lookups());

    let d1 = charts.line.iter().find(|s| s.deposit_id == 1).unwrap();
    assert_eq!(
        d1.points,
        [
            LinePoint {
                year: 2019,
                amount: 100.0
            },
            LinePoint {
                year: 2019,
                amount: 50.0
            },
            LinePoint {
                year: 2020,
                amount: 75.5
            },
        ]
    );

    let d3 = charts.line.iter().find(|s| s.deposit_id == 3).unwrap();
    let xs: Vec<i32> = d3.points.iter().map(|p| p.year).collect();
    assert_eq!(xs, [2017, 2021]);
}

#[test]
fn test_series_sorted_by_deposit_and_named() {
    // input in year-descending order, as the store returns it
    let mut list = sample();
    list.reverse();
    let charts = ChartData::build(&list, &lookups());

    let ids: Vec<i64> = charts.bar.iter().map(|s| s.deposit_id).collect();
    assert_eq!(ids, [1, 2, 3]);
    assert_eq!(charts.pie[1].name, "D2");
    assert_eq!(charts.line[2].name, "D3");
}

#[test]
fn test_unknown_deposit_gets_placeholder_name() {
    let charts = ChartData::build(&[occ(1, 77, 2020, 1.0)], &lookups());
    assert_eq!(charts.bar[0].name, "#77");
}

#[test]
fn test_empty_list_builds_empty_charts() {
    let charts = ChartData::build(&[], &lookups());
    assert!(charts.is_empty());
    assert!(charts.bar.is_empty() && charts.pie.is_empty() && charts.line.is_empty());
    assert_eq!(charts.pie_total(), 0);
    assert_eq!(charts.bar_count(1, 2020), None);
}
