//! Integration test: archive CSV -> record store -> every derived series
//!
//! Mirrors how a charting layer drives the crate: load the newest-first
//! export, load the legacy baseline, compute the dashboard.

use sprint_analytics::format::{format_date, prettify_seconds};
use sprint_analytics::ingest::{load_baseline_csv, load_records_csv};
use sprint_analytics::progression::best_progression;
use sprint_analytics::record::{Chronology, LegacyBaseline, Record, RecordStore};
use sprint_analytics::topk::top_n;
use sprint_analytics::{AnalysisConfig, Dashboard};

const RECORDS_CSV: &str = "\
played_at,time_ms,accuracy,pieces,pps
2024-05-04T12:00:00Z,45000,97.1,100,2.22
2024-05-03T12:00:00Z,70000,88.0,104,1.49
2024-05-02T12:00:00Z,50000,93.4,101,2.02
2024-05-01T12:00:00Z,60000,91.0,102,1.70
";

const LEGACY_CSV: &str = "\
played_at,time_ms
2023-12-01 20:00:00,55500
2023-06-01 20:00:00,72000
";

#[test]
fn test_scenario_top_n_and_progression() {
    let store = RecordStore::new(
        vec![
            Record::new(100, 60.0),
            Record::new(200, 50.0),
            Record::new(300, 70.0),
            Record::new(400, 45.0),
        ],
        Chronology::OldestFirst,
    )
    .unwrap();

    let top = top_n(&store, 2).unwrap();
    assert_eq!(top, vec![Record::new(400, 45.0), Record::new(200, 50.0)]);

    let bests = best_progression(&LegacyBaseline::empty(), &store);
    assert_eq!(bests.timestamps, vec![100, 200, 400]);
    assert_eq!(bests.values, vec![60.0, 50.0, 45.0]);
}

#[test]
fn test_csv_to_dashboard() {
    let store = load_records_csv(RECORDS_CSV.as_bytes()).unwrap();
    let legacy = load_baseline_csv(LEGACY_CSV.as_bytes()).unwrap();
    let config = AnalysisConfig::builder()
        .moving_average_window(2)
        .top_n(3)
        .build()
        .unwrap();

    let dashboard = Dashboard::compute(&store, &legacy, &config, 0).unwrap();

    assert_eq!(dashboard.games_played, 4);
    assert_eq!(dashboard.trend.values, vec![60.0, 50.0, 70.0, 45.0]);
    assert_eq!(
        dashboard.moving_average.rounded(),
        vec![Some(60.0), Some(55.0), Some(60.0), Some(57.5)]
    );

    // legacy 72.0 -> 55.5, then live 50.0 and 45.0
    assert_eq!(dashboard.personal_bests.values, vec![72.0, 55.5, 50.0, 45.0]);

    assert_eq!(dashboard.histogram.bucket_labels.first(), Some(&45));
    assert_eq!(dashboard.histogram.bucket_labels.last(), Some(&70));
    assert_eq!(dashboard.histogram.total(), 4);

    let table: Vec<(String, String)> = dashboard
        .top
        .iter()
        .map(|r| (format_date(r.played_at()).unwrap(), prettify_seconds(r.value())))
        .collect();
    assert_eq!(
        table,
        vec![
            ("2024-05-04 12:00".to_string(), "45s".to_string()),
            ("2024-05-02 12:00".to_string(), "50s".to_string()),
            ("2024-05-01 12:00".to_string(), "60s".to_string()),
        ]
    );
    assert_eq!(dashboard.top[0].accuracy(), Some(97.1));
}

#[test]
fn test_derivations_are_pure() {
    let store = load_records_csv(RECORDS_CSV.as_bytes()).unwrap();
    let legacy = load_baseline_csv(LEGACY_CSV.as_bytes()).unwrap();
    let config = AnalysisConfig::default();

    let first = Dashboard::compute(&store, &legacy, &config, 1_714_900_000).unwrap();
    let second = Dashboard::compute(&store, &legacy, &config, 1_714_900_000).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
}

#[test]
fn test_config_rejected_before_output() {
    let store = load_records_csv(RECORDS_CSV.as_bytes()).unwrap();
    let config = AnalysisConfig {
        top_n: 0,
        ..AnalysisConfig::default()
    };
    let result = Dashboard::compute(&store, &LegacyBaseline::empty(), &config, 0);
    assert!(result.is_err());
}
