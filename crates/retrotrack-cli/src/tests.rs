use std::path::Path;

use chrono::Utc;
use clap::Parser;
use retrotrack_core::{AppConfig, ConsoleResult, Environment, ListingRecord};
use rust_decimal::Decimal;

use super::*;

fn listing(price: Option<Decimal>, sold: bool) -> ListingRecord {
    ListingRecord {
        title: "Sega Genesis Model 1".to_string(),
        item_id: "42".to_string(),
        price,
        condition: Some("Used".to_string()),
        sold,
        end_time: "2024-03-01T18:22:05.000Z".to_string(),
        url: "https://www.ebay.com/itm/42".to_string(),
        shipping_cost: None,
    }
}

fn test_config() -> AppConfig {
    AppConfig {
        env: Environment::Test,
        log_level: "info".to_string(),
        ebay_app_id: None,
        ebay_base_url: "http://127.0.0.1:9/".to_string(),
        ebay_category_id: "139971".to_string(),
        request_timeout_secs: None,
        user_agent: "retrotrack-test/0.1".to_string(),
        inter_request_delay_ms: 0,
        consoles_path: None,
    }
}

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["retrotrack"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_scrape_defaults() {
    let cli = Cli::try_parse_from(["retrotrack", "scrape"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Scrape {
            consoles: None,
            json: false
        })
    ));
}

#[test]
fn parses_scrape_with_consoles_file_and_json() {
    let cli = Cli::try_parse_from([
        "retrotrack",
        "scrape",
        "--consoles",
        "config/consoles.yaml",
        "--json",
    ])
    .unwrap();
    match cli.command {
        Some(Commands::Scrape { consoles, json }) => {
            assert_eq!(consoles.as_deref(), Some(Path::new("config/consoles.yaml")));
            assert!(json);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parses_search_with_condition() {
    let cli = Cli::try_parse_from([
        "retrotrack",
        "search",
        "Nintendo 64",
        "--condition",
        "For parts or not working",
    ])
    .unwrap();
    match cli.command {
        Some(Commands::Search {
            console,
            condition,
            json,
        }) => {
            assert_eq!(console, "Nintendo 64");
            assert_eq!(condition.as_deref(), Some("For parts or not working"));
            assert!(!json);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn search_requires_console() {
    assert!(Cli::try_parse_from(["retrotrack", "search"]).is_err());
}

#[test]
fn help_is_answered_by_the_parser() {
    let err = Cli::try_parse_from(["retrotrack", "--help"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);

    let err = Cli::try_parse_from(["retrotrack", "scrape", "--help"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}

#[test]
fn resolve_consoles_defaults_to_builtin_list() {
    let consoles = scrape::resolve_consoles(&test_config(), None).unwrap();
    assert_eq!(consoles, retrotrack_core::default_consoles());
}

#[test]
fn resolve_consoles_reports_missing_file() {
    let mut config = test_config();
    config.consoles_path = Some("/no/such/consoles.yaml".into());
    assert!(scrape::resolve_consoles(&config, None).is_err());
}

#[test]
fn build_client_without_app_id_fails() {
    let err = scrape::build_ebay_client(&test_config())
        .err()
        .expect("expected missing app id error");
    assert!(format!("{err}").contains("EBAY_APP_ID"), "got: {err}");
}

#[test]
fn summary_for_successful_result() {
    let result = ConsoleResult::from_listings(
        "Sega Genesis",
        vec![
            listing(Some(Decimal::new(40, 0)), true),
            listing(Some(Decimal::new(60, 0)), false),
            listing(None, true),
        ],
        Utc::now(),
    );
    assert_eq!(
        report::render_summary(&result),
        "Sega Genesis: 3 listings, 2 sold, avg $50.00, median $60.00, min $40.00, max $60.00"
    );
}

#[test]
fn summary_for_failed_result() {
    let result = ConsoleResult::failed("GameCube", "unexpected HTTP status 500");
    assert_eq!(
        report::render_summary(&result),
        "GameCube: FAILED (unexpected HTTP status 500)"
    );
}

#[test]
fn listing_line_marks_missing_price() {
    let line = report::render_listing(&listing(None, false));
    assert!(line.starts_with("[unsold] n/a (Used)"), "got: {line}");
}

#[test]
fn json_report_pairs_result_with_stats() {
    let results = vec![
        ConsoleResult::from_listings(
            "Sega Genesis",
            vec![listing(Some(Decimal::new(4999, 2)), true)],
            Utc::now(),
        ),
        ConsoleResult::failed("GameCube", "boom"),
    ];
    let rendered = report::render_json(&results).unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

    assert_eq!(value[0]["result"]["console"], "Sega Genesis");
    assert_eq!(value[0]["stats"]["sold_count"], 1);
    assert_eq!(value[0]["stats"]["avg_price"], "49.99");
    assert_eq!(value[1]["result"]["error"], "boom");
    assert_eq!(value[1]["stats"]["total_listings"], 0);
}
