use clap::error::ErrorKind;

use super::*;

#[test]
fn parses_text_search_arguments() {
    let cli = Cli::try_parse_from([
        "zipscout",
        "--api-key",
        "key",
        "--zips",
        "90210,10001",
        "--search-term",
        "cabinet",
    ])
    .expect("expected valid cli args");

    assert_eq!(cli.api_key, "key");
    assert_eq!(cli.zips, "90210,10001");
    assert_eq!(cli.radius, 50, "radius defaults to 50 miles");
    assert_eq!(cli.output, PathBuf::from("output.csv"));
    assert!(matches!(
        cli.search_mode().expect("mode"),
        SearchMode::Text { ref keyword } if keyword == "cabinet"
    ));
}

#[test]
fn parses_short_flags() {
    let cli = Cli::try_parse_from([
        "zipscout", "-k", "key", "-z", "90210", "-r", "10", "-s", "cabinet", "-o", "out/places.csv",
    ])
    .expect("expected valid cli args");

    assert_eq!(cli.radius, 10);
    assert_eq!(cli.output, PathBuf::from("out/places.csv"));
}

#[test]
fn parses_typed_search_arguments() {
    let cli = Cli::try_parse_from([
        "zipscout",
        "-k",
        "key",
        "-z",
        "90210",
        "--type",
        "hardware_store, locksmith,",
    ])
    .expect("expected valid cli args");

    match cli.search_mode().expect("mode") {
        SearchMode::Typed { types } => {
            assert_eq!(types, vec!["hardware_store", "locksmith"]);
        }
        other => panic!("expected Typed mode, got: {other:?}"),
    }
}

#[test]
fn search_term_and_type_are_mutually_exclusive() {
    let err = Cli::try_parse_from([
        "zipscout",
        "-k",
        "key",
        "-z",
        "90210",
        "-s",
        "cabinet",
        "-t",
        "hardware_store",
    ])
    .expect_err("conflicting mode flags must be rejected");

    assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
}

#[test]
fn one_of_search_term_or_type_is_required() {
    let err = Cli::try_parse_from(["zipscout", "-k", "key", "-z", "90210"])
        .expect_err("a search mode is required");

    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
}

#[test]
fn zips_are_required() {
    let err = Cli::try_parse_from(["zipscout", "-k", "key", "-s", "cabinet"])
        .expect_err("zips are required");

    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
}

#[test]
fn type_list_with_no_tokens_is_rejected() {
    let cli = Cli::try_parse_from(["zipscout", "-k", "key", "-z", "90210", "-t", " , ,"])
        .expect("clap accepts the raw string");

    assert!(cli.search_mode().is_err(), "empty token list must error");
}
