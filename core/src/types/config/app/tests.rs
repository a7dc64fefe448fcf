use super::*;
use tempfile::TempDir;

#[test]
fn load_missing_file_returns_defaults() {
    let dir = TempDir::new().unwrap();
    let config = AppConfig::load(&AppConfig::path(dir.path())).unwrap();

    assert_eq!(config, AppConfig::default());
    assert_eq!(config.search.max_results, 50);
    assert!(config.tags.block && config.tags.category && config.tags.emoji && config.tags.alias);
}

#[test]
fn save_then_load_preserves_user_data() {
    let dir = TempDir::new().unwrap();
    let path = AppConfig::path(dir.path());

    let mut config = AppConfig::default();
    config.search.max_results = 10;
    config.tags.category = false;
    config.favorites.codepoints = vec!["1F525".to_string(), "0041".to_string()];
    config.user_tags = vec![
        UserTagPair {
            codepoint: "1F525".to_string(),
            tag: "hot".to_string(),
        },
        UserTagPair {
            codepoint: "1F525".to_string(),
            tag: "lit".to_string(),
        },
    ];

    config.save(&path).unwrap();
    let loaded = AppConfig::load(&path).unwrap();

    assert_eq!(loaded, config);
}

#[test]
fn partial_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = AppConfig::path(dir.path());
    std::fs::write(&path, "[tags]\nemoji = false\n").unwrap();

    let config = AppConfig::load(&path).unwrap();

    assert!(!config.tags.emoji);
    assert!(config.tags.block);
    assert_eq!(config.search.max_results, 50);
    assert!(config.user_tags.is_empty());
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = AppConfig::path(dir.path());
    std::fs::write(&path, "[search\nmax_results = ").unwrap();

    let err = AppConfig::load(&path).unwrap_err();
    assert!(matches!(err, AppConfigError::Parse(_)));
}

#[test]
fn validate_reports_unresolvable_entries() {
    let mut config = AppConfig::default();
    config.favorites.codepoints = vec!["0041".to_string(), "nope".to_string()];
    config.user_tags = vec![
        UserTagPair {
            codepoint: "ZZZZ".to_string(),
            tag: "bad".to_string(),
        },
        UserTagPair {
            codepoint: "0041".to_string(),
            tag: "  ".to_string(),
        },
    ];

    assert_eq!(config.validate().len(), 3);
    assert!(AppConfig::default().validate().is_empty());
}

#[test]
fn with_defaults_for_invalid_drops_bad_entries() {
    let mut config = AppConfig::default();
    config.favorites.codepoints = vec!["41".to_string(), "nope".to_string()];
    config.user_tags = vec![
        UserTagPair {
            codepoint: "0041".to_string(),
            tag: "first".to_string(),
        },
        UserTagPair {
            codepoint: "0041".to_string(),
            tag: String::new(),
        },
    ];

    let fixed = config.with_defaults_for_invalid();

    assert_eq!(fixed.favorites.codepoints, ["41"]);
    assert_eq!(fixed.user_tags.len(), 1);
    assert!(fixed.validate().is_empty());
}

#[test]
fn favorites_are_normalized() {
    let mut config = AppConfig::default();
    config.favorites.codepoints = vec!["41".to_string(), "u+1f525".to_string()];

    let favorites = config.favorites();

    assert!(favorites.contains(&CodepointHex::try_from("0041").unwrap()));
    assert!(favorites.contains(&CodepointHex::try_from("1F525").unwrap()));
    assert_eq!(favorites.len(), 2);
}
