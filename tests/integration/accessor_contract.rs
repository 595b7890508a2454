//! Integration tests for typed extraction from a loaded document

use chrono::DateTime;
use envtree::{zero_time, Env, NodeKind};

const DOC: &str = r#"
[app]
env = "prod"
debug = false
workers = 8
ratio = 0.75
hosts = ["a.example", "b.example"]
weights = [0.5, 1.5]
ids = [1, 2, 3]
mixed = [1, "x", 3]
launched = 2023-05-01T10:30:00Z
release = "2023-05-01"
release_bad = "May first"

[db.default]
driver = "postgres"
max_open_conns = 20
"#;

fn env() -> Env {
    DOC.parse().unwrap()
}

#[test]
fn test_absent_keys_fall_back_to_defaults() {
    let env = env();
    let missing = env.get("app.missing");
    assert!(missing.is_absent());
    assert_eq!(missing.int(None), 0);
    assert_eq!(missing.int(Some(7)), 7);
    assert_eq!(missing.string(None), "");
    assert!(missing.bool(Some(true)));
    assert_eq!(missing.ints(&[1, 2]), vec![1, 2]);
    assert_eq!(missing.strings(&[]), Vec::<String>::new());
}

#[test]
fn test_mismatch_returns_zero_value_not_default() {
    let env = env();
    assert_eq!(env.get("app.env").int(Some(9)), 0);
    assert_eq!(env.get("app.workers").string(Some("eight")), "");
    assert_eq!(env.get("app.workers").float(Some(8.0)), 0.0);
    assert!(!env.get("app.env").bool(Some(true)));
    assert!(env.get("app.env").ints(&[1]).is_empty());
}

#[test]
fn test_matching_values() {
    let env = env();
    assert_eq!(env.get("app.env").string(Some("dev")), "prod");
    assert!(!env.get("app.debug").bool(Some(true)));
    assert_eq!(env.get("app.workers").int(None), 8);
    assert_eq!(env.get("app.ratio").float(None), 0.75);
    assert_eq!(env.get("app.hosts").strings(&[]), vec!["a.example", "b.example"]);
    assert_eq!(env.get("app.weights").floats(&[]), vec![0.5, 1.5]);
    assert_eq!(env.get("db.default.max_open_conns").int(None), 20);
}

#[test]
fn test_arrays_are_all_or_nothing() {
    let env = env();
    assert!(env.get("app.mixed").ints(&[]).is_empty());
    assert_eq!(env.get("app.ids").ints(&[]), vec![1, 2, 3]);
    // Integers are not coerced to floats.
    assert!(env.get("app.ids").floats(&[]).is_empty());
}

#[test]
fn test_time_values() {
    let env = env();
    let default = DateTime::parse_from_rfc3339("2000-01-01T00:00:00Z").unwrap();

    assert_eq!(
        env.get("app.launched").time("%Y-%m-%d", Some(default)),
        DateTime::parse_from_rfc3339("2023-05-01T10:30:00Z").unwrap()
    );
    assert_eq!(
        env.get("app.release").time("%Y-%m-%d", Some(default)),
        DateTime::parse_from_rfc3339("2023-05-01T00:00:00Z").unwrap()
    );
    assert_eq!(
        env.get("app.release_bad").time("%Y-%m-%d", Some(default)),
        zero_time()
    );
    assert_eq!(env.get("app.nope").time("%Y-%m-%d", Some(default)), default);
}

#[test]
fn test_map_round_trips_through_toml() {
    let env = env();
    let app = env.get("app").map();
    assert_eq!(app.len(), 11);

    let encoded = toml::to_string(&app).unwrap();
    let reparsed: Env = encoded.parse().unwrap();
    assert_eq!(reparsed.root(), &app);
}

#[test]
fn test_whole_document_round_trips() {
    let env = env();
    let encoded = toml::to_string(&env.get("").map()).unwrap();
    let reparsed: Env = encoded.parse().unwrap();
    assert_eq!(reparsed, env);
}

#[test]
fn test_local_dates_and_times_round_trip() {
    let env: Env = "[when]\nld = 2023-05-01\nldt = 2023-05-01T10:30:00\nlt = 07:32:00\n"
        .parse()
        .unwrap();
    let when = env.get("when");
    assert_eq!(env.get("when.lt").kind(), NodeKind::Timestamp);

    let encoded = toml::to_string(&when.map()).unwrap();
    assert!(encoded.contains("ld = 2023-05-01\n"));
    assert!(encoded.contains("ldt = 2023-05-01T10:30:00\n"));
    assert!(encoded.contains("lt = 07:32:00\n"));

    let reparsed: Env = encoded.parse().unwrap();
    assert_eq!(reparsed.root(), &when.map());
}

#[test]
fn test_map_on_non_tree_is_empty() {
    let env = env();
    assert!(env.get("app.env").map().is_empty());
    assert!(env.get("nothing").map().is_empty());
    assert_eq!(env.get("db.default").kind(), NodeKind::Tree);
}

#[test]
fn test_repeated_getters_are_independent() {
    let env = env();
    let value = env.get("app.workers");
    assert_eq!(value.string(None), "");
    assert_eq!(value.int(None), 8);
    assert_eq!(value.int(Some(1)), 8);
}
