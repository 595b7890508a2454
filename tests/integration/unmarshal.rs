//! Integration tests for deserializing sections into caller types

use envtree::{Env, EnvError};
use serde::Deserialize;
use toml::value::Datetime;

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct DbConfig {
    driver: String,
    dsn: String,
    #[serde(default = "default_max_open_conns")]
    max_open_conns: u32,
}

fn default_max_open_conns() -> u32 {
    10
}

fn placeholder() -> DbConfig {
    DbConfig {
        driver: "sqlite".to_string(),
        dsn: "memory".to_string(),
        max_open_conns: 1,
    }
}

fn env() -> Env {
    r#"
[db.default]
driver = "postgres"
dsn = "postgres://localhost/app"

[db.broken]
driver = "postgres"

[db.scalar]
value = 3
"#
    .parse()
    .unwrap()
}

#[test]
fn test_unmarshal_section() {
    let mut db = placeholder();
    env().get("db.default").unmarshal(&mut db).unwrap();
    assert_eq!(
        db,
        DbConfig {
            driver: "postgres".to_string(),
            dsn: "postgres://localhost/app".to_string(),
            max_open_conns: 10,
        }
    );
}

#[test]
fn test_unmarshal_absent_leaves_destination() {
    let mut db = placeholder();
    env().get("db.replica").unmarshal(&mut db).unwrap();
    assert_eq!(db, placeholder());
}

#[test]
fn test_unmarshal_scalar_is_type_mismatch() {
    let mut db = placeholder();
    let err = env().get("db.scalar.value").unmarshal(&mut db).unwrap_err();
    assert!(matches!(err, EnvError::TypeMismatch { .. }));
    assert_eq!(err.to_string(), "invalid env value, expects tree, found integer");
    assert_eq!(db, placeholder());
}

#[test]
fn test_unmarshal_missing_field_fails_without_touching_destination() {
    let mut db = placeholder();
    let err = env().get("db.broken").unmarshal(&mut db).unwrap_err();
    assert!(matches!(err, EnvError::Deserialize(_)));
    assert_eq!(db, placeholder());
}

#[derive(Debug, Deserialize)]
struct Schedule {
    day: Datetime,
    starts: Datetime,
    at: Datetime,
}

#[test]
fn test_unmarshal_dates_and_times_into_datetime_fields() {
    let env: Env = "[schedule]\nday = 2023-05-01\nstarts = 2023-05-01T10:30:00+02:00\nat = 07:32:00\n"
        .parse()
        .unwrap();
    let mut schedule = Schedule {
        day: "1970-01-01".parse().unwrap(),
        starts: "1970-01-01T00:00:00Z".parse().unwrap(),
        at: "00:00:00".parse().unwrap(),
    };
    env.get("schedule").unmarshal(&mut schedule).unwrap();

    assert_eq!(schedule.day.to_string(), "2023-05-01");
    assert_eq!(schedule.starts.to_string(), "2023-05-01T10:30:00+02:00");
    assert_eq!(schedule.at.to_string(), "07:32:00");
    assert!(schedule.at.date.is_none());
}
