use super::{ClientKind, ConnectionProfile, ProfileStore};
use crate::config::ConfigError;

#[test]
fn client_kind_parses_config_values() {
    assert_eq!(ClientKind::from_config_value(None).expect("default"), ClientKind::Mysql);
    assert_eq!(ClientKind::from_config_value(Some("")).expect("empty"), ClientKind::Mysql);
    assert_eq!(ClientKind::from_config_value(Some("mysql")).expect("mysql"), ClientKind::Mysql);
    assert_eq!(ClientKind::from_config_value(Some("mycli")).expect("mycli"), ClientKind::Mycli);
    assert!(ClientKind::from_config_value(Some("MySQL")).is_err());
}

#[test]
fn profile_debug_output_hides_password() {
    let profile = ConnectionProfile::new("db1", 3306, "root", "s3cret", "app");
    let rendered = format!("{profile:?}");
    assert!(!rendered.contains("s3cret"));
    assert!(rendered.contains("db1"));
}

#[test]
fn store_rejects_empty_profile_list() {
    let err = ProfileStore::new(ClientKind::Mysql, Vec::new()).expect_err("empty store");
    assert!(matches!(err, ConfigError::NoProfiles));
}

#[test]
fn store_keeps_duplicates_in_order() {
    let store = ProfileStore::new(
        ClientKind::Mycli,
        vec![
            ConnectionProfile::new("db1", 3306, "root", "", "app"),
            ConnectionProfile::new("db1", 3306, "root", "", "app"),
            ConnectionProfile::new("db2", 3306, "root", "", "logs"),
        ],
    )
    .expect("non-empty store");

    assert_eq!(store.len(), 3);
    assert_eq!(store.last_index(), 2);
    let names: Vec<String> = store.profiles().iter().map(ConnectionProfile::display_name).collect();
    assert_eq!(names, ["db1/app", "db1/app", "db2/logs"]);
}
