use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_defaults_to_all_interfaces_on_3000() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.addr, "0.0.0.0:3000".parse().unwrap());
}

#[test]
fn from_lookup_reads_host_and_port() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("HOST", "127.0.0.1"), ("PORT", " 8080 ")])).unwrap();
    assert_eq!(cfg.addr, "127.0.0.1:8080".parse().unwrap());
}

#[test]
fn from_lookup_rejects_non_numeric_port() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("http".to_owned()));
}

#[test]
fn from_lookup_rejects_out_of_range_port() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("70000".to_owned()));
}

#[test]
fn from_lookup_rejects_bad_host() {
    let err = ServerConfig::from_lookup(lookup_from(&[("HOST", "not a host")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidAddr { host: "not a host".to_owned(), port: DEFAULT_PORT });
}
