use std::collections::HashMap;

use super::*;

fn config_from(pairs: &[(&str, &str)]) -> Result<SiteConfig, ConfigError> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    SiteConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn from_lookup_defaults_when_unset() {
    let cfg = config_from(&[]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
    assert!(cfg.assets_dir.ends_with("public"));
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = config_from(&[("PORT", " 8080 "), ("BIND_ADDR", "127.0.0.1"), ("SITE_ASSETS_DIR", "/srv/site")]).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.bind_addr, IpAddr::V4(Ipv4Addr::LOCALHOST));
    assert_eq!(cfg.assets_dir, PathBuf::from("/srv/site"));
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn from_lookup_accepts_ipv6_bind_addr() {
    let cfg = config_from(&[("BIND_ADDR", "::1")]).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "[::1]:3000");
}

#[test]
fn from_lookup_blank_assets_dir_uses_default() {
    let cfg = config_from(&[("SITE_ASSETS_DIR", "  ")]).unwrap();
    assert!(cfg.assets_dir.ends_with("public"));
}

#[test]
fn invalid_port_is_an_error() {
    for value in ["abc", "70000", "0", "-1", ""] {
        let err = config_from(&[("PORT", value)]).unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort { value: value.to_owned() }, "PORT={value:?}");
    }
}

#[test]
fn invalid_bind_addr_is_an_error() {
    let err = config_from(&[("BIND_ADDR", "localhost")]).unwrap_err();
    assert_eq!(err, ConfigError::InvalidBindAddr { value: "localhost".to_owned() });
    assert!(err.to_string().contains("BIND_ADDR"));
}

