use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let owned: Vec<(String, String)> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| owned.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
}

// =============================================================================
// Defaults
// =============================================================================

#[test]
fn empty_environment_uses_defaults() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
    assert!(cfg.assets_dir.ends_with("../assets"));
}

#[test]
fn socket_addr_combines_bind_and_port() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("BIND_ADDR", "127.0.0.1"), ("PORT", "8080")])).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
}

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn port_is_trimmed() {
    assert_eq!(parse_port(Some(" 4000 ")), Ok(4000));
}

#[test]
fn blank_port_falls_back_to_default() {
    assert_eq!(parse_port(Some("")), Ok(DEFAULT_PORT));
}

#[test]
fn non_numeric_port_is_rejected() {
    assert_eq!(parse_port(Some("http")), Err(ConfigError::Port("http".into())));
}

#[test]
fn out_of_range_port_is_rejected() {
    assert!(matches!(parse_port(Some("70000")), Err(ConfigError::Port(_))));
}

#[test]
fn ipv6_bind_addr_parses() {
    assert_eq!(parse_bind_addr(Some("::1")).unwrap().to_string(), "::1");
}

#[test]
fn bad_bind_addr_is_rejected() {
    let err = ServerConfig::from_lookup(lookup_from(&[("BIND_ADDR", "localhost")])).unwrap_err();
    assert_eq!(err.to_string(), "invalid BIND_ADDR: localhost");
}

#[test]
fn assets_dir_override_is_used() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("ASSETS_DIR", "/srv/folio")])).unwrap();
    assert_eq!(cfg.assets_dir, PathBuf::from("/srv/folio"));
}

// =============================================================================
// Process environment
// =============================================================================

#[test]
fn from_env_reads_process_environment() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("BIND_ADDR");
        std::env::set_var("ASSETS_DIR", "/tmp/folio-assets");
    }
    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.assets_dir, PathBuf::from("/tmp/folio-assets"));
    assert_eq!(cfg.port, DEFAULT_PORT);
    unsafe { std::env::remove_var("ASSETS_DIR") };
}
