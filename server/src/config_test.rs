use super::*;

use std::sync::Mutex;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// # Safety
/// Callers must hold `ENV_LOCK` so env mutations do not race.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("BIND_ADDR");
        std::env::remove_var(BASE_PATH_ENV);
    }
}

// =============================================================================
// from_env
// =============================================================================

#[test]
fn from_env_defaults() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe { clear_server_env() };

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind_addr.to_string(), DEFAULT_BIND_ADDR);
    assert_eq!(cfg.base_path, "");
}

#[test]
fn from_env_parses_overrides() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "8080");
        std::env::set_var("BIND_ADDR", "127.0.0.1");
        std::env::set_var(BASE_PATH_ENV, "qbv/");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1");
    assert_eq!(cfg.base_path, "/qbv");

    unsafe { clear_server_env() };
}

#[test]
fn from_env_bad_port_errors() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "http");
    }

    let err = ServerConfig::from_env().unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("http".into()));

    unsafe { clear_server_env() };
}

// =============================================================================
// parse helpers
// =============================================================================

#[test]
fn parse_port_rejects_zero_and_overflow() {
    assert!(parse_port(Some("0")).is_err());
    assert!(parse_port(Some("70000")).is_err());
    assert_eq!(parse_port(Some(" 3001 ")), Ok(3001));
    assert_eq!(parse_port(Some("")), Ok(DEFAULT_PORT));
}

#[test]
fn parse_bind_addr_accepts_ipv6() {
    assert!(parse_bind_addr(Some("::1")).is_ok());
    assert_eq!(
        parse_bind_addr(Some("localhost")),
        Err(ConfigError::InvalidBindAddr("localhost".into()))
    );
}

#[test]
fn route_joins_base_path() {
    let mut cfg = ServerConfig { port: 1, bind_addr: "127.0.0.1".parse().unwrap(), base_path: String::new() };
    assert_eq!(cfg.route("/register"), "/register");
    cfg.base_path = "/qbv".into();
    assert_eq!(cfg.route("/register"), "/qbv/register");
    assert_eq!(cfg.route(""), "/qbv");
}
