use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_host_env() {
    unsafe {
        std::env::remove_var("FURGLO_BIND");
        std::env::remove_var("PORT");
    }
}

#[test]
fn from_env_defaults() {
    unsafe { clear_host_env() };

    let cfg = HostConfig::from_env().unwrap();
    assert_eq!(cfg, HostConfig::default());
    assert_eq!(cfg.addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn from_env_reads_overrides() {
    unsafe {
        clear_host_env();
        std::env::set_var("FURGLO_BIND", "127.0.0.1");
        std::env::set_var("PORT", "8080");
    }

    let cfg = HostConfig::from_env().unwrap();
    assert_eq!(cfg.addr().to_string(), "127.0.0.1:8080");

    unsafe { clear_host_env() };
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = HostConfig::from_vars(Some("  "), Some("")).unwrap();
    assert_eq!(cfg, HostConfig::default());
}

#[test]
fn ipv6_bind_is_accepted() {
    let cfg = HostConfig::from_vars(Some("::1"), Some("4000")).unwrap();
    assert_eq!(cfg.addr().to_string(), "[::1]:4000");
}

#[test]
fn bad_port_is_rejected() {
    assert_eq!(
        HostConfig::from_vars(None, Some("http")),
        Err(ConfigError::InvalidPort { var: "PORT", value: "http".into() })
    );
    assert!(matches!(HostConfig::from_vars(None, Some("70000")), Err(ConfigError::InvalidPort { .. })));
    assert!(matches!(HostConfig::from_vars(None, Some("-1")), Err(ConfigError::InvalidPort { .. })));
}

#[test]
fn bad_bind_is_rejected() {
    assert_eq!(
        HostConfig::from_vars(Some("localhost"), None),
        Err(ConfigError::InvalidBind { var: "FURGLO_BIND", value: "localhost".into() })
    );
}
