//! Tests for allow-list checks
//!
//! Each test owns one check type so the process-wide settings do not collide.

use super::*;
use pretty_assertions::assert_eq;
use test_case::test_case;

fn check_system_property(check: CheckType, value: &str) {
    let key = SystemCheck::system_property(check);
    properties::remove(key);
    assert!(!SystemCheck.allowed(check, value), "unset list");

    properties::set(key, format!("{value}/andSome"));
    assert!(!SystemCheck.allowed(check, value), "incorrect value");
    let err = SystemCheck.ensure_allowed(check, value).unwrap_err();
    assert_eq!(err.to_string(), SystemCheck.format_error(check, value));

    properties::set(key, format!("other, {value} ,more"));
    assert!(SystemCheck.allowed(check, value), "listed value");
    SystemCheck.ensure_allowed(check, value).unwrap();

    properties::remove(key);
}

#[test]
fn test_system_check_url() {
    check_system_property(CheckType::Uri, "https://example.com/badURL");
}

#[test]
fn test_system_check_file() {
    check_system_property(CheckType::File, "/tmp/example/badFile");
}

#[test]
fn test_system_check_command() {
    check_system_property(CheckType::Cmd, "/my/badCommand");
}

#[test]
fn test_env_check() {
    let var = EnvCheck::env_var(CheckType::Cmd);
    std::env::remove_var(var);
    assert!(!EnvCheck.allowed(CheckType::Cmd, "/bin/true"));

    std::env::set_var(var, "/bin/false, /bin/true");
    assert!(EnvCheck.allowed(CheckType::Cmd, "/bin/true"));
    assert!(!EnvCheck.allowed(CheckType::Cmd, "/bin/sh"));
    std::env::remove_var(var);
}

#[test_case(CheckType::File, "io.aiven.commons.auth.files")]
#[test_case(CheckType::Uri, "io.aiven.commons.auth.uri")]
#[test_case(CheckType::Cmd, "io.aiven.commons.auth.cmd")]
fn test_format_error(check: CheckType, key: &str) {
    assert_eq!(
        SystemCheck.format_error(check, "value"),
        format!("value is not an allowed {} value. Update system property '{key}' to allow value", check.name())
    );
}

#[test]
fn test_env_format_error_names_variable() {
    assert_eq!(
        EnvCheck.format_error(CheckType::Uri, "http://x"),
        "http://x is not an allowed URI value. Update system property 'io.aiven.commons.envcheck.uri' to allow http://x"
    );
}

#[test]
fn test_check_type_from_str() {
    assert_eq!("uri".parse::<CheckType>().unwrap(), CheckType::Uri);
    assert_eq!("FILE".parse::<CheckType>().unwrap(), CheckType::File);
    assert!("socket".parse::<CheckType>().is_err());
}

#[test]
fn test_define_property() {
    properties::define("connect.commons.test.define = a,b").unwrap();
    assert_eq!(
        properties::get("connect.commons.test.define").as_deref(),
        Some("a,b")
    );
    assert!(properties::define("no-equals").is_err());
    assert!(properties::define("=value").is_err());
    properties::remove("connect.commons.test.define");
}

#[test]
fn test_seed_from_env() {
    let key = "connect.commons.test.seed";
    std::env::set_var(key, "seeded");
    let seeded = properties::seed_from_env([key, "connect.commons.test.unset"]);
    assert_eq!(seeded, 1);
    assert_eq!(properties::get(key).as_deref(), Some("seeded"));
    std::env::remove_var(key);
    properties::remove(key);
}
