/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for input validation and parsing functions

use jobboard_core::input::*;

#[test]
fn test_port_in_range() {
    let port = port_in_range("8080").unwrap();
    assert_eq!(port, 8080);

    let port = port_in_range("65535").unwrap();
    assert_eq!(port, 65535);

    let port = port_in_range("65536").unwrap_err();
    assert_eq!(port, "port not in range 1-65535");

    let port = port_in_range("0").unwrap_err();
    assert_eq!(port, "port not in range 1-65535");

    let port = port_in_range("http").unwrap_err();
    assert_eq!(port, "`http` is not a port number");
}

#[test]
fn test_greater_than_zero() {
    let num = greater_than_zero::<i64>("168").unwrap();
    assert_eq!(num, 168);

    let num = greater_than_zero::<i64>("0").unwrap_err();
    assert_eq!(num, "`0` is not larger than 0");

    let num = greater_than_zero::<i64>("-1").unwrap_err();
    assert_eq!(num, "`-1` is not larger than 0");

    let num = greater_than_zero::<u32>("a").unwrap_err();
    assert_eq!(num, "`a` is not a valid number");
}

#[test]
fn test_positive_param() {
    assert_eq!(positive_param("limit", None, 50), Ok(50));
    assert_eq!(positive_param("limit", Some(""), 50), Ok(50));
    assert_eq!(positive_param("limit", Some(" 7 "), 50), Ok(7));

    let err = positive_param("page", Some("0"), 1).unwrap_err();
    assert_eq!(err.to_string(), "Invalid page: must be a positive integer");

    assert!(positive_param("page", Some("1.5"), 1).is_err());
}

#[test]
fn test_required_text() {
    assert_eq!(required_text("title", Some("  Dev ")), Ok("Dev".to_string()));

    let err = required_text("title", Some("   ")).unwrap_err();
    assert_eq!(err.to_string(), "title is required");

    assert_eq!(required_text("title", None), Err(InputError::missing("title")));
}

#[test]
fn test_text_or() {
    assert_eq!(text_or(Some(" 90k "), "Not specified"), "90k");
    assert_eq!(text_or(Some(""), "Not specified"), "Not specified");
    assert_eq!(text_or(None, "Our Company"), "Our Company");
}

#[test]
fn test_clean_skills() {
    let skills = clean_skills(vec![
        " rust".to_string(),
        "".to_string(),
        "sql ".to_string(),
    ]);
    assert_eq!(skills, vec!["rust".to_string(), "sql".to_string()]);
}

#[test]
fn test_normalize_email() {
    assert_eq!(normalize_email("  HR@Example.COM "), "hr@example.com");
}

#[test]
fn test_validate_password() {
    assert!(validate_password("secret").is_ok());
    assert!(validate_password(&"x".repeat(128)).is_ok());

    let err = validate_password("short").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid password: must be at least 6 characters long"
    );

    let err = validate_password(&"x".repeat(129)).unwrap_err();
    assert_eq!(err.to_string(), "Invalid password: cannot exceed 128 characters");
}

#[test]
fn test_escape_like() {
    assert_eq!(escape_like("berlin"), "berlin");
    assert_eq!(escape_like("100%"), "100\\%");
    assert_eq!(escape_like("a_b\\c"), "a\\_b\\\\c");
}

#[test]
fn test_load_secret() {
    let path = std::env::temp_dir().join(format!("jobboard-secret-{}", std::process::id()));
    std::fs::write(&path, "  s3cret\n").unwrap();

    let secret = load_secret(path.to_str().unwrap()).unwrap();
    assert_eq!(secret, "s3cret");

    std::fs::remove_file(&path).unwrap();
    assert!(load_secret(path.to_str().unwrap()).is_err());
}
