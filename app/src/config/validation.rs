//! Setting value validation.

use regex::Regex;
use std::sync::LazyLock;

static RE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._:\-]{1,64}$").unwrap());

/// Validate a setting value. Returns `Ok(())` if valid, or an error message.
pub fn validate_setting(key: &str, value: &str) -> Result<(), String> {
    match key {
        "PARADA_APP_NAME" | "PARADA_STORE_NAME" => {
            if value.trim().is_empty() || value.len() > 120 {
                return Err("must be 1-120 characters".into());
            }
        }
        "PARADA_NOTIFICATION_TAG" => {
            if !RE_TAG.is_match(value) {
                return Err("tag must be 1-64 characters of [A-Za-z0-9._:-]".into());
            }
        }
        "PARADA_ROOT_URL" => {
            if !value.starts_with('/') {
                return Err("must be an absolute path starting with '/'".into());
            }
        }
        "PARADA_SCANNER_FPS" => validate_int_range(value, 1, 60)?,
        "PARADA_SCANNER_QRBOX" => validate_int_range(value, 50, 1000)?,
        "PARADA_SCANNER_REMEMBER_CAMERA" => {
            if value != "true" && value != "false" {
                return Err("must be 'true' or 'false'".into());
            }
        }
        _ => {}
    }
    Ok(())
}

fn validate_int_range(value: &str, min: i32, max: i32) -> Result<(), String> {
    let v: i32 = value.parse().map_err(|_| "must be an integer")?;
    if v < min || v > max {
        return Err(format!("must be between {min} and {max}"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_format() {
        assert!(validate_setting("PARADA_NOTIFICATION_TAG", "order-updates").is_ok());
        assert!(validate_setting("PARADA_NOTIFICATION_TAG", "").is_err());
        assert!(validate_setting("PARADA_NOTIFICATION_TAG", "has space").is_err());
    }

    #[test]
    fn test_root_url_must_be_absolute() {
        assert!(validate_setting("PARADA_ROOT_URL", "/").is_ok());
        assert!(validate_setting("PARADA_ROOT_URL", "/pedidos").is_ok());
        assert!(validate_setting("PARADA_ROOT_URL", "pedidos").is_err());
    }

    #[test]
    fn test_int_ranges() {
        assert!(validate_setting("PARADA_SCANNER_FPS", "10").is_ok());
        assert_eq!(
            validate_setting("PARADA_SCANNER_FPS", "0").unwrap_err(),
            "must be between 1 and 60"
        );
        assert_eq!(
            validate_setting("PARADA_SCANNER_QRBOX", "big").unwrap_err(),
            "must be an integer"
        );
    }

    #[test]
    fn test_unknown_keys_pass() {
        assert!(validate_setting("SOMETHING_ELSE", "").is_ok());
    }
}
