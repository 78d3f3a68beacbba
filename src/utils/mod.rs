//! Small shared helpers: timestamps and location handling.

use std::path::PathBuf;

use chrono::Local;

/// Today's date as `YYYYMMDD`, the default version string for written resources.
pub fn iso_8601_date() -> String {
    Local::now().format("%Y%m%d").to_string()
}

/// The current local time as `YYYY-MM-DDTHH:MM:SS`.
pub fn iso_8601_datetime() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Whether a resource location should be fetched over HTTP.
pub fn is_url(location: &str) -> bool {
    let lower = location.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Expand `~` and environment variables in a filesystem location.
pub fn expand_path(location: &str) -> PathBuf {
    shellexpand::full(location)
        .map_or_else(|_| PathBuf::from(location), |p| PathBuf::from(p.as_ref()))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_get_date() {
        let d = iso_8601_date();
        let now = Local::now();
        assert_eq!(d.len(), 8);
        assert_eq!(&d[..4], now.format("%Y").to_string());
        assert_eq!(&d[4..6], now.format("%m").to_string());
        assert!(d.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_datetime_shape() {
        let dt = iso_8601_datetime();
        assert_eq!(dt.len(), 19);
        assert_eq!(&dt[10..11], "T");
    }

    #[test]
    fn test_is_url() {
        assert!(is_url("https://example.com/a.belns"));
        assert!(is_url("HTTP://example.com/a.belns"));
        assert!(!is_url("/tmp/a.belns"));
        assert!(!is_url("ftp.belns"));
    }

    #[test]
    fn test_expand_plain_path() {
        assert_eq!(expand_path("/tmp/a.belns"), PathBuf::from("/tmp/a.belns"));
    }
}
