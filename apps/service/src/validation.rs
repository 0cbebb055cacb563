use anyhow::{Result, anyhow};
use url::Url;

/// Validation results with specific error messages
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self { is_valid: true, error: None }
    }

    pub fn err(msg: impl Into<String>) -> Self {
        Self { is_valid: false, error: Some(msg.into()) }
    }

    pub fn to_result(&self) -> Result<()> {
        if self.is_valid {
            Ok(())
        } else {
            Err(anyhow!(self.error.clone().unwrap_or_else(|| "Validation failed".to_string())))
        }
    }
}

/// Normalize user input into the URL that gets stored.
///
/// Returns `None` for blank input. Inputs without an explicit `http://` or
/// `https://` scheme get `https://` prepended; nothing else is rewritten.
pub fn normalize_url(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        Some(trimmed.to_string())
    } else {
        Some(format!("https://{trimmed}"))
    }
}

/// Validate a normalized site URL
pub fn validate_site_url(target: &str) -> ValidationResult {
    if target.trim().is_empty() {
        return ValidationResult::err("Target cannot be empty");
    }

    match Url::parse(target) {
        Ok(url) => {
            let scheme = url.scheme();
            if scheme != "http" && scheme != "https" {
                return ValidationResult::err(format!(
                    "Invalid scheme '{scheme}'. Must be http or https"
                ));
            }

            match url.host_str() {
                Some(host) if !host.is_empty() => ValidationResult::ok(),
                _ => ValidationResult::err("URL must have a valid host"),
            }
        }
        Err(e) => ValidationResult::err(format!("Invalid URL: {e}")),
    }
}

/// Validate polling interval
pub fn validate_interval(interval: u64) -> ValidationResult {
    if interval == 0 {
        return ValidationResult::err("Interval must be at least 1 second");
    }

    if interval > 86400 {
        return ValidationResult::err("Interval too long (max 24 hours)");
    }

    ValidationResult::ok()
}

/// Validate per-probe timeout
pub fn validate_timeout(timeout: u64, interval: u64) -> ValidationResult {
    if timeout == 0 {
        return ValidationResult::err("Timeout must be at least 1 second");
    }

    if timeout > interval {
        return ValidationResult::err("Timeout must not exceed interval");
    }

    ValidationResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_injects_scheme() {
        assert_eq!(normalize_url("example.com").as_deref(), Some("https://example.com"));
        assert_eq!(normalize_url("  example.com/status ").as_deref(), Some("https://example.com/status"));
    }

    #[test]
    fn test_normalize_keeps_explicit_scheme() {
        assert_eq!(normalize_url("http://a.test").as_deref(), Some("http://a.test"));
        assert_eq!(normalize_url("HTTPS://Example.com").as_deref(), Some("HTTPS://Example.com"));
    }

    #[test]
    fn test_normalize_blank() {
        assert_eq!(normalize_url(""), None);
        assert_eq!(normalize_url("   \t"), None);
    }

    #[test]
    fn test_site_url_validation() {
        assert!(validate_site_url("https://example.com").is_valid);
        assert!(validate_site_url("http://192.168.1.1:8080/path").is_valid);
        assert!(validate_site_url("http://a.test").is_valid);

        assert!(!validate_site_url("").is_valid);
        assert!(!validate_site_url("ftp://example.com").is_valid);
        assert!(!validate_site_url("https://exa mple.com").is_valid);
        assert!(!validate_site_url("https://").is_valid);
    }

    #[test]
    fn test_interval_validation() {
        assert!(validate_interval(60).is_valid);
        assert!(!validate_interval(0).is_valid);
        assert!(!validate_interval(100_000).is_valid);
    }

    #[test]
    fn test_timeout_validation() {
        assert!(validate_timeout(5, 10).is_valid);
        assert!(validate_timeout(10, 10).is_valid);
        assert!(!validate_timeout(15, 10).is_valid);
        assert!(!validate_timeout(0, 10).is_valid);
        assert!(validate_timeout(1, 1).to_result().is_ok());
    }
}
