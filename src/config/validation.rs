//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject ambiguous checks: exactly one of `url` or `tcp` must be set
//! - Validate value ranges (timeout > 0, ports, status codes)
//! - Convert file-level `CheckConfig` into `CheckSpec`
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: &MonitorConfig → Result<Vec<CheckSpec>, Vec<ValidationError>>
//! - Runs before any probe is executed

use std::time::Duration;
use thiserror::Error;
use url::Url;

use crate::check::{CheckSpec, Constraints, Target};
use crate::config::schema::{CheckConfig, MonitorConfig};

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("webhook_url is required")]
    MissingWebhookUrl,

    #[error("webhook_url {url:?} is invalid: {reason}")]
    InvalidWebhookUrl { url: String, reason: String },

    #[error("timeout_secs must be greater than zero")]
    ZeroTimeout,

    #[error("checks[{index}]: both `url` and `tcp` are set")]
    AmbiguousCheck { index: usize },

    #[error("checks[{index}]: one of `url` or `tcp` is required")]
    EmptyCheck { index: usize },

    #[error("checks[{index}]: url {url:?} is invalid: {reason}")]
    InvalidUrl {
        index: usize,
        url: String,
        reason: String,
    },

    #[error("checks[{index}]: tcp check for {host:?} requires `port`")]
    MissingPort { index: usize, host: String },

    #[error("checks[{index}]: port {port} is out of range 1-65535")]
    InvalidPort { index: usize, port: u32 },

    #[error("checks[{index}]: `port` is set without `tcp`")]
    PortWithoutTcp { index: usize },

    #[error("checks[{index}]: `{field}` only applies to http checks")]
    HttpOnlyField { index: usize, field: &'static str },

    #[error("checks[{index}]: status_code {code} is not a valid HTTP status")]
    InvalidStatusCode { index: usize, code: u32 },
}

/// Validate `config` and build the check list.
pub fn validate_config(config: &MonitorConfig) -> Result<Vec<CheckSpec>, Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.webhook_url.trim().is_empty() {
        errors.push(ValidationError::MissingWebhookUrl);
    } else if let Err(reason) = parse_http_url(&config.webhook_url) {
        errors.push(ValidationError::InvalidWebhookUrl {
            url: config.webhook_url.clone(),
            reason,
        });
    }

    if config.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    let mut specs = Vec::with_capacity(config.checks.len());
    for (index, check) in config.checks.iter().enumerate() {
        match validate_check(index, check) {
            Ok(spec) => specs.push(spec),
            Err(mut check_errors) => errors.append(&mut check_errors),
        }
    }

    if errors.is_empty() {
        Ok(specs)
    } else {
        Err(errors)
    }
}

/// Validate a single check.
pub fn validate_check(
    index: usize,
    check: &CheckConfig,
) -> Result<CheckSpec, Vec<ValidationError>> {
    let mut errors = Vec::new();

    let target = match (check.http_url(), check.tcp_host()) {
        (Some(_), Some(_)) => {
            errors.push(ValidationError::AmbiguousCheck { index });
            None
        }
        (None, None) => {
            errors.push(ValidationError::EmptyCheck { index });
            None
        }
        (Some(url), None) => {
            if check.port.is_some() {
                errors.push(ValidationError::PortWithoutTcp { index });
            }
            match parse_http_url(url) {
                Ok(()) => Some(Target::Http {
                    url: url.to_string(),
                }),
                Err(reason) => {
                    errors.push(ValidationError::InvalidUrl {
                        index,
                        url: url.to_string(),
                        reason,
                    });
                    None
                }
            }
        }
        (None, Some(host)) => {
            if check.status_code.is_some() {
                errors.push(ValidationError::HttpOnlyField {
                    index,
                    field: "status_code",
                });
            }
            if check.match_text.is_some() {
                errors.push(ValidationError::HttpOnlyField {
                    index,
                    field: "match",
                });
            }
            match check.port {
                None => {
                    errors.push(ValidationError::MissingPort {
                        index,
                        host: host.to_string(),
                    });
                    None
                }
                Some(port) => match u16::try_from(port) {
                    Ok(port) if port != 0 => Some(Target::Tcp {
                        host: host.to_string(),
                        port,
                    }),
                    _ => {
                        errors.push(ValidationError::InvalidPort { index, port });
                        None
                    }
                },
            }
        }
    };

    let expected_status = match check.status_code {
        Some(code) if !(100..=599).contains(&code) => {
            errors.push(ValidationError::InvalidStatusCode { index, code });
            None
        }
        // Range checked above.
        Some(code) => Some(code as u16),
        None => None,
    };

    match target {
        Some(target) if errors.is_empty() => Ok(CheckSpec {
            target,
            constraints: Constraints {
                expected_status,
                expected_substring: check.match_text.clone(),
                max_response_time: check.response_time_ms.map(Duration::from_millis),
            },
        }),
        _ => Err(errors),
    }
}

fn parse_http_url(raw: &str) -> Result<(), String> {
    let url = Url::parse(raw).map_err(|e| e.to_string())?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(format!("unsupported scheme {:?}", other)),
    }
    if url.host_str().is_none() {
        return Err("missing host".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config(checks: Vec<CheckConfig>) -> MonitorConfig {
        MonitorConfig {
            webhook_url: "https://hooks.example.com/services/T000/B000/XXX".into(),
            checks,
            ..MonitorConfig::default()
        }
    }

    fn http_check(url: &str) -> CheckConfig {
        CheckConfig {
            url: Some(url.into()),
            ..CheckConfig::default()
        }
    }

    fn tcp_check(host: &str, port: u32) -> CheckConfig {
        CheckConfig {
            tcp: Some(host.into()),
            port: Some(port),
            ..CheckConfig::default()
        }
    }

    #[test]
    fn test_valid_config_builds_specs_in_order() {
        let mut http = http_check("https://example.com/health");
        http.status_code = Some(200);
        http.match_text = Some("ok".into());
        http.response_time_ms = Some(500);

        let specs = validate_config(&base_config(vec![http, tcp_check("db", 5432)])).unwrap();

        assert_eq!(
            specs,
            vec![
                CheckSpec::http("https://example.com/health")
                    .with_status(200)
                    .with_substring("ok")
                    .with_max_response_time(Duration::from_millis(500)),
                CheckSpec::tcp("db", 5432),
            ]
        );
    }

    #[test]
    fn test_ambiguous_and_empty_checks_rejected() {
        let mut both = http_check("http://x");
        both.tcp = Some("db".into());
        both.port = Some(5432);

        let errors = validate_config(&base_config(vec![both, CheckConfig::default()])).unwrap_err();
        assert!(errors.contains(&ValidationError::AmbiguousCheck { index: 0 }));
        assert!(errors.contains(&ValidationError::EmptyCheck { index: 1 }));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = base_config(vec![
            http_check("ftp://example.com"),
            tcp_check("db", 70000),
            CheckConfig {
                tcp: Some("cache".into()),
                ..CheckConfig::default()
            },
        ]);
        config.webhook_url = String::new();
        config.timeout_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 5, "{errors:?}");
        assert_eq!(errors[0], ValidationError::MissingWebhookUrl);
        assert_eq!(errors[1], ValidationError::ZeroTimeout);
        assert!(matches!(errors[2], ValidationError::InvalidUrl { index: 0, .. }));
        assert_eq!(errors[3], ValidationError::InvalidPort { index: 1, port: 70000 });
        assert!(matches!(errors[4], ValidationError::MissingPort { index: 2, .. }));
    }

    #[test]
    fn test_http_only_fields_on_tcp_check() {
        let mut check = tcp_check("db", 5432);
        check.status_code = Some(200);
        check.match_text = Some("x".into());
        check.response_time_ms = Some(100);

        let errors = validate_check(0, &check).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::HttpOnlyField { index: 0, field: "status_code" },
                ValidationError::HttpOnlyField { index: 0, field: "match" },
            ]
        );
    }

    #[test]
    fn test_tcp_response_time_allowed() {
        let mut check = tcp_check("db", 5432);
        check.response_time_ms = Some(100);
        let spec = validate_check(0, &check).unwrap();
        assert_eq!(spec.constraints.max_response_time, Some(Duration::from_millis(100)));
    }

    #[test]
    fn test_port_without_tcp() {
        let mut check = http_check("http://x");
        check.port = Some(80);
        assert_eq!(
            validate_check(3, &check).unwrap_err(),
            vec![ValidationError::PortWithoutTcp { index: 3 }]
        );
    }

    #[test]
    fn test_status_code_range() {
        let mut check = http_check("http://x");
        check.status_code = Some(42);
        assert_eq!(
            validate_check(0, &check).unwrap_err(),
            vec![ValidationError::InvalidStatusCode { index: 0, code: 42 }]
        );
    }

    #[test]
    fn test_zero_port_rejected() {
        assert_eq!(
            validate_check(0, &tcp_check("db", 0)).unwrap_err(),
            vec![ValidationError::InvalidPort { index: 0, port: 0 }]
        );
    }

    #[test]
    fn test_padded_tcp_host_is_trimmed() {
        let spec = validate_check(0, &tcp_check(" db ", 5432)).unwrap();
        assert_eq!(spec, CheckSpec::tcp("db", 5432));
        assert_eq!(spec.resource(), "db:5432");
    }

    #[test]
    fn test_url_kept_verbatim() {
        let spec = validate_check(0, &http_check("http://x")).unwrap();
        assert_eq!(spec.resource(), "http://x");
    }
}
