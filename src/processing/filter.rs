//! Input filtering.
//!
//! Decides which parsed prefixes enter the set, based on the address family
//! and maximum length options.

use crate::config::FilterConfig;
use crate::error::InvalidPrefix;
use crate::models::Prefix;

/// Parse one input token, truncating host bits when the config allows it.
pub fn parse_token(token: &str, config: &FilterConfig) -> Result<Prefix, InvalidPrefix> {
    if config.truncate {
        Prefix::parse_truncate(token)
    } else {
        token.parse()
    }
}

/// Check a prefix against the family and maximum length filters.
pub fn accepts(prefix: &Prefix, config: &FilterConfig) -> bool {
    if let Some(family) = config.family {
        if prefix.family() != family {
            return false;
        }
    }
    match config.max_length {
        Some(max_length) if prefix.length() > max_length => {
            log::trace!("{prefix} is longer than /{max_length}, discarded");
            false
        }
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Family;

    fn p(s: &str) -> Prefix {
        s.parse().unwrap()
    }

    #[test]
    fn test_accepts_default() {
        let config = FilterConfig::default();
        assert!(accepts(&p("10.0.0.0/8"), &config));
        assert!(accepts(&p("2001:db8::1/128"), &config));
    }

    #[test]
    fn test_accepts_family() {
        let config = FilterConfig {
            family: Some(Family::V6),
            ..Default::default()
        };
        assert!(!accepts(&p("10.0.0.0/8"), &config));
        assert!(accepts(&p("2001:db8::/32"), &config));
    }

    #[test]
    fn test_accepts_max_length() {
        let config = FilterConfig {
            max_length: Some(24),
            ..Default::default()
        };
        assert!(accepts(&p("10.0.0.0/24"), &config));
        assert!(!accepts(&p("10.0.1.0/25"), &config));
        assert!(!accepts(&p("2001:db8::/32"), &config));
    }

    #[test]
    fn test_parse_token() {
        let strict = FilterConfig::default();
        let truncate = FilterConfig {
            truncate: true,
            ..Default::default()
        };
        assert!(parse_token("10.5.5.5/8", &strict).is_err());
        assert_eq!(parse_token("10.5.5.5/8", &truncate).unwrap(), p("10.0.0.0/8"));
        assert!(parse_token("not_a_prefix", &truncate).is_err());
    }
}
