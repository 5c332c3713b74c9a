use std::collections::HashMap;
use std::env;

use thiserror::Error;
use tracing::warn;

use crate::constants::FooterLink;

pub const DEFAULT_CACHE_MAX_AGE: u64 = 86400;

/// Server settings read from the environment at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// `Cache-Control: max-age` for static assets, in seconds.
    pub cache_max_age: u64,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            cache_max_age: parse_cache_max_age(env::var("APPLE_CACHE_MAX_AGE").ok().as_deref()),
        }
    }
}

pub fn parse_cache_max_age(value: Option<&str>) -> u64 {
    match value.map(str::trim) {
        None | Some("") => DEFAULT_CACHE_MAX_AGE,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            warn!(
                "APPLE_CACHE_MAX_AGE `{}` is not a number of seconds, using {}",
                raw, DEFAULT_CACHE_MAX_AGE
            );
            DEFAULT_CACHE_MAX_AGE
        }),
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FooterLinkError {
    #[error("footer link #{index} has a blank label")]
    BlankLabel { index: usize },

    #[error("footer link #{index} (`{label}`) has a blank link")]
    BlankLink { index: usize, label: String },
}

/// Checks the footer link collection before it is served.
///
/// Repeated labels are only warned about: the footer does not key its list
/// items by label, so they still render correctly.
pub fn validate_footer_links(links: &[FooterLink]) -> Result<(), FooterLinkError> {
    let mut seen: HashMap<&str, usize> = HashMap::new();

    for (index, entry) in links.iter().enumerate() {
        let label = entry.label.trim();
        if label.is_empty() {
            return Err(FooterLinkError::BlankLabel { index });
        }
        if entry.link.trim().is_empty() {
            return Err(FooterLinkError::BlankLink {
                index,
                label: entry.label.clone(),
            });
        }
        match seen.get(label) {
            Some(first) => warn!(
                "Footer label `{}` repeated at #{} (first at #{})",
                label, index, first
            ),
            None => {
                seen.insert(label, index);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FOOTER_LINKS;

    #[test]
    fn test_parse_cache_max_age_default() {
        assert_eq!(parse_cache_max_age(None), DEFAULT_CACHE_MAX_AGE);
        assert_eq!(parse_cache_max_age(Some("")), DEFAULT_CACHE_MAX_AGE);
        assert_eq!(parse_cache_max_age(Some("   ")), DEFAULT_CACHE_MAX_AGE);
    }

    #[test]
    fn test_parse_cache_max_age_valid() {
        assert_eq!(parse_cache_max_age(Some("3600")), 3600);
        assert_eq!(parse_cache_max_age(Some(" 0 ")), 0);
    }

    #[test]
    fn test_parse_cache_max_age_invalid() {
        assert_eq!(parse_cache_max_age(Some("one hour")), DEFAULT_CACHE_MAX_AGE);
        assert_eq!(parse_cache_max_age(Some("-5")), DEFAULT_CACHE_MAX_AGE);
    }

    #[test]
    fn test_default_footer_links_are_valid() {
        assert_eq!(validate_footer_links(&FOOTER_LINKS), Ok(()));
    }

    #[test]
    fn test_validate_empty_collection() {
        assert_eq!(validate_footer_links(&[]), Ok(()));
    }

    #[test]
    fn test_validate_blank_label() {
        let links = vec![
            FooterLink::new("Legal", "/legal"),
            FooterLink::new("  ", "/nowhere"),
        ];
        assert_eq!(
            validate_footer_links(&links),
            Err(FooterLinkError::BlankLabel { index: 1 })
        );
    }

    #[test]
    fn test_validate_blank_link() {
        let links = vec![FooterLink::new("Site Map", "")];
        let err = validate_footer_links(&links).unwrap_err();
        assert_eq!(
            err,
            FooterLinkError::BlankLink {
                index: 0,
                label: "Site Map".to_string()
            }
        );
        assert_eq!(err.to_string(), "footer link #0 (`Site Map`) has a blank link");
    }

    #[test]
    fn test_validate_allows_duplicate_labels() {
        let links = vec![
            FooterLink::new("Legal", "/legal"),
            FooterLink::new("Legal", "/legal/uk"),
        ];
        assert_eq!(validate_footer_links(&links), Ok(()));
    }
}
