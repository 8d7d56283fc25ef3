//! Link analyzer - heuristic red-flag check for links received by chat or SMS
//!
//! This is a teaching heuristic, not protection: unlisted malicious domains pass
//! as low risk and legitimate brand-adjacent domains may be flagged. The tables
//! below are illustrative examples.

use regex::Regex;
use thiserror::Error;
use url::{ParseError, Url};

use crate::core::models::{LinkAssessment, LinkVerdict, RiskLevel, SIGNAL_RULES, Signal};

/// Known link-shortener domains
pub const SHORTENERS: [&str; 7] =
    ["bit.ly", "tinyurl.com", "rb.gy", "t.co", "cutt.ly", "is.gd", "ow.ly"];

/// Trusted brands commonly imitated with a hyphenated suffix
pub const BRANDS: [&str; 5] = ["whatsapp", "banco", "bancolombia", "nequi", "udboyaca"];

/// Hosts known to be used in campaigns
pub const DENYLIST: [&str; 5] = [
    "whatsap-support.com",
    "whatsapp-help-secure.com",
    "bank-seguro.co",
    "udboyaca.soporte.link",
    "xn--whtspp-0wa.com",
];

/// Errors found while validating the signal tables
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    /// A table entry was empty
    #[error("empty entry in {table} table")]
    Empty {
        /// Table name
        table: &'static str,
    },

    /// A host entry is not a plain lowercase hostname
    #[error("invalid host {host:?} in {table} table")]
    InvalidHost {
        /// Table name
        table: &'static str,
        /// Offending entry
        host: String,
    },

    /// The brand pattern did not compile
    #[error("invalid brand pattern: {0}")]
    Pattern(String),
}

/// Signal tables the analyzer is built from
#[derive(Debug, Clone)]
pub struct SignalTables {
    /// Link-shortener domains
    pub shorteners: Vec<String>,
    /// Brand names
    pub brands: Vec<String>,
    /// Exact-match denylist
    pub denylist: Vec<String>,
}

impl Default for SignalTables {
    fn default() -> Self {
        Self {
            shorteners: SHORTENERS.iter().map(ToString::to_string).collect(),
            brands: BRANDS.iter().map(ToString::to_string).collect(),
            denylist: DENYLIST.iter().map(ToString::to_string).collect(),
        }
    }
}

impl SignalTables {
    /// Append extra hosts (e.g. from configuration)
    ///
    /// Entries are trimmed and lowercased. Any entry that is still not a plain
    /// hostname is logged and skipped, so the result always builds an analyzer.
    #[must_use]
    pub fn extend(mut self, shorteners: &[String], denylist: &[String]) -> Self {
        append_hosts("shortener", &mut self.shorteners, shorteners);
        append_hosts("denylist", &mut self.denylist, denylist);
        self
    }
}

fn append_hosts(table: &'static str, hosts: &mut Vec<String>, extra: &[String]) {
    for entry in extra {
        let host = entry.trim().to_lowercase();
        match check_host(table, &host) {
            Ok(()) => hosts.push(host),
            Err(e) => log::warn!("skipping configured host: {e}"),
        }
    }
}

/// Compiled, validated link analyzer
#[derive(Debug, Clone)]
pub struct LinkAnalyzer {
    shorteners: Vec<String>,
    denylist: Vec<String>,
    brand_pattern: Regex,
    ipv4: Regex,
}

impl LinkAnalyzer {
    /// Validate the tables and compile the patterns
    pub fn new(tables: &SignalTables) -> Result<Self, TableError> {
        validate_hosts("shortener", &tables.shorteners)?;
        validate_hosts("denylist", &tables.denylist)?;

        if tables.brands.iter().any(|b| b.trim().is_empty()) {
            return Err(TableError::Empty { table: "brand" });
        }
        let alternation =
            tables.brands.iter().map(|b| regex::escape(b.trim())).collect::<Vec<_>>().join("|");
        let brand_pattern = Regex::new(&format!("(?:{alternation})-.+"))
            .map_err(|e| TableError::Pattern(e.to_string()))?;

        let ipv4 = Regex::new(r"^(\d{1,3}\.){3}\d{1,3}$")
            .map_err(|e| TableError::Pattern(e.to_string()))?;

        log::debug!(
            "link analyzer ready: {} shorteners, {} brands, {} denylisted hosts",
            tables.shorteners.len(),
            tables.brands.len(),
            tables.denylist.len()
        );

        Ok(Self {
            shorteners: tables.shorteners.clone(),
            denylist: tables.denylist.clone(),
            brand_pattern,
            ipv4,
        })
    }

    /// Analyze a candidate link
    ///
    /// Inputs without a scheme are read as `https://`, as is `host.tld:port`,
    /// which would otherwise parse as a scheme named after the host. Anything
    /// that does not parse to an absolute URL with a host (`mailto:` included)
    /// is reported as invalid and never classified.
    #[must_use]
    pub fn analyze(&self, input: &str) -> LinkVerdict {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return LinkVerdict::Invalid {
                input: input.to_string(),
            };
        }

        let parsed = match Url::parse(trimmed) {
            Ok(url) if url.has_host() || !url.scheme().contains('.') => Ok(url),
            Ok(_) | Err(ParseError::RelativeUrlWithoutBase) => {
                Url::parse(&format!("https://{trimmed}"))
            },
            Err(e) => Err(e),
        };

        let parsed = match parsed {
            Ok(url) => url,
            Err(e) => {
                log::debug!("rejected link {trimmed:?}: {e}");
                return LinkVerdict::Invalid {
                    input: input.to_string(),
                };
            },
        };

        let Some(host) = parsed.host_str().filter(|h| !h.is_empty()).map(str::to_lowercase) else {
            log::debug!("rejected link {trimmed:?}: no host");
            return LinkVerdict::Invalid {
                input: input.to_string(),
            };
        };

        let signals: Vec<Signal> =
            SIGNAL_RULES.iter().map(|r| r.signal).filter(|s| self.fires(*s, &host)).collect();
        let risk = signals.iter().map(|s| s.severity()).max().unwrap_or(RiskLevel::Low);

        log::debug!("link {host}: risk={risk} signals={signals:?}");

        LinkVerdict::Assessed(LinkAssessment {
            input: input.to_string(),
            url: parsed.to_string(),
            host,
            signals,
            risk,
        })
    }

    fn fires(&self, signal: Signal, host: &str) -> bool {
        match signal {
            Signal::Denylisted => self.denylist.iter().any(|d| d == host),
            Signal::BrandImpersonation => self.brand_pattern.is_match(host),
            Signal::IpLiteral => self.ipv4.is_match(host),
            // Label boundary: `go.bit.ly` matches `bit.ly`, `xbit.ly` and
            // `microsoft.co` (for `t.co`) do not.
            Signal::Shortener => self.shorteners.iter().any(|d| {
                host == d || host.strip_suffix(d.as_str()).is_some_and(|rest| rest.ends_with('.'))
            }),
            Signal::Punycode => host.split('.').any(|label| label.starts_with("xn--")),
        }
    }
}

fn validate_hosts(table: &'static str, hosts: &[String]) -> Result<(), TableError> {
    hosts.iter().try_for_each(|host| check_host(table, host))
}

fn check_host(table: &'static str, host: &str) -> Result<(), TableError> {
    if host.is_empty() {
        return Err(TableError::Empty { table });
    }
    let valid = host
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '.' || c == '-')
        && !host.starts_with('.')
        && !host.ends_with('.')
        && host.contains('.');
    if valid {
        Ok(())
    } else {
        Err(TableError::InvalidHost {
            table,
            host: host.to_string(),
        })
    }
}
