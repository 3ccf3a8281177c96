//! Host value object - an IP literal or an RFC 1123 style hostname

use std::fmt;
use std::net::IpAddr;

use super::validation::ValidationReason;

/// Maximum total hostname length
const MAX_HOSTNAME_LEN: usize = 253;
/// Maximum length of a single dot-separated label
const MAX_LABEL_LEN: usize = 63;

/// A validated remote host
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Host {
    /// IPv4 or IPv6 literal
    Ip(IpAddr),
    /// DNS hostname
    Name(String),
}

impl Host {
    pub fn new(host: &str) -> Result<Self, ValidationReason> {
        if host.is_empty() {
            return Err(ValidationReason::Empty);
        }

        if let Ok(ip) = host.parse::<IpAddr>() {
            return Ok(Host::Ip(ip));
        }

        if is_valid_hostname(host) {
            return Ok(Host::Name(host.to_string()));
        }

        Err(ValidationReason::InvalidFormat { suggestion: None })
    }

    pub fn is_ipv6(&self) -> bool {
        matches!(self, Host::Ip(IpAddr::V6(_)))
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Host::Ip(ip) => write!(f, "{}", ip),
            Host::Name(name) => f.write_str(name),
        }
    }
}

fn is_valid_hostname(hostname: &str) -> bool {
    if hostname.len() > MAX_HOSTNAME_LEN {
        return false;
    }

    hostname.split('.').all(is_valid_label)
}

fn is_valid_label(label: &str) -> bool {
    if label.is_empty() || label.len() > MAX_LABEL_LEN {
        return false;
    }

    let last = label.len() - 1;
    label.char_indices().all(|(i, c)| {
        c.is_ascii_alphanumeric() || (c == '-' && i != 0 && i != last)
    })
}
