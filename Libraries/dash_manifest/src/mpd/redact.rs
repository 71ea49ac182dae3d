use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

/// Written in place of every redacted address.
pub const REDACTED_ADDRESS: &str = "0.0.0.0";

// `ip=`, `ip%3D` or `ip/` followed by a dotted-quad IPv4 address or a full eight-group IPv6
// address (`:` or `%3A` separated).
static IP_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)(ip(?:=|%3D|/))",
        r"((?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)",
        r"|[0-9a-f]{1,4}(?:(?::|%3A)[0-9a-f]{1,4}){7})",
    ))
    .expect("ip marker pattern is valid")
});

/// Replaces the address after every `ip=` style marker with [`REDACTED_ADDRESS`].
///
/// Only addresses directly behind such a marker are touched, so this is meant for the client
/// address embedded in signed media URLs rather than for arbitrary text.
pub fn redact(text: &str) -> Cow<'_, str> {
    IP_MARKER.replace_all(text, format!("${{1}}{REDACTED_ADDRESS}"))
}
