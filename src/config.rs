use std::time::Duration;

// =============================================================================
// Registry lookup settings
// =============================================================================

/// Per-request timeout for registry lookups (5 seconds)
pub const REQUEST_TIMEOUT: Duration = Duration::from_millis(5_000);

/// Splits a newline-separated package list input.
///
/// Action inputs arrive one package name per line; surrounding whitespace
/// (including `\r` from CRLF input) is trimmed and blank lines are dropped.
pub fn parse_package_list(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
