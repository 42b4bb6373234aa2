use crate::chain::normalize_fragment;
use crate::config::Config;

/// User-supplied expressions, joined in order. Each entry is trimmed like a
/// stage fragment and blank entries are skipped; nothing else is validated.
pub fn build(config: &Config) -> Option<String> {
    let filters: Vec<&str> = config
        .custom_filters
        .iter()
        .map(|filter| normalize_fragment(filter))
        .filter(|filter| !filter.is_empty())
        .collect();

    if filters.is_empty() {
        return None;
    }

    Some(filters.join(","))
}
