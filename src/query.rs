use geo_core::Variant;

/// Raw value of `key` in a `?a=b&c=d` query string (no percent-decoding).
pub fn query_param<'a>(search: &'a str, key: &str) -> Option<&'a str> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v)
}

/// Preset picked by the query string; unknown or empty names fall back to the
/// default with a warning.
pub fn variant_from_query(search: &str, key: &str) -> Variant {
    match query_param(search, key) {
        None | Some("") => Variant::default(),
        Some(name) => name.parse().unwrap_or_else(|e| {
            log::warn!("{e}; using {}", Variant::default());
            Variant::default()
        }),
    }
}
