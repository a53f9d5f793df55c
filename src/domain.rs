/// Domain extraction for Tab Orbit
use url::Url;

/// Sentinel hostname recorded when a tab's URL cannot name a host.
pub const UNKNOWN_DOMAIN: &str = "unknown-domain";

/// Extract the hostname from a URL string.
///
/// Examples:
/// - https://docs.google.com/x → docs.google.com
/// - https://news.bbc.co.uk/article → news.bbc.co.uk
/// - not-a-url → unknown-domain
/// - about:blank (no host component) → unknown-domain
///
/// A bad URL must never fail ingestion of its tab: the sentinel stands in,
/// the problem is logged, and the record still renders and still matches
/// domain searches.
pub fn extract_domain(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) => host.to_string(),
            None => {
                log::warn!("URL has no host: {:?}", url);
                UNKNOWN_DOMAIN.to_string()
            }
        },
        Err(e) => {
            log::warn!("Invalid URL {:?}: {}", url, e);
            UNKNOWN_DOMAIN.to_string()
        }
    }
}
