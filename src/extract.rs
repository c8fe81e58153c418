use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

static SCHEME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.-]*://").expect("Invalid regex for url schemes")
});

static TWEET_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:twitter\.com|x\.com)/[^/?#\s]+/status/(\d+)")
        .expect("Invalid regex for tweet urls")
});

/// Extract the hostname of a url without a leading `www.`.
///
/// Urls without a scheme are parsed as `https`. Returns an empty string if the
/// url can't be parsed.
pub fn extract_domain(url: &str) -> String {
    let url = url.trim();

    if url.is_empty() {
        return String::new();
    }

    let parsed_url = if SCHEME_REGEX.is_match(url) {
        Url::parse(url)
    } else {
        Url::parse(&format!("https://{url}"))
    };

    match parsed_url {
        Ok(parsed_url) => {
            let host = parsed_url.host_str().unwrap_or_default();
            host.strip_prefix("www.").unwrap_or(host).to_owned()
        }
        Err(err) => {
            trace!("Can't extract domain from '{url}': {err}");
            String::new()
        }
    }
}

/// Get the id of a tweet from a url on twitter.com or x.com.
pub fn get_tweet_id(url: &str) -> Option<String> {
    TWEET_REGEX
        .captures(url)
        .and_then(|captures| captures.get(1))
        .map(|tweet_id| tweet_id.as_str().to_owned())
}

pub fn is_tweet(url: &str) -> bool {
    get_tweet_id(url).is_some()
}
