use thiserror::Error;
use url::Url;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UrlError {
    #[error("URL is required")]
    Missing,

    #[error("Please enter a valid URL")]
    Invalid,
}

/// Trim the input and prepend `https://` unless it already starts with `http`.
pub fn normalize_url(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.starts_with("http") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

/// Check that an already-normalized URL is something worth fetching:
/// http(s) scheme and a dotted, non-local hostname.
pub fn validate_url(normalized: &str) -> Result<Url, UrlError> {
    let parsed = Url::parse(normalized).map_err(|_| UrlError::Invalid)?;

    match parsed.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlError::Invalid),
    }

    let host = parsed.host_str().unwrap_or_default();
    if host.len() < 2 || !host.contains('.') || host.ends_with('.') || host == "localhost" {
        return Err(UrlError::Invalid);
    }

    Ok(parsed)
}

/// Normalize and validate user input, returning the normalized string that
/// should be fetched and reported back.
pub fn prepare_url(input: &str) -> Result<String, UrlError> {
    if input.trim().is_empty() {
        return Err(UrlError::Missing);
    }
    let normalized = normalize_url(input);
    validate_url(&normalized)?;
    Ok(normalized)
}
