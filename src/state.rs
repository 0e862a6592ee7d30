use crate::fetch::Fetcher;

/// Shared application state passed to all handlers.
/// Holds no per-request data; the fetcher's HTTP client is built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: Fetcher,
}
