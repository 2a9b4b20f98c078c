//! Single-shot GET hook used by the detail page

use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

/// How one request ended
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    Success(T),
    /// The server answered with a non-2xx status
    Status(u16),
    /// Network or decode failure
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    pub result: Option<T>,
    pub error: String,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            result: None,
            error: String::new(),
        }
    }
}

impl<T> FetchState<T> {
    /// Only HTTP status failures reach the UI; the rest is logged and dropped.
    pub fn apply(&mut self, outcome: FetchOutcome<T>) {
        match outcome {
            FetchOutcome::Success(body) => self.result = Some(body),
            FetchOutcome::Status(status) => self.error = status_message(status),
            FetchOutcome::Failed(reason) => {
                log::warn!("Fetch failed: {}", reason);
            }
        }
    }
}

pub fn status_message(status: u16) -> String {
    format!("Unexpected error from the server: {}", status)
}

pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> FetchOutcome<T> {
    let response = match Request::get(url).send().await {
        Ok(r) => r,
        Err(e) => return FetchOutcome::Failed(format!("Request failed: {}", e)),
    };

    if !response.ok() {
        return FetchOutcome::Status(response.status());
    }

    match response.json::<T>().await {
        Ok(body) => FetchOutcome::Success(body),
        Err(e) => FetchOutcome::Failed(format!("Failed to parse response: {}", e)),
    }
}

/// Handle returned by [`use_get`]
#[derive(Clone)]
pub struct UseGet<T: Send + Sync + 'static> {
    url: String,
    state: RwSignal<FetchState<T>>,
}

impl<T> UseGet<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    /// Fire the GET. Nothing is cancelled; the last response to arrive wins.
    pub fn request(&self) {
        let url = self.url.clone();
        let state = self.state;
        spawn_local(async move {
            let outcome = fetch_json::<T>(&url).await;
            state.update(|s| s.apply(outcome));
        });
    }

    pub fn result(&self) -> Signal<Option<T>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.result.clone()))
    }

    pub fn error(&self) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.error.clone()))
    }
}

/// GET hook bound to a fixed URL
pub fn use_get<T>(url: impl Into<String>) -> UseGet<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    UseGet {
        url: url.into(),
        state: RwSignal::new(FetchState::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_sets_result() {
        let mut state = FetchState::<u32>::default();
        state.apply(FetchOutcome::Success(7));
        assert_eq!(state.result, Some(7));
        assert!(state.error.is_empty());
    }

    #[test]
    fn test_status_sets_error_only() {
        let mut state = FetchState::<u32>::default();
        state.apply(FetchOutcome::Status(404));
        assert_eq!(state.result, None);
        assert_eq!(state.error, "Unexpected error from the server: 404");
        assert!(state.error.contains("404"));
    }

    #[test]
    fn test_failure_leaves_state_untouched() {
        let mut state = FetchState::<u32>::default();
        state.apply(FetchOutcome::Failed("connection refused".into()));
        assert_eq!(state, FetchState::default());
    }

    #[test]
    fn test_last_outcome_wins() {
        let mut state = FetchState::<u32>::default();
        state.apply(FetchOutcome::Success(1));
        state.apply(FetchOutcome::Success(2));
        assert_eq!(state.result, Some(2));
    }
}
