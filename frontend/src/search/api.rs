use crate::config::Config;
use crate::error::ApiError;
use crate::fetch::{FetchAction, FetchState, InFlight, RequestCounter, RequestToken};
use crate::models::{SearchResponse, SearchResult};
use gloo_net::http::Request;
use web_sys::AbortSignal;
use yew::prelude::*;

/// Shorter queries are partial words and never reach the network.
pub const MIN_QUERY_LEN: usize = 3;

pub type SearchState = FetchState<Vec<SearchResult>>;

/// Builds the title-search url, or `None` when the query is too short to send.
pub fn search_url(config: &Config, query: &str) -> Option<String> {
    if query.chars().count() < MIN_QUERY_LEN {
        return None;
    }
    Some(format!(
        "{}?s={}&apikey={}",
        config.api_base_url,
        urlencoding::encode(query),
        urlencoding::encode(&config.api_key)
    ))
}

/// What one query change does to search state, plus the url to request
/// when the query is long enough to send.
pub fn plan_search(
    config: &Config,
    query: &str,
    token: RequestToken,
) -> (FetchAction<Vec<SearchResult>>, Option<String>) {
    match search_url(config, query) {
        Some(url) => (FetchAction::Begin(token), Some(url)),
        None => (FetchAction::Reset(token), None),
    }
}

pub async fn fetch_search(
    url: &str,
    signal: Option<&AbortSignal>,
) -> Result<Vec<SearchResult>, ApiError> {
    let response = Request::get(url).abort_signal(signal).send().await?;

    if !response.ok() {
        return Err(ApiError::Transport {
            status: response.status(),
        });
    }

    response.json::<SearchResponse>().await?.into_results()
}

pub async fn execute_search(
    url: String,
    signal: Option<AbortSignal>,
    token: RequestToken,
    search: UseReducerDispatcher<SearchState>,
) {
    let outcome = fetch_search(&url, signal.as_ref()).await;
    if let Ok(results) = &outcome {
        log::debug!("search {token:?} returned {} results", results.len());
    }
    search.dispatch(FetchAction::Settle(token, outcome));
}

/// Re-runs the title search whenever `query` changes. The previous request
/// is aborted when the query moves on, and its response is ignored even if
/// it still arrives.
#[hook]
pub fn use_movie_search(config: Config, query: String) -> UseReducerHandle<SearchState> {
    let search = use_reducer(SearchState::default);
    let counter = use_mut_ref(RequestCounter::default);

    {
        let dispatcher = search.dispatcher();

        use_effect_with(query, move |query| {
            let token = counter.borrow_mut().issue();
            let (action, url) = plan_search(&config, query, token);
            dispatcher.dispatch(action);

            let in_flight = url.map(|url| {
                log::debug!("search {token:?} for {query:?}");
                let in_flight = InFlight::start();
                let signal = in_flight.signal();
                wasm_bindgen_futures::spawn_local(async move {
                    execute_search(url, signal, token, dispatcher).await;
                });
                in_flight
            });

            move || drop(in_flight)
        });
    }

    search
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn config() -> Config {
        Config::new(Some("secret".into()), None, None, false).unwrap()
    }

    #[test]
    fn short_queries_do_not_produce_a_request() {
        let config = config();
        for query in ["", "i", "in", "é!"] {
            assert_eq!(search_url(&config, query), None, "query {query:?}");
        }
    }

    #[test]
    fn length_is_counted_in_characters() {
        assert!(search_url(&config(), "ééé").is_some());
    }

    #[test]
    fn long_query_begins_exactly_one_request() {
        let mut counter = RequestCounter::default();
        let token = counter.issue();

        let (action, url) = plan_search(&config(), "inception", token);
        assert!(matches!(action, FetchAction::Begin(t) if t == token));
        assert_eq!(
            url.as_deref(),
            Some("https://www.omdbapi.com/?s=inception&apikey=secret")
        );
    }

    #[test]
    fn short_query_resets_without_a_request() {
        let mut counter = RequestCounter::default();
        let token = counter.issue();

        let (action, url) = plan_search(&config(), "in", token);
        assert!(matches!(action, FetchAction::Reset(t) if t == token));
        assert_eq!(url, None);
    }

    #[test]
    fn typing_a_word_requests_only_from_the_third_character() {
        let config = config();
        let mut counter = RequestCounter::default();
        let mut state = Rc::new(SearchState::default());
        let mut requests = Vec::new();

        for query in ["i", "in", "inc", "ince"] {
            let (action, url) = plan_search(&config, query, counter.issue());
            state = state.reduce(action);
            requests.extend(url);
        }

        assert_eq!(requests.len(), 2);
        assert!(requests[0].contains("s=inc&"));
        assert!(requests[1].contains("s=ince&"));
        assert!(state.loading);
    }

    #[test]
    fn erasing_below_the_threshold_clears_results() {
        let config = config();
        let mut counter = RequestCounter::default();

        let first = counter.issue();
        let (action, _) = plan_search(&config, "inception", first);
        let state = Rc::new(SearchState::default()).reduce(action);
        let state = state.reduce(FetchAction::Settle(first, Err(ApiError::NoResults)));
        assert!(state.error.is_some());

        let (action, url) = plan_search(&config, "in", counter.issue());
        let state = state.reduce(action);
        assert_eq!(url, None);
        assert!(state.data.is_empty());
        assert_eq!(state.error, None);
        assert!(!state.loading);
    }

    #[test]
    fn url_carries_encoded_query_and_key() {
        let url = search_url(&config(), "star wars").unwrap();
        assert_eq!(url, "https://www.omdbapi.com/?s=star%20wars&apikey=secret");
    }
}
