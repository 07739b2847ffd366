use crate::config::Config;
use crate::error::ApiError;
use crate::fetch::{FetchAction, FetchState, InFlight, RequestCounter, RequestToken};
use crate::models::{DetailResponse, MovieDetail};
use gloo_net::http::Request;
use web_sys::AbortSignal;
use yew::prelude::*;

pub type DetailState = FetchState<Option<MovieDetail>>;

pub fn detail_url(config: &Config, imdb_id: &str) -> String {
    format!(
        "{}?i={}&apikey={}",
        config.api_base_url,
        urlencoding::encode(imdb_id),
        urlencoding::encode(&config.api_key)
    )
}

pub async fn fetch_detail(
    url: &str,
    signal: Option<&AbortSignal>,
) -> Result<MovieDetail, ApiError> {
    let response = Request::get(url).abort_signal(signal).send().await?;

    if !response.ok() {
        return Err(ApiError::Transport {
            status: response.status(),
        });
    }

    response.json::<DetailResponse>().await?.into_detail()
}

pub async fn get_movie_detail(
    url: String,
    signal: Option<AbortSignal>,
    token: RequestToken,
    detail: UseReducerDispatcher<DetailState>,
) {
    let outcome = fetch_detail(&url, signal.as_ref()).await.map(Some);
    detail.dispatch(FetchAction::Settle(token, outcome));
}

/// Fetches full metadata for `imdb_id`, refetching when the id changes.
#[hook]
pub fn use_movie_detail(config: Config, imdb_id: String) -> UseReducerHandle<DetailState> {
    let detail = use_reducer(DetailState::pending);
    let counter = use_mut_ref(RequestCounter::default);

    {
        let dispatcher = detail.dispatcher();

        use_effect_with(imdb_id, move |imdb_id| {
            let token = counter.borrow_mut().issue();
            log::debug!("detail {token:?} for {imdb_id}");

            let in_flight = InFlight::start();
            let signal = in_flight.signal();
            let url = detail_url(&config, imdb_id);
            dispatcher.dispatch(FetchAction::Begin(token));
            wasm_bindgen_futures::spawn_local(async move {
                get_movie_detail(url, signal, token, dispatcher).await;
            });

            move || drop(in_flight)
        });
    }

    detail
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_opens_in_loading_state() {
        let state = DetailState::pending();
        assert!(state.loading);
        assert_eq!(state.data, None);
        assert_eq!(state.error, None);
    }

    #[test]
    fn url_targets_lookup_by_id() {
        let config = Config::new(Some("secret".into()), None, None, false).unwrap();
        assert_eq!(
            detail_url(&config, "tt1375666"),
            "https://www.omdbapi.com/?i=tt1375666&apikey=secret"
        );
    }
}
