use crate::error::ApiError;
use std::rc::Rc;
use web_sys::{AbortController, AbortSignal};
use yew::Reducible;

/// Identifies one request cycle. Tokens only ever grow, so comparing them
/// tells whether a response still belongs to the newest request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

#[derive(Debug, Default)]
pub struct RequestCounter {
    last: u64,
}

impl RequestCounter {
    pub fn issue(&mut self) -> RequestToken {
        self.last += 1;
        RequestToken(self.last)
    }
}

/// Abort handle for an outstanding fetch. Dropping it cancels the request.
pub struct InFlight {
    controller: Option<AbortController>,
}

impl InFlight {
    pub fn start() -> Self {
        let controller = match AbortController::new() {
            Ok(controller) => Some(controller),
            Err(e) => {
                log::warn!("AbortController unavailable, request cannot be cancelled: {e:?}");
                None
            }
        };
        Self { controller }
    }

    pub fn signal(&self) -> Option<AbortSignal> {
        self.controller.as_ref().map(AbortController::signal)
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        if let Some(controller) = &self.controller {
            controller.abort();
        }
    }
}

#[derive(Debug)]
pub enum FetchAction<T> {
    /// A request was issued.
    Begin(RequestToken),
    /// The input no longer warrants a request; drop data and errors.
    Reset(RequestToken),
    Settle(RequestToken, Result<T, ApiError>),
}

/// Loading/error/data triple for a data source where only the most recent
/// request may touch state.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    pub data: T,
    pub loading: bool,
    pub error: Option<String>,
    latest: RequestToken,
}

impl<T: Default> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            data: T::default(),
            loading: false,
            error: None,
            latest: RequestToken::default(),
        }
    }
}

impl<T: Default> FetchState<T> {
    /// State for a source that fetches as soon as it mounts, so the first
    /// render already shows the loader.
    pub fn pending() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }
}

impl<T: Clone + Default + 'static> Reducible for FetchState<T> {
    type Action = FetchAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            FetchAction::Begin(token) => {
                if token < self.latest {
                    return self;
                }
                Rc::new(Self {
                    data: self.data.clone(),
                    loading: true,
                    error: None,
                    latest: token,
                })
            }
            FetchAction::Reset(token) => {
                if token < self.latest {
                    return self;
                }
                Rc::new(Self {
                    latest: token,
                    ..Self::default()
                })
            }
            FetchAction::Settle(token, outcome) => {
                if token != self.latest {
                    log::debug!("dropping response of superseded request {token:?}");
                    return self;
                }
                match outcome {
                    Ok(data) => Rc::new(Self {
                        data,
                        loading: false,
                        error: None,
                        latest: token,
                    }),
                    Err(err) if err.is_cancelled() => Rc::new(Self {
                        data: self.data.clone(),
                        loading: false,
                        error: self.error.clone(),
                        latest: token,
                    }),
                    Err(err) => {
                        match err.status() {
                            Some(status) => {
                                log::warn!("request {token:?} failed with HTTP {status}: {err}")
                            }
                            None => log::warn!("request {token:?} failed: {err}"),
                        }
                        Rc::new(Self {
                            data: T::default(),
                            loading: false,
                            error: Some(err.to_string()),
                            latest: token,
                        })
                    }
                }
            }
        }
    }
}
