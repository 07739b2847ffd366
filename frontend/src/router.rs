use crate::components::{CollapsibleBox, ErrorMessage, Loader, Logo, NavBar};
use crate::config::Config;
use crate::details::components::MovieDetails;
use crate::models::WatchedEntry;
use crate::search::api::use_movie_search;
use crate::search::components::{MovieList, NumResults, SearchBar};
use crate::selection::{Selection, SelectionAction};
use crate::watched::components::{Summary, WatchedList};
use crate::watched::store::{BrowserStorage, WatchedAction, WatchedStore};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Home /> },
        Route::NotFound => html! {
            <div class="min-h-screen flex items-center justify-center bg-gray-900">
                <div class="bg-gray-800 text-gray-100 p-8 rounded-lg shadow-lg text-center">
                    <h1 class="text-2xl font-bold mb-4">{"404 - Page Not Found"}</h1>
                    <Link<Route> to={Route::Home} classes="text-purple-400 hover:underline">
                        {"Go back to search"}
                    </Link<Route>>
                </div>
            </div>
        },
    }
}

#[function_component(Home)]
fn home() -> Html {
    match use_context::<Config>() {
        Some(config) => html! { <PopcornApp {config} /> },
        None => {
            log::error!("Home rendered without a Config in context");
            html! {
                <ErrorMessage error_message={Some("Configuration is missing".to_string())} />
            }
        }
    }
}

/// Adding from the detail panel stores the entry, then closes the panel.
pub fn confirm_add(entry: WatchedEntry) -> (WatchedAction, SelectionAction) {
    (WatchedAction::Add(entry), SelectionAction::Close)
}

#[derive(Properties, PartialEq)]
pub struct PopcornAppProps {
    pub config: Config,
}

#[function_component(PopcornApp)]
pub fn popcorn_app(props: &PopcornAppProps) -> Html {
    let config = &props.config;
    let query = use_state(String::new);
    let selection = use_reducer(Selection::default);
    let watched = use_reducer(|| WatchedStore::load(BrowserStorage));
    let search = use_movie_search(config.clone(), (*query).clone());

    let on_query_change = {
        let query = query.clone();
        Callback::from(move |value: String| query.set(value))
    };

    let on_select = {
        let selection = selection.clone();
        Callback::from(move |imdb_id: String| selection.dispatch(SelectionAction::Toggle(imdb_id)))
    };

    let on_close = {
        let selection = selection.clone();
        Callback::from(move |_: ()| selection.dispatch(SelectionAction::Close))
    };

    let on_add = {
        let watched = watched.clone();
        let selection = selection.clone();
        Callback::from(move |entry: WatchedEntry| {
            log::info!("adding {} to the watched list", entry.imdb_id);
            let (add, close) = confirm_add(entry);
            watched.dispatch(add);
            selection.dispatch(close);
        })
    };

    let on_delete = {
        let watched = watched.clone();
        Callback::from(move |imdb_id: String| {
            log::info!("removing {imdb_id} from the watched list");
            watched.dispatch(WatchedAction::Remove(imdb_id));
        })
    };

    let results_pane = if search.loading {
        html! { <Loader text="Loading..." /> }
    } else if search.error.is_some() {
        html! { <ErrorMessage error_message={search.error.clone()} /> }
    } else {
        html! {
            <MovieList
                movies={search.data.clone()}
                selected_id={selection.selected_id().map(str::to_string)}
                on_select={on_select}
            />
        }
    };

    let side_pane = match &*selection {
        Selection::Selected(imdb_id) => html! {
            <MovieDetails
                key={imdb_id.clone()}
                config={config.clone()}
                imdb_id={imdb_id.clone()}
                watched={watched.get(imdb_id).cloned()}
                on_close={on_close}
                on_add={on_add}
            />
        },
        Selection::Idle => html! {
            <>
                <Summary summary={watched.summarize()} />
                <WatchedList watched={watched.entries().to_vec()} on_delete={on_delete} />
            </>
        },
    };

    html! {
        <div class="min-h-screen bg-gray-900 p-4">
            <NavBar>
                <Logo app_name={config.app_name.clone()} />
                <SearchBar query={(*query).clone()} on_query_change={on_query_change} />
                <NumResults count={search.data.len()} />
            </NavBar>

            <main class="main grid grid-cols-1 md:grid-cols-2 gap-6">
                <CollapsibleBox>{ results_pane }</CollapsibleBox>
                <CollapsibleBox>{ side_pane }</CollapsibleBox>
            </main>
        </div>
    }
}
