use crate::components::{ErrorMessage, Loader};
use crate::config::Config;
use crate::details::api::use_movie_detail;
use crate::models::{MovieDetail, WatchedEntry};
use crate::utils::or_not_available;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

pub const MAX_USER_RATING: u8 = 10;

fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

#[derive(Properties, PartialEq)]
pub struct MovieDetailsProps {
    pub config: Config,
    pub imdb_id: String,
    /// The existing entry when this movie is already on the watched list.
    pub watched: Option<WatchedEntry>,
    pub on_close: Callback<()>,
    pub on_add: Callback<WatchedEntry>,
}

#[function_component(MovieDetails)]
pub fn movie_details(props: &MovieDetailsProps) -> Html {
    let config = &props.config;
    let detail = use_movie_detail(config.clone(), props.imdb_id.clone());
    let user_rating = use_state(|| None::<u8>);

    // The window title follows the loaded movie and falls back to the app name.
    {
        let title = detail.data.as_ref().and_then(|movie| movie.title.clone());
        let app_name = config.app_name.clone();
        use_effect_with(title, move |title| {
            if let Some(title) = title {
                set_document_title(title);
            }
            move || set_document_title(&app_name)
        });
    }

    // Escape dismisses the panel.
    use_effect_with(props.on_close.clone(), move |on_close| {
        let on_close = on_close.clone();
        let listener = Closure::<dyn Fn(KeyboardEvent)>::new(move |e: KeyboardEvent| {
            if e.code() == "Escape" {
                on_close.emit(());
            }
        });

        let document = web_sys::window().and_then(|w| w.document());
        if let Some(document) = &document {
            if let Err(e) = document
                .add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())
            {
                log::warn!("could not register Escape handler: {e:?}");
            }
        }

        move || {
            if let Some(document) = document {
                let _ = document.remove_event_listener_with_callback(
                    "keydown",
                    listener.as_ref().unchecked_ref(),
                );
            }
        }
    });

    if detail.loading {
        return html! { <Loader text="Loading movie..." /> };
    }

    let Some(movie) = detail.data.as_ref() else {
        return html! {
            <div class="details p-4">
                <BackButton on_close={props.on_close.clone()} />
                <ErrorMessage error_message={detail.error.clone()} />
            </div>
        };
    };

    let on_rate = {
        let user_rating = user_rating.clone();
        Callback::from(move |rating: u8| user_rating.set(Some(rating)))
    };

    let on_add = {
        let on_add = props.on_add.clone();
        let imdb_id = props.imdb_id.clone();
        let movie = movie.clone();
        let user_rating = user_rating.clone();
        Callback::from(move |_: MouseEvent| {
            on_add.emit(WatchedEntry::from_detail(&imdb_id, &movie, *user_rating));
        })
    };

    html! {
        <div class="details">
            <DetailHeader movie={movie.clone()} on_close={props.on_close.clone()} />
            <section class="p-6 space-y-4">
                {
                    match &props.watched {
                        Some(entry) => html! {
                            <p class="text-center">
                                { match entry.user_rating {
                                    Some(rating) => format!("You rated this movie {rating} ⭐️"),
                                    None => "This movie is on your list".to_string(),
                                }}
                            </p>
                        },
                        None => html! {
                            <div class="rating bg-gray-700 rounded-lg p-4 space-y-3">
                                <RatingPicker rating={*user_rating} on_rate={on_rate} />
                                <button
                                    class="btn-add w-full bg-purple-700 text-white rounded-full py-2 hover:bg-purple-600"
                                    onclick={on_add}
                                >
                                    {"+ Add to list"}
                                </button>
                            </div>
                        },
                    }
                }
                <p><em>{ or_not_available(movie.plot.as_deref()) }</em></p>
                <p>{ format!("Starring {}", or_not_available(movie.actors.as_deref())) }</p>
                <p>{ format!("Directed by {}", or_not_available(movie.director.as_deref())) }</p>
            </section>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct BackButtonProps {
    on_close: Callback<()>,
}

#[function_component(BackButton)]
fn back_button(props: &BackButtonProps) -> Html {
    let onclick = props.on_close.reform(|_: MouseEvent| ());
    html! {
        <button class="btn-back absolute top-2 left-2 w-8 h-8 rounded-full bg-white text-black" {onclick}>
            {"←"}
        </button>
    }
}

#[derive(Properties, PartialEq)]
struct DetailHeaderProps {
    movie: MovieDetail,
    on_close: Callback<()>,
}

#[function_component(DetailHeader)]
fn detail_header(props: &DetailHeaderProps) -> Html {
    let movie = &props.movie;
    let title = or_not_available(movie.title.as_deref());

    html! {
        <header class="relative flex gap-4 bg-gray-700">
            <BackButton on_close={props.on_close.clone()} />
            <img class="w-1/3" src={or_not_available(movie.poster.as_deref()).to_string()} alt={format!("Poster of {title}")} />
            <div class="details-overview py-6 pr-4 space-y-2">
                <h2 class="text-2xl font-semibold">{ title }</h2>
                <p>
                    { format!(
                        "{} • {}",
                        or_not_available(movie.released.as_deref()),
                        or_not_available(movie.runtime.as_deref())
                    )}
                </p>
                <p>{ or_not_available(movie.genre.as_deref()) }</p>
                <p>
                    {"⭐️ "}
                    <span>{ format!("{} IMDb rating", or_not_available(movie.imdb_rating.as_deref())) }</span>
                </p>
            </div>
        </header>
    }
}

#[derive(Properties, PartialEq)]
pub struct RatingPickerProps {
    pub rating: Option<u8>,
    pub on_rate: Callback<u8>,
}

#[function_component(RatingPicker)]
pub fn rating_picker(props: &RatingPickerProps) -> Html {
    let current = props.rating.unwrap_or(0);

    html! {
        <div class="flex items-center gap-1">
            { for (1..=MAX_USER_RATING).map(|star| {
                let onclick = props.on_rate.reform(move |_: MouseEvent| star);
                html! {
                    <button
                        class="text-yellow-400"
                        title={format!("Rate {star}")}
                        {onclick}
                    >
                        { if star <= current { "★" } else { "☆" } }
                    </button>
                }
            })}
            <span class="ml-2 text-yellow-400">
                { props.rating.map(|r| r.to_string()).unwrap_or_default() }
            </span>
        </div>
    }
}
