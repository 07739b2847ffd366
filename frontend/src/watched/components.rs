use crate::models::{WatchedEntry, WatchedSummary};
use crate::utils::{format_average, NOT_AVAILABLE};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SummaryProps {
    pub summary: WatchedSummary,
}

#[derive(Properties, PartialEq)]
pub struct WatchedListProps {
    pub watched: Vec<WatchedEntry>,
    pub on_delete: Callback<String>,
}

#[derive(Properties, PartialEq)]
pub struct WatchedItemProps {
    pub movie: WatchedEntry,
    pub on_delete: Callback<String>,
}

#[function_component(Summary)]
pub fn summary(props: &SummaryProps) -> Html {
    let summary = &props.summary;

    html! {
        <div class="summary p-6 bg-gray-700 rounded-lg shadow-lg">
            <h2 class="uppercase font-semibold mb-2">{"Movies you watched"}</h2>
            <div class="flex gap-6">
                <p>{"#️⃣ "}<span>{ format!("{} movies", summary.count) }</span></p>
                <p>{"⭐️ "}<span>{ format_average(summary.avg_imdb_rating, 2) }</span></p>
                <p>{"🌟 "}<span>{ format_average(summary.avg_user_rating, 2) }</span></p>
                <p>{"⏳ "}<span>{ format!("{} min", summary.avg_runtime.map_or(0.0, f64::round)) }</span></p>
            </div>
        </div>
    }
}

#[function_component(WatchedItem)]
pub fn watched_item(props: &WatchedItemProps) -> Html {
    let movie = &props.movie;

    let on_delete = {
        let on_delete = props.on_delete.clone();
        let imdb_id = movie.imdb_id.clone();
        Callback::from(move |_: MouseEvent| on_delete.emit(imdb_id.clone()))
    };

    html! {
        <li class="flex gap-4 p-3 items-center">
            <img class="w-12" src={movie.poster.clone()} alt={format!("{} poster", movie.title)} />
            <div class="flex-grow">
                <h3 class="font-semibold">{ &movie.title }</h3>
                <div class="flex gap-4 text-sm">
                    <p>{"⭐️ "}<span>{ format_average(movie.imdb_rating, 1) }</span></p>
                    <p>{"🌟 "}<span>{ movie.user_rating.map(|r| r.to_string()).unwrap_or_else(|| NOT_AVAILABLE.to_string()) }</span></p>
                    <p>{"⏳ "}<span>{ movie.runtime.map(|r| format!("{r} min")).unwrap_or_else(|| NOT_AVAILABLE.to_string()) }</span></p>
                </div>
            </div>
            <button
                class="btn-delete w-6 h-6 rounded-full bg-red-600 text-white hover:bg-red-700"
                onclick={on_delete}
            >
                {"×"}
            </button>
        </li>
    }
}

#[function_component(WatchedList)]
pub fn watched_list(props: &WatchedListProps) -> Html {
    html! {
        <ul class="list divide-y divide-gray-700">
            { for props.watched.iter().map(|movie| html! {
                <WatchedItem
                    key={movie.imdb_id.clone()}
                    movie={movie.clone()}
                    on_delete={props.on_delete.clone()}
                />
            })}
        </ul>
    }
}
