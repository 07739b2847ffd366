use crate::models::SearchResult;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub query: String,
    pub on_query_change: Callback<String>,
}

#[derive(Properties, PartialEq)]
pub struct NumResultsProps {
    pub count: usize,
}

#[derive(Properties, PartialEq)]
pub struct MovieListProps {
    pub movies: Vec<SearchResult>,
    pub selected_id: Option<String>,
    pub on_select: Callback<String>,
}

#[derive(Properties, PartialEq)]
pub struct MovieItemProps {
    pub movie: SearchResult,
    pub selected: bool,
    pub on_select: Callback<String>,
}

// Search-as-you-type: every keystroke is emitted, the search hook decides
// whether it is worth a request.
#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let on_input = {
        let on_query_change = props.on_query_change.clone();
        Callback::from(move |e: InputEvent| {
            let input_value = e.target_unchecked_into::<HtmlInputElement>().value();
            on_query_change.emit(input_value);
        })
    };

    html! {
        <input
            type="text"
            class="search flex-grow p-3 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-yellow-500"
            placeholder="Search movies..."
            value={props.query.clone()}
            oninput={on_input}
        />
    }
}

#[function_component(NumResults)]
pub fn num_results(props: &NumResultsProps) -> Html {
    html! {
        <p class="num-results text-white">
            {"Found "}<strong>{props.count}</strong>{" results"}
        </p>
    }
}

#[function_component(MovieItem)]
pub fn movie_item(props: &MovieItemProps) -> Html {
    let onclick = {
        let on_select = props.on_select.clone();
        let imdb_id = props.movie.imdb_id.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(imdb_id.clone()))
    };

    let row_class = if props.selected {
        "flex gap-4 p-3 cursor-pointer bg-gray-600"
    } else {
        "flex gap-4 p-3 cursor-pointer hover:bg-gray-600"
    };

    html! {
        <li class={row_class} {onclick}>
            <img
                class="w-12"
                src={props.movie.poster.clone()}
                alt={format!("{} poster", props.movie.title)}
            />
            <div>
                <h3 class="font-semibold">{&props.movie.title}</h3>
                <p class="text-sm">{"🗓 "}<span>{&props.movie.year}</span></p>
            </div>
        </li>
    }
}

#[function_component(MovieList)]
pub fn movie_list(props: &MovieListProps) -> Html {
    html! {
        <ul class="list list-movies divide-y divide-gray-700">
            { for props.movies.iter().map(|movie| {
                let selected = props.selected_id.as_deref() == Some(movie.imdb_id.as_str());
                html! {
                    <MovieItem
                        key={movie.imdb_id.clone()}
                        movie={movie.clone()}
                        {selected}
                        on_select={props.on_select.clone()}
                    />
                }
            })}
        </ul>
    }
}
