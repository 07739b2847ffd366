mod components;
mod config;
mod details;
mod env_variable_utils;
mod error;
mod fetch;
mod logging;
mod models;
mod router;
mod search;
mod selection;
mod utils;
mod watched;

use crate::config::Config;
use crate::env_variable_utils::is_debug_mode;
use crate::router::{switch, Route};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Config,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <ContextProvider<Config> context={props.config.clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<Config>>
    }
}

#[derive(Properties, PartialEq)]
pub struct ConfigErrorPageProps {
    pub message: String,
}

#[function_component(ConfigErrorPage)]
pub fn config_error_page(props: &ConfigErrorPageProps) -> Html {
    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-900">
            <div class="bg-red-100 border border-red-400 text-red-700 px-6 py-4 rounded max-w-xl">
                <h1 class="text-xl font-bold mb-2">{"Configuration error"}</h1>
                <p>{ &props.message }</p>
            </div>
        </div>
    }
}

fn main() {
    logging::init(is_debug_mode());

    match Config::from_env() {
        Ok(config) => {
            log::info!(
                "NAME: \"{}\", API: \"{}\" DEBUG: \"{}\"",
                config.app_name,
                config.api_base_url,
                config.debug
            );
            yew::Renderer::<App>::with_props(AppProps { config }).render();
        }
        Err(e) => {
            log::error!("refusing to start: {e}");
            yew::Renderer::<ConfigErrorPage>::with_props(ConfigErrorPageProps {
                message: e.to_string(),
            })
            .render();
        }
    }
}
