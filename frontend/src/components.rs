use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub children: Html,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    html! {
        <nav class="nav-bar grid grid-cols-3 items-center gap-4 bg-purple-700 px-6 py-4 rounded-lg mb-6">
            { props.children.clone() }
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct LogoProps {
    pub app_name: String,
}

#[function_component(Logo)]
pub fn logo(props: &LogoProps) -> Html {
    html! {
        <div class="logo flex items-center gap-2 text-white">
            <span role="img">{"🍿"}</span>
            <h1 class="text-2xl font-bold">{&props.app_name}</h1>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CollapsibleBoxProps {
    pub children: Html,
}

#[function_component(CollapsibleBox)]
pub fn collapsible_box(props: &CollapsibleBoxProps) -> Html {
    let is_open = use_state(|| true);

    let on_toggle = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(!*is_open))
    };

    html! {
        <div class="box relative bg-gray-800 text-gray-100 rounded-lg overflow-y-auto min-h-[20rem]">
            <button
                class="btn-toggle absolute top-2 right-2 w-6 h-6 rounded-full bg-gray-900"
                onclick={on_toggle}
            >
                { if *is_open { "–" } else { "+" } }
            </button>
            { if *is_open { props.children.clone() } else { html! {} } }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LoaderProps {
    pub text: AttrValue,
}

#[function_component(Loader)]
pub fn loader(props: &LoaderProps) -> Html {
    html! {
        <div class="loader p-8 text-center text-gray-400 uppercase">
            <span>{ props.text.clone() }</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorMessageProps {
    pub error_message: Option<String>,
}

#[function_component(ErrorMessage)]
pub fn error_message(props: &ErrorMessageProps) -> Html {
    if let Some(msg) = &props.error_message {
        html! {
            <p class="error p-8 text-center text-red-400">{ msg }</p>
        }
    } else {
        html! {}
    }
}
