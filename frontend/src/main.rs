use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod anchors;
mod animation;
mod audience;
mod config;
mod debounce;
mod dom;
mod feed;
mod preference;
mod scroll;
mod tracking;
mod components {
    pub mod audience_slider;
    pub mod bluesky_feed;
    pub mod book;
    pub mod sticky_nav;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="not-found">
                    <h1>{"Nothing here"}</h1>
                    <Link<Route> to={Route::Home} classes="not-found-link">
                        {"Back to vibe2lead"}
                    </Link<Route>>
                </div>
            }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(err) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(format!("error initializing log: {}", err));
    }

    info!("Starting vibe2lead frontend");
    yew::Renderer::<App>::new().render();
}
