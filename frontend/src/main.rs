use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod carousel;
mod components {
    pub mod dock;
    pub mod effects;
    pub mod text_carousel;
}
mod pages {
    pub mod landing;
    pub mod project_wizard;
}

use pages::{
    landing::Landing,
    project_wizard::ProjectPage,
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Landing,
    #[at("/projekti")]
    Project,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Landing => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::Project => {
            info!("Rendering Project wizard");
            html! { <ProjectPage /> }
        },
        Route::NotFound => {
            info!("Unknown route, redirecting to Landing");
            html! { <Redirect<Route> to={Route::Landing} /> }
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
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
