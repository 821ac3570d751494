use yew::prelude::*;
use log::info;

mod config;
mod content;
mod counter;
mod frame;
mod motion;
mod viewport;
mod components {
    pub mod animated_counter;
    pub mod particles;
    pub mod reveal;
}
mod pages {
    pub mod about;
}

use pages::about::AboutPage;


#[function_component]
fn App() -> Html {
    info!("Rendering About page");
    html! {
        <AboutPage />
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
