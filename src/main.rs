use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod copy;
mod interactions;
mod contact {
    pub mod clock;
    pub mod form;
    pub mod pipeline;
    pub mod relay;
}
mod components {
    pub mod contact_form;
    pub mod counter;
    pub mod nav;
    pub mod notification;
    pub mod reveal;
    pub mod scroll_link;
}
mod pages {
    pub mod landing;
}

use components::notification::NotificationHost;
use copy::Locale;
use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/es")]
    Spanish,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    // Keyed by locale so switching language remounts the page with fresh form state.
    match routes {
        Route::Home => {
            info!("Rendering English page");
            html! { <Landing key="en" locale={Locale::En} /> }
        },
        Route::Spanish => {
            info!("Rendering Spanish page");
            html! { <Landing key="es" locale={Locale::Es} /> }
        },
        Route::NotFound => {
            info!("Unknown route, rendering English page");
            html! { <Landing key="en" locale={Locale::En} /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <NotificationHost>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </NotificationHost>
    }
}

fn greet() {
    gloo_console::log!(
        "%cWelcome to Salva Clients!",
        "color: #1B4332; font-size: 24px; font-weight: bold;"
    );
    gloo_console::log!(
        "%cProfessional Veterinary Emergency Services",
        "color: #DC2626; font-size: 14px;"
    );
    gloo_console::log!(
        format!("%cAvailable 24/7 | Call: {}", config::EMERGENCY_PHONE_DISPLAY),
        "color: #2D6A4F; font-size: 12px;"
    );
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    greet();
    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
