//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::controller::GenerationController;
use crate::pages::requests::RequestsPage;
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link
                    rel="stylesheet"
                    href="https://fonts.googleapis.com/icon?family=Material+Icons"
                />
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the single `GenerationController`, provides it and the auth signal
/// as context, and kicks off the first list load. Server and browser both
/// render the first pass signed out.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Signed out until the controller restores the stored token after mount.
    let auth = RwSignal::new(AuthState::default());
    let controller = GenerationController::new(auth);

    provide_context(auth);
    provide_context(controller);
    controller.start();

    view! {
        <Stylesheet id="leptos" href="/pkg/vc-ui.css"/>
        <Title text="Generation requests"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=RequestsPage/>
            </Routes>
        </Router>
    }
}
