//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_stack::ToastStack;
use crate::config::DashboardConfig;
use crate::net::api::RestApi;
use crate::net::notify::EmailJsNotifier;
use crate::pages::{maintenance::MaintenancePage, units::UnitsPage};
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
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
/// Provides the API client, notifier, auth, and toast contexts and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = DashboardConfig::from_build_env();
    provide_context(RestApi::new(config.api_base));
    provide_context(EmailJsNotifier::new(config.notify));

    // Server render has no browser storage; the stored user is read after hydration.
    let auth = RwSignal::new(AuthState::default());
    let toasts = RwSignal::new(ToastState::default());
    provide_context(auth);
    provide_context(toasts);

    Effect::new(move || {
        auth.set(AuthState::load());
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/renta-dashboard.css"/>
        <Title text="Renta Dashboard"/>

        <Router>
            <nav class="dashboard-nav">
                <a href="/units">"Units"</a>
                <a href="/maintenance">"Maintenance"</a>
            </nav>
            <main class="dashboard-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=UnitsPage/>
                    <Route path=StaticSegment("units") view=UnitsPage/>
                    <Route path=StaticSegment("maintenance") view=MaintenancePage/>
                </Routes>
            </main>
        </Router>
        <ToastStack toasts=toasts/>
    }
}
