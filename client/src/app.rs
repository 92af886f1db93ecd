//! Root application component and server-rendered HTML shell.

use leptos::prelude::*;
use leptos_meta::{Link, MetaTags, Title, provide_meta_context};

use crate::pages::portfolio::PortfolioPage;
use crate::state::modal::ModalState;
use crate::state::nav::NavState;
use crate::state::preloader::PreloaderPhase;
use crate::state::scroll::ScrollState;
use crate::state::theme::ThemePreference;
use crate::state::toast::ToastState;
use crate::util::theme_store;

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
            <body data-theme=ThemePreference::default().as_str()>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared page state as context and restores the saved theme.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = RwSignal::new(ThemePreference::default());
    let nav = RwSignal::new(NavState::default());
    let scroll = RwSignal::new(ScrollState::default());
    let preloader = RwSignal::new(PreloaderPhase::default());
    let modal = RwSignal::new(ModalState::default());
    let toast = RwSignal::new(ToastState::default());

    provide_context(theme);
    provide_context(nav);
    provide_context(scroll);
    provide_context(preloader);
    provide_context(modal);
    provide_context(toast);

    // Browser-only setup; runs once after hydration.
    Effect::new(move |_| {
        let saved = theme_store::read_preference();
        theme_store::apply(saved);
        theme.set(saved);
        start_browser_glue(scroll, nav);
    });

    view! {
        <Title text="Portfolio"/>
        <Link rel="stylesheet" href="/css/style.css"/>
        <Link rel="stylesheet" href="https://unpkg.com/boxicons@2.1.4/css/boxicons.min.css"/>
        <PortfolioPage/>
    }
}

/// Page-wide listeners that are not owned by a single component.
fn start_browser_glue(scroll: RwSignal<ScrollState>, nav: RwSignal<NavState>) {
    #[cfg(feature = "hydrate")]
    {
        use crate::util::{dom, scroll_driver, service_worker};

        scroll_driver::install(scroll, nav);
        dom::on_load(service_worker::register);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (scroll, nav);
    }
}
