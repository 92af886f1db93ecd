//! Site header: navigation, mobile menu, theme toggle, and scroll progress.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the shared `ScrollState` (active link, sticky flag, progress) that
//! the scroll driver maintains, and owns the in-page anchor behavior used by
//! every `#section` link on the page.

use leptos::prelude::*;

use crate::content::NAV_LINKS;
use crate::state::nav::NavState;
use crate::state::scroll::ScrollState;
use crate::state::theme::ThemePreference;
use crate::util::theme_store;

/// Click handler for an in-page link to section `id`: collapses the menu,
/// marks the link active, and smooth-scrolls to the section.
pub fn anchor_click(id: &'static str) -> impl Fn(leptos::ev::MouseEvent) + Clone + 'static {
    let nav = expect_context::<RwSignal<NavState>>();
    let scroll = expect_context::<RwSignal<ScrollState>>();
    move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        nav.update(NavState::close_menu);
        scroll.update(|s| s.activate(id));
        #[cfg(feature = "hydrate")]
        {
            use crate::state::nav::anchor_scroll_top;
            use crate::util::viewport;
            if let Some(top) = viewport::section_top(id) {
                viewport::smooth_scroll_to(anchor_scroll_top(top));
            }
        }
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    let scroll = expect_context::<RwSignal<ScrollState>>();
    let theme = expect_context::<RwSignal<ThemePreference>>();

    let header_class = move || {
        if scroll.with(|s| s.view.sticky) { "header sticky" } else { "header" }
    };
    let progress_width = move || format!("{}%", scroll.with(|s| s.view.progress));
    let theme_icon = move || format!("bx {}", theme.get().icon_class());
    let on_theme = move |_| {
        let next = theme_store::toggle(theme.get_untracked());
        theme.set(next);
    };
    let on_menu = move |_| nav.update(NavState::toggle_menu);

    let links = NAV_LINKS
        .iter()
        .map(|link| {
            let id = link.id;
            let is_active = move || scroll.with(|s| s.view.active_section.as_deref() == Some(id));
            view! {
                <a href=format!("#{id}") class:active=is_active on:click=anchor_click(id)>
                    {link.label}
                </a>
            }
        })
        .collect_view();

    view! {
        <header class=header_class>
            <div id="scrollProgress" class="scroll-progress" style:width=progress_width></div>
            <a href="#home" class="logo" on:click=anchor_click("home")>"Portfolio."</a>
            <nav class=move || nav.get().navbar_class()>{links}</nav>
            <div class="header-actions">
                <button id="themeToggle" class="theme-toggle" aria-label="Toggle theme" on:click=on_theme>
                    <i id="themeIcon" class=theme_icon></i>
                </button>
                <i id="menu-icon" class=move || nav.get().icon_class() on:click=on_menu></i>
            </div>
        </header>
    }
}
