//! Project grid with category filter buttons.
//!
//! DESIGN
//! ======
//! `FilterState` owns every card's phase. A click re-projects all cards
//! from scratch and returns a token; the enter and leave settles scheduled
//! for that token are ignored if another filter was chosen meanwhile.

use leptos::prelude::*;

use crate::content::{FILTERS, PROJECTS};
use crate::state::filter::{FilterSelection, FilterState};

#[component]
pub fn Projects() -> impl IntoView {
    let filter = RwSignal::new(FilterState::new(PROJECTS.len()));

    let select = move |raw: &'static str| {
        let categories: Vec<&str> = PROJECTS.iter().map(|p| p.category).collect();
        let Some(token) = filter.try_update(|f| f.select(FilterSelection::parse(raw), &categories)) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            use crate::state::filter::{ENTER_DELAY_MS, LEAVE_DELAY_MS};
            use crate::util::frame;

            frame::after(ENTER_DELAY_MS, move || {
                filter.try_update(|f| f.settle_entering(token));
            });
            frame::after(LEAVE_DELAY_MS, move || {
                filter.try_update(|f| f.settle_leaving(token));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    };

    let buttons = FILTERS
        .iter()
        .map(|&(value, label)| {
            let is_active = move || filter.with(|f| f.selection.as_str() == value);
            view! {
                <button class="filter-btn" class:active=is_active data-filter=value on:click=move |_| select(value)>
                    {label}
                </button>
            }
        })
        .collect_view();

    let cards = PROJECTS
        .iter()
        .enumerate()
        .map(|(i, project)| {
            let phase = move || filter.with(|f| f.phase(i));
            let tags = project.tags.iter().map(|tag| view! { <span class="tag">{*tag}</span> }).collect_view();
            view! {
                <div
                    class=move || format!("project-card {}", phase().class())
                    data-category=project.category
                    style=move || phase().style()
                >
                    <div class="project-content">
                        <h3>{project.title}</h3>
                        <p>{project.summary}</p>
                        <div class="project-tags">{tags}</div>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="projects" id="projects">
            <h2 class="heading">"My " <span>"Projects"</span></h2>
            <div class="filter-buttons">{buttons}</div>
            <div class="projects-grid">{cards}</div>
        </section>
    }
}
