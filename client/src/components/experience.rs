//! Experience and achievement cards, each collection revealed with its own
//! cascade.

use leptos::prelude::*;

use crate::components::reveal;
use crate::content::{ACHIEVEMENTS, EXPERIENCE};
use crate::state::reveal::RevealGroup;

#[component]
pub fn Experience() -> impl IntoView {
    let section = NodeRef::<leptos::html::Section>::new();
    let jobs = reveal::flags(EXPERIENCE.len());
    let awards = reveal::flags(ACHIEVEMENTS.len());

    #[cfg(feature = "hydrate")]
    reveal::after_preloader(section, move |el| {
        use crate::util::reveal_driver;

        reveal_driver::install(el, ".experience-card", RevealGroup::Experience, move |i| {
            reveal::raise(jobs, i);
        });
        reveal_driver::install(el, ".achievement-card", RevealGroup::Achievements, move |i| {
            reveal::raise(awards, i);
        });
    });

    let job_cards = EXPERIENCE
        .iter()
        .enumerate()
        .map(|(i, job)| {
            let shown = reveal::flag(jobs, i);
            view! {
                <div
                    class="experience-card"
                    data-reveal-index=i.to_string()
                    style=move || RevealGroup::Experience.style(shown())
                >
                    <span class="experience-date">{job.period}</span>
                    <h3>{job.role}</h3>
                    <h4>{job.company}</h4>
                    <p>{job.summary}</p>
                </div>
            }
        })
        .collect_view();

    let award_cards = ACHIEVEMENTS
        .iter()
        .enumerate()
        .map(|(i, award)| {
            let shown = reveal::flag(awards, i);
            view! {
                <div
                    class="achievement-card"
                    data-reveal-index=i.to_string()
                    style=move || RevealGroup::Achievements.style(shown())
                >
                    <i class=award.icon></i>
                    <h3>{award.title}</h3>
                    <p>{award.detail}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="experience" id="experience" node_ref=section>
            <h2 class="heading">"Work " <span>"Experience"</span></h2>
            <div class="experience-grid">{job_cards}</div>
            <h2 class="heading sub-heading">"Achievements"</h2>
            <div class="achievements-grid">{award_cards}</div>
        </section>
    }
}
