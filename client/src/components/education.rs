//! Education timeline.

use leptos::prelude::*;

use crate::components::reveal;
use crate::content::TIMELINE;
use crate::state::reveal::RevealGroup;

#[component]
pub fn Education() -> impl IntoView {
    let section = NodeRef::<leptos::html::Section>::new();
    let revealed = reveal::flags(TIMELINE.len());

    #[cfg(feature = "hydrate")]
    reveal::after_preloader(section, move |el| {
        crate::util::reveal_driver::install(el, ".timeline-item", RevealGroup::Timeline, move |i| {
            reveal::raise(revealed, i);
        });
    });

    let items = TIMELINE
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let shown = reveal::flag(revealed, i);
            view! {
                <div
                    class="timeline-item"
                    data-reveal-index=i.to_string()
                    style=move || RevealGroup::Timeline.style(shown())
                >
                    <div class="timeline-dot"></div>
                    <div class="timeline-content">
                        <span class="timeline-date">{entry.period}</span>
                        <h3>{entry.title}</h3>
                        <h4>{entry.place}</h4>
                        <p>{entry.detail}</p>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="education" id="education" node_ref=section>
            <h2 class="heading">"My " <span>"Education"</span></h2>
            <div class="timeline">{items}</div>
        </section>
    }
}
