//! Skills grid with staggered reveal and delayed progress bar fill.

use leptos::prelude::*;

use crate::components::reveal;
use crate::content::SKILLS;

#[component]
pub fn Skills() -> impl IntoView {
    let section = NodeRef::<leptos::html::Section>::new();
    let revealed = reveal::flags(SKILLS.len());
    let filled = reveal::flags(SKILLS.len());

    #[cfg(feature = "hydrate")]
    reveal::after_preloader(section, move |el| {
        use crate::state::reveal::{RevealGroup, SKILL_BAR_DELAY_MS};
        use crate::util::{frame, reveal_driver};

        reveal_driver::install(el, ".skill-item", RevealGroup::Skills, move |i| {
            reveal::raise(revealed, i);
            frame::after(SKILL_BAR_DELAY_MS, move || reveal::raise(filled, i));
        });
    });

    let items = SKILLS
        .iter()
        .enumerate()
        .map(|(i, skill)| {
            let progress = skill.progress;
            let is_filled = reveal::flag(filled, i);
            let width = move || if is_filled() { format!("{progress}%") } else { "0%".to_owned() };
            view! {
                <div class="skill-item" class:animate-in=reveal::flag(revealed, i) data-reveal-index=i.to_string()>
                    <i class=skill.icon></i>
                    <div class="skill-info">
                        <div class="skill-header">
                            <span>{skill.name}</span>
                            <span>{format!("{progress}%")}</span>
                        </div>
                        <div class="skill-bar">
                            <div class="skill-progress" data-progress=progress.to_string() style:width=width></div>
                        </div>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="skills" id="skills" node_ref=section>
            <h2 class="heading">"My " <span>"Skills"</span></h2>
            <div class="skills-grid">{items}</div>
        </section>
    }
}
