//! Hero section: parallax background, profile image, typed role, stats, and
//! calls to action.

use leptos::prelude::*;

use crate::components::header::anchor_click;
use crate::components::image::ImageWithPlaceholder;
#[cfg(feature = "hydrate")]
use crate::components::reveal;
use crate::components::toast::DownloadCv;
use crate::components::typing_text::TypingText;
use crate::content::{HOME_STATS, PROFILE_IMAGE};
use crate::state::scroll::ScrollState;

#[component]
pub fn Home() -> impl IntoView {
    let scroll = expect_context::<RwSignal<ScrollState>>();
    let section = NodeRef::<leptos::html::Section>::new();
    let texts: Vec<RwSignal<String>> = HOME_STATS.iter().map(|_| RwSignal::new("0".to_owned())).collect();

    #[cfg(feature = "hydrate")]
    {
        let texts = texts.clone();
        reveal::after_preloader(section, move |el| {
            use crate::content::HOME_STAT_DURATION_MS;
            use crate::state::counter::{CounterAnimation, parse_target};
            use crate::state::reveal::RevealGroup;
            use crate::util::reveal_driver;

            reveal_driver::install(el, ".stat-number", RevealGroup::HomeStats, move |i| {
                let (Some(stat), Some(text)) = (HOME_STATS.get(i), texts.get(i)) else {
                    return;
                };
                if let Some(target) = parse_target(stat.target) {
                    reveal_driver::run_counter(CounterAnimation::new(target, HOME_STAT_DURATION_MS), *text);
                }
            });
        });
    }

    let parallax = move || format!("translateY({}px)", scroll.with(|s| s.view.parallax_offset));

    let stats = HOME_STATS
        .iter()
        .zip(texts)
        .enumerate()
        .map(|(i, (stat, text))| {
            view! {
                <div class="stat-item">
                    <span class="stat-number" data-target=stat.target data-reveal-index=i.to_string()>
                        {move || text.get()}
                    </span>
                    <span class="stat-label">{stat.label}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="home show-animate" id="home" node_ref=section>
            <div class="bg-animation" style:transform=parallax></div>
            <div class="home-content">
                <h1>"Hi, I'm " <span>"Folio"</span></h1>
                <TypingText/>
                <p>
                    "Engineer working across machine learning, deep learning, and software \
                     development. I build models and the systems that ship them."
                </p>
                <div class="home-stats">{stats}</div>
                <div class="btn-box">
                    <a href="#contact" class="btn" on:click=anchor_click("contact")>"Hire Me"</a>
                    <DownloadCv/>
                </div>
                <div class="social-icons">
                    <a href="https://github.com/" target="_blank" rel="noopener"><i class="bx bxl-github"></i></a>
                    <a href="https://www.linkedin.com/" target="_blank" rel="noopener"><i class="bx bxl-linkedin"></i></a>
                </div>
            </div>
            <div class="img-box">
                <ImageWithPlaceholder src=PROFILE_IMAGE alt="Profile" placeholder_class="img-placeholder"/>
            </div>
        </section>
    }
}
