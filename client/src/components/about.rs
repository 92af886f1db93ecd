//! About section.

use leptos::prelude::*;

use crate::components::image::ImageWithPlaceholder;
use crate::content::ABOUT_IMAGE;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section class="about" id="about">
            <h2 class="heading">"About " <span>"Me"</span></h2>
            <div class="about-img">
                <ImageWithPlaceholder src=ABOUT_IMAGE alt="About" placeholder_class="img-placeholder-about"/>
            </div>
            <div class="about-content">
                <h3>"Computer Engineer & AI/ML Practitioner"</h3>
                <p>
                    "I enjoy turning research ideas into dependable software: training deep \
                     learning models, building data pipelines, and writing the services around them."
                </p>
            </div>
        </section>
    }
}
