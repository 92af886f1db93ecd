//! Image with a placeholder shown until it loads (and kept if it fails).

use leptos::prelude::*;

use crate::state::image::ImageStatus;

#[component]
pub fn ImageWithPlaceholder(
    src: &'static str,
    alt: &'static str,
    /// Class of the fallback block, e.g. `img-placeholder`.
    placeholder_class: &'static str,
) -> impl IntoView {
    let status = RwSignal::new(ImageStatus::Loading);
    let img_ref = NodeRef::<leptos::html::Img>::new();

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        if let Some(img) = img_ref.get() {
            if status.get_untracked() == ImageStatus::Loading {
                status.set(ImageStatus::at_mount(img.complete(), img.natural_height()));
            }
        }
    });

    let placeholder_display = move || if status.get().placeholder_visible() { "flex" } else { "none" };
    let image_display = move || if status.get().image_visible() { "block" } else { "none" };

    view! {
        <img
            node_ref=img_ref
            src=src
            alt=alt
            style:display=image_display
            on:load=move |_| status.set(ImageStatus::Loaded)
            on:error=move |_| status.set(ImageStatus::Failed)
        />
        <div class=placeholder_class style:display=placeholder_display>
            <i class="bx bx-user"></i>
        </div>
    }
}
