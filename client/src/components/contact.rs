//! Contact section: animated stats plus the validated contact form.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ContactFormState` owns values, per-field statuses, the message counter,
//! and the submit phase. The view is a projection of that state; the only
//! side effects are the relay call and what `finish` asks for afterwards
//! (thank-you modal or a failure alert).

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::components::{modal, reveal};
use crate::content::CONTACT_STATS;
use crate::state::contact::{ContactFormState, Field, MESSAGE_MAX_CHARS};
use crate::state::modal::ModalState;

#[component]
pub fn Contact() -> impl IntoView {
    let section = NodeRef::<leptos::html::Section>::new();
    let texts: Vec<RwSignal<String>> = CONTACT_STATS.iter().map(|_| RwSignal::new("0".to_owned())).collect();

    #[cfg(feature = "hydrate")]
    {
        let texts = texts.clone();
        reveal::after_preloader(section, move |el| {
            use crate::state::counter::CounterAnimation;
            use crate::state::reveal::RevealGroup;
            use crate::util::reveal_driver;

            reveal_driver::install_elements(vec![el.clone()], RevealGroup::ContactStats, move |_| {
                for (stat, text) in CONTACT_STATS.iter().zip(&texts) {
                    reveal_driver::run_counter(CounterAnimation::new(stat.target, stat.duration_ms), *text);
                }
            });
        });
    }
    let stats = CONTACT_STATS
        .iter()
        .zip(texts)
        .map(|(stat, text)| {
            view! {
                <div class="contact-stat">
                    <span class="stat-number" id=stat.id>{move || text.get()}</span>
                    <span class="stat-label">{stat.label}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="contact" id="contact" node_ref=section data-reveal-index="0">
            <h2 class="heading">"Contact " <span>"Me"</span></h2>
            <div class="contact-container">
                <div class="contact-stats">{stats}</div>
                <ContactForm/>
            </div>
        </section>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let form = RwSignal::new(ContactFormState::default());
    let modal_state = expect_context::<RwSignal<ModalState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(payload) = form.try_update(ContactFormState::begin_submit).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::net::relay;
            use crate::state::contact::SubmissionOutcome;

            let outcome = relay::outcome_from(relay::submit(&payload).await);
            if let SubmissionOutcome::Failure(reason) = &outcome {
                leptos::logging::warn!("contact submission failed: {reason}");
            }
            let Some(effects) = form.try_update(|f| f.finish(&outcome)) else {
                return;
            };
            if effects.show_modal {
                modal::open(modal_state);
            }
            if let Some(notice) = effects.notice {
                crate::util::dom::alert(notice);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (payload, modal_state);
        }
    };

    let counter_color = move || {
        if form.with(|f| f.counter.is_warning()) { "var(--error-color)" } else { "var(--text-color)" }
    };
    let sending = move || form.with(ContactFormState::is_sending);

    view! {
        <form id="contactForm" class="contact-form" novalidate on:submit=on_submit>
            <div class="input-box">
                <FieldInput form=form field=Field::Name kind="text" placeholder="Full Name"/>
                <FieldInput form=form field=Field::Email kind="email" placeholder="Email Address"/>
            </div>
            <div class="input-box">
                <FieldInput form=form field=Field::Phone kind="tel" placeholder="Mobile Number"/>
                <FieldInput form=form field=Field::Subject kind="text" placeholder="Email Subject"/>
            </div>
            <div class="textarea-field">
                <textarea
                    id="message"
                    name=Field::Message.name()
                    placeholder="Your Message"
                    maxlength=MESSAGE_MAX_CHARS.to_string()
                    class=move || form.with(|f| f.status(Field::Message).class())
                    prop:value=move || form.with(|f| f.value(Field::Message).to_owned())
                    on:input=move |ev| form.update(|f| f.on_input(Field::Message, event_target_value(&ev)))
                    on:blur=move |_| form.update(|f| f.on_blur(Field::Message))
                ></textarea>
                <span class="error-message">{move || form.with(|f| f.status(Field::Message).message())}</span>
                <div class="char-counter" style:color=counter_color>
                    <span id="charCount">{move || form.with(|f| f.counter.text())}</span>
                    {format!("/{MESSAGE_MAX_CHARS}")}
                </div>
            </div>
            <button type="submit" class="btn submit-btn" disabled=sending>
                <Show
                    when=sending
                    fallback=|| view! { <span>"Send Message"</span><i class="bx bx-send"></i> }
                >
                    <span>"Sending..."</span>
                    <i class="bx bx-loader-alt bx-spin"></i>
                </Show>
            </button>
        </form>
    }
}

/// Single-line input bound to one form field.
#[component]
fn FieldInput(
    form: RwSignal<ContactFormState>,
    field: Field,
    kind: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="input-field">
            <input
                type=kind
                id=field.name()
                name=field.name()
                placeholder=placeholder
                class=move || form.with(|f| f.status(field).class())
                prop:value=move || form.with(|f| f.value(field).to_owned())
                on:input=move |ev| form.update(|f| f.on_input(field, event_target_value(&ev)))
                on:blur=move |_| form.update(|f| f.on_blur(field))
            />
            <span class="error-message">{move || form.with(|f| f.status(field).message())}</span>
        </div>
    }
}
