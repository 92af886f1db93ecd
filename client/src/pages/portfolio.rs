//! The single portfolio page, assembled from its sections.

use leptos::prelude::*;

use crate::components::about::About;
use crate::components::contact::Contact;
use crate::components::cursor::Cursor;
use crate::components::education::Education;
use crate::components::experience::Experience;
use crate::components::header::{Header, anchor_click};
use crate::components::home::Home;
use crate::components::modal::ThankYouModal;
use crate::components::particles::Particles;
use crate::components::preloader::Preloader;
use crate::components::projects::Projects;
use crate::components::scroll_top::ScrollTop;
use crate::components::skills::Skills;
use crate::components::toast::Toast;

#[component]
pub fn PortfolioPage() -> impl IntoView {
    view! {
        <Preloader/>
        <Cursor/>
        <Particles/>
        <Header/>
        <main>
            <Home/>
            <About/>
            <Education/>
            <Skills/>
            <Experience/>
            <Projects/>
            <Contact/>
        </main>
        <footer class="footer">
            <p>"Built with Rust and Leptos."</p>
            <a href="#home" class="footer-top" on:click=anchor_click("home")>
                <i class="bx bx-up-arrow-alt"></i>
            </a>
        </footer>
        <ScrollTop/>
        <ThankYouModal/>
        <Toast/>
    }
}
