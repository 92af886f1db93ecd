//! Page section and chrome components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render one page feature each and read/write the shared
//! signals that `App` provides as context. Browser wiring inside them is
//! `hydrate`-only, so server rendering produces the static markup.

pub mod about;
pub mod contact;
pub mod cursor;
pub mod education;
pub mod experience;
pub mod header;
pub mod home;
pub mod image;
pub mod modal;
pub mod particles;
pub mod preloader;
pub mod projects;
pub mod reveal;
pub mod scroll_top;
pub mod skills;
pub mod toast;
pub mod typing_text;
