//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (DOM lookups, timers, observers,
//! storage) from component logic. The `hydrate`-only modules compile to
//! nothing on the server and in unit tests.

pub mod debounce;
pub mod dom;
pub mod frame;
pub mod observer;
pub mod particles;
pub mod reveal_driver;
pub mod scroll_driver;
pub mod service_worker;
pub mod theme_store;
pub mod viewport;
