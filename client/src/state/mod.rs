//! Per-component UI state machines.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module owns the state of one page feature as an explicit value and
//! exposes pure transitions over it. Components hold these in signals and
//! the browser glue drives them; nothing here touches the DOM.

pub mod contact;
pub mod counter;
pub mod cursor;
pub mod filter;
pub mod image;
pub mod modal;
pub mod nav;
pub mod preloader;
pub mod reveal;
pub mod scroll;
pub mod theme;
pub mod toast;
pub mod typing;
