//! Network layer.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page has no backend of its own; the only outbound request is the
//! contact form submission to a third-party relay.

pub mod relay;
