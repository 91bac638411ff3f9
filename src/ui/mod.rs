//! Terminal UI layer for the help assistant.
//!
//! - [`chat_loop`]: terminal setup and the event loop driving [`crate::core::app::App`].
//! - [`renderer`] and [`layout`]: view composition and hit-testing geometry.
//! - [`theme`]: color/style policy.

pub mod chat_loop;
pub mod layout;
pub mod renderer;
pub mod theme;
