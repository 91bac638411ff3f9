pub mod clipboard;
pub mod logging;
pub mod text;
