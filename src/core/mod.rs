pub mod app;
pub mod config;
pub mod message;
pub mod quick_action;
pub mod responses;
pub mod timing;
pub mod toast;
pub mod widget;
