//! Terminal front-end: screens, navigation and the event loop.

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod i18n;
pub mod input;
pub mod layout;
pub mod login;
pub mod mvi;
pub mod post_detail;
pub mod post_edit;
pub mod posts;
pub mod render;
pub mod route;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod worker;

pub use app::App;
pub use i18n::Language;
pub use route::Route;
pub use runtime::{run, UiOptions};
