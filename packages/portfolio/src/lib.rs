//! The Folio portfolio site.
//!
//! [`register_routes`] binds every page to its view and content loader, and [`install_curtain`]
//! draws the curtain over each transition. [`HeadlessSite`] runs the whole site in memory; on
//! `wasm32` the `web` module boots it against the document.

mod curtain;
mod games;
mod headless;
pub mod logging;
mod routes;
mod services;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use curtain::{
    install_curtain, Curtain, CurtainEvent, MemoryCurtain, CURTAIN_OPEN_DELAY, CURTAIN_SETTLE_DELAY,
};
pub use games::{Game, GameEntry};
pub use headless::HeadlessSite;
pub use routes::{pages, register_routes, view_ids, Content, Page};
pub use services::{LoggingServices, Services};
