#![doc = include_str!("../README.md")]
#![deny(missing_docs)]

mod error;
mod handler;
pub mod hooks;
pub mod key;
pub mod navigation;
mod router;
mod router_cfg;
mod table;
pub mod view;

pub use error::RouterError;
pub use handler::{Handler, HandlerError, HandlerResult, RouteContext};
pub use hooks::{Hook, HookPhase, HookPolicy, Transition};
pub use key::{Parameters, RouteKey};
pub use navigation::Navigator;
pub use router::{Router, RouterState};
pub use router_cfg::RouterConfig;

/// A collection of useful items most applications might need.
pub mod prelude {
    pub use crate::error::RouterError;
    pub use crate::handler::*;
    pub use crate::hooks::{Hook, HookPhase, HookPolicy, Transition};
    pub use crate::key::{Parameters, RouteKey};
    pub use crate::navigation::Navigator;
    pub use crate::router::{Router, RouterState};
    pub use crate::router_cfg::RouterConfig;
    pub use crate::view::*;
}
