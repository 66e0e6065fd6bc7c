//! Lifecycle hooks that run around every route handler.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{HandlerResult, RouteKey};

/// The keys involved in a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// The key being resolved.
    pub to: RouteKey,
    /// The key that was active before, [`None`] on the first resolution.
    pub from: Option<RouteKey>,
}

/// Cross-cutting code that observes every transition.
pub trait Hook {
    /// Run the hook for `transition`.
    fn call(&self, transition: &Transition) -> HandlerResult;
}

impl<F> Hook for F
where
    F: Fn(&Transition) -> HandlerResult,
{
    fn call(&self, transition: &Transition) -> HandlerResult {
        self(transition)
    }
}

/// Which side of the handler a hook runs on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HookPhase {
    /// Before the route handler.
    Before,
    /// After the route handler.
    After,
}

impl fmt::Display for HookPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HookPhase::Before => f.write_str("before"),
            HookPhase::After => f.write_str("after"),
        }
    }
}

/// What registering a second hook in the same phase does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HookPolicy {
    /// Each phase holds one hook; registering another replaces it.
    #[default]
    Replace,
    /// Each phase holds an ordered list; registering another appends to it.
    Chain,
}

pub(crate) struct HookSlot {
    policy: HookPolicy,
    hooks: Vec<Box<dyn Hook>>,
}

impl HookSlot {
    pub(crate) fn new(policy: HookPolicy) -> Self {
        Self {
            policy,
            hooks: Vec::new(),
        }
    }

    pub(crate) fn set(&mut self, hook: Box<dyn Hook>) {
        if self.policy == HookPolicy::Replace {
            self.hooks.clear();
        }
        self.hooks.push(hook);
    }

    pub(crate) fn clear(&mut self) {
        self.hooks.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Run every hook in registration order, stopping at the first failure.
    pub(crate) fn run(&self, transition: &Transition) -> HandlerResult {
        self.hooks.iter().try_for_each(|hook| hook.call(transition))
    }
}
