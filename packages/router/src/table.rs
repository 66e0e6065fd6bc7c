use std::collections::HashMap;

use tracing::debug;

use crate::{
    key::{Parameters, RoutePattern},
    Handler, RouteKey,
};

struct PatternRoute {
    key: RouteKey,
    pattern: RoutePattern,
    handler: Box<dyn Handler>,
}

/// A handler picked for a key, along with how it was picked.
pub(crate) struct Resolved<'a> {
    pub(crate) handler: &'a dyn Handler,
    pub(crate) matched: &'a RouteKey,
    pub(crate) parameters: Parameters,
    pub(crate) fallback: bool,
}

/// The mapping from route keys to handlers.
///
/// Exact keys live in a map. Keys with `:name` segments are kept in registration order and are
/// only consulted when no exact key matches.
#[derive(Default)]
pub(crate) struct RouteTable {
    exact: HashMap<RouteKey, Box<dyn Handler>>,
    patterns: Vec<PatternRoute>,
}

impl RouteTable {
    /// Bind `handler` to `key`, replacing any previous binding.
    pub(crate) fn insert(&mut self, key: RouteKey, handler: Box<dyn Handler>) {
        match RoutePattern::parse(&key) {
            Some(pattern) => {
                if let Some(existing) = self.patterns.iter_mut().find(|r| r.key == key) {
                    debug!("replacing handler for pattern `{key}`");
                    existing.handler = handler;
                } else {
                    self.patterns.push(PatternRoute {
                        key,
                        pattern,
                        handler,
                    });
                }
            }
            None => {
                if self.exact.contains_key(&key) {
                    debug!("replacing handler for `{key}`");
                }
                self.exact.insert(key, handler);
            }
        }
    }

    pub(crate) fn contains(&self, key: &RouteKey) -> bool {
        self.exact.contains_key(key) || self.patterns.iter().any(|r| &r.key == key)
    }

    pub(crate) fn len(&self) -> usize {
        self.exact.len() + self.patterns.len()
    }

    /// Find the handler for `key`: exact match, then patterns, then the `home` handler.
    pub(crate) fn lookup<'a>(&'a self, key: &RouteKey, home: &'a RouteKey) -> Option<Resolved<'a>> {
        if let Some((matched, handler)) = self.exact.get_key_value(key) {
            return Some(Resolved {
                handler: handler.as_ref(),
                matched,
                parameters: Parameters::default(),
                fallback: false,
            });
        }

        for route in &self.patterns {
            if let Some(parameters) = route.pattern.matches(key) {
                return Some(Resolved {
                    handler: route.handler.as_ref(),
                    matched: &route.key,
                    parameters,
                    fallback: false,
                });
            }
        }

        self.exact.get(home).map(|handler| Resolved {
            handler: handler.as_ref(),
            matched: home,
            parameters: Parameters::default(),
            fallback: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{HandlerResult, RouteContext};

    fn noop() -> Box<dyn Handler> {
        Box::new(|_: &RouteContext| -> HandlerResult { Ok(()) })
    }

    #[test]
    fn exact_beats_pattern() {
        let mut table = RouteTable::default();
        table.insert("/obra/:artwork".into(), noop());
        table.insert("/obra/destacada".into(), noop());

        let home = RouteKey::new("/");
        let found = table.lookup(&"/obra/destacada".into(), &home).unwrap();
        assert_eq!(found.matched.as_str(), "/obra/destacada");
        assert!(found.parameters.is_empty());

        let found = table.lookup(&"/obra/12".into(), &home).unwrap();
        assert_eq!(found.matched.as_str(), "/obra/:artwork");
        assert_eq!(found.parameters.get("artwork"), Some("12"));
        assert!(!found.fallback);
    }

    #[test]
    fn fallback_to_home() {
        let mut table = RouteTable::default();
        table.insert("/".into(), noop());

        let home = RouteKey::new("/");
        let found = table.lookup(&"/nowhere".into(), &home).unwrap();
        assert_eq!(found.matched, &home);
        assert!(found.fallback);
    }

    #[test]
    fn nothing_without_home() {
        let mut table = RouteTable::default();
        table.insert("/about".into(), noop());

        assert!(table.lookup(&"/nowhere".into(), &"/".into()).is_none());
    }

    #[test]
    fn reinsert_does_not_grow() {
        let mut table = RouteTable::default();
        table.insert("/about".into(), noop());
        table.insert("#/about".into(), noop());
        table.insert("/obra/:artwork".into(), noop());
        table.insert("/obra/:artwork".into(), noop());

        assert_eq!(table.len(), 2);
        assert!(table.contains(&"/about".into()));
        assert!(table.contains(&"/obra/:artwork".into()));
    }
}
