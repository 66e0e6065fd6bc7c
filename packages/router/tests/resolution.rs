use std::{cell::RefCell, rc::Rc};

use folio_history::{Location, MemoryLocation};
use folio_router::prelude::*;
use pretty_assertions::assert_eq;

type Log = Rc<RefCell<Vec<String>>>;

struct Harness {
    location: Rc<MemoryLocation>,
    router: Router,
    log: Log,
}

impl Harness {
    fn new(config: RouterConfig) -> Self {
        let location = Rc::new(MemoryLocation::default());
        let router = Router::new(location.clone(), config);
        Self {
            location,
            router,
            log: Rc::default(),
        }
    }

    fn route(&mut self, key: &str, name: &'static str) -> &mut Self {
        let log = self.log.clone();
        self.router.register(key, move |cx| {
            log.borrow_mut().push(format!("{name}({})", cx.route()));
            Ok(())
        });
        self
    }

    fn hooks(&mut self) -> &mut Self {
        let before = self.log.clone();
        let after = self.log.clone();
        self.router
            .before_each(move |t| {
                before.borrow_mut().push(format!("before({}, {})", t.to, show(&t.from)));
                Ok(())
            })
            .after_each(move |t| {
                after.borrow_mut().push(format!("after({}, {})", t.to, show(&t.from)));
                Ok(())
            });
        self
    }

    fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.log.borrow_mut())
    }

    fn current(&self) -> Option<&str> {
        self.router.current_route().map(RouteKey::as_str)
    }
}

fn show(key: &Option<RouteKey>) -> String {
    key.as_ref().map_or_else(|| "-".to_string(), ToString::to_string)
}

#[test]
fn last_registration_wins() {
    let mut h = Harness::new(RouterConfig::default());
    h.route("/about", "first").route("/about", "second");

    h.router.resolve_route("/about").unwrap();
    assert_eq!(h.take(), vec!["second(/about)"]);
    assert_eq!(h.router.route_count(), 1);
}

#[test]
fn unknown_keys_fall_back_to_home() {
    let mut h = Harness::new(RouterConfig::default());
    h.route("/", "home").route("/about", "about");

    for key in ["/unknown", "/about/more", "/ABOUT", "about"] {
        h.router.resolve_route(key).unwrap();
        assert_eq!(h.take(), vec![format!("home({key})")]);
    }
}

#[test]
fn hooks_wrap_the_handler() {
    let mut h = Harness::new(RouterConfig::default());
    h.route("/", "home").route("/about", "about").hooks();

    h.router.init();
    h.router.process_pending().unwrap();
    assert_eq!(h.take(), vec!["before(/, -)", "home(/)", "after(/, -)"]);

    h.router.navigate("/about");
    h.router.process_pending().unwrap();
    assert_eq!(
        h.take(),
        vec!["before(/about, /)", "about(/about)", "after(/about, /)"]
    );
}

#[test]
fn renavigating_runs_the_full_cycle() {
    let mut h = Harness::new(RouterConfig::default());
    h.route("/", "home").route("/about", "about").hooks();
    h.router.init();
    h.router.navigate("/about");
    h.router.process_pending().unwrap();
    h.take();

    h.router.navigate("/about");
    assert_eq!(h.router.process_pending().unwrap(), 1);
    assert_eq!(
        h.take(),
        vec!["before(/about, /about)", "about(/about)", "after(/about, /about)"]
    );
}

#[test]
fn home_then_about_scenario() {
    let mut h = Harness::new(RouterConfig::default());
    h.route("/", "A").route("/about", "B").hooks();

    assert_eq!(h.location.current(), "");
    h.router.init();
    h.router.process_pending().unwrap();
    assert_eq!(h.current(), Some("/"));
    assert_eq!(h.take(), vec!["before(/, -)", "A(/)", "after(/, -)"]);

    h.router.navigate("/about");
    h.router.process_pending().unwrap();
    assert_eq!(h.current(), Some("/about"));
    assert_eq!(h.router.previous_route().map(RouteKey::as_str), Some("/"));
    assert_eq!(
        h.take(),
        vec!["before(/about, /)", "B(/about)", "after(/about, /)"]
    );
}

#[test]
fn unknown_key_is_recorded_as_current() {
    let mut h = Harness::new(RouterConfig::default());
    h.route("/", "A").hooks();

    h.router.resolve_route("/unknown").unwrap();
    assert_eq!(h.current(), Some("/unknown"));

    h.router.resolve_route("/").unwrap();
    assert_eq!(h.router.previous_route().map(RouteKey::as_str), Some("/unknown"));
    assert_eq!(
        h.take(),
        vec![
            "before(/unknown, -)",
            "A(/unknown)",
            "after(/unknown, -)",
            "before(/, /unknown)",
            "A(/)",
            "after(/, /unknown)",
        ]
    );
}

#[test]
fn no_home_means_no_handler() {
    let mut h = Harness::new(RouterConfig::default());
    h.route("/about", "about").hooks();

    h.router.resolve_route("/nowhere").unwrap();
    assert_eq!(h.current(), Some("/nowhere"));
    assert_eq!(h.take(), vec!["before(/nowhere, -)", "after(/nowhere, -)"]);
}

#[test]
fn hash_prefixed_keys_are_the_same_route() {
    let mut h = Harness::new(RouterConfig::default());
    h.route("#/archivo", "archivo");

    h.router.navigate("/archivo");
    h.router.process_pending().unwrap();
    h.router.navigate("#/archivo");
    h.router.process_pending().unwrap();

    assert_eq!(h.take(), vec!["archivo(/archivo)", "archivo(/archivo)"]);
    assert!(h.router.has_route("/archivo"));
}

#[test]
fn pattern_routes_capture_parameters() {
    let mut h = Harness::new(RouterConfig::default());
    h.route("/", "home");
    let log = h.log.clone();
    h.router.register("/obra/:artwork", move |cx| {
        log.borrow_mut().push(format!(
            "obra({}, {})",
            cx.parameter("artwork").unwrap_or("?"),
            cx.matched()
        ));
        Ok(())
    });

    h.router.resolve_route("/obra/amy%20winehouse").unwrap();
    h.router.resolve_route("/obra/").unwrap();
    assert_eq!(
        h.take(),
        vec!["obra(amy winehouse, /obra/:artwork)", "home(/obra/)"]
    );
}

#[test]
fn fallback_context() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut router = Router::new(Rc::new(MemoryLocation::default()), RouterConfig::default());
    let s = seen.clone();
    router.register("/", move |cx| {
        s.borrow_mut()
            .push((cx.route().clone(), cx.matched().clone(), cx.is_fallback()));
        Ok(())
    });

    router.resolve_route("/").unwrap();
    router.resolve_route("/lost").unwrap();

    assert_eq!(
        *seen.borrow(),
        vec![
            (RouteKey::new("/"), RouteKey::new("/"), false),
            (RouteKey::new("/lost"), RouteKey::new("/"), true),
        ]
    );
}

#[test]
fn replace_policy_keeps_one_hook_per_phase() {
    let mut h = Harness::new(RouterConfig::default());
    h.route("/", "home");
    let first = h.log.clone();
    let second = h.log.clone();
    h.router
        .before_each(move |_| {
            first.borrow_mut().push("first".into());
            Ok(())
        })
        .before_each(move |_| {
            second.borrow_mut().push("second".into());
            Ok(())
        });

    h.router.resolve_route("/").unwrap();
    assert_eq!(h.take(), vec!["second", "home(/)"]);
}

#[test]
fn chain_policy_runs_every_hook() {
    let mut h = Harness::new(RouterConfig::default().hook_policy(HookPolicy::Chain));
    h.route("/", "home");
    let first = h.log.clone();
    let second = h.log.clone();
    h.router
        .after_each(move |_| {
            first.borrow_mut().push("first".into());
            Ok(())
        })
        .after_each(move |_| {
            second.borrow_mut().push("second".into());
            Ok(())
        });

    h.router.resolve_route("/").unwrap();
    assert_eq!(h.take(), vec!["home(/)", "first", "second"]);

    h.router.clear_hooks();
    h.router.resolve_route("/").unwrap();
    assert_eq!(h.take(), vec!["home(/)"]);
}

#[test]
fn failing_handler_aborts_and_keeps_state() {
    let mut h = Harness::new(RouterConfig::default());
    h.route("/", "home").hooks();
    h.router
        .register("/archivo", |_| Err(anyhow::anyhow!("archive unavailable")));

    h.router.resolve_route("/").unwrap();
    h.take();

    let err = h.router.resolve_route("/archivo").unwrap_err();
    assert!(matches!(err, RouterError::Handler { .. }));
    assert_eq!(err.route().as_str(), "/archivo");
    assert_eq!(
        err.to_string(),
        "handler `/archivo` failed while resolving `/archivo`"
    );
    assert_eq!(
        std::error::Error::source(&err).map(ToString::to_string),
        Some("archive unavailable".to_string())
    );

    // no after hook, no rollback
    assert_eq!(h.take(), vec!["before(/archivo, /)"]);
    assert_eq!(h.current(), Some("/archivo"));
    assert_eq!(h.router.previous_route().map(RouteKey::as_str), Some("/"));
}

#[test]
fn failing_before_hook_skips_the_handler() {
    let mut h = Harness::new(RouterConfig::default());
    h.route("/", "home");
    h.router.before_each(|t| {
        anyhow::ensure!(t.to.as_str() != "/", "curtain jammed");
        Ok(())
    });

    let err = h.router.resolve_route("/").unwrap_err();
    assert!(matches!(
        err,
        RouterError::Hook {
            phase: HookPhase::Before,
            ..
        }
    ));
    assert!(h.take().is_empty());
    assert_eq!(h.current(), Some("/"));
}

#[test]
fn process_pending_stops_at_failure_and_keeps_the_rest_queued() {
    let mut h = Harness::new(RouterConfig::default());
    h.route("/", "home");
    h.router.register("/broken", |cx| {
        cx.navigator().navigate("/");
        Err(anyhow::anyhow!("boom"))
    });

    h.router.navigate("/broken");
    assert!(h.router.process_pending().is_err());
    assert!(h.take().is_empty());

    assert_eq!(h.router.process_pending().unwrap(), 1);
    assert_eq!(h.take(), vec!["home(/)"]);
}

#[test]
fn navigation_from_a_handler_is_queued() {
    let mut h = Harness::new(RouterConfig::default());
    h.route("/destino", "destino").hooks();
    let log = h.log.clone();
    h.router.register("/redirect", move |cx| {
        cx.navigator().navigate("/destino");
        log.borrow_mut().push("redirect".into());
        Ok(())
    });

    h.router.navigate("/redirect");
    assert_eq!(h.router.process_pending().unwrap(), 2);
    assert_eq!(
        h.take(),
        vec![
            "before(/redirect, -)",
            "redirect",
            "after(/redirect, -)",
            "before(/destino, /redirect)",
            "destino(/destino)",
            "after(/destino, /redirect)",
        ]
    );
    assert_eq!(h.location.current(), "/destino");
}
