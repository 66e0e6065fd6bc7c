use std::rc::Rc;

use folio_history::MemoryLocation;
use folio_router::prelude::*;
use pretty_assertions::assert_eq;

const VIEWS: [&str; 4] = ["view-home", "view-about", "view-archivo", "view-obra"];

fn site() -> (Router, MemoryViewHost, ManualScheduler) {
    let host = MemoryViewHost::new(VIEWS);
    let scheduler = ManualScheduler::default();
    let stage = ViewStage::new(host.clone(), scheduler.clone());
    let mut router = Router::new(Rc::new(MemoryLocation::default()), RouterConfig::default());

    for (key, view) in [
        ("/", "view-home"),
        ("/about", "view-about"),
        ("/archivo", "view-archivo"),
        ("/obra/:artwork", "view-obra"),
    ] {
        let stage = stage.clone();
        router.register(key, move |_| {
            stage.show_view(view);
            Ok(())
        });
    }

    let stage = stage.clone();
    router.register("/perdido", move |_| {
        stage.show_view("view-perdido");
        Ok(())
    });

    (router, host, scheduler)
}

#[test]
fn exactly_one_view_after_each_transition() {
    let (mut router, host, scheduler) = site();
    router.init();
    router.process_pending().unwrap();

    for target in ["/about", "/archivo", "/obra/12", "/nada", "/about"] {
        router.navigate(target);
        router.process_pending().unwrap();
        scheduler.advance(DEFAULT_FADE_DELAY);

        assert_eq!(host.active_ids().len(), 1, "after {target}");
        assert_eq!(host.active_ids(), host.displayed_ids(), "after {target}");
    }
    assert_eq!(host.active_ids(), vec!["view-about"]);
}

#[test]
fn rapid_navigation_leaves_the_last_view() {
    let (mut router, host, scheduler) = site();
    router.init();
    router.process_pending().unwrap();

    router.navigate("/about");
    router.process_pending().unwrap();
    router.navigate("/archivo");
    router.process_pending().unwrap();
    scheduler.advance(DEFAULT_FADE_DELAY);

    assert_eq!(host.displayed_ids(), vec!["view-archivo"]);
    assert_eq!(host.view("view-archivo").unwrap().activations(), 1);
}

#[test]
fn missing_view_leaves_a_blank_page() {
    let (mut router, host, scheduler) = site();
    router.init();
    router.process_pending().unwrap();

    router.navigate("/perdido");
    router.process_pending().unwrap();
    scheduler.advance(DEFAULT_FADE_DELAY);

    assert!(host.active_ids().is_empty());
    assert!(host.displayed_ids().is_empty());
    assert_eq!(router.current_route().map(RouteKey::as_str), Some("/perdido"));
}
