//! Running the site in the browser.

use std::rc::Rc;

use anyhow::anyhow;
use folio_history::HashLocation;
use folio_router::prelude::*;
use js_sys::{Array, Function, Reflect};
use tracing::{debug, error, info, Level};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, Window};

use crate::{
    curtain::{install_curtain, Curtain},
    games::GameEntry,
    routes::register_routes,
    Game, Services,
};

fn js_error(err: JsValue) -> anyhow::Error {
    anyhow!("{err:?}")
}

/// [`Services`] backed by the scripts the page loads onto `window`.
///
/// A script that is not present is skipped.
pub struct GlobalServices {
    window: Window,
    document: Document,
}

impl Default for GlobalServices {
    fn default() -> Self {
        Self::new()
    }
}

impl GlobalServices {
    /// Create services that look scripts up on the current window.
    pub fn new() -> Self {
        let window = web_sys::window().expect("access to `window`");
        let document = window.document().expect("`window` has access to `document`");
        Self { window, document }
    }

    fn global(&self, name: &str) -> Option<JsValue> {
        Reflect::get(&self.window, &JsValue::from_str(name))
            .ok()
            .filter(|value| !value.is_undefined() && !value.is_null())
    }

    /// Call `target.method(...args)` on the global `target`.
    fn call(&self, target: &str, method: &str, args: &[JsValue]) -> anyhow::Result<()> {
        let Some(object) = self.global(target) else {
            debug!("`{target}` is not loaded, skipping `{method}`");
            return Ok(());
        };

        let function = Reflect::get(&object, &JsValue::from_str(method)).map_err(js_error)?;
        let function: Function = function
            .dyn_into()
            .map_err(|_| anyhow!("`{target}.{method}` is not a function"))?;
        function
            .apply(&object, &args.iter().collect::<Array>())
            .map_err(js_error)?;
        Ok(())
    }

    fn hide_element(&self, id: &str) {
        let Some(element) = self.document.get_element_by_id(id) else {
            return;
        };
        let Ok(element) = element.dyn_into::<HtmlElement>() else {
            return;
        };
        if let Err(err) = element.style().set_property("display", "none") {
            error!("failed to hide `#{id}`: {err:?}");
        }
    }

    /// Call the global function `name` with the element `container`.
    fn mount(&self, name: &str, container: &str) -> anyhow::Result<()> {
        let (Some(function), Some(element)) = (
            self.global(name),
            self.document.get_element_by_id(container),
        ) else {
            debug!("`{name}` or `#{container}` is missing, skipping");
            return Ok(());
        };

        let function: Function = function
            .dyn_into()
            .map_err(|_| anyhow!("`{name}` is not a function"))?;
        function
            .call1(&JsValue::NULL, &element)
            .map_err(js_error)?;
        Ok(())
    }
}

impl Services for GlobalServices {
    fn load_featured(&self) -> anyhow::Result<()> {
        self.call("Gallery", "loadFeatured", &[])
    }

    fn load_archive(&self) -> anyhow::Result<()> {
        self.call("Gallery", "loadArchive", &[])
    }

    fn load_exhibitions(&self) -> anyhow::Result<()> {
        self.call(
            "exposicionesTimeline",
            "init",
            &[JsValue::from_str("exposiciones-container")],
        )
    }

    fn load_contact_panel(&self) -> anyhow::Result<()> {
        self.call(
            "videoCallPanel",
            "init",
            &[JsValue::from_str("contacto-container")],
        )?;
        if self.global("videoCallPanel").is_some() {
            self.hide_element("contact-fallback");
        }
        Ok(())
    }

    fn load_mica_dashboard(&self) -> anyhow::Result<()> {
        self.call(
            "micaDashboard",
            "init",
            &[JsValue::from_str("mica-dashboard-container")],
        )
    }

    fn load_artwork(&self, artwork: &str) -> anyhow::Result<()> {
        self.call("artworkDetail", "init", &[JsValue::from_str(artwork)])
    }

    fn launch_game(&self, game: Game) -> anyhow::Result<()> {
        match game.entry() {
            GameEntry::Object(name) => self.call(name, "init", &[]),
            GameEntry::Mount {
                function,
                container,
            } => self.mount(function, container),
        }
    }
}

/// The `#page-curtain` element plus a `navigating` class on `<body>`.
pub struct DomCurtain {
    window: Window,
    document: Document,
}

impl Default for DomCurtain {
    fn default() -> Self {
        Self::new()
    }
}

impl DomCurtain {
    /// Create a curtain over the current document.
    pub fn new() -> Self {
        let window = web_sys::window().expect("access to `window`");
        let document = window.document().expect("`window` has access to `document`");
        Self { window, document }
    }

    fn toggle_body(&self, navigating: bool) {
        let Some(body) = self.document.body() else {
            return;
        };
        let list = body.class_list();
        let result = match navigating {
            true => list.add_1("navigating"),
            false => list.remove_1("navigating"),
        };
        if let Err(err) = result {
            error!("failed to update the body classes: {err:?}");
        }
    }

    fn toggle_curtain(&self, active: bool) {
        let Some(curtain) = self.document.get_element_by_id("page-curtain") else {
            return;
        };
        let list = curtain.class_list();
        let result = match active {
            true => list.add_1("active"),
            false => list.remove_1("active"),
        };
        if let Err(err) = result {
            error!("failed to update the curtain classes: {err:?}");
        }
    }
}

impl Curtain for DomCurtain {
    fn close(&self) {
        self.toggle_body(true);
        self.toggle_curtain(true);
    }

    fn open(&self) {
        self.window.scroll_to_with_x_and_y(0.0, 0.0);
        self.toggle_curtain(false);
    }

    fn settle(&self) {
        self.toggle_body(false);
    }
}

/// Boot the site: route on the URL hash, switch the `.view` elements, draw the curtain.
pub fn launch() {
    crate::logging::init(Level::INFO);

    let stage = ViewStage::new(DomViewHost::default(), TimeoutScheduler);
    let mut router = Router::new(Rc::new(HashLocation::new()), RouterConfig::default());
    register_routes(&mut router, &stage, Rc::new(GlobalServices::new()));
    install_curtain(&mut router, Rc::new(DomCurtain::new()), Rc::new(TimeoutScheduler));
    router.init();

    info!("routing {} pages", router.route_count());
    wasm_bindgen_futures::spawn_local(async move { router.run().await });
}
