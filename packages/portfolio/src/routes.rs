//! The portfolio's route table.

use std::rc::Rc;

use anyhow::Context;
use folio_router::prelude::*;

use crate::{Game, Services};

/// What a page loads once its view is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Content {
    /// Nothing beyond the view itself.
    Static,
    /// The featured works.
    Featured,
    /// The full archive.
    Archive,
    /// The exhibitions timeline.
    Exhibitions,
    /// The contact panel.
    Contact,
    /// The MICA dashboard.
    MicaDashboard,
    /// The artwork named by the `:artwork` parameter.
    Artwork,
    /// One of the mini-games.
    Game(Game),
}

impl Content {
    fn load(self, services: &dyn Services, cx: &RouteContext) -> HandlerResult {
        match self {
            Content::Static => Ok(()),
            Content::Featured => services.load_featured(),
            Content::Archive => services.load_archive(),
            Content::Exhibitions => services.load_exhibitions(),
            Content::Contact => services.load_contact_panel(),
            Content::MicaDashboard => services.load_mica_dashboard(),
            Content::Artwork => match cx.parameter("artwork") {
                Some(artwork) => services
                    .load_artwork(artwork)
                    .with_context(|| format!("loading artwork `{artwork}`")),
                None => Ok(()),
            },
            Content::Game(game) => services
                .launch_game(game)
                .with_context(|| format!("launching {game:?}")),
        }
    }
}

/// A route bound to the view it shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Page {
    /// The route key the page is registered under.
    pub route: &'static str,
    /// The id of the view the page shows.
    pub view: &'static str,
    /// What the page loads after showing its view.
    pub content: Content,
}

impl Page {
    const fn new(route: &'static str, view: &'static str, content: Content) -> Self {
        Self {
            route,
            view,
            content,
        }
    }
}

const SECTIONS: [Page; 11] = [
    Page::new("/", "view-home", Content::Static),
    Page::new("/destacada", "view-destacada", Content::Featured),
    Page::new("/archivo", "view-archivo", Content::Archive),
    Page::new("/galeria", "view-archivo", Content::Archive),
    Page::new("/about", "view-about", Content::Static),
    Page::new("/contacto", "view-contacto", Content::Contact),
    Page::new("/videos", "view-videos", Content::Static),
    Page::new("/juegos", "view-juegos", Content::Static),
    Page::new("/exposiciones", "view-exposiciones", Content::Exhibitions),
    Page::new("/mica-dashboard", "view-mica-dashboard", Content::MicaDashboard),
    Page::new("/obra/:artwork", "view-obra", Content::Artwork),
];

/// Every page of the site: the sections first, then one page per game.
pub fn pages() -> Vec<Page> {
    let games = Game::ALL
        .into_iter()
        .map(|game| Page::new(game.route(), game.view(), Content::Game(game)));

    SECTIONS.into_iter().chain(games).collect()
}

/// The id of every view a page can show, without duplicates, in page order.
pub fn view_ids() -> Vec<&'static str> {
    let mut ids: Vec<&'static str> = Vec::new();
    for page in pages() {
        if !ids.contains(&page.view) {
            ids.push(page.view);
        }
    }
    ids
}

/// Register every page on `router`. Each handler shows its view on `stage`, then loads the page's
/// content through `services`.
pub fn register_routes(router: &mut Router, stage: &ViewStage, services: Rc<dyn Services>) {
    for page in pages() {
        let stage = stage.clone();
        let services = services.clone();
        router.register(page.route, move |cx| {
            stage.show_view(page.view);
            page.content.load(services.as_ref(), cx)
        });
    }
}
