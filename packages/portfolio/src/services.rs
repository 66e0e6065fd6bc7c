use tracing::info;

use crate::Game;

/// The application code route handlers call into.
///
/// Every method defaults to doing nothing, so hosts only implement what they have.
pub trait Services {
    /// Fill the featured-work view.
    fn load_featured(&self) -> anyhow::Result<()> {
        Ok(())
    }

    /// Fill the archive view.
    fn load_archive(&self) -> anyhow::Result<()> {
        Ok(())
    }

    /// Fill the exhibitions view.
    fn load_exhibitions(&self) -> anyhow::Result<()> {
        Ok(())
    }

    /// Mount the contact panel.
    fn load_contact_panel(&self) -> anyhow::Result<()> {
        Ok(())
    }

    /// Mount the MICA dashboard.
    fn load_mica_dashboard(&self) -> anyhow::Result<()> {
        Ok(())
    }

    /// Fill the artwork detail view for `artwork`.
    fn load_artwork(&self, artwork: &str) -> anyhow::Result<()> {
        let _ = artwork;
        Ok(())
    }

    /// Start `game` in its view.
    fn launch_game(&self, game: Game) -> anyhow::Result<()> {
        let _ = game;
        Ok(())
    }
}

/// [`Services`] that only log what they were asked to do.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggingServices;

impl Services for LoggingServices {
    fn load_featured(&self) -> anyhow::Result<()> {
        info!("loading featured works");
        Ok(())
    }

    fn load_archive(&self) -> anyhow::Result<()> {
        info!("loading the archive");
        Ok(())
    }

    fn load_exhibitions(&self) -> anyhow::Result<()> {
        info!("loading exhibitions");
        Ok(())
    }

    fn load_contact_panel(&self) -> anyhow::Result<()> {
        info!("loading the contact panel");
        Ok(())
    }

    fn load_mica_dashboard(&self) -> anyhow::Result<()> {
        info!("loading the MICA dashboard");
        Ok(())
    }

    fn load_artwork(&self, artwork: &str) -> anyhow::Result<()> {
        info!("loading artwork `{artwork}`");
        Ok(())
    }

    fn launch_game(&self, game: Game) -> anyhow::Result<()> {
        info!("launching {game:?}");
        Ok(())
    }
}
