#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use std::{path::PathBuf, rc::Rc};

    use anyhow::Context;
    use clap::Parser;
    use folio::{logging, HeadlessSite, LoggingServices};
    use folio_router::{HookPolicy, RouterConfig};

    /// Replay a sequence of fragments against the portfolio and print the view each one shows.
    #[derive(Parser, Debug)]
    #[command(name = "folio", version)]
    struct Cli {
        /// Fragments to visit in order, e.g. `/archivo` or `#/obra/42`. `back` steps back.
        fragments: Vec<String>,

        /// The route unknown and empty fragments resolve to.
        #[arg(long)]
        home: Option<String>,

        /// A JSON router configuration, e.g. `{"home": "/", "hook_policy": "chain"}`.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Keep every registered hook instead of only the last one per phase.
        #[arg(long)]
        chain_hooks: bool,

        /// Log more (-v info, -vv debug, -vvv trace). `FOLIO_LOG` overrides this.
        #[arg(short, long, action = clap::ArgAction::Count)]
        verbose: u8,
    }

    impl Cli {
        fn router_config(&self) -> anyhow::Result<RouterConfig> {
            let mut config = match &self.config {
                Some(path) => {
                    let contents = std::fs::read_to_string(path)
                        .with_context(|| format!("failed to read {}", path.display()))?;
                    serde_json::from_str(&contents)
                        .with_context(|| format!("failed to parse {}", path.display()))?
                }
                None => RouterConfig::default(),
            };

            if let Some(home) = &self.home {
                config = config.home(home.as_str());
            }
            if self.chain_hooks {
                config = config.hook_policy(HookPolicy::Chain);
            }
            Ok(config)
        }
    }

    fn show(step: &str, view: Option<String>) {
        println!("{step:<24} {}", view.as_deref().unwrap_or("(blank)"));
    }

    pub fn run() -> anyhow::Result<()> {
        let cli = Cli::parse();
        logging::init(logging::level_from_verbosity(cli.verbose));

        let mut site = HeadlessSite::new(cli.router_config()?, Rc::new(LoggingServices));
        show("(start)", site.start()?);

        for fragment in &cli.fragments {
            let view = match fragment.as_str() {
                "back" => site.back()?,
                fragment => site.visit(fragment)?,
            };
            show(fragment, view);
        }

        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    cli::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    folio::web::launch();
}
