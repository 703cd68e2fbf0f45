/// Operator CLI entry point for native builds
#[cfg(not(target_arch = "wasm32"))]
mod cli;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::time::Duration;

    use qhp_site::carousel::{CarouselConfig, DeadlineTimer, LayoutMode};
    use qhp_site::config::{ConfigError, SiteSettings};
    use qhp_site::images::{FileStorage, ImageStore, OverrideStore, registry};
    use qhp_site::scroller::{self, ScrollDirection, ScrollMetrics};
    use qhp_site::{AdminSession, CarouselController, CarouselError, Route, StoreError, logging};
    use web_time::Instant;

    use crate::cli::{Cli, Commands};

    /// Errors reported by the CLI.
    #[derive(Debug, thiserror::Error)]
    pub enum CliError {
        #[error(transparent)]
        Store(#[from] StoreError),

        #[error(transparent)]
        Config(#[from] ConfigError),

        #[error(transparent)]
        Carousel(#[from] CarouselError),

        #[error("Failed to write export: {0}")]
        Io(#[from] std::io::Error),

        #[error("Failed to serialize export: {0}")]
        Json(#[from] serde_json::Error),

        #[error("Unknown image slot '{0}' (run `report` for the list)")]
        UnknownSlot(String),

        #[error("Could not determine a storage directory; pass --storage-dir")]
        NoStorageDir,
    }

    type Store = OverrideStore<FileStorage>;

    fn load_settings(cli: &Cli) -> Result<SiteSettings, CliError> {
        match &cli.config {
            Some(path) => Ok(SiteSettings::load_from_path(path)?),
            None => Ok(SiteSettings::load_from_default_path().unwrap_or_default()),
        }
    }

    fn open_store(cli: &Cli, settings: &SiteSettings) -> Result<Store, CliError> {
        let storage = match &cli.storage_dir {
            Some(dir) => FileStorage::new(dir),
            None => FileStorage::default_location().ok_or(CliError::NoStorageDir)?,
        };
        log::debug!("Using override store in {:?}", storage.dir());
        Ok(OverrideStore::new(storage).with_storage_key(settings.storage_key.clone()))
    }

    fn require_slot(key: &str) -> Result<(), CliError> {
        registry::find_slot(key)
            .map(|_| ())
            .ok_or_else(|| CliError::UnknownSlot(key.to_string()))
    }

    fn report(store: &Store) {
        for group in registry::IMAGE_GROUPS {
            println!("{}", group.title);
            for slot in group.items {
                let marker = if store.is_customized(slot.key) { "*" } else { " " };
                let resolved = store.resolve(slot.key, slot.default_src);
                let shown = if resolved.is_empty() { "(none)" } else { resolved.as_str() };
                println!("  {} {:<26} {}", marker, slot.key, shown);
            }
        }
    }

    fn gallery(
        settings: &SiteSettings,
        items: usize,
        width: f64,
        elapsed_ms: u64,
    ) -> Result<(), CliError> {
        let t0 = Instant::now();
        let mut gallery = CarouselController::new(
            items,
            DeadlineTimer::starting_at(t0),
            CarouselConfig::from(settings),
        )?;
        gallery.set_layout(LayoutMode::from_viewport_width_with(
            width,
            settings.mobile_breakpoint_px,
        ));
        gallery.start();

        // Poll the way a frame loop would
        let step = Duration::from_millis(100);
        let mut elapsed = Duration::ZERO;
        while elapsed < Duration::from_millis(elapsed_ms) {
            elapsed += step;
            gallery.poll(t0 + elapsed);
        }

        println!(
            "active {} of {} after {} ms ({:?})",
            gallery.active_index(),
            gallery.len(),
            elapsed_ms,
            gallery.layout()
        );
        for (index, slot) in gallery.positions().enumerate() {
            println!("  {:>2} {}", index, slot.css_class());
        }
        Ok(())
    }

    fn scroll(metrics: ScrollMetrics, viewport: f64) {
        let view = metrics.state().view();
        println!(
            "progress {:.1}% (bar {:.1}%), left {}, right {}",
            view.progress, view.indicator_width, view.can_scroll_left, view.can_scroll_right
        );
        println!("classes \"{}\"", view.fade_classes);
        println!(
            "arrow step {:.1} px, grid {}",
            metrics.step(ScrollDirection::Right),
            scroller::is_grid_layout(viewport)
        );
    }

    pub fn run(cli: Cli) -> Result<(), CliError> {
        let settings = load_settings(&cli)?;
        logging::init_logging(settings.log_level);

        match &cli.command {
            None | Some(Commands::Report) => report(&open_store(&cli, &settings)?),
            Some(Commands::Set { key, url }) => {
                require_slot(key)?;
                let mut session = AdminSession::open(open_store(&cli, &settings)?);
                session.set_url(key, url);
                session.save(Instant::now())?;
                println!("{} -> {}", key, url);
            }
            Some(Commands::Clear { key }) => {
                require_slot(key)?;
                let mut session = AdminSession::open(open_store(&cli, &settings)?);
                session.clear(key);
                session.save(Instant::now())?;
                println!("{} cleared", key);
            }
            Some(Commands::ClearAll) => {
                let mut session = AdminSession::open(open_store(&cli, &settings)?);
                session.clear_all()?;
                println!("All overrides cleared");
            }
            Some(Commands::Export { output }) => {
                let session = AdminSession::open(open_store(&cli, &settings)?);
                let json = session.export_json()?;
                match output {
                    Some(path) => {
                        std::fs::write(path, &json)?;
                        log::info!("Exported config to {:?}", path);
                    }
                    None => println!("{}", json),
                }
            }
            Some(Commands::Route { hash }) => println!("{}", Route::from_hash(hash).name()),
            Some(Commands::Scroll {
                left,
                scroll_width,
                client_width,
                viewport,
            }) => scroll(
                ScrollMetrics {
                    scroll_left: *left,
                    scroll_width: *scroll_width,
                    client_width: *client_width,
                },
                *viewport,
            ),
            Some(Commands::Gallery {
                items,
                width,
                elapsed_ms,
            }) => gallery(&settings, *items, *width, *elapsed_ms)?,
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    let cli = cli::Cli::parse_args();
    if let Err(e) = native::run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

// WASM doesn't use main(), it uses wasm_bindgen's start function
#[cfg(target_arch = "wasm32")]
fn main() {}
