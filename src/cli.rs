use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Quick Home Prefab site tools - manage image overrides outside the browser
#[derive(Parser)]
#[command(name = "qhp-native")]
#[command(about = "Inspect and edit the landing page's image overrides")]
#[command(version)]
pub struct Cli {
    /// Directory holding the override store (defaults to the platform config dir)
    #[arg(long, global = true)]
    pub storage_dir: Option<PathBuf>,

    /// Settings file to use instead of the default one
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every image slot with the URL it currently resolves to
    Report,
    /// Override the image for a slot
    Set {
        /// Slot key (see `report`)
        key: String,
        /// Image URL
        url: String,
    },
    /// Remove the override for a slot
    Clear {
        /// Slot key
        key: String,
    },
    /// Remove all overrides
    ClearAll,
    /// Write baseline config merged with the overrides
    Export {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show which view a URL fragment opens
    Route {
        /// Fragment including the leading '#', e.g. "#/admin"
        hash: String,
    },
    /// Show scroller state for the given container metrics
    Scroll {
        /// Container `scrollLeft` in px
        #[arg(long, default_value_t = 0.0)]
        left: f64,
        /// Container `scrollWidth` in px
        #[arg(long)]
        scroll_width: f64,
        /// Container `clientWidth` in px
        #[arg(long)]
        client_width: f64,
        /// Viewport width in px
        #[arg(long, default_value_t = 1280.0)]
        viewport: f64,
    },
    /// Simulate the gallery carousel
    Gallery {
        /// Number of items
        #[arg(long, default_value_t = 5)]
        items: usize,
        /// Viewport width in px
        #[arg(long, default_value_t = 1280.0)]
        width: f64,
        /// Time to let autoplay run, in ms
        #[arg(long, default_value_t = 0)]
        elapsed_ms: u64,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_no_command() {
        let cli = Cli::try_parse_from(["qhp-native"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.storage_dir.is_none());
    }

    #[test]
    fn test_set_with_global_storage_dir() {
        let cli =
            Cli::try_parse_from(["qhp-native", "set", "logo", "/x.png", "--storage-dir", "/tmp/q"])
                .unwrap();
        assert_eq!(cli.storage_dir, Some(PathBuf::from("/tmp/q")));
        match cli.command {
            Some(Commands::Set { key, url }) => {
                assert_eq!(key, "logo");
                assert_eq!(url, "/x.png");
            }
            _ => panic!("expected set"),
        }
    }

    #[test]
    fn test_scroll_requires_widths() {
        assert!(Cli::try_parse_from(["qhp-native", "scroll", "--left", "10"]).is_err());

        let cli = Cli::try_parse_from([
            "qhp-native",
            "scroll",
            "--scroll-width",
            "1200",
            "--client-width",
            "400",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Scroll {
                left,
                scroll_width,
                client_width,
                ..
            }) => {
                assert_eq!(left, 0.0);
                assert_eq!(scroll_width, 1200.0);
                assert_eq!(client_width, 400.0);
            }
            _ => panic!("expected scroll"),
        }
    }

    #[test]
    fn test_gallery_defaults() {
        let cli = Cli::try_parse_from(["qhp-native", "gallery"]).unwrap();
        match cli.command {
            Some(Commands::Gallery {
                items,
                width,
                elapsed_ms,
            }) => {
                assert_eq!(items, 5);
                assert_eq!(width, 1280.0);
                assert_eq!(elapsed_ms, 0);
            }
            _ => panic!("expected gallery"),
        }
    }
}
