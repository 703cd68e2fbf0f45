//! Quick Home Prefab site core
//!
//! Logic behind the landing page and its image admin panel: override
//! resolution for image slots, the gallery carousel, hash routing and the
//! card scroller. Runs in the browser via WebAssembly and natively for the
//! operator CLI.

pub mod admin;
pub mod carousel;
pub mod config;
pub mod constants;
pub mod error;
pub mod images;
pub mod logging;
pub mod router;
pub mod scroller;

pub use admin::AdminSession;
pub use carousel::{CarouselController, CarouselSlot, LayoutMode};
pub use config::SiteSettings;
pub use error::{CarouselError, StoreError};
pub use images::{ImageStore, OverrideStore};
pub use router::Route;

// WASM entry point
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;
