//! Image override store and slot registry.

mod overrides;
pub mod registry;
mod storage;
mod store;

pub use overrides::{OverrideMap, baseline_config, count_non_blank, is_blank, merge, non_blank};
pub use registry::{IMAGE_GROUPS, ImageGroup, ImageSlot};
pub use storage::{KeyValueStorage, MemoryStorage};
pub use store::{ImageStore, OverrideStore};

#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStorage;

#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
