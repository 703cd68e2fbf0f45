//! Browser bindings.
//!
//! Thin `wasm-bindgen` wrappers over the core types. The page markup owns
//! rendering; these exports only answer questions and mutate state.

use std::cell::{OnceCell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_time::Instant;

use crate::admin::AdminSession;
use crate::carousel::{CarouselConfig, CarouselController, IntervalTimer, LayoutMode};
use crate::config::SiteSettings;
use crate::images::{ImageStore, LocalStorage, MemoryStorage, OverrideStore, registry};
use crate::logging;
use crate::router::Route;
use crate::scroller::{self, ScrollDirection, ScrollMetrics};

thread_local! {
    /// Settings loaded at startup; defaults until `start` runs
    static SETTINGS: RefCell<Option<SiteSettings>> = const { RefCell::new(None) };

    /// Page store, built on first use so the baseline config is parsed once
    static STORE: OnceCell<Box<dyn ImageStore>> = const { OnceCell::new() };
}

fn settings() -> SiteSettings {
    SETTINGS
        .with(|settings| settings.borrow().clone())
        .unwrap_or_default()
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn window() -> Result<web_sys::Window, JsValue> {
    web_sys::window().ok_or_else(|| js_error("No window object available"))
}

/// Without localStorage the store still answers from the baseline config.
fn open_page_store() -> Box<dyn ImageStore> {
    let key = settings().storage_key;
    match LocalStorage::new() {
        Ok(storage) => Box::new(OverrideStore::new(storage).with_storage_key(key)),
        Err(e) => {
            log::debug!("Falling back to baseline images: {}", e);
            Box::new(OverrideStore::new(MemoryStorage::unavailable()))
        }
    }
}

/// Run `f` against the page's override store.
fn with_store<R>(f: impl FnOnce(&dyn ImageStore) -> R) -> R {
    STORE.with(|store| f(store.get_or_init(open_page_store).as_ref()))
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let settings = SiteSettings::load_from_local_storage().unwrap_or_default();
    logging::init_logging(settings.log_level);
    log::info!("Site core starting (route: {})", current_route());

    SETTINGS.with(|slot| *slot.borrow_mut() = Some(settings));
}

/// URL to display for an image slot.
#[wasm_bindgen(js_name = resolveImage)]
pub fn resolve_image(key: &str, fallback: &str) -> String {
    with_store(|store| store.resolve(key, fallback))
}

/// Whether an override or baseline entry supplies an image slot.
#[wasm_bindgen(js_name = hasStoredImage)]
pub fn has_stored_image(key: &str) -> bool {
    with_store(|store| store.is_customized(key))
}

/// Name of the route selected by the current hash ("site" or "admin").
#[wasm_bindgen(js_name = currentRoute)]
pub fn current_route() -> String {
    let hash = web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .unwrap_or_default();
    Route::from_hash(&hash).name().to_string()
}

/// Call `callback(routeName)` whenever the hash changes.
///
/// The listener lives for the rest of the page.
#[wasm_bindgen(js_name = onRouteChange)]
pub fn on_route_change(callback: js_sys::Function) -> Result<(), JsValue> {
    let window = window()?;
    let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
        let route = current_route();
        log::debug!("Route changed: {}", route);
        if let Err(e) = callback.call1(&JsValue::NULL, &JsValue::from_str(&route)) {
            log::warn!("Route change callback failed: {:?}", e);
        }
    });
    window.add_event_listener_with_callback("hashchange", listener.as_ref().unchecked_ref())?;
    listener.forget();
    Ok(())
}

/// Slot registry as JSON, for rendering the admin form.
#[wasm_bindgen(js_name = imageRegistry)]
pub fn image_registry() -> Result<String, JsValue> {
    serde_json::to_string(registry::IMAGE_GROUPS).map_err(js_error)
}

/// Scroller arrows, fade edges and progress bar as JSON.
#[wasm_bindgen(js_name = scrollState)]
pub fn scroll_state(
    scroll_left: f64,
    scroll_width: f64,
    client_width: f64,
) -> Result<String, JsValue> {
    let metrics = ScrollMetrics {
        scroll_left,
        scroll_width,
        client_width,
    };
    serde_json::to_string(&metrics.state().view()).map_err(js_error)
}

/// Signed `scrollBy` distance for one arrow click.
#[wasm_bindgen(js_name = scrollStep)]
pub fn scroll_step(client_width: f64, toward_end: bool) -> f64 {
    let metrics = ScrollMetrics {
        client_width,
        ..ScrollMetrics::default()
    };
    let direction = if toward_end {
        ScrollDirection::Right
    } else {
        ScrollDirection::Left
    };
    metrics.step(direction)
}

/// Whether the project cards render as a static grid at this width.
#[wasm_bindgen(js_name = isGridLayout)]
pub fn is_grid_layout(viewport_width_px: f64) -> bool {
    scroller::is_grid_layout(viewport_width_px)
}

type SharedCallback = Rc<RefCell<Option<js_sys::Function>>>;

fn notify(callback: &SharedCallback) {
    let Some(callback) = callback.borrow().clone() else {
        return;
    };
    if let Err(e) = callback.call0(&JsValue::NULL) {
        log::warn!("Gallery change callback failed: {:?}", e);
    }
}

/// Gallery carousel handle.
///
/// Freeing the handle stops autoplay.
#[wasm_bindgen]
pub struct Gallery {
    inner: Rc<RefCell<CarouselController<IntervalTimer>>>,
    on_change: SharedCallback,
    mobile_breakpoint_px: f64,
}

#[wasm_bindgen]
impl Gallery {
    /// Create a stopped gallery over `len` items.
    #[wasm_bindgen(constructor)]
    pub fn new(len: usize) -> Result<Gallery, JsValue> {
        let settings = settings();
        let controller =
            CarouselController::new(len, IntervalTimer::new(), CarouselConfig::from(&settings))
                .map_err(js_error)?;

        let inner = Rc::new(RefCell::new(controller));
        let on_change: SharedCallback = Rc::new(RefCell::new(None));

        // The timer only holds a weak handle, so dropping the gallery frees it
        let weak = Rc::downgrade(&inner);
        let tick_notify = on_change.clone();
        let tick = Closure::<dyn FnMut()>::new(move || {
            // Release the strong handle before calling into JS
            {
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                let Ok(mut controller) = inner.try_borrow_mut() else {
                    return;
                };
                controller.autoplay_tick();
            }
            notify(&tick_notify);
        });
        inner.borrow_mut().timer_mut().set_callback(tick);

        Ok(Self {
            inner,
            on_change,
            mobile_breakpoint_px: settings.mobile_breakpoint_px,
        })
    }

    /// Register the function called after the active item changes.
    #[wasm_bindgen(js_name = setOnChange)]
    pub fn set_on_change(&self, callback: js_sys::Function) {
        *self.on_change.borrow_mut() = Some(callback);
    }

    /// Begin autoplay.
    pub fn start(&self) {
        self.inner.borrow_mut().start();
    }

    /// Stop autoplay (unmount).
    pub fn stop(&self) {
        self.inner.borrow_mut().stop();
    }

    pub fn next(&self) {
        self.inner.borrow_mut().next();
        notify(&self.on_change);
    }

    pub fn prev(&self) {
        self.inner.borrow_mut().prev();
        notify(&self.on_change);
    }

    /// Jump to an item (dot or card click).
    #[wasm_bindgen(js_name = goTo)]
    pub fn go_to(&self, index: usize) -> Result<(), JsValue> {
        self.inner.borrow_mut().go_to(index).map_err(js_error)?;
        notify(&self.on_change);
        Ok(())
    }

    #[wasm_bindgen(getter, js_name = activeIndex)]
    pub fn active_index(&self) -> usize {
        self.inner.borrow().active_index()
    }

    /// CSS class for an item's position.
    #[wasm_bindgen(js_name = positionClass)]
    pub fn position_class(&self, item: usize) -> String {
        self.inner.borrow().position_of(item).css_class().to_string()
    }

    /// Pick the layout for the current viewport width.
    #[wasm_bindgen(js_name = setViewportWidth)]
    pub fn set_viewport_width(&self, width_px: f64) {
        let layout = LayoutMode::from_viewport_width_with(width_px, self.mobile_breakpoint_px);
        self.inner.borrow_mut().set_layout(layout);
    }

    #[wasm_bindgen(js_name = touchStart)]
    pub fn touch_start(&self, x: f64, y: f64) {
        self.inner.borrow_mut().touch_start(x, y);
    }

    /// Returns true while the touch is a horizontal drag (call preventDefault).
    #[wasm_bindgen(js_name = touchMove)]
    pub fn touch_move(&self, x: f64, y: f64) -> bool {
        self.inner.borrow_mut().touch_move(x, y)
    }

    /// Returns true if the touch sequence navigated.
    #[wasm_bindgen(js_name = touchEnd)]
    pub fn touch_end(&self) -> bool {
        let swiped = self.inner.borrow_mut().touch_end().is_some();
        if swiped {
            notify(&self.on_change);
        }
        swiped
    }

    #[wasm_bindgen(js_name = touchCancel)]
    pub fn touch_cancel(&self) {
        self.inner.borrow_mut().touch_cancel();
    }
}

/// Admin panel handle over localStorage.
#[wasm_bindgen]
pub struct Admin {
    session: AdminSession<OverrideStore<LocalStorage>>,
}

#[wasm_bindgen]
impl Admin {
    /// Open the admin session. Fails if localStorage is unavailable.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<Admin, JsValue> {
        let storage = LocalStorage::new().map_err(js_error)?;
        let store = OverrideStore::new(storage).with_storage_key(settings().storage_key);
        Ok(Self {
            session: AdminSession::open(store),
        })
    }

    /// Edit field value for a slot.
    pub fn url(&self, key: &str) -> String {
        self.session.url(key).to_string()
    }

    #[wasm_bindgen(js_name = setUrl)]
    pub fn set_url(&mut self, key: &str, value: &str) {
        self.session.set_url(key, value);
    }

    pub fn clear(&mut self, key: &str) {
        self.session.clear(key);
    }

    #[wasm_bindgen(js_name = clearAll)]
    pub fn clear_all(&mut self) -> Result<(), JsValue> {
        self.session.clear_all().map_err(js_error)
    }

    pub fn save(&mut self) -> Result<(), JsValue> {
        self.session.save(Instant::now()).map_err(js_error)
    }

    #[wasm_bindgen(js_name = isSavedVisible)]
    pub fn is_saved_visible(&self) -> bool {
        self.session.is_saved_visible(Instant::now())
    }

    #[wasm_bindgen(js_name = customCount)]
    pub fn custom_count(&self) -> usize {
        self.session.custom_count()
    }

    #[wasm_bindgen(js_name = totalSlots)]
    pub fn total_slots(&self) -> usize {
        self.session.total_slots()
    }

    /// Customized slots in a group; 0 for an unknown title.
    #[wasm_bindgen(js_name = groupCustomCount)]
    pub fn group_custom_count(&self, title: &str) -> usize {
        registry::find_group(title)
            .map(|group| self.session.group_custom_count(group))
            .unwrap_or(0)
    }

    /// Row data for a slot as JSON, or null for an unknown key.
    #[wasm_bindgen(js_name = slotView)]
    pub fn slot_view(&self, key: &str) -> Result<Option<String>, JsValue> {
        let Some(slot) = registry::find_slot(key) else {
            return Ok(None);
        };
        serde_json::to_string(&self.session.slot_view(slot))
            .map(Some)
            .map_err(js_error)
    }

    #[wasm_bindgen(js_name = toggleGroup)]
    pub fn toggle_group(&mut self, title: &str) {
        self.session.toggle_group(title);
    }

    #[wasm_bindgen(js_name = isCollapsed)]
    pub fn is_collapsed(&self, title: &str) -> bool {
        self.session.is_collapsed(title)
    }

    #[wasm_bindgen(js_name = togglePreview)]
    pub fn toggle_preview(&mut self, key: &str) {
        self.session.toggle_preview(key);
    }

    #[wasm_bindgen(getter, js_name = previewKey)]
    pub fn preview_key(&self) -> Option<String> {
        self.session.preview_key().map(str::to_string)
    }

    /// Download baseline + edits as `siteConfig.json`.
    #[wasm_bindgen(js_name = exportConfig)]
    pub fn export_config(&self) -> Result<(), JsValue> {
        let json = self.session.export_json().map_err(js_error)?;
        download_json(self.session.export_filename(), &json)?;
        log::info!("Exported {} image entries", self.session.export_merged_config().len());
        Ok(())
    }

    /// Leave the admin panel and reload the site with saved overrides.
    #[wasm_bindgen(js_name = goToSite)]
    pub fn go_to_site(&self) -> Result<(), JsValue> {
        let location = window()?.location();
        location.set_hash(Route::Site.hash())?;
        location.reload()
    }
}

fn download_json(filename: &str, json: &str) -> Result<(), JsValue> {
    use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

    let document = window()?
        .document()
        .ok_or_else(|| js_error("No document available"))?;
    let body = document
        .body()
        .ok_or_else(|| js_error("No document body available"))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(json));
    let options = BlobPropertyBag::new();
    options.set_type("application/json");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;

    Url::revoke_object_url(&url)
}
