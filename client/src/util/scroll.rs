//! Scroll progress tracking for the navigation bar.
//!
//! DESIGN
//! ======
//! The math is pure and runs everywhere. Only `read_metrics` and
//! `ScrollSubscription` touch the DOM, and only in the `hydrate` build.
//! `ScrollSubscription` owns the window listener and removes it on drop, so
//! the listener lives exactly as long as the component holding it.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Offset in pixels past which the navbar switches to its compact style.
pub const DEFAULT_THRESHOLD_PX: f64 = 10.0;

/// Raw scroll measurements taken from the document.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub scroll_height: f64,
    pub viewport_height: f64,
}

/// Normalized scroll position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    /// Percentage of scrollable distance traversed, in `[0, 100]`.
    pub progress: f64,
    pub past_threshold: bool,
}

impl ScrollState {
    #[must_use]
    pub fn from_metrics(metrics: ScrollMetrics) -> Self {
        Self {
            progress: compute_progress(
                metrics.offset,
                metrics.scroll_height,
                metrics.viewport_height,
            ),
            past_threshold: is_past_threshold(metrics.offset, DEFAULT_THRESHOLD_PX),
        }
    }
}

/// Percentage of the scrollable distance covered by `offset`.
///
/// Returns 0 when the content fits in the viewport or any measurement is
/// not finite.
#[must_use]
pub fn compute_progress(offset: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if !offset.is_finite() || !scrollable.is_finite() || scrollable <= 0.0 {
        return 0.0;
    }
    (offset / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Strictly greater than `threshold`.
#[must_use]
pub fn is_past_threshold(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Inline style for the progress bar.
#[must_use]
pub fn progress_style(progress: f64) -> String {
    format!("width: {progress}%")
}

/// Read the current scroll measurements from the document.
#[cfg(feature = "hydrate")]
pub fn read_metrics() -> Option<ScrollMetrics> {
    let document = web_sys::window()?.document()?;
    let root = document.document_element()?;
    let body_offset = document.body().map_or(0, |b| b.scroll_top());
    let offset = if body_offset != 0 {
        body_offset
    } else {
        root.scroll_top()
    };
    Some(ScrollMetrics {
        offset: f64::from(offset),
        scroll_height: f64::from(root.scroll_height()),
        viewport_height: f64::from(root.client_height()),
    })
}

/// Window `scroll` listener that is removed when dropped.
#[cfg(feature = "hydrate")]
pub struct ScrollSubscription {
    window: web_sys::Window,
    callback: wasm_bindgen::closure::Closure<dyn FnMut()>,
}

#[cfg(feature = "hydrate")]
impl ScrollSubscription {
    /// Register `on_scroll` for window scroll events and deliver one reading
    /// immediately. Returns `None` outside a window or if registration fails.
    pub fn attach(on_scroll: impl Fn(ScrollState) + 'static) -> Option<Self> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let window = web_sys::window()?;
        let on_scroll = std::rc::Rc::new(on_scroll);
        let handler = std::rc::Rc::clone(&on_scroll);
        let callback = Closure::wrap(Box::new(move || {
            if let Some(metrics) = read_metrics() {
                handler(ScrollState::from_metrics(metrics));
            }
        }) as Box<dyn FnMut()>);

        window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .ok()?;

        if let Some(metrics) = read_metrics() {
            on_scroll(ScrollState::from_metrics(metrics));
        }
        Some(Self { window, callback })
    }
}

#[cfg(feature = "hydrate")]
impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        use wasm_bindgen::JsCast;

        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
    }
}
