use js_sys::{Array, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::theme::Theme;
use crate::visibility::{is_in_view, RevealTracker};

#[hook]
pub fn use_theme() -> Theme {
    use_context::<Theme>().unwrap_or_default()
}

/// Observer plus the callback it calls into. Dropping it disconnects.
struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ViewportObserver {
    fn observe(target: &Element, threshold: f64, on_change: UseStateSetter<bool>) -> Option<Self> {
        let supported = window()
            .map(|w| Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
            .unwrap_or(false);
        if !supported {
            return None;
        }

        let target_id = target.id();
        let mut tracker = RevealTracker::default();
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                let latest = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .last();
                let Some(entry) = latest else {
                    return;
                };

                let visible = is_in_view(
                    entry.is_intersecting(),
                    entry.intersection_ratio(),
                    threshold,
                );
                if tracker.observe(visible) {
                    log::debug!(
                        "visibility.entered id={target_id} entrances={}",
                        tracker.entrances
                    );
                }
                on_change.set(visible);
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer = IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )
        .ok()?;
        observer.observe(target);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Whether at least `threshold` of the referenced element is on screen.
/// Replays every time the element re-enters; reports `true` when the browser
/// cannot observe intersections.
#[hook]
pub fn use_in_view(node: NodeRef, threshold: f64) -> bool {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with(node, move |node| {
            let observer = node
                .cast::<Element>()
                .and_then(|element| ViewportObserver::observe(&element, threshold, visible.setter()));

            if observer.is_none() {
                log::debug!("visibility.observer_unavailable threshold={threshold}");
                visible.set(true);
            }

            move || drop(observer)
        });
    }

    *visible
}
