use js_sys::{Function, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Document, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::Callback;

use crate::nav::scroll_target_top;
use crate::theme::{Theme, DARK_ROOT_CLASS};

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn root_attribute(name: &str) -> Option<String> {
    document()?.document_element()?.get_attribute(name)
}

pub fn scroll_y() -> f64 {
    window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

pub fn apply_theme(theme: Theme) {
    let Some(document) = document() else {
        return;
    };

    if let Some(root) = document.document_element() {
        let _ = root
            .class_list()
            .toggle_with_force(DARK_ROOT_CLASS, theme.is_dark());
    }

    if let Some(body) = document.body() {
        let _ = body
            .style()
            .set_property("background-color", theme.background());
    }
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn apply_theme_with_transition(theme: Theme) {
    if prefers_reduced_motion() {
        apply_theme(theme);
        return;
    }

    let Some(document) = document() else {
        apply_theme(theme);
        return;
    };

    let document_js: JsValue = document.into();
    let Ok(start_view_transition) =
        Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
    else {
        apply_theme(theme);
        return;
    };

    let Some(start_view_transition) = start_view_transition.dyn_ref::<Function>() else {
        apply_theme(theme);
        return;
    };

    let callback = Closure::once_into_js(move || {
        apply_theme(theme);
    });

    if start_view_transition.call1(&document_js, &callback).is_err() {
        apply_theme(theme);
    }
}

/// Smoothly scrolls to the element matching `selector`. Returns false when
/// nothing matched.
pub fn smooth_scroll_to(selector: &str) -> bool {
    let Some(win) = window() else {
        return false;
    };
    let Some(element) = document().and_then(|d| d.query_selector(selector).ok().flatten()) else {
        log::debug!("nav.anchor_missing selector={selector}");
        return false;
    };

    let top = scroll_target_top(element.get_bounding_client_rect().top(), scroll_y());
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
    true
}

/// Click handler that replaces the default jump to `href` with a smooth
/// scroll, then runs `after`.
pub fn anchor_click(href: &'static str, after: Callback<()>) -> Callback<MouseEvent> {
    Callback::from(move |event: MouseEvent| {
        event.prevent_default();
        after.emit(());
        smooth_scroll_to(href);
    })
}
