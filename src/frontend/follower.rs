use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, MouseEvent};
use yew::prelude::*;

use super::dom::document;
use crate::cursor::{PointerState, DOT_SPRING, INTERACTIVE_SELECTOR, OUTLINE_SPRING};
use crate::motion::RingMotion;

const FALLBACK_FRAME_SECONDS: f64 = 1.0 / 60.0;

struct FollowerView {
    outline: NodeRef,
    dot: NodeRef,
    pointer: Cell<PointerState>,
    outline_motion: Cell<RingMotion>,
    dot_motion: Cell<RingMotion>,
    last_frame: Cell<Option<f64>>,
    frame: RefCell<Option<AnimationFrame>>,
}

impl FollowerView {
    fn new(outline: NodeRef, dot: NodeRef) -> Rc<Self> {
        let pointer = PointerState::default();
        Rc::new(Self {
            outline,
            dot,
            pointer: Cell::new(pointer),
            outline_motion: Cell::new(RingMotion::at(pointer.outline_target())),
            dot_motion: Cell::new(RingMotion::at(pointer.dot_target())),
            last_frame: Cell::new(None),
            frame: RefCell::new(None),
        })
    }

    fn update(self: &Rc<Self>, change: impl FnOnce(&mut PointerState)) {
        let mut pointer = self.pointer.get();
        change(&mut pointer);
        self.pointer.set(pointer);
        self.paint_state();
        self.schedule_frame();
    }

    fn paint_state(&self) {
        let pointer = self.pointer.get();
        let opacity = pointer.opacity().to_string();

        if let Some(outline) = self.outline.cast::<HtmlElement>() {
            let style = outline.style();
            let _ = style.set_property("opacity", &opacity);
            let _ = style.set_property("border-color", pointer.outline_border());
        }
        if let Some(dot) = self.dot.cast::<HtmlElement>() {
            let style = dot.style();
            let _ = style.set_property("opacity", &opacity);
            let _ = style.set_property("background-color", pointer.dot_fill());
        }
    }

    fn schedule_frame(self: &Rc<Self>) {
        if self.frame.borrow().is_some() {
            return;
        }

        let view = Rc::clone(self);
        let handle = request_animation_frame(move |timestamp| {
            view.frame.borrow_mut().take();
            if view.tick(timestamp) {
                view.last_frame.set(None);
            } else {
                view.schedule_frame();
            }
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    /// Advances both springs one frame. Returns true once both are at rest.
    fn tick(&self, timestamp: f64) -> bool {
        let dt = self
            .last_frame
            .replace(Some(timestamp))
            .map(|previous| (timestamp - previous) / 1_000.0)
            .unwrap_or(FALLBACK_FRAME_SECONDS);

        let pointer = self.pointer.get();
        let outline_target = pointer.outline_target();
        let dot_target = pointer.dot_target();

        let mut outline_motion = self.outline_motion.get();
        let mut dot_motion = self.dot_motion.get();
        outline_motion.step(OUTLINE_SPRING, outline_target, dt);
        dot_motion.step(DOT_SPRING, dot_target, dt);
        self.outline_motion.set(outline_motion);
        self.dot_motion.set(dot_motion);

        if let Some(outline) = self.outline.cast::<HtmlElement>() {
            let _ = outline.style().set_property("transform", &outline_motion.transform());
        }
        if let Some(dot) = self.dot.cast::<HtmlElement>() {
            let _ = dot.style().set_property("transform", &dot_motion.transform());
        }

        outline_motion.is_settled(outline_target) && dot_motion.is_settled(dot_target)
    }
}

/// Document listeners and the animation loop for one mounted follower.
/// Dropping it removes every listener and cancels the pending frame.
struct FollowerSubscription {
    view: Rc<FollowerView>,
    _listeners: Vec<EventListener>,
}

impl FollowerSubscription {
    fn install(view: Rc<FollowerView>) -> Option<Self> {
        let document = document()?;
        let mut listeners = Vec::new();

        let target = Rc::clone(&view);
        listeners.push(EventListener::new(&document, "mousemove", move |event: &Event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let (x, y) = (f64::from(event.client_x()), f64::from(event.client_y()));
            target.update(|pointer| {
                pointer.x = x;
                pointer.y = y;
            });
        }));

        let target = Rc::clone(&view);
        listeners.push(EventListener::new(&document, "mouseenter", move |_| {
            target.update(|pointer| pointer.hidden = false);
        }));

        let target = Rc::clone(&view);
        listeners.push(EventListener::new(&document, "mouseleave", move |_| {
            target.update(|pointer| pointer.hidden = true);
        }));

        let target = Rc::clone(&view);
        listeners.push(EventListener::new(&document, "mousedown", move |_| {
            target.update(|pointer| pointer.pressed = true);
        }));

        let target = Rc::clone(&view);
        listeners.push(EventListener::new(&document, "mouseup", move |_| {
            target.update(|pointer| pointer.pressed = false);
        }));

        // Delegated, so elements rendered later are picked up without a re-scan.
        let target = Rc::clone(&view);
        listeners.push(EventListener::new(&document, "mouseover", move |event: &Event| {
            let hovering = event
                .target()
                .and_then(|node| node.dyn_into::<Element>().ok())
                .and_then(|element| element.closest(INTERACTIVE_SELECTOR).ok().flatten())
                .is_some();
            if hovering != target.pointer.get().hovering {
                target.update(|pointer| pointer.hovering = hovering);
            }
        }));

        view.paint_state();
        Some(Self {
            view,
            _listeners: listeners,
        })
    }
}

impl Drop for FollowerSubscription {
    fn drop(&mut self) {
        self.view.frame.borrow_mut().take();
    }
}

#[function_component(CursorFollower)]
pub fn cursor_follower() -> Html {
    let outline = use_node_ref();
    let dot = use_node_ref();

    {
        let outline = outline.clone();
        let dot = dot.clone();
        use_effect_with((), move |_| {
            let subscription = FollowerSubscription::install(FollowerView::new(outline, dot));
            if subscription.is_none() {
                log::warn!("cursor.install_failed");
            }
            move || drop(subscription)
        });
    }

    html! {
        <div class="cursor-layer" aria-hidden="true">
            <div ref={outline} class="cursor-dot-outline"></div>
            <div ref={dot} class="cursor-dot"></div>
        </div>
    }
}
