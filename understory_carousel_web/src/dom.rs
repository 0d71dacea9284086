// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `web_sys` implementation of the carousel view and its event wiring.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use kurbo::{Point, Rect};
use tracing::{debug, warn};
use understory_carousel::{
    Anchor, Carousel, CarouselError, CarouselOptions, ControlSurface, Direction, Group, Transition,
    ViewAdapter, parse_position, prepare_controls,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::{Closure, wasm_bindgen};
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, Performance, TouchEvent, Window,
};

use crate::clock::{millis, timeout_delay};
use crate::markup::{
    ACTIVE_CLASS, BUTTON_SELECTOR, CONTAINER_SELECTOR, DOT_ATTR, DOT_SELECTOR, DOTS_SELECTOR,
    FALLBACK_BUTTONS_HTML, NEXT_BUTTON_SELECTOR, PREV_BUTTON_SELECTOR, SLIDE_ATTR, SLIDE_SELECTOR,
    fallback_dots_html, transform_value, transition_value,
};

type Shared = Rc<RefCell<Carousel<DomView>>>;

/// Carousel view over a DOM subtree.
#[derive(Clone, Debug)]
pub struct DomView {
    root: Element,
    container: HtmlElement,
}

impl DomView {
    /// Finds the widget root by `selector` and its offset container.
    pub fn locate(document: &Document, selector: &str) -> Result<Self, CarouselError> {
        let root = document
            .query_selector(selector)
            .ok()
            .flatten()
            .ok_or(CarouselError::MissingAnchor(Anchor::Root))?;
        let container = root
            .query_selector(CONTAINER_SELECTOR)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or(CarouselError::MissingAnchor(Anchor::Container))?;
        Ok(Self { root, container })
    }

    /// The widget root.
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// The element that is translated to show the current slide.
    pub fn container(&self) -> &HtmlElement {
        &self.container
    }

    fn dots_container(&self) -> Option<Element> {
        self.root.query_selector(DOTS_SELECTOR).ok().flatten()
    }
}

fn query_all(scope: &Element, selector: &str) -> Vec<Element> {
    let Ok(list) = scope.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

impl ViewAdapter for DomView {
    type Element = Element;

    fn elements(&self, group: Group) -> Vec<Element> {
        match group {
            Group::Slides => query_all(&self.root, SLIDE_SELECTOR),
            Group::Dots => self
                .dots_container()
                .map(|dots| query_all(&dots, DOT_SELECTOR))
                .unwrap_or_default(),
        }
    }

    fn position_of(&self, group: Group, element: &Element) -> Option<usize> {
        let attr = match group {
            Group::Slides => SLIDE_ATTR,
            Group::Dots => DOT_ATTR,
        };
        element
            .get_attribute(attr)
            .and_then(|raw| parse_position(&raw).ok())
    }

    fn measure_width(&self, slide: &Element) -> f64 {
        slide.get_bounding_client_rect().width()
    }

    fn apply_offset(&mut self, offset: f64, transition: Transition) {
        let style = self.container.style();
        let _ = style.set_property("transform", &transform_value(offset));
        let _ = style.set_property("transition", &transition_value(transition));
    }

    fn set_active(&mut self, element: &Element, active: bool) {
        let classes = element.class_list();
        let _ = if active {
            classes.add_1(ACTIVE_CLASS)
        } else {
            classes.remove_1(ACTIVE_CLASS)
        };
    }
}

impl ControlSurface for DomView {
    fn button_count(&self) -> usize {
        query_all(&self.root, BUTTON_SELECTOR).len()
    }

    fn create_buttons(&mut self) {
        let _ = self
            .root
            .insert_adjacent_html("beforeend", FALLBACK_BUTTONS_HTML);
    }

    fn remove_buttons(&mut self) {
        for button in query_all(&self.root, BUTTON_SELECTOR) {
            button.remove();
        }
    }

    fn has_dots(&self) -> bool {
        self.dots_container().is_some()
    }

    fn create_dots(&mut self, slide_count: usize) {
        let _ = self
            .root
            .insert_adjacent_html("beforeend", &fallback_dots_html(slide_count));
    }
}

/// An event listener that is removed when dropped.
struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach(
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

fn now_ms(performance: &Performance) -> u64 {
    millis(performance.now())
}

fn first_touch(event: &Event) -> Option<Point> {
    let touch = event.dyn_ref::<TouchEvent>()?.touches().get(0)?;
    Some(Point::new(f64::from(touch.page_x()), f64::from(touch.page_y())))
}

fn target_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

fn closest(element: &Element, selector: &str) -> Option<Element> {
    element.closest(selector).ok().flatten()
}

/// Re-arms a `setTimeout` for each autoplay deadline.
struct AutoplayPump {
    inner: Rc<PumpInner>,
}

struct PumpInner {
    window: Window,
    performance: Performance,
    carousel: Weak<RefCell<Carousel<DomView>>>,
    handle: Cell<Option<i32>>,
    armed_for: Cell<u64>,
    callback: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl AutoplayPump {
    fn start(
        window: Window,
        performance: Performance,
        carousel: &Shared,
    ) -> Result<Self, JsValue> {
        let inner = Rc::new(PumpInner {
            window,
            performance,
            carousel: Rc::downgrade(carousel),
            handle: Cell::new(None),
            armed_for: Cell::new(0),
            callback: RefCell::new(None),
        });
        let weak = Rc::downgrade(&inner);
        let callback = Closure::<dyn FnMut()>::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.fire();
            }
        });
        *inner.callback.borrow_mut() = Some(callback);
        inner.arm()?;
        Ok(Self { inner })
    }
}

impl PumpInner {
    fn arm(&self) -> Result<(), JsValue> {
        let Some(carousel) = self.carousel.upgrade() else {
            return Ok(());
        };
        let Some(deadline) = carousel.borrow().next_wakeup() else {
            return Ok(());
        };
        let callback = self.callback.borrow();
        let Some(callback) = callback.as_ref() else {
            return Ok(());
        };
        let delay = timeout_delay(deadline, now_ms(&self.performance));
        let handle = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                delay,
            )?;
        self.handle.set(Some(handle));
        self.armed_for.set(deadline);
        Ok(())
    }

    fn fire(&self) {
        self.handle.set(None);
        if let Some(carousel) = self.carousel.upgrade() {
            // Armed for `armed_for`; a coarse clock may read slightly earlier.
            let now = now_ms(&self.performance).max(self.armed_for.get());
            carousel.borrow_mut().tick(now);
        }
        if let Err(err) = self.arm() {
            warn!(?err, "failed to re-arm carousel autoplay");
        }
    }
}

impl Drop for AutoplayPump {
    fn drop(&mut self) {
        if let Some(handle) = self.inner.handle.take() {
            self.inner.window.clear_timeout_with_handle(handle);
        }
        self.inner.callback.borrow_mut().take();
    }
}

impl fmt::Debug for AutoplayPump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutoplayPump")
            .field("handle", &self.inner.handle.get())
            .field("armed_for", &self.inner.armed_for.get())
            .finish_non_exhaustive()
    }
}

/// A mounted carousel.
///
/// Owns the DOM listeners and the autoplay timeout. Dropping the handle (or
/// calling [`CarouselHandle::destroy`]) clears the timeout and removes every
/// listener; the markup stays as it is.
pub struct CarouselHandle {
    carousel: Shared,
    listeners: Vec<Listener>,
    autoplay: Option<AutoplayPump>,
}

impl fmt::Debug for CarouselHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CarouselHandle")
            .field("index", &self.index())
            .field("listeners", &self.listeners)
            .field("autoplay", &self.autoplay)
            .finish_non_exhaustive()
    }
}

impl CarouselHandle {
    /// Current 0-based slide index.
    pub fn index(&self) -> usize {
        self.carousel.borrow().index()
    }

    /// Steps one slide in `direction`.
    pub fn advance(&self, direction: Direction) {
        self.carousel.borrow_mut().advance(direction);
    }

    /// Jumps to slide `index`.
    pub fn go_to(&self, index: usize) -> Result<(), CarouselError> {
        self.carousel.borrow_mut().go_to(index)
    }

    /// Stops autoplay and clears its pending timeout.
    pub fn stop(&mut self) {
        self.autoplay = None;
        self.carousel.borrow_mut().stop();
    }

    /// Removes listeners, clears the timeout, and tears the instance down.
    pub fn destroy(mut self) {
        self.autoplay = None;
        self.listeners.clear();
        match Rc::try_unwrap(self.carousel) {
            Ok(cell) => {
                cell.into_inner().destroy();
            }
            Err(shared) => shared.borrow_mut().stop(),
        }
    }
}

fn to_js(err: CarouselError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Mounts a carousel on the element matched by `options.selector`.
///
/// Creates or removes fallback controls as configured, wires touch, button,
/// and dot listeners, and starts autoplay if enabled.
pub fn mount(options: CarouselOptions) -> Result<CarouselHandle, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    options.validate().map_err(to_js)?;

    let view = DomView::locate(&document, &options.selector).map_err(to_js)?;
    let root = view.root().clone();
    let container: EventTarget = view.container().clone().into();

    let mut carousel = Carousel::new(options.clone(), view).map_err(to_js)?;
    let slide_count = carousel.slide_count();
    let plan = prepare_controls(&options, carousel.view_mut(), slide_count);
    // Fallback dots did not exist when the carousel highlighted slide 1.
    carousel.refresh_highlight();
    let carousel: Shared = Rc::new(RefCell::new(carousel));

    let mut listeners = Vec::new();

    let weak = Rc::downgrade(&carousel);
    listeners.push(Listener::attach(&root, "touchstart", move |event| {
        let Some(touch) = first_touch(&event) else {
            return;
        };
        let Some(slide) = target_element(&event).and_then(|el| closest(&el, SLIDE_SELECTOR))
        else {
            return;
        };
        let rect = slide.get_bounding_client_rect();
        let bounds = Rect::new(rect.left(), rect.top(), rect.right(), rect.bottom());
        if let Some(carousel) = weak.upgrade() {
            carousel.borrow_mut().touch_start(touch, bounds);
        }
    })?);

    let weak = Rc::downgrade(&carousel);
    listeners.push(Listener::attach(&container, "touchmove", move |event| {
        if let (Some(touch), Some(carousel)) = (first_touch(&event), weak.upgrade()) {
            carousel.borrow_mut().touch_move(touch);
        }
    })?);

    for kind in ["touchend", "touchcancel"] {
        let weak = Rc::downgrade(&carousel);
        listeners.push(Listener::attach(&container, kind, move |_| {
            if let Some(carousel) = weak.upgrade() {
                carousel.borrow_mut().touch_end();
            }
        })?);
    }

    if plan.buttons.is_wired() {
        for button in query_all(&root, BUTTON_SELECTOR) {
            let weak = Rc::downgrade(&carousel);
            listeners.push(Listener::attach(&button, "click", move |event| {
                let Some(target) = target_element(&event) else {
                    return;
                };
                let direction = if closest(&target, NEXT_BUTTON_SELECTOR).is_some() {
                    Direction::Next
                } else if closest(&target, PREV_BUTTON_SELECTOR).is_some() {
                    Direction::Prev
                } else {
                    return;
                };
                if let Some(carousel) = weak.upgrade() {
                    carousel.borrow_mut().advance(direction);
                }
            })?);
        }
    }

    if plan.dots.is_wired()
        && let Some(dots) = root.query_selector(DOTS_SELECTOR).ok().flatten()
    {
        let weak = Rc::downgrade(&carousel);
        listeners.push(Listener::attach(&dots, "click", move |event| {
            let Some(raw) = target_element(&event)
                .and_then(|el| closest(&el, DOT_SELECTOR))
                .and_then(|dot| dot.get_attribute(DOT_ATTR))
            else {
                return;
            };
            if let Some(carousel) = weak.upgrade() {
                // Rejected positions are logged by `select_dot`.
                let _ = carousel.borrow_mut().select_dot(&raw);
            }
        })?);
    }

    let performance = window
        .performance()
        .ok_or_else(|| JsValue::from_str("no performance clock"))?;
    let autoplay = if carousel.borrow_mut().start_autoplay(now_ms(&performance)) {
        Some(AutoplayPump::start(window, performance, &carousel)?)
    } else {
        None
    };

    debug!(
        selector = %options.selector,
        ?plan,
        listeners = listeners.len(),
        autoplay = autoplay.is_some(),
        "carousel mounted"
    );
    Ok(CarouselHandle {
        carousel,
        listeners,
        autoplay,
    })
}

/// Like [`mount`], reading options from a JSON object.
pub fn mount_json(options_json: &str) -> Result<CarouselHandle, JsValue> {
    let options = crate::options_from_json(options_json).map_err(|err| JsValue::from_str(&err))?;
    mount(options)
}

/// JavaScript-facing carousel.
///
/// ```js
/// const slider = new Carousel(JSON.stringify({
///   selector: "[data-slider]", buttons: true, dots: true, autoplay: true, autoplaySpeed: 4000,
/// }));
/// slider.next();
/// slider.destroy();
/// ```
#[wasm_bindgen(js_name = Carousel)]
#[derive(Debug)]
pub struct JsCarousel {
    handle: Option<CarouselHandle>,
}

#[wasm_bindgen(js_class = Carousel)]
impl JsCarousel {
    /// Mounts a carousel from a JSON options string.
    #[wasm_bindgen(constructor)]
    pub fn new(options_json: &str) -> Result<Self, JsValue> {
        Ok(Self {
            handle: Some(mount_json(options_json)?),
        })
    }

    /// Shows the next slide.
    pub fn next(&self) {
        if let Some(handle) = &self.handle {
            handle.advance(Direction::Next);
        }
    }

    /// Shows the previous slide.
    pub fn prev(&self) {
        if let Some(handle) = &self.handle {
            handle.advance(Direction::Prev);
        }
    }

    /// Jumps to the 0-based slide `index`.
    #[wasm_bindgen(js_name = goTo)]
    pub fn go_to(&self, index: usize) -> Result<(), JsValue> {
        match &self.handle {
            Some(handle) => handle.go_to(index).map_err(to_js),
            None => Err(JsValue::from_str("carousel destroyed")),
        }
    }

    /// Current 0-based slide index, or `undefined` after `destroy`.
    pub fn index(&self) -> Option<usize> {
        self.handle.as_ref().map(CarouselHandle::index)
    }

    /// Stops autoplay.
    pub fn stop(&mut self) {
        if let Some(handle) = &mut self.handle {
            handle.stop();
        }
    }

    /// Removes listeners and timers. Further calls are no-ops.
    pub fn destroy(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.destroy();
        }
    }
}
