use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, Window};

use super::error::SetupError;
use super::progress::{Anchor, PinRange, PinSpacing};
use super::registry::ScrollRegistry;
use super::visual::{Stylable, VisualState};
use crate::config::animation;

impl Stylable for HtmlElement {
    fn apply_style(&self, state: &VisualState) {
        let style = self.style();
        for (name, value) in state.properties() {
            if let Err(e) = style.set_property(name, &value) {
                log::warn!("Failed to set {} on element: {:?}", name, e);
            }
        }
    }
}

/// How far past its start a section's pin range extends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PinLength {
    /// A multiple of the viewport height.
    Viewports(f64),
    /// The element's own height, i.e. until its bottom reaches the top of
    /// the viewport.
    ElementHeight,
}

/// Pin range measured from an element's position in the document.
///
/// For a pinned section the anchor is the spacer around it. Every
/// measurement resizes the spacer to the section's current height plus the
/// pin length, so the section sticks for exactly the measured range.
pub struct DomAnchor {
    element: HtmlElement,
    pinned: Option<HtmlElement>,
    length: PinLength,
}

impl DomAnchor {
    pub fn new(element: HtmlElement, length: PinLength) -> Self {
        Self {
            element,
            pinned: None,
            length,
        }
    }

    pub fn pinned(spacer: HtmlElement, section: HtmlElement, length: PinLength) -> Self {
        Self {
            element: spacer,
            pinned: Some(section),
            length,
        }
    }

    fn fit_spacer(&self, section: &HtmlElement, pin_length: f64) -> Result<(), SetupError> {
        let spacing = PinSpacing {
            section_height: section.offset_height() as f64,
            pin_length,
        };
        self.element
            .style()
            .set_property("height", &format!("{}px", spacing.spacer_height()))?;
        Ok(())
    }
}

impl Anchor for DomAnchor {
    fn measure(&self) -> Result<PinRange, SetupError> {
        let window = web_sys::window().ok_or(SetupError::NoWindow)?;
        let rect = self.element.get_bounding_client_rect();
        let start = rect.top() + window.scroll_y()?;
        let length = match self.length {
            PinLength::Viewports(k) => k * window.inner_height()?.as_f64().unwrap_or(0.0),
            PinLength::ElementHeight => rect.height(),
        };
        if let Some(section) = &self.pinned {
            self.fit_spacer(section, length)?;
        }
        PinRange::new(start, start + length)
    }
}

pub fn scroll_offset() -> Option<f64> {
    web_sys::window().and_then(|w| w.scroll_y().ok())
}

/// All descendants of `root` matching `selector`, in document order.
pub fn query_items(root: &Element, selector: &str) -> Result<Vec<HtmlElement>, SetupError> {
    let nodes = root.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

pub fn query_one(root: &Element, selector: &'static str, section: &'static str) -> Result<HtmlElement, SetupError> {
    root.query_selector(selector)?
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
        .ok_or(SetupError::MissingElements { section, selector })
}

/// Binds a [`ScrollRegistry`] to the window's scroll and resize events.
///
/// Dropping the host removes both listeners, cancels a pending resize
/// refresh and tears the registry down. That happens exactly once.
pub struct ScrollHost {
    window: Window,
    registry: Rc<RefCell<ScrollRegistry>>,
    on_scroll: Closure<dyn Fn()>,
    on_resize: Closure<dyn Fn()>,
    pending_refresh: Rc<RefCell<Option<Timeout>>>,
}

impl ScrollHost {
    pub fn attach(registry: ScrollRegistry) -> Result<Self, SetupError> {
        let window = web_sys::window().ok_or(SetupError::NoWindow)?;
        let registry = Rc::new(RefCell::new(registry));
        let pending_refresh: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

        let on_scroll = Closure::<dyn Fn()>::new({
            let registry = registry.clone();
            move || dispatch_current(&registry)
        });

        let on_resize = Closure::<dyn Fn()>::new({
            let registry = registry.clone();
            let pending_refresh = pending_refresh.clone();
            move || {
                let registry = registry.clone();
                let timeout = Timeout::new(animation::RESIZE_DEBOUNCE_MS, move || {
                    if let Ok(mut registry) = registry.try_borrow_mut() {
                        registry.refresh();
                    }
                    dispatch_current(&registry);
                });
                // Replacing the previous timeout cancels it.
                if let Ok(mut pending) = pending_refresh.try_borrow_mut() {
                    *pending = Some(timeout);
                }
            }
        });

        let host = Self {
            window,
            registry,
            on_scroll,
            on_resize,
            pending_refresh,
        };
        host.window
            .add_event_listener_with_callback("scroll", host.on_scroll.as_ref().unchecked_ref())?;
        host.window
            .add_event_listener_with_callback("resize", host.on_resize.as_ref().unchecked_ref())?;

        dispatch_current(&host.registry);
        log::info!(
            "Scroll animations attached: {:?}",
            host.registry.borrow().names()
        );
        Ok(host)
    }
}

fn dispatch_current(registry: &Rc<RefCell<ScrollRegistry>>) {
    let Some(offset) = scroll_offset() else {
        return;
    };
    if let Ok(mut registry) = registry.try_borrow_mut() {
        registry.dispatch(offset);
    }
}

impl Drop for ScrollHost {
    fn drop(&mut self) {
        for (event, callback) in [("scroll", &self.on_scroll), ("resize", &self.on_resize)] {
            if let Err(e) = self
                .window
                .remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            {
                log::warn!("Failed to remove {} listener: {:?}", event, e);
            }
        }
        if let Ok(mut pending) = self.pending_refresh.try_borrow_mut() {
            drop(pending.take());
        }
        if let Ok(mut registry) = self.registry.try_borrow_mut() {
            registry.teardown();
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::config::animation;
    use crate::scroll::behavior::PinnedSteps;
    use crate::scroll::visual::SubItemStyle;
    use crate::scroll::{hero_parallax, pinned_steps, register_or_skip};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn div() -> HtmlElement {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.create_element("div").ok())
            .and_then(|e| e.dyn_into::<HtmlElement>().ok())
            .expect("create div")
    }

    #[wasm_bindgen_test]
    fn html_element_receives_visual_state() {
        let element = div();
        element.apply_style(&SubItemStyle::channels().inactive());
        let style = element.style();
        assert_eq!(style.get_property_value("opacity").unwrap(), "0");
        assert!(style
            .get_property_value("transform")
            .unwrap()
            .contains("translateX(-20px)"));
    }

    #[wasm_bindgen_test]
    fn query_items_keeps_document_order() {
        let root = div();
        root.set_inner_html(r#"<p class="step" id="a"></p><p></p><p class="step" id="b"></p>"#);
        let items = query_items(&root, ".step").unwrap();
        let ids: Vec<String> = items.iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert!(query_one(&root, ".channel", "test").is_err());
    }

    #[wasm_bindgen_test]
    fn dropped_host_ignores_scroll_events() {
        let items: Vec<HtmlElement> = (0..3).map(|_| div()).collect();
        let range = PinRange::new(-2.0, -1.0).unwrap();
        let mut registry = ScrollRegistry::new();
        registry.register(Box::new(
            PinnedSteps::new("test", ".step", range, items.clone(), SubItemStyle::steps()).unwrap(),
        ));

        let host = ScrollHost::attach(registry).unwrap();
        assert_eq!(items[2].style().get_property_value("opacity").unwrap(), "1");
        drop(host);

        for item in &items {
            item.style().set_property("opacity", "0.5").unwrap();
        }
        let event = web_sys::Event::new("scroll").unwrap();
        web_sys::window().unwrap().dispatch_event(&event).unwrap();
        for item in &items {
            assert_eq!(item.style().get_property_value("opacity").unwrap(), "0.5");
        }
    }

    fn viewport_height() -> f64 {
        web_sys::window()
            .and_then(|w| w.inner_height().ok())
            .and_then(|h| h.as_f64())
            .unwrap()
    }

    #[wasm_bindgen_test]
    fn spacer_is_refitted_to_a_tall_section() {
        let body = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()).unwrap();
        let spacer = div();
        let section = div();
        section.set_class_name("pinned");
        section.style().set_property("height", "900px").unwrap();
        spacer.append_child(&section).unwrap();
        body.append_child(&spacer).unwrap();

        let pin_length = 1.5 * viewport_height();
        let range = DomAnchor::pinned(spacer.clone(), section, PinLength::Viewports(1.5))
            .measure()
            .unwrap();

        assert!((range.end() - range.start() - pin_length).abs() < 1e-6);
        let released_at = spacer.offset_height() as f64 - 900.0;
        assert!((released_at - pin_length).abs() <= 1.0);
        spacer.remove();
    }

    #[wasm_bindgen_test]
    fn hero_missing_a_layer_stays_static() {
        let hero = div();
        hero.set_inner_html(r#"<div id="phone-element"></div><div id="cloud-element"></div>"#);

        let result = hero_parallax("hero", Some(hero.clone()), &animation::PARALLAX_LAYERS);
        assert_eq!(
            result.as_ref().err(),
            Some(&SetupError::MissingElements {
                section: "hero",
                selector: "#calendar-element"
            })
        );

        let mut registry = ScrollRegistry::new();
        register_or_skip(
            &mut registry,
            "hero",
            hero_parallax("hero", Some(hero), &animation::PARALLAX_LAYERS),
        );
        assert!(registry.is_empty());
    }

    #[wasm_bindgen_test]
    fn unmounted_section_is_skipped() {
        let result = pinned_steps(
            "channels",
            None,
            ".channel",
            PinLength::Viewports(animation::CHANNELS_PIN_VIEWPORTS),
            SubItemStyle::channels(),
        );
        assert_eq!(result.as_ref().err(), Some(&SetupError::NotMounted("channels")));

        let mut registry = ScrollRegistry::new();
        register_or_skip(&mut registry, "channels", result);
        assert!(registry.is_empty());
        registry.dispatch(500.0);
    }
}
