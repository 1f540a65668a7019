//! Scroll-linked section animations.
//!
//! A section measures its pin range from the page, turns the window's scroll
//! offset into progress through that range and maps progress to a visual
//! state: one visible sub-item out of N, a parallax offset, or a reveal.
//! The page owns a [`ScrollRegistry`] of these behaviors and binds it to the
//! window through a [`ScrollHost`].

pub mod behavior;
pub mod dom;
pub mod error;
pub mod progress;
pub mod registry;
pub mod selector;
pub mod visual;

use web_sys::HtmlElement;

use behavior::{Parallax, ParallaxLayer, PinnedSteps, ProgressReveal, ScrollBehavior};
use dom::DomAnchor;
use error::SetupError;

pub use behavior::reveal_state;
pub use dom::{PinLength, ScrollHost};
pub use progress::Progress;
pub use registry::ScrollRegistry;
pub use visual::SubItemStyle;

/// Class of the sticky section inside a pin spacer.
pub const PINNED_SELECTOR: &str = ".pinned";

/// Adds the behavior to the registry, or logs why the section stays static.
pub fn register_or_skip(
    registry: &mut ScrollRegistry,
    name: &'static str,
    behavior: Result<Box<dyn ScrollBehavior>, SetupError>,
) {
    match behavior {
        Ok(behavior) => registry.register(behavior),
        Err(e @ (SetupError::Js(_) | SetupError::NoWindow)) => {
            log::warn!("Skipping scroll animation for {}: {}", name, e)
        }
        Err(e) => log::debug!("Skipping scroll animation for {}: {}", name, e),
    }
}

fn pinned_anchor(
    name: &'static str,
    spacer: HtmlElement,
    length: PinLength,
) -> Result<DomAnchor, SetupError> {
    let section = dom::query_one(&spacer, PINNED_SELECTOR, name)?;
    Ok(DomAnchor::pinned(spacer, section, length))
}

/// A pinned section whose `selector` children are shown one at a time.
/// `spacer` is the element wrapping the sticky section.
pub fn pinned_steps(
    name: &'static str,
    spacer: Option<HtmlElement>,
    selector: &'static str,
    length: PinLength,
    style: SubItemStyle,
) -> Result<Box<dyn ScrollBehavior>, SetupError> {
    let spacer = spacer.ok_or(SetupError::NotMounted(name))?;
    let items = dom::query_items(&spacer, selector)?;
    let anchor = pinned_anchor(name, spacer, length)?;
    Ok(Box::new(PinnedSteps::new(name, selector, anchor, items, style)?))
}

/// Parallax over the hero region. All layers must be present.
pub fn hero_parallax(
    name: &'static str,
    hero: Option<HtmlElement>,
    layers: &[(&'static str, f64)],
) -> Result<Box<dyn ScrollBehavior>, SetupError> {
    let hero = hero.ok_or(SetupError::NotMounted(name))?;
    let layers = layers
        .iter()
        .map(|&(selector, travel_px)| {
            dom::query_one(&hero, selector, name).map(|element| ParallaxLayer { element, travel_px })
        })
        .collect::<Result<Vec<_>, _>>()?;
    let anchor = DomAnchor::new(hero, PinLength::ElementHeight);
    Ok(Box::new(Parallax::new(name, anchor, layers)?))
}

/// A pinned section whose `selector` child grows in with progress.
pub fn progress_reveal(
    name: &'static str,
    spacer: Option<HtmlElement>,
    selector: &'static str,
    length: PinLength,
) -> Result<Box<dyn ScrollBehavior>, SetupError> {
    let spacer = spacer.ok_or(SetupError::NotMounted(name))?;
    let target = dom::query_one(&spacer, selector, name)?;
    let anchor = pinned_anchor(name, spacer, length)?;
    Ok(Box::new(ProgressReveal::new(name, anchor, target)?))
}
