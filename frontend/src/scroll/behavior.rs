use std::num::NonZeroUsize;

use super::error::SetupError;
use super::progress::{Anchor, Progress, SectionTracker};
use super::selector::StepSelector;
use super::visual::{Axis, Motion, Stylable, SubItemStyle, VisualState, VisualStateApplier};
use crate::config::animation;

/// A scroll-linked animation owned by a [`ScrollRegistry`](super::ScrollRegistry).
pub trait ScrollBehavior {
    fn name(&self) -> &'static str;

    /// Called after layout changes, e.g. a window resize.
    fn refresh(&mut self);

    /// Called with the window's vertical scroll offset on every scroll
    /// notification.
    fn on_scroll(&mut self, scroll_offset: f64);
}

/// A pinned section that cycles through its sub-items as it is scrolled.
pub struct PinnedSteps<A, T> {
    tracker: SectionTracker<A>,
    selector: StepSelector,
    applier: VisualStateApplier<T>,
}

impl<A: Anchor, T: Stylable> PinnedSteps<A, T> {
    pub fn new(
        name: &'static str,
        selector_hint: &'static str,
        anchor: A,
        items: Vec<T>,
        style: SubItemStyle,
    ) -> Result<Self, SetupError> {
        let count = NonZeroUsize::new(items.len()).ok_or(SetupError::MissingElements {
            section: name,
            selector: selector_hint,
        })?;
        Ok(Self {
            tracker: SectionTracker::new(name, anchor)?,
            selector: StepSelector::new(count),
            applier: VisualStateApplier::new(items, style),
        })
    }
}

impl<A: Anchor, T: Stylable> ScrollBehavior for PinnedSteps<A, T> {
    fn name(&self) -> &'static str {
        self.tracker.name()
    }

    fn refresh(&mut self) {
        self.tracker.refresh();
    }

    fn on_scroll(&mut self, scroll_offset: f64) {
        if let Some(progress) = self.tracker.update(scroll_offset) {
            let index = self.selector.select(progress);
            self.applier.apply(index);
        }
    }
}

/// One decorative element moved by the parallax driver.
pub struct ParallaxLayer<T> {
    pub element: T,
    /// Vertical translation at full progress. Negative moves up.
    pub travel_px: f64,
}

impl<T> ParallaxLayer<T> {
    pub fn state_at(&self, progress: Progress) -> VisualState {
        parallax_state(self.travel_px, progress)
    }
}

pub fn parallax_state(travel_px: f64, progress: Progress) -> VisualState {
    VisualState {
        opacity: 1.0,
        axis: Axis::Vertical,
        offset_px: travel_px * progress.value(),
        scale: 1.0,
        motion: Motion::ease_out(animation::PARALLAX_SCRUB_MS),
    }
}

/// Moves hero decorations at different rates through the hero region.
pub struct Parallax<A, T> {
    tracker: SectionTracker<A>,
    layers: Vec<ParallaxLayer<T>>,
}

impl<A: Anchor, T: Stylable> Parallax<A, T> {
    pub fn new(
        name: &'static str,
        anchor: A,
        layers: Vec<ParallaxLayer<T>>,
    ) -> Result<Self, SetupError> {
        if layers.is_empty() {
            return Err(SetupError::MissingElements {
                section: name,
                selector: "parallax layers",
            });
        }
        Ok(Self {
            tracker: SectionTracker::new(name, anchor)?,
            layers,
        })
    }
}

impl<A: Anchor, T: Stylable> ScrollBehavior for Parallax<A, T> {
    fn name(&self) -> &'static str {
        self.tracker.name()
    }

    fn refresh(&mut self) {
        self.tracker.refresh();
    }

    fn on_scroll(&mut self, scroll_offset: f64) {
        if let Some(progress) = self.tracker.update(scroll_offset) {
            for layer in &self.layers {
                layer.element.apply_style(&layer.state_at(progress));
            }
        }
    }
}

pub fn reveal_state(progress: Progress) -> VisualState {
    let p = progress.value();
    VisualState {
        opacity: (p * 2.0).min(1.0),
        axis: Axis::Vertical,
        offset_px: 0.0,
        scale: 1.0 + p * animation::REVEAL_SCALE_GAIN,
        motion: Motion::ease_out(animation::REVEAL_DURATION_MS),
    }
}

/// Grows and fades in a single visual while its section is pinned.
pub struct ProgressReveal<A, T> {
    tracker: SectionTracker<A>,
    target: T,
}

impl<A: Anchor, T: Stylable> ProgressReveal<A, T> {
    pub fn new(name: &'static str, anchor: A, target: T) -> Result<Self, SetupError> {
        Ok(Self {
            tracker: SectionTracker::new(name, anchor)?,
            target,
        })
    }
}

impl<A: Anchor, T: Stylable> ScrollBehavior for ProgressReveal<A, T> {
    fn name(&self) -> &'static str {
        self.tracker.name()
    }

    fn refresh(&mut self) {
        self.tracker.refresh();
    }

    fn on_scroll(&mut self, scroll_offset: f64) {
        if let Some(progress) = self.tracker.update(scroll_offset) {
            self.target.apply_style(&reveal_state(progress));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::progress::PinRange;
    use crate::scroll::visual::tests::FakeElement;

    fn active_of(items: &[FakeElement]) -> Vec<usize> {
        items
            .iter()
            .enumerate()
            .filter(|(_, e)| e.last().map(|s| s.opacity) == Some(1.0))
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn pinned_steps_follow_scroll() {
        let items: Vec<FakeElement> = (0..3).map(|_| FakeElement::default()).collect();
        let range = PinRange::new(1000.0, 2000.0).unwrap();
        let mut steps =
            PinnedSteps::new("steps", ".step", range, items.clone(), SubItemStyle::steps()).unwrap();

        steps.on_scroll(0.0);
        assert_eq!(active_of(&items), vec![0]);
        steps.on_scroll(1340.0);
        assert_eq!(active_of(&items), vec![1]);
        steps.on_scroll(1670.0);
        assert_eq!(active_of(&items), vec![2]);
        steps.on_scroll(5000.0);
        assert_eq!(active_of(&items), vec![2]);
        steps.on_scroll(1100.0);
        assert_eq!(active_of(&items), vec![0]);
    }

    #[test]
    fn pinned_steps_need_items() {
        let range = PinRange::new(0.0, 1.0).unwrap();
        let result = PinnedSteps::<_, FakeElement>::new(
            "empty",
            ".channel",
            range,
            Vec::new(),
            SubItemStyle::channels(),
        );
        assert_eq!(
            result.err(),
            Some(SetupError::MissingElements {
                section: "empty",
                selector: ".channel"
            })
        );
    }

    #[test]
    fn parallax_layers_move_at_their_own_rates() {
        let phone = FakeElement::default();
        let calendar = FakeElement::default();
        let layers = vec![
            ParallaxLayer { element: phone.clone(), travel_px: -50.0 },
            ParallaxLayer { element: calendar.clone(), travel_px: -10.0 },
        ];
        let range = PinRange::new(0.0, 800.0).unwrap();
        let mut parallax = Parallax::new("hero", range, layers).unwrap();

        parallax.on_scroll(400.0);
        assert_eq!(phone.last().unwrap().offset_px, -25.0);
        assert_eq!(calendar.last().unwrap().offset_px, -5.0);

        parallax.on_scroll(10_000.0);
        assert_eq!(phone.last().unwrap().offset_px, -50.0);

        parallax.on_scroll(-100.0);
        assert_eq!(phone.last().unwrap().offset_px, 0.0);
        assert_eq!(calendar.last().unwrap().offset_px, 0.0);
    }

    #[test]
    fn parallax_is_monotonic() {
        let mut previous = 0.0;
        for i in 0..=100 {
            let offset = parallax_state(-30.0, Progress::new(i as f64 / 100.0)).offset_px;
            assert!(offset <= previous);
            previous = offset;
        }
    }

    #[test]
    fn reveal_scales_and_fades_in() {
        let start = reveal_state(Progress::START);
        assert_eq!(start.opacity, 0.0);
        assert_eq!(start.scale, 1.0);

        let half = reveal_state(Progress::new(0.5));
        assert_eq!(half.opacity, 1.0);
        assert!((half.scale - 1.1).abs() < 1e-9);

        let quarter = reveal_state(Progress::new(0.25));
        assert_eq!(quarter.opacity, 0.5);

        let end = reveal_state(Progress::END);
        assert!((end.scale - 1.2).abs() < 1e-9);
    }

    #[test]
    fn reveal_writes_to_target() {
        let target = FakeElement::default();
        let range = PinRange::new(0.0, 100.0).unwrap();
        let mut reveal = ProgressReveal::new("integrations", range, target.clone()).unwrap();
        reveal.on_scroll(100.0);
        assert_eq!(target.last().unwrap().opacity, 1.0);
        reveal.on_scroll(100.0);
        assert_eq!(target.writes.get(), 1);
    }
}
