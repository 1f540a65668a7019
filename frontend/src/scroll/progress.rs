use super::error::SetupError;

/// Scroll offsets between which a section is held on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinRange {
    start: f64,
    end: f64,
}

impl PinRange {
    /// Creates a pin range. `end` must be strictly greater than `start`
    /// so that progress never divides by zero.
    pub fn new(start: f64, end: f64) -> Result<Self, SetupError> {
        if !start.is_finite() || !end.is_finite() || end <= start {
            return Err(SetupError::InvalidPinRange { start, end });
        }
        Ok(Self { start, end })
    }

    #[cfg(test)]
    pub fn start(&self) -> f64 {
        self.start
    }

    #[cfg(test)]
    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn progress(&self, scroll_offset: f64) -> Progress {
        Progress::new((scroll_offset - self.start) / (self.end - self.start))
    }

    pub fn state(&self, scroll_offset: f64) -> PinState {
        if scroll_offset < self.start {
            PinState::Before
        } else if scroll_offset > self.end {
            PinState::After
        } else {
            PinState::Pinned
        }
    }
}

/// Normalized position inside a pin range, always within [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Progress(f64);

impl Progress {
    pub const START: Progress = Progress(0.0);
    #[cfg(test)]
    pub const END: Progress = Progress(1.0);

    /// Clamps `value` into [0, 1]. NaN collapses to the start.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::START;
        }
        Progress(value.clamp(0.0, 1.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// Heights of a sticky section and the spacer that holds it.
///
/// A sticky section scrolls away once the bottom of its spacer reaches the
/// bottom of the section, so the spacer must be exactly `pin_length` taller
/// than the section for the visual pin to last the whole range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinSpacing {
    pub section_height: f64,
    pub pin_length: f64,
}

impl PinSpacing {
    pub fn spacer_height(&self) -> f64 {
        self.section_height + self.pin_length
    }

    /// Distance past the spacer's top at which the section stops sticking.
    #[cfg(test)]
    pub fn release_offset(&self) -> f64 {
        self.spacer_height() - self.section_height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinState {
    Before,
    Pinned,
    After,
}

/// Something that can report where a section's pin range lies right now.
///
/// DOM sections measure their geometry on every call; fixed ranges simply
/// return themselves.
pub trait Anchor {
    fn measure(&self) -> Result<PinRange, SetupError>;
}

impl Anchor for PinRange {
    fn measure(&self) -> Result<PinRange, SetupError> {
        Ok(*self)
    }
}

/// Turns scroll offsets into progress for one section.
///
/// `update` only reports progress when it changed since the previous call,
/// so a section sees one event per distinct position and exactly one
/// clamped event when a scroll jumps past either end of the range.
pub struct SectionTracker<A> {
    name: &'static str,
    anchor: A,
    range: PinRange,
    last: Option<Progress>,
    pin_state: Option<PinState>,
}

impl<A: Anchor> SectionTracker<A> {
    pub fn new(name: &'static str, anchor: A) -> Result<Self, SetupError> {
        let range = anchor.measure()?;
        Ok(Self {
            name,
            anchor,
            range,
            last: None,
            pin_state: None,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    #[cfg(test)]
    pub fn range(&self) -> PinRange {
        self.range
    }

    /// Re-measures the pin range. A failed measurement keeps the previous
    /// range. The next `update` always reports progress again.
    pub fn refresh(&mut self) {
        match self.anchor.measure() {
            Ok(range) => self.range = range,
            Err(e) => log::warn!("Keeping old pin range for {}: {}", self.name, e),
        }
        self.last = None;
    }

    pub fn update(&mut self, scroll_offset: f64) -> Option<Progress> {
        let state = self.range.state(scroll_offset);
        if self.pin_state != Some(state) {
            log::debug!("Section {} is now {:?}", self.name, state);
            self.pin_state = Some(state);
        }

        let progress = self.range.progress(scroll_offset);
        if self.last == Some(progress) {
            return None;
        }
        self.last = Some(progress);
        Some(progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn rejects_empty_and_reversed_ranges() {
        assert!(PinRange::new(100.0, 100.0).is_err());
        assert!(PinRange::new(200.0, 100.0).is_err());
        assert!(PinRange::new(0.0, f64::INFINITY).is_err());
        assert!(PinRange::new(f64::NAN, 10.0).is_err());
        assert!(PinRange::new(0.0, 1.0).is_ok());
    }

    #[test]
    fn progress_is_clamped_outside_the_range() {
        let range = PinRange::new(1000.0, 2500.0).unwrap();
        assert_eq!(range.progress(0.0), Progress::START);
        assert_eq!(range.progress(999.0), Progress::START);
        assert_eq!(range.progress(1000.0), Progress::START);
        assert_eq!(range.progress(1750.0).value(), 0.5);
        assert_eq!(range.progress(2500.0), Progress::END);
        assert_eq!(range.progress(9000.0), Progress::END);
    }

    #[test]
    fn pin_state_follows_offset() {
        let range = PinRange::new(10.0, 20.0).unwrap();
        assert_eq!(range.state(5.0), PinState::Before);
        assert_eq!(range.state(10.0), PinState::Pinned);
        assert_eq!(range.state(20.0), PinState::Pinned);
        assert_eq!(range.state(21.0), PinState::After);
    }

    #[test]
    fn pin_lasts_until_range_end_for_any_section_height() {
        let start = 2400.0;
        let pin_length = 1.5 * 750.0;
        for section_height in [600.0, 750.0, 890.0, 2000.0] {
            let spacing = PinSpacing { section_height, pin_length };
            let range = PinRange::new(start, start + pin_length).unwrap();
            assert_eq!(start + spacing.release_offset(), range.end());
            assert_eq!(spacing.spacer_height(), section_height + 1125.0);
        }
    }

    #[test]
    fn nan_progress_collapses_to_start() {
        assert_eq!(Progress::new(f64::NAN), Progress::START);
        assert_eq!(Progress::new(-3.0), Progress::START);
        assert_eq!(Progress::new(7.0), Progress::END);
    }

    #[test]
    fn tracker_reports_only_changes() {
        let range = PinRange::new(0.0, 100.0).unwrap();
        let mut tracker = SectionTracker::new("test", range).unwrap();

        assert_eq!(tracker.update(-50.0), Some(Progress::START));
        assert_eq!(tracker.update(-10.0), None);
        assert_eq!(tracker.update(25.0).map(Progress::value), Some(0.25));
        assert_eq!(tracker.update(25.0), None);
        assert_eq!(tracker.update(500.0), Some(Progress::END));
        assert_eq!(tracker.update(900.0), None);
    }

    struct ShiftingAnchor {
        start: Cell<f64>,
    }

    impl Anchor for ShiftingAnchor {
        fn measure(&self) -> Result<PinRange, SetupError> {
            let start = self.start.get();
            PinRange::new(start, start + 100.0)
        }
    }

    #[test]
    fn refresh_remeasures_and_reemits() {
        let anchor = ShiftingAnchor { start: Cell::new(0.0) };
        let mut tracker = SectionTracker::new("shifting", anchor).unwrap();
        assert_eq!(tracker.update(50.0).map(Progress::value), Some(0.5));

        tracker.anchor.start.set(50.0);
        tracker.refresh();
        assert_eq!(tracker.range().start(), 50.0);
        assert_eq!(tracker.update(50.0), Some(Progress::START));
    }

    #[test]
    fn failed_refresh_keeps_previous_range() {
        let anchor = ShiftingAnchor { start: Cell::new(0.0) };
        let mut tracker = SectionTracker::new("shifting", anchor).unwrap();
        tracker.anchor.start.set(f64::NAN);
        tracker.refresh();
        assert_eq!(tracker.range().start(), 0.0);
        assert_eq!(tracker.range().end(), 100.0);
    }
}
