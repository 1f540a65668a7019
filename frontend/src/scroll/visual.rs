use crate::config::animation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Horizontal,
}

impl Axis {
    fn translate(self) -> &'static str {
        match self {
            Axis::Vertical => "translateY",
            Axis::Horizontal => "translateX",
        }
    }
}

/// Cubic ease-out.
const EASE_OUT: &str = "cubic-bezier(0.33, 1, 0.68, 1)";

/// An ease-out transition of opacity and transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub duration_ms: u32,
}

impl Motion {
    pub const fn ease_out(duration_ms: u32) -> Self {
        Self { duration_ms }
    }

    fn css(&self) -> String {
        format!(
            "opacity {ms}ms {e}, transform {ms}ms {e}",
            ms = self.duration_ms,
            e = EASE_OUT
        )
    }
}

/// What an animated element should look like once its transition settles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub opacity: f64,
    pub axis: Axis,
    pub offset_px: f64,
    pub scale: f64,
    pub motion: Motion,
}

impl VisualState {
    pub fn properties(&self) -> [(&'static str, String); 3] {
        [
            ("opacity", format!("{}", self.opacity)),
            (
                "transform",
                format!(
                    "{}({}px) scale({})",
                    self.axis.translate(),
                    self.offset_px,
                    self.scale
                ),
            ),
            ("transition", self.motion.css()),
        ]
    }

    /// Inline `style` attribute for the first render, before any scroll
    /// event has been dispatched.
    pub fn to_css(&self) -> String {
        self.properties()
            .iter()
            .map(|(name, value)| format!("{}: {};", name, value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Target that a visual state can be written to.
pub trait Stylable {
    fn apply_style(&self, state: &VisualState);
}

/// How the sub-items of one section look when active and inactive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubItemStyle {
    pub axis: Axis,
    /// Offset of inactive items. Never zero.
    pub inactive_offset_px: f64,
    pub motion: Motion,
}

impl SubItemStyle {
    pub const fn steps() -> Self {
        Self {
            axis: Axis::Vertical,
            inactive_offset_px: animation::STEP_OFFSET_PX,
            motion: Motion::ease_out(animation::SWAP_DURATION_MS),
        }
    }

    pub const fn channels() -> Self {
        Self {
            axis: Axis::Horizontal,
            inactive_offset_px: animation::CHANNEL_OFFSET_PX,
            motion: Motion::ease_out(animation::SWAP_DURATION_MS),
        }
    }

    pub fn active(&self) -> VisualState {
        VisualState {
            opacity: 1.0,
            axis: self.axis,
            offset_px: 0.0,
            scale: 1.0,
            motion: self.motion,
        }
    }

    pub fn inactive(&self) -> VisualState {
        VisualState {
            opacity: 0.0,
            offset_px: self.inactive_offset_px,
            ..self.active()
        }
    }

    pub fn for_item(&self, index: usize, active_index: usize) -> VisualState {
        if index == active_index {
            self.active()
        } else {
            self.inactive()
        }
    }
}

/// Shows exactly one sub-item of a section and hides the rest.
pub struct VisualStateApplier<T> {
    items: Vec<T>,
    style: SubItemStyle,
    current: Option<usize>,
}

impl<T: Stylable> VisualStateApplier<T> {
    pub fn new(items: Vec<T>, style: SubItemStyle) -> Self {
        Self {
            items,
            style,
            current: None,
        }
    }

    #[cfg(test)]
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Writes the active state to `active_index` and the inactive state to
    /// every other item. Re-applying the current index writes nothing.
    pub fn apply(&mut self, active_index: usize) {
        if self.current == Some(active_index) {
            return;
        }
        for (i, item) in self.items.iter().enumerate() {
            item.apply_style(&self.style.for_item(i, active_index));
        }
        self.current = Some(active_index);
    }
}
