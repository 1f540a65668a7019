use super::behavior::ScrollBehavior;

/// The scroll behaviors of one mounted page.
///
/// Created when the page mounts and handed to each section explicitly.
/// After [`teardown`](Self::teardown) nothing can be registered or
/// dispatched anymore.
#[derive(Default)]
pub struct ScrollRegistry {
    behaviors: Vec<Box<dyn ScrollBehavior>>,
    torn_down: bool,
}

impl ScrollRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, behavior: Box<dyn ScrollBehavior>) {
        if self.torn_down {
            log::warn!("Ignoring {} registered after teardown", behavior.name());
            return;
        }
        log::debug!("Registered scroll behavior {}", behavior.name());
        self.behaviors.push(behavior);
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.behaviors.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.behaviors.is_empty()
    }

    #[cfg(test)]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.behaviors.iter().map(|b| b.name()).collect()
    }

    pub fn dispatch(&mut self, scroll_offset: f64) {
        for behavior in self.behaviors.iter_mut() {
            behavior.on_scroll(scroll_offset);
        }
    }

    pub fn refresh(&mut self) {
        for behavior in self.behaviors.iter_mut() {
            behavior.refresh();
        }
    }

    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        log::debug!("Tearing down {} scroll behaviors", self.behaviors.len());
        self.behaviors.clear();
        self.torn_down = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::behavior::PinnedSteps;
    use crate::scroll::progress::PinRange;
    use crate::scroll::visual::tests::FakeElement;
    use crate::scroll::visual::SubItemStyle;

    fn steps(name: &'static str, items: &[FakeElement]) -> Box<dyn ScrollBehavior> {
        let range = PinRange::new(0.0, 300.0).unwrap();
        Box::new(PinnedSteps::new(name, ".step", range, items.to_vec(), SubItemStyle::steps()).unwrap())
    }

    #[test]
    fn dispatch_reaches_every_section() {
        let a: Vec<FakeElement> = (0..3).map(|_| FakeElement::default()).collect();
        let b: Vec<FakeElement> = (0..3).map(|_| FakeElement::default()).collect();
        let mut registry = ScrollRegistry::new();
        registry.register(steps("how-it-works", &a));
        registry.register(steps("channels", &b));
        assert_eq!(registry.names(), vec!["how-it-works", "channels"]);

        registry.dispatch(250.0);
        assert_eq!(a[2].last().unwrap().opacity, 1.0);
        assert_eq!(b[2].last().unwrap().opacity, 1.0);
    }

    #[test]
    fn nothing_changes_after_teardown() {
        let items: Vec<FakeElement> = (0..3).map(|_| FakeElement::default()).collect();
        let mut registry = ScrollRegistry::new();
        registry.register(steps("how-it-works", &items));
        registry.dispatch(0.0);
        let before: Vec<_> = items.iter().map(FakeElement::last).collect();
        let writes: Vec<_> = items.iter().map(|e| e.writes.get()).collect();

        registry.teardown();
        assert!(registry.is_torn_down());
        assert!(registry.is_empty());

        registry.dispatch(299.0);
        registry.refresh();
        let after: Vec<_> = items.iter().map(FakeElement::last).collect();
        assert_eq!(before, after);
        assert_eq!(writes, items.iter().map(|e| e.writes.get()).collect::<Vec<_>>());
    }

    #[test]
    fn registering_after_teardown_is_ignored() {
        let items: Vec<FakeElement> = (0..2).map(|_| FakeElement::default()).collect();
        let mut registry = ScrollRegistry::new();
        registry.teardown();
        registry.register(steps("late", &items));
        assert_eq!(registry.len(), 0);
        registry.dispatch(100.0);
        assert!(items[0].last().is_none());
    }
}
