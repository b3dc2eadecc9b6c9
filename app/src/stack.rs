//! Ordered layer storage with separate layer and overlay regions.

use crate::layer::Layer;

/// Ordered collection of layers with an overlay region on top.
///
/// The stack stores regular layers first and overlays after them in a single
/// vector, split by a boundary index. `push_layer` inserts at the boundary so
/// layers keep insertion order among themselves; `push_overlay` appends at the
/// very end. Plain iteration therefore yields layers before overlays (the
/// update order), and reverse iteration yields overlays before layers (the
/// event order).
///
/// The stack owns its layers. Pushing calls [`Layer::on_attach`] once;
/// popping returns the layer without detaching it; dropping or clearing the
/// stack detaches every remaining layer from the top down.
#[derive(Default)]
pub struct LayerStack {
    layers: Vec<Box<dyn Layer>>,
    boundary: usize,
}

impl LayerStack {
    /// Create an empty layer stack.
    pub fn new() -> Self {
        Self {
            layers: Vec::new(),
            boundary: 0,
        }
    }

    /// Push a layer after all existing layers but below every overlay.
    ///
    /// Calls [`Layer::on_attach`] on the pushed layer.
    pub fn push_layer(&mut self, layer: Box<dyn Layer>) {
        self.layers.insert(self.boundary, layer);
        self.layers[self.boundary].on_attach();
        self.boundary += 1;
    }

    /// Push an overlay above everything currently on the stack.
    ///
    /// Calls [`Layer::on_attach`] on the pushed overlay.
    pub fn push_overlay(&mut self, overlay: Box<dyn Layer>) {
        self.layers.push(overlay);
        let index = self.layers.len() - 1;
        self.layers[index].on_attach();
    }

    /// Remove the first layer with the given name from the layer region.
    ///
    /// Returns the layer without calling [`Layer::on_detach`]; ownership
    /// passes back to the caller. Returns `None` if no layer matches.
    pub fn pop_layer(&mut self, name: &str) -> Option<Box<dyn Layer>> {
        let index = self.layers[..self.boundary]
            .iter()
            .position(|layer| layer.name() == name)?;
        self.boundary -= 1;
        Some(self.layers.remove(index))
    }

    /// Remove the first overlay with the given name from the overlay region.
    ///
    /// Returns the overlay without calling [`Layer::on_detach`]; ownership
    /// passes back to the caller. Returns `None` if no overlay matches.
    pub fn pop_overlay(&mut self, name: &str) -> Option<Box<dyn Layer>> {
        let index = self.layers[self.boundary..]
            .iter()
            .position(|overlay| overlay.name() == name)?;
        Some(self.layers.remove(self.boundary + index))
    }

    /// Total number of layers and overlays on the stack.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Check whether the stack holds no layers at all.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Number of regular layers (below the overlay region).
    pub fn layer_count(&self) -> usize {
        self.boundary
    }

    /// Number of overlays.
    pub fn overlay_count(&self) -> usize {
        self.layers.len() - self.boundary
    }

    /// Iterate layers in update order: layers bottom-up, then overlays.
    ///
    /// Reverse the iterator for event order (overlays first, then layers
    /// top-down).
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Box<dyn Layer>> {
        self.layers.iter_mut()
    }

    /// Detach and drop every layer, most recently pushed first.
    pub fn clear(&mut self) {
        while let Some(mut layer) = self.layers.pop() {
            layer.on_detach();
        }
        self.boundary = 0;
    }
}

impl Drop for LayerStack {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::RefCell;
    use std::rc::Rc;

    type Journal = Rc<RefCell<Vec<String>>>;

    struct TestLayer {
        name: String,
        journal: Journal,
    }

    impl TestLayer {
        fn boxed(name: &str, journal: &Journal) -> Box<Self> {
            Box::new(Self {
                name: name.to_string(),
                journal: journal.clone(),
            })
        }

        fn record(&self, what: &str) {
            self.journal.borrow_mut().push(format!("{} {}", self.name, what));
        }
    }

    impl Layer for TestLayer {
        fn name(&self) -> &str {
            &self.name
        }

        fn on_attach(&mut self) {
            self.record("attach");
        }

        fn on_detach(&mut self) {
            self.record("detach");
        }
    }

    fn names(stack: &mut LayerStack) -> Vec<String> {
        stack.iter_mut().map(|layer| layer.name().to_string()).collect()
    }

    #[test]
    fn test_forward_order_layers_before_overlays() {
        let journal = Journal::default();
        let mut stack = LayerStack::new();
        stack.push_layer(TestLayer::boxed("l1", &journal));
        stack.push_overlay(TestLayer::boxed("o1", &journal));
        stack.push_layer(TestLayer::boxed("l2", &journal));

        assert_eq!(names(&mut stack), ["l1", "l2", "o1"]);
        assert_eq!(stack.layer_count(), 2);
        assert_eq!(stack.overlay_count(), 1);
    }

    #[test]
    fn test_reverse_order_overlays_first() {
        let journal = Journal::default();
        let mut stack = LayerStack::new();
        stack.push_layer(TestLayer::boxed("l1", &journal));
        stack.push_overlay(TestLayer::boxed("o1", &journal));
        stack.push_layer(TestLayer::boxed("l2", &journal));

        let reversed: Vec<String> = stack
            .iter_mut()
            .rev()
            .map(|layer| layer.name().to_string())
            .collect();
        assert_eq!(reversed, ["o1", "l2", "l1"]);
    }

    #[test]
    fn test_push_attaches_exactly_once() {
        let journal = Journal::default();
        let mut stack = LayerStack::new();
        stack.push_layer(TestLayer::boxed("a", &journal));
        stack.push_overlay(TestLayer::boxed("b", &journal));

        assert_eq!(*journal.borrow(), ["a attach", "b attach"]);
    }

    #[test]
    fn test_pop_returns_layer_without_detaching() {
        let journal = Journal::default();
        let mut stack = LayerStack::new();
        stack.push_layer(TestLayer::boxed("a", &journal));
        stack.push_layer(TestLayer::boxed("b", &journal));

        let popped = stack.pop_layer("a").unwrap();
        assert_eq!(popped.name(), "a");
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.layer_count(), 1);
        assert!(!journal.borrow().iter().any(|entry| entry.ends_with("detach")));
    }

    #[test]
    fn test_pop_missing_is_a_noop() {
        let journal = Journal::default();
        let mut stack = LayerStack::new();
        stack.push_layer(TestLayer::boxed("a", &journal));
        stack.push_overlay(TestLayer::boxed("b", &journal));

        assert!(stack.pop_layer("ghost").is_none());
        assert!(stack.pop_overlay("ghost").is_none());
        assert_eq!(names(&mut stack), ["a", "b"]);
    }

    #[test]
    fn test_pop_searches_only_its_region() {
        let journal = Journal::default();
        let mut stack = LayerStack::new();
        stack.push_layer(TestLayer::boxed("hud", &journal));
        stack.push_overlay(TestLayer::boxed("hud", &journal));

        // Same name in both regions: pop_overlay must take the overlay.
        assert!(stack.pop_overlay("hud").is_some());
        assert_eq!(stack.layer_count(), 1);
        assert_eq!(stack.overlay_count(), 0);

        assert!(stack.pop_overlay("hud").is_none());
        assert!(stack.pop_layer("hud").is_some());
        assert!(stack.is_empty());
    }

    #[test]
    fn test_clear_detaches_top_down() {
        let journal = Journal::default();
        let mut stack = LayerStack::new();
        stack.push_layer(TestLayer::boxed("l1", &journal));
        stack.push_layer(TestLayer::boxed("l2", &journal));
        stack.push_overlay(TestLayer::boxed("o1", &journal));

        stack.clear();
        assert!(stack.is_empty());

        let detaches: Vec<String> = journal
            .borrow()
            .iter()
            .filter(|entry| entry.ends_with("detach"))
            .cloned()
            .collect();
        assert_eq!(detaches, ["o1 detach", "l2 detach", "l1 detach"]);
    }

    #[test]
    fn test_drop_detaches_remaining_layers() {
        let journal = Journal::default();
        {
            let mut stack = LayerStack::new();
            stack.push_layer(TestLayer::boxed("a", &journal));
            stack.push_overlay(TestLayer::boxed("b", &journal));
        }

        assert_eq!(
            *journal.borrow(),
            ["a attach", "b attach", "b detach", "a detach"]
        );
    }
}
