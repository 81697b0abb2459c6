//! Widget event handling types and traits.

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

/// Trait for widgets that react to interaction with elements of their
/// rendered tree.
///
/// Element IDs are the ones found on [`Node`](crate::Node)s produced by the
/// widget's `render()`. A host that hit-tests a click or routes typed text to
/// a focused element dispatches it through these methods.
///
/// Both methods default to `EventResult::Ignored`, so widgets only need to
/// implement the events they care about.
pub trait WidgetEvents {
    /// Handle a click or keyboard activation of an element.
    fn on_activate(&self, _element_id: &str) -> EventResult {
        EventResult::Ignored
    }

    /// Handle new text content for an input element.
    fn on_text(&self, _element_id: &str, _text: &str) -> EventResult {
        EventResult::Ignored
    }
}
