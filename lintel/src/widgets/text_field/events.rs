//! Event handling for the TextField widget.

use crate::widgets::events::{EventResult, WidgetEvents};

use super::render::{clear_button_id, reveal_toggle_id};
use super::state::TextField;

impl WidgetEvents for TextField {
    fn on_activate(&self, element_id: &str) -> EventResult {
        let id = self.element_id();
        if element_id == clear_button_id(&id) {
            if !self.shows_clear_button() {
                return EventResult::Ignored;
            }
            return self.clear();
        }
        if element_id == reveal_toggle_id(&id) {
            if !self.shows_reveal_toggle() {
                return EventResult::Ignored;
            }
            return self.toggle_reveal();
        }
        EventResult::Ignored
    }

    fn on_text(&self, element_id: &str, text: &str) -> EventResult {
        if element_id != self.element_id() {
            return EventResult::Ignored;
        }
        self.input(text)
    }
}
