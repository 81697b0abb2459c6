use std::sync::{Arc, Mutex};

use lintel::widgets::WidgetEvents;
use lintel::widgets::text_field::{clear_button_id, reveal_toggle_id};
use lintel::{ChangeEvent, EventResult, InputType, Node, TextField};

fn recording(field: TextField) -> (TextField, Arc<Mutex<Vec<ChangeEvent>>>) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    let field = field.on_change(move |event| sink.lock().unwrap().push(event.clone()));
    (field, events)
}

fn values(events: &Mutex<Vec<ChangeEvent>>) -> Vec<String> {
    events.lock().unwrap().iter().map(|e| e.value.clone()).collect()
}

fn input_node(field: &TextField) -> Node {
    field
        .render()
        .find(&field.element_id())
        .cloned()
        .unwrap_or_default()
}

// ============================================================================
// Value mirroring
// ============================================================================

#[test]
fn test_caller_controlled_shows_supplied_value() {
    let field = TextField::new().value("abc");

    assert!(!field.is_self_managed());
    assert_eq!(field.input("abcd"), EventResult::Consumed);
    assert_eq!(field.displayed_value(), "abc");
    assert_eq!(field.mirror(), "abcd");

    field.set_value("xyz");
    assert_eq!(field.displayed_value(), "xyz");
}

#[test]
fn test_self_managed_type_then_clear() {
    let (field, events) = recording(TextField::new().clearable(true));

    assert!(field.is_self_managed());
    field.type_char('x');
    assert_eq!(field.displayed_value(), "x");

    field.clear();
    assert_eq!(field.displayed_value(), "");
    assert_eq!(values(&events), vec!["x", ""]);
}

#[test]
fn test_set_value_leaves_mirror() {
    let (field, _) = recording(TextField::new().value("seed"));

    field.set_value("other");

    assert_eq!(field.supplied_value(), "other");
    assert_eq!(field.displayed_value(), "seed");
}

#[test]
fn test_backspace() {
    let (field, events) = recording(TextField::new().value("ab"));

    field.backspace();
    field.backspace();
    assert_eq!(field.backspace(), EventResult::Ignored);

    assert_eq!(values(&events), vec!["a", ""]);
}

#[test]
fn test_change_event_carries_id() {
    let (field, events) = recording(TextField::new().label("User Name"));

    field.input("bob");

    let events = events.lock().unwrap();
    assert_eq!(events[0].id, "input-user-name");
    assert_eq!(events[0].value, "bob");
}

#[test]
fn test_input_ignored_while_disabled_or_loading() {
    let (field, events) = recording(TextField::new().disabled(true));
    assert_eq!(field.input("x"), EventResult::Ignored);

    let (busy, busy_events) = recording(TextField::new().loading(true));
    assert_eq!(busy.input("x"), EventResult::Ignored);

    assert!(events.lock().unwrap().is_empty());
    assert!(busy_events.lock().unwrap().is_empty());
}

// ============================================================================
// Identifier
// ============================================================================

#[test]
fn test_id_explicit_or_derived() {
    assert_eq!(TextField::new().id("email").element_id(), "email");
    assert_eq!(TextField::new().label("Email Address").element_id(), "input-email-address");
    assert_eq!(TextField::new().element_id(), "input");
    assert_eq!(TextField::new().label("!!").element_id(), "input");
}

// ============================================================================
// Password visibility
// ============================================================================

#[test]
fn test_password_reveal_round_trip() {
    let field = TextField::new().input_type(InputType::Password).value("secret");

    assert!(field.is_masked());
    field.toggle_reveal();
    assert!(!field.is_masked());
    field.toggle_reveal();
    assert!(field.is_masked());
}

#[test]
fn test_plain_field_never_masked() {
    let field = TextField::new().password_toggle(true).value("visible");

    assert!(field.is_password_like());
    assert!(field.shows_reveal_toggle());
    assert!(!field.is_masked());

    field.toggle_reveal();
    assert!(field.is_revealed());
    assert!(!field.is_masked());
}

#[test]
fn test_masked_input_node() {
    let field = TextField::new()
        .id("pw")
        .input_type(InputType::Password)
        .value("abc");

    assert!(matches!(input_node(&field), Node::Input { masked: true, .. }));
    assert!(field.render().find(&reveal_toggle_id("pw")).is_some());
}

// ============================================================================
// Adornments
// ============================================================================

#[test]
fn test_builder_setters_apply() {
    let field = TextField::new()
        .value("secret")
        .clearable(true)
        .password_toggle(true)
        .input_type(InputType::Password)
        .invalid(true);

    assert!(field.shows_clear_button());
    assert!(field.shows_reveal_toggle());
    assert!(field.is_password_like());
    assert!(field.is_masked());
    assert!(field.has_error());

    let busy = field.clone().loading(true);
    assert!(!busy.shows_clear_button());
    assert!(!busy.shows_reveal_toggle());

    let off = TextField::new().value("x").clearable(true).disabled(true);
    assert!(!off.shows_clear_button());
}

#[test]
fn test_clear_button_visibility() {
    let (field, _) = recording(TextField::new().id("q").clearable(true));
    assert!(!field.shows_clear_button());

    field.input("a");
    assert!(field.shows_clear_button());
    assert!(field.render().find(&clear_button_id("q")).is_some());

    field.set_disabled(true);
    assert!(!field.shows_clear_button());
}

#[test]
fn test_clear_button_follows_mirror_not_display() {
    let field = TextField::new().clearable(true).value("");
    field.input("typed");

    assert_eq!(field.displayed_value(), "");
    assert!(field.shows_clear_button());
}

#[test]
fn test_loading_hides_buttons() {
    let field = TextField::new()
        .id("pw")
        .clearable(true)
        .password_toggle(true)
        .value("abc")
        .loading(true);

    let node = field.render();
    assert_eq!(node.count(|n| matches!(n, Node::Spinner { .. })), 1);
    assert_eq!(node.count(|n| matches!(n, Node::Button { .. })), 0);
    assert!(matches!(input_node(&field), Node::Input { disabled: true, .. }));
}

#[test]
fn test_clear_and_reveal_both_shown() {
    let field = TextField::new()
        .id("pw")
        .clearable(true)
        .input_type(InputType::Password)
        .value("abc");

    let node = field.render();
    let buttons: Vec<&str> = node
        .children()
        .iter()
        .flat_map(|child| child.children())
        .filter_map(|n| n.id())
        .collect();
    assert_eq!(buttons, vec!["pw", "pw-clear", "pw-reveal"]);
}

// ============================================================================
// Messages
// ============================================================================

#[test]
fn test_error_replaces_helper() {
    let field = TextField::new()
        .label("Name")
        .helper_text("Your full name")
        .error_message("Required");

    let text = field.render().text_content();
    assert!(field.has_error());
    assert!(text.contains("Required"));
    assert!(!text.contains("Your full name"));

    field.set_error_message(None);
    let text = field.render().text_content();
    assert!(!field.has_error());
    assert!(text.contains("Your full name"));
}

#[test]
fn test_invalid_without_message() {
    let field = TextField::new().invalid(true);

    assert!(field.has_error());
    assert!(matches!(input_node(&field), Node::Input { invalid: true, .. }));
}

// ============================================================================
// Events
// ============================================================================

#[test]
fn test_events_route_to_actions() {
    let (field, events) = recording(TextField::new().id("pw").clearable(true).password_toggle(true));

    assert!(field.on_text("pw", "abc").is_handled());
    assert!(field.on_activate(&reveal_toggle_id("pw")).is_handled());
    assert!(field.is_revealed());
    assert!(field.on_activate(&clear_button_id("pw")).is_handled());

    // Clear button is gone once the mirror is empty
    assert_eq!(field.on_activate(&clear_button_id("pw")), EventResult::Ignored);
    assert_eq!(field.on_text("other", "x"), EventResult::Ignored);
    assert_eq!(values(&events), vec!["abc", ""]);
}
