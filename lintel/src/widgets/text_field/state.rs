use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use crate::node::Node;
use crate::text::slugify;
use crate::widgets::events::EventResult;

use super::props::{FieldSize, InputType, Variant};

/// Change notification sent to the `on_change` handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    /// Element ID of the field.
    pub id: String,
    /// New content.
    pub value: String,
}

/// Handler for text field changes.
pub type ChangeHandler = Arc<dyn Fn(&ChangeEvent) + Send + Sync>;

/// Internal state for a TextField widget
#[derive(Default)]
pub(super) struct TextFieldInner {
    /// Explicit element ID
    pub id: Option<String>,
    /// Caller-supplied value
    pub value: String,
    /// Locally mirrored value
    pub mirror: String,
    /// Whether masked content is revealed
    pub revealed: bool,
    pub label: Option<String>,
    pub placeholder: String,
    pub helper_text: Option<String>,
    pub error_message: Option<String>,
    pub disabled: bool,
    pub invalid: bool,
    pub variant: Variant,
    pub size: FieldSize,
    pub input_type: InputType,
    pub clearable: bool,
    pub password_toggle: bool,
    pub loading: bool,
    pub on_change: Option<ChangeHandler>,
}

impl TextFieldInner {
    pub fn id(&self) -> String {
        if let Some(id) = &self.id {
            return id.clone();
        }
        match self.label.as_deref().map(slugify) {
            Some(slug) if !slug.is_empty() => format!("input-{slug}"),
            _ => "input".to_string(),
        }
    }

    pub fn is_self_managed(&self) -> bool {
        self.on_change.is_some()
    }

    pub fn displayed_value(&self) -> &str {
        if self.is_self_managed() {
            &self.mirror
        } else {
            &self.value
        }
    }

    pub fn is_password_like(&self) -> bool {
        self.input_type == InputType::Password || self.password_toggle
    }

    pub fn is_masked(&self) -> bool {
        self.input_type == InputType::Password && !self.revealed
    }

    pub fn has_error(&self) -> bool {
        self.invalid || self.error_message.as_deref().is_some_and(|m| !m.is_empty())
    }

    pub fn shows_clear_button(&self) -> bool {
        !self.loading && self.clearable && !self.mirror.is_empty() && !self.disabled
    }

    pub fn shows_reveal_toggle(&self) -> bool {
        !self.loading && self.is_password_like()
    }

    pub fn is_input_disabled(&self) -> bool {
        self.disabled || self.loading
    }
}

/// A decorated single-line text input.
///
/// The field works in one of two modes, decided by whether an `on_change`
/// handler is attached:
///
/// - **Caller-controlled** (no handler): the field always displays the value
///   supplied through [`value`](Self::value) / [`set_value`](Self::set_value).
///   Typing only updates the local mirror, which is never shown.
/// - **Self-managed** (handler attached): the field displays its local mirror.
///   Every edit updates the mirror and is forwarded to the handler.
///
/// Besides the input it renders an optional label, helper text or error
/// message, and trailing adornments: a spinner while loading, otherwise a
/// clear button and a password reveal toggle.
///
/// # Example
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use lintel::{InputType, TextField};
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
/// let field = TextField::new()
///     .label("Password")
///     .input_type(InputType::Password)
///     .clearable(true)
///     .on_change(move |event| sink.lock().unwrap().push(event.value.clone()));
///
/// field.input("hunter2");
/// assert!(field.is_masked());
/// field.clear();
///
/// assert_eq!(*seen.lock().unwrap(), vec!["hunter2", ""]);
/// ```
pub struct TextField {
    inner: Arc<RwLock<TextFieldInner>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
}

impl TextField {
    /// Create a new empty text field
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(TextFieldInner::default())),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    // -------------------------------------------------------------------------
    // Builder
    // -------------------------------------------------------------------------

    /// Set an explicit element ID.
    pub fn id(self, id: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.id = Some(id.into());
        }
        self
    }

    /// Set the initial value. Seeds the local mirror too.
    pub fn value(self, value: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            let value = value.into();
            guard.mirror = value.clone();
            guard.value = value;
        }
        self
    }

    /// Set the label shown above the control.
    pub fn label(self, label: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.label = Some(label.into());
        }
        self
    }

    /// Set the placeholder shown while the field is empty.
    pub fn placeholder(self, placeholder: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.placeholder = placeholder.into();
        }
        self
    }

    /// Set the helper text shown below the control.
    pub fn helper_text(self, text: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.helper_text = Some(text.into());
        }
        self
    }

    /// Set the error message. A non-empty message puts the field in the error state.
    pub fn error_message(self, message: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.error_message = Some(message.into());
        }
        self
    }

    /// Disable the field. Disabled fields hide the clear button.
    pub fn disabled(self, disabled: bool) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.disabled = disabled;
        }
        self
    }

    /// Force the error styling without a message.
    pub fn invalid(self, invalid: bool) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.invalid = invalid;
        }
        self
    }

    /// Visual variant.
    pub fn variant(self, variant: Variant) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.variant = variant;
        }
        self
    }

    pub fn size(self, size: FieldSize) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.size = size;
        }
        self
    }

    /// Input type. `Password` masks the displayed value.
    pub fn input_type(self, input_type: InputType) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.input_type = input_type;
        }
        self
    }

    /// Show a clear button while the field has content.
    pub fn clearable(self, clearable: bool) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.clearable = clearable;
        }
        self
    }

    /// Show a reveal toggle and treat the field as password-like.
    pub fn password_toggle(self, password_toggle: bool) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.password_toggle = password_toggle;
        }
        self
    }

    /// Show a spinner instead of the trailing buttons.
    pub fn loading(self, loading: bool) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.loading = loading;
        }
        self
    }

    /// Attach a change handler, switching the field to self-managed mode.
    pub fn on_change<F>(self, handler: F) -> Self
    where
        F: Fn(&ChangeEvent) + Send + Sync + 'static,
    {
        if let Ok(mut guard) = self.inner.write() {
            guard.on_change = Some(Arc::new(handler));
        }
        self
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Element ID: the explicit ID, or one derived from the label.
    pub fn element_id(&self) -> String {
        self.inner
            .read()
            .map(|g| g.id())
            .unwrap_or_else(|_| "input".to_string())
    }

    /// The caller-supplied value
    pub fn supplied_value(&self) -> String {
        self.read(|g| g.value.clone())
    }

    /// The locally mirrored value
    pub fn mirror(&self) -> String {
        self.read(|g| g.mirror.clone())
    }

    /// The value shown in the input box
    pub fn displayed_value(&self) -> String {
        self.read(|g| g.displayed_value().to_string())
    }

    /// Whether a change handler is attached (the mirror is shown)
    pub fn is_self_managed(&self) -> bool {
        self.read(|g| g.is_self_managed())
    }

    /// Whether the field is declared as a password or has a reveal toggle
    pub fn is_password_like(&self) -> bool {
        self.read(|g| g.is_password_like())
    }

    /// Whether masked content is currently revealed
    pub fn is_revealed(&self) -> bool {
        self.read(|g| g.revealed)
    }

    /// Whether the input draws its content as bullets
    pub fn is_masked(&self) -> bool {
        self.read(|g| g.is_masked())
    }

    /// Whether the field uses error styling
    pub fn has_error(&self) -> bool {
        self.read(|g| g.has_error())
    }

    pub fn error(&self) -> Option<String> {
        self.read(|g| g.error_message.clone())
    }

    pub fn shows_clear_button(&self) -> bool {
        self.read(|g| g.shows_clear_button())
    }

    pub fn shows_reveal_toggle(&self) -> bool {
        self.read(|g| g.shows_reveal_toggle())
    }

    fn read<R: Default>(&self, f: impl FnOnce(&TextFieldInner) -> R) -> R {
        self.inner.read().map(|g| f(&*g)).unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Set the caller-supplied value. The mirror is left alone.
    pub fn set_value(&self, value: impl Into<String>) {
        self.write(|g| g.value = value.into());
    }

    /// Set or clear the error message.
    pub fn set_error_message(&self, message: Option<String>) {
        self.write(|g| g.error_message = message);
    }

    pub fn set_disabled(&self, disabled: bool) {
        self.write(|g| g.disabled = disabled);
    }

    pub fn set_invalid(&self, invalid: bool) {
        self.write(|g| g.invalid = invalid);
    }

    pub fn set_loading(&self, loading: bool) {
        self.write(|g| g.loading = loading);
    }

    fn write(&self, f: impl FnOnce(&mut TextFieldInner)) {
        if let Ok(mut guard) = self.inner.write() {
            f(&mut *guard);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Interaction
    // -------------------------------------------------------------------------

    /// Replace the field content, as the input does after each keystroke.
    ///
    /// Updates the mirror and forwards a change event. Ignored while the
    /// input is disabled or loading.
    pub fn input(&self, text: impl Into<String>) -> EventResult {
        let text = text.into();
        let notify = {
            let Ok(mut guard) = self.inner.write() else {
                return EventResult::Ignored;
            };
            if guard.is_input_disabled() {
                log::debug!("{}: input ignored while disabled", guard.id());
                return EventResult::Ignored;
            }
            guard.mirror = text.clone();
            self.dirty.store(true, Ordering::SeqCst);
            log::trace!("{}: mirror updated", guard.id());
            guard.on_change.clone().map(|h| (h, guard.id()))
        };

        if let Some((handler, id)) = notify {
            handler(&ChangeEvent { id, value: text });
        }
        EventResult::Consumed
    }

    /// Type one character at the end of the displayed content.
    pub fn type_char(&self, c: char) -> EventResult {
        let mut text = self.displayed_value();
        text.push(c);
        self.input(text)
    }

    /// Delete the last character of the displayed content.
    pub fn backspace(&self) -> EventResult {
        let mut text = self.displayed_value();
        if text.pop().is_none() {
            return EventResult::Ignored;
        }
        self.input(text)
    }

    /// Empty the mirror and send a change event carrying `""`.
    pub fn clear(&self) -> EventResult {
        let notify = {
            let Ok(mut guard) = self.inner.write() else {
                return EventResult::Ignored;
            };
            guard.mirror.clear();
            self.dirty.store(true, Ordering::SeqCst);
            log::debug!("{}: cleared", guard.id());
            guard.on_change.clone().map(|h| (h, guard.id()))
        };

        if let Some((handler, id)) = notify {
            handler(&ChangeEvent {
                id,
                value: String::new(),
            });
        }
        EventResult::Consumed
    }

    /// Flip the reveal flag. Only fields declared as passwords are affected
    /// visibly.
    pub fn toggle_reveal(&self) -> EventResult {
        self.write(|g| g.revealed = !g.revealed);
        EventResult::Consumed
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Build the view tree for the current state.
    pub fn render(&self) -> Node {
        self.inner
            .read()
            .map(|g| super::render::render(&*g))
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the field state has changed
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Clone for TextField {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl Default for TextField {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TextField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextField")
            .field("id", &self.element_id())
            .field("displayed", &self.displayed_value())
            .finish()
    }
}
