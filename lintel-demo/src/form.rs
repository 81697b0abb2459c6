//! Sign-up form walk-through.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use lintel::prelude::*;

use crate::terminal::Printer;
use crate::validation::{ValidationResult, Validator};

/// The three fields of the sign-up form, each self-managed.
pub struct SignUpForm {
    pub username: TextField,
    pub email: TextField,
    pub password: TextField,
    changes: Arc<Mutex<Vec<ChangeEvent>>>,
}

impl SignUpForm {
    pub fn new() -> Self {
        let changes = Arc::new(Mutex::new(Vec::new()));

        let username = TextField::new()
            .label("Username")
            .placeholder("Enter your username")
            .helper_text("Must be at least 3 characters long")
            .clearable(true);
        let email = TextField::new()
            .label("Email")
            .input_type(InputType::Email)
            .placeholder("you@example.com")
            .variant(Variant::Filled)
            .clearable(true);
        let password = TextField::new()
            .label("Password")
            .input_type(InputType::Password)
            .placeholder("Enter your password")
            .password_toggle(true);

        Self {
            username: track(username, &changes),
            email: track(email, &changes),
            password: track(password, &changes),
            changes,
        }
    }

    pub fn render(&self) -> Node {
        Node::column_styled(
            vec![
                self.username.render(),
                self.email.render(),
                self.password.render(),
            ],
            Style::new(),
            Layout::new().gap(1),
        )
    }

    pub fn validate(&self) -> ValidationResult {
        Validator::new()
            .field(&self.username, "username")
            .required("Username is required")
            .min_length(3, "Must be at least 3 characters long")
            .field(&self.email, "email")
            .required("Email is required")
            .email("Enter a valid email address")
            .validate()
    }

    /// Every change event the fields have sent so far.
    pub fn changes(&self) -> Vec<ChangeEvent> {
        self.changes
            .lock()
            .map(|changes| changes.clone())
            .unwrap_or_default()
    }
}

impl Default for SignUpForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Attach a change handler that records and logs every event.
fn track(field: TextField, changes: &Arc<Mutex<Vec<ChangeEvent>>>) -> TextField {
    let sink = Arc::clone(changes);
    field.on_change(move |event| {
        log::info!("{} changed to {:?}", event.id, event.value);
        if let Ok(mut changes) = sink.lock() {
            changes.push(event.clone());
        }
    })
}

fn type_text(field: &TextField, text: &str) {
    for c in text.chars() {
        field.type_char(c);
    }
}

/// Fields showing the remaining variants, sizes and states.
fn showcase() -> Node {
    let fields = [
        TextField::new()
            .label("Ghost")
            .variant(Variant::Ghost)
            .placeholder("Underline only"),
        TextField::new()
            .label("With error")
            .value("bad value")
            .error_message("This field has an error"),
        TextField::new()
            .label("Loading")
            .value("checking...")
            .clearable(true)
            .loading(true),
        TextField::new()
            .label("Disabled")
            .value("read only")
            .clearable(true)
            .disabled(true),
        TextField::new().label("Small").size(FieldSize::Small),
        TextField::new().label("Large").size(FieldSize::Large),
    ];

    Node::column_styled(
        fields.iter().map(TextField::render).collect(),
        Style::new(),
        Layout::new().gap(1),
    )
}

fn print_validation<W: Write>(out: &mut Printer<W>, result: &ValidationResult) -> io::Result<()> {
    if result.is_valid() {
        return out.note("Form is valid");
    }
    for error in result.errors() {
        out.note(&format!("{} ({}): {}", error.field_name, error.widget_id, error.message))?;
    }
    Ok(())
}

pub fn run<W: Write>(out: &mut Printer<W>) -> io::Result<()> {
    let form = SignUpForm::new();

    out.heading("Sign-up form")?;
    out.node(&form.render())?;

    out.step("Validate the empty form")?;
    let result = form.validate();
    print_validation(out, &result)?;
    out.node(&form.render())?;

    out.step("Type \"jo\" as the username")?;
    type_text(&form.username, "jo");
    out.node(&form.username.render())?;

    out.step("Finish the username and type an invalid email")?;
    type_text(&form.username, "hn");
    type_text(&form.email, "john.example.com");
    let result = form.validate();
    print_validation(out, &result)?;
    out.node(&form.render())?;

    out.step("Clear the email and type it again")?;
    form.email.clear();
    type_text(&form.email, "john@example.com");
    let result = form.validate();
    print_validation(out, &result)?;
    out.node(&form.email.render())?;

    out.step("Type a password")?;
    type_text(&form.password, "hunter2");
    out.node(&form.password.render())?;

    out.step("Reveal the password")?;
    form.password.toggle_reveal();
    out.node(&form.password.render())?;

    out.step("Hide it again")?;
    form.password.toggle_reveal();
    out.node(&form.password.render())?;

    out.note(&format!("{} change event(s) sent", form.changes().len()))?;

    out.heading("Variants and states")?;
    out.node(&showcase())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_validation_flow() {
        let form = SignUpForm::new();

        let result = form.validate();
        assert_eq!(result.errors().len(), 2);

        type_text(&form.username, "john");
        type_text(&form.email, "john@example.com");
        assert!(form.validate().is_valid());
        assert!(!form.username.has_error());
    }

    #[test]
    fn test_changes_are_recorded() {
        let form = SignUpForm::new();
        type_text(&form.username, "ab");
        form.username.clear();

        let values: Vec<String> = form.changes().into_iter().map(|e| e.value).collect();
        assert_eq!(values, vec!["a", "ab", ""]);
    }

    #[test]
    fn test_run_prints_every_section() {
        let mut printer = Printer::new(Vec::new());
        run(&mut printer).unwrap();

        let output = String::from_utf8(printer.into_inner()).unwrap();
        assert!(output.contains("Sign-up form"));
        assert!(output.contains("Username is required"));
        assert!(output.contains("Form is valid"));
        assert!(output.contains("hunter2"));
        assert!(output.contains("Variants and states"));
    }
}
