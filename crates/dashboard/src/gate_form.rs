//! Input state of the login / sign-up form shown while the gate is open
//!
//! Nothing typed here is ever validated; submitting only reports which tab
//! was active.

use opti_transit_access::AuthMode;

/// Character used to mask secret fields
pub const MASK_CHAR: char = '•';

/// A single text input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    /// Label shown above the input
    pub label: &'static str,
    /// Hint shown while the input is empty
    pub placeholder: &'static str,
    /// Whether the value is masked on screen
    pub secret: bool,
    /// Current value
    pub value: String,
}

impl FormField {
    const fn new(label: &'static str, placeholder: &'static str, secret: bool) -> Self {
        Self {
            label,
            placeholder,
            secret,
            value: String::new(),
        }
    }

    /// Text to draw for the value, masked for secret fields
    #[must_use]
    pub fn display_value(&self) -> String {
        if self.secret {
            std::iter::repeat_n(MASK_CHAR, self.value.chars().count()).collect()
        } else {
            self.value.clone()
        }
    }
}

fn login_fields() -> Vec<FormField> {
    vec![
        FormField::new("ID", "Enter your ID", false),
        FormField::new("Password", "Enter your password", true),
    ]
}

fn signup_fields() -> Vec<FormField> {
    vec![
        FormField::new("Email", "Enter your email", false),
        FormField::new("Password", "Choose a password", true),
        FormField::new("Confirm Password", "Confirm your password", true),
    ]
}

/// Two-tab authentication form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateForm {
    mode: AuthMode,
    login: Vec<FormField>,
    signup: Vec<FormField>,
    focused: usize,
}

impl GateForm {
    /// Empty form on the login tab
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: AuthMode::Login,
            login: login_fields(),
            signup: signup_fields(),
            focused: 0,
        }
    }

    /// Clear every field and return to the login tab
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Active tab
    #[must_use]
    pub const fn mode(&self) -> AuthMode {
        self.mode
    }

    /// Switch to the other tab
    pub const fn switch_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        };
        self.focused = 0;
    }

    /// Fields of the active tab
    #[must_use]
    pub fn fields(&self) -> &[FormField] {
        match self.mode {
            AuthMode::Login => &self.login,
            AuthMode::Signup => &self.signup,
        }
    }

    fn fields_mut(&mut self) -> &mut [FormField] {
        match self.mode {
            AuthMode::Login => &mut self.login,
            AuthMode::Signup => &mut self.signup,
        }
    }

    /// Index of the focused field in [`GateForm::fields`]
    #[must_use]
    pub const fn focused(&self) -> usize {
        self.focused
    }

    /// Move focus to the next field, stopping at the last
    pub fn focus_next(&mut self) {
        if self.focused + 1 < self.fields().len() {
            self.focused += 1;
        }
    }

    /// Move focus to the previous field, stopping at the first
    pub const fn focus_previous(&mut self) {
        self.focused = self.focused.saturating_sub(1);
    }

    /// Append a character to the focused field
    pub fn push_char(&mut self, c: char) {
        let focused = self.focused;
        if let Some(field) = self.fields_mut().get_mut(focused) {
            field.value.push(c);
        }
    }

    /// Remove the last character of the focused field
    pub fn backspace(&mut self) {
        let focused = self.focused;
        if let Some(field) = self.fields_mut().get_mut(focused) {
            field.value.pop();
        }
    }
}

impl Default for GateForm {
    fn default() -> Self {
        Self::new()
    }
}
