//! Login form state.

/// Fixed error message shown on authentication failure.
///
/// Deliberately not derived from the server error; the caller only knows
/// success vs. failure.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Which form field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

/// Submit phase of the form.
///
/// `Idle → Submitting → {back to Idle}`: success navigates away, failure
/// returns to an editable form with the error shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginPhase {
    #[default]
    Idle,
    Submitting,
}

/// Login form state.
#[derive(Debug, Default)]
pub struct LoginState {
    pub username: String,
    pub password: String,
    pub focus: LoginField,
    pub phase: LoginPhase,
    /// Error shown until the next submit clears it.
    pub error: Option<&'static str>,
    /// Spinner animation counter while submitting.
    pub spinner_frame: usize,
}

impl LoginState {
    /// Both fields non-empty. Enforced client-side; an empty field means
    /// no request is made at all.
    pub fn can_submit(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == LoginPhase::Submitting
    }

    /// Moves focus to the other field.
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        };
    }

    fn focused_value_mut(&mut self) -> &mut String {
        match self.focus {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.focused_value_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.focused_value_mut().pop();
    }
}
