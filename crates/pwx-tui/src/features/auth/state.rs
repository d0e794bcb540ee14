//! Auth slice state: session, form fields, inline validation errors.

use pwx_core::session::Session;

/// Validation messages shown inline next to form fields.
///
/// Product strings; they are pinned by tests because the original client
/// shipped exactly these.
pub const ERR_USERNAME_REQUIRED: &str = "Введите имя пользователя";
pub const ERR_PASSWORD_REQUIRED: &str = "Введите пароль";
pub const ERR_CONFIRM_REQUIRED: &str = "Подтвердите пароль";
pub const ERR_PASSWORDS_MISMATCH: &str = "Пароли не совпадают";

/// Which flavor of the auth form is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

/// Focusable form fields. `Confirm` exists only in register mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthField {
    Username,
    Password,
    Confirm,
}

/// The login/register form.
///
/// Field errors are scoped to their field and cleared the moment the field
/// is edited again. They never reach the slice-level `error`.
#[derive(Debug)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub focus: AuthField,
    pub username: String,
    pub password: String,
    pub confirm: String,
    pub username_error: Option<&'static str>,
    pub password_error: Option<&'static str>,
    pub confirm_error: Option<&'static str>,
}

impl Default for AuthForm {
    fn default() -> Self {
        Self {
            mode: AuthMode::Login,
            focus: AuthField::Username,
            username: String::new(),
            password: String::new(),
            confirm: String::new(),
            username_error: None,
            password_error: None,
            confirm_error: None,
        }
    }
}

impl AuthForm {
    /// Validates required fields, recording inline errors.
    ///
    /// Returns true when the form may be submitted. A false return means
    /// nothing gets dispatched.
    pub fn validate(&mut self) -> bool {
        self.username_error = self
            .username
            .trim()
            .is_empty()
            .then_some(ERR_USERNAME_REQUIRED);
        self.password_error = self.password.is_empty().then_some(ERR_PASSWORD_REQUIRED);

        self.confirm_error = if self.mode == AuthMode::Register {
            if self.confirm.is_empty() {
                Some(ERR_CONFIRM_REQUIRED)
            } else if self.confirm != self.password {
                Some(ERR_PASSWORDS_MISMATCH)
            } else {
                None
            }
        } else {
            None
        };

        self.username_error.is_none()
            && self.password_error.is_none()
            && self.confirm_error.is_none()
    }

    /// Switches between login and register, keeping typed credentials but
    /// dropping the confirm field and any stale inline errors.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        };
        self.confirm.clear();
        self.clear_errors();
        if self.mode == AuthMode::Login && self.focus == AuthField::Confirm {
            self.focus = AuthField::Password;
        }
    }

    /// Moves focus to the next field, wrapping around.
    pub fn focus_next(&mut self) {
        self.focus = match (self.focus, self.mode) {
            (AuthField::Username, _) => AuthField::Password,
            (AuthField::Password, AuthMode::Register) => AuthField::Confirm,
            (AuthField::Password, AuthMode::Login) | (AuthField::Confirm, _) => {
                AuthField::Username
            }
        };
    }

    /// Moves focus to the previous field, wrapping around.
    pub fn focus_prev(&mut self) {
        self.focus = match (self.focus, self.mode) {
            (AuthField::Username, AuthMode::Login) => AuthField::Password,
            (AuthField::Username, AuthMode::Register) => AuthField::Confirm,
            (AuthField::Password, _) => AuthField::Username,
            (AuthField::Confirm, _) => AuthField::Password,
        };
    }

    /// Appends a character to the focused field and clears that field's
    /// inline error.
    pub fn push_char(&mut self, c: char) {
        match self.focus {
            AuthField::Username => {
                self.username.push(c);
                self.username_error = None;
            }
            AuthField::Password => {
                self.password.push(c);
                self.password_error = None;
            }
            AuthField::Confirm => {
                self.confirm.push(c);
                self.confirm_error = None;
            }
        }
    }

    /// Removes the last character of the focused field and clears that
    /// field's inline error.
    pub fn pop_char(&mut self) {
        match self.focus {
            AuthField::Username => {
                self.username.pop();
                self.username_error = None;
            }
            AuthField::Password => {
                self.password.pop();
                self.password_error = None;
            }
            AuthField::Confirm => {
                self.confirm.pop();
                self.confirm_error = None;
            }
        }
    }

    fn clear_errors(&mut self) {
        self.username_error = None;
        self.password_error = None;
        self.confirm_error = None;
    }
}

/// Authentication container.
#[derive(Debug, Default)]
pub struct AuthSlice {
    /// The active session. `Some` means authenticated.
    pub session: Option<Session>,
    /// True while a login or register request is in flight.
    pub loading: bool,
    /// Last failed request's user-facing message.
    pub error: Option<String>,
    /// The login/register form.
    pub form: AuthForm,
}

impl AuthSlice {
    pub fn new(session: Option<Session>) -> Self {
        Self {
            session,
            ..Self::default()
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Empty fields produce the pinned inline messages and fail validation.
    #[test]
    fn test_validate_empty_login_form() {
        let mut form = AuthForm::default();

        assert!(!form.validate());
        assert_eq!(form.username_error, Some(ERR_USERNAME_REQUIRED));
        assert_eq!(form.password_error, Some(ERR_PASSWORD_REQUIRED));
        assert_eq!(form.confirm_error, None);
    }

    /// A whitespace-only username counts as empty.
    #[test]
    fn test_validate_blank_username() {
        let mut form = AuthForm {
            username: "   ".to_string(),
            password: "pw".to_string(),
            ..AuthForm::default()
        };

        assert!(!form.validate());
        assert_eq!(form.username_error, Some(ERR_USERNAME_REQUIRED));
        assert_eq!(form.password_error, None);
    }

    /// Register mode requires a matching confirmation.
    #[test]
    fn test_validate_register_mismatch() {
        let mut form = AuthForm {
            mode: AuthMode::Register,
            username: "alice".to_string(),
            password: "a".to_string(),
            confirm: "b".to_string(),
            ..AuthForm::default()
        };

        assert!(!form.validate());
        assert_eq!(form.confirm_error, Some(ERR_PASSWORDS_MISMATCH));
    }

    /// An empty confirmation gets its own message, not the mismatch one.
    #[test]
    fn test_validate_register_confirm_required() {
        let mut form = AuthForm {
            mode: AuthMode::Register,
            username: "alice".to_string(),
            password: "a".to_string(),
            ..AuthForm::default()
        };

        assert!(!form.validate());
        assert_eq!(form.confirm_error, Some(ERR_CONFIRM_REQUIRED));
    }

    /// The confirm field is not validated in login mode.
    #[test]
    fn test_validate_login_ignores_confirm() {
        let mut form = AuthForm {
            username: "alice".to_string(),
            password: "pw".to_string(),
            confirm: "different".to_string(),
            ..AuthForm::default()
        };

        assert!(form.validate());
    }

    /// Editing a field clears its inline error and only its error.
    #[test]
    fn test_editing_clears_field_error() {
        let mut form = AuthForm::default();
        form.validate();
        assert!(form.username_error.is_some());
        assert!(form.password_error.is_some());

        form.push_char('a');

        assert_eq!(form.username_error, None);
        assert!(form.password_error.is_some());
    }

    /// Focus cycles through two fields in login mode and three in register.
    #[test]
    fn test_focus_cycle() {
        let mut form = AuthForm::default();
        form.focus_next();
        assert_eq!(form.focus, AuthField::Password);
        form.focus_next();
        assert_eq!(form.focus, AuthField::Username);

        form.toggle_mode();
        form.focus_next();
        form.focus_next();
        assert_eq!(form.focus, AuthField::Confirm);
        form.focus_next();
        assert_eq!(form.focus, AuthField::Username);
    }

    /// Leaving register mode pulls focus off the confirm field.
    #[test]
    fn test_toggle_mode_fixes_focus() {
        let mut form = AuthForm {
            mode: AuthMode::Register,
            focus: AuthField::Confirm,
            ..AuthForm::default()
        };

        form.toggle_mode();

        assert_eq!(form.mode, AuthMode::Login);
        assert_eq!(form.focus, AuthField::Password);
    }
}
