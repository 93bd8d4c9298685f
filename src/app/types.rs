//! Type definitions for the application state.
//!
//! Contains enums and structs used for tracking UI state:
//! - [`Screen`] - Which screen is currently displayed
//! - [`Notice`] - Transient status/error banner
//! - [`TextField`] - A single-line text input
//! - Per-screen form structs with focus cycling

use std::time::Instant;

/// Represents which screen is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Login,
    Register,
    Dashboard,
    Documents,
    DocumentDetail,
    Upload,
    Reports,
    ReportDetail,
    Profile,
}

impl Screen {
    /// Title shown in the header bar.
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Login => "Sign In",
            Screen::Register => "Create Account",
            Screen::Dashboard => "Dashboard",
            Screen::Documents => "Documents",
            Screen::DocumentDetail => "Document",
            Screen::Upload => "Upload",
            Screen::Reports => "Reports",
            Screen::ReportDetail => "Report",
            Screen::Profile => "Profile",
        }
    }
}

/// Severity of a transient notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// A transient banner shown at the bottom of the screen.
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
    /// When the notice was raised, for auto-dismissal
    pub raised_at: Instant,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self::with_kind(text, NoticeKind::Info)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::with_kind(text, NoticeKind::Success)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::with_kind(text, NoticeKind::Error)
    }

    fn with_kind(text: impl Into<String>, kind: NoticeKind) -> Self {
        Self {
            text: text.into(),
            kind,
            raised_at: Instant::now(),
        }
    }
}

/// A single-line text input with a cursor.
#[derive(Debug, Clone, Default)]
pub struct TextField {
    value: String,
    cursor: usize,
    /// Render characters as bullets (passwords)
    pub masked: bool,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn masked() -> Self {
        Self {
            masked: true,
            ..Self::default()
        }
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self {
            value,
            cursor,
            masked: false,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The string to render: bullets when masked.
    pub fn display(&self) -> String {
        if self.masked {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.chars().count();
    }

    pub fn insert(&mut self, c: char) {
        let byte_idx = self.byte_index();
        self.value.insert(byte_idx, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let byte_idx = self.byte_index();
            self.value.remove(byte_idx);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.value.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    fn byte_index(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }
}

/// Focused field on the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

/// Login form state.
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub email: TextField,
    pub password: TextField,
    pub focus: LoginField,
    /// Inline validation message, blocks submission
    pub error: Option<String>,
    /// A login request is in flight
    pub submitting: bool,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            email: TextField::new(),
            password: TextField::masked(),
            focus: LoginField::Email,
            error: None,
            submitting: false,
        }
    }
}

impl LoginForm {
    pub fn focused_field(&mut self) -> &mut TextField {
        match self.focus {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }

    pub fn next_field(&mut self) {
        self.focus = match self.focus {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        };
    }
}

/// Focused field on the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegisterField {
    #[default]
    Email,
    Password,
    FullName,
    FirmName,
}

/// Registration form state.
#[derive(Debug, Clone)]
pub struct RegisterForm {
    pub email: TextField,
    pub password: TextField,
    pub full_name: TextField,
    pub firm_name: TextField,
    pub focus: RegisterField,
    pub error: Option<String>,
    pub submitting: bool,
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self {
            email: TextField::new(),
            password: TextField::masked(),
            full_name: TextField::new(),
            firm_name: TextField::new(),
            focus: RegisterField::Email,
            error: None,
            submitting: false,
        }
    }
}

impl RegisterForm {
    pub fn focused_field(&mut self) -> &mut TextField {
        match self.focus {
            RegisterField::Email => &mut self.email,
            RegisterField::Password => &mut self.password,
            RegisterField::FullName => &mut self.full_name,
            RegisterField::FirmName => &mut self.firm_name,
        }
    }

    pub fn next_field(&mut self) {
        self.focus = match self.focus {
            RegisterField::Email => RegisterField::Password,
            RegisterField::Password => RegisterField::FullName,
            RegisterField::FullName => RegisterField::FirmName,
            RegisterField::FirmName => RegisterField::Email,
        };
    }
}

/// Focused field on the profile form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileField {
    #[default]
    FullName,
    FirmName,
    Email,
}

/// Profile form state, prefilled from the current identity.
#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    pub email: TextField,
    pub full_name: TextField,
    pub firm_name: TextField,
    pub focus: ProfileField,
    pub error: Option<String>,
    pub submitting: bool,
}

impl ProfileForm {
    /// Prefill from the signed-in identity.
    pub fn from_identity(identity: &crate::models::Identity) -> Self {
        Self {
            email: TextField::with_value(&identity.email),
            full_name: TextField::with_value(identity.full_name.clone().unwrap_or_default()),
            firm_name: TextField::with_value(identity.firm_name.clone().unwrap_or_default()),
            ..Self::default()
        }
    }

    pub fn focused_field(&mut self) -> &mut TextField {
        match self.focus {
            ProfileField::FullName => &mut self.full_name,
            ProfileField::FirmName => &mut self.firm_name,
            ProfileField::Email => &mut self.email,
        }
    }

    pub fn next_field(&mut self) {
        self.focus = match self.focus {
            ProfileField::FullName => ProfileField::FirmName,
            ProfileField::FirmName => ProfileField::Email,
            ProfileField::Email => ProfileField::FullName,
        };
    }
}
