//! Field validation rules.
//!
//! Explicit per-field validators, composed by the request types in
//! declared order (username, password, email). Only the first violation
//! is surfaced per request; messages are localized field name + suffix.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidateEmail;

use crate::config::{PASSWORD_MAX_LENGTH, PASSWORD_MIN_LENGTH, USERNAME_PATTERN};

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(USERNAME_PATTERN).expect("username pattern is a valid regex"));

/// Request fields that carry validation rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Username,
    Password,
    Email,
}

impl Field {
    /// Localized field name used in client-facing messages
    pub fn display_name(&self) -> &'static str {
        match self {
            Field::Username => "用户名",
            Field::Password => "密码",
            Field::Email => "邮箱地址",
        }
    }
}

/// How a field value violated its rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Required value was absent
    Missing,
    /// Value was present but failed the field rule
    Invalid,
}

/// A single field violation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    field: Field,
    kind: ValueKind,
}

impl FieldError {
    pub fn new(field: Field, kind: ValueKind) -> Self {
        Self { field, kind }
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = match self.kind {
            ValueKind::Missing => "不能为空",
            ValueKind::Invalid => "不合法",
        };
        write!(f, "{}{}", self.field.display_name(), suffix)
    }
}

/// Username: required, `^[A-Za-z0-9_]{3,10}$`
pub fn require_username(value: Option<String>) -> Result<String, FieldError> {
    let v = value.ok_or_else(|| FieldError::new(Field::Username, ValueKind::Missing))?;
    if USERNAME_RE.is_match(&v) {
        Ok(v)
    } else {
        Err(FieldError::new(Field::Username, ValueKind::Invalid))
    }
}

/// Password: required, 5 to 12 characters inclusive
pub fn require_password(value: Option<String>) -> Result<String, FieldError> {
    let v = value.ok_or_else(|| FieldError::new(Field::Password, ValueKind::Missing))?;
    if (PASSWORD_MIN_LENGTH..=PASSWORD_MAX_LENGTH).contains(&v.chars().count()) {
        Ok(v)
    } else {
        Err(FieldError::new(Field::Password, ValueKind::Invalid))
    }
}

/// Email: optional, `local@domain` shape when present
pub fn check_email(value: Option<String>) -> Result<Option<String>, FieldError> {
    match value {
        None => Ok(None),
        Some(v) if v.validate_email() => Ok(Some(v)),
        Some(_) => Err(FieldError::new(Field::Email, ValueKind::Invalid)),
    }
}

/// Consuming validation for raw request types.
///
/// Runs the field checks in declared order and converts into the domain
/// value handlers operate on, so unvalidated input never crosses the
/// extractor boundary.
pub trait ValidateFields {
    type Valid;

    fn validate_fields(self) -> Result<Self::Valid, FieldError>;
}
