//! Runtime type checks for loosely-typed request parameters.
//!
//! Handlers receive some input as raw JSON (the `user` body field, path segments).
//! [`validate`] checks a list of [`Param`] descriptors before anything is handed to
//! the store:
//!
//! ```rust,ignore
//! use serde_json::json;
//! use users_api::utils::params::{validate, Kind, Param};
//!
//! let email = json!("jane@example.com");
//! let is_admin = json!(true);
//! let user = json!({"name": "Jane"});
//!
//! validate(&[
//!     Param::string(&email),
//!     Param::new(&is_admin, Kind::Boolean),
//!     Param::new(&user, Kind::Predicate { name: "has_name", check: &|v| v.get("name").is_some() }),
//! ])?;
//! ```
//!
//! There is no coercion and no nested validation. Field-level rules on decoded DTOs
//! are handled by the `validator` crate instead.

use serde_json::Value;
use thiserror::Error;

/// Reasons a parameter list can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("One or more of the required parameters was missing or invalid.")]
    ParamInvalid,
    #[error("Validator function {0} failed.")]
    PredicateFailed(String),
}

/// Expected shape of a parameter.
#[derive(Clone, Copy)]
pub enum Kind<'a> {
    String,
    /// A JSON number, or a string holding a finite number.
    Number,
    Boolean,
    Object,
    /// Custom check; `name` is reported when `check` returns `false`.
    Predicate {
        name: &'a str,
        check: &'a dyn Fn(&Value) -> bool,
    },
}

/// A value paired with the kind it must satisfy.
#[derive(Clone, Copy)]
pub struct Param<'a> {
    pub value: &'a Value,
    pub kind: Kind<'a>,
}

impl<'a> Param<'a> {
    pub fn new(value: &'a Value, kind: Kind<'a>) -> Self {
        Self { value, kind }
    }

    /// Bare parameter, checked as a string.
    pub fn string(value: &'a Value) -> Self {
        Self::new(value, Kind::String)
    }

    pub fn number(value: &'a Value) -> Self {
        Self::new(value, Kind::Number)
    }
}

/// Checks every parameter in order and stops at the first failure.
pub fn validate(params: &[Param<'_>]) -> Result<(), ValidationError> {
    params.iter().try_for_each(check_param)
}

fn check_param(param: &Param<'_>) -> Result<(), ValidationError> {
    let ok = match param.kind {
        Kind::Predicate { name, check } => {
            return if check(param.value) {
                Ok(())
            } else {
                Err(ValidationError::PredicateFailed(name.to_string()))
            };
        }
        Kind::Number => is_numeric(param.value),
        Kind::String => param.value.is_string(),
        Kind::Boolean => param.value.is_boolean(),
        Kind::Object => param.value.is_object(),
    };

    if ok {
        Ok(())
    } else {
        Err(ValidationError::ParamInvalid)
    }
}

fn is_numeric(value: &Value) -> bool {
    match value {
        Value::Number(_) => true,
        Value::String(s) => s.trim().parse::<f64>().is_ok_and(f64::is_finite),
        _ => false,
    }
}
