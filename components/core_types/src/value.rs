//! Tagged runtime values.
//!
//! Every value carries a namespace tag saying what kind of thing it is. The
//! only namespace today is the immediate fixed-point number; the enum is
//! `#[non_exhaustive]` so that code outside this crate (the VM in particular)
//! must spell out what happens when it meets any other kind.

use std::fmt;

use crate::number::Number;

/// Kind of a runtime value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Namespace {
    /// The payload is the number itself
    Immediate,
}

impl Namespace {
    /// Lower-case name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Namespace::Immediate => "immediate",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A runtime value: plain data, produced fresh by each operation.
///
/// # Examples
///
/// ```
/// use core_types::{Namespace, Number, Value};
///
/// let v = Value::from(Number::from_int(7));
/// assert_eq!(v.namespace(), Namespace::Immediate);
/// assert_eq!(v.as_number(), Some(Number::from_int(7)));
/// assert!(v.is_truthy());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Value {
    /// Immediate fixed-point number
    Immediate(Number),
}

impl Value {
    /// Immediate value holding the integer `n`.
    pub fn from_int(n: i32) -> Self {
        Value::Immediate(Number::from_int(n))
    }

    /// The namespace tag of this value.
    pub fn namespace(&self) -> Namespace {
        match self {
            Value::Immediate(_) => Namespace::Immediate,
        }
    }

    /// Whether this is an immediate number.
    pub fn is_immediate(&self) -> bool {
        self.namespace() == Namespace::Immediate
    }

    /// The payload, if this is an immediate number.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Immediate(n) => Some(*n),
        }
    }

    /// Non-zero immediates are truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Immediate(n) => n.is_truthy(),
        }
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Immediate(n)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Immediate(n) => write!(f, "{}", n),
        }
    }
}
