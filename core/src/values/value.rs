//! Runtime values.
//!
//! A [`Value`] is an immutable tagged union over the five kinds a plain
//! expression can produce. Scalars are stored inline; strings borrow from the
//! parsed source, so values are `Copy` and evaluation never allocates.

use core::fmt;

use num_complex::Complex64;

/// Kind of value (value's type).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Kind {
    Illegal,
    /// `true`, `false`
    Boolean,
    /// `12345`
    Integer,
    /// `123.45`
    Float,
    /// `123.45i`
    Complex,
    /// `"abc"`, `'abc'`, `` `abc` ``
    String,
}

impl Kind {
    /// Whether this kind participates in numeric promotion
    /// (`Integer`, `Float` and `Complex`).
    pub fn is_numeric(self) -> bool {
        matches!(self, Kind::Integer | Kind::Float | Kind::Complex)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Illegal => "illegal",
            Kind::Boolean => "boolean",
            Kind::Integer => "integer",
            Kind::Float => "float",
            Kind::Complex => "complex",
            Kind::String => "string",
        };
        f.write_str(name)
    }
}

/// A runtime value produced by literal conversion or by an operator.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Value<'src> {
    Bool(bool),
    Int(i64),
    Float(f64),
    Complex(Complex64),
    Str(&'src str),
}

impl<'src> Value<'src> {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Bool(_) => Kind::Boolean,
            Value::Int(_) => Kind::Integer,
            Value::Float(_) => Kind::Float,
            Value::Complex(_) => Kind::Complex,
            Value::Str(_) => Kind::String,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_complex(&self) -> Option<Complex64> {
        match self {
            Value::Complex(c) => Some(*c),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&'src str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Narrow a numeric value to an integer, truncating toward zero.
    /// `Complex` keeps only the real component. Non-numeric kinds yield 0;
    /// callers are expected to have checked [`Value::kind`] first.
    pub fn to_int(&self) -> i64 {
        match self {
            Value::Int(n) => *n,
            Value::Float(f) => *f as i64,
            Value::Complex(c) => c.re as i64,
            _ => 0,
        }
    }

    /// Widen or narrow a numeric value to a float. `Complex` keeps only the
    /// real component. Non-numeric kinds yield 0.
    pub fn to_float(&self) -> f64 {
        match self {
            Value::Int(n) => *n as f64,
            Value::Float(f) => *f,
            Value::Complex(c) => c.re,
            _ => 0.0,
        }
    }

    /// Widen a numeric value to a complex number. Non-numeric kinds yield 0.
    pub fn to_complex(&self) -> Complex64 {
        match self {
            Value::Int(n) => Complex64::new(*n as f64, 0.0),
            Value::Float(f) => Complex64::new(*f, 0.0),
            Value::Complex(c) => *c,
            _ => Complex64::new(0.0, 0.0),
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Complex(c) => format_complex(f, *c),
            Value::Str(s) => f.write_str(s),
        }
    }
}

/// Format a complex number as `(re+imi)`, e.g. `(1.5+2i)` or `(0-1i)`.
pub(crate) fn format_complex(f: &mut fmt::Formatter<'_>, c: Complex64) -> fmt::Result {
    if c.im.is_sign_negative() {
        write!(f, "({}{}i)", c.re, c.im)
    } else {
        write!(f, "({}+{}i)", c.re, c.im)
    }
}
