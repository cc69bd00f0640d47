use std::fmt;

use ordered_float::NotNan;

/// A value stored by the script driver: either a number or a bare symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    Number(NotNan<f64>),
    Symbol(String),
}

impl Element {
    /// Reads a token as a number when it parses as a non-NaN float, otherwise
    /// keeps it as a symbol.
    pub fn parse(token: &str) -> Element {
        match token.parse::<f64>().ok().and_then(|v| NotNan::new(v).ok()) {
            Some(value) => Element::Number(value),
            None => Element::Symbol(token.to_string()),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Number(value) => write!(f, "{}", value),
            Element::Symbol(symbol) => write!(f, "{}", symbol),
        }
    }
}
