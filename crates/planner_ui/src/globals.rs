//! Optional values the hosting page declares for the chat context.

/// Names the hosting template may declare, with `var`, `const`, `let`, or as
/// a `window` property.
pub const DESTINATION_GLOBAL: &str = "DESTINATION";
pub const DAYS_GLOBAL: &str = "DAYS";

/// A page global as the browser reports it.
#[derive(Debug, Clone, PartialEq)]
pub enum PageGlobal {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    /// Objects, functions, symbols and the like.
    Other,
}

impl PageGlobal {
    /// Context text for the chat request. `None` means the default applies.
    pub fn into_context_text(self) -> Option<String> {
        match self {
            Self::Undefined | Self::Null | Self::Other => None,
            Self::Bool(flag) => Some(flag.to_string()),
            Self::Number(number) if number.is_finite() => Some(number.to_string()),
            Self::Number(_) => None,
            Self::Text(text) => Some(text),
        }
    }
}

#[cfg(test)]
#[path = "tests/globals_tests.rs"]
mod tests;
