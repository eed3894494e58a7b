//! Formatters that render one label plus its position flags.

use crate::types::FormatStyle;

/// Renders `answer` for output. `is_first` and `is_last` let a formatter
/// change punctuation at the ends of the sequence.
pub trait Formatter {
    fn format(&self, answer: &str, is_first: bool, is_last: bool) -> String;
}

impl<F> Formatter for F
where
    F: Fn(&str, bool, bool) -> String,
{
    fn format(&self, answer: &str, is_first: bool, is_last: bool) -> String {
        self(answer, is_first, is_last)
    }
}

/// One label per line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineFormatter;

impl Formatter for LineFormatter {
    fn format(&self, answer: &str, _is_first: bool, _is_last: bool) -> String {
        format!("{answer}\n")
    }
}

/// Comma separated labels closed by a period: `1, 2, Fizz.`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListFormatter;

impl Formatter for ListFormatter {
    fn format(&self, answer: &str, _is_first: bool, is_last: bool) -> String {
        if is_last {
            format!("{answer}.")
        } else {
            format!("{answer}, ")
        }
    }
}

/// Formatter selected at runtime from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinFormatter {
    Lines,
    List,
}

impl From<FormatStyle> for BuiltinFormatter {
    fn from(style: FormatStyle) -> Self {
        match style {
            FormatStyle::Lines => Self::Lines,
            FormatStyle::List => Self::List,
        }
    }
}

impl Formatter for BuiltinFormatter {
    fn format(&self, answer: &str, is_first: bool, is_last: bool) -> String {
        match self {
            Self::Lines => LineFormatter.format(answer, is_first, is_last),
            Self::List => ListFormatter.format(answer, is_first, is_last),
        }
    }
}
