use thiserror::Error;

/// All errors produced by vanitycal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CalendarError {
    /// A date or month-day token did not match its expected format.
    #[error("invalid {kind} format '{input}' (expected {expected})")]
    InvalidDate {
        kind: &'static str,
        input: String,
        expected: &'static str,
    },

    /// Calendar arithmetic left the range jiff can represent.
    #[error("date out of range: {message}")]
    OutOfRange { message: String },

    /// Structural problem in the configuration document.
    #[error("{message}")]
    Config { message: String },
}

impl CalendarError {
    pub fn invalid_date(input: impl Into<String>) -> Self {
        Self::InvalidDate {
            kind: "date",
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    pub fn invalid_month_day(input: impl Into<String>) -> Self {
        Self::InvalidDate {
            kind: "month_day",
            input: input.into(),
            expected: "MM-DD",
        }
    }

    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::OutOfRange {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Prefix the message with a 1-based event number, as validation reports it.
    pub fn for_event(self, number: usize) -> Self {
        Self::config(format!("event {number}: {self}"))
    }
}
