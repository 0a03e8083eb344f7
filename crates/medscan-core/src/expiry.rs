//! Expiry-date parsing and evaluation.
//!
//! Package labels print expiry as a month and year only. [`parse_expiry`]
//! tries an ordered list of [`ExpiryFormat`]s and pins the day to the first
//! of the month; [`evaluate`] compares the result against a caller-supplied
//! "today".

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A month/year layout accepted on package labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpiryFormat {
    /// `2025-08`
    YearMonth,
    /// `08/2025`
    MonthSlashYear,
    /// `08-2025`
    MonthDashYear,
    /// `Aug-2025`
    AbbrevMonthYear,
    /// `August-2025`
    FullMonthYear,
}

impl ExpiryFormat {
    /// Formats in the order they are tried. Numeric layouts come first so a
    /// string like `08-2025` is never read as a month name.
    pub const ORDERED: [ExpiryFormat; 5] = [
        ExpiryFormat::YearMonth,
        ExpiryFormat::MonthSlashYear,
        ExpiryFormat::MonthDashYear,
        ExpiryFormat::AbbrevMonthYear,
        ExpiryFormat::FullMonthYear,
    ];

    /// strftime-style descriptor of the label layout.
    #[must_use]
    pub fn descriptor(self) -> &'static str {
        match self {
            ExpiryFormat::YearMonth => "%Y-%m",
            ExpiryFormat::MonthSlashYear => "%m/%Y",
            ExpiryFormat::MonthDashYear => "%m-%Y",
            ExpiryFormat::AbbrevMonthYear => "%b-%Y",
            ExpiryFormat::FullMonthYear => "%B-%Y",
        }
    }

    fn separator(self) -> char {
        match self {
            ExpiryFormat::MonthSlashYear => '/',
            _ => '-',
        }
    }

    fn year_first(self) -> bool {
        matches!(self, ExpiryFormat::YearMonth)
    }

    /// Parses a whitespace-free string in this layout, with the day fixed to 1.
    ///
    /// Returns `None` when the string does not fit the layout. Years must be
    /// exactly four digits; abbreviated month names exactly three letters.
    #[must_use]
    pub fn parse(self, s: &str) -> Option<NaiveDate> {
        let sep = self.separator();
        let (head, tail) = s.split_once(sep)?;
        let (month, year) = if self.year_first() {
            (tail, head)
        } else {
            (head, tail)
        };

        if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        match self {
            ExpiryFormat::AbbrevMonthYear if month.len() != 3 => return None,
            ExpiryFormat::FullMonthYear if month.len() <= 3 => return None,
            _ => {}
        }

        // chrono needs a day to build a date; pin it to the 1st.
        let padded = if self.year_first() {
            format!("{s}{sep}01")
        } else {
            format!("01{sep}{s}")
        };
        let full_descriptor = if self.year_first() {
            format!("{}{sep}%d", self.descriptor())
        } else {
            format!("%d{sep}{}", self.descriptor())
        };
        NaiveDate::parse_from_str(&padded, &full_descriptor).ok()
    }
}

impl fmt::Display for ExpiryFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.descriptor())
    }
}

/// Result of parsing an expiry string: a full date or nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParsedExpiry {
    Date(NaiveDate),
    Unparseable,
}

impl ParsedExpiry {
    #[must_use]
    pub fn date(self) -> Option<NaiveDate> {
        match self {
            ParsedExpiry::Date(d) => Some(d),
            ParsedExpiry::Unparseable => None,
        }
    }

    #[must_use]
    pub fn is_unparseable(self) -> bool {
        matches!(self, ParsedExpiry::Unparseable)
    }
}

impl From<Option<NaiveDate>> for ParsedExpiry {
    fn from(value: Option<NaiveDate>) -> Self {
        value.map_or(ParsedExpiry::Unparseable, ParsedExpiry::Date)
    }
}

/// Whether a medicine is past its expiry relative to some date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpiryStatus {
    Expired,
    Valid,
    Unknown,
}

impl ExpiryStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ExpiryStatus::Expired => "Expired",
            ExpiryStatus::Valid => "Valid",
            ExpiryStatus::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ExpiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parses a raw expiry string into a date.
///
/// All whitespace is removed first, then each [`ExpiryFormat::ORDERED`] layout
/// is tried in turn. Never fails; exhaustion yields
/// [`ParsedExpiry::Unparseable`].
#[must_use]
pub fn parse_expiry(raw: &str) -> ParsedExpiry {
    parse_expiry_with_format(raw).map_or(ParsedExpiry::Unparseable, |(date, _)| {
        ParsedExpiry::Date(date)
    })
}

/// Like [`parse_expiry`] but also reports which layout matched.
#[must_use]
pub fn parse_expiry_with_format(raw: &str) -> Option<(NaiveDate, ExpiryFormat)> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return None;
    }
    ExpiryFormat::ORDERED
        .iter()
        .find_map(|format| format.parse(&compact).map(|date| (date, *format)))
}

/// Classifies `parsed` relative to `today`.
///
/// A date strictly before `today` is expired; the expiry date itself still
/// counts as valid.
#[must_use]
pub fn evaluate(parsed: ParsedExpiry, today: NaiveDate) -> ExpiryStatus {
    match parsed {
        ParsedExpiry::Unparseable => ExpiryStatus::Unknown,
        ParsedExpiry::Date(date) if date < today => ExpiryStatus::Expired,
        ParsedExpiry::Date(_) => ExpiryStatus::Valid,
    }
}

#[cfg(test)]
#[path = "expiry_test.rs"]
mod tests;
