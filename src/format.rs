//! Format descriptors for wall-clock values.
//!
//! Patterns use the conventional letter language (`yyyy-MM-dd HH:mm:ss`,
//! `yyyyMMddHHmmss`, ...). A [`DateFormat`] is compiled once into a chrono
//! strftime string and validated up front, so formatting a full date-time with
//! it cannot fail.

use std::fmt::{self, Write};
use std::str::FromStr;

use chrono::format::{Fixed, Item, StrftimeItems};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;

use crate::constants::{DEFAULT_DATE_TIME_PATTERN, DEFAULT_DATE_TIME_STRFTIME};
use crate::error::{Result, TemporalError};

/// Shared `yyyy-MM-dd HH:mm:ss` descriptor.
pub static DATETIME_FORMAT: Lazy<DateFormat> = Lazy::new(DateFormat::default);

/// A validated, pre-compiled format pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat {
    pattern: String,
    strftime: String,
}

impl DateFormat {
    /// Compile a letter pattern such as `yyyy-MM-dd HH:mm:ss`.
    ///
    /// # Errors
    /// Returns [`TemporalError::InvalidPattern`] for unknown letters, zone
    /// letters, optional sections, unsupported widths and unterminated quotes.
    pub fn of_pattern(pattern: &str) -> Result<Self> {
        let strftime = translate(pattern)?;
        validate_strftime(pattern, &strftime)?;
        Ok(Self {
            pattern: pattern.to_string(),
            strftime,
        })
    }

    /// Use a chrono strftime string (`%Y-%m-%d`) as-is.
    ///
    /// # Errors
    /// Returns [`TemporalError::InvalidPattern`] when chrono cannot parse the
    /// string or when it asks for a zone field.
    pub fn from_strftime(strftime: &str) -> Result<Self> {
        validate_strftime(strftime, strftime)?;
        Ok(Self {
            pattern: strftime.to_string(),
            strftime: strftime.to_string(),
        })
    }

    /// The pattern this descriptor was built from.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The compiled chrono strftime string.
    #[must_use]
    pub fn strftime(&self) -> &str {
        &self.strftime
    }

    /// Format a date-time. Every field a valid descriptor can name is present
    /// on a `NaiveDateTime`.
    #[must_use]
    pub fn format(&self, value: &NaiveDateTime) -> String {
        value.format(&self.strftime).to_string()
    }

    /// Format a date. Fails if the pattern names clock fields.
    pub fn format_date(&self, value: &NaiveDate) -> Result<String> {
        self.render(value.format(&self.strftime))
    }

    /// Format a time of day. Fails if the pattern names calendar fields.
    pub fn format_time(&self, value: &NaiveTime) -> Result<String> {
        self.render(value.format(&self.strftime))
    }

    fn render(&self, delayed: impl fmt::Display) -> Result<String> {
        let mut out = String::new();
        write!(out, "{}", delayed).map_err(|_| {
            TemporalError::invalid_pattern(&self.pattern, "pattern names fields the value does not carry")
        })?;
        Ok(out)
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_DATE_TIME_PATTERN.to_string(),
            strftime: DEFAULT_DATE_TIME_STRFTIME.to_string(),
        }
    }
}

impl FromStr for DateFormat {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self> {
        Self::of_pattern(s)
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

/// Translate a letter pattern into a strftime string.
fn translate(pattern: &str) -> Result<String> {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\'' => {
                if chars.peek() == Some(&'\'') {
                    chars.next();
                    out.push('\'');
                    continue;
                }
                let mut closed = false;
                while let Some(q) = chars.next() {
                    if q == '\'' {
                        if chars.peek() == Some(&'\'') {
                            chars.next();
                            out.push('\'');
                            continue;
                        }
                        closed = true;
                        break;
                    }
                    push_literal(&mut out, q);
                }
                if !closed {
                    return Err(TemporalError::invalid_pattern(pattern, "unterminated quoted literal"));
                }
            }
            '[' | ']' => {
                return Err(TemporalError::invalid_pattern(pattern, "optional sections are not supported"));
            }
            '{' | '}' | '#' => {
                return Err(TemporalError::invalid_pattern(
                    pattern,
                    format!("reserved character '{}'", c),
                ));
            }
            c if c.is_ascii_alphabetic() => {
                let mut count = 1;
                while chars.peek() == Some(&c) {
                    chars.next();
                    count += 1;
                }
                out.push_str(specifier(pattern, c, count)?);
            }
            c => push_literal(&mut out, c),
        }
    }

    Ok(out)
}

fn push_literal(out: &mut String, c: char) {
    if c == '%' {
        out.push_str("%%");
    } else {
        out.push(c);
    }
}

fn specifier(pattern: &str, letter: char, count: usize) -> Result<&'static str> {
    let spec = match (letter, count) {
        ('y' | 'u', 2) => "%y",
        ('y' | 'u', 1..=4) => "%Y",
        ('M' | 'L', 1) => "%-m",
        ('M' | 'L', 2) => "%m",
        ('M' | 'L', 3) => "%b",
        ('M' | 'L', 4) => "%B",
        ('d', 1) => "%-d",
        ('d', 2) => "%d",
        ('D', 1) => "%-j",
        ('D', 3) => "%j",
        ('H', 1) => "%-H",
        ('H', 2) => "%H",
        ('h', 1) => "%-I",
        ('h', 2) => "%I",
        ('m', 1) => "%-M",
        ('m', 2) => "%M",
        ('s', 1) => "%-S",
        ('s', 2) => "%S",
        ('S', 3) => "%3f",
        ('S', 6) => "%6f",
        ('S', 9) => "%9f",
        ('S', _) => {
            return Err(TemporalError::invalid_pattern(
                pattern,
                format!("fraction width {} is not supported, use 3, 6 or 9 'S'", count),
            ));
        }
        ('a', 1) => "%p",
        ('E', 1..=3) => "%a",
        ('E', 4) => "%A",
        ('e' | 'c', 1) => "%u",
        ('Y', 2) => "%g",
        ('Y', 1..=4) => "%G",
        ('w', 1) => "%-V",
        ('w', 2) => "%V",
        ('k' | 'K' | 'G' | 'Q' | 'q' | 'W' | 'F' | 'n' | 'N' | 'A' | 'B', _) => {
            return Err(TemporalError::invalid_pattern(
                pattern,
                format!("pattern letter '{}' is not supported", letter),
            ));
        }
        ('z' | 'Z' | 'x' | 'X' | 'O' | 'V' | 'v', _) => {
            return Err(TemporalError::invalid_pattern(
                pattern,
                format!("zone field '{}' is not available on wall-clock values", letter),
            ));
        }
        ('y' | 'u' | 'Y' | 'M' | 'L' | 'd' | 'D' | 'H' | 'h' | 'm' | 's' | 'a' | 'E' | 'e' | 'c' | 'w', _) => {
            return Err(TemporalError::invalid_pattern(
                pattern,
                format!("too many pattern letters: '{}' x{}", letter, count),
            ));
        }
        _ => {
            return Err(TemporalError::invalid_pattern(
                pattern,
                format!("unknown pattern letter '{}'", letter),
            ));
        }
    };
    Ok(spec)
}

fn validate_strftime(pattern: &str, strftime: &str) -> Result<()> {
    for item in StrftimeItems::new(strftime) {
        match item {
            Item::Error => {
                return Err(TemporalError::invalid_pattern(pattern, "unrecognized format specifier"));
            }
            Item::Fixed(ref fixed) if needs_zone(fixed) => {
                return Err(TemporalError::invalid_pattern(
                    pattern,
                    "zone fields are not available on wall-clock values",
                ));
            }
            _ => {}
        }
    }

    // Some items (e.g. `%#z`) parse but only render with an offset.
    let sample = NaiveDate::from_ymd_opt(2018, 11, 18)
        .and_then(|date| date.and_hms_milli_opt(10, 10, 10, 10))
        .ok_or_else(|| TemporalError::OutOfRange("sample date-time".to_string()))?;
    let mut rendered = String::new();
    write!(rendered, "{}", sample.format(strftime)).map_err(|_| {
        TemporalError::invalid_pattern(pattern, "format specifier cannot be rendered on wall-clock values")
    })?;
    Ok(())
}

fn needs_zone(fixed: &Fixed) -> bool {
    matches!(
        fixed,
        Fixed::TimezoneName
            | Fixed::TimezoneOffset
            | Fixed::TimezoneOffsetColon
            | Fixed::TimezoneOffsetDoubleColon
            | Fixed::TimezoneOffsetTripleColon
            | Fixed::TimezoneOffsetColonZ
            | Fixed::TimezoneOffsetZ
            | Fixed::RFC2822
            | Fixed::RFC3339
    )
}
