//! Typed cell values.

use std::fmt;

use calamine::{Data, ExcelDateTime};
use chrono::{Duration, NaiveDateTime, NaiveTime, Timelike};
use serde::{Serialize, Serializer};

/// Largest float that still converts exactly to an integer
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// Whole numbers below this print without an exponent
const MAX_PLAIN_INT: f64 = 1e16;

const MS_PER_DAY: f64 = 86_400_000.0;
const MICROS_PER_DAY: i64 = 86_400_000_000;

/// A single spreadsheet cell, keeping its original scalar type
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    /// Empty cell
    #[default]
    Null,
    /// Boolean cell
    Bool(bool),
    /// Numeric cell (integers are stored as floats by every workbook format)
    Number(f64),
    /// Text cell, also used for error values like `#DIV/0!`
    Text(String),
    /// Date or date-time cell
    DateTime(NaiveDateTime),
    /// Time-of-day cell: a time-formatted serial below one day
    Time(NaiveTime),
    /// Elapsed-time cell, from formats like `[h]:mm:ss`
    Duration(Duration),
}

impl Cell {
    /// Check whether this cell is empty
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    /// Borrow the text of a text cell
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value of a numeric cell
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the value of a boolean cell
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Cell::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Convert a date-formatted serial.
    ///
    /// Serials that do not map to a valid value stay numeric.
    fn from_excel_datetime(dt: &ExcelDateTime) -> Self {
        let serial = dt.as_f64();
        let millis = (serial * MS_PER_DAY).round();

        if dt.is_duration() {
            return Duration::try_milliseconds(millis as i64)
                .map(Cell::Duration)
                .unwrap_or(Cell::Number(serial));
        }

        // No date part: a bare time of day
        if (0.0..MS_PER_DAY).contains(&millis) {
            let millis = millis as u32;
            let (secs, nanos) = (millis / 1000, (millis % 1000) * 1_000_000);
            if let Some(time) = NaiveTime::from_num_seconds_from_midnight_opt(secs, nanos) {
                return Cell::Time(time);
            }
        }

        dt.as_datetime()
            .map(Cell::DateTime)
            .unwrap_or(Cell::Number(serial))
    }
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => Cell::Null,
            Data::String(s) => Cell::Text(s.clone()),
            Data::Int(i) => Cell::Number(*i as f64),
            Data::Float(f) => Cell::Number(*f),
            Data::Bool(b) => Cell::Bool(*b),
            Data::Error(e) => Cell::Text(e.to_string()),
            Data::DateTime(dt) => Cell::from_excel_datetime(dt),
            Data::DateTimeIso(s) => Cell::Text(s.clone()),
            Data::DurationIso(s) => Cell::Text(s.clone()),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Number(value as f64)
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Cell::Bool(value)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Null => Ok(()),
            Cell::Bool(true) => f.write_str("True"),
            Cell::Bool(false) => f.write_str("False"),
            Cell::Number(n) => fmt_number(*n, f),
            Cell::Text(s) => f.write_str(s),
            Cell::DateTime(dt) => {
                if dt.nanosecond() == 0 {
                    write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S"))
                } else {
                    write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S%.6f"))
                }
            }
            Cell::Time(t) => {
                if t.nanosecond() == 0 {
                    write!(f, "{}", t.format("%H:%M:%S"))
                } else {
                    write!(f, "{}", t.format("%H:%M:%S%.6f"))
                }
            }
            Cell::Duration(d) => fmt_duration(d, f),
        }
    }
}

/// Whole numbers print as integers; others use the shortest round-trip
/// digits, switching to `1e+16` / `1e-05` style outside `1e-4..1e16`.
fn fmt_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_nan() {
        return f.write_str("nan");
    }
    if n.is_infinite() {
        return f.write_str(if n > 0.0 { "inf" } else { "-inf" });
    }
    if n.fract() == 0.0 && n.abs() < MAX_PLAIN_INT {
        return write!(f, "{:.0}", n);
    }

    let sci = format!("{:e}", n);
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((&sci, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if (-4..16).contains(&exponent) {
        write!(f, "{}", n)
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        write!(f, "{}e{}{:02}", mantissa, sign, exponent.abs())
    }
}

/// `[-]N day[s], H:MM:SS[.ffffff]`, days floored so the clock part is positive
fn fmt_duration(d: &Duration, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let micros = d
        .num_microseconds()
        .unwrap_or_else(|| d.num_milliseconds().saturating_mul(1000));
    let days = micros.div_euclid(MICROS_PER_DAY);
    let rest = micros.rem_euclid(MICROS_PER_DAY);
    let (secs, frac) = (rest / 1_000_000, rest % 1_000_000);

    if days != 0 {
        let plural = if days.abs() == 1 { "" } else { "s" };
        write!(f, "{} day{}, ", days, plural)?;
    }
    write!(f, "{}:{:02}:{:02}", secs / 3600, secs % 3600 / 60, secs % 60)?;
    if frac != 0 {
        write!(f, ".{:06}", frac)?;
    }
    Ok(())
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Cell::Null => serializer.serialize_none(),
            Cell::Bool(b) => serializer.serialize_bool(*b),
            Cell::Number(n) if n.fract() == 0.0 && n.abs() < MAX_EXACT_INT => {
                serializer.serialize_i64(*n as i64)
            }
            Cell::Number(n) => serializer.serialize_f64(*n),
            Cell::Text(s) => serializer.serialize_str(s),
            Cell::DateTime(dt) => dt.serialize(serializer),
            Cell::Time(t) => t.serialize(serializer),
            Cell::Duration(_) => serializer.collect_str(self),
        }
    }
}
