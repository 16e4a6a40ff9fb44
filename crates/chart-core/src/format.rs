// File: crates/chart-core/src/format.rs
// Summary: Time-series formatter: timestamp parsing, HH:MM:SS labels, display records, value text.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};

use crate::error::ChartError;
use crate::record::{Dataset, FieldValue, Record};

/// Label produced for a missing or unparseable timestamp.
pub const INVALID_DATE: &str = "Invalid Date";
/// Extra field name under which a display record exposes its time label.
pub const FORMATTED_TIME_KEY: &str = "formattedTime";

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Renders timestamps as `HH:MM:SS` in one fixed offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeFormatter {
    offset: FixedOffset,
}

impl TimeFormatter {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    pub fn utc() -> Self {
        Self::new(Utc.fix())
    }

    /// Host offset at the time of the call; stays fixed afterwards.
    pub fn local() -> Self {
        Self::new(chrono::Local::now().offset().fix())
    }

    /// Accepts `Z`, `UTC`, `+HH:MM`, `-HHMM` and `+HH`.
    pub fn with_offset_str(s: &str) -> Result<Self, ChartError> {
        parse_offset(s)
            .map(Self::new)
            .ok_or_else(|| ChartError::InvalidOffset(s.to_string()))
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Interpret a field as a point in time. Numbers are epoch milliseconds;
    /// date-times without an offset are read in this formatter's offset.
    pub fn parse(&self, value: &FieldValue) -> Option<DateTime<Utc>> {
        match value {
            FieldValue::Number(ms) => from_epoch_millis(*ms),
            FieldValue::Text(s) => self.parse_text(s.trim()),
            FieldValue::Null => None,
        }
    }

    fn parse_text(&self, s: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.with_timezone(&Utc));
        }
        for fmt in NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
                return self
                    .offset
                    .from_local_datetime(&naive)
                    .single()
                    .map(|dt| dt.with_timezone(&Utc));
            }
        }
        // Date-only forms are UTC midnight.
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|naive| Utc.from_utc_datetime(&naive))
    }

    /// `HH:MM:SS` label for a timestamp field, or [`INVALID_DATE`].
    pub fn label(&self, value: Option<&FieldValue>) -> String {
        match value.and_then(|v| self.parse(v)) {
            Some(dt) => dt.with_timezone(&self.offset).format("%H:%M:%S").to_string(),
            None => INVALID_DATE.to_string(),
        }
    }
}

impl Default for TimeFormatter {
    fn default() -> Self {
        Self::utc()
    }
}

fn from_epoch_millis(ms: f64) -> Option<DateTime<Utc>> {
    if !ms.is_finite() || ms.abs() > i64::MAX as f64 {
        return None;
    }
    DateTime::from_timestamp_millis(ms.trunc() as i64)
}

fn parse_offset(s: &str) -> Option<FixedOffset> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("z") || s.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0);
    }
    let (sign, rest) = match s.as_bytes().first()? {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => return None,
    };
    if !rest.is_ascii() {
        return None;
    }
    let (hh, mm) = match rest.len() {
        2 => (rest, "00"),
        4 => (&rest[..2], &rest[2..]),
        5 if rest.as_bytes()[2] == b':' => (&rest[..2], &rest[3..]),
        _ => return None,
    };
    if !(hh.bytes().all(|c| c.is_ascii_digit()) && mm.bytes().all(|c| c.is_ascii_digit())) {
        return None;
    }
    let (h, m) = (hh.parse::<i32>().ok()?, mm.parse::<i32>().ok()?);
    if h > 23 || m > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (h * 3600 + m * 60))
}

/// A record plus its precomputed time label. Borrows the source record, so all
/// original fields stay visible.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayRecord<'a> {
    pub index: usize,
    pub record: &'a Record,
    pub time_label: String,
}

impl<'a> DisplayRecord<'a> {
    /// Field lookup including the synthetic [`FORMATTED_TIME_KEY`] field.
    pub fn get(&self, key: &str) -> Option<FieldValue> {
        if key == FORMATTED_TIME_KEY {
            return Some(FieldValue::Text(self.time_label.clone()));
        }
        self.record.get(key).cloned()
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        self.record.number(key)
    }

    /// Owned copy of the record with the label stored under [`FORMATTED_TIME_KEY`].
    pub fn to_record(&self) -> Record {
        self.record
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .chain(std::iter::once((
                FORMATTED_TIME_KEY.to_string(),
                FieldValue::Text(self.time_label.clone()),
            )))
            .collect()
    }
}

/// Lazily map every record to a display record, 1:1 and in order.
pub fn display_records<'a>(
    dataset: &'a Dataset,
    x_key: &'a str,
    formatter: TimeFormatter,
) -> impl ExactSizeIterator<Item = DisplayRecord<'a>> + 'a {
    dataset.iter().enumerate().map(move |(index, record)| DisplayRecord {
        index,
        record,
        time_label: formatter.label(record.get(x_key)),
    })
}

/// Value rounded to two decimals followed by the unit suffix as given.
pub fn format_value(value: f64, unit: Option<&str>) -> String {
    format!("{:.2}{}", value, unit.unwrap_or(""))
}
