//! Canonical span of a leave request.
//!
//! A request either carries structured `from`/`to` fields or a free-text
//! `dateRange` whose delimiter varies between producers. Every consumer that
//! needs a span or a duration goes through [`RangeResolver`].

use std::fmt;

use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;
use utoipa::ToSchema;

use super::dates::{parse_date, parse_day_month, shift_years};
use crate::error::InsightError;
use crate::model::leave_request::LeaveRequest;
use crate::model::non_blank;

/// Delimiters tried in order; the first yielding exactly two non-empty
/// segments wins. Bare `-` is handled last, see [`split_range`].
const DELIMITERS: [&str; 3] = [" - ", " to ", "to"];

/// One end of a resolved span: a parsed day, or the raw text when parsing
/// failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RangeBound {
    Date(NaiveDate),
    Raw(String),
}

impl RangeBound {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            RangeBound::Date(day) => Some(*day),
            RangeBound::Raw(_) => None,
        }
    }
}

impl fmt::Display for RangeBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeBound::Date(day) => write!(f, "{}", day.format("%Y-%m-%d")),
            RangeBound::Raw(raw) => f.write_str(raw),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedRange {
    #[schema(example = "2026-01-22", value_type = String)]
    pub from: RangeBound,
    #[schema(example = "2026-01-24", value_type = String)]
    pub to: RangeBound,
    /// Inclusive of both ends; 1 when either end did not parse
    #[schema(example = 3)]
    pub duration_days: i64,
    /// Both ends parsed as days
    pub exact: bool,
}

impl ResolvedRange {
    fn between(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: RangeBound::Date(from),
            to: RangeBound::Date(to),
            duration_days: (to - from).num_days().abs() + 1,
            exact: true,
        }
    }

    fn unparsed(from: &str, to: &str) -> Self {
        Self {
            from: RangeBound::Raw(from.to_string()),
            to: RangeBound::Raw(to.to_string()),
            duration_days: 1,
            exact: false,
        }
    }

    pub fn dates(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.from.date()?, self.to.date()?))
    }
}

/// Resolves spans; yearless text such as "22 Jan - 24 Jan" is placed in
/// `reference_year` unless the other end names a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeResolver {
    reference_year: i32,
}

impl RangeResolver {
    pub fn new(reference_year: i32) -> Self {
        Self { reference_year }
    }

    /// Uses the local calendar year for yearless text.
    pub fn current() -> Self {
        Self::new(Local::now().year())
    }

    pub fn resolve(&self, request: &LeaveRequest) -> Result<ResolvedRange, InsightError> {
        let from = non_blank(request.from.as_deref());
        let to = non_blank(request.to.as_deref());

        // Structured fields win whenever both parse.
        if let (Some(from), Some(to)) = (from, to) {
            if let (Some(start), Some(end)) = (parse_date(from), parse_date(to)) {
                return Ok(ResolvedRange::between(start, end));
            }
        }

        if let Some(text) = non_blank(request.date_range.as_deref()) {
            return Ok(self.resolve_text(&request.id, text));
        }

        match (from, to) {
            (Some(from), Some(to)) => Ok(self.resolve_segments(&request.id, from, to)),
            (Some(day), None) | (None, Some(day)) => {
                Ok(self.resolve_segments(&request.id, day, day))
            }
            (None, None) => Err(InsightError::MissingDateRange {
                id: request.id.clone(),
            }),
        }
    }

    /// Resolves a free-text range. Text with no recognizable delimiter is
    /// treated as a single day.
    pub fn resolve_text(&self, id: &str, text: &str) -> ResolvedRange {
        match split_range(text) {
            Some((from, to)) => self.resolve_segments(id, &from, &to),
            None => self.resolve_segments(id, text.trim(), text.trim()),
        }
    }

    fn resolve_segments(&self, id: &str, from: &str, to: &str) -> ResolvedRange {
        match self.pin_years(from, to) {
            Some((start, end)) => ResolvedRange::between(start, end),
            None => {
                tracing::warn!(
                    request_id = %id,
                    from,
                    to,
                    "Unparseable leave range, defaulting duration to 1 day"
                );
                ResolvedRange::unparsed(from, to)
            }
        }
    }

    /// Parses both segments, lending a year to a segment that lacks one.
    /// A yearless end that would precede its start rolls into the next year
    /// ("28 Dec - 3 Jan").
    fn pin_years(&self, from: &str, to: &str) -> Option<(NaiveDate, NaiveDate)> {
        match (parse_date(from), parse_date(to)) {
            (Some(start), Some(end)) => Some((start, end)),
            (Some(start), None) => {
                let end = parse_day_month(to, start.year())?;
                let end = if end < start { shift_years(end, 1)? } else { end };
                Some((start, end))
            }
            (None, Some(end)) => {
                let start = parse_day_month(from, end.year())?;
                let start = if start > end { shift_years(start, -1)? } else { start };
                Some((start, end))
            }
            (None, None) => {
                let start = parse_day_month(from, self.reference_year)?;
                let end = parse_day_month(to, self.reference_year)?;
                let end = if end < start { shift_years(end, 1)? } else { end };
                Some((start, end))
            }
        }
    }
}

impl Default for RangeResolver {
    fn default() -> Self {
        Self::current()
    }
}

/// Resolves with the current year as reference for yearless text.
pub fn resolve(request: &LeaveRequest) -> Result<ResolvedRange, InsightError> {
    RangeResolver::current().resolve(request)
}

/// Splits range text into its two ends.
///
/// Bare `-` is ambiguous with ISO dates: when it produces four or more
/// pieces the ends are rebuilt as `Y-M-D` triples, so
/// "2026-01-22-2026-01-24" yields "2026-01-22" and "2026-01-24". A single ISO
/// day (three pieces) does not split.
pub fn split_range(text: &str) -> Option<(String, String)> {
    if let Some(pair) = DELIMITERS
        .iter()
        .find_map(|delimiter| two_segments(text, delimiter))
    {
        return Some(pair);
    }

    let pieces: Vec<&str> = text.split('-').map(str::trim).collect();
    if pieces.len() >= 4 {
        let from = pieces[..3].join("-");
        let to = pieces[3..pieces.len().min(6)].join("-");
        return (!from.is_empty() && !to.is_empty()).then_some((from, to));
    }
    two_segments(text, "-")
}

fn two_segments(text: &str, delimiter: &str) -> Option<(String, String)> {
    let mut parts = text.split(delimiter);
    let (first, second) = (parts.next()?.trim(), parts.next()?.trim());
    if parts.next().is_some() || first.is_empty() || second.is_empty() {
        return None;
    }
    Some((first.to_string(), second.to_string()))
}
