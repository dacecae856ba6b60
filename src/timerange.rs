//! Time-range windows and conversation filtering
//!
//! Translates a dashboard range selection plus an explicit `now` into an
//! inclusive start/end window, then narrows a conversation list by a chosen
//! timestamp field. Two window semantics coexist in the dashboard and the
//! choice is an explicit parameter here:
//! - `Calendar`: since local midnight / Sunday-anchored start of week /
//!   first of month, with no upper bound (distribution views)
//! - `Trailing`: the trailing 7x24h or 30x24h through `now` (trend views)
//!
//! `now` is always passed in; nothing in this module reads the wall clock.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::Conversation;

/// Custom from/to selection from the date-range picker. Dates only; the
/// window derivation expands them to full days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

/// Dashboard range selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RangeSelection {
    Today,
    Week,
    Month,
    /// Explicit calendar month; `month` is zero-based (0 = January).
    SelectMonth { month: u32, year: i32 },
    Custom(DateRange),
    /// Pass-through: no filtering. Also the fallback for any mode string we
    /// don't recognize, so an unknown mode never drops data.
    All,
}

impl From<&str> for RangeSelection {
    fn from(s: &str) -> Self {
        match s {
            "today" => Self::Today,
            "week" => Self::Week,
            "month" => Self::Month,
            _ => Self::All,
        }
    }
}

/// Which window interpretation a call site wants for Today/Week/Month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowSemantics {
    /// Calendar-aligned start, open-ended.
    Calendar,
    /// Trailing N x 24h through `now`, inclusive of `now`.
    Trailing,
}

/// Which conversation timestamp the filter inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimestampField {
    StartedAt,
    LastUpdated,
}

impl TimestampField {
    fn get(&self, conversation: &Conversation) -> NaiveDateTime {
        match self {
            Self::StartedAt => conversation.started_at,
            Self::LastUpdated => conversation.last_updated,
        }
    }
}

/// Inclusive time window. A `None` bound is unbounded on that side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

impl Window {
    /// The pass-through window.
    pub fn unbounded() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    /// Both bounds are inclusive.
    pub fn contains(&self, t: NaiveDateTime) -> bool {
        if let Some(start) = self.start {
            if t < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if t > end {
                return false;
            }
        }
        true
    }
}

/// Last representable instant of a calendar day (23:59:59.999 local).
fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_milli_opt(23, 59, 59, 999)
        .unwrap_or_else(|| date.and_time(chrono::NaiveTime::MIN))
}

fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(chrono::NaiveTime::MIN)
}

/// The Sunday starting the week that contains `date`.
pub fn week_start_sunday(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

/// Compute the inclusive window for a selection.
pub fn range_window(
    selection: &RangeSelection,
    semantics: WindowSemantics,
    now: NaiveDateTime,
) -> Window {
    match selection {
        RangeSelection::Today => match semantics {
            WindowSemantics::Calendar => Window {
                start: Some(start_of_day(now.date())),
                end: None,
            },
            WindowSemantics::Trailing => Window {
                start: Some(start_of_day(now.date())),
                end: Some(now),
            },
        },
        RangeSelection::Week => match semantics {
            WindowSemantics::Calendar => Window {
                start: Some(start_of_day(week_start_sunday(now.date()))),
                end: None,
            },
            WindowSemantics::Trailing => Window {
                start: Some(now - Duration::days(7)),
                end: Some(now),
            },
        },
        RangeSelection::Month => match semantics {
            WindowSemantics::Calendar => {
                let first = now.date().with_day(1).unwrap_or(now.date());
                Window {
                    start: Some(start_of_day(first)),
                    end: None,
                }
            }
            WindowSemantics::Trailing => Window {
                start: Some(now - Duration::days(30)),
                end: Some(now),
            },
        },
        RangeSelection::SelectMonth { month, year } => select_month_window(*month, *year),
        RangeSelection::Custom(range) => custom_window(range),
        RangeSelection::All => Window::unbounded(),
    }
}

/// Window covering one explicit calendar month (zero-based month index).
/// An out-of-range month falls open rather than failing.
fn select_month_window(month: u32, year: i32) -> Window {
    let first = match NaiveDate::from_ymd_opt(year, month + 1, 1) {
        Some(d) => d,
        None => {
            tracing::warn!("invalid month selection {}/{}, not filtering", month, year);
            return Window::unbounded();
        }
    };
    let next_first = if month >= 11 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 2, 1)
    };
    let last = next_first
        .and_then(|d| d.pred_opt())
        .unwrap_or(first);
    Window {
        start: Some(start_of_day(first)),
        end: Some(end_of_day(last)),
    }
}

/// Custom windows always normalize the end bound to end-of-day so that a
/// same-day from/to selection still includes the whole day. A missing
/// `from` makes the filter a pass-through.
fn custom_window(range: &DateRange) -> Window {
    let from = match range.from {
        Some(from) => from,
        None => return Window::unbounded(),
    };
    let to = range.to.unwrap_or(from);
    Window {
        start: Some(start_of_day(from)),
        end: Some(end_of_day(to)),
    }
}

/// Narrow a conversation list to the selection's window. Output is always a
/// subset of the input; boundary timestamps are included.
pub fn filter_by_range(
    conversations: &[Conversation],
    selection: &RangeSelection,
    semantics: WindowSemantics,
    field: TimestampField,
    now: NaiveDateTime,
) -> Vec<Conversation> {
    let window = range_window(selection, semantics, now);
    conversations
        .iter()
        .filter(|c| window.contains(field.get(c)))
        .cloned()
        .collect()
}
