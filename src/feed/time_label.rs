// SPDX-License-Identifier: MPL-2.0
//! Relative time labels for post headers.
//!
//! Anything younger than [`JUST_NOW_THRESHOLD_SECS`] reads "just now". Older
//! posts get minutes, hours or days, and anything a week old or more is
//! shown as a date that always carries the weekday.

use crate::i18n::fluent::I18n;
use chrono::{DateTime, Datelike, Duration, Local, TimeZone, Utc, Weekday};

/// Posts younger than this many seconds are labelled "just now".
pub const JUST_NOW_THRESHOLD_SECS: i64 = 120;

/// Classified age of a post, rendered through the localization bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeLabel {
    JustNow,
    MinutesAgo(i64),
    HoursAgo(i64),
    Yesterday,
    DaysAgo(i64),
    Date {
        weekday: Weekday,
        month: u32,
        day: u32,
        /// Only set when the year differs from the current one.
        year: Option<i32>,
    },
}

impl TimeLabel {
    /// Classifies `timestamp` relative to `now` using the local calendar.
    #[must_use]
    pub fn classify(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        Self::classify_in(timestamp, now, &Local)
    }

    /// Classifies `timestamp` relative to `now`, resolving calendar days
    /// in `tz`.
    pub fn classify_in<Tz: TimeZone>(
        timestamp: DateTime<Utc>,
        now: DateTime<Utc>,
        tz: &Tz,
    ) -> Self {
        // Future timestamps (clock skew) are negative and fall in here too.
        let elapsed = now - timestamp;
        if elapsed < Duration::seconds(JUST_NOW_THRESHOLD_SECS) {
            return TimeLabel::JustNow;
        }
        if elapsed < Duration::hours(1) {
            return TimeLabel::MinutesAgo(elapsed.num_minutes());
        }
        if elapsed < Duration::days(1) {
            return TimeLabel::HoursAgo(elapsed.num_hours());
        }

        let then_local = timestamp.with_timezone(tz);
        let now_local = now.with_timezone(tz);
        if elapsed < Duration::weeks(1) {
            let days = (now_local.date_naive() - then_local.date_naive())
                .num_days()
                .max(1);
            return if days == 1 {
                TimeLabel::Yesterday
            } else {
                TimeLabel::DaysAgo(days)
            };
        }

        TimeLabel::Date {
            weekday: then_local.weekday(),
            month: then_local.month(),
            day: then_local.day(),
            year: (then_local.year() != now_local.year()).then(|| then_local.year()),
        }
    }

    /// Localized label text.
    #[must_use]
    pub fn render(&self, i18n: &I18n) -> String {
        match *self {
            TimeLabel::JustNow => i18n.tr("time-just-now"),
            TimeLabel::MinutesAgo(count) => {
                i18n.tr_with_args("time-minutes-ago", &[("count", count.to_string().as_str())])
            }
            TimeLabel::HoursAgo(count) => {
                i18n.tr_with_args("time-hours-ago", &[("count", count.to_string().as_str())])
            }
            TimeLabel::Yesterday => i18n.tr("time-yesterday"),
            TimeLabel::DaysAgo(count) => {
                i18n.tr_with_args("time-days-ago", &[("count", count.to_string().as_str())])
            }
            TimeLabel::Date {
                weekday,
                month,
                day,
                year,
            } => {
                let weekday = i18n.tr(weekday_key(weekday));
                let month = i18n.tr(&format!("month-{month}"));
                let day = day.to_string();
                match year {
                    Some(year) => i18n.tr_with_args(
                        "time-date-with-year",
                        &[
                            ("weekday", weekday.as_str()),
                            ("month", month.as_str()),
                            ("day", day.as_str()),
                            ("year", year.to_string().as_str()),
                        ],
                    ),
                    None => i18n.tr_with_args(
                        "time-date",
                        &[
                            ("weekday", weekday.as_str()),
                            ("month", month.as_str()),
                            ("day", day.as_str()),
                        ],
                    ),
                }
            }
        }
    }
}

/// Convenience wrapper: classify with the local calendar and render.
#[must_use]
pub fn label(timestamp: DateTime<Utc>, now: DateTime<Utc>, i18n: &I18n) -> String {
    TimeLabel::classify(timestamp, now).render(i18n)
}

fn weekday_key(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "weekday-mon",
        Weekday::Tue => "weekday-tue",
        Weekday::Wed => "weekday-wed",
        Weekday::Thu => "weekday-thu",
        Weekday::Fri => "weekday-fri",
        Weekday::Sat => "weekday-sat",
        Weekday::Sun => "weekday-sun",
    }
}
