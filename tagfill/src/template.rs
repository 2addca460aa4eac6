//! `{{date:y,m,d}}` and `{{time:h,m,s}}` macros inside string annotations.

use std::sync::Arc;

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, TimeDelta};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static MACRO: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{\s*(\w+)\s*:\s*(-?[0-9]*)\s*,\s*(-?[0-9]*)\s*,\s*(-?[0-9]*)\s*\}\}").expect("macro pattern compiles")
});

/// Source of "now" for template expansion.
pub type Clock = Arc<dyn Fn() -> NaiveDateTime + Send + Sync>;

/// The local wall clock.
pub fn system_clock() -> Clock {
    Arc::new(|| Local::now().naive_local())
}

/// A clock frozen at `instant`, for reproducible expansion.
pub fn fixed_clock(instant: NaiveDateTime) -> Clock {
    Arc::new(move || instant)
}

/// Expands every macro in `text` against the local wall clock.
pub fn expand_now(text: &str) -> String {
    expand(text, Local::now().naive_local())
}

/// Expands every macro in `text` against `now`.
///
/// All macros see the same instant. Unknown kinds, macros without exactly
/// three arguments and out-of-range arithmetic are left verbatim. An empty
/// argument counts as zero.
pub fn expand(text: &str, now: NaiveDateTime) -> String {
    if !text.contains("{{") {
        return text.to_string();
    }

    MACRO
        .replace_all(text, |caps: &Captures<'_>| {
            let args = [argument(&caps[2]), argument(&caps[3]), argument(&caps[4])];
            let expanded = match &caps[1] {
                "date" => add_date(now.date(), args).map(|date| date.format("%Y-%m-%d").to_string()),
                "time" => add_clock(now, args).map(|instant| instant.format("%H:%M:%S").to_string()),
                _ => None,
            };
            expanded.unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

fn argument(raw: &str) -> i64 {
    raw.parse().unwrap_or(0)
}

/// Calendar addition with normalisation: month overflow carries into the
/// year and day overflow into the following months, so Jan 31 plus one
/// month lands on Mar 2 or 3 rather than being clamped.
fn add_date(date: NaiveDate, [years, months, days]: [i64; 3]) -> Option<NaiveDate> {
    let total_months = i64::from(date.year())
        .checked_mul(12)?
        .checked_add(i64::from(date.month0()))?
        .checked_add(years.checked_mul(12)?)?
        .checked_add(months)?;
    let year = i32::try_from(total_months.div_euclid(12)).ok()?;
    let month = u32::try_from(total_months.rem_euclid(12)).ok()? + 1;

    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let offset = TimeDelta::try_days(i64::from(date.day0()).checked_add(days)?)?;
    first.checked_add_signed(offset)
}

fn add_clock(now: NaiveDateTime, [hours, minutes, seconds]: [i64; 3]) -> Option<NaiveDateTime> {
    let offset = TimeDelta::try_hours(hours)?
        .checked_add(&TimeDelta::try_minutes(minutes)?)?
        .checked_add(&TimeDelta::try_seconds(seconds)?)?;
    now.checked_add_signed(offset)
}
