//! Offset arithmetic on a timezone-aware anchor.
//!
//! Month and day offsets are calendar arithmetic on the anchor's local wall
//! clock. A day number that does not exist in the target month rolls into the
//! following month, so `2023-01-31` plus one month is `2023-03-03`. Hour and
//! second offsets are plain durations.

use chrono::{
    DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveDateTime, Offset,
    TimeZone,
};

use super::types::{OffsetUnit, ParsedMacro};

impl ParsedMacro {
    /// Apply every offset of this placeholder to `anchor`, in order.
    ///
    /// The primary offset goes first, then month, day, hour and second terms.
    /// Each step starts from the result of the previous one. Returns `None`
    /// if a step leaves the range chrono can represent.
    pub fn offset_time<Tz: TimeZone>(&self, anchor: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        let mut t = anchor.clone();

        if let (Some(amount), Some(unit)) = (self.offset, self.kind.primary_unit()) {
            t = apply(&t, amount, unit)?;
        }

        let terms = [
            (self.offset_month, OffsetUnit::Months),
            (self.offset_day, OffsetUnit::Days),
            (self.offset_hour, OffsetUnit::Hours),
            (self.offset_second, OffsetUnit::Seconds),
        ];
        for (amount, unit) in terms {
            if let Some(amount) = amount {
                t = apply(&t, amount, unit)?;
            }
        }

        Some(t)
    }
}

/// Shift `t` by `amount` of `unit`.
pub fn apply<Tz: TimeZone>(
    t: &DateTime<Tz>,
    amount: i64,
    unit: OffsetUnit,
) -> Option<DateTime<Tz>> {
    match unit {
        OffsetUnit::Months => add_calendar(t, amount, 0),
        OffsetUnit::Days => add_calendar(t, 0, amount),
        OffsetUnit::Hours => t.clone().checked_add_signed(Duration::try_hours(amount)?),
        OffsetUnit::Seconds => t.clone().checked_add_signed(Duration::try_seconds(amount)?),
    }
}

/// Add months, then days, to the local date of `t`, keeping its time of day.
fn add_calendar<Tz: TimeZone>(
    t: &DateTime<Tz>,
    months: i64,
    days: i64,
) -> Option<DateTime<Tz>> {
    let local = t.naive_local();

    let total_months = i64::from(local.year())
        .checked_mul(12)?
        .checked_add(i64::from(local.month0()))?
        .checked_add(months)?;
    let year = i32::try_from(total_months.div_euclid(12)).ok()?;
    let month = u32::try_from(total_months.rem_euclid(12)).ok()? + 1;

    // Day overflow is measured from the first of the target month.
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let day_shift = i64::from(local.day0()).checked_add(days)?;
    let date = first.checked_add_signed(Duration::try_days(day_shift)?)?;

    localize(t, date.and_time(local.time()))
}

/// Map a wall-clock time back into the timezone of `reference`.
///
/// Ambiguous times (DST fall-back) take the earlier instant. Times that fall
/// in a DST gap keep the UTC offset `reference` had.
fn localize<Tz: TimeZone>(
    reference: &DateTime<Tz>,
    local: NaiveDateTime,
) -> Option<DateTime<Tz>> {
    let tz = reference.timezone();
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(earliest, _) => Some(earliest),
        LocalResult::None => {
            let offset = reference.offset().fix().local_minus_utc();
            let utc = local.checked_sub_signed(Duration::try_seconds(i64::from(offset))?)?;
            Some(tz.from_utc_datetime(&utc))
        }
    }
}
