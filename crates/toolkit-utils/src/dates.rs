use chrono::{
    DateTime, Days, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset,
    SecondsFormat, TimeDelta, TimeZone, Utc,
};
use log::debug;
use toolkit_core::{Clock, SystemClock};

/// Longest stretch of local time a daylight-saving jump can skip
const MAX_GAP_MINUTES: u32 = 24 * 60;

/// Convenience helpers over `chrono::DateTime`.
///
/// Calendar questions ("which day is this?") are answered in the system
/// calendar ([`Local`]). Each of them has an `_in` variant that takes the
/// calendar explicitly, and every helper that depends on "now" has an `_at`
/// variant taking a [`Clock`].
pub trait DateTimeExt: Sized {
    /// ISO-8601 in UTC with whole seconds, e.g. `1970-01-01T00:00:00Z`
    fn iso8601_string(&self) -> String;

    /// First instant of the system calendar day containing this instant
    fn start_of_day(&self) -> Self {
        self.start_of_day_in(&Local)
    }

    /// First instant of the day containing this instant, as seen in `calendar`
    fn start_of_day_in<Z: TimeZone>(&self, calendar: &Z) -> Self;

    fn is_today(&self) -> bool {
        self.is_today_at(&SystemClock)
    }

    fn is_today_at<C: Clock + ?Sized>(&self, clock: &C) -> bool {
        self.is_today_in(&Local, clock)
    }

    /// Same calendar day as the clock's "now", both read in `calendar`
    fn is_today_in<Z: TimeZone, C: Clock + ?Sized>(&self, calendar: &Z, clock: &C) -> bool;

    fn is_past(&self) -> bool {
        self.is_past_at(&SystemClock)
    }

    /// Strictly before the clock's current instant
    fn is_past_at<C: Clock + ?Sized>(&self, clock: &C) -> bool;

    fn is_future(&self) -> bool {
        self.is_future_at(&SystemClock)
    }

    /// Strictly after the clock's current instant
    fn is_future_at<C: Clock + ?Sized>(&self, clock: &C) -> bool;

    /// Shifts by `days` system calendar days (negative goes back), `None` on overflow
    fn adding_days(&self, days: i64) -> Option<Self> {
        self.adding_days_in(&Local, days)
    }

    /// Shifts by `days` calendar days of `calendar`, keeping the wall-clock time there
    fn adding_days_in<Z: TimeZone>(&self, calendar: &Z, days: i64) -> Option<Self>;
}

impl<Tz: TimeZone> DateTimeExt for DateTime<Tz> {
    fn iso8601_string(&self) -> String {
        self.with_timezone(&Utc).to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    fn start_of_day_in<Z: TimeZone>(&self, calendar: &Z) -> Self {
        let date = self.with_timezone(calendar).date_naive();
        match first_instant_of(calendar, date) {
            Some(start) => start.with_timezone(&self.timezone()),
            None => {
                debug!("No valid local time on {}, keeping {:?}", date, self);
                self.clone()
            }
        }
    }

    fn is_today_in<Z: TimeZone, C: Clock + ?Sized>(&self, calendar: &Z, clock: &C) -> bool {
        let today = clock.now().with_timezone(calendar).date_naive();
        self.with_timezone(calendar).date_naive() == today
    }

    fn is_past_at<C: Clock + ?Sized>(&self, clock: &C) -> bool {
        self.with_timezone(&Utc) < clock.now()
    }

    fn is_future_at<C: Clock + ?Sized>(&self, clock: &C) -> bool {
        self.with_timezone(&Utc) > clock.now()
    }

    fn adding_days_in<Z: TimeZone>(&self, calendar: &Z, days: i64) -> Option<Self> {
        let offset = self.with_timezone(calendar).offset().fix().local_minus_utc();
        let local = self
            .naive_utc()
            .checked_add_signed(TimeDelta::seconds(i64::from(offset)))?;

        let shift = Days::new(days.unsigned_abs());
        let shifted = if days >= 0 {
            local.checked_add_days(shift)?
        } else {
            local.checked_sub_days(shift)?
        };

        let resolved = match calendar.from_local_datetime(&shifted) {
            LocalResult::Single(date) => date,
            LocalResult::Ambiguous(earliest, _) => earliest,
            LocalResult::None => resolve_skipped(calendar, shifted)?,
        };
        Some(resolved.with_timezone(&self.timezone()))
    }
}

/// Maps a local time inside a daylight-saving gap onto a real instant by
/// reading it with the offset in force just before the gap, so 02:30 in a
/// one-hour spring-forward gap always lands on 03:30.
fn resolve_skipped<Tz: TimeZone>(tz: &Tz, local: NaiveDateTime) -> Option<DateTime<Tz>> {
    let mut earlier = local;

    for _ in 0..MAX_GAP_MINUTES {
        earlier = earlier.checked_sub_signed(TimeDelta::minutes(1))?;
        if let Some(before_gap) = tz.from_local_datetime(&earlier).latest() {
            let offset = before_gap.offset().fix().local_minus_utc();
            let utc = local.checked_sub_signed(TimeDelta::seconds(i64::from(offset)))?;
            debug!("Local time {} does not exist, resolved via UTC {}", local, utc);
            return Some(tz.from_utc_datetime(&utc));
        }
    }

    debug!("No valid local time within a day before {}", local);
    None
}

/// Earliest valid instant of `date` in `tz`.
///
/// Midnight can be skipped by a daylight-saving jump, in which case the day
/// starts at the first local minute that exists.
fn first_instant_of<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> Option<DateTime<Tz>> {
    let mut candidate = date.and_time(NaiveTime::MIN);

    while candidate.date() == date {
        if let Some(start) = tz.from_local_datetime(&candidate).earliest() {
            if candidate.time() != NaiveTime::MIN {
                debug!("Local midnight skipped on {}, day starts at {}", date, candidate);
            }
            return Some(start);
        }
        candidate = candidate.checked_add_signed(TimeDelta::minutes(1))?;
    }

    None
}
