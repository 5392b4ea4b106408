use time::{Date, Month, Weekday};

pub(super) const DAYS_IN_WEEK: u16 = 7;

/// The most weeks any month can touch when weeks start on Monday
pub(super) const MAX_WEEKS: u16 = 6;

pub(super) trait WeekdayExt {
    fn index0(&self) -> u16;
}

impl WeekdayExt for Weekday {
    fn index0(&self) -> u16 {
        self.number_days_from_monday().into()
    }
}

/// A single calendar month laid out in Monday-first weeks
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct MonthGrid {
    // Invariant: always the first day of a month
    first: Date,
}

impl MonthGrid {
    pub(crate) fn containing(date: Date) -> MonthGrid {
        MonthGrid {
            first: date
                .replace_day(1)
                .expect("every month should have a first day"),
        }
    }

    pub(crate) fn year(&self) -> i32 {
        self.first.year()
    }

    pub(crate) fn month(&self) -> Month {
        self.first.month()
    }

    pub(crate) fn first_day(&self) -> Date {
        self.first
    }

    pub(crate) fn last_day(&self) -> Date {
        self.first
            .replace_day(self.len())
            .expect("last day of month should be valid")
    }

    pub(super) fn len(&self) -> u8 {
        self.month().length(self.year())
    }

    pub(super) fn title(&self) -> String {
        format!("{} {}", self.month(), self.year())
    }

    pub(crate) fn contains(&self, date: Date) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    pub(crate) fn next(&self) -> Option<MonthGrid> {
        self.last_day().next_day().map(MonthGrid::containing)
    }

    pub(crate) fn previous(&self) -> Option<MonthGrid> {
        self.first.previous_day().map(MonthGrid::containing)
    }

    /// Column (0 = Monday) of the first day of the month
    fn offset(&self) -> u16 {
        self.first.weekday().index0()
    }

    pub(super) fn days(&self) -> impl Iterator<Item = Date> + '_ {
        (1..=self.len()).filter_map(|day| self.first.replace_day(day).ok())
    }

    /// Returns the (week, column) at which `date` is drawn, or `None` if it
    /// lies in a different month
    pub(super) fn position(&self, date: Date) -> Option<(u16, u16)> {
        if !self.contains(date) {
            return None;
        }
        let i = self.offset() + u16::from(date.day()) - 1;
        Some((i / DAYS_IN_WEEK, i % DAYS_IN_WEEK))
    }

    /// Returns the date drawn at (week, column), if any
    pub(super) fn date_at(&self, week: u16, column: u16) -> Option<Date> {
        if column >= DAYS_IN_WEEK {
            return None;
        }
        let day = (week * DAYS_IN_WEEK + column + 1).checked_sub(self.offset())?;
        let day = u8::try_from(day)
            .ok()
            .filter(|d| (1..=self.len()).contains(d))?;
        self.first.replace_day(day).ok()
    }
}

/// Moves `date` the same number of days into the following (`forwards`) or
/// preceding month, clamping the day to that month's length
pub(super) fn shift_month(date: Date, forwards: bool) -> Option<Date> {
    let here = MonthGrid::containing(date);
    let there = if forwards {
        here.next()?
    } else {
        here.previous()?
    };
    there.first.replace_day(date.day().min(there.len())).ok()
}
