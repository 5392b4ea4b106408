use time::Date;

/// A finalized, inclusive date range.  `start <= end` always holds.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct DateRange {
    start: Date,
    end: Date,
}

impl DateRange {
    /// Construct a range from two endpoints given in either order
    pub(crate) fn new(a: Date, b: Date) -> DateRange {
        if b < a {
            DateRange { start: b, end: a }
        } else {
            DateRange { start: a, end: b }
        }
    }

    pub(crate) fn start(&self) -> Date {
        self.start
    }

    pub(crate) fn end(&self) -> Date {
        self.end
    }
}

/// The selector's interval as it currently stands.  `end` is `None` while the
/// second endpoint has yet to be picked.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct DateInterval {
    pub(crate) start: Date,
    pub(crate) end: Option<Date>,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum SelectionState {
    /// A complete interval is held
    Idle,
    /// A new start was just picked and the end is pending
    Selecting,
}

/// How a single day cell relates to the current interval
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum Highlight {
    None,
    Start,
    End,
    Between,
    /// Start and end of a zero-length interval
    Both,
}

/// Receives every interval completed by a [`RangeSelector`]
pub(crate) trait SelectionListener {
    fn selection_changed(&mut self, range: DateRange);
}

impl<F: FnMut(DateRange)> SelectionListener for F {
    fn selection_changed(&mut self, range: DateRange) {
        self(range);
    }
}

/// Two-click date range selection.  The first pick after a completed interval
/// starts a new one; the second pick completes it, closes the calendar, and
/// notifies the listener.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct RangeSelector<L> {
    start: Date,
    // Invariant: when `Some`, `start <= end`
    end: Option<Date>,
    open: bool,
    listener: L,
}

impl<L: SelectionListener> RangeSelector<L> {
    pub(crate) fn new(range: DateRange, listener: L) -> Self {
        RangeSelector {
            start: range.start,
            end: Some(range.end),
            open: false,
            listener,
        }
    }

    pub(crate) fn state(&self) -> SelectionState {
        if self.end.is_some() {
            SelectionState::Idle
        } else {
            SelectionState::Selecting
        }
    }

    pub(crate) fn is_open(&self) -> bool {
        self.open
    }

    pub(crate) fn toggle_visibility(&mut self) {
        self.open = !self.open;
    }

    pub(crate) fn close(&mut self) {
        self.open = false;
    }

    pub(crate) fn interval(&self) -> DateInterval {
        DateInterval {
            start: self.start,
            end: self.end,
        }
    }

    /// Returns `None` while a selection is in progress
    pub(crate) fn range(&self) -> Option<DateRange> {
        self.end.map(|end| DateRange {
            start: self.start,
            end,
        })
    }

    pub(crate) fn listener(&self) -> &L {
        &self.listener
    }

    pub(crate) fn select_date(&mut self, date: Date) {
        match self.state() {
            SelectionState::Idle => {
                self.start = date;
                self.end = None;
            }
            SelectionState::Selecting => {
                let range = DateRange::new(self.start, date);
                self.start = range.start;
                self.end = Some(range.end);
                self.open = false;
                self.listener.selection_changed(range);
            }
        }
    }

    pub(crate) fn classify(&self, date: Date) -> Highlight {
        let Some(DateRange { start, end }) = self.range() else {
            // Only the start can match while the end is pending
            return if date == self.start {
                Highlight::Start
            } else {
                Highlight::None
            };
        };
        if date == start && date == end {
            Highlight::Both
        } else if date == start {
            Highlight::Start
        } else if date == end {
            Highlight::End
        } else if start < date && date < end {
            Highlight::Between
        } else {
            Highlight::None
        }
    }
}
