use super::month::{shift_month, MonthGrid};
use thiserror::Error;
use time::{Date, Duration};

/// The pair of consecutive months shown in the popup, plus the keyboard cursor
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct MonthWindow {
    pub(super) today: Date,
    left: MonthGrid,
    // Invariant: always within `left` or the month after it
    cursor: Date,
}

impl MonthWindow {
    pub(crate) fn new(today: Date, focus: Date) -> Self {
        MonthWindow {
            today,
            left: MonthGrid::containing(focus),
            cursor: focus,
        }
    }

    pub(crate) fn cursor(&self) -> Date {
        self.cursor
    }

    /// The left month and, unless at the end of time, the one after it
    pub(crate) fn months(&self) -> (MonthGrid, Option<MonthGrid>) {
        (self.left, self.left.next())
    }

    fn last_visible_day(&self) -> Date {
        self.left.next().unwrap_or(self.left).last_day()
    }

    fn is_visible(&self, date: Date) -> bool {
        self.left.first_day() <= date && date <= self.last_visible_day()
    }

    /// Put `date`'s month on the left and the cursor on `date`
    pub(crate) fn focus(&mut self, date: Date) {
        self.left = MonthGrid::containing(date);
        self.cursor = date;
    }

    /// Move the cursor to `date`, scrolling just far enough to show it
    pub(crate) fn jump_to(&mut self, date: Date) {
        if !self.is_visible(date) {
            let target = MonthGrid::containing(date);
            self.left = if date < self.left.first_day() {
                target
            } else {
                target.previous().unwrap_or(target)
            };
        }
        self.cursor = date;
    }

    pub(crate) fn jump_to_today(&mut self) {
        self.jump_to(self.today);
    }

    pub(crate) fn move_cursor(&mut self, days: i64) -> Result<(), OutOfTimeError> {
        let date = self
            .cursor
            .checked_add(Duration::days(days))
            .ok_or(OutOfTimeError)?;
        self.jump_to(date);
        Ok(())
    }

    pub(crate) fn next_month(&mut self) -> Result<(), OutOfTimeError> {
        self.left = self.left.next().ok_or(OutOfTimeError)?;
        if let Some(date) = shift_month(self.cursor, true) {
            self.cursor = date;
        }
        self.clamp_cursor();
        Ok(())
    }

    pub(crate) fn previous_month(&mut self) -> Result<(), OutOfTimeError> {
        self.left = self.left.previous().ok_or(OutOfTimeError)?;
        if let Some(date) = shift_month(self.cursor, false) {
            self.cursor = date;
        }
        self.clamp_cursor();
        Ok(())
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self
            .cursor
            .clamp(self.left.first_day(), self.last_visible_day());
    }
}

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("reached the end of time")]
pub(crate) struct OutOfTimeError;

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn left_first(window: &MonthWindow) -> Date {
        window.months().0.first_day()
    }

    #[test]
    fn test_new() {
        let window = MonthWindow::new(date!(2024 - 06 - 01), date!(2024 - 01 - 15));
        let (left, right) = window.months();
        assert_eq!(left.first_day(), date!(2024 - 01 - 01));
        assert_eq!(right.map(|m| m.first_day()), Some(date!(2024 - 02 - 01)));
        assert_eq!(window.cursor(), date!(2024 - 01 - 15));
    }

    #[test]
    fn test_move_cursor_within_window() {
        let mut window = MonthWindow::new(date!(2024 - 06 - 01), date!(2024 - 01 - 30));
        assert_eq!(window.move_cursor(7), Ok(()));
        assert_eq!(window.cursor(), date!(2024 - 02 - 06));
        assert_eq!(left_first(&window), date!(2024 - 01 - 01));
    }

    #[test]
    fn test_move_cursor_scrolls_forwards() {
        let mut window = MonthWindow::new(date!(2024 - 06 - 01), date!(2024 - 02 - 27));
        assert_eq!(window.move_cursor(7), Ok(()));
        assert_eq!(window.cursor(), date!(2024 - 03 - 05));
        assert_eq!(left_first(&window), date!(2024 - 02 - 01));
        assert_eq!(window.move_cursor(28), Ok(()));
        assert_eq!(window.cursor(), date!(2024 - 04 - 02));
        assert_eq!(left_first(&window), date!(2024 - 03 - 01));
    }

    #[test]
    fn test_move_cursor_scrolls_backwards() {
        let mut window = MonthWindow::new(date!(2024 - 06 - 01), date!(2024 - 01 - 01));
        assert_eq!(window.move_cursor(-1), Ok(()));
        assert_eq!(window.cursor(), date!(2023 - 12 - 31));
        assert_eq!(left_first(&window), date!(2023 - 12 - 01));
    }

    #[test]
    fn test_move_cursor_end_of_time() {
        let mut window = MonthWindow::new(date!(2024 - 06 - 01), Date::MAX);
        assert_eq!(window.move_cursor(1), Err(OutOfTimeError));
        assert_eq!(window.cursor(), Date::MAX);
    }

    #[test]
    fn test_paging() {
        let mut window = MonthWindow::new(date!(2024 - 06 - 01), date!(2024 - 01 - 31));
        assert_eq!(window.next_month(), Ok(()));
        assert_eq!(left_first(&window), date!(2024 - 02 - 01));
        assert_eq!(window.cursor(), date!(2024 - 02 - 29));
        assert_eq!(window.previous_month(), Ok(()));
        assert_eq!(left_first(&window), date!(2024 - 01 - 01));
        assert_eq!(window.cursor(), date!(2024 - 01 - 29));
    }

    #[test]
    fn test_paging_past_end_of_time() {
        let mut window = MonthWindow::new(date!(2024 - 06 - 01), date!(9999 - 12 - 31));
        assert_eq!(window.months().1, None);
        assert_eq!(window.next_month(), Err(OutOfTimeError));
        let mut window = MonthWindow::new(date!(2024 - 06 - 01), Date::MIN);
        assert_eq!(window.previous_month(), Err(OutOfTimeError));
    }

    #[test]
    fn test_focus() {
        let mut window = MonthWindow::new(date!(2024 - 06 - 01), date!(2024 - 01 - 15));
        window.focus(date!(2024 - 02 - 03));
        assert_eq!(left_first(&window), date!(2024 - 02 - 01));
        assert_eq!(window.cursor(), date!(2024 - 02 - 03));
        window.focus(date!(2023 - 08 - 31));
        assert_eq!(left_first(&window), date!(2023 - 08 - 01));
        assert_eq!(window.cursor(), date!(2023 - 08 - 31));
    }

    #[test]
    fn test_jump_to_today() {
        let mut window = MonthWindow::new(date!(2024 - 06 - 12), date!(2020 - 01 - 15));
        window.jump_to_today();
        assert_eq!(window.cursor(), date!(2024 - 06 - 12));
        assert_eq!(left_first(&window), date!(2024 - 05 - 01));
    }
}
