use super::month::{MonthGrid, DAYS_IN_WEEK, MAX_WEEKS};
use super::window::MonthWindow;
use super::DateStyler;
use crate::theme::{ARROW_STYLE, BASE_STYLE, CURSOR_STYLE, MONTH_STYLE, WEEKDAY_STYLE};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
    text::Text,
    widgets::{Block, Clear, Paragraph, StatefulWidget, Widget},
};
use time::Date;

static HEADER: &str = " Mo  Tu  We  Th  Fr  Sa  Su ";

/// Number of columns per day of week
const DAY_WIDTH: u16 = 4;

/// Width of a single month's grid
const MONTH_WIDTH: u16 = DAY_WIDTH * DAYS_IN_WEEK;

/// Columns between the two months
const MONTH_GUTTER: u16 = 2;

/// Columns to the left of the first month, counting the border
const LEFT_MARGIN: u16 = 2;

const TITLE_LINE: u16 = 1;
const HEADER_LINE: u16 = 2;
const FIRST_WEEK_LINE: u16 = 3;

pub(crate) const POPUP_WIDTH: u16 = LEFT_MARGIN * 2 + MONTH_WIDTH * 2 + MONTH_GUTTER;

pub(crate) const POPUP_HEIGHT: u16 = FIRST_WEEK_LINE + MAX_WEEKS + 1;

const MONTH_COLUMNS: [u16; 2] = [LEFT_MARGIN, LEFT_MARGIN + MONTH_WIDTH + MONTH_GUTTER];

const PREV_COLUMN: u16 = 1;
const NEXT_COLUMN: u16 = POPUP_WIDTH - 2;

const PREV_ARROW: &str = "‹";
const NEXT_ARROW: &str = "›";

/// The two-month popup.  Each day is styled by the wrapped [`DateStyler`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Calendar<'a, S>(pub(crate) &'a S);

impl<S: DateStyler> StatefulWidget for Calendar<'_, S> {
    type State = MonthWindow;

    /*
     * ┌────────────────────────────────────────────────────────────┐
     * │‹        January 2024                 February 2024        ›│
     * │  Mo  Tu  We  Th  Fr  Sa  Su    Mo  Tu  We  Th  Fr  Sa  Su  │
     * │   1   2   3   4   5   6   7                 1   2   3   4  │
     * │   8   9  10  11  12  13  14     5   6   7   8   9  10  11  │
     * │ ...                                                        │
     * └────────────────────────────────────────────────────────────┘
     */

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        Clear.render(area, buf);
        Block::bordered().style(BASE_STYLE).render(area, buf);
        let mut canvas = BufferCanvas::new(area, buf);
        canvas.mvprint(TITLE_LINE, PREV_COLUMN, PREV_ARROW, ARROW_STYLE);
        canvas.mvprint(TITLE_LINE, NEXT_COLUMN, NEXT_ARROW, ARROW_STYLE);
        let (left, right) = state.months();
        for (x, month) in std::iter::zip(MONTH_COLUMNS, [Some(left), right]) {
            if let Some(month) = month {
                canvas.draw_month(x, month, self.0, state);
            }
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
struct BufferCanvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl<'a> BufferCanvas<'a> {
    fn new(area: Rect, buf: &'a mut Buffer) -> Self {
        Self { area, buf }
    }

    fn draw_month<S: DateStyler>(
        &mut self,
        x: u16,
        month: MonthGrid,
        styler: &S,
        window: &MonthWindow,
    ) {
        let title = month.title();
        let title_width = u16::try_from(title.len()).unwrap_or(MONTH_WIDTH);
        let pad = MONTH_WIDTH.saturating_sub(title_width) / 2;
        self.mvprint(TITLE_LINE, x + pad, title, MONTH_STYLE);
        self.mvprint(HEADER_LINE, x, HEADER, WEEKDAY_STYLE);
        for date in month.days() {
            let Some((week, column)) = month.position(date) else {
                continue;
            };
            let mut style = styler.date_style(date);
            if date == window.cursor() {
                style = style.patch(CURSOR_STYLE);
            }
            self.mvprint(
                FIRST_WEEK_LINE + week,
                x + DAY_WIDTH * column,
                show_day(date, date == window.today),
                style,
            );
        }
    }

    fn mvprint<S: AsRef<str>>(&mut self, y: u16, x: u16, s: S, style: Style) {
        if y < self.area.height && x < self.area.width {
            let text = Text::styled(s.as_ref(), style);
            let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
            Paragraph::new(text).render(
                Rect {
                    x: x + self.area.x,
                    y: y + self.area.y,
                    width: (self.area.width - x).min(width),
                    height: 1,
                },
                self.buf,
            );
        }
    }
}

fn show_day(date: Date, is_today: bool) -> String {
    if is_today {
        format!("[{:2}]", date.day())
    } else {
        format!(" {:2} ", date.day())
    }
}

/// What lies under a mouse click relative to a popup drawn in `area`
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum PopupHit {
    Date(Date),
    PreviousMonth,
    NextMonth,
    /// Inside the popup but not on anything clickable
    Inside,
    Outside,
}

pub(crate) fn hit_test(window: &MonthWindow, area: Rect, column: u16, row: u16) -> PopupHit {
    if !area.contains(Position::new(column, row)) {
        return PopupHit::Outside;
    }
    let x = column - area.x;
    let y = row - area.y;
    if y == TITLE_LINE && x == PREV_COLUMN {
        return PopupHit::PreviousMonth;
    }
    if y == TITLE_LINE && x == NEXT_COLUMN {
        return PopupHit::NextMonth;
    }
    let Some(week) = y.checked_sub(FIRST_WEEK_LINE) else {
        return PopupHit::Inside;
    };
    let (left, right) = window.months();
    std::iter::zip(MONTH_COLUMNS, [Some(left), right])
        .find_map(|(start, month)| {
            let offset = x.checked_sub(start).filter(|&dx| dx < MONTH_WIDTH)?;
            month?.date_at(week, offset / DAY_WIDTH)
        })
        .map_or(PopupHit::Inside, PopupHit::Date)
}
