use crate::range::DateInterval;
use crate::theme::{input::PENDING_STYLE, BASE_STYLE};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Padding, Widget},
};

pub(crate) const INPUT_HEIGHT: u16 = 3;

/// Border plus one column of padding on each side
const INPUT_CHROME: u16 = 4;

/// The always-visible field showing the current interval.  Clicking it opens
/// or closes the calendar popup.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct InputLine(pub(crate) DateInterval);

impl InputLine {
    fn to_line(self) -> Line<'static> {
        let DateInterval { start, end } = self.0;
        Line::from_iter([
            Span::styled(start.to_string(), BASE_STYLE),
            Span::styled(" – ", BASE_STYLE),
            match end {
                Some(end) => Span::styled(end.to_string(), BASE_STYLE),
                None => Span::styled("…", PENDING_STYLE),
            },
        ])
    }

    /// The part of `area` that the field occupies
    pub(crate) fn area(self, area: Rect) -> Rect {
        let width = u16::try_from(self.to_line().width())
            .unwrap_or(u16::MAX)
            .saturating_add(INPUT_CHROME);
        Rect::new(area.x, area.y, width, INPUT_HEIGHT).intersection(area)
    }
}

impl Widget for InputLine {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = self.area(area);
        let block = Block::bordered()
            .padding(Padding::horizontal(1))
            .style(BASE_STYLE);
        let inner = block.inner(area);
        block.render(area, buf);
        self.to_line().render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;
    use time::macros::date;

    fn row(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn test_render_complete() {
        let area = Rect::new(0, 0, 30, 4);
        let mut buffer = Buffer::empty(area);
        let input = InputLine(DateInterval {
            start: date!(2024 - 01 - 15),
            end: Some(date!(2024 - 01 - 20)),
        });
        assert_eq!(input.area(area), Rect::new(0, 0, 27, 3));
        input.render(area, &mut buffer);
        assert_eq!(row(&buffer, 0), "┌─────────────────────────┐   ");
        assert_eq!(row(&buffer, 1), "│ 2024-01-15 – 2024-01-20 │   ");
        assert_eq!(row(&buffer, 2), "└─────────────────────────┘   ");
        assert_eq!(row(&buffer, 3), "                              ");
    }

    #[test]
    fn test_render_pending() {
        let area = Rect::new(0, 0, 30, 3);
        let mut buffer = Buffer::empty(area);
        let input = InputLine(DateInterval {
            start: date!(2024 - 01 - 20),
            end: None,
        });
        assert_eq!(input.area(area), Rect::new(0, 0, 18, 3));
        input.render(area, &mut buffer);
        assert_eq!(row(&buffer, 1), "│ 2024-01-20 – … │            ");
        assert_eq!(buffer[(15, 1)].fg, Color::DarkGray);
    }

    #[test]
    fn test_area_clipped() {
        let input = InputLine(DateInterval {
            start: date!(2024 - 01 - 15),
            end: Some(date!(2024 - 01 - 20)),
        });
        assert_eq!(
            input.area(Rect::new(2, 1, 10, 2)),
            Rect::new(2, 1, 10, 2)
        );
    }
}
