use crate::theme::BASE_STYLE;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Flex, Layout, Rect},
    text::{Line, Text},
    widgets::{Block, Clear, Padding, Paragraph, Widget},
};

static TEXT: &[&str] = &[
    "ENTER, SPACE    Open calendar / pick date",
    "ARROWS, h j k l Move cursor by a day or week",
    "[, PAGE UP      Show previous month",
    "], PAGE DOWN    Show next month",
    "0, HOME         Move cursor to today",
    "o               Open or close calendar",
    "ESC             Close calendar, or quit",
    "?               Show this help",
    "q               Quit",
    "",
    "Click a day to pick it; click outside the",
    "calendar to close it.",
    "",
    "Press the Any Key to dismiss.",
];

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Help;

impl Widget for Help {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = Text::from_iter(TEXT.iter().map(|&s| Line::raw(s)));
        // Two columns of border plus two of padding; two lines of border
        let width = u16::try_from(text.width())
            .unwrap_or(u16::MAX)
            .saturating_add(4)
            .min(area.width);
        let height = u16::try_from(text.height())
            .unwrap_or(u16::MAX)
            .saturating_add(2)
            .min(area.height);
        let [help_area] = Layout::horizontal([width]).flex(Flex::Center).areas(area);
        let [help_area] = Layout::vertical([height])
            .flex(Flex::Center)
            .areas(help_area);
        Clear.render(help_area, buf);
        Paragraph::new(text)
            .block(
                Block::bordered()
                    .title(" Keys ")
                    .title_alignment(Alignment::Center)
                    .padding(Padding::horizontal(1)),
            )
            .style(BASE_STYLE)
            .render(help_area, buf);
    }
}
