use ratatui::style::{Color, Modifier, Style};

pub(crate) const BASE_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

pub(crate) const MONTH_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const WEEKDAY_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const ARROW_STYLE: Style = BASE_STYLE.fg(Color::LightCyan);

pub(crate) const CURSOR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

pub(crate) mod selection {
    use super::*;

    pub(crate) const START_STYLE: Style = Style::new()
        .fg(Color::Black)
        .bg(Color::LightCyan)
        .add_modifier(Modifier::BOLD);

    pub(crate) const END_STYLE: Style = Style::new()
        .fg(Color::Black)
        .bg(Color::LightMagenta)
        .add_modifier(Modifier::BOLD);

    /// A one-day interval's single cell
    pub(crate) const BOTH_STYLE: Style = Style::new()
        .fg(Color::Black)
        .bg(Color::LightYellow)
        .add_modifier(Modifier::BOLD);

    pub(crate) const BETWEEN_STYLE: Style = Style::new().fg(Color::White).bg(Color::Blue);
}

pub(crate) mod input {
    use super::*;

    pub(crate) const PENDING_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);
}
