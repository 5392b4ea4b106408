use crate::calendar::{hit_test, Calendar, MonthWindow, PopupHit, POPUP_HEIGHT, POPUP_WIDTH};
use crate::help::Help;
use crate::input::{InputLine, INPUT_HEIGHT};
use crate::range::{DateRange, RangeSelector, SelectionListener};
use crate::theme::BASE_STYLE;
use crossterm::event::{
    read, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::{Position, Rect},
    widgets::{StatefulWidget, Widget},
    Terminal,
};
use std::io::{self, Write};
use time::Date;

/// Remembers the most recently completed range
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct LastRange(DateRange);

impl SelectionListener for LastRange {
    fn selection_changed(&mut self, range: DateRange) {
        self.0 = range;
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct App {
    selector: RangeSelector<LastRange>,
    window: MonthWindow,
    state: AppState,
    // Where the input field and popup were last drawn, for mouse clicks
    input_area: Rect,
    popup_area: Option<Rect>,
}

impl App {
    pub(crate) fn new(today: Date, range: DateRange) -> App {
        App {
            selector: RangeSelector::new(range, LastRange(range)),
            window: MonthWindow::new(today, range.start()),
            state: AppState::Picking,
            input_area: Rect::default(),
            popup_area: None,
        }
    }

    /// Runs until the user quits and returns the last completed range
    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<DateRange> {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.handle_input()?;
        }
        Ok(self.selected())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(&mut *self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let event = read()?;
        if !self.handle_event(event) {
            self.beep()?;
        }
        Ok(())
    }

    // Returns `false` if the event was invalid in the current state
    fn handle_event(&mut self, event: Event) -> bool {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        match event {
            Event::Key(KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Press,
                ..
            }) => {
                if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                    self.state = AppState::Quitting;
                    true
                } else {
                    normal_modifiers.contains(modifiers) && self.handle_key(code)
                }
            }
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => self.handle_click(column, row),
            // Redraw on resize, and we might as well redraw on other stuff too
            _ => true,
        }
    }

    fn handle_key(&mut self, key: KeyCode) -> bool {
        match self.state {
            AppState::Picking if self.selector.is_open() => self.handle_calendar_key(key),
            AppState::Picking => match key {
                KeyCode::Enter | KeyCode::Char(' ' | 'o') => {
                    self.toggle();
                    true
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.state = AppState::Quitting;
                    true
                }
                KeyCode::Char('?') => {
                    self.state = AppState::Helping;
                    true
                }
                _ => false,
            },
            AppState::Helping => {
                self.state = AppState::Picking;
                true
            }
            AppState::Quitting => false,
        }
    }

    fn handle_calendar_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Left | KeyCode::Char('h') => self.window.move_cursor(-1).is_ok(),
            KeyCode::Right | KeyCode::Char('l') => self.window.move_cursor(1).is_ok(),
            KeyCode::Up | KeyCode::Char('k') => self.window.move_cursor(-7).is_ok(),
            KeyCode::Down | KeyCode::Char('j') => self.window.move_cursor(7).is_ok(),
            KeyCode::PageUp | KeyCode::Char('[') => self.window.previous_month().is_ok(),
            KeyCode::PageDown | KeyCode::Char(']') => self.window.next_month().is_ok(),
            KeyCode::Home | KeyCode::Char('0') => {
                self.window.jump_to_today();
                true
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.selector.select_date(self.window.cursor());
                true
            }
            KeyCode::Esc | KeyCode::Char('o') => {
                self.selector.close();
                true
            }
            KeyCode::Char('q') => {
                self.state = AppState::Quitting;
                true
            }
            KeyCode::Char('?') => {
                self.state = AppState::Helping;
                true
            }
            _ => false,
        }
    }

    fn handle_click(&mut self, column: u16, row: u16) -> bool {
        match self.state {
            AppState::Helping => {
                self.state = AppState::Picking;
                return true;
            }
            AppState::Quitting => return false,
            AppState::Picking => (),
        }
        if self.input_area.contains(Position::new(column, row)) {
            self.toggle();
            return true;
        }
        let Some(popup) = self.popup_area.filter(|_| self.selector.is_open()) else {
            return true;
        };
        match hit_test(&self.window, popup, column, row) {
            PopupHit::Date(date) => {
                self.window.jump_to(date);
                self.selector.select_date(date);
                true
            }
            PopupHit::PreviousMonth => self.window.previous_month().is_ok(),
            PopupHit::NextMonth => self.window.next_month().is_ok(),
            PopupHit::Inside => true,
            PopupHit::Outside => {
                self.selector.close();
                true
            }
        }
    }

    /// Opening the popup shows the interval's start month and the one after
    fn toggle(&mut self) {
        if !self.selector.is_open() {
            self.window.focus(self.selector.interval().start);
        }
        self.selector.toggle_visibility();
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }

    fn selected(&self) -> DateRange {
        self.selector.listener().0
    }
}

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        let input = InputLine(self.selector.interval());
        self.input_area = input.area(area);
        input.render(area, buf);
        if self.selector.is_open() {
            let popup = Rect::new(
                area.x,
                area.y.saturating_add(INPUT_HEIGHT),
                POPUP_WIDTH,
                POPUP_HEIGHT,
            )
            .intersection(area);
            Calendar(&self.selector).render(popup, buf, &mut self.window);
            self.popup_area = Some(popup);
        } else {
            self.popup_area = None;
        }
        if self.state == AppState::Helping {
            Help.render(area, buf);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AppState {
    Picking,
    Helping,
    Quitting,
}
