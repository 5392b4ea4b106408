mod month;
mod widget;
mod window;
pub(crate) use self::widget::{hit_test, Calendar, PopupHit, POPUP_HEIGHT, POPUP_WIDTH};
pub(crate) use self::window::MonthWindow;
use crate::range::{Highlight, RangeSelector, SelectionListener};
use crate::theme::selection::{BETWEEN_STYLE, BOTH_STYLE, END_STYLE, START_STYLE};
use ratatui::style::Style;
use time::Date;

pub(crate) trait DateStyler {
    fn date_style(&self, date: Date) -> Style;
}

impl<L: SelectionListener> DateStyler for RangeSelector<L> {
    fn date_style(&self, date: Date) -> Style {
        match self.classify(date) {
            Highlight::None => Style::new(),
            Highlight::Start => START_STYLE,
            Highlight::End => END_STYLE,
            Highlight::Both => BOTH_STYLE,
            Highlight::Between => BETWEEN_STYLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::DateRange;
    use time::macros::date;

    #[test]
    fn test_selector_styles() {
        let mut selector = RangeSelector::new(
            DateRange::new(date!(2024 - 01 - 15), date!(2024 - 01 - 20)),
            |_: DateRange| {},
        );
        assert_eq!(selector.date_style(date!(2024 - 01 - 14)), Style::new());
        assert_eq!(selector.date_style(date!(2024 - 01 - 15)), START_STYLE);
        assert_eq!(selector.date_style(date!(2024 - 01 - 18)), BETWEEN_STYLE);
        assert_eq!(selector.date_style(date!(2024 - 01 - 20)), END_STYLE);
        selector.select_date(date!(2024 - 01 - 18));
        assert_eq!(selector.date_style(date!(2024 - 01 - 18)), START_STYLE);
        assert_eq!(selector.date_style(date!(2024 - 01 - 17)), Style::new());
        selector.select_date(date!(2024 - 01 - 18));
        assert_eq!(selector.date_style(date!(2024 - 01 - 18)), BOTH_STYLE);
    }

    #[test]
    fn test_endpoint_styles_differ() {
        assert_ne!(START_STYLE, END_STYLE);
        assert_ne!(BOTH_STYLE, START_STYLE);
        assert_ne!(BOTH_STYLE, END_STYLE);
    }
}
