mod app;
mod calendar;
mod help;
mod input;
mod range;
mod theme;
use crate::app::App;
use crate::range::DateRange;
use anyhow::Context;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};
use lexopt::{Arg, Parser, ValueExt};
use ratatui::DefaultTerminal;
use std::ffi::OsString;
use std::io;
use time::{format_description::FormatItem, macros::format_description, Date, OffsetDateTime};

static YMD_FMT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run {
        from: Option<Date>,
        to: Option<Date>,
    },
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut from = None;
        let mut to = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Value(value) if from.is_none() => from = Some(parse_date(value)?),
                Arg::Value(value) if to.is_none() => to = Some(parse_date(value)?),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run { from, to })
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run { from, to } => {
                let today = OffsetDateTime::now_local()
                    .context("failed to determine local date")?
                    .date();
                let from = from.unwrap_or(today);
                let range = DateRange::new(from, to.unwrap_or(from));
                let selected = with_terminal(|terminal| {
                    App::new(today, range)
                        .run(terminal)
                        .context("terminal I/O failed")
                })?;
                println!("{} {}", selected.start(), selected.end());
                Ok(())
            }
            Command::Help => {
                println!("Usage: rangepick [FROM [TO]]");
                println!();
                println!("Pick a date range from a two-month calendar and print it on exit");
                println!();
                println!("FROM and TO are dates in YYYY-MM-DD form.  FROM defaults to today");
                println!("and TO defaults to FROM.");
                println!();
                println!("Options:");
                println!("  -h, --help        Display this help message and exit");
                println!("  -V, --version     Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn parse_date(value: OsString) -> Result<Date, lexopt::Error> {
    let value = value.string()?;
    match Date::parse(&value, &YMD_FMT) {
        Ok(d) => Ok(d),
        Err(e) => Err(lexopt::Error::ParsingFailed {
            value,
            error: Box::new(e),
        }),
    }
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    let r = execute!(io::stdout(), EnableMouseCapture)
        .context("failed to enable mouse capture")
        .and_then(|()| func(terminal));
    let disabled = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();
    let value = r?;
    disabled.context("failed to disable mouse capture")?;
    Ok(value)
}
