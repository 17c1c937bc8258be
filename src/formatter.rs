//! Log formatter that stamps every line with the simulation tick.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use time::format_description::FormatItem;
use time::macros::format_description;
use time::OffsetDateTime;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, FormattedFields};
use tracing_subscriber::registry::LookupSpan;

/// Tick of the simulation currently being logged about.
static SIMULATION_TICK: AtomicU64 = AtomicU64::new(0);

/// Ticks are shown as four hex digits.
const TICK_DISPLAY_MASK: u64 = 0xFFFF;

const TIMESTAMP_FORMAT: &[FormatItem<'static>] = format_description!("[hour]:[minute]:[second].[subsecond digits:4]");

/// Writes `HH:MM:SS.ffff 0xTICK LEVEL spans: target: fields`.
pub struct TickFormatter;

impl<S, N> FormatEvent<S, N> for TickFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(&self, ctx: &FmtContext<'_, S, N>, mut writer: Writer<'_>, event: &Event<'_>) -> fmt::Result {
        let meta = event.metadata();
        let ansi = writer.has_ansi_escapes();

        let timestamp = OffsetDateTime::now_utc().format(&TIMESTAMP_FORMAT).map_err(|_| fmt::Error)?;
        write_styled(&mut writer, ansi, DIM, timestamp)?;
        writer.write_char(' ')?;

        write_styled(&mut writer, ansi, DIM, format_args!("0x{:04X}", current_tick() & TICK_DISPLAY_MASK))?;
        writer.write_char(' ')?;

        write_level(&mut writer, ansi, meta.level())?;
        writer.write_char(' ')?;

        if let Some(scope) = ctx.event_scope() {
            let mut any = false;
            for span in scope.from_root() {
                write_styled(&mut writer, ansi, BOLD, span.metadata().name())?;
                any = true;
                let extensions = span.extensions();
                if let Some(fields) = extensions.get::<FormattedFields<N>>() {
                    if !fields.is_empty() {
                        write!(writer, "{{{fields}}}")?;
                    }
                }
                writer.write_char(':')?;
            }
            if any {
                writer.write_char(' ')?;
            }
        }

        write_styled(&mut writer, ansi, DIM, format_args!("{}:", meta.target()))?;
        writer.write_char(' ')?;

        ctx.format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";

fn write_styled(writer: &mut Writer<'_>, ansi: bool, style: &str, value: impl fmt::Display) -> fmt::Result {
    if ansi {
        write!(writer, "{style}{value}\x1b[0m")
    } else {
        write!(writer, "{value}")
    }
}

fn write_level(writer: &mut Writer<'_>, ansi: bool, level: &Level) -> fmt::Result {
    let (color, text) = match *level {
        Level::TRACE => ("\x1b[35m", "TRACE"),
        Level::DEBUG => ("\x1b[34m", "DEBUG"),
        Level::INFO => ("\x1b[32m", " INFO"),
        Level::WARN => ("\x1b[33m", " WARN"),
        Level::ERROR => ("\x1b[31m", "ERROR"),
    };
    write_styled(writer, ansi, color, text)
}

/// Publishes the tick the runner is about to simulate.
pub fn set_tick(tick: u64) {
    SIMULATION_TICK.store(tick, Ordering::Relaxed);
}

pub fn current_tick() -> u64 {
    SIMULATION_TICK.load(Ordering::Relaxed)
}
