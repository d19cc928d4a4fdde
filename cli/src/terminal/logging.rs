use std::fmt;

use colored::*;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

use crate::terminal::colors;
use crate::terminal::print::PRINT_TARGET;
use crate::terminal::spinner::SpinnerWriter;

/// Installs the global subscriber. `RUST_LOG` overrides the default `info`.
///
/// Terminal output from [`crate::terminal::print`] is always let through.
pub fn init_logging() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"))
        .add_directive(format!("{PRINT_TARGET}=info").parse()?);

    tracing_subscriber::fmt()
        .event_format(NmaprFormatter)
        .with_env_filter(filter)
        .with_writer(|| SpinnerWriter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {e}"))
}

pub struct NmaprFormatter;

impl<S, N> FormatEvent<S, N> for NmaprFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();

        if meta.target() == PRINT_TARGET {
            let mut raw = RawMessage::default();
            event.record(&mut raw);
            return writeln!(writer, "{}", raw.0);
        }

        write!(writer, "{} ", level_symbol(*meta.level()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

fn level_symbol(level: Level) -> ColoredString {
    match level {
        Level::TRACE => "[ ]".dimmed(),
        Level::DEBUG => "[?]".color(colors::SERVICE),
        Level::INFO => "[+]".color(colors::OPEN).bold(),
        Level::WARN => "[*]".color(colors::FILTERED).bold(),
        Level::ERROR => "[-]".color(colors::CLOSED).bold(),
    }
}

/// Pulls the preformatted line out of a print event.
#[derive(Default)]
struct RawMessage(String);

impl Visit for RawMessage {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "raw_msg" {
            self.0 = value.to_string();
        }
    }

    fn record_debug(&mut self, _field: &Field, _value: &dyn fmt::Debug) {}
}
