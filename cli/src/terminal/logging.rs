use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

use resolve_common::config::{Config, DEFAULT_LOG_FILTER};

/// Prefixes every event with a coloured status symbol for its level.
pub struct ResolveFormatter;

impl<S, N> FormatEvent<S, N> for ResolveFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        write!(writer, "{} ", level_symbol(event.metadata().level()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

fn level_symbol(level: &Level) -> ColoredString {
    let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) = match *level {
        Level::TRACE => ("[ ]", |s| s.dimmed()),
        Level::DEBUG => ("[?]", |s| s.blue()),
        Level::INFO => ("[+]", |s| s.green().bold()),
        Level::WARN => ("[*]", |s| s.yellow().bold()),
        Level::ERROR => ("[-]", |s| s.red().bold()),
    };
    color_func(symbol.into())
}

/// Installs the global subscriber; call once, from `main`. Events go to
/// stderr, stdout is kept for the result lines.
pub fn init_logging(cfg: &Config) {
    let filter = EnvFilter::try_new(&cfg.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .event_format(ResolveFormatter)
        .init();
}
