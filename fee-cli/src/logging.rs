//! Logging for the `tuition-fees` binary.
//!
//! Records go to stderr, and to the `--log-file` when one is given, so stdout
//! carries nothing but the report.

use anyhow::Result;
use chrono::Local;
use std::{
    fs::File,
    io::{self, IsTerminal, Write},
    path::Path,
    sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError},
};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    EnvFilter,
    fmt::{
        FmtContext, MakeWriter,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    reload,
    util::SubscriberInitExt,
};

/// `2026-01-31T09:15:02.123+03:00  WARN coerce.rs:42 input=abc ...`
struct LocalFmt;

impl<S, N> FormatEvent<S, N> for LocalFmt
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let ansi = writer.has_ansi_escapes();

        if ansi {
            write!(writer, "\x1b[2m")?
        }
        write!(
            writer,
            "{} ",
            Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )?;
        if ansi {
            write!(writer, "\x1b[0m")?
        }

        let (pre, post) = if ansi {
            match *meta.level() {
                Level::ERROR => ("\x1b[1;31m", "\x1b[0m"),
                Level::WARN => ("\x1b[1;33m", "\x1b[0m"),
                Level::INFO => ("\x1b[1;32m", "\x1b[0m"),
                Level::DEBUG => ("\x1b[1;34m", "\x1b[0m"),
                Level::TRACE => ("\x1b[1;35m", "\x1b[0m"),
            }
        } else {
            ("", "")
        };
        write!(writer, "{}{:>5}{} ", pre, meta.level(), post)?;

        if let (Some(file), Some(line)) = (meta.file(), meta.line()) {
            let file = short_source_path(file);
            if ansi {
                write!(writer, "\x1b[36m{file}:{line}\x1b[0m ")?;
            } else {
                write!(writer, "{file}:{line} ")?;
            }
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Strips the crate directory and `src/` so `fee-core/src/models/x.rs`
/// prints as `models/x.rs`.
fn short_source_path(file: &str) -> &str {
    let file = file
        .split_once("/src/")
        .or_else(|| file.split_once("\\src\\"))
        .map(|(_, rest)| rest)
        .unwrap_or(file);
    file.strip_prefix("src/")
        .or_else(|| file.strip_prefix("src\\"))
        .unwrap_or(file)
}

/// Target of the file layer. Empty until `--log-file` is handled, and records
/// written while empty are dropped.
#[derive(Clone, Default)]
struct FileSlot(Arc<Mutex<Option<File>>>);

struct SlotWriter<'a>(MutexGuard<'a, Option<File>>);

impl Write for SlotWriter<'_> {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> io::Result<usize> {
        match &mut *self.0 {
            Some(f) => f.write(buf),
            None => Ok(buf.len()),
        }
    }
    fn flush(&mut self) -> io::Result<()> {
        match &mut *self.0 {
            Some(f) => f.flush(),
            None => Ok(()),
        }
    }
}

impl<'a> MakeWriter<'a> for FileSlot {
    type Writer = SlotWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        SlotWriter(self.0.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

type ReloadFilterFn = Box<dyn Fn(&str) -> Result<()> + Send + Sync>;

static RELOAD_FILTER: OnceLock<ReloadFilterFn> = OnceLock::new();
static LOG_FILE: OnceLock<FileSlot> = OnceLock::new();

fn initial_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn store_level_handle<S>(handle: reload::Handle<EnvFilter, S>)
where
    S: Subscriber + Send + Sync + 'static,
{
    let _ = RELOAD_FILTER.set(Box::new(move |directive: &str| {
        let filter = EnvFilter::try_new(directive)
            .map_err(|e| anyhow::anyhow!("invalid log level '{directive}': {e}"))?;
        handle
            .reload(filter)
            .map_err(|e| anyhow::anyhow!("filter reload failed: {e}"))
    }));
}

/// Replaces the filter with the `--log-level` value, either a bare level such
/// as `debug` or a directive such as `fee_core=trace`.
pub fn set_log_level(level: &str) -> Result<()> {
    match RELOAD_FILTER.get() {
        Some(f) => f(level),
        None => anyhow::bail!("logging not yet initialized"),
    }
}

/// Appends records to `path` from now on, replacing any earlier file.
pub fn enable_file_logging(path: &Path) -> Result<()> {
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| anyhow::anyhow!("cannot open log file '{}': {e}", path.display()))?;

    match LOG_FILE.get() {
        Some(FileSlot(slot)) => {
            *slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(file);
            Ok(())
        }
        None => anyhow::bail!("logging not yet initialized"),
    }
}

/// Installs the global subscriber at `info`, or `RUST_LOG` when set.
/// Stderr output is colored only on a terminal. Later calls are no-ops.
pub fn init_default_logging() {
    let slot = LOG_FILE.get_or_init(FileSlot::default).clone();

    // One filter shared by both layers.
    let (level_filter, level_handle) = reload::Layer::new(initial_filter());

    let stderr_layer = tracing_subscriber::fmt::layer()
        .event_format(LocalFmt)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr);

    let file_layer = tracing_subscriber::fmt::layer()
        .event_format(LocalFmt)
        .with_ansi(false)
        .with_writer(slot);

    if tracing_subscriber::registry()
        .with(level_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .is_ok()
    {
        store_level_handle(level_handle);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn short_source_path_strips_crate_and_src() {
        assert_eq!(
            short_source_path("fee-core/src/calculations/fee_comparison.rs"),
            "calculations/fee_comparison.rs"
        );
        assert_eq!(short_source_path("src/main.rs"), "main.rs");
        assert_eq!(short_source_path("lib.rs"), "lib.rs");
    }

    #[test]
    fn set_log_level_rejects_bad_directive_after_init() {
        init_default_logging();

        assert!(set_log_level("debug").is_ok());
        assert!(set_log_level("fee_core=notalevel").is_err());
    }

    #[test]
    fn enable_file_logging_reports_unopenable_path() {
        init_default_logging();

        let err = enable_file_logging(Path::new("/nonexistent-dir/tuition-fees.log"))
            .expect_err("missing directory should fail");

        assert!(err.to_string().starts_with("cannot open log file"));
    }
}
