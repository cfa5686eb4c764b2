//! Colorful console output for search summaries.
//!
//! Provides a custom `tracing` layer that formats `search_start` and
//! `search_end` events with colors. Enabled by the `console` feature.

use std::fmt;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use owo_colors::OwoColorize;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Default filter when `RUST_LOG` does not say otherwise.
const DEFAULT_DIRECTIVE: &str = "frobenius_solver=info";

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect. Does nothing
/// if another global subscriber is already installed.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SearchConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats search events with colors.
pub struct SearchConsoleLayer;

impl<S: Subscriber> Layer<S> for SearchConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with("frobenius_solver") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_search_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    search: Option<String>,
    generators: Option<String>,
    strategy: Option<String>,
    bound: Option<i64>,
    result: Option<i64>,
    frobenius: Option<i64>,
    genus: Option<u64>,
    steps: Option<u64>,
    duration_ms: Option<u64>,
    speed: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "search" => self.search = Some(s.trim_matches('"').to_string()),
            "generators" => self.generators = Some(s),
            "strategy" => self.strategy = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "genus" => self.genus = Some(value),
            "steps" => self.steps = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "speed" => self.speed = Some(value),
            _ => self.record_i64(field, value as i64),
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        match field.name() {
            "bound" => self.bound = Some(value),
            "result" => self.result = Some(value),
            "frobenius" => self.frobenius = Some(value),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "search" => self.search = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_search_event(v: &EventVisitor) -> String {
    match v.event.as_deref() {
        Some("search_start") => format_search_start(v),
        Some("search_end") => format_search_end(v),
        _ => String::new(),
    }
}

fn format_search_start(v: &EventVisitor) -> String {
    let search = v.search.as_deref().unwrap_or("search");
    let mut line = format!(
        "{} {} {} generators {}",
        clock().bright_black(),
        "INFO".bright_green(),
        format!("[{}]", search).bright_cyan(),
        v.generators.as_deref().unwrap_or("?").white().bold(),
    );
    if let Some(strategy) = v.strategy.as_deref() {
        line.push_str(&format!(", strategy ({})", strategy.yellow()));
    }
    if v.bound.is_some() {
        line.push_str(&format!(", bound ({})", format_value(v.bound)));
    }
    line
}

fn format_search_end(v: &EventVisitor) -> String {
    let search = v.search.as_deref().unwrap_or("search");
    let summary = match search {
        "gaps" => format!(
            "genus ({}), frobenius number ({})",
            v.genus.unwrap_or(0).to_string().bright_magenta().bold(),
            format_value(v.frobenius),
        ),
        _ => format!("frobenius number ({})", format_value(v.result)),
    };
    format!(
        "{} {} {} {}, time spent ({}), steps ({}), speed ({}/sec)",
        clock().bright_black(),
        "INFO".bright_green(),
        format!("[{}]", search).bright_cyan(),
        summary,
        format_elapsed(Duration::from_millis(v.duration_ms.unwrap_or(0))).yellow(),
        v.steps.unwrap_or(0).to_string().white(),
        v.speed.unwrap_or(0).to_string().bright_magenta(),
    )
}

fn format_value(value: Option<i64>) -> String {
    match value {
        Some(-1) => "-1 (no gaps)".bright_green().to_string(),
        Some(n) => n.to_string().bright_yellow().to_string(),
        None => "N/A".white().to_string(),
    }
}

/// Wall-clock time of day in UTC as `HH:MM:SS.mmm`.
fn clock() -> String {
    let since_epoch = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    let secs_of_day = since_epoch.as_secs() % 86_400;
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        secs_of_day / 3600,
        secs_of_day / 60 % 60,
        secs_of_day % 60,
        since_epoch.subsec_millis()
    )
}

/// Scans are usually sub-second; longer ones switch to seconds.
fn format_elapsed(elapsed: Duration) -> String {
    match elapsed.as_millis() {
        ms @ 0..=999 => format!("{ms}ms"),
        _ => format!("{:.3}s", elapsed.as_secs_f64()),
    }
}
