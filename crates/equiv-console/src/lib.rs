//! Colorful console output for registry events.
//!
//! Provides a custom `tracing` layer that formats equiv events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Registry ready
//! - **DEBUG**: Registrations, removals, module installs, overrides
//! - **TRACE**: Memoized and suppressed resolutions

use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};


static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Initializes console output for registry events.
///
/// Safe to call multiple times - only the first call has effect.
/// Honors `RUST_LOG`; defaults to `info`.
pub fn init() {
    INIT.get_or_init(|| {
        EPOCH.get_or_init(Instant::now);

        let filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(EquivConsoleLayer)
            .try_init();
    });
}

fn elapsed_secs() -> f64 {
    EPOCH
        .get()
        .map(|epoch| epoch.elapsed().as_secs_f64())
        .unwrap_or(0.0)
}

/// A tracing layer that formats registry events with colors.
pub struct EquivConsoleLayer;

impl<S: Subscriber> Layer<S> for EquivConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("equiv_") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    type_name: Option<String>,
    strategy: Option<String>,
    ancestor: Option<String>,
    interface: Option<String>,
    module: Option<String>,
    group: Option<String>,
    registered: Option<u64>,
    modules: Option<u64>,
    declares: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        let s = s.trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "group" => self.group = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "registered" => self.registered = Some(value),
            "modules" => self.modules = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "declares" {
            self.declares = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        let value = Some(value.to_string());
        match field.name() {
            "event" => self.event = value,
            "type_name" => self.type_name = value,
            "strategy" => self.strategy = value,
            "ancestor" => self.ancestor = value,
            "interface" => self.interface = value,
            "module" => self.module = value,
            "group" => self.group = value,
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "registry_ready" => format_ready(v),
        "strategy_registered" => format_registered(v),
        "strategy_unregistered" => format_unregistered(v),
        "module_installing" => format_module(v),
        "own_equality_declared" => format_own_equality(v),
        "builtin_group_skipped" => format_group_skipped(v),
        "strategy_memoized" | "strategy_suppressed" if level == Level::TRACE => {
            format_resolution(v, event)
        }
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs()).bright_black().to_string()
}

fn type_name(v: &EventVisitor) -> &str {
    v.type_name.as_deref().unwrap_or("?")
}

fn format_ready(v: &EventVisitor) -> String {
    format!(
        "{} {} Registry ready │ {} strategies │ {} modules",
        format_elapsed(),
        "■".bright_cyan().bold(),
        v.registered.unwrap_or(0).bright_yellow(),
        v.modules.unwrap_or(0).bright_yellow(),
    )
}

fn format_registered(v: &EventVisitor) -> String {
    format!(
        "{} {} {} → {}",
        format_elapsed(),
        "+".bright_green().bold(),
        type_name(v).white().bold(),
        v.strategy.as_deref().unwrap_or("?").bright_magenta(),
    )
}

fn format_unregistered(v: &EventVisitor) -> String {
    format!(
        "{} {} {}",
        format_elapsed(),
        "-".bright_red().bold(),
        type_name(v).white().bold(),
    )
}

fn format_module(v: &EventVisitor) -> String {
    format!(
        "{} {} module {}",
        format_elapsed(),
        "▶".bright_blue(),
        v.module.as_deref().unwrap_or("?").white().bold(),
    )
}

fn format_own_equality(v: &EventVisitor) -> String {
    let declares = if v.declares.unwrap_or(false) {
        "own equality".bright_green().to_string()
    } else {
        "inherited equality".yellow().to_string()
    };
    format!(
        "{} {} {} │ {}",
        format_elapsed(),
        "≡".bright_cyan(),
        type_name(v).white().bold(),
        declares,
    )
}

fn format_group_skipped(v: &EventVisitor) -> String {
    format!(
        "{} {} builtin group {} disabled",
        format_elapsed(),
        "○".bright_black(),
        v.group.as_deref().unwrap_or("?").yellow(),
    )
}

fn format_resolution(v: &EventVisitor, event: &str) -> String {
    if event == "strategy_suppressed" {
        return format!(
            "{}   {} {} ignores {} (own equality)",
            format_elapsed(),
            "✗".bright_red(),
            type_name(v).white(),
            v.interface.as_deref().unwrap_or("?").bright_black(),
        );
    }
    format!(
        "{}   {} {} via {} → {}",
        format_elapsed(),
        "↳".bright_blue(),
        type_name(v).white(),
        v.ancestor.as_deref().unwrap_or("?").bright_black(),
        v.strategy.as_deref().unwrap_or("?").bright_magenta(),
    )
}
