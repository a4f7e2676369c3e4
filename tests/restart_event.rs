//! Domain events emitted around a restart must reach the global logger.

use std::sync::{Mutex, OnceLock};

use wasm_bindgen_test::*;

use complexity_chart_wasm::application::AnimationLoop;
use complexity_chart_wasm::domain::logging::{
    LogComponent, LogEntry, Logger, init_logger,
};
use complexity_chart_wasm::log_warn;

fn captured() -> &'static Mutex<Vec<String>> {
    static LINES: OnceLock<Mutex<Vec<String>>> = OnceLock::new();
    LINES.get_or_init(|| Mutex::new(Vec::new()))
}

struct CapturingLogger;

impl Logger for CapturingLogger {
    fn log(&self, entry: LogEntry) {
        if let Ok(mut lines) = captured().lock() {
            lines.push(format!("{} {}", entry.component, entry.message));
        }
    }
}

fn install_logger() {
    init_logger(Box::new(CapturingLogger));
}

#[wasm_bindgen_test(unsupported = test)]
fn restart_reaches_the_logger() {
    install_logger();

    AnimationLoop::log_restart();

    let lines = captured().lock().unwrap();
    assert!(
        lines.iter().any(|l| l.contains("AnimationLoop") && l.contains("Restarted")),
        "expected a restart entry, got: {:?}",
        *lines
    );
}

#[wasm_bindgen_test(unsupported = test)]
fn warn_macro_forwards_to_global_logger() {
    install_logger();

    log_warn!(LogComponent::Infrastructure("Test"), "nothing to draw for #{}", 7);

    let lines = captured().lock().unwrap();
    assert!(
        lines.iter().any(|l| l.contains("INF:Test") && l.contains("nothing to draw for #7")),
        "expected the warning entry, got: {:?}",
        *lines
    );
}
