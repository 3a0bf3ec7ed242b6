//! Log Panel Component
//!
//! Debug-build dump of the rolling logger's recent lines.

use leptos::prelude::*;

pub const EMPTY_LOG_TEXT: &str = "No log entries";

/// Text shown in the panel for the buffered lines
pub fn log_text(lines: &[String]) -> String {
    if lines.is_empty() {
        EMPTY_LOG_TEXT.to_string()
    } else {
        lines.join("\n")
    }
}

#[component]
pub fn LogPanel() -> impl IntoView {
    let (open, set_open) = signal(false);
    let (lines, set_lines) = signal(Vec::<String>::new());

    // The buffer is not reactive; snapshot it each time the panel opens
    let toggle = move |_| {
        if !open.get_untracked() {
            set_lines.set(rolling_logger::recent());
        }
        set_open.update(|o| *o = !*o);
    };

    view! {
        <div class="log-panel">
            <button type="button" class="log-toggle" on:click=toggle>
                {move || if open.get() { "Hide log" } else { "Show log" }}
            </button>
            <Show when=move || open.get()>
                <pre class="log-lines">{move || log_text(&lines.get())}</pre>
            </Show>
        </div>
    }
}
