//! Log Panel Component
//!
//! Collapsible view of the in-memory log buffer, for checking what the
//! ordering did (seeding source, saves, failed cookie writes) without
//! opening the devtools console.

use leptos::prelude::*;

/// Lines shown, newest last
const SHOWN_LINES: usize = 50;

/// Last `limit` lines, oldest first
fn tail(lines: Vec<String>, limit: usize) -> Vec<String> {
    let skip = lines.len().saturating_sub(limit);
    lines.into_iter().skip(skip).collect()
}

#[component]
pub fn LogPanel() -> impl IntoView {
    let (open, set_open) = signal(false);
    let lines = RwSignal::new(Vec::<String>::new());

    let refresh = move || lines.set(tail(rolling_logger::recent_lines(), SHOWN_LINES));

    view! {
        <details class="log-panel" prop:open=move || open.get()>
            <summary on:click=move |ev| {
                ev.prevent_default();
                let now_open = !open.get_untracked();
                if now_open {
                    refresh();
                }
                set_open.set(now_open);
            }>
                "Log"
            </summary>
            <button type="button" on:click=move |_| refresh()>"Refresh"</button>
            <pre class="log-lines">
                {move || lines.with(|lines| lines.join("\n"))}
            </pre>
        </details>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tail_keeps_newest() {
        let lines: Vec<String> = (1..=5).map(|i| i.to_string()).collect();
        assert_eq!(tail(lines.clone(), 2), vec!["4", "5"]);
        assert_eq!(tail(lines, 10).len(), 5);
    }
}
