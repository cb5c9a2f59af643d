//! Hero section component

use leptos::*;

use crate::config::APP_TITLE;

#[component]
pub fn Hero(record_count: Signal<Option<usize>>) -> impl IntoView {
    view! {
        <div class="hero">
            <h1>{APP_TITLE}</h1>
            <p class="subtitle">
                {move || match record_count.get() {
                    Some(n) => format!("{} shipments match the current filters.", n),
                    None => "Loading shipments...".to_string(),
                }}
            </p>
        </div>
    }
}
