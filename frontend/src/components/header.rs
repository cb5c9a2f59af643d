use leptos::*;

use crate::types::Selection;

#[component]
pub fn Header(selection: Signal<Selection>) -> impl IntoView {
    view! {
        <header>
            <div class="header-left">
                <a href="/" class="logo">"SHIPTRACK"</a>
            </div>
            <div class="header-right">
                <span class="badge">
                    {move || {
                        let s = selection.get();
                        format!("Carrier: {} • Route: {}", s.carrier, s.route)
                    }}
                </span>
            </div>
        </header>
    }
}
