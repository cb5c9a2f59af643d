//! Carrier and route selectors.

use leptos::*;

use crate::types::FilterOptions;

#[component]
pub fn FilterBar(
    options: ReadSignal<FilterOptions>,
    carrier: RwSignal<String>,
    route: RwSignal<String>,
) -> impl IntoView {
    view! {
        <aside class="filters">
            <h2>"Dashboard Filters"</h2>
            <FilterSelect
                label="Select Carrier:"
                choices=Signal::derive(move || options.get().carriers)
                value=carrier
            />
            <FilterSelect
                label="Select Route:"
                choices=Signal::derive(move || options.get().routes)
                value=route
            />
        </aside>
    }
}

#[component]
fn FilterSelect(
    label: &'static str,
    choices: Signal<Vec<String>>,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <label class="filter">
            <span>{label}</span>
            <select on:change=move |ev| {
                let selected = event_target_value(&ev);
                log::debug!("{} {}", label, selected);
                value.set(selected);
            }>
                <For
                    each=move || choices.get()
                    key=|choice| choice.clone()
                    children=move |choice| {
                        let current = choice.clone();
                        view! {
                            <option
                                value=choice.clone()
                                selected=move || value.get() == current
                            >
                                {choice}
                            </option>
                        }
                    }
                />
            </select>
        </label>
    }
}
