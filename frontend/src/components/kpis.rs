//! Headline KPI cards

use leptos::*;

use crate::types::KpiCards;

#[component]
pub fn KpiSection(kpis: KpiCards) -> impl IntoView {
    let display = kpis.display;
    view! {
        <section class="kpis">
            <h2>"Overall Performance"</h2>
            <div class="kpi-grid">
                <KpiCard label="On-Time Delivery Rate" value=display.on_time_rate/>
                <KpiCard label="Avg. Delivery Time" value=display.avg_delivery_days/>
                <KpiCard label="Avg. Shipping Cost" value=display.avg_shipping_cost/>
            </div>
        </section>
    }
}

#[component]
fn KpiCard(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="kpi-card">
            <div class="kpi-label">{label}</div>
            <div class="kpi-value">{value}</div>
        </div>
    }
}
