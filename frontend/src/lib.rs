//! Shiptrack - Frontend Rust/Leptos Application
//!
//! A WebAssembly dashboard over the cleaned shipment data: two
//! selectors drive KPI cards, two rankings, a lateness histogram and a
//! data table, all recomputed by the backend on every change.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (active selection)                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, match count)                              │
//! │  ├── FilterBar (carrier, route)                             │
//! │  └── Dashboard                                              │
//! │      ├── KpiSection                                         │
//! │      ├── RankingChart x2, HistogramChart                    │
//! │      └── DataTable                                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - API response mirrors and errors
//! - [`components`] - UI components
//! - [`services`] - Backend communication

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod services;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    AppError, AppResult, DashboardView, FilterOptions, Histogram, KpiCards, RankingView,
    Selection, ShipmentRow,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_TITLE/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let (options, set_options) = create_signal(FilterOptions::default());
    let (load_error, set_load_error) = create_signal(None::<String>);
    let carrier = create_rw_signal(ALL.to_string());
    let route = create_rw_signal(ALL.to_string());

    spawn_local(async move {
        match fetch_filters(BACKEND_URL).await {
            Ok(opts) => {
                log::info!(
                    "Loaded {} carriers, {} routes",
                    opts.carriers.len().saturating_sub(1),
                    opts.routes.len().saturating_sub(1)
                );
                set_options.set(opts);
            }
            Err(e) => {
                log::error!("❌ Could not load filters: {}", e);
                set_load_error.set(Some(e.to_string()));
            }
        }
    });

    // Refetched whenever either selector changes.
    let dashboard = create_local_resource(
        move || (carrier.get(), route.get()),
        |(carrier, route)| async move { fetch_dashboard(BACKEND_URL, &carrier, &route).await },
    );

    let selection = Signal::derive(move || Selection {
        carrier: carrier.get(),
        route: route.get(),
    });
    let record_count = Signal::derive(move || {
        dashboard
            .get()
            .and_then(|result| result.ok())
            .map(|view| view.record_count)
    });

    view! {
        <Header selection=selection/>

        <div class="container">
            <Hero record_count=record_count/>

            <div class="layout">
                <FilterBar options=options carrier=carrier route=route/>

                <div class="content">
                    {move || load_error.get().map(|e| view! { <div class="error">{e}</div> })}

                    <Transition fallback=move || view! { <div class="loading">"Loading dashboard..."</div> }>
                        {move || dashboard.get().map(|result| match result {
                            Ok(data) => view! { <Dashboard data=data/> }.into_view(),
                            Err(e) => view! { <div class="error">{e.to_string()}</div> }.into_view(),
                        })}
                    </Transition>
                </div>
            </div>
        </div>

        <Footer/>
    }
}

#[component]
fn Dashboard(data: DashboardView) -> impl IntoView {
    view! {
        <KpiSection kpis=data.kpis/>

        <section class="analysis">
            <h2>"Performance Analysis"</h2>
            <div class="chart-grid">
                <RankingChart
                    title="On-Time Rate by Carrier"
                    caption="Carrier On-Time Delivery Rate (%)"
                    ranking=data.carrier_ranking
                    format=format_rate
                />
                <RankingChart
                    title="Top 10 Most Expensive Routes"
                    caption="Top 10 Avg. Shipping Cost by Route"
                    ranking=data.route_cost_ranking
                    format=format_cost
                />
            </div>

            <h3>"Delivery Time (Lateness) Distribution"</h3>
            <HistogramChart histogram=data.histogram/>
        </section>

        <DataTable records=data.records/>
    }
}
