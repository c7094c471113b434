//! Dashboard page: QBV report for the selected company.
//!
//! SYSTEM CONTEXT
//! ==============
//! Final route of the onboarding flow. Reads the injected `ReportCatalog`
//! and renders the valuation header, one score ring per construct, and the
//! detail panel of the selected construct.

use leptos::prelude::*;

use crate::components::awareness_details::AwarenessDetails;
use crate::components::competition_details::CompetitionDetails;
use crate::components::perception_details::PerceptionDetails;
use crate::components::score_ring::ScoreRing;
use crate::report::{CompanyId, ConstructKind, REPORT_PERIOD, ReportCatalog, VALUATION_BASELINE};
use crate::state::dashboard::DashboardState;
use crate::util::format::thousands;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let catalog = expect_context::<ReportCatalog>();
    let dashboard = expect_context::<RwSignal<DashboardState>>();

    let company = Memo::new(move |_| dashboard.with(|d| d.company));
    let selection = Memo::new(move |_| dashboard.with(|d| d.selected));
    let report = move || catalog.report(company.get());

    let on_select = Callback::new(move |kind: ConstructKind| {
        log::debug!("dashboard: selected {}", kind.name());
        dashboard.update(|d| d.select(kind));
    });
    let on_toggle_company = move |_| {
        if let Some(id) = dashboard.try_update(DashboardState::toggle_company) {
            log::debug!("dashboard: showing {id:?}");
        }
    };

    view! {
        <div class="dashboard-page">
            <div class="company-switch">
                <span
                    class="company-switch__label"
                    class:company-switch__label--active=move || company.get() == CompanyId::Pinnacle
                >
                    {CompanyId::Pinnacle.label()}
                </span>
                <button
                    class="company-switch__toggle"
                    class:company-switch__toggle--right=move || company.get() == CompanyId::GhostCat
                    role="switch"
                    aria-checked=move || (company.get() == CompanyId::GhostCat).to_string()
                    on:click=on_toggle_company
                    title="Switch company"
                >
                    <span class="company-switch__knob"></span>
                </button>
                <span
                    class="company-switch__label"
                    class:company-switch__label--active=move || company.get() == CompanyId::GhostCat
                >
                    {CompanyId::GhostCat.label()}
                </span>
            </div>

            <section class="report-card">
                <header class="report-card__header">
                    <h1>{move || report().summary.name}</h1>
                    <span class="report-card__period">{REPORT_PERIOD}</span>
                </header>
                <p class="report-card__kind">"QBV Report"</p>

                <div class="valuation">
                    <div class="valuation__title">"QBV Score"</div>
                    <div class="valuation__amount">
                        <span class="valuation__currency">"$"</span>
                        <span class="valuation__value">{move || thousands(report().valuation.amount_usd)}</span>
                        <span class="valuation__unit">"USD"</span>
                    </div>
                    <div class="valuation__change">
                        <span class="valuation__delta">"▲ " {move || report().valuation.change}</span>
                        <span class="valuation__since">{format!("since {VALUATION_BASELINE}")}</span>
                    </div>
                </div>

                <div class="report-card__section-head">
                    <h3>"QBV Category Scores"</h3>
                    <p>"Select a construct to view detailed analysis"</p>
                </div>
                <div class="score-rings">
                    {move || {
                        report()
                            .constructs
                            .iter()
                            .map(|construct| {
                                let kind = construct.kind;
                                let selected = Signal::derive(move || selection.get() == Some(kind));
                                view! { <ScoreRing construct=*construct selected=selected on_select=on_select/> }
                            })
                            .collect_view()
                    }}
                </div>
            </section>

            {move || {
                let report = report();
                selection
                    .get()
                    .map(|kind| match kind {
                        ConstructKind::Awareness => {
                            view! { <AwarenessDetails data=&report.awareness summary=&report.summary/> }.into_any()
                        }
                        ConstructKind::Perception => {
                            view! { <PerceptionDetails data=&report.perception summary=&report.summary/> }
                                .into_any()
                        }
                        ConstructKind::Competition => {
                            view! { <CompetitionDetails data=&report.competition summary=&report.summary/> }
                                .into_any()
                        }
                    })
            }}
        </div>
    }
}
