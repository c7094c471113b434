//! Competition construct detail panel with SWOT tabs.

use leptos::prelude::*;

use crate::components::report_blocks::{CompetitorSection, ItemList, MetricBar, StatusBadge};
use crate::report::{CompanySummary, CompetitionData, SwotQuadrant};
use crate::state::dashboard::DashboardState;
use crate::util::color::{ring_css, status_class};
use crate::util::format::percent_width;

#[component]
pub fn CompetitionDetails(data: &'static CompetitionData, summary: &'static CompanySummary) -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();
    let active_tab = move || dashboard.get().swot_tab;
    let score_color = ring_css(data.score);

    view! {
        <section class="detail-panel">
            <header class="detail-panel__header">
                <h3>"Competition Analysis"</h3>
                <p>"Measures how effectively you compete against direct rivals in your market space."</p>
            </header>
            <p class="detail-panel__text">{data.details}</p>

            <h4>"Competitive Position:"</h4>
            <div class="detail-panel__grid">
                {data
                    .market_position
                    .iter()
                    .map(|p| view! { <MetricBar name=p.name score=p.score description=p.description/> })
                    .collect_view()}
            </div>

            <div class="overall-position">
                <h4>"Overall Competitive Position"</h4>
                <div class="metric-bar__track metric-bar__track--wide">
                    <div
                        class="metric-bar__fill"
                        style=format!("{}; background-color: {score_color}", percent_width(data.score))
                    ></div>
                </div>
                <p>
                    "Your competitive score of "
                    <strong>{data.score}"/100"</strong>
                    " places you in the \""
                    <span class=status_class(data.status)>{data.status}</span>
                    "\" category "
                    {data.position_summary}
                </p>
            </div>

            <h4>"SWOT Analysis:"</h4>
            <div class="swot-tabs" role="tablist">
                {SwotQuadrant::ALL
                    .iter()
                    .map(|&quadrant| {
                        view! {
                            <button
                                class="swot-tabs__tab"
                                class:swot-tabs__tab--active=move || active_tab() == quadrant
                                on:click=move |_| dashboard.update(|d| d.swot_tab = quadrant)
                            >
                                {quadrant.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            {move || {
                let quadrant = active_tab();
                view! { <ItemList title=quadrant.label() items=data.swot.items(quadrant)/> }
            }}

            <ItemList title="Strategic Recommendations" items=data.recommendations tone="info"/>
        </section>

        <CompetitorSection title="Detailed Competitor Analysis">
            <table class="competitor-table">
                <thead>
                    <tr>
                        <th>"Competitor"</th>
                        <th>"Overall"</th>
                        <th>"Awareness"</th>
                        <th>"Perception"</th>
                        <th>"Status"</th>
                        <th>"Key Strengths"</th>
                    </tr>
                </thead>
                <tbody>
                    <tr class="competitor-table__self">
                        <td>{summary.name}</td>
                        <td>{data.score}</td>
                        <td></td>
                        <td></td>
                        <td><StatusBadge status=data.status/></td>
                        <td></td>
                    </tr>
                    {data
                        .competitors
                        .iter()
                        .map(|c| {
                            view! {
                                <tr>
                                    <td>{c.name}</td>
                                    <td style=format!("color: {}", ring_css(c.score))>{c.score}</td>
                                    <td>{c.awareness_score}</td>
                                    <td>{c.perception_score}</td>
                                    <td><StatusBadge status=c.status/></td>
                                    <td>{c.key_strengths.join(", ")}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </CompetitorSection>
    }
}
