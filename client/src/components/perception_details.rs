//! Perception construct detail panel.

use leptos::prelude::*;

use crate::components::report_blocks::{CompetitorSection, ItemList, MetricBar, StatusBadge, SubconstructGrid};
use crate::report::{CompanySummary, PerceptionData, SentimentSource};
use crate::util::color::ring_css;

#[component]
pub fn PerceptionDetails(data: &'static PerceptionData, summary: &'static CompanySummary) -> impl IntoView {
    let [first_metric, second_metric] = data.metric_labels;

    view! {
        <section class="detail-panel">
            <header class="detail-panel__header">
                <h3>"Perception Analysis"</h3>
                <p>"How your brand is viewed by customers and the market."</p>
            </header>

            <div class="detail-panel__score">
                <span style=format!("color: {}", ring_css(data.score))>{data.score}"/100"</span>
                <StatusBadge status=data.status/>
            </div>
            <p class="detail-panel__text">{data.details}</p>

            <h4>"Key Metrics:"</h4>
            <SubconstructGrid items=data.subconstructs/>

            {data.sources.iter().map(|source| view! { <SentimentCard source=source/> }).collect_view()}

            <ItemList title="Recommendations" items=data.recommendations tone="info"/>
        </section>

        <CompetitorSection title="Competitor Analysis: Perception">
            <table class="competitor-table">
                <thead>
                    <tr>
                        <th>"Competitor"</th>
                        <th>"Score"</th>
                        <th>{first_metric}</th>
                        <th>{second_metric}</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    <tr class="competitor-table__self">
                        <td>{summary.name}</td>
                        <td>{data.score}</td>
                        <td></td>
                        <td></td>
                        <td><StatusBadge status=data.status/></td>
                    </tr>
                    {data
                        .competitors
                        .iter()
                        .map(|c| {
                            view! {
                                <tr>
                                    <td>{c.name}</td>
                                    <td style=format!("color: {}", ring_css(c.score))>{c.score}</td>
                                    <td>{c.metrics[0]}</td>
                                    <td>{c.metrics[1]}</td>
                                    <td><StatusBadge status=c.status/></td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
            <div class="competitor-bars">
                <h4>"Visual Comparison: Perception Scores"</h4>
                <MetricBar name=summary.name score=data.score/>
                {data.competitors.iter().map(|c| view! { <MetricBar name=c.name score=c.score/> }).collect_view()}
            </div>
        </CompetitorSection>
    }
}

#[component]
fn SentimentCard(source: &'static SentimentSource) -> impl IntoView {
    view! {
        <div class="sentiment-card">
            <div class="sentiment-card__head">
                <h4>{source.name}</h4>
                {source.label.map(|label| view! { <span class="sentiment-card__label">{label}</span> })}
                <span class="sentiment-card__score" style=format!("color: {}", ring_css(source.score))>
                    {source.score}
                </span>
            </div>
            {source.note.map(|note| view! { <p class="sentiment-card__note">{note}</p> })}
            <ItemList title="Positive" items=source.positive tone="good"/>
            <ItemList title="Neutral" items=source.neutral/>
            <ItemList title="Negative" items=source.negative tone="bad"/>
        </div>
    }
}
