//! Awareness construct detail panel.

use leptos::prelude::*;

use crate::components::report_blocks::{CompetitorSection, ItemList, MetricBar, StatusBadge, SubconstructGrid};
use crate::report::{AwarenessData, CompanySummary};
use crate::util::color::ring_css;

#[component]
pub fn AwarenessDetails(data: &'static AwarenessData, summary: &'static CompanySummary) -> impl IntoView {
    view! {
        <section class="detail-panel">
            <header class="detail-panel__header">
                <h3>"Awareness Analysis"</h3>
                <p>"How visible your brand is across digital channels."</p>
            </header>

            <div class="detail-panel__score">
                <span style=format!("color: {}", ring_css(data.score))>{data.score}"/100"</span>
                <StatusBadge status=data.status/>
            </div>

            <h4>"Key Metrics:"</h4>
            <div class="detail-panel__grid">
                <MetricBar name="Traffic" score=data.traffic/>
                <MetricBar name="Engagement" score=data.engagement/>
                <MetricBar name="Social" score=data.social/>
            </div>

            <h4>"Social Media Presence:"</h4>
            <div class="social-channels">
                {data
                    .social_channels
                    .iter()
                    .map(|channel| {
                        view! {
                            <div class="social-channel" style=format!("border-left-color: {}", channel.color)>
                                <span class="social-channel__name">{channel.name}</span>
                                <span class="social-channel__score">{channel.score}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <SubconstructGrid items=data.subconstructs/>

            <div class="detail-panel__columns">
                <ItemList title="Strengths" items=summary.key_strengths tone="good"/>
                <ItemList title="Areas for Improvement" items=summary.areas_for_improvement tone="bad"/>
            </div>
            <ItemList title="Recommendations" items=data.recommendations tone="info"/>
        </section>

        <CompetitorSection title="Competitor Analysis: Awareness">
            <table class="competitor-table">
                <thead>
                    <tr>
                        <th>"Competitor"</th>
                        <th>"Score"</th>
                        <th>"Traffic"</th>
                        <th>"Engagement"</th>
                        <th>"Social"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    {data
                        .competitors
                        .iter()
                        .map(|c| {
                            view! {
                                <tr title=c.key_strengths.join("\n")>
                                    <td>{c.name}</td>
                                    <td style=format!("color: {}", ring_css(c.score))>{c.score}</td>
                                    <td>{c.traffic}</td>
                                    <td>{c.engagement}</td>
                                    <td>{c.social}</td>
                                    <td><StatusBadge status=c.status/></td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
            <div class="competitor-bars">
                <h4>"Visual Comparison: Awareness Scores"</h4>
                <MetricBar name=summary.name score=data.score/>
                {data.competitors.iter().map(|c| view! { <MetricBar name=c.name score=c.score/> }).collect_view()}
            </div>
        </CompetitorSection>
    }
}
