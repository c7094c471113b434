//! Small building blocks shared by the construct detail panels.

use leptos::prelude::*;

use crate::report::Subconstruct;
use crate::state::dashboard::DashboardState;
use crate::util::color::{ring_css, status_class};
use crate::util::format::percent_width;

/// Labelled 0-100 bar tinted by score.
#[component]
pub fn MetricBar(
    name: &'static str,
    score: u8,
    #[prop(optional)] description: Option<&'static str>,
) -> impl IntoView {
    let color = ring_css(score);
    let fill = format!("{}; background-color: {color}", percent_width(score));

    view! {
        <div class="metric-bar">
            <div class="metric-bar__head">
                <span class="metric-bar__name">{name}</span>
                <span class="metric-bar__score" style=format!("color: {color}")>{score}</span>
            </div>
            <div class="metric-bar__track">
                <div class="metric-bar__fill" style=fill></div>
            </div>
            {description.map(|text| view! { <p class="metric-bar__desc">{text}</p> })}
        </div>
    }
}

#[component]
pub fn SubconstructGrid(items: &'static [Subconstruct]) -> impl IntoView {
    view! {
        <div class="detail-panel__grid">
            {items
                .iter()
                .map(|sub| view! { <MetricBar name=sub.name score=sub.score description=sub.description/> })
                .collect_view()}
        </div>
    }
}

/// Titled bullet list; renders nothing for an empty list.
#[component]
pub fn ItemList(
    title: &'static str,
    items: &'static [&'static str],
    #[prop(optional)] tone: &'static str,
) -> impl IntoView {
    (!items.is_empty()).then(|| {
        view! {
            <div class=format!("item-list item-list--{}", if tone.is_empty() { "plain" } else { tone })>
                <h4>{title}</h4>
                <ul>{items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}</ul>
            </div>
        }
    })
}

#[component]
pub fn StatusBadge(status: &'static str) -> impl IntoView {
    view! { <span class=format!("status-badge {}", status_class(status))>{status}</span> }
}

/// Collapsible competitor section; expansion lives in `DashboardState`.
#[component]
pub fn CompetitorSection(title: &'static str, children: ChildrenFn) -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();
    let expanded = move || dashboard.get().competitors_expanded;

    view! {
        <section class="detail-panel detail-panel--competitors">
            <button
                class="detail-panel__toggle"
                on:click=move |_| {
                    dashboard.update(|d| {
                        d.toggle_competitors();
                    });
                }
            >
                <h3>{title}</h3>
                <span aria-hidden="true">{move || if expanded() { "▲" } else { "▼" }}</span>
            </button>
            <Show when=expanded>{children()}</Show>
        </section>
    }
}
