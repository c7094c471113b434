//! Colored score ring for one construct, with hover tooltip.

use leptos::prelude::*;

use crate::report::{Construct, ConstructKind};
use crate::util::color::ring_css;

#[component]
pub fn ScoreRing(construct: Construct, selected: Signal<bool>, on_select: Callback<ConstructKind>) -> impl IntoView {
    let ring_style = format!("border-color: {}", ring_css(construct.value));
    let kind = construct.kind;

    view! {
        <div class="score-ring" class:score-ring--selected=move || selected.get() on:click=move |_| on_select.run(kind)>
            <div class="score-ring__hover">
                <div class="score-ring__outer" style=ring_style>
                    <div class="score-ring__inner">{construct.value}</div>
                </div>
                <div class="score-ring__tooltip" role="tooltip">
                    <p>{kind.tooltip()}</p>
                </div>
            </div>
            <div class="score-ring__label">{kind.name()}</div>
        </div>
    }
}
