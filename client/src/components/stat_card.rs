//! Headline figure with a caption, used across page summaries.

use leptos::prelude::*;

use crate::state::dashboard::Trend;

#[must_use]
pub fn trend_class(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "stat-card__subtitle stat-card__subtitle--up",
        Trend::Down => "stat-card__subtitle stat-card__subtitle--down",
        Trend::Neutral => "stat-card__subtitle",
    }
}

#[component]
pub fn StatCard(
    #[prop(into)] title: String,
    value: Signal<String>,
    #[prop(into)] subtitle: Signal<String>,
    #[prop(optional)] trend: Option<Trend>,
    #[prop(default = None)] badge: Option<String>,
) -> impl IntoView {
    let subtitle_class = trend_class(trend.unwrap_or(Trend::Neutral));
    view! {
        <div class="stat-card">
            <div class="stat-card__header">
                <span class="stat-card__title">{title}</span>
                {badge.map(|b| view! { <span class="stat-card__badge">{b}</span> })}
            </div>
            <span class="stat-card__value">{move || value.get()}</span>
            <span class=subtitle_class>{move || subtitle.get()}</span>
        </div>
    }
}
