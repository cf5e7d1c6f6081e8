//! Stat Card Component

use leptos::prelude::*;

/// Headline number with an optional subtitle
#[component]
pub fn StatCard(
    #[prop(into)] title: String,
    icon: &'static str,
    value: Signal<String>,
    #[prop(optional)] subtitle: Option<Signal<String>>,
    #[prop(optional)] tone: Option<Signal<&'static str>>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card-header">
                <span class="stat-icon">{icon}</span>
                <h4>{title}</h4>
            </div>
            <div class=move || match tone {
                Some(tone) => format!("stat-value {}", tone.get()),
                None => "stat-value".to_string(),
            }>{move || value.get()}</div>
            {subtitle.map(|subtitle| view! { <div class="stat-subtitle">{move || subtitle.get()}</div> })}
        </div>
    }
}

/// Horizontal bar, width clamped to 0..=100
#[component]
pub fn ProgressBar(#[prop(into)] label: String, percent: Signal<f64>, #[prop(default = "bar-fill")] fill: &'static str) -> impl IntoView {
    view! {
        <div class="progress-row">
            <div class="progress-label">
                <span>{label}</span>
                <span>{move || planner_core::format::percent_label(percent.get())}</span>
            </div>
            <div class="progress-track">
                <div class=fill style=move || format!("width: {:.1}%", percent.get().clamp(0.0, 100.0))></div>
            </div>
        </div>
    }
}
