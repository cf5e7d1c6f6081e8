//! Dashboard Component
//!
//! Headline cards from the server's analytics, plus shortcuts to the
//! busiest pages.

use leptos::prelude::*;
use planner_core::aggregate::DashboardAnalytics;
use planner_core::format::money;
use planner_core::Page;

use crate::components::StatCard;
use crate::context::AppContext;

const QUICK_ACTIONS: &[(Page, &str)] = &[
    (Page::Budget, "Add Budget Item"),
    (Page::Guests, "Add Guest"),
    (Page::Vendors, "Add Vendor"),
    (Page::Tasks, "Add Task"),
];

#[component]
pub fn Dashboard(ctx: AppContext) -> impl IntoView {
    let analytics = RwSignal::new(None::<DashboardAnalytics>);

    Effect::new(move |_| ctx.fetch_dashboard(analytics));

    let stat = move |f: fn(&DashboardAnalytics) -> String| {
        Signal::derive(move || analytics.with(|a| a.as_ref().map(f).unwrap_or_default()))
    };

    view! {
        <div class="dashboard">
            <div class="page-header">
                <h2>"Dashboard"</h2>
            </div>

            <Show
                when=move || analytics.with(|a| a.is_some())
                fallback=|| view! { <p class="loading">"Loading dashboard..."</p> }
            >
                <div class="stats-grid">
                    <StatCard
                        title="Budget Overview"
                        icon="💰"
                        value=stat(|a| money(a.budget.total_planned))
                        subtitle=stat(|a| format!("{} spent", money(a.budget.total_spent)))
                    />
                    <StatCard
                        title="Guest RSVPs"
                        icon="👥"
                        value=stat(|a| format!("{}/{}", a.guests.accepted, a.guests.total))
                        subtitle=stat(|a| format!("{} pending", a.guests.pending))
                    />
                    <StatCard
                        title="Tasks Complete"
                        icon="✅"
                        value=stat(|a| format!("{}/{}", a.tasks.completed, a.tasks.total))
                        subtitle=stat(|a| format!("{} pending", a.tasks.pending))
                    />
                    <StatCard
                        title="Vendors Booked"
                        icon="🏪"
                        value=stat(|a| format!("{}/{}", a.vendors.booked, a.vendors.total))
                    />
                </div>
            </Show>

            <div class="dashboard-panels">
                <div class="panel">
                    <h3>"Quick Actions"</h3>
                    <div class="quick-actions">
                        {QUICK_ACTIONS.iter().map(|(page, label)| {
                            let page = *page;
                            view! {
                                <button class="quick-action" on:click=move |_| ctx.navigate(page)>
                                    <span>{page.icon()}</span>
                                    <span>{*label}</span>
                                </button>
                            }
                        }).collect_view()}
                    </div>
                </div>
                <div class="panel">
                    <h3>"Recent Activity"</h3>
                    <p class="muted">
                        "Welcome to your wedding planner! Start by adding your budget items and guest list."
                    </p>
                </div>
            </div>
        </div>
    }
}
