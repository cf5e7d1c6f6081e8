//! Analytics View Component
//!
//! Progress charts from the server's analytics, and a per-category budget
//! breakdown folded from the budget list.

use leptos::prelude::*;
use planner_core::aggregate::{budget_by_category, percent, DashboardAnalytics};
use planner_core::domain::BudgetItem;
use planner_core::format::money;

use crate::components::ProgressBar;
use crate::context::AppContext;

#[component]
pub fn AnalyticsView(ctx: AppContext) -> impl IntoView {
    let analytics = RwSignal::new(None::<DashboardAnalytics>);
    let budget = RwSignal::new(Vec::<BudgetItem>::new());

    Effect::new(move |_| {
        ctx.fetch_dashboard(analytics);
        ctx.fetch(budget);
    });

    let ratio = move |f: fn(&DashboardAnalytics) -> (f64, f64)| {
        Signal::derive(move || {
            analytics.with(|a| a.as_ref().map(|a| {
                let (part, whole) = f(a);
                percent(part, whole)
            }).unwrap_or_default())
        })
    };
    let categories = Memo::new(move |_| budget.with(|items| budget_by_category(items)));

    view! {
        <div class="analytics-view">
            <div class="page-header">
                <h2>"Analytics"</h2>
            </div>

            <div class="chart-grid">
                <div class="panel">
                    <h3>"RSVP Status"</h3>
                    <ProgressBar label="Accepted" percent=ratio(|a| (f64::from(a.guests.accepted), f64::from(a.guests.total))) fill="bar-fill accepted" />
                    <ProgressBar label="Pending" percent=ratio(|a| (f64::from(a.guests.pending), f64::from(a.guests.total))) fill="bar-fill pending" />
                    <ProgressBar label="Declined" percent=ratio(|a| (f64::from(a.guests.declined), f64::from(a.guests.total))) fill="bar-fill declined" />
                </div>

                <div class="panel">
                    <h3>"Planning Progress"</h3>
                    <ProgressBar label="Tasks completed" percent=ratio(|a| (f64::from(a.tasks.completed), f64::from(a.tasks.total))) />
                    <ProgressBar label="Vendors booked" percent=ratio(|a| (f64::from(a.vendors.booked), f64::from(a.vendors.total))) />
                    <ProgressBar label="Budget spent" percent=ratio(|a| (a.budget.total_spent, a.budget.total_planned)) />
                </div>

                <div class="panel panel-wide">
                    <h3>"Budget by Category"</h3>
                    {move || {
                        let totals = categories.get();
                        let ceiling = totals.iter().map(|t| t.planned.max(t.spent)).fold(0.0, f64::max);
                        if totals.is_empty() {
                            view! { <p class="empty-state">"Add budget items to see the breakdown."</p> }.into_any()
                        } else {
                            totals.into_iter().map(|total| {
                                let planned_width = percent(total.planned, ceiling);
                                let spent_width = percent(total.spent, ceiling);
                                view! {
                                    <div class="category-row">
                                        <div class="progress-label">
                                            <span>{total.category.clone()}</span>
                                            <span>{format!("{} of {}", money(total.spent), money(total.planned))}</span>
                                        </div>
                                        <div class="progress-track">
                                            <div class="bar-fill planned" style=format!("width: {planned_width:.1}%")></div>
                                        </div>
                                        <div class="progress-track">
                                            <div class="bar-fill spent" style=format!("width: {spent_width:.1}%")></div>
                                        </div>
                                    </div>
                                }
                            }).collect_view().into_any()
                        }
                    }}
                </div>
            </div>
        </div>
    }
}
