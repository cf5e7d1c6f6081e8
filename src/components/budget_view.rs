//! Budget View Component
//!
//! Budget line items with planned/spent/remaining totals.

use leptos::prelude::*;
use planner_core::aggregate::{BudgetSummary, Tone};
use planner_core::domain::{BudgetDraft, BudgetItem, BUDGET_CATEGORIES};
use planner_core::format::money;
use planner_core::FormState;

use crate::components::form_fields::{bind_text, FormModal, OptionSelect, TextArea, TextField};
use crate::components::StatCard;
use crate::context::AppContext;

#[component]
pub fn BudgetView(ctx: AppContext) -> impl IntoView {
    let items = RwSignal::new(Vec::<BudgetItem>::new());
    let form = RwSignal::new(FormState::<BudgetDraft>::default());

    Effect::new(move |_| ctx.fetch(items));

    let summary = Memo::new(move |_| items.with(|items| BudgetSummary::from_items(items)));

    let (category, set_category) = bind_text(form, |d| &d.category, |d| &mut d.category);
    let (planned, set_planned) = bind_text(form, |d| &d.planned_amount, |d| &mut d.planned_amount);
    let (spent, set_spent) = bind_text(form, |d| &d.spent_amount, |d| &mut d.spent_amount);
    let (vendor, set_vendor) = bind_text(form, |d| &d.vendor, |d| &mut d.vendor);
    let (notes, set_notes) = bind_text(form, |d| &d.notes, |d| &mut d.notes);

    view! {
        <div class="resource-view budget-view">
            <div class="page-header">
                <h2>"Budget"</h2>
                <button class="btn-primary" on:click=move |_| form.update(|f| f.open_create())>
                    "+ Add Budget Item"
                </button>
            </div>

            <div class="stats-grid">
                <StatCard
                    title="Total Budget"
                    icon="💰"
                    value=Signal::derive(move || money(summary.get().total_planned))
                />
                <StatCard
                    title="Total Spent"
                    icon="💸"
                    value=Signal::derive(move || money(summary.get().total_spent))
                />
                <StatCard
                    title="Remaining"
                    icon="🏦"
                    value=Signal::derive(move || money(summary.get().remaining))
                    tone=Signal::derive(move || summary.get().remaining_tone().css_class())
                />
            </div>

            <FormModal form=form noun="Budget Item" on_submit=Callback::new(move |_| ctx.submit(form, items))>
                <OptionSelect
                    placeholder="Select Category"
                    options=BUDGET_CATEGORIES
                    value=category
                    on_change=set_category
                    required=true
                />
                <TextField placeholder="Planned Amount" input_type="number" value=planned on_input=set_planned required=true />
                <TextField placeholder="Spent Amount" input_type="number" value=spent on_input=set_spent />
                <TextField placeholder="Vendor (optional)" value=vendor on_input=set_vendor />
                <TextArea placeholder="Notes (optional)" value=notes on_input=set_notes />
            </FormModal>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Category"</th>
                        <th>"Planned"</th>
                        <th>"Spent"</th>
                        <th>"Remaining"</th>
                        <th>"Vendor"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || items.get().into_iter().map(|item| {
                        let remaining = item.remaining();
                        let record = item.clone();
                        view! {
                            <tr>
                                <td>{item.category.clone()}</td>
                                <td>{money(item.planned_amount)}</td>
                                <td>{money(item.spent_amount)}</td>
                                <td class=Tone::of(remaining).css_class()>{money(remaining)}</td>
                                <td>{item.vendor.clone().unwrap_or_else(|| "-".to_string())}</td>
                                <td>
                                    <button class="link-btn" on:click=move |_| form.update(|f| f.open_edit(&record))>
                                        "Edit"
                                    </button>
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>

            <Show when=move || items.with(|items| items.is_empty())>
                <p class="empty-state">"No budget items yet. Add your first one to start tracking."</p>
            </Show>
        </div>
    }
}
