//! Task View Component
//!
//! Checklist with completion toggles. Open tasks come first, each group by
//! due date; overdue rows are flagged.

use leptos::prelude::*;
use planner_core::aggregate::TaskSummary;
use planner_core::domain::{Choice, Task, TaskDraft, TASK_CATEGORIES};
use planner_core::ordering::display_order;
use planner_core::FormState;

use crate::components::form_fields::{bind_choice, bind_text, ChoiceSelect, FormModal, OptionSelect, TextArea, TextField};
use crate::components::StatCard;
use crate::context::{self, AppContext};

#[component]
pub fn TaskView(ctx: AppContext) -> impl IntoView {
    let tasks = RwSignal::new(Vec::<Task>::new());
    let form = RwSignal::new(FormState::<TaskDraft>::default());

    Effect::new(move |_| ctx.fetch(tasks));

    let ordered = Memo::new(move |_| tasks.with(|tasks| display_order(tasks)));
    let summary = Memo::new(move |_| tasks.with(|tasks| TaskSummary::from_tasks(tasks, context::now())));
    let count = move |f: fn(&TaskSummary) -> usize| Signal::derive(move || f(&summary.get()).to_string());

    let (title, set_title) = bind_text(form, |d| &d.title, |d| &mut d.title);
    let (description, set_description) = bind_text(form, |d| &d.description, |d| &mut d.description);
    let (category, set_category) = bind_text(form, |d| &d.category, |d| &mut d.category);
    let (due_date, set_due_date) = bind_text(form, |d| &d.due_date, |d| &mut d.due_date);
    let (priority, set_priority) = bind_choice(form, |d| d.priority, |d, priority| d.priority = priority);
    let (assigned, set_assigned) = bind_text(form, |d| &d.assigned_to, |d| &mut d.assigned_to);
    let (notes, set_notes) = bind_text(form, |d| &d.notes, |d| &mut d.notes);

    view! {
        <div class="resource-view task-view">
            <div class="page-header">
                <h2>"Tasks"</h2>
                <button class="btn-primary" on:click=move |_| form.update(|f| f.open_create())>
                    "+ Add Task"
                </button>
            </div>

            <div class="stats-grid">
                <StatCard title="Total Tasks" icon="📋" value=count(|s| s.total) />
                <StatCard title="Completed" icon="✅" value=count(|s| s.completed) />
                <StatCard title="Pending" icon="⏳" value=count(|s| s.pending) />
                <StatCard
                    title="Overdue"
                    icon="⚠️"
                    value=count(|s| s.overdue)
                    tone=Signal::derive(move || if summary.get().overdue > 0 { "amount-negative" } else { "" })
                />
            </div>

            <FormModal form=form noun="Task" on_submit=Callback::new(move |_| ctx.submit(form, tasks))>
                <TextField placeholder="Task Title" value=title on_input=set_title required=true />
                <TextArea placeholder="Description (optional)" value=description on_input=set_description />
                <OptionSelect
                    placeholder="Select Category"
                    options=TASK_CATEGORIES
                    value=category
                    on_change=set_category
                    required=true
                />
                <label class="form-label">"Due Date (optional)"</label>
                <TextField placeholder="Due Date" input_type="date" value=due_date on_input=set_due_date />
                <ChoiceSelect value=priority on_change=set_priority />
                <TextField placeholder="Assigned To (optional)" value=assigned on_input=set_assigned />
                <TextArea placeholder="Notes (optional)" value=notes on_input=set_notes />
            </FormModal>

            <div class="task-list">
                {move || {
                    let now = context::now();
                    ordered.get().into_iter().map(|task| {
                        let overdue = task.is_overdue(now);
                        let completed = task.completed;
                        let toggle_id = task.id.clone();
                        let checked_id = task.id.clone();
                        let record = task.clone();
                        let row_class = match (completed, overdue) {
                            (true, _) => "task-row completed",
                            (false, true) => "task-row overdue",
                            (false, false) => "task-row",
                        };
                        view! {
                            <div class=row_class>
                                <input
                                    type="checkbox"
                                    class="task-check"
                                    prop:checked=move || tasks.with(|tasks| {
                                        tasks.iter().any(|t| t.id == checked_id && t.completed)
                                    })
                                    on:click=move |ev| {
                                        // The box only changes once the re-fetched list says so
                                        ev.prevent_default();
                                        ctx.toggle_task(toggle_id.clone(), tasks);
                                    }
                                />
                                <div class="task-body">
                                    <div class="task-title">{task.title.clone()}</div>
                                    {task.description.clone().map(|text| view! { <div class="task-description">{text}</div> })}
                                    <div class="task-meta">
                                        <span class="task-category">{task.category.clone()}</span>
                                        <span class=format!("badge priority-{}", task.priority.as_str())>
                                            {task.priority.label()}
                                        </span>
                                        {task.due_date.map(|due| view! {
                                            <span class="task-due">{format!("Due {}", due.format("%b %-d, %Y"))}</span>
                                        })}
                                        {overdue.then(|| view! { <span class="badge badge-overdue">"Overdue"</span> })}
                                        {task.assigned_to.clone().map(|who| view! { <span class="task-assignee">"👤 " {who}</span> })}
                                    </div>
                                </div>
                                <button class="link-btn" on:click=move |_| form.update(|f| f.open_edit(&record))>
                                    "Edit"
                                </button>
                            </div>
                        }
                    }).collect_view()
                }}
            </div>

            <Show when=move || tasks.with(|tasks| tasks.is_empty())>
                <p class="empty-state">"No tasks yet. Add your first to-do to get organized."</p>
            </Show>
        </div>
    }
}
