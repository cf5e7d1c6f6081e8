//! Guest View Component
//!
//! Guest list with RSVP tallies.

use leptos::prelude::*;
use planner_core::aggregate::GuestSummary;
use planner_core::domain::{Choice, Guest, GuestDraft, GUEST_GROUPS};
use planner_core::FormState;

use crate::components::form_fields::{
    bind_choice, bind_flag, bind_text, CheckboxField, ChoiceSelect, FormModal, OptionSelect, TextField,
};
use crate::components::StatCard;
use crate::context::AppContext;

#[component]
pub fn GuestView(ctx: AppContext) -> impl IntoView {
    let guests = RwSignal::new(Vec::<Guest>::new());
    let form = RwSignal::new(FormState::<GuestDraft>::default());

    Effect::new(move |_| ctx.fetch(guests));

    let summary = Memo::new(move |_| guests.with(|guests| GuestSummary::from_guests(guests)));
    let count = move |f: fn(&GuestSummary) -> usize| Signal::derive(move || f(&summary.get()).to_string());

    let (name, set_name) = bind_text(form, |d| &d.name, |d| &mut d.name);
    let (email, set_email) = bind_text(form, |d| &d.email, |d| &mut d.email);
    let (phone, set_phone) = bind_text(form, |d| &d.phone, |d| &mut d.phone);
    let (rsvp, set_rsvp) = bind_choice(form, |d| d.rsvp_status, |d, status| d.rsvp_status = status);
    let (group, set_group) = bind_text(form, |d| &d.group, |d| &mut d.group);
    let (dietary, set_dietary) = bind_text(form, |d| &d.dietary_restrictions, |d| &mut d.dietary_restrictions);
    let (plus_one, set_plus_one) = bind_flag(form, |d| d.plus_one, |d, flag| d.plus_one = flag);

    view! {
        <div class="resource-view guest-view">
            <div class="page-header">
                <h2>"Guest List"</h2>
                <button class="btn-primary" on:click=move |_| form.update(|f| f.open_create())>
                    "+ Add Guest"
                </button>
            </div>

            <div class="stats-grid">
                <StatCard title="Total Guests" icon="👥" value=count(|s| s.total) />
                <StatCard title="Accepted" icon="✅" value=count(|s| s.accepted) />
                <StatCard title="Pending" icon="⏳" value=count(|s| s.pending) />
                <StatCard title="Declined" icon="❌" value=count(|s| s.declined) />
                <StatCard title="Plus Ones" icon="➕" value=count(|s| s.plus_ones) />
            </div>

            <FormModal form=form noun="Guest" on_submit=Callback::new(move |_| ctx.submit(form, guests))>
                <TextField placeholder="Guest Name" value=name on_input=set_name required=true />
                <TextField placeholder="Email (optional)" input_type="email" value=email on_input=set_email />
                <TextField placeholder="Phone (optional)" input_type="tel" value=phone on_input=set_phone />
                <ChoiceSelect value=rsvp on_change=set_rsvp />
                <OptionSelect placeholder="Select Group" options=GUEST_GROUPS value=group on_change=set_group />
                <TextField placeholder="Dietary Restrictions (optional)" value=dietary on_input=set_dietary />
                <CheckboxField label="Plus One" value=plus_one on_change=set_plus_one />
            </FormModal>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Contact"</th>
                        <th>"RSVP"</th>
                        <th>"Group"</th>
                        <th>"Plus One"</th>
                        <th>"Dietary"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || guests.get().into_iter().map(|guest| {
                        let record = guest.clone();
                        let contact = [guest.email.clone(), guest.phone.clone()]
                            .into_iter()
                            .flatten()
                            .collect::<Vec<_>>()
                            .join(" · ");
                        view! {
                            <tr>
                                <td>{guest.name.clone()}</td>
                                <td>{contact}</td>
                                <td>
                                    <span class=format!("badge badge-{}", guest.rsvp_status.as_str())>
                                        {guest.rsvp_status.label()}
                                    </span>
                                </td>
                                <td>{guest.group.clone().unwrap_or_else(|| "-".to_string())}</td>
                                <td>{if guest.plus_one { "Yes" } else { "No" }}</td>
                                <td>{guest.dietary_restrictions.clone().unwrap_or_else(|| "-".to_string())}</td>
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

            <Show when=move || guests.with(|guests| guests.is_empty())>
                <p class="empty-state">"No guests yet. Start building your guest list."</p>
            </Show>
        </div>
    }
}
