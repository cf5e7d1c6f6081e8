//! Vendor View Component
//!
//! Vendor cards grouped visually by booking status.

use leptos::prelude::*;
use planner_core::aggregate::VendorSummary;
use planner_core::domain::{Choice, Vendor, VendorDraft, VendorStatus, RATING_OPTIONS, VENDOR_CATEGORIES};
use planner_core::format::money;
use planner_core::FormState;

use crate::components::form_fields::{
    bind_choice, bind_text, ChoiceSelect, FormModal, OptionSelect, RatingSelect, TextArea, TextField,
};
use crate::components::StatCard;
use crate::context::AppContext;

#[component]
pub fn VendorView(ctx: AppContext) -> impl IntoView {
    let vendors = RwSignal::new(Vec::<Vendor>::new());
    let form = RwSignal::new(FormState::<VendorDraft>::default());

    Effect::new(move |_| ctx.fetch(vendors));

    let summary = Memo::new(move |_| vendors.with(|vendors| VendorSummary::from_vendors(vendors)));

    let (name, set_name) = bind_text(form, |d| &d.name, |d| &mut d.name);
    let (category, set_category) = bind_text(form, |d| &d.category, |d| &mut d.category);
    let (contact, set_contact) = bind_text(form, |d| &d.contact_person, |d| &mut d.contact_person);
    let (email, set_email) = bind_text(form, |d| &d.email, |d| &mut d.email);
    let (phone, set_phone) = bind_text(form, |d| &d.phone, |d| &mut d.phone);
    let (address, set_address) = bind_text(form, |d| &d.address, |d| &mut d.address);
    let (quote, set_quote) = bind_text(form, |d| &d.price_quote, |d| &mut d.price_quote);
    let (rating, set_rating) = bind_text(form, |d| &d.rating, |d| &mut d.rating);
    let (status, set_status) = bind_choice(form, |d| d.status, |d, status| d.status = status);
    let (notes, set_notes) = bind_text(form, |d| &d.notes, |d| &mut d.notes);

    view! {
        <div class="resource-view vendor-view">
            <div class="page-header">
                <h2>"Vendors"</h2>
                <button class="btn-primary" on:click=move |_| form.update(|f| f.open_create())>
                    "+ Add Vendor"
                </button>
            </div>

            <div class="stats-grid">
                <StatCard
                    title="Total Vendors"
                    icon="🏪"
                    value=Signal::derive(move || summary.get().total.to_string())
                />
                {VendorStatus::ALL.iter().map(|status| {
                    let status = *status;
                    view! {
                        <StatCard
                            title=status.label()
                            icon="•"
                            value=Signal::derive(move || summary.get().count(status).to_string())
                        />
                    }
                }).collect_view()}
            </div>

            <FormModal form=form noun="Vendor" on_submit=Callback::new(move |_| ctx.submit(form, vendors))>
                <TextField placeholder="Vendor Name" value=name on_input=set_name required=true />
                <OptionSelect
                    placeholder="Select Category"
                    options=VENDOR_CATEGORIES
                    value=category
                    on_change=set_category
                    required=true
                />
                <TextField placeholder="Contact Person (optional)" value=contact on_input=set_contact />
                <TextField placeholder="Email (optional)" input_type="email" value=email on_input=set_email />
                <TextField placeholder="Phone (optional)" input_type="tel" value=phone on_input=set_phone />
                <TextField placeholder="Address (optional)" value=address on_input=set_address />
                <TextField placeholder="Price Quote (optional)" input_type="number" value=quote on_input=set_quote />
                <RatingSelect options=RATING_OPTIONS value=rating on_change=set_rating />
                <ChoiceSelect value=status on_change=set_status />
                <TextArea placeholder="Notes (optional)" value=notes on_input=set_notes />
            </FormModal>

            <div class="card-grid">
                {move || vendors.get().into_iter().map(|vendor| {
                    let record = vendor.clone();
                    view! {
                        <div class="record-card">
                            <div class="record-card-header">
                                <h3>{vendor.name.clone()}</h3>
                                <span class=format!("badge badge-{}", vendor.status.as_str())>
                                    {vendor.status.label()}
                                </span>
                            </div>
                            <p class="record-category">{vendor.category.clone()}</p>
                            {vendor.contact_person.clone().map(|person| view! { <p>"👤 " {person}</p> })}
                            {vendor.email.clone().map(|email| view! { <p>"📧 " {email}</p> })}
                            {vendor.phone.clone().map(|phone| view! { <p>"📞 " {phone}</p> })}
                            {vendor.address.clone().map(|address| view! { <p>"📍 " {address}</p> })}
                            {vendor.price_quote.map(|quote| view! { <p class="record-price">{money(quote)}</p> })}
                            {vendor.rating.map(|stars| view! { <p class="record-rating">{"⭐".repeat(stars as usize)}</p> })}
                            {vendor.notes.clone().map(|notes| view! { <p class="record-notes">{notes}</p> })}
                            <button class="link-btn" on:click=move |_| form.update(|f| f.open_edit(&record))>
                                "Edit"
                            </button>
                        </div>
                    }
                }).collect_view()}
            </div>

            <Show when=move || vendors.with(|vendors| vendors.is_empty())>
                <p class="empty-state">"No vendors yet. Add the photographers, florists and caterers you're considering."</p>
            </Show>
        </div>
    }
}
