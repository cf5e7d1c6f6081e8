//! Venue View Component

use leptos::prelude::*;
use planner_core::domain::{Choice, Venue, VenueDraft, RATING_OPTIONS, VENUE_TYPES};
use planner_core::format::money;
use planner_core::FormState;

use crate::components::form_fields::{
    bind_choice, bind_text, ChoiceSelect, FormModal, OptionSelect, RatingSelect, TextArea, TextField,
};
use crate::context::AppContext;

#[component]
pub fn VenueView(ctx: AppContext) -> impl IntoView {
    let venues = RwSignal::new(Vec::<Venue>::new());
    let form = RwSignal::new(FormState::<VenueDraft>::default());

    Effect::new(move |_| ctx.fetch(venues));

    let (name, set_name) = bind_text(form, |d| &d.name, |d| &mut d.name);
    let (venue_type, set_venue_type) = bind_text(form, |d| &d.venue_type, |d| &mut d.venue_type);
    let (address, set_address) = bind_text(form, |d| &d.address, |d| &mut d.address);
    let (capacity, set_capacity) = bind_text(form, |d| &d.capacity, |d| &mut d.capacity);
    let (price, set_price) = bind_text(form, |d| &d.price, |d| &mut d.price);
    let (rating, set_rating) = bind_text(form, |d| &d.rating, |d| &mut d.rating);
    let (status, set_status) = bind_choice(form, |d| d.status, |d, status| d.status = status);
    let (contact, set_contact) = bind_text(form, |d| &d.contact_person, |d| &mut d.contact_person);
    let (phone, set_phone) = bind_text(form, |d| &d.phone, |d| &mut d.phone);
    let (email, set_email) = bind_text(form, |d| &d.email, |d| &mut d.email);
    let (notes, set_notes) = bind_text(form, |d| &d.notes, |d| &mut d.notes);

    view! {
        <div class="resource-view venue-view">
            <div class="page-header">
                <h2>"Venues"</h2>
                <button class="btn-primary" on:click=move |_| form.update(|f| f.open_create())>
                    "+ Add Venue"
                </button>
            </div>

            <FormModal form=form noun="Venue" on_submit=Callback::new(move |_| ctx.submit(form, venues))>
                <TextField placeholder="Venue Name" value=name on_input=set_name required=true />
                <OptionSelect
                    placeholder="Select Venue Type"
                    options=VENUE_TYPES
                    value=venue_type
                    on_change=set_venue_type
                    required=true
                />
                <TextField placeholder="Address" value=address on_input=set_address required=true />
                <TextField placeholder="Capacity (optional)" input_type="number" value=capacity on_input=set_capacity />
                <TextField placeholder="Price (optional)" input_type="number" value=price on_input=set_price />
                <RatingSelect options=RATING_OPTIONS value=rating on_change=set_rating />
                <ChoiceSelect value=status on_change=set_status />
                <TextField placeholder="Contact Person (optional)" value=contact on_input=set_contact />
                <TextField placeholder="Phone (optional)" input_type="tel" value=phone on_input=set_phone />
                <TextField placeholder="Email (optional)" input_type="email" value=email on_input=set_email />
                <TextArea placeholder="Notes (optional)" value=notes on_input=set_notes />
            </FormModal>

            <div class="card-grid">
                {move || venues.get().into_iter().map(|venue| {
                    let record = venue.clone();
                    view! {
                        <div class="record-card">
                            <div class="record-card-header">
                                <h3>{venue.name.clone()}</h3>
                                <span class=format!("badge badge-{}", venue.status.as_str())>
                                    {venue.status.label()}
                                </span>
                            </div>
                            <p class="record-category">{venue.venue_type.clone()}</p>
                            <p>"📍 " {venue.address.clone()}</p>
                            {venue.capacity.map(|capacity| view! { <p>{format!("👥 Up to {capacity} guests")}</p> })}
                            {venue.price.map(|price| view! { <p class="record-price">{money(price)}</p> })}
                            {venue.rating.map(|stars| view! { <p class="record-rating">{"⭐".repeat(stars as usize)}</p> })}
                            {venue.contact_person.clone().map(|person| view! { <p>"👤 " {person}</p> })}
                            {venue.phone.clone().map(|phone| view! { <p>"📞 " {phone}</p> })}
                            {venue.email.clone().map(|email| view! { <p>"📧 " {email}</p> })}
                            {venue.notes.clone().map(|notes| view! { <p class="record-notes">{notes}</p> })}
                            <button class="link-btn" on:click=move |_| form.update(|f| f.open_edit(&record))>
                                "Edit"
                            </button>
                        </div>
                    }
                }).collect_view()}
            </div>

            <Show when=move || venues.with(|venues| venues.is_empty())>
                <p class="empty-state">"No venues yet. Keep track of the places you're visiting."</p>
            </Show>
        </div>
    }
}
