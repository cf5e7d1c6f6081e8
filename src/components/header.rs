//! Header Component
//!
//! Greeting plus the wedding countdown banner.

use leptos::prelude::*;

use crate::context::{self, AppContext};

#[component]
pub fn Header(ctx: AppContext) -> impl IntoView {
    let user = Memo::new(move |_| ctx.user());
    let countdown = move || user.get().and_then(|user| user.countdown(context::now()));

    view! {
        <header class="header">
            <div class="header-greeting">
                <h1>{move || user.get().map(|user| format!("Hello, {}!", user.full_name))}</h1>
                <p>"Let's make your dream wedding come true"</p>
            </div>
            {move || countdown().map(|countdown| view! {
                <div class="countdown-banner">
                    <span class="countdown-icon">"💒"</span>
                    <span class="countdown-text">{countdown.to_string()}</span>
                </div>
            })}
        </header>
    }
}
