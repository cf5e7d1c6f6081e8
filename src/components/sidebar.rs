//! Sidebar Component
//!
//! Page navigation, the couple's names, and sign-out.

use leptos::prelude::*;
use planner_core::Page;

use crate::context::AppContext;

#[component]
pub fn Sidebar(ctx: AppContext) -> impl IntoView {
    let user = Memo::new(move |_| ctx.user());

    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">
                <span class="brand-icon">"💍"</span>
                <h2>"Wedding Planner"</h2>
            </div>
            <div class="sidebar-couple">
                <p class="welcome">"Welcome back"</p>
                {move || user.get().map(|user| view! {
                    <p class="couple-names">
                        {user.full_name.clone()}
                        {user.partner_name.clone().map(|partner| format!(" & {partner}"))}
                    </p>
                })}
            </div>
            <nav class="sidebar-nav">
                {Page::ALL.iter().map(|page| {
                    let page = *page;
                    view! {
                        <button
                            class=move || if ctx.page() == page { "nav-item active" } else { "nav-item" }
                            data-page=page.id()
                            on:click=move |_| ctx.navigate(page)
                        >
                            <span class="nav-icon">{page.icon()}</span>
                            <span>{page.label()}</span>
                        </button>
                    }
                }).collect_view()}
            </nav>
            <button class="logout-btn" on:click=move |_| ctx.logout()>"Sign Out"</button>
        </aside>
    }
}
