//! App Component
//!
//! Root component: session gate, sidebar, header and the active page.

use leptos::prelude::*;
use planner_core::{AppConfig, Page};

use crate::components::{
    AnalyticsView, AuthPage, BudgetView, Dashboard, GuestView, Header, Sidebar, TaskView, VendorView, VenueView,
};
use crate::context::{AppContext, Stage};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let ctx = AppContext::new(config);
    // A token left over from a previous visit still needs its profile
    ctx.resolve();

    let stage = Memo::new(move |_| ctx.stage());

    view! {
        {move || match stage.get() {
            Stage::Loading => view! { <LoadingScreen /> }.into_any(),
            Stage::SignedOut => view! { <AuthPage ctx=ctx /> }.into_any(),
            Stage::SignedIn => view! { <MainLayout ctx=ctx /> }.into_any(),
        }}
    }
}

#[component]
fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="loading-heart">"💕"</div>
            <p>"Loading your wedding plans..."</p>
        </div>
    }
}

#[component]
fn MainLayout(ctx: AppContext) -> impl IntoView {
    let page = Memo::new(move |_| ctx.page());

    view! {
        <div class="app-layout">
            <Sidebar ctx=ctx />
            <main class="main-content">
                <Header ctx=ctx />
                <div class="page-content">
                    {move || match page.get() {
                        Page::Dashboard => view! { <Dashboard ctx=ctx /> }.into_any(),
                        Page::Budget => view! { <BudgetView ctx=ctx /> }.into_any(),
                        Page::Guests => view! { <GuestView ctx=ctx /> }.into_any(),
                        Page::Vendors => view! { <VendorView ctx=ctx /> }.into_any(),
                        Page::Tasks => view! { <TaskView ctx=ctx /> }.into_any(),
                        Page::Venues => view! { <VenueView ctx=ctx /> }.into_any(),
                        Page::Analytics => view! { <AnalyticsView ctx=ctx /> }.into_any(),
                    }}
                </div>
            </main>
        </div>
    }
}
