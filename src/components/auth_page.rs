//! Auth Page Component
//!
//! Sign-in and registration on one card. The server's `detail` message is
//! the only error ever shown to the user.

use leptos::prelude::*;
use leptos::task::spawn_local;
use planner_core::domain::CredentialsDraft;
use tracing::{info, warn};

use crate::context::AppContext;

const AUTH_FAILED: &str = "Authentication failed";

#[component]
pub fn AuthPage(ctx: AppContext) -> impl IntoView {
    let (is_login, set_is_login) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let draft = RwSignal::new(CredentialsDraft::default());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        let credentials = draft.get_untracked();
        let login = is_login.get_untracked();

        spawn_local(async move {
            let client = ctx.anonymous_client();
            let result = if login {
                match credentials.to_login() {
                    Ok(request) => client.login(&request).await,
                    Err(err) => {
                        set_error.set(Some(err.to_string()));
                        return;
                    }
                }
            } else {
                match credentials.to_register() {
                    Ok(request) => client.register(&request).await,
                    Err(err) => {
                        set_error.set(Some(err.to_string()));
                        return;
                    }
                }
            };

            match result {
                Ok(token) => {
                    info!(register = !login, "signed in");
                    ctx.login(token.access_token);
                }
                Err(err) => {
                    warn!(error = %err, "sign-in rejected");
                    set_error.set(Some(err.server_detail().unwrap_or(AUTH_FAILED).to_string()));
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-header">
                    <span class="auth-icon">"💍"</span>
                    <h1>"Wedding Planner"</h1>
                    <p>{move || if is_login.get() { "Welcome back! Sign in to continue" } else { "Start planning your perfect day" }}</p>
                </div>

                <form class="auth-form" on:submit=submit>
                    <input
                        type="email"
                        class="form-input"
                        placeholder="Email"
                        required
                        prop:value=move || draft.with(|d| d.email.clone())
                        on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                    />
                    <input
                        type="password"
                        class="form-input"
                        placeholder="Password"
                        required
                        prop:value=move || draft.with(|d| d.password.clone())
                        on:input=move |ev| draft.update(|d| d.password = event_target_value(&ev))
                    />

                    <Show when=move || !is_login.get()>
                        <input
                            type="text"
                            class="form-input"
                            placeholder="Your Full Name"
                            required
                            prop:value=move || draft.with(|d| d.full_name.clone())
                            on:input=move |ev| draft.update(|d| d.full_name = event_target_value(&ev))
                        />
                        <input
                            type="text"
                            class="form-input"
                            placeholder="Partner's Name (optional)"
                            prop:value=move || draft.with(|d| d.partner_name.clone())
                            on:input=move |ev| draft.update(|d| d.partner_name = event_target_value(&ev))
                        />
                        <label class="form-label">"Wedding Date (optional)"</label>
                        <input
                            type="date"
                            class="form-input"
                            prop:value=move || draft.with(|d| d.wedding_date.clone())
                            on:input=move |ev| draft.update(|d| d.wedding_date = event_target_value(&ev))
                        />
                    </Show>

                    {move || error.get().map(|message| view! { <div class="auth-error">{message}</div> })}

                    <button type="submit" class="btn-primary auth-submit">
                        {move || if is_login.get() { "Sign In" } else { "Create Account" }}
                    </button>
                </form>

                <p class="auth-switch">
                    {move || if is_login.get() { "Don't have an account? " } else { "Already have an account? " }}
                    <button
                        type="button"
                        class="link-btn"
                        on:click=move |_| {
                            set_is_login.update(|login| *login = !*login);
                            set_error.set(None);
                        }
                    >
                        {move || if is_login.get() { "Sign Up" } else { "Sign In" }}
                    </button>
                </p>
            </div>
        </div>
    }
}
