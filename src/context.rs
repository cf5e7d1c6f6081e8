//! Application Context
//!
//! Shared state handed to every view as an explicit `ctx` prop.

use chrono::{Local, NaiveDateTime};
use leptos::prelude::*;
use leptos::task::spawn_local;
use planner_core::controller::{self, SubmitError};
use planner_core::aggregate::DashboardAnalytics;
use planner_core::domain::{Resource, Task, User};
use planner_core::{ApiClient, ApiError, AppConfig, FormState, Page, ReqwestTransport, SessionPhase, Shell};
use tracing::{debug, error, warn};

use crate::storage::LocalStorageTokenStore;

/// Which top-level screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Loading,
    SignedOut,
    SignedIn,
}

/// App-wide signals plus the build-time config
#[derive(Clone, Copy)]
pub struct AppContext {
    shell: RwSignal<Shell<LocalStorageTokenStore>>,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let store = LocalStorageTokenStore::new(config.token_key.clone());
        Self {
            shell: RwSignal::new(Shell::restore(store)),
            config: StoredValue::new(config),
        }
    }

    pub fn stage(&self) -> Stage {
        self.shell.with(|shell| match shell.phase() {
            SessionPhase::Resolving => Stage::Loading,
            SessionPhase::Anonymous => Stage::SignedOut,
            SessionPhase::Authenticated(_) => Stage::SignedIn,
        })
    }

    pub fn user(&self) -> Option<User> {
        self.shell.with(|shell| shell.session().user().cloned())
    }

    pub fn page(&self) -> Page {
        self.shell.with(|shell| shell.page())
    }

    pub fn navigate(&self, page: Page) {
        self.shell.update(|shell| shell.navigate(page));
    }

    /// Store a freshly issued token and fetch its profile
    pub fn login(&self, token: String) {
        self.shell.update(|shell| shell.login(token));
        self.resolve();
    }

    pub fn logout(&self) {
        self.shell.update(|shell| shell.logout());
    }

    /// Resolve the stored token into a profile. One attempt, no retry.
    pub fn resolve(&self) {
        let Some(token) = self.token() else { return };
        let ctx = *self;
        spawn_local(async move {
            let result = ApiClient::authorized(ctx.transport(), token.clone()).me().await;
            ctx.shell.update(|shell| shell.apply_profile(&token, result));
        });
    }

    /// Client for `/login` and `/register`, no bearer attached
    pub fn anonymous_client(&self) -> ApiClient<ReqwestTransport> {
        ApiClient::new(self.transport())
    }

    /// Client carrying the current token; with none it fails every
    /// protected call without touching the network.
    pub fn client(&self) -> ApiClient<ReqwestTransport> {
        match self.token() {
            Some(token) => ApiClient::authorized(self.transport(), token),
            None => ApiClient::new(self.transport()),
        }
    }

    /// Fetch a view's list into `target`; on failure the old list stays.
    pub fn fetch<R>(&self, target: RwSignal<Vec<R>>)
    where
        R: Resource + Send + Sync + 'static,
    {
        let ctx = *self;
        spawn_local(async move {
            match controller::load::<R, _>(&ctx.client()).await {
                Ok(list) => target.set(list),
                Err(err) => ctx.report(&err),
            }
        });
    }

    /// Server-computed totals; shown as-is, never recomputed locally.
    pub fn fetch_dashboard(&self, target: RwSignal<Option<DashboardAnalytics>>) {
        let ctx = *self;
        spawn_local(async move {
            match ctx.client().dashboard().await {
                Ok(analytics) => target.set(Some(analytics)),
                Err(err) => {
                    error!(error = %err, "failed to fetch dashboard analytics");
                    ctx.report(&err);
                }
            }
        });
    }

    /// Submit a form. The form closes only once the mutation has landed.
    pub fn submit<R>(&self, form: RwSignal<FormState<R::Draft>>, target: RwSignal<Vec<R>>)
    where
        R: Resource + Send + Sync + 'static,
        R::Draft: Send + Sync + 'static,
    {
        let ctx = *self;
        let snapshot = form.get_untracked();
        spawn_local(async move {
            match controller::submit::<R, _>(&ctx.client(), &snapshot).await {
                Ok(refreshed) => {
                    form.update(|f| f.close());
                    if let Some(list) = refreshed {
                        target.set(list);
                    }
                }
                Err(SubmitError::Api(err)) => ctx.report(&err),
                Err(SubmitError::Invalid(err)) => debug!(error = %err, "form left open"),
            }
        });
    }

    /// Flip completion of the task as currently loaded. On failure the list
    /// is left exactly as it was.
    pub fn toggle_task(&self, id: String, target: RwSignal<Vec<Task>>) {
        let Some(task) = target.with_untracked(|tasks| tasks.iter().find(|t| t.id == id).cloned()) else {
            return;
        };
        let ctx = *self;
        spawn_local(async move {
            match controller::toggle_complete(&ctx.client(), &task).await {
                Ok(list) => target.set(list),
                Err(err) => ctx.report(&err),
            }
        });
    }

    /// A rejected token ends the session; anything else is only logged.
    pub fn report(&self, err: &ApiError) {
        if err.is_auth_failure() {
            warn!(error = %err, "session rejected, signing out");
            self.logout();
        }
    }

    fn token(&self) -> Option<String> {
        self.shell.with_untracked(|shell| shell.session().token().map(str::to_string))
    }

    fn transport(&self) -> ReqwestTransport {
        ReqwestTransport::new(self.config.with_value(|config| config.api_base()))
    }
}

/// Wall clock as the browser sees it; stored timestamps are naive local time.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}
