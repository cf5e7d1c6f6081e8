//! Client Integration Tests
//!
//! Client, session and controllers against a scripted in-memory transport.

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use assert_matches::assert_matches;
    use async_trait::async_trait;
    use serde_json::json;

    use crate::client::{ApiClient, ApiError, ApiRequest, ApiResponse, ApiResult, HttpTransport, Method};
    use crate::controller::{self, SubmitError};
    use crate::domain::{
        BudgetDraft, BudgetItem, CredentialsDraft, DomainError, Guest, Resource, RsvpStatus, Task,
    };
    use crate::form::FormState;
    use crate::navigation::Page;
    use crate::session::{MemoryTokenStore, SessionPhase, TokenStore};
    use crate::shell::Shell;

    /// Replays queued responses and records every request
    #[derive(Default)]
    struct ScriptedTransport {
        responses: RefCell<VecDeque<ApiResult<ApiResponse>>>,
        requests: RefCell<Vec<ApiRequest>>,
    }

    impl ScriptedTransport {
        fn reply(self, status: u16, body: serde_json::Value) -> Self {
            self.responses.borrow_mut().push_back(Ok(ApiResponse { status, body: body.to_string() }));
            self
        }

        fn fail(self, message: &str) -> Self {
            self.responses.borrow_mut().push_back(Err(ApiError::Transport(message.to_string())));
            self
        }

        fn requests(&self) -> Vec<ApiRequest> {
            self.requests.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl HttpTransport for ScriptedTransport {
        async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
            self.requests.borrow_mut().push(request);
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Transport("no scripted response".into())))
        }
    }

    fn budget_json(id: &str, planned: f64, spent: f64) -> serde_json::Value {
        json!({"id": id, "user_id": "u1", "category": "Venue", "planned_amount": planned,
               "spent_amount": spent, "vendor": null, "notes": null, "created_at": "2025-01-01T09:00:00"})
    }

    fn task_json(id: &str, completed: bool) -> serde_json::Value {
        json!({"id": id, "user_id": "u1", "title": "Order invitations", "description": null,
               "category": "Guests", "due_date": "2025-04-01T09:30:00", "completed": completed,
               "priority": "high", "assigned_to": "Ana", "notes": "Cream paper"})
    }

    fn valid_budget_form() -> FormState<BudgetDraft> {
        let mut form = FormState::<BudgetDraft>::default();
        form.open_create();
        form.edit(|d| {
            d.category = "Venue".into();
            d.planned_amount = "5000".into();
        });
        form
    }

    // ========================
    // Client
    // ========================

    #[tokio::test]
    async fn test_list_sends_bearer_token() {
        let transport = ScriptedTransport::default().reply(200, json!([budget_json("b1", 500.0, 200.0)]));
        let client = ApiClient::authorized(&transport, "tok");

        let items: Vec<BudgetItem> = client.list().await.expect("list failed");

        assert_eq!(items.len(), 1);
        let sent = transport.requests();
        assert_eq!(sent[0].method, Method::Get);
        assert_eq!(sent[0].path, "/budget");
        assert_eq!(sent[0].bearer.as_deref(), Some("tok"));
        assert_eq!(sent[0].body, None);
    }

    #[tokio::test]
    async fn test_login_is_anonymous() {
        let transport = ScriptedTransport::default()
            .reply(200, json!({"access_token": "abc", "token_type": "bearer"}));
        let client = ApiClient::new(&transport);
        let draft = CredentialsDraft {
            email: "ana@example.com".into(),
            password: "pw".into(),
            ..Default::default()
        };

        let token = client.login(&draft.to_login().unwrap()).await.unwrap();

        assert_eq!(token.access_token, "abc");
        let sent = transport.requests();
        assert_eq!(sent[0].path, "/login");
        assert_eq!(sent[0].bearer, None);
        assert_eq!(sent[0].body, Some(json!({"email": "ana@example.com", "password": "pw"})));
    }

    #[tokio::test]
    async fn test_register_sends_null_wedding_date() {
        let transport = ScriptedTransport::default().reply(200, json!({"access_token": "abc"}));
        let client = ApiClient::new(&transport);
        let draft = CredentialsDraft {
            email: "ana@example.com".into(),
            password: "pw".into(),
            full_name: "Ana".into(),
            partner_name: "".into(),
            wedding_date: "".into(),
        };

        client.register(&draft.to_register().unwrap()).await.unwrap();

        let body = transport.requests()[0].body.clone().unwrap();
        assert_eq!(body["wedding_date"], serde_json::Value::Null);
        assert_ne!(body["wedding_date"], json!(""));
    }

    #[tokio::test]
    async fn test_login_error_detail_is_surfaced() {
        let transport = ScriptedTransport::default()
            .reply(401, json!({"detail": "Incorrect email or password"}));
        let client = ApiClient::new(&transport);
        let draft = CredentialsDraft { email: "a@b.c".into(), password: "x".into(), ..Default::default() };

        let err = client.login(&draft.to_login().unwrap()).await.unwrap_err();

        assert_eq!(err.detail(), "Incorrect email or password");
    }

    #[tokio::test]
    async fn test_protected_call_without_token_never_hits_network() {
        let transport = ScriptedTransport::default();
        let client = ApiClient::new(&transport);

        let err = client.me().await.unwrap_err();

        assert!(err.is_auth_failure());
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_update_ignores_acknowledgement_body() {
        let transport = ScriptedTransport::default().reply(200, json!({"message": "Guest updated"}));
        let client = ApiClient::authorized(&transport, "tok");
        let guest: Guest = serde_json::from_value(json!({"id": "g1", "name": "Lia"})).unwrap();
        let mut draft = guest.to_draft();
        draft.rsvp_status = RsvpStatus::Accepted;

        client
            .update::<Guest>("g1", &crate::domain::Draft::to_payload(&draft).unwrap())
            .await
            .unwrap();

        let sent = transport.requests();
        assert_eq!(sent[0].method, Method::Put);
        assert_eq!(sent[0].path, "/guests/g1");
        assert_eq!(sent[0].body.as_ref().unwrap()["rsvp_status"], "accepted");
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_decode_error() {
        let transport = ScriptedTransport::default().reply(200, json!({"not": "a list"}));
        let client = ApiClient::authorized(&transport, "tok");

        let result = client.list::<BudgetItem>().await;

        assert_matches!(result, Err(ApiError::Decode(_)));
    }

    // ========================
    // Session
    // ========================

    /// Startup and post-login profile fetch, as the app drives it
    async fn resolve<T: HttpTransport>(shell: &mut Shell<MemoryTokenStore>, transport: T) {
        let Some(token) = shell.session().token().map(str::to_string) else {
            return;
        };
        let result = ApiClient::authorized(transport, token.clone()).me().await;
        shell.apply_profile(&token, result);
    }

    fn profile_json(id: &str) -> serde_json::Value {
        json!({"id": id, "email": "ana@example.com", "full_name": "Ana",
               "partner_name": "Bea", "wedding_date": null})
    }

    #[tokio::test]
    async fn test_expired_token_clears_storage_and_returns_to_auth() {
        let store = MemoryTokenStore::with_token("expired");
        let mut shell = Shell::restore(store.clone());
        shell.navigate(Page::Budget);
        let transport = ScriptedTransport::default()
            .reply(401, json!({"detail": "Invalid authentication credentials"}));

        resolve(&mut shell, &transport).await;

        assert_eq!(shell.phase(), &SessionPhase::Anonymous);
        assert_eq!(store.load(), None);
        assert_eq!(shell.page(), Page::Dashboard);
        assert_eq!(transport.requests()[0].path, "/me");
    }

    #[tokio::test]
    async fn test_network_failure_on_profile_also_logs_out() {
        let store = MemoryTokenStore::with_token("abc");
        let mut shell = Shell::restore(store.clone());
        let transport = ScriptedTransport::default().fail("offline");

        resolve(&mut shell, &transport).await;

        assert_eq!(shell.phase(), &SessionPhase::Anonymous);
        assert_eq!(store.load(), None);
        // No retry.
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_profile_resolves_session() {
        let store = MemoryTokenStore::default();
        let mut shell = Shell::restore(store.clone());
        shell.login("fresh".into());
        let transport = ScriptedTransport::default().reply(200, profile_json("u1"));

        resolve(&mut shell, &transport).await;

        assert_matches!(shell.phase(), SessionPhase::Authenticated(user) if user.full_name == "Ana");
        assert_eq!(store.load().as_deref(), Some("fresh"));
        assert_eq!(transport.requests()[0].bearer.as_deref(), Some("fresh"));
    }

    #[tokio::test]
    async fn test_profile_for_old_token_after_relogin_is_ignored() {
        let store = MemoryTokenStore::with_token("old");
        let mut shell = Shell::restore(store.clone());
        let transport = ScriptedTransport::default()
            .reply(200, profile_json("u-old"))
            .reply(200, profile_json("u-new"));

        // The startup fetch is still in flight when the user signs in again.
        let stale = ApiClient::authorized(&transport, "old").me().await;
        shell.login("new".into());
        shell.apply_profile("old", stale);

        assert_eq!(shell.phase(), &SessionPhase::Resolving);
        assert!(shell.session().user().is_none());

        resolve(&mut shell, &transport).await;

        assert_matches!(shell.phase(), SessionPhase::Authenticated(user) if user.id == "u-new");
        assert_eq!(store.load().as_deref(), Some("new"));
        assert_eq!(transport.requests()[1].bearer.as_deref(), Some("new"));
    }

    // ========================
    // Controllers
    // ========================

    #[tokio::test]
    async fn test_submit_creates_then_refetches() {
        let transport = ScriptedTransport::default()
            .reply(200, budget_json("b9", 5000.0, 0.0))
            .reply(200, json!([budget_json("b1", 500.0, 200.0), budget_json("b9", 5000.0, 0.0)]));
        let client = ApiClient::authorized(&transport, "tok");

        let items = controller::submit::<BudgetItem, _>(&client, &valid_budget_form())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(items.len(), 2);
        let sent = transport.requests();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(sent[0].body.as_ref().unwrap()["vendor"], serde_json::Value::Null);
        assert_eq!(sent[1].method, Method::Get);
    }

    #[tokio::test]
    async fn test_invalid_submit_sends_nothing() {
        let transport = ScriptedTransport::default();
        let client = ApiClient::authorized(&transport, "tok");
        let mut form = FormState::<BudgetDraft>::default();
        form.open_create();

        let result = controller::submit::<BudgetItem, _>(&client, &form).await;

        assert_eq!(result.unwrap_err(), SubmitError::Invalid(DomainError::MissingField("category")));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_failed_mutation_does_not_refetch() {
        let transport = ScriptedTransport::default()
            .reply(500, json!({"detail": "database unavailable"}));
        let client = ApiClient::authorized(&transport, "tok");
        let form = valid_budget_form();

        let result = controller::submit::<BudgetItem, _>(&client, &form).await;

        assert_matches!(result, Err(SubmitError::Api(ApiError::Status { status: 500, .. })));
        assert_eq!(transport.requests().len(), 1);
        // The caller still holds the user's values.
        assert_eq!(form.draft.planned_amount, "5000");
        assert!(form.is_visible());
    }

    #[tokio::test]
    async fn test_landed_mutation_with_failed_refetch_is_ok_none() {
        let transport = ScriptedTransport::default()
            .reply(200, budget_json("b9", 5000.0, 0.0))
            .fail("offline");
        let client = ApiClient::authorized(&transport, "tok");

        let result = controller::submit::<BudgetItem, _>(&client, &valid_budget_form()).await;

        assert_eq!(result, Ok(None));
    }

    #[tokio::test]
    async fn test_edit_submits_put_to_selected_record() {
        let transport = ScriptedTransport::default()
            .reply(200, json!({"message": "Budget updated"}))
            .reply(200, json!([budget_json("b1", 800.0, 300.0)]));
        let client = ApiClient::authorized(&transport, "tok");
        let record: BudgetItem = serde_json::from_value(budget_json("b1", 500.0, 300.0)).unwrap();
        let mut form = FormState::<BudgetDraft>::default();
        form.open_edit(&record);
        form.edit(|d| d.planned_amount = "800".into());

        let items = controller::submit::<BudgetItem, _>(&client, &form).await.unwrap().unwrap();

        assert_eq!(items[0].planned_amount, 800.0);
        let sent = transport.requests();
        assert_eq!(sent[0].path, "/budget/b1");
        assert_eq!(sent[0].body.as_ref().unwrap()["spent_amount"], 300.0);
    }

    #[tokio::test]
    async fn test_toggle_complete_flips_only_completed() {
        let transport = ScriptedTransport::default()
            .reply(200, json!({"message": "Task updated"}))
            .reply(200, json!([task_json("t1", true)]));
        let client = ApiClient::authorized(&transport, "tok");
        let task: Task = serde_json::from_value(task_json("t1", false)).unwrap();

        let tasks = controller::toggle_complete(&client, &task).await.unwrap();

        assert!(tasks[0].completed);
        let sent = transport.requests();
        assert_eq!(sent[0].path, "/tasks/t1");
        let mut expected = serde_json::to_value(task.to_payload()).unwrap();
        expected["completed"] = json!(true);
        assert_eq!(sent[0].body.as_ref(), Some(&expected));
        assert_eq!(expected["due_date"], "2025-04-01T09:30:00");
        assert_eq!(expected["notes"], "Cream paper");
    }

    #[tokio::test]
    async fn test_failed_toggle_sends_once_and_skips_refetch() {
        let transport = ScriptedTransport::default().reply(500, json!({"detail": "Internal Server Error"}));
        let client = ApiClient::authorized(&transport, "tok");
        let task: Task = serde_json::from_value(task_json("t1", false)).unwrap();

        let result = controller::toggle_complete(&client, &task).await;

        assert_matches!(result, Err(ApiError::Status { status: 500, .. }));
        assert_eq!(transport.requests().len(), 1);
        assert!(!task.completed);
    }

    #[tokio::test]
    async fn test_load_reports_errors() {
        let transport = ScriptedTransport::default().fail("offline");
        let client = ApiClient::authorized(&transport, "tok");

        let result = controller::load::<Guest, _>(&client).await;

        assert_matches!(result, Err(ApiError::Transport(_)));
    }
}
