//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects. Route changes go through
//! [`navigate`], which applies the navigation guard.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use poldeck_core::session;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::login::{self, LoginOutcome};
use crate::features::policies::{self, ListAction, PolicyDetailState};
use crate::state::{AppState, Route};

/// The main reducer function.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            if app.login.is_submitting() {
                app.login.spinner_frame = app.login.spinner_frame.wrapping_add(1);
            }
            vec![]
        }
        UiEvent::Terminal(Event::Key(key)) if key.kind == KeyEventKind::Press => {
            handle_key(app, key)
        }
        UiEvent::Terminal(_) => vec![],
        UiEvent::LoginCompleted { result } => {
            match login::handle_login_result(&mut app.login, result) {
                LoginOutcome::Authenticated { access_token } => {
                    // The single session mutation point: persist, then
                    // navigate to the guarded root.
                    app.session.set_token(access_token);
                    let mut effects = vec![UiEffect::PersistSession {
                        session: app.session.clone(),
                    }];
                    effects.extend(navigate(app, Route::PolicyList));
                    effects
                }
                LoginOutcome::Failed | LoginOutcome::Ignored => vec![],
            }
        }
        UiEvent::PoliciesLoaded { seq, result } => {
            policies::apply_policies_loaded(&mut app.policies, seq, result);
            vec![]
        }
        UiEvent::PolicyLoaded { seq, result } => {
            policies::apply_policy_loaded(&mut app.detail, seq, result);
            vec![]
        }
    }
}

/// Navigates to a route, applying the guard.
///
/// Denied navigation redirects to the login screen. Entering a guarded
/// view triggers that view's fetch — the views do no work until entered.
pub fn navigate(app: &mut AppState, route: Route) -> Vec<UiEffect> {
    // The departing view stops waiting: any fetch still in flight for it
    // resolves against a cleared sequence and is dropped.
    app.policies.pending_seq = None;
    app.detail.pending_seq = None;

    if route.requires_auth() && !session::can_enter(&app.session) {
        tracing::debug!(?route, "navigation denied, redirecting to login");
        app.route = Route::Login;
        return vec![];
    }

    app.route = route.clone();
    match route {
        Route::Login => vec![],
        Route::PolicyList => {
            let seq = app.next_fetch_seq();
            app.policies.pending_seq = Some(seq);
            vec![UiEffect::FetchPolicies { seq }]
        }
        Route::PolicyDetail { id } => {
            app.detail = PolicyDetailState {
                id,
                policy: None,
                pending_seq: None,
            };
            match id {
                Some(id) => {
                    let seq = app.next_fetch_seq();
                    app.detail.pending_seq = Some(seq);
                    vec![UiEffect::FetchPolicy { seq, id }]
                }
                // Absent route parameter: render nothing, fetch nothing.
                None => vec![],
            }
        }
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    // Ctrl+C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![UiEffect::Quit];
    }

    match app.route {
        Route::Login => match key.code {
            KeyCode::Esc => vec![UiEffect::Quit],
            _ => match login::handle_key(&mut app.login, key) {
                Some(credentials) => vec![UiEffect::SubmitLogin { credentials }],
                None => vec![],
            },
        },
        Route::PolicyList => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => vec![UiEffect::Quit],
            _ => match policies::handle_list_key(&mut app.policies, key) {
                ListAction::Open(id) => navigate(app, Route::PolicyDetail { id: Some(id) }),
                ListAction::None => vec![],
            },
        },
        Route::PolicyDetail { .. } => match key.code {
            KeyCode::Char('q') => vec![UiEffect::Quit],
            KeyCode::Esc | KeyCode::Backspace => navigate(app, Route::PolicyList),
            _ => vec![],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use poldeck_core::api::{Policy, TokenResponse};
    use poldeck_core::config::Config;
    use poldeck_core::session::Session;

    fn app() -> AppState {
        AppState::new(Config::default(), Session::default())
    }

    fn authed_app() -> AppState {
        let mut session = Session::default();
        session.set_token("tok".to_string());
        AppState::new(Config::default(), session)
    }

    fn press(code: KeyCode) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }))
    }

    fn token_response(access: &str) -> TokenResponse {
        TokenResponse {
            access_token: access.to_string(),
            refresh_token: "ref".to_string(),
            token_type: "Bearer".to_string(),
            expires_in: 3600,
        }
    }

    fn policy(id: i64, number: &str, status: &str) -> Policy {
        Policy {
            id,
            policy_number: number.to_string(),
            status: status.to_string(),
        }
    }

    fn type_text(app: &mut AppState, text: &str) {
        for c in text.chars() {
            assert!(update(app, press(KeyCode::Char(c))).is_empty());
        }
    }

    #[test]
    fn guard_blocks_protected_routes_without_token() {
        let mut app = app();

        let effects = navigate(&mut app, Route::PolicyList);
        assert!(effects.is_empty());
        assert_eq!(app.route, Route::Login);

        let effects = navigate(&mut app, Route::PolicyDetail { id: Some(1) });
        assert!(effects.is_empty());
        assert_eq!(app.route, Route::Login);
    }

    #[test]
    fn guard_admits_protected_routes_with_token() {
        let mut app = authed_app();

        let effects = navigate(&mut app, Route::PolicyList);
        assert_eq!(app.route, Route::PolicyList);
        assert!(matches!(effects[..], [UiEffect::FetchPolicies { .. }]));
    }

    #[test]
    fn submit_issues_exactly_one_login_call_with_exact_values() {
        let mut app = app();
        type_text(&mut app, "ana");
        update(&mut app, press(KeyCode::Tab));
        type_text(&mut app, "s3cret");

        let effects = update(&mut app, press(KeyCode::Enter));
        match &effects[..] {
            [UiEffect::SubmitLogin { credentials }] => {
                assert_eq!(credentials.username, "ana");
                assert_eq!(credentials.password, "s3cret");
            }
            other => panic!("unexpected effects: {other:?}"),
        }
    }

    #[test]
    fn empty_field_submits_nothing() {
        let mut app = app();
        type_text(&mut app, "ana");

        let effects = update(&mut app, press(KeyCode::Enter));
        assert!(effects.is_empty());
        assert!(!app.login.is_submitting());
    }

    #[test]
    fn successful_login_persists_token_and_navigates_once() {
        let mut app = app();
        type_text(&mut app, "ana");
        update(&mut app, press(KeyCode::Tab));
        type_text(&mut app, "pw");
        update(&mut app, press(KeyCode::Enter));

        let effects = update(
            &mut app,
            UiEvent::LoginCompleted {
                result: Ok(token_response("tok-abc")),
            },
        );

        assert_eq!(app.session.token(), Some("tok-abc"));
        assert_eq!(app.route, Route::PolicyList);
        match &effects[..] {
            [UiEffect::PersistSession { session }, UiEffect::FetchPolicies { .. }] => {
                assert_eq!(session.token(), Some("tok-abc"));
            }
            other => panic!("unexpected effects: {other:?}"),
        }
    }

    #[test]
    fn failed_login_leaves_session_unchanged_and_sets_fixed_error() {
        let mut app = app();
        type_text(&mut app, "ana");
        update(&mut app, press(KeyCode::Tab));
        type_text(&mut app, "wrong");
        update(&mut app, press(KeyCode::Enter));

        let effects = update(
            &mut app,
            UiEvent::LoginCompleted {
                result: Err("HTTP 401".to_string()),
            },
        );

        assert!(effects.is_empty());
        assert!(app.session.token().is_none());
        assert_eq!(app.route, Route::Login);
        assert_eq!(app.login.error, Some(login::INVALID_CREDENTIALS));
    }

    #[test]
    fn list_loads_in_server_order_and_opens_selected_detail() {
        let mut app = authed_app();
        let effects = navigate(&mut app, Route::PolicyList);
        let seq = match &effects[..] {
            [UiEffect::FetchPolicies { seq }] => *seq,
            other => panic!("unexpected effects: {other:?}"),
        };

        update(
            &mut app,
            UiEvent::PoliciesLoaded {
                seq,
                result: Ok(vec![
                    policy(1, "P-1", "ACTIVE"),
                    policy(2, "P-2", "EXPIRED"),
                ]),
            },
        );
        let ids: Vec<i64> = app.policies.policies.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);

        update(&mut app, press(KeyCode::Down));
        let effects = update(&mut app, press(KeyCode::Enter));
        assert_eq!(app.route, Route::PolicyDetail { id: Some(2) });
        assert!(matches!(effects[..], [UiEffect::FetchPolicy { id: 2, .. }]));
    }

    #[test]
    fn detail_with_absent_param_fetches_nothing() {
        let mut app = authed_app();

        let effects = navigate(&mut app, Route::detail_from_param(None));
        assert!(effects.is_empty());
        assert_eq!(app.route, Route::PolicyDetail { id: None });
        assert!(app.detail.policy.is_none());
    }

    #[test]
    fn detail_with_string_param_coerces_and_resolves() {
        let mut app = authed_app();

        let effects = navigate(&mut app, Route::detail_from_param(Some("2")));
        let (seq, id) = match &effects[..] {
            [UiEffect::FetchPolicy { seq, id }] => (*seq, *id),
            other => panic!("unexpected effects: {other:?}"),
        };
        assert_eq!(id, 2);

        update(
            &mut app,
            UiEvent::PolicyLoaded {
                seq,
                result: Ok(policy(2, "P-2", "EXPIRED")),
            },
        );
        assert_eq!(app.detail.policy.as_ref().unwrap().policy_number, "P-2");
    }

    #[test]
    fn late_response_after_leaving_view_is_dropped() {
        let mut app = authed_app();
        let effects = navigate(&mut app, Route::PolicyList);
        let first_seq = match &effects[..] {
            [UiEffect::FetchPolicies { seq }] => *seq,
            other => panic!("unexpected effects: {other:?}"),
        };

        // Leave for detail and come back: the list is now waiting on a
        // newer sequence.
        navigate(&mut app, Route::PolicyDetail { id: Some(1) });
        navigate(&mut app, Route::PolicyList);

        update(
            &mut app,
            UiEvent::PoliciesLoaded {
                seq: first_seq,
                result: Ok(vec![policy(9, "P-9", "ACTIVE")]),
            },
        );
        assert!(app.policies.policies.is_empty());
    }

    #[test]
    fn late_response_without_returning_is_dropped() {
        let mut app = authed_app();
        let effects = navigate(&mut app, Route::PolicyDetail { id: Some(1) });
        let seq = match &effects[..] {
            [UiEffect::FetchPolicy { seq, .. }] => *seq,
            other => panic!("unexpected effects: {other:?}"),
        };

        // Leave for the list while the fetch is still in flight.
        navigate(&mut app, Route::PolicyList);

        update(
            &mut app,
            UiEvent::PolicyLoaded {
                seq,
                result: Ok(policy(1, "P-1", "ACTIVE")),
            },
        );
        assert!(app.detail.policy.is_none());
        assert_eq!(app.detail.pending_seq, None);
    }

    #[test]
    fn esc_from_detail_returns_to_list() {
        let mut app = authed_app();
        navigate(&mut app, Route::PolicyDetail { id: Some(1) });

        let effects = update(&mut app, press(KeyCode::Esc));
        assert_eq!(app.route, Route::PolicyList);
        assert!(matches!(effects[..], [UiEffect::FetchPolicies { .. }]));
    }

    #[test]
    fn quit_keys_emit_quit() {
        let mut app = authed_app();
        navigate(&mut app, Route::PolicyList);
        assert!(matches!(
            update(&mut app, press(KeyCode::Char('q')))[..],
            [UiEffect::Quit]
        ));

        app.route = Route::Login;
        assert!(matches!(
            update(&mut app, press(KeyCode::Esc))[..],
            [UiEffect::Quit]
        ));
    }
}
