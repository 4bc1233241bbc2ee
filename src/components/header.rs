//! Auth-aware navigation header.
//!
//! Chooses between the compact (collapsible panel) and full (inline menu)
//! presentation per render pass, filters entries through the visibility
//! rules, polls for the late-arriving system name and owns the logout flow.

use leptos::*;
use leptos_router::{use_location, use_navigate, A};

use crate::api::{self, ApiError, ApiResponse};
use crate::nav;
use crate::notify;
use crate::poll::{self, CancelToken};
use crate::session::{self, Session};
use crate::status;
use crate::viewport::{self, ViewportClass};

/// What the server's reply means for local state.
#[derive(Clone, Debug, PartialEq, Eq)]
enum LogoutOutcome {
    Completed,
    Rejected(String),
    TransportFailed,
}

fn interpret_logout(result: Result<ApiResponse<()>, ApiError>) -> LogoutOutcome {
    match result {
        Ok(resp) if resp.success => LogoutOutcome::Completed,
        Ok(resp) => LogoutOutcome::Rejected(resp.message),
        Err(_) => LogoutOutcome::TransportFailed,
    }
}

/// Session state is touched only after the server confirmed the logout.
/// Returns whether the caller should redirect to the login route.
fn finish_logout(session: Session, outcome: &LogoutOutcome) -> bool {
    match outcome {
        LogoutOutcome::Completed => {
            session.clear();
            true
        }
        LogoutOutcome::Rejected(_) | LogoutOutcome::TransportFailed => false,
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let session = session::use_session();
    let toaster = notify::use_toaster();
    let location = use_location();
    let navigate = use_navigate();

    // Registry is fixed for the lifetime of the page; the chat flag is
    // evaluated exactly once, at load.
    let entries = store_value(nav::nav_entries(status::chat_enabled()));

    let (sidebar_open, set_sidebar_open) = create_signal(false);
    let (system_name, set_system_name) = create_signal(status::system_name_or_default());
    let (logging_out, set_logging_out) = create_signal(false);

    // The status blob is written by a sibling init flow shortly after load,
    // so the configured name may not be there on first render. Re-check a
    // few times, then settle for the fallback.
    let cancel = CancelToken::default();
    {
        let cancel = cancel.clone();
        spawn_local(async move {
            let found = poll::poll_value(
                poll::SYSTEM_NAME_ATTEMPTS,
                status::system_name,
                || gloo_timers::future::TimeoutFuture::new(poll::SYSTEM_NAME_INTERVAL_MS),
                cancel,
            )
            .await;
            if let Some(name) = found {
                set_system_name.set(name);
            }
        });
    }
    on_cleanup(move || cancel.cancel());

    let logout = {
        let navigate = navigate.clone();
        move || {
            if logging_out.get_untracked() {
                return;
            }
            set_logging_out.set(true);
            // Collapse the panel before any network round trip.
            set_sidebar_open.set(false);

            let navigate = navigate.clone();
            spawn_local(async move {
                let outcome = interpret_logout(api::logout().await);
                match &outcome {
                    LogoutOutcome::Completed => toaster.success("Logged out"),
                    LogoutOutcome::Rejected(message) => toaster.error(message.clone()),
                    LogoutOutcome::TransportFailed => toaster.error("Request failed"),
                }
                if finish_logout(session, &outcome) {
                    navigate("/login", Default::default());
                }
                set_logging_out.set(false);
            });
        }
    };

    view! {
        <header class="app-header">
            {move || {
                let path = location.pathname.get();
                let user = session.user();
                let visible: Vec<nav::NavEntry> = entries
                    .get_value()
                    .into_iter()
                    .filter(|entry| nav::should_show(entry, user.as_ref()))
                    .collect();

                match viewport::current() {
                    ViewportClass::Compact => {
                        let rows = visible
                            .iter()
                            .map(|entry| {
                                let entry = *entry;
                                let row_class = if nav::is_active(&path, &entry) {
                                    "sidebar-item active"
                                } else {
                                    "sidebar-item"
                                };
                                let navigate = navigate.clone();
                                view! {
                                    <button
                                        class=row_class
                                        on:click=move |_| {
                                            // Navigate and collapse as one action.
                                            navigate(entry.route, Default::default());
                                            set_sidebar_open.set(false);
                                        }
                                    >
                                        <i class=format!("icon icon-{}", entry.icon)></i>
                                        {entry.label}
                                    </button>
                                }
                            })
                            .collect_view();

                        let auth_controls = if user.is_some() {
                            let logout = logout.clone();
                            view! {
                                <button
                                    class="btn"
                                    disabled=move || logging_out.get()
                                    on:click=move |_| logout()
                                >
                                    "Log out"
                                </button>
                            }
                            .into_view()
                        } else {
                            let go_login = {
                                let navigate = navigate.clone();
                                move |_| {
                                    set_sidebar_open.set(false);
                                    navigate("/login", Default::default());
                                }
                            };
                            let go_register = {
                                let navigate = navigate.clone();
                                move |_| {
                                    set_sidebar_open.set(false);
                                    navigate("/register", Default::default());
                                }
                            };
                            view! {
                                <button class="btn" on:click=go_login>"Log in"</button>
                                <button class="btn" on:click=go_register>"Register"</button>
                            }
                            .into_view()
                        };

                        view! {
                            <nav class="navbar navbar-compact">
                                <A href="/" class="navbar-brand">
                                    <b>{move || system_name.get()}</b>
                                </A>
                                <button
                                    class="sidebar-toggle"
                                    on:click=move |_| set_sidebar_open.update(|open| *open = !*open)
                                >
                                    {move || if sidebar_open.get() { "✕" } else { "☰" }}
                                </button>
                            </nav>
                            <Show when=move || sidebar_open.get()>
                                <div class="sidebar-panel">
                                    {rows.clone()}
                                    <div class="sidebar-auth">{auth_controls.clone()}</div>
                                </div>
                            </Show>
                        }
                        .into_view()
                    }
                    ViewportClass::Full => {
                        let items = visible
                            .iter()
                            .map(|entry| {
                                let entry = *entry;
                                let item_class = if nav::is_active(&path, &entry) {
                                    "navbar-item active"
                                } else {
                                    "navbar-item"
                                };
                                view! {
                                    <A href=entry.route class=item_class>
                                        <i class=format!("icon icon-{}", entry.icon)></i>
                                        {entry.label}
                                    </A>
                                }
                            })
                            .collect_view();

                        let account = match user {
                            Some(user) => {
                                let logout = logout.clone();
                                view! {
                                    <div class="navbar-dropdown">
                                        <span class="navbar-item dropdown-trigger">
                                            {user.username.clone()} " ▾"
                                        </span>
                                        <div class="dropdown-content">
                                            <button
                                                class="dropdown-item"
                                                disabled=move || logging_out.get()
                                                on:click=move |_| logout()
                                            >
                                                "Log out"
                                            </button>
                                        </div>
                                    </div>
                                }
                                .into_view()
                            }
                            None => view! {
                                <A href="/login" class="navbar-item">"Log in"</A>
                            }
                            .into_view(),
                        };

                        view! {
                            <nav class="navbar">
                                <A href="/" class="navbar-brand">
                                    <b>{move || system_name.get()}</b>
                                </A>
                                <div class="navbar-menu">{items}</div>
                                <div class="navbar-end">{account}</div>
                            </nav>
                        }
                        .into_view()
                    }
                }
            }}
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::UserInfo;

    fn envelope(success: bool, message: &str) -> Result<ApiResponse<()>, ApiError> {
        Ok(ApiResponse {
            success,
            message: message.to_string(),
            data: None,
        })
    }

    fn test_user() -> UserInfo {
        UserInfo {
            id: 1,
            username: "alice".to_string(),
            display_name: String::new(),
            role: 1,
            quota: 0,
            group: String::new(),
        }
    }

    #[test]
    fn test_interpret_logout() {
        assert_eq!(interpret_logout(envelope(true, "")), LogoutOutcome::Completed);
        assert_eq!(
            interpret_logout(envelope(false, "session expired")),
            LogoutOutcome::Rejected("session expired".to_string())
        );
        assert_eq!(
            interpret_logout(Err(ApiError { message: "network down".to_string() })),
            LogoutOutcome::TransportFailed
        );
    }

    #[test]
    fn test_failed_logout_leaves_session_untouched() {
        let runtime = create_runtime();
        let session = Session::restore();
        session.log_in(test_user());

        assert!(!finish_logout(session, &LogoutOutcome::Rejected("nope".to_string())));
        assert!(session.is_authenticated());

        assert!(!finish_logout(session, &LogoutOutcome::TransportFailed));
        assert!(session.is_authenticated());

        runtime.dispose();
    }

    #[test]
    fn test_successful_logout_clears_session_and_redirects() {
        let runtime = create_runtime();
        let session = Session::restore();
        session.log_in(test_user());

        assert!(finish_logout(session, &LogoutOutcome::Completed));
        assert!(!session.is_authenticated());
        assert_eq!(session.user(), None);

        runtime.dispose();
    }
}
