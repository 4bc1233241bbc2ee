use leptos::*;
use leptos_router::use_navigate;

use crate::api;
use crate::notify;
use crate::session;
use crate::status;

#[component]
pub fn Login() -> impl IntoView {
    let session = session::use_session();
    let toaster = notify::use_toaster();
    let navigate = use_navigate();

    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        set_submitting.set(true);

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(&username.get_untracked(), &password.get_untracked()).await {
                Ok(resp) if resp.success => match resp.data {
                    Some(user) => {
                        session.log_in(user);
                        toaster.success("Logged in");
                        navigate("/", Default::default());
                    }
                    None => toaster.error("Malformed login response"),
                },
                Ok(resp) => toaster.error(resp.message),
                Err(_) => toaster.error("Request failed"),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>{status::system_name_or_default()}</h1>

                <form on:submit=submit>
                    <div class="form-group">
                        <label>"Username"</label>
                        <input
                            type="text"
                            required
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            prop:value=username
                        />
                    </div>

                    <div class="form-group">
                        <label>"Password"</label>
                        <input
                            type="password"
                            required
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            prop:value=password
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn btn-primary btn-block"
                        disabled=move || submitting.get()
                    >
                        {move || if submitting.get() { "Logging in..." } else { "Log in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
