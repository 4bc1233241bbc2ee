use leptos::*;

use crate::api;
use crate::notify;
use crate::status;
use crate::utils::format_quota;

#[component]
pub fn TopUp() -> impl IntoView {
    let toaster = notify::use_toaster();

    let (redemption_code, set_redemption_code) = create_signal(String::new());
    let (user_quota, set_user_quota) = create_signal(0i64);
    let (submitting, set_submitting) = create_signal(false);

    // Evaluated once at load, like the rest of the status blob.
    let top_up_link = store_value(status::top_up_link());

    create_effect(move |_| {
        spawn_local(async move {
            match api::get_self().await {
                Ok(resp) if resp.success => {
                    if let Some(user) = resp.data {
                        set_user_quota.set(user.quota);
                    }
                }
                Ok(resp) => toaster.error(resp.message),
                Err(_) => toaster.error("Request failed"),
            }
        });
    });

    let redeem = move |_| {
        let code = redemption_code.get_untracked().trim().to_string();
        if code.is_empty() {
            toaster.info("Enter a redemption code first");
            return;
        }
        if submitting.get_untracked() {
            return;
        }
        set_submitting.set(true);

        spawn_local(async move {
            match api::redeem_code(&code).await {
                Ok(resp) if resp.success => {
                    let granted = resp.data.unwrap_or(0);
                    toaster.success(format!("Redeemed {}", format_quota(granted)));
                    set_user_quota.update(|quota| *quota += granted);
                    set_redemption_code.set(String::new());
                }
                Ok(resp) => toaster.error(resp.message),
                Err(_) => toaster.error("Request failed"),
            }
            set_submitting.set(false);
        });
    };

    let open_top_up_link = move |_| match top_up_link.get_value() {
        Some(link) => {
            if let Some(window) = web_sys::window() {
                let _ = window.open_with_url_and_target(&link, "_blank");
            }
        }
        None => toaster.error("The administrator has not configured a top-up link"),
    };

    view! {
        <div class="topup-page">
            <h1>"My Wallet"</h1>
            <div class="wallet-card">
                <h2 class="wallet-balance">"Balance " {move || format_quota(user_quota.get())}</h2>

                <div class="wallet-redeem">
                    <h3>"Redeem a code"</h3>
                    <div class="form-group">
                        <label>"Redemption code"</label>
                        <input
                            type="text"
                            placeholder="Redemption code"
                            on:input=move |ev| set_redemption_code.set(event_target_value(&ev))
                            prop:value=redemption_code
                        />
                    </div>
                    {move || {
                        top_up_link
                            .get_value()
                            .is_some()
                            .then(|| {
                                view! {
                                    <button class="btn" on:click=open_top_up_link>
                                        "Get a code"
                                    </button>
                                }
                            })
                    }}
                    <button
                        class="btn btn-primary"
                        disabled=move || submitting.get()
                        on:click=redeem
                    >
                        {move || if submitting.get() { "Redeeming..." } else { "Redeem" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
