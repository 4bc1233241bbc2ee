use leptos::*;
use leptos_router::A;

use crate::session;
use crate::status;

#[component]
pub fn Home() -> impl IntoView {
    let session = session::use_session();
    let system_name = status::system_name_or_default();

    view! {
        <div class="home-page">
            <h1>{system_name}</h1>
            <p class="tagline">"Unified relay gateway and billing console"</p>
            {move || {
                if session.is_authenticated() {
                    view! {
                        <p>"Head to " <A href="/topup">"your wallet"</A> " or check " <A href="/about">"available models"</A> "."</p>
                    }
                    .into_view()
                } else {
                    view! {
                        <p><A href="/login" class="btn btn-primary">"Log in"</A> " to manage tokens, usage and billing."</p>
                    }
                    .into_view()
                }
            }}
        </div>
    }
}
