use leptos::*;
use leptos_router::A;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"Page not found"</h1>
            <p><A href="/">"Back to the console"</A></p>
        </div>
    }
}
