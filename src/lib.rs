use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::wasm_bindgen;

mod api;
mod components;
mod nav;
mod notify;
mod pages;
mod poll;
mod session;
mod status;
pub mod utils;
mod viewport;

use components::Header;
use notify::ToastHost;
use pages::{About, Home, Login, NotFound, TopUp};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    session::provide_session();
    notify::provide_toaster();

    view! {
        <Stylesheet id="leptos" href="/pkg/relay-console-ui.css"/>
        <Title text="Relay Console"/>
        <Meta name="description" content="Relay gateway billing and management console"/>

        <Router>
            <Header/>

            <main class="container">
                <Routes>
                    <Route path="/" view=Home/>
                    <Route path="/login" view=Login/>
                    <Route path="/about" view=About/>
                    <Route path="/topup" view=TopUp/>
                    <Route path="/*any" view=NotFound/>
                </Routes>
            </main>

            <ToastHost/>
        </Router>
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
