use leptos::*;

use crate::api;
use crate::notify;
use crate::status;

const LOAD_FAILED_NOTE: &str = "Failed to load the about content.";

#[component]
pub fn About() -> impl IntoView {
    let toaster = notify::use_toaster();

    // Show the cached copy immediately; the fresh one replaces it when the
    // fetch resolves.
    let (about, set_about) = create_signal(status::cached_about());
    let (loaded, set_loaded) = create_signal(false);

    create_effect(move |_| {
        spawn_local(async move {
            match api::get_about().await {
                Ok(resp) if resp.success => {
                    let data = resp.data.unwrap_or_default();
                    let content = if data.is_empty() || is_embed_url(&data) {
                        data
                    } else {
                        render_markdown(&data)
                    };
                    status::cache_about(&content);
                    set_about.set(content);
                }
                Ok(resp) => {
                    toaster.error(resp.message);
                    set_about.set(LOAD_FAILED_NOTE.to_string());
                }
                Err(_) => {
                    toaster.error("Request failed");
                    set_about.set(LOAD_FAILED_NOTE.to_string());
                }
            }
            set_loaded.set(true);
        });
    });

    view! {
        {move || {
            let content = about.get();
            if content.is_empty() {
                if loaded.get() {
                    view! {
                        <div class="about-page">
                            <h1>"About"</h1>
                            <p>"No about content yet. Operators can set it on the settings page; HTML and Markdown are supported."</p>
                        </div>
                    }
                    .into_view()
                } else {
                    view! { <p class="loading">"Loading..."</p> }.into_view()
                }
            } else if is_embed_url(&content) {
                view! { <iframe class="about-frame" src=content></iframe> }.into_view()
            } else {
                view! { <div class="about-content" inner_html=content></div> }.into_view()
            }
        }}
    }
}

/// Operators may point the about page at a full external page instead of
/// authoring content inline.
fn is_embed_url(content: &str) -> bool {
    content.starts_with("https://")
}

fn render_markdown(source: &str) -> String {
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, pulldown_cmark::Parser::new(source));
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embed_url_classification() {
        assert!(is_embed_url("https://docs.example.com/models"));
        assert!(!is_embed_url("# Models\n\nwelcome"));
        assert!(!is_embed_url("http://insecure.example.com"));
        assert!(!is_embed_url(""));
    }

    #[test]
    fn test_render_markdown() {
        let html = render_markdown("# Models\n\nSee the *pricing* table.");
        assert!(html.contains("<h1>Models</h1>"));
        assert!(html.contains("<em>pricing</em>"));
    }
}
