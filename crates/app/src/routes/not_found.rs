use dioxus::prelude::*;
use shared_types::AppError;

use crate::components::BrandLogo;
use crate::routes::Route;

fn unmatched_path(route: &[String]) -> String {
    format!("/{}", route.join("/"))
}

fn unmatched_route_error(path: &str) -> AppError {
    AppError::not_found(format!("no route for {path}"))
}

/// Fallback for any path outside the dashboard.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = unmatched_path(&route);

    // Once per mount; re-renders stay quiet.
    let logged = path.clone();
    use_hook(move || {
        let err = unmatched_route_error(&logged);
        tracing::warn!(error = %err, "no route matched");
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                BrandLogo { size: 48 }
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Nothing mapped here" }
                p { class: "not-found-message",
                    code { "{path}" }
                    " is not part of Identify.earth."
                }
                Link { to: Route::Dashboard {},
                    class: "not-found-link",
                    "Back to Dashboard"
                }
            }
        }
    }
}
