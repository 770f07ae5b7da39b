use leptos::prelude::*;

use crate::routes::HOME_PATH;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h2>"Page not found"</h2>
            <p>"The page you are looking for does not exist."</p>
            <a class="btn btn--primary" href=HOME_PATH>
                "Back to Dashboard"
            </a>
        </div>
    }
}
