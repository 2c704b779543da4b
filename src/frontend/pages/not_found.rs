use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <Title text="Not found · Bookshelf"/>
        <div class="container">
            <h2>"Page not found"</h2>
            <p>"Nothing lives here yet."</p>
            <a href="/">"Back to home"</a>
        </div>
    }
}
