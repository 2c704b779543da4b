use bookshelf::landing::FEATURES;
use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <Title text="About · Bookshelf"/>
        <div class="container">
            <h2>"About"</h2>
            <p>"Bookshelf keeps track of the books you own and the ones you are reading."</p>
            <ul>
                {FEATURES.iter().map(|feature| view! { <li>{*feature}</li> }).collect_view()}
            </ul>
            <a href="/">"Back to home"</a>
        </div>
    }
}
