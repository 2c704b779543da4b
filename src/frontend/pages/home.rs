use bookshelf::landing::LandingPage;
use leptos::prelude::*;

use crate::components::LandingRegion;

#[component]
pub fn Home() -> impl IntoView {
    // Fresh colors every time the page is mounted
    let [welcome, get_started, features, learn_more] = LandingPage::render().regions;

    view! {
        <div class="container">
            <div>
                <LandingRegion region=welcome/>
                <LandingRegion region=get_started/>
                <LandingRegion region=features/>
            </div>
            <LandingRegion region=learn_more/>
        </div>
    }
}
