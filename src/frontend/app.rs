use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    components::{Route, Router, Routes},
    hooks::use_location,
    path,
};
use thaw::*;

use crate::pages::{About, Home, NotFound};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let theme = RwSignal::new(Theme::light());

    view! {
        <ConfigProvider theme>
            <Title text="Bookshelf"/>
            <Router>
                <NavAndContent/>
            </Router>
        </ConfigProvider>
    }
}

#[component]
fn NavAndContent() -> impl IntoView {
    let location = use_location();
    let is_active = move |path: &str| location.pathname.get() == path;

    view! {
        <main class="app">
            <nav class="nav">
                <span class="brand">
                    "bookshelf"
                    <span class="version">{env!("CARGO_PKG_VERSION")}</span>
                </span>
                <div class="nav-links">
                    <a href="/" class:active=move || is_active("/")>"Home"</a>
                    <a href="/about" class:active=move || is_active("/about")>"About"</a>
                </div>
            </nav>

            <div class="content">
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=Home/>
                    <Route path=path!("/about") view=About/>
                </Routes>
            </div>

            <footer class="footer">
                "© " {
                    let date = web_sys::js_sys::Date::new_0();
                    date.get_full_year()
                } " bookshelf v" {env!("CARGO_PKG_VERSION")}
            </footer>
        </main>
    }
}
