use crate::domain::a001_item::ui::details::ItemPage;
use crate::layout::Navbar;
use crate::system::pages::home::HomePage;
use crate::system::pages::not_found::NotFound;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Navbar />
            <main class="app-main">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/item/:id") view=ItemPage />
                </Routes>
            </main>
        </Router>
    }
}
