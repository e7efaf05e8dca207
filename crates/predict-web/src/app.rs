//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::components::Navbar;
use crate::pages::{HomePage, PredictPage};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Navbar />
            <main class="app">
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/predict") view=PredictPage />
                </Routes>
            </main>
        </Router>
    }
}
