//! Home Page

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <header class="hero">
                <h1>"ML Prediction Interface"</h1>
                <p class="tagline">
                    "Enter your data and get instant predictions from the model API"
                </p>
                <div class="cta">
                    <a href="/predict" class="btn btn-primary">"Get Prediction"</a>
                </div>
            </header>

            <section class="features">
                <div class="feature">
                    <h3>"⚡ Real-time"</h3>
                    <p>"Submissions go straight to the prediction endpoint and results render as they arrive."</p>
                </div>
                <div class="feature">
                    <h3>"🧮 Two input modes"</h3>
                    <p>"Describe a job posting in plain fields, or post a raw numeric feature vector."</p>
                </div>
                <div class="feature">
                    <h3>"🔌 Configurable"</h3>
                    <p>"Point the feature-vector mode at any http(s) prediction endpoint."</p>
                </div>
            </section>

            <footer class="home-footer">
                <p>"Connected to the prediction API • Real-time predictions • Secure data handling"</p>
            </footer>
        </div>
    }
}
