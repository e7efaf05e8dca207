//! Prediction Page
//!
//! Owns the form field signals, the submission status, and the last
//! result. Exactly one of the three result views (placeholder, loading,
//! result panel) is visible at any time.

use leptos::prelude::*;

use predict_core::{
    DEFAULT_ENDPOINT_URL, EndpointConfig, FeatureFormFields, JobFormFields, RequestShape,
    SubmissionStatus,
};

use crate::api::{self, RecordedPrediction};
use crate::components::{ResultPanel, Toast, ToastBanner};

#[component]
pub fn PredictPage() -> impl IntoView {
    view! {
        <div class="predict">
            <header class="page-header">
                <h1>"Get Your Prediction"</h1>
                <p>"Enter the details below and the model will return its prediction"</p>
            </header>

            <PredictionForm />

            <footer class="page-footer">
                <p>"Powered by an external model API • Real-time predictions"</p>
            </footer>
        </div>
    }
}

/// The form controller: field state, validation, one request per submit,
/// and the three-way result view
#[component]
pub fn PredictionForm() -> impl IntoView {
    // Job-posting fields
    let (company_name, set_company_name) = signal(String::new());
    let (job_role, set_job_role) = signal(String::new());
    let (job_description, set_job_description) = signal(String::new());
    let (salary, set_salary) = signal(String::new());

    // Feature-vector fields, plus the user-editable endpoint for that mode
    let (feature_inputs, set_feature_inputs) = signal(<[String; 4]>::default());
    let (endpoint_url, set_endpoint_url) = signal(DEFAULT_ENDPOINT_URL.to_string());

    let (shape, set_shape) = signal(RequestShape::JobPosting);
    let (status, set_status) = signal(SubmissionStatus::Idle);
    let (result, set_result) = signal(None::<RecordedPrediction>);
    let (toast, set_toast) = signal(None::<Toast>);

    let loading = move || status.get().is_loading();

    let submit = move |_| {
        let shape_now = shape.get();

        // Only the feature-vector mode exposes an editable URL.
        let url = match shape_now {
            RequestShape::JobPosting => DEFAULT_ENDPOINT_URL.to_string(),
            RequestShape::Features => endpoint_url.get(),
        };
        if let Err(err) = EndpointConfig::validate_url(&url) {
            set_toast.set(Some(Toast::error(err.title(), err.user_message())));
            return;
        }

        let validated = match shape_now {
            RequestShape::JobPosting => JobFormFields {
                company_name: company_name.get(),
                job_role: job_role.get(),
                job_description: job_description.get(),
                salary: salary.get(),
            }
            .validate(),
            RequestShape::Features => FeatureFormFields {
                features: feature_inputs.get(),
            }
            .validate(),
        };

        let payload = match validated {
            Ok(payload) => payload,
            Err(err) => {
                set_toast.set(Some(Toast::error(err.title(), err.user_message())));
                return;
            }
        };

        // begin() refuses while a request is already in flight.
        let mut started = false;
        set_status.update(|status| started = status.begin());
        if !started {
            return;
        }
        set_result.set(None);
        set_toast.set(None);

        let config = EndpointConfig {
            url,
            shape: shape_now,
        };
        leptos::task::spawn_local(async move {
            match api::submit(config, payload).await {
                Ok(outcome) => {
                    set_result.set(Some(outcome));
                    set_status.update(SubmissionStatus::succeed);
                    set_toast.set(Some(Toast::success(
                        "Prediction Successful",
                        "The model has processed your input.",
                    )));
                }
                Err(message) => {
                    set_status.update(SubmissionStatus::fail);
                    set_toast.set(Some(Toast::error("Prediction Failed", message)));
                }
            }
        });
    };

    view! {
        <div class="form-grid">
            <section class="card">
                <h2>"Input Data"</h2>
                <p class="card-subtitle">"Enter values for prediction"</p>

                <div class="mode-toggle">
                    <button
                        class=move || toggle_class(shape.get() == RequestShape::JobPosting)
                        on:click=move |_| set_shape.set(RequestShape::JobPosting)
                        disabled=loading
                    >
                        "Job posting"
                    </button>
                    <button
                        class=move || toggle_class(shape.get() == RequestShape::Features)
                        on:click=move |_| set_shape.set(RequestShape::Features)
                        disabled=loading
                    >
                        "Feature vector"
                    </button>
                </div>

                <Show
                    when=move || shape.get() == RequestShape::JobPosting
                    fallback=move || view! {
                        <div class="field">
                            <label>"Endpoint URL"</label>
                            <input
                                type="text"
                                placeholder=DEFAULT_ENDPOINT_URL
                                prop:value=move || endpoint_url.get()
                                on:input=move |ev| set_endpoint_url.set(event_target_value(&ev))
                                disabled=loading
                            />
                        </div>
                        {(0..4)
                            .map(|i| view! {
                                <div class="field">
                                    <label>{format!("Feature {}", i + 1)}</label>
                                    <input
                                        type="text"
                                        placeholder="e.g., 0.42"
                                        prop:value=move || feature_inputs.get()[i].clone()
                                        on:input=move |ev| {
                                            set_feature_inputs
                                                .update(|features| features[i] = event_target_value(&ev))
                                        }
                                        disabled=loading
                                    />
                                </div>
                            })
                            .collect_view()}
                    }
                >
                    <div class="field">
                        <label>"Company Name"</label>
                        <input
                            type="text"
                            placeholder="e.g., Tech Corp"
                            prop:value=move || company_name.get()
                            on:input=move |ev| set_company_name.set(event_target_value(&ev))
                            disabled=loading
                        />
                    </div>
                    <div class="field">
                        <label>"Job Role"</label>
                        <input
                            type="text"
                            placeholder="e.g., Software Engineer"
                            prop:value=move || job_role.get()
                            on:input=move |ev| set_job_role.set(event_target_value(&ev))
                            disabled=loading
                        />
                    </div>
                    <div class="field">
                        <label>"Job Description"</label>
                        <textarea
                            placeholder="Enter job description and requirements..."
                            prop:value=move || job_description.get()
                            on:input=move |ev| set_job_description.set(event_target_value(&ev))
                            disabled=loading
                        />
                    </div>
                    <div class="field">
                        <label>"Expected Salary"</label>
                        <input
                            type="text"
                            placeholder="e.g., 85000"
                            prop:value=move || salary.get()
                            on:input=move |ev| set_salary.set(event_target_value(&ev))
                            disabled=loading
                        />
                    </div>
                </Show>

                <button class="btn btn-primary submit" on:click=submit disabled=loading>
                    {move || if loading() { "Processing..." } else { "Get Prediction" }}
                </button>
            </section>

            <section class="card">
                <h2>"Prediction Result"</h2>
                <p class="card-subtitle">"Model output will appear here"</p>

                <Show when=loading>
                    <div class="loading-indicator">
                        <span class="spinner" />
                        <p>"Waiting for the model..."</p>
                    </div>
                </Show>

                <Show when=move || !loading() && result.get().is_none()>
                    <div class="placeholder">
                        <p>"No prediction yet"</p>
                        <p class="hint">"Submit the form to see results"</p>
                    </div>
                </Show>

                <Show when=move || !loading() && result.get().is_some()>
                    {move || {
                        result
                            .get()
                            .map(|outcome| view! { <ResultPanel outcome=outcome /> })
                    }}
                </Show>
            </section>
        </div>

        <ToastBanner toast=toast set_toast=set_toast />
    }
}

const fn toggle_class(active: bool) -> &'static str {
    if active { "btn btn-active" } else { "btn" }
}
