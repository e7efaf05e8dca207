//! UI Components

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::api::RecordedPrediction;

/// Top navigation bar with active-route highlighting
#[component]
pub fn Navbar() -> impl IntoView {
    let pathname = use_location().pathname;
    let link_class = |active: bool| {
        if active {
            "btn btn-active"
        } else {
            "btn btn-ghost"
        }
    };

    view! {
        <nav class="navbar">
            <a href="/" class="brand">"Job Prediction AI"</a>
            <div class="links">
                <a href="/" class=move || link_class(pathname.get() == "/")>
                    "Home"
                </a>
                <a href="/predict" class=move || link_class(pathname.get() == "/predict")>
                    "Get Prediction"
                </a>
            </div>
        </nav>
    }
}

/// Visual flavor of a toast message
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    const fn css_suffix(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

/// One transient notification; each new event replaces the previous one
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub body: String,
}

impl Toast {
    pub fn success(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Dismissible banner rendering the current toast, if any
#[component]
pub fn ToastBanner(
    toast: ReadSignal<Option<Toast>>,
    set_toast: WriteSignal<Option<Toast>>,
) -> impl IntoView {
    view! {
        <Show when=move || toast.get().is_some()>
            {move || {
                toast
                    .get()
                    .map(|current| {
                        let class = format!("toast toast-{}", current.kind.css_suffix());
                        view! {
                            <div class=class role="status">
                                <strong class="toast-title">{current.title.clone()}</strong>
                                <p class="toast-body">{current.body.clone()}</p>
                                <button class="toast-dismiss" on:click=move |_| set_toast.set(None)>
                                    "Dismiss"
                                </button>
                            </div>
                        }
                    })
            }}
        </Show>
    }
}

/// Formatted prediction output: primary value, optional confidence,
/// optional detail rows in server order
#[component]
pub fn ResultPanel(outcome: RecordedPrediction) -> impl IntoView {
    let prediction = outcome.result.formatted_prediction();
    let confidence = outcome.result.formatted_confidence();
    let rows = outcome.result.detail_rows();
    let received = outcome.received_at.format("%H:%M:%S UTC").to_string();

    view! {
        <div class="result">
            <div class="result-primary">
                <p class="label">"Prediction"</p>
                <p class="value">{prediction}</p>
            </div>

            {confidence.map(|percent| view! {
                <div class="result-confidence">
                    <p class="label">"Confidence"</p>
                    <p class="value">{percent}</p>
                </div>
            })}

            {(!rows.is_empty()).then(|| view! {
                <div class="result-details">
                    <p class="label">"Additional Details"</p>
                    {rows
                        .into_iter()
                        .map(|(label, value)| view! {
                            <div class="detail-row">
                                <span class="detail-label">{label}</span>
                                <span class="detail-value">{value}</span>
                            </div>
                        })
                        .collect_view()}
                </div>
            })}

            <p class="result-received">{format!("Received at {received}")}</p>
        </div>
    }
}
