//! Generate Atom wizard - view components
//!
//! Три экрана мастера: форма выбора, поэтапный прогресс, результат.
//! The timed driver runs as one `spawn_local` chain: each display step
//! awaits its delay before the counter advances, then the single network
//! call resolves the attempt.

use contracts::domain::primitives::GenerationStepKind;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::domain::primitives::api;
use crate::shared::clipboard::copy_to_clipboard_with_callback;
use crate::shared::components::ui::{Badge, Button, Select};
use crate::shared::icons::icon;

use super::model::{
    database_options, generation_steps, step_delay_ms, WizardPhase, COPY_ACK_MS,
    PROGRESS_CLOSE_DELAY_MS,
};
use super::view_model::GenerateAtomVm;

/// Wizard panel shown while no catalog item is selected
#[component]
pub fn GenerateAtomPanel(vm: GenerateAtomVm) -> impl IntoView {
    view! {
        {move || match vm.phase() {
            WizardPhase::Generating => view! { <GenerationProgress vm=vm /> }.into_any(),
            WizardPhase::Result => view! { <GenerationResult vm=vm /> }.into_any(),
            WizardPhase::Form => view! { <GenerateAtomForm vm=vm /> }.into_any(),
        }}
    }
}

/// Kick off one generation attempt: the fixed step sequence, then the
/// single network call. No cancellation; the form is unreachable while
/// the attempt runs.
fn start_generation(vm: GenerateAtomVm) {
    let request = vm.build_request();
    if !request.is_complete() {
        return;
    }

    vm.begin();
    spawn_local(async move {
        for step in generation_steps() {
            TimeoutFuture::new(step_delay_ms(step.kind)).await;
            vm.step_completed();
        }

        match api::generate_atom(&request).await {
            Ok(payload) => {
                vm.complete(api::format_atom_json(&payload));
                // Показать завершённые шаги перед экраном результата
                TimeoutFuture::new(PROGRESS_CLOSE_DELAY_MS).await;
                vm.close_progress();
            }
            Err(err) => {
                log::error!("atom generation failed: {}", err);
                vm.fail(api::GENERATION_ERROR_TEXT);
            }
        }
    });
}

#[component]
fn GenerateAtomForm(vm: GenerateAtomVm) -> impl IntoView {
    let table_value = Signal::derive(move || {
        vm.tables.get().first().cloned().unwrap_or_default()
    });

    view! {
        <div class="initial-screen-form">
            <div class="form-container">
                <div>
                    <span class="form-title">"Generate New Atom"</span>
                    <span class="form-subtitle">
                        "Select database, schema, and tables to generate atoms"
                    </span>
                </div>

                <Select
                    label="Database".to_string()
                    placeholder="Select a database".to_string()
                    value=vm.database
                    options=Signal::derive(database_options)
                    status=Signal::derive(move || {
                        if vm.database.get().is_empty() { "warning".to_string() } else { String::new() }
                    })
                    on_change=Callback::new(move |v: String| vm.select_database(v))
                />

                <Select
                    label="Schema".to_string()
                    placeholder="Select a schema".to_string()
                    value=vm.schema
                    options=Signal::derive(move || vm.schema_options())
                    disabled=Signal::derive(move || vm.database.get().is_empty())
                    status=Signal::derive(move || {
                        if !vm.database.get().is_empty() && vm.schema.get().is_empty() {
                            "warning".to_string()
                        } else {
                            String::new()
                        }
                    })
                    on_change=Callback::new(move |v: String| vm.select_schema(v))
                />

                <Select
                    label="Tables".to_string()
                    placeholder="Select a table".to_string()
                    value=table_value
                    options=Signal::derive(move || vm.table_options())
                    disabled=Signal::derive(move || vm.schema.get().is_empty())
                    status=Signal::derive(move || {
                        if !vm.schema.get().is_empty() && vm.tables.get().is_empty() {
                            "warning".to_string()
                        } else {
                            String::new()
                        }
                    })
                    on_change=Callback::new(move |v: String| vm.select_table(v))
                />

                <Show when=move || vm.can_generate()>
                    <Button
                        variant="primary".to_string()
                        class="form-generate".to_string()
                        on_click=Callback::new(move |_| start_generation(vm))
                    >
                        {icon("plus")}
                        {move || {
                            let n = vm.tables.get().len();
                            format!("Generate Atoms for {} Table{}", n, if n == 1 { "" } else { "s" })
                        }}
                    </Button>
                    <div class="form-footer">
                        {move || {
                            let n = vm.tables.get().len();
                            format!(
                                "{} table{} selected • Ready to generate atoms",
                                n,
                                if n == 1 { "" } else { "s" }
                            )
                        }}
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn GenerationProgress(vm: GenerateAtomVm) -> impl IntoView {
    let steps = generation_steps();
    let total = steps.len();

    view! {
        <div class="initial-screen-form">
            <div class="generation-container">
                <div class="generation-header">
                    <span class="generation-icon">{icon("sparkles")}</span>
                    <h2 class="generation-title">"Generating Atoms"</h2>
                    <p class="generation-subtitle">
                        "AI is analyzing your tables and creating atoms"
                    </p>
                </div>

                <div class="generation-steps">
                    {steps
                        .into_iter()
                        .enumerate()
                        .map(|(index, step)| {
                            let is_thinking = step.kind == GenerationStepKind::Thinking;
                            let step_class = move || {
                                let done = vm.model.get().completed_steps;
                                let status = if done > index {
                                    "generation-step--completed"
                                } else if done == index {
                                    "generation-step--in-progress"
                                } else {
                                    "generation-step--pending"
                                };
                                let kind = if is_thinking { "generation-step--thinking" } else { "" };
                                format!("generation-step {} {}", kind, status)
                            };

                            view! {
                                <div class=step_class>
                                    <div class="step-indicator">
                                        {move || {
                                            let done = vm.model.get().completed_steps;
                                            if done > index {
                                                view! {
                                                    <span class="step-completed">{icon("check")}</span>
                                                }.into_any()
                                            } else if done == index {
                                                if is_thinking {
                                                    view! {
                                                        <div class="ai-thinking-loader">
                                                            <div class="thinking-dot"></div>
                                                            <div class="thinking-dot"></div>
                                                            <div class="thinking-dot"></div>
                                                        </div>
                                                    }.into_any()
                                                } else {
                                                    view! {
                                                        <div class="ai-loader">
                                                            <div class="loader-bar"></div>
                                                            <div class="loader-bar"></div>
                                                            <div class="loader-bar"></div>
                                                        </div>
                                                    }.into_any()
                                                }
                                            } else {
                                                view! {
                                                    <span class="step-pending">{index + 1}</span>
                                                }.into_any()
                                            }
                                        }}
                                    </div>
                                    <div class="step-content">
                                        <p class="step-text">{step.text.clone()}</p>
                                        <Show when=move || {
                                            is_thinking && vm.model.get().completed_steps == index
                                        }>
                                            <Badge variant="primary".to_string() class="step-badge".to_string()>"AI Thinking"</Badge>
                                        </Show>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="generation-progress">
                    <div
                        class="progress-bar"
                        style:width=move || format!("{}%", vm.model.get().progress_percent())
                    ></div>
                </div>
                <p class="progress-text">
                    {move || format!("Step {} of {}", vm.model.get().completed_steps, total)}
                </p>
            </div>
        </div>
    }
}

#[component]
fn GenerationResult(vm: GenerateAtomVm) -> impl IntoView {
    let output_text = move || vm.model.get().output.clone().unwrap_or_default();
    let failed = move || vm.model.get().failed;

    let handle_copy = move |_| {
        copy_to_clipboard_with_callback(&output_text(), move || {
            vm.is_copied.set(true);
            // Сбросить отметку через фиксированный интервал
            spawn_local(async move {
                TimeoutFuture::new(COPY_ACK_MS).await;
                vm.is_copied.set(false);
            });
        });
    };

    let handle_download = move |_| download_json(&output_text());

    view! {
        <div class="initial-screen-form">
            <div class="generation-result">
                <div class="result-header">
                    {move || if failed() {
                        view! { <h2 class="result-title result-title--error">"Generation Failed"</h2> }
                            .into_any()
                    } else {
                        view! { <h2 class="result-title">"Atom Generated Successfully!"</h2> }
                            .into_any()
                    }}
                </div>

                <div class="result-content">
                    <Show when=move || !failed()>
                        <div class="code-header">
                            <span class="code-label">"JSON Response"</span>
                            <div class="code-actions">
                                <Button variant="ghost".to_string() size="sm".to_string() on_click=Callback::new(handle_copy)>
                                    {move || if vm.is_copied.get() {
                                        view! {
                                            <>
                                                {icon("check")}
                                                {"Copied!"}
                                            </>
                                        }.into_any()
                                    } else {
                                        view! {
                                            <>
                                                {icon("copy")}
                                                {"Copy"}
                                            </>
                                        }.into_any()
                                    }}
                                </Button>
                                <Button variant="ghost".to_string() size="sm".to_string() on_click=Callback::new(handle_download)>
                                    {icon("download")}
                                    {"Download"}
                                </Button>
                            </div>
                        </div>
                    </Show>
                    <pre class="result-code">{output_text}</pre>
                </div>

                <div class="result-actions">
                    <Button
                        variant="primary".to_string()
                        class="result-reset".to_string()
                        on_click=Callback::new(move |_| vm.reset())
                    >
                        {move || if failed() { "Try Again" } else { "Generate Another Atom" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}

/// Download the displayed payload as a JSON file
fn download_json(content: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let blob_parts = js_sys::Array::new();
    blob_parts.push(&wasm_bindgen::JsValue::from_str(content));

    let blob_property_bag = web_sys::BlobPropertyBag::new();
    blob_property_bag.set_type("application/json");

    let Ok(blob) =
        web_sys::Blob::new_with_str_sequence_and_options(&blob_parts, &blob_property_bag)
    else {
        return;
    };

    let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
        return;
    };

    if let Ok(a) = document.create_element("a") {
        if let Ok(link) = a.dyn_into::<web_sys::HtmlAnchorElement>() {
            link.set_href(&url);
            link.set_download("generated-atom.json");
            link.click();
        }
    }

    web_sys::Url::revoke_object_url(&url).ok();
}
