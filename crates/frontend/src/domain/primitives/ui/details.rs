//! Detail viewer for a selected catalog item
//!
//! Renders the item's fetched content verbatim when it declares one, or
//! the structured field fallback when it does not.

use contracts::domain::primitives::PrimitiveItem;
use leptos::prelude::*;

use crate::shared::icons::icon;

#[component]
pub fn PrimitiveDetails(
    item: PrimitiveItem,
    /// Label of the category the item belongs to
    category_label: &'static str,
    /// Raw fetched content; empty while loading or for items without one
    #[prop(into)]
    content: Signal<String>,
    #[prop(into)]
    loading: Signal<bool>,
    on_close: Callback<()>,
) -> impl IntoView {
    let title = item.label.clone();
    let key = item.key.clone();
    let key_prop = item.key.clone();
    let name_prop = item.label.clone();
    let description = if item.description.is_empty() {
        "No description available".to_string()
    } else {
        item.description.clone()
    };

    view! {
        <div class="primitives-detail">
            <div class="detail-header">
                <h2 class="detail-title">{title}</h2>
                <button
                    class="button button--ghost detail-close"
                    aria-label="Close"
                    on:click=move |_| on_close.run(())
                >
                    {icon("x")}
                </button>
            </div>

            <div class="detail-content">
                {move || if loading.get() {
                    view! {
                        <div class="content-loading">
                            <div class="spinner"></div>
                        </div>
                    }.into_any()
                } else if !content.get().is_empty() {
                    view! {
                        <pre class="detail-raw">{content.get()}</pre>
                    }.into_any()
                } else {
                    let key = key.clone();
                    let key_prop = key_prop.clone();
                    let name_prop = name_prop.clone();
                    let description = description.clone();
                    view! {
                        <>
                            <div class="detail-section">
                                <div class="section-label">"KEY"</div>
                                <div class="section-value">{key}</div>
                            </div>

                            <div class="detail-section">
                                <div class="section-label">"DESCRIPTION"</div>
                                <div class="section-value">{description}</div>
                            </div>

                            <div class="detail-section">
                                <div class="section-label">"TYPE"</div>
                                <div class="section-value">{category_label}</div>
                            </div>

                            <div class="detail-section">
                                <div class="section-label">"PROPERTIES"</div>
                                <div class="properties-table">
                                    <div class="prop-row">
                                        <div class="prop-key">"Category:"</div>
                                        <div class="prop-val">{category_label}</div>
                                    </div>
                                    <div class="prop-row">
                                        <div class="prop-key">"Name:"</div>
                                        <div class="prop-val">{name_prop}</div>
                                    </div>
                                    <div class="prop-row">
                                        <div class="prop-key">"Identifier:"</div>
                                        <div class="prop-val">{key_prop}</div>
                                    </div>
                                </div>
                            </div>
                        </>
                    }.into_any()
                }}
            </div>
        </div>
    }
}
