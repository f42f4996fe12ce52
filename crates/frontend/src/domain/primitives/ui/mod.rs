pub mod browser;
pub mod details;
pub mod generate;

use contracts::domain::primitives::{PrimitiveItem, PrimitiveKind};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::primitives::api;
use crate::domain::primitives::catalog::category_label;
use crate::shared::components::PageHeader;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_CUSTOM;

use browser::CatalogSidebar;
use details::PrimitiveDetails;
use generate::{GenerateAtomPanel, GenerateAtomVm};

/// Primitives catalog page: category sidebar on the left, detail viewer
/// or generate-atom wizard on the right.
#[component]
pub fn PrimitivesPage() -> impl IntoView {
    let expanded = RwSignal::new(Some(PrimitiveKind::Atoms));
    let active_category = RwSignal::new(PrimitiveKind::Atoms);
    let selected_item = RwSignal::new(None::<PrimitiveItem>);
    let content = RwSignal::new(String::new());
    let content_loading = RwSignal::new(false);
    let vm = GenerateAtomVm::new();

    let on_select_item = Callback::new(move |item: PrimitiveItem| {
        // Drop previously loaded content before the new fetch resolves
        content.set(String::new());
        selected_item.set(Some(item.clone()));

        if let Some(path) = item.content_path {
            content_loading.set(true);
            spawn_local(async move {
                match api::load_primitive_content(&path).await {
                    Ok(text) => content.set(text),
                    Err(err) => {
                        log::error!("failed to load {}: {}", path, err);
                        content.set(api::CONTENT_ERROR_TEXT.to_string());
                    }
                }
                content_loading.set(false);
            });
        }
    });

    let selected_key = Signal::derive(move || selected_item.get().map(|i| i.key));

    view! {
        <PageFrame page_id="primitives--custom" category=PAGE_CAT_CUSTOM>
            <PageHeader
                title="Available Primitives"
                subtitle="View all available primitives".to_string()
            >
                {()}
            </PageHeader>

            <div class="primitives-container">
                <CatalogSidebar
                    expanded=expanded
                    active_category=active_category
                    selected_key=selected_key
                    on_select_item=on_select_item
                />

                <div class="primitives-detail-panel">
                    {move || match selected_item.get() {
                        Some(item) => view! {
                            <PrimitiveDetails
                                item=item
                                category_label=category_label(active_category.get())
                                content=content
                                loading=content_loading
                                on_close=Callback::new(move |_| selected_item.set(None))
                            />
                        }.into_any(),
                        None => view! { <GenerateAtomPanel vm=vm /> }.into_any(),
                    }}
                </div>
            </div>
        </PageFrame>
    }
}
