//! Catalog sidebar with collapsible category sublists

use contracts::domain::primitives::{PrimitiveItem, PrimitiveKind};
use leptos::prelude::*;

use crate::domain::primitives::catalog::{catalog, toggle_expanded};
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;

#[component]
pub fn CatalogSidebar(
    /// Currently expanded category, if any
    expanded: RwSignal<Option<PrimitiveKind>>,
    /// Currently active category
    active_category: RwSignal<PrimitiveKind>,
    /// Key of the selected item, for highlighting
    #[prop(into)]
    selected_key: Signal<Option<String>>,
    /// Fired when the user picks an item from a sublist
    on_select_item: Callback<PrimitiveItem>,
) -> impl IntoView {
    let categories = catalog();

    view! {
        <div class="primitives-sidebar">
            <div class="sidebar-title">
                <span class="title-text">"Primitives"</span>
            </div>

            <div class="category-list">
                {categories
                    .into_iter()
                    .map(|category| {
                        let kind = category.kind;
                        let count = category.items.len();
                        let items = StoredValue::new(category.items);

                        view! {
                            <div class="category-section">
                                <div
                                    class="category-item"
                                    class:category-item--active=move || active_category.get() == kind
                                    on:click=move |_| {
                                        expanded.update(|e| *e = toggle_expanded(*e, kind));
                                        active_category.set(kind);
                                    }
                                >
                                    <div class="category-main">
                                        <span
                                            class="category-chevron"
                                            class:category-chevron--expanded=move || {
                                                expanded.get() == Some(kind)
                                            }
                                        >
                                            {icon("chevron-right")}
                                        </span>
                                        <span class="item-icon">{icon(category.icon)}</span>
                                        <span class="item-name">{category.label}</span>
                                    </div>
                                    <Badge class="item-count".to_string()>{count}</Badge>
                                </div>

                                <Show when=move || expanded.get() == Some(kind)>
                                    <div class="sublist">
                                        {items
                                            .get_value()
                                            .into_iter()
                                            .map(|item| {
                                                let label = item.label.clone();
                                                let key = item.key.clone();
                                                let item_stored = StoredValue::new(item);

                                                view! {
                                                    <div
                                                        class="sublist-item"
                                                        class:sublist-item--selected=move || {
                                                            selected_key.get().as_deref()
                                                                == Some(key.as_str())
                                                        }
                                                        on:click=move |_| {
                                                            on_select_item.run(item_stored.get_value())
                                                        }
                                                    >
                                                        <span class="sublist-icon">{icon("diamond")}</span>
                                                        <span class="sublist-label">{label}</span>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </Show>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
