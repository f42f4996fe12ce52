use crate::domain::primitives::ui::PrimitivesPage;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Shell center=|| view! { <PrimitivesPage /> }.into_any() />
    }
}
