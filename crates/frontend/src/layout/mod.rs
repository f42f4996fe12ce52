pub mod header;

use header::Header;
use leptos::prelude::*;

/// Main application shell.
///
/// Layout structure:
/// ```text
/// +------------------------------------------+
/// |                 Header                    |
/// +------------------------------------------+
/// |                 Content                   |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<C>(center: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <Header />

            <div class="app-body">
                <div class="app-main">
                    {center()}
                </div>
            </div>
        </div>
    }
}
