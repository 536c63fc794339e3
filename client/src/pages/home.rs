//! Single-page portfolio landing route.

use leptos::prelude::*;

use crate::components::{hero_section::HeroSection, navbar::Navbar};
use crate::state::ui::UiState;

/// Home page. Owns the `UiState` signal shared by its sections.
#[component]
pub fn HomePage() -> impl IntoView {
    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    view! {
        <div class="page">
            <Navbar/>
            <main>
                <HeroSection/>
            </main>
        </div>
    }
}
