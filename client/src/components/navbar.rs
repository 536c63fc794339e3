//! Fixed top navigation bar with scroll progress and theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navbar owns the page's two browser subscriptions: it resolves and
//! applies the initial theme on mount, and it holds the window scroll
//! listener for as long as it is mounted. Both write into the page-level
//! `UiState` context.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use crate::content::{BRAND, NAV_ITEMS};
use crate::state::ui::UiState;
use crate::util::scroll::progress_style;
use crate::util::storage::BrowserStorage;
use crate::util::theme::{self, ThemeMode};

#[cfg(feature = "hydrate")]
use crate::util::scroll::ScrollSubscription;

const NAV_BASE: &str = "navbar";
const NAV_SCROLLED: &str = "navbar navbar--scrolled";
const MENU_OPEN: &str = "mobile-menu mobile-menu--open";
const MENU_CLOSED: &str = "mobile-menu mobile-menu--closed";

/// Navigation bar pinned to the top of the page.
#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    // Startup theme: stored choice, then OS preference, then light.
    Effect::new(move || {
        let mode = theme::initial_theme();
        theme::apply(mode);
        ui.update(|u| u.set_theme(mode));
    });

    #[cfg(feature = "hydrate")]
    {
        let subscription = StoredValue::new_local(None::<ScrollSubscription>);
        Effect::new(move || {
            let attached =
                ScrollSubscription::attach(move |scroll| ui.update(|u| u.set_scroll(scroll)));
            subscription.set_value(attached);
        });
        on_cleanup(move || {
            drop(subscription.try_update_value(Option::take));
        });
    }

    let on_toggle_theme = move |_| {
        let next = theme::toggle(ui.get_untracked().theme, &BrowserStorage);
        theme::apply(next);
        ui.update(|u| u.set_theme(next));
    };
    let on_toggle_menu = move |_| ui.update(UiState::toggle_menu);
    let on_nav_click = move |_| ui.update(UiState::close_menu);

    let past_threshold = move || ui.get().scroll.past_threshold;
    let progress = move || ui.get().scroll.progress;
    let menu_open = move || ui.get().menu_open;
    let mode = move || ui.get().theme;

    let nav_links = move |link_class: &'static str| {
        NAV_ITEMS
            .iter()
            .map(|item| {
                view! {
                    <a href=item.href() class=link_class on:click=on_nav_click>
                        {item.label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav class=move || nav_class(past_threshold())>
            <div class="navbar__progress" style=move || progress_style(progress())></div>

            <div class="navbar__inner">
                <a class="navbar__brand" href=format!("#{}", BRAND.target) on:click=on_nav_click>
                    <span class="text-glow">{BRAND.lead}</span>
                    {BRAND.suffix}
                </a>

                <div class="navbar__links">
                    {nav_links("navbar__link")}
                    <button
                        class="navbar__theme-toggle"
                        on:click=on_toggle_theme
                        aria-label="Toggle theme"
                    >
                        <span class=move || theme_glyph(mode()).1>{move || theme_glyph(mode()).0}</span>
                    </button>
                </div>

                <button
                    class="navbar__hamburger"
                    on:click=on_toggle_menu
                    aria-label=move || menu_button_label(menu_open())
                >
                    {move || menu_button_glyph(menu_open())}
                </button>
            </div>
        </nav>

        <div class=move || menu_overlay_class(menu_open())>
            <div class="mobile-menu__items">
                {nav_links("mobile-menu__link")}
                <button
                    class="mobile-menu__theme-toggle"
                    on:click=on_toggle_theme
                    aria-label="Toggle theme"
                >
                    <span class=move || theme_glyph(mode()).1>{move || theme_glyph(mode()).0}</span>
                </button>
            </div>
        </div>
    }
}

fn nav_class(past_threshold: bool) -> &'static str {
    if past_threshold { NAV_SCROLLED } else { NAV_BASE }
}

fn menu_overlay_class(open: bool) -> &'static str {
    if open { MENU_OPEN } else { MENU_CLOSED }
}

fn menu_button_label(open: bool) -> &'static str {
    if open { "Close Menu" } else { "Open Menu" }
}

fn menu_button_glyph(open: bool) -> &'static str {
    if open { "✕" } else { "☰" }
}

/// Glyph and class for the theme button: offer the sun while dark, the moon
/// while light.
fn theme_glyph(mode: ThemeMode) -> (&'static str, &'static str) {
    match mode {
        ThemeMode::Dark => ("☀", "theme-icon theme-icon--sun"),
        ThemeMode::Light => ("☾", "theme-icon theme-icon--moon"),
    }
}
