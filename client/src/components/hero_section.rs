//! Above-the-fold hero banner.

use leptos::prelude::*;

use crate::content::PROFILE;

/// Greeting, tagline, call to action, and portrait, with staggered fade-in.
#[component]
pub fn HeroSection() -> impl IntoView {
    let size = PROFILE.portrait_size.to_string();

    view! {
        <section id="hero" class="hero">
            <div class="hero__content">
                <div class="hero__text">
                    <h1 class="hero__title">
                        <span class="fade-in">{PROFILE.greeting}</span>
                        <span class="text-primary fade-in fade-in--delay-1">
                            " "
                            {PROFILE.first_name}
                        </span>
                        <span class="text-gradient fade-in fade-in--delay-2">
                            " "
                            {PROFILE.last_name}
                        </span>
                    </h1>

                    <p class="hero__tagline fade-in fade-in--delay-3">{PROFILE.tagline}</p>

                    <div class="hero__cta fade-in fade-in--delay-4">
                        <a href=PROFILE.cta_href() class="cosmic-button">
                            {PROFILE.cta_label}
                        </a>
                    </div>
                </div>

                <div class="hero__portrait fade-in fade-in--delay-2">
                    <img
                        src=PROFILE.portrait_src
                        alt=PROFILE.portrait_alt
                        width=size.clone()
                        height=size
                        loading="eager"
                        decoding="async"
                    />
                </div>
            </div>

            <div class="hero__scroll-hint">
                <span>"Scroll"</span>
                <span class="hero__scroll-arrow">"↓"</span>
            </div>
        </section>
    }
}
