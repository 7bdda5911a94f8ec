//! Pro-Active Therapy - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for the Pro-Active Therapy physiotherapy
//! marketing site, client-side rendered with Leptos.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! │  (meta context + router)                                     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  HomePage ("/")                                              │
//! │  ├── Title / Meta (document head)                            │
//! │  └── Hero (logo, headline, CTAs, floating stats card)        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  NotFound (wildcard route)                                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Page copy, image sources and metadata literals
//! - [`types`] - Content record types (HeroContent, Feature, Stat)
//! - [`components`] - UI components (Hero, AppImage, icons)
//! - [`utils`] - Class-name helpers

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod types;
pub mod utils;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{Feature, FeatureIcon, HeroContent, Stat};

// Components
pub use components::*;

// Utilities
pub use utils::cn;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Pro-Active Therapy - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/*any" view=NotFound/>
                </Routes>
            </main>
        </Router>
    }
}

/// Demo page: document metadata plus the hero section, nothing else.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text=PAGE_TITLE/>
        <Meta name="description" content=PAGE_DESCRIPTION/>

        <Hero/>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <Title text="Page not found"/>

        <section class="flex min-h-screen flex-col items-center justify-center gap-4 text-center">
            <h1 class="text-4xl font-bold text-foreground">"Page not found"</h1>
            <p class="text-muted-foreground">"The page you are looking for does not exist."</p>
            <a href="/" class="font-semibold text-primary underline-offset-4 hover:underline">
                "Back to home"
            </a>
        </section>
    }
}
