//! Hero section for the Pro-Active Therapy site.
//!
//! Split-screen layout: copy and CTAs on the left, feature photograph with
//! a floating statistics card on the right. Entry animations and hover
//! effects are pure CSS; the component renders once and holds no state.

use leptos::*;

use crate::components::icons::{ArrowRightIcon, ChevronRightIcon};
use crate::components::image::AppImage;
use crate::config::{FEATURES, HERO, LOGO_ALT, LOGO_SRC, STATS};
use crate::types::{Feature, Stat};
use crate::utils::cn;

/// Base classes of the section root; an override merges after these.
const SECTION_CLASS: &str =
    "relative overflow-hidden bg-gradient-to-br from-background via-muted/20 to-accent/10";

/// Hero section.
///
/// `class` is merged additively into the section root's class list.
#[component]
pub fn Hero(#[prop(optional, into)] class: Option<String>) -> impl IntoView {
    let section_class = cn(SECTION_CLASS, class.as_deref());

    view! {
        <section class=section_class>
            // Background pattern
            <div class="pointer-events-none absolute inset-0 opacity-[0.03]">
                <div
                    class="h-full w-full"
                    style="background-image: radial-gradient(circle at 2px 2px, currentColor 1px, transparent 0); background-size: 48px 48px;"
                ></div>
            </div>

            <div class="container relative mx-auto px-4 py-16 md:px-6 md:py-24 lg:py-32">
                <div class="grid gap-12 lg:grid-cols-2 lg:gap-16 xl:gap-24">
                    // Left column: content
                    <div class="flex flex-col justify-center space-y-8">
                        // Logo
                        <div class="animate-fade-in-up">
                            <div class="relative inline-block">
                                <AppImage
                                    src=LOGO_SRC
                                    alt=LOGO_ALT
                                    width=120
                                    height=120
                                    priority=true
                                    class="h-24 w-24 md:h-32 md:w-32"
                                />
                                <div class="absolute -inset-2 -z-10 animate-pulse rounded-full bg-primary/10 blur-xl"></div>
                            </div>
                        </div>

                        // Subtitle
                        <div class="animate-fade-in-up space-y-2 [animation-delay:100ms]">
                            <div class="flex items-center gap-2 text-sm font-medium uppercase tracking-wide text-primary">
                                <div class="h-px w-8 bg-primary"></div>
                                <span>{HERO.subtitle}</span>
                            </div>
                        </div>

                        // Main headline
                        <div class="animate-fade-in-up space-y-4 [animation-delay:200ms]">
                            <h1 class="text-balance font-heading text-4xl font-bold leading-tight tracking-tight text-foreground md:text-5xl lg:text-6xl">
                                {HERO.title}
                            </h1>
                            <p class="text-pretty text-lg text-muted-foreground md:text-xl">
                                {HERO.description}
                            </p>
                        </div>

                        // Feature pills
                        <div class="animate-fade-in-up flex flex-wrap gap-3 [animation-delay:300ms]">
                            {FEATURES
                                .iter()
                                .map(|&feature| view! { <FeaturePill feature=feature/> })
                                .collect_view()}
                        </div>

                        // CTA buttons
                        <div class="animate-fade-in-up flex flex-col gap-4 sm:flex-row [animation-delay:400ms]">
                            <a
                                href=HERO.cta_url
                                class="group relative flex min-h-12 items-center justify-center rounded-lg bg-primary px-8 py-3 font-semibold text-primary-foreground shadow-lg shadow-primary/20 transition-all duration-200 ease-out hover:scale-[1.02] hover:bg-primary/90 hover:shadow-xl hover:shadow-primary/30 focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2 active:scale-[0.98]"
                            >
                                <span class="flex items-center gap-2">
                                    {HERO.cta_text}
                                    // Chevron swaps to arrow on hover
                                    <span class="relative inline-block h-4 w-4">
                                        <ChevronRightIcon class="absolute left-0 top-0 h-4 w-4 transition-[transform,opacity] duration-200 group-hover:translate-x-1 group-hover:opacity-0"/>
                                        <ArrowRightIcon class="absolute left-0 top-0 h-4 w-4 -translate-x-1 opacity-0 transition-[transform,opacity] duration-200 group-hover:translate-x-0 group-hover:opacity-100"/>
                                    </span>
                                </span>
                            </a>

                            <a
                                href=HERO.secondary_cta_url
                                class="flex min-h-12 items-center justify-center rounded-lg border-2 border-primary bg-background px-8 py-3 font-semibold text-primary transition-all duration-200 ease-out hover:bg-accent focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2 active:scale-[0.98]"
                            >
                                {HERO.secondary_cta_text}
                            </a>
                        </div>
                    </div>

                    // Right column: feature image
                    <div class="animate-fade-in-up relative lg:order-last [animation-delay:200ms]">
                        <div class="relative aspect-[4/3] overflow-hidden rounded-4xl bg-muted shadow-2xl lg:aspect-square">
                            <AppImage
                                src=HERO.background_image
                                alt=HERO.background_image_alt
                                fill=true
                                priority=true
                                sizes="(max-width: 1024px) 100vw, 50vw"
                                class="object-cover object-center"
                            />

                            // Overlay gradient for contrast
                            <div class="absolute inset-0 bg-gradient-to-t from-background/40 via-transparent to-transparent"></div>

                            // Decorative corner accent
                            <div class="absolute right-0 top-0 h-32 w-32 bg-gradient-to-br from-primary/20 to-transparent"></div>
                        </div>

                        <StatsCard/>
                    </div>
                </div>
            </div>

            // Bottom hairline
            <div class="absolute bottom-0 left-0 right-0 h-px bg-gradient-to-r from-transparent via-border to-transparent"></div>
        </section>
    }
}

/// Rounded pill with an icon and a one-word label.
#[component]
fn FeaturePill(feature: Feature) -> impl IntoView {
    view! {
        <div class="flex items-center gap-2 rounded-full border border-border bg-background px-4 py-2 text-sm font-medium shadow-sm">
            {feature.icon.view("h-4 w-4 text-primary")}
            <span>{feature.label}</span>
        </div>
    }
}

/// Floating card overlapping the image bottom edge.
#[component]
fn StatsCard() -> impl IntoView {
    view! {
        <div class="absolute -bottom-6 left-4 right-4 animate-fade-in-up rounded-2xl border border-border bg-background p-4 shadow-xl [animation-delay:500ms] sm:left-8 sm:right-auto sm:w-72">
            <div class="grid grid-cols-3 gap-4 text-center">
                {STATS
                    .iter()
                    .enumerate()
                    .map(|(i, &stat)| view! { <StatCell stat=stat divided={i == 1}/> })
                    .collect_view()}
            </div>
        </div>
    }
}

/// One column of the stats card; the middle cell carries divider borders.
#[component]
fn StatCell(stat: Stat, divided: bool) -> impl IntoView {
    let divider_class = if divided {
        "border-l border-r border-border"
    } else {
        ""
    };

    view! {
        <div class=divider_class>
            <div class="text-2xl font-bold text-foreground">{stat.value}</div>
            <div class="text-xs text-muted-foreground">{stat.label}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_class_override_is_additive() {
        let merged = cn(SECTION_CLASS, Some("bg-white"));
        assert!(merged.starts_with(SECTION_CLASS));
        assert!(merged.ends_with("bg-white"));
    }

    #[test]
    fn test_section_class_unchanged_without_override() {
        assert_eq!(cn(SECTION_CLASS, None), SECTION_CLASS);
    }
}
