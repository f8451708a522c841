//! Page-level document metadata.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

/// Static head declarations for the page.
///
/// The shell emits these once at mount through the `leptos_meta` context;
/// nothing here changes at runtime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
    pub viewport: &'static str,
    /// Resolved against the hosting environment's static-asset convention.
    pub icon: &'static str,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            title: "LingoCoach: learn English with an AI coach",
            description: "Practice English conversation with a personal AI coach.",
            viewport: "width=device-width, initial-scale=1",
            icon: "/favicon.ico",
        }
    }
}

#[component]
pub fn PageHead(meta: PageMeta) -> impl IntoView {
    view! {
        <Title text=meta.title/>
        <Meta name="description" content=meta.description/>
        <Meta name="viewport" content=meta.viewport/>
        <Link rel="icon" href=meta.icon/>
    }
}
