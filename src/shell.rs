//! The page shell: declares head metadata and hosts the deferred root
//! component.

use crate::boot::{AppLoader, Boot};
use crate::meta::{PageHead, PageMeta};
use leptos::prelude::*;
use leptos_meta::provide_meta_context;

/// Page-level wrapper that mounts the real application once the client gate
/// passes. Until then, and if the load fails, it renders nothing: no spinner,
/// no fallback text.
#[component]
pub fn Shell(loader: AppLoader, #[prop(optional)] meta: PageMeta) -> impl IntoView {
    provide_meta_context();

    let boot = Boot::new();

    // Effects only run on a live client; `resolve` tracks nothing, so this
    // fires once.
    Effect::new(move |_| boot.resolve(&loader));

    view! {
        <PageHead meta=meta/>
        {move || boot.content()}
    }
}
