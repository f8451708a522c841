//! Production wiring for the root component tree.
//!
//! The coach experience grows under [`App`]; the shell only ever sees it
//! through [`loader`], and everything below `App` may assume a live browser.

use crate::boot::{AppLoader, RootComponent};
use crate::strings;
use chrono::Utc;
use futures::FutureExt;
use leptos::prelude::*;
use std::rc::Rc;

const OPENING_TOPIC: &str = "everyday greetings";

/// Deferred constructor for [`App`], handed to the shell at mount.
pub fn loader() -> AppLoader {
    AppLoader::new(|| async { Ok(root()) }.boxed_local())
}

fn root() -> RootComponent {
    Rc::new(|| App().into_any())
}

#[component]
pub fn App() -> impl IntoView {
    let session_date = strings::format_date(Utc::now());
    let topic = strings::capitalize_first(OPENING_TOPIC);

    view! {
        <style>{STYLES}</style>
        <main class="app">
            <header class="app-header">
                <h1>"LingoCoach"</h1>
                <span class="session-date">{session_date}</span>
            </header>
            <section class="lesson">
                <h2>{topic}</h2>
                <p>"Your coach is ready. Say something in English to get started."</p>
            </section>
        </main>
    }
}

const STYLES: &str = r#"
    * {
        margin: 0;
        padding: 0;
        box-sizing: border-box;
    }

    body {
        background: #f7f6f2;
        color: #2b2b33;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
        min-height: 100vh;
    }

    .app {
        display: flex;
        flex-direction: column;
        max-width: 720px;
        margin: 0 auto;
        padding: 0 16px;
    }

    .app-header {
        display: flex;
        align-items: baseline;
        justify-content: space-between;
        padding: 20px 0;
        border-bottom: 1px solid #e2e0d8;
    }

    .app-header h1 {
        font-size: 1.2rem;
        font-weight: 700;
        color: #3a5aaa;
    }

    .session-date {
        font-size: 0.85rem;
        color: #8a8a94;
    }

    .lesson {
        padding: 28px 0;
    }

    .lesson h2 {
        font-size: 1.05rem;
        margin-bottom: 8px;
    }

    .lesson p {
        color: #55555f;
        line-height: 1.6;
    }
"#;
