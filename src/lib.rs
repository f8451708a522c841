pub mod app;
pub mod boot;
pub mod meta;
pub mod shell;
pub mod strings;

pub use shell::Shell;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("console logger init");

    leptos::mount::mount_to_body(|| view! { <Shell loader=app::loader()/> });
}
