//! Client-gated bring-up of the root component.
//!
//! The page must never try to materialize the application outside a browser
//! context, and must show nothing while the component is still on its way.
//! [`Boot`] holds that contract: the phase only moves forward
//! (`Unresolved` to `Resolving` to `Mounted`), both pending phases read as an
//! empty placeholder, and a failed load keeps the placeholder up.

use futures::future::LocalBoxFuture;
use leptos::prelude::*;
use log::{debug, error};
use std::rc::Rc;

/// Nullary constructor for the application's root component. The constructor
/// may assume a live browser; it is only ever called behind the client gate.
pub type RootComponent = Rc<dyn Fn() -> AnyView>;

/// Deferred resolution of a [`RootComponent`].
pub type AppFuture = LocalBoxFuture<'static, Result<RootComponent, String>>;

/// Factory for the root component, handed to the shell at mount. It is not
/// invoked until the client gate passes, so resolution happens on demand
/// rather than at module load.
#[derive(Clone)]
pub struct AppLoader(Rc<dyn Fn() -> AppFuture>);

impl AppLoader {
    pub fn new(factory: impl Fn() -> AppFuture + 'static) -> Self {
        Self(Rc::new(factory))
    }

    pub fn load(&self) -> AppFuture {
        (self.0)()
    }
}

/// Where the page is in bringing up the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BootPhase {
    Unresolved,
    Resolving,
    Mounted,
}

/// True when browser globals are reachable, i.e. this is an interactive
/// client and not a pre-render pass.
pub fn client_context() -> bool {
    web_sys::window().is_some()
}

#[derive(Clone, Copy)]
pub struct Boot {
    pub phase: RwSignal<BootPhase>,
    root: StoredValue<Option<RootComponent>, LocalStorage>,
}

impl Boot {
    pub fn new() -> Self {
        Self {
            phase: RwSignal::new(BootPhase::Unresolved),
            root: StoredValue::new_local(None),
        }
    }

    /// Kicks off resolution of the root component, at most once, and only in
    /// a client context. Outside a client this is a no-op and the phase stays
    /// `Unresolved`.
    pub fn resolve(&self, loader: &AppLoader) {
        if self.phase.get_untracked() != BootPhase::Unresolved {
            return;
        }
        if !client_context() {
            return;
        }
        self.phase.set(BootPhase::Resolving);
        debug!("resolving root component");
        let fut = loader.load();
        let boot = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match fut.await {
                Ok(root) => {
                    boot.root.set_value(Some(root));
                    boot.phase.set(BootPhase::Mounted);
                    debug!("root component mounted");
                }
                // No retry and no error UI; the phase stays Resolving and
                // the placeholder stays empty.
                Err(e) => error!("root component failed to resolve: {e}"),
            }
        });
    }

    /// The mounted subtree. `None` until the phase reaches `Mounted`, so both
    /// pending phases render as an empty placeholder.
    pub fn content(&self) -> Option<AnyView> {
        if self.phase.get() != BootPhase::Mounted {
            return None;
        }
        self.root.get_value().map(|root| root())
    }
}
