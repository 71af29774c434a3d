pub use undangan_client as client;

mod context;
pub use context::{RenderContext, Settings, DEFAULT_PER_PAGE};

pub mod html;
pub use html::{Element, Html};

#[cfg(target_arch = "wasm32")]
mod storage;
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStore;

pub mod ui;

/// Sends `tracing` events to the browser console
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    tracing_wasm::set_as_global_default();
}
