mod comparisons;
mod helper_functions;
pub mod libphonenumber_engine;

use std::sync::LazyLock;

pub use libphonenumber_engine::LibPhoneNumberEngine;

/// Engine over the compiled-in metadata, loaded on first use and shared for
/// the lifetime of the process.
pub static NUMBER_ENGINE: LazyLock<LibPhoneNumberEngine<'static>> =
    LazyLock::new(LibPhoneNumberEngine::new);
