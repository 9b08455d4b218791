// === PUBLIC CONTRACT ===
// Other crates should consume users through the contract module only.
pub mod contract;

pub use contract::{client, error, model};

// === MODULE DEFINITION ===
pub mod module;
pub use module::{UsersDirectory, MODULE_NAME};

// === INTERNAL MODULES ===
// Exposed for wiring and tests; not a stable API.
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod gateways;
#[doc(hidden)]
pub mod infra;
