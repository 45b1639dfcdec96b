mod attendance;
mod auth;
pub mod client;
mod dashboard;
mod leaves;
mod payroll;
mod profiles;
pub mod types;

pub use client::*;
pub use leaves::LeaveQuery;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;
