pub mod common;
pub mod guard;
pub mod layout;
