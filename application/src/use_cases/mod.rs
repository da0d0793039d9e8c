//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod authenticate;
pub mod send_chat;
pub mod session;

#[cfg(test)]
pub(crate) mod test_support;
