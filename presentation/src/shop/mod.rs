//! Interactive shop: chat with the assistant and manage cart and wishlist

mod command;
mod repl;

pub use command::ShopCommand;
pub use repl::ShopRepl;
