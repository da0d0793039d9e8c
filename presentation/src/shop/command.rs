//! Slash command parsing for the shop REPL

/// A parsed `/command` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShopCommand {
    Help,
    Quit,
    Show(String),
    Search(String),
    Add(String),
    Remove(String),
    /// Requested quantity as typed; the REPL clamps it before use
    Qty(String, i64),
    Cart,
    ClearCart,
    Wish(String),
    Unwish(String),
    Wishlist,
    Move(String),
    Login { email: String, password: String },
    Logout,
    WhoAmI,
    History,
    Reset,
    /// Known command with wrong arguments; carries the usage line
    Usage(&'static str),
    Unknown(String),
}

impl ShopCommand {
    /// Parse a line starting with `/`.
    pub fn parse(line: &str) -> Self {
        let mut parts = line.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        let one = |usage: &'static str, build: fn(String) -> ShopCommand| match args.as_slice() {
            [arg] => build(arg.to_string()),
            _ => ShopCommand::Usage(usage),
        };

        match name {
            "/help" | "/h" | "/?" => ShopCommand::Help,
            "/quit" | "/exit" | "/q" => ShopCommand::Quit,
            "/show" => one("/show <id>", ShopCommand::Show),
            "/search" if !args.is_empty() => ShopCommand::Search(args.join(" ")),
            "/search" => ShopCommand::Usage("/search <text>"),
            "/add" => one("/add <id>", ShopCommand::Add),
            "/remove" => one("/remove <id>", ShopCommand::Remove),
            "/qty" => match args.as_slice() {
                [id, qty] => match qty.parse::<i64>() {
                    Ok(qty) => ShopCommand::Qty(id.to_string(), qty),
                    Err(_) => ShopCommand::Usage("/qty <id> <number>"),
                },
                _ => ShopCommand::Usage("/qty <id> <number>"),
            },
            "/cart" => ShopCommand::Cart,
            "/clear-cart" => ShopCommand::ClearCart,
            "/wish" => one("/wish <id>", ShopCommand::Wish),
            "/unwish" => one("/unwish <id>", ShopCommand::Unwish),
            "/wishlist" => ShopCommand::Wishlist,
            "/move" => one("/move <id>", ShopCommand::Move),
            "/login" => match args.as_slice() {
                [email, password] => ShopCommand::Login {
                    email: email.to_string(),
                    password: password.to_string(),
                },
                _ => ShopCommand::Usage("/login <email> <password>"),
            },
            "/logout" => ShopCommand::Logout,
            "/whoami" => ShopCommand::WhoAmI,
            "/history" => ShopCommand::History,
            "/reset" => ShopCommand::Reset,
            other => ShopCommand::Unknown(other.to_string()),
        }
    }

    /// Quantity the UI hands to the cart: never below 1
    pub fn clamp_qty(qty: i64) -> u32 {
        qty.clamp(1, i64::from(u32::MAX)) as u32
    }
}
