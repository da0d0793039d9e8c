//! REPL (Read-Eval-Print Loop) for the interactive shop

use super::command::ShopCommand;
use crate::ConsoleFormatter;
use crate::LoadingSpinner;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;
use std::sync::Arc;
use storefront_application::{
    AuthenticateUseCase, SendChatUseCase, StorefrontGateway, StorefrontSession,
};
use storefront_domain::Product;

/// Outcome of one command
enum CommandResult {
    Continue,
    Exit,
}

/// Interactive shop REPL
///
/// Owns the session stores for as long as the loop runs.
pub struct ShopRepl<G: StorefrontGateway + 'static> {
    gateway: Arc<G>,
    chat: SendChatUseCase<G>,
    auth: AuthenticateUseCase<G>,
    session: StorefrontSession,
    spinner: LoadingSpinner,
    history_file: Option<PathBuf>,
}

impl<G: StorefrontGateway + 'static> ShopRepl<G> {
    /// Create a new ShopRepl
    pub fn new(gateway: Arc<G>, session: StorefrontSession) -> Self {
        Self {
            chat: SendChatUseCase::new(Arc::clone(&gateway)),
            auth: AuthenticateUseCase::new(Arc::clone(&gateway)),
            gateway,
            session,
            spinner: LoadingSpinner::default(),
            history_file: dirs::data_dir().map(|p| p.join("storefront").join("history.txt")),
        }
    }

    /// Set whether to show loading spinners
    pub fn with_progress(mut self, show: bool) -> Self {
        self.spinner = LoadingSpinner::new(show);
        self
    }

    /// Override the history file location
    pub fn with_history_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.history_file = Some(path.into());
        self
    }

    pub fn session(&self) -> &StorefrontSession {
        &self.session
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(ref path) = self.history_file {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let prompt = if self.session.cart.is_empty() {
                "shop> ".to_string()
            } else {
                format!("shop ({})> ", self.session.cart.item_count())
            };

            match rl.readline(&prompt) {
                Ok(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    if line.starts_with('/') {
                        match self.handle_command(&mut rl, line).await {
                            CommandResult::Exit => break,
                            CommandResult::Continue => continue,
                        }
                    }

                    self.send(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = self.history_file {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│           Storefront - Shop Mode            │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        for message in self.session.chat.messages() {
            print!("{}", ConsoleFormatter::chat_message(message));
        }
        println!();
        println!("Type what you are looking for, or /help for commands.");
        println!();
    }

    fn print_help() {
        println!();
        println!("Commands:");
        println!("  /show <id>            - Product details and reviews");
        println!("  /search <text>        - Search the catalog");
        println!("  /add <id>             - Add one to the cart");
        println!("  /remove <id>          - Remove from the cart");
        println!("  /qty <id> <n>         - Set cart quantity (minimum 1)");
        println!("  /cart                 - Show the cart");
        println!("  /clear-cart           - Empty the cart");
        println!("  /wish <id>            - Save to the wishlist");
        println!("  /unwish <id>          - Remove from the wishlist");
        println!("  /wishlist             - Show the wishlist");
        println!("  /move <id>            - Move from wishlist to cart");
        println!("  /login <email> <pw>   - Sign in");
        println!("  /logout               - Sign out");
        println!("  /whoami               - Show the signed-in user");
        println!("  /history              - Show the conversation");
        println!("  /reset                - Clear the conversation");
        println!("  /quit, /exit, /q      - Exit");
        println!();
    }

    async fn send(&mut self, text: &str) {
        let result = self
            .spinner
            .run("Assistant is typing...", self.chat.execute(&mut self.session.chat, text))
            .await;

        match result {
            Ok(recommendation) => print!("{}", ConsoleFormatter::recommendation(&recommendation)),
            Err(e) => eprintln!("{} {}", "Error:".red().bold(), e),
        }
    }

    async fn fetch_product(&self, id: &str) -> Option<Product> {
        let result = self
            .spinner
            .run("Loading product...", self.gateway.get_product_by_id(id))
            .await;

        match result {
            Ok(Some(product)) => Some(product),
            Ok(None) => {
                println!("{} {}", "No product with id".yellow(), id);
                None
            }
            Err(e) => {
                eprintln!("{} {}", "Error:".red().bold(), e);
                None
            }
        }
    }

    async fn show_product(&self, id: &str) {
        let Some(product) = self.fetch_product(id).await else {
            return;
        };
        let reviews = self
            .spinner
            .run("Loading reviews...", self.gateway.get_product_reviews(id))
            .await;
        let average = self.gateway.get_average_rating(id).await;

        match (reviews, average) {
            (Ok(reviews), Ok(average)) => {
                print!(
                    "{}",
                    ConsoleFormatter::product_detail(&product, &reviews, average)
                );
            }
            (Err(e), _) | (_, Err(e)) => eprintln!("{} {}", "Error:".red().bold(), e),
        }
    }

    async fn search(&self, query: &str) {
        match self
            .spinner
            .run("Searching...", self.gateway.search_products(query))
            .await
        {
            Ok(products) => print!("{}", ConsoleFormatter::product_list(&products)),
            Err(e) => eprintln!("{} {}", "Error:".red().bold(), e),
        }
    }

    /// Handle slash commands.
    async fn handle_command(&mut self, rl: &mut DefaultEditor, line: &str) -> CommandResult {
        match ShopCommand::parse(line) {
            ShopCommand::Quit => {
                println!("Bye!");
                return CommandResult::Exit;
            }
            ShopCommand::Help => Self::print_help(),
            ShopCommand::Show(id) => self.show_product(&id).await,
            ShopCommand::Search(query) => self.search(&query).await,
            ShopCommand::Add(id) => {
                if let Some(product) = self.fetch_product(&id).await {
                    println!("Added {} to the cart.", product.title.bold());
                    self.session.cart.add_item(product);
                }
            }
            ShopCommand::Remove(id) => {
                self.session.cart.remove_item(&id);
                print!("{}", ConsoleFormatter::cart(&self.session.cart));
            }
            ShopCommand::Qty(id, qty) => {
                self.session
                    .cart
                    .update_qty(&id, ShopCommand::clamp_qty(qty));
                print!("{}", ConsoleFormatter::cart(&self.session.cart));
            }
            ShopCommand::Cart => print!("{}", ConsoleFormatter::cart(&self.session.cart)),
            ShopCommand::ClearCart => {
                self.session.cart.clear();
                println!("Cart cleared.");
            }
            ShopCommand::Wish(id) => {
                if let Some(product) = self.fetch_product(&id).await {
                    println!("Saved {} to the wishlist.", product.title.bold());
                    self.session.wishlist.add(product);
                }
            }
            ShopCommand::Unwish(id) => {
                self.session.wishlist.remove(&id);
                print!("{}", ConsoleFormatter::wishlist(&self.session.wishlist));
            }
            ShopCommand::Wishlist => {
                print!("{}", ConsoleFormatter::wishlist(&self.session.wishlist))
            }
            ShopCommand::Move(id) => {
                if self.session.move_to_cart(&id) {
                    print!("{}", ConsoleFormatter::cart(&self.session.cart));
                } else {
                    println!("{} {}", "Not in the wishlist:".yellow(), id);
                }
            }
            ShopCommand::Login { email, password } => {
                let result = self
                    .spinner
                    .run(
                        "Signing in...",
                        self.auth.login(&mut self.session.user, &email, &password),
                    )
                    .await;
                match result {
                    Ok(user) => print!("{}", ConsoleFormatter::user(Some(&user))),
                    Err(e) => eprintln!("{} {}", "Error:".red().bold(), e),
                }
            }
            ShopCommand::Logout => {
                self.auth.logout(&mut self.session.user);
                println!("Signed out.");
            }
            ShopCommand::WhoAmI => print!("{}", ConsoleFormatter::user(self.session.user.user())),
            ShopCommand::History => {
                if self.session.chat.is_empty() {
                    println!("{}", "No messages yet.".dimmed());
                }
                for message in self.session.chat.messages() {
                    print!("{}", ConsoleFormatter::chat_message(message));
                }
            }
            ShopCommand::Reset => {
                let confirmed = matches!(
                    rl.readline("Clear the conversation? [y/N] "),
                    Ok(answer) if answer.trim().eq_ignore_ascii_case("y")
                );
                if confirmed {
                    self.session.chat.reset();
                    println!("Conversation cleared.");
                } else {
                    println!("Kept the conversation.");
                }
            }
            ShopCommand::Usage(usage) => println!("{} {}", "Usage:".yellow(), usage),
            ShopCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
            }
        }
        CommandResult::Continue
    }
}
