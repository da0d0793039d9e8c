//! Console output formatter for catalog and store state

use colored::Colorize;
use storefront_domain::{
    CartStore, ChatMessage, ChatRole, Product, Recommendation, Review, User, WishlistStore,
};

/// Formats storefront data for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Price with its currency, `$` for USD
    pub fn price(amount: f64, currency: &str) -> String {
        match currency {
            "USD" => format!("${:.2}", amount),
            "EUR" => format!("€{:.2}", amount),
            "GBP" => format!("£{:.2}", amount),
            other => format!("{:.2} {}", amount, other),
        }
    }

    /// Five-star bar for a 0-5 rating
    pub fn stars(rating: f64) -> String {
        let filled = rating.round().clamp(0.0, 5.0) as usize;
        format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
    }

    /// One-line product summary
    pub fn product_line(product: &Product) -> String {
        let mut line = format!(
            "{:>4}  {}  {}  {} {}",
            format!("[{}]", product.id).dimmed(),
            product.title.bold(),
            Self::price(product.price, &product.currency).green(),
            Self::stars(product.rating).yellow(),
            format!("({})", product.category).dimmed()
        );
        if product.featured {
            line.push_str(&format!(" {}", "featured".magenta()));
        }
        if !product.in_stock {
            line.push_str(&format!(" {}", "out of stock".red()));
        }
        line
    }

    pub fn product_list(products: &[Product]) -> String {
        if products.is_empty() {
            return format!("{}\n", "No products found.".dimmed());
        }
        let mut output = String::new();
        for product in products {
            output.push_str(&Self::product_line(product));
            output.push('\n');
        }
        output.push_str(&format!("{}\n", format!("{} product(s)", products.len()).dimmed()));
        output
    }

    /// Full product page: description, specifications and reviews
    pub fn product_detail(product: &Product, reviews: &[Review], average: f64) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&product.title));
        output.push_str(&format!(
            "{} {}   {} {}\n",
            "Price:".cyan().bold(),
            Self::price(product.price, &product.currency),
            "Category:".cyan().bold(),
            product.category
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Availability:".cyan().bold(),
            if product.in_stock {
                "In stock".green()
            } else {
                "Out of stock".red()
            }
        ));
        if !product.description.is_empty() {
            output.push_str(&format!("\n{}\n", product.description));
        }

        if !product.specifications.is_empty() {
            output.push_str(&Self::section_header("Specifications"));
            let width = product
                .specifications
                .iter()
                .map(|(label, _)| label.chars().count())
                .max()
                .unwrap_or(0);
            for (label, value) in product.specifications.iter() {
                output.push_str(&format!("  {:<width$}  {}\n", label, value, width = width));
            }
        }

        output.push_str(&Self::section_header("Reviews"));
        if reviews.is_empty() {
            output.push_str(&format!("  {}\n", "No reviews yet.".dimmed()));
        } else {
            output.push_str(&format!(
                "  {} {} ({} review(s))\n",
                Self::stars(average).yellow(),
                format!("{:.1}", average).bold(),
                reviews.len()
            ));
            for review in reviews {
                output.push_str(&Self::review(review));
            }
        }

        output
    }

    pub fn review(review: &Review) -> String {
        let mut output = format!(
            "\n  {} {}  {}\n",
            Self::stars(f64::from(review.rating)).yellow(),
            review.title.bold(),
            format!("{} on {}", review.author, review.date).dimmed()
        );
        if !review.comment.is_empty() {
            output.push_str(&format!("  {}\n", review.comment));
        }
        if review.helpful > 0 {
            output.push_str(&format!(
                "  {}\n",
                format!("{} people found this helpful", review.helpful).dimmed()
            ));
        }
        output
    }

    /// Cart lines with item count and subtotal
    pub fn cart(cart: &CartStore) -> String {
        if cart.is_empty() {
            return format!("{}\n", "Your cart is empty.".dimmed());
        }
        let mut output = Self::section_header("Cart");
        for item in cart.items() {
            output.push_str(&format!(
                "  {:>4}  {} x{}  {}\n",
                format!("[{}]", item.id()).dimmed(),
                item.product.title,
                item.quantity,
                Self::price(item.line_total(), &item.product.currency).green()
            ));
        }
        let currency = cart
            .items()
            .first()
            .map(|i| i.product.currency.as_str())
            .unwrap_or("USD");
        output.push_str(&format!(
            "\n  {} {}   {} {}\n",
            "Items:".cyan().bold(),
            cart.item_count(),
            "Subtotal:".cyan().bold(),
            Self::price(cart.subtotal(), currency).green().bold()
        ));
        output
    }

    pub fn wishlist(wishlist: &WishlistStore) -> String {
        if wishlist.is_empty() {
            return format!("{}\n", "Your wishlist is empty.".dimmed());
        }
        let mut output = Self::section_header("Wishlist");
        for product in wishlist.items() {
            output.push_str(&format!("  {}\n", Self::product_line(product)));
        }
        output
    }

    /// A chat message with any suggested products under it
    pub fn chat_message(message: &ChatMessage) -> String {
        let speaker = match message.role {
            ChatRole::User => "You".blue().bold(),
            ChatRole::Assistant => "Assistant".green().bold(),
        };
        let mut output = format!("{} {}\n", format!("{}:", speaker), message.text);
        for product in &message.products {
            output.push_str(&format!("  {}\n", Self::product_line(product)));
        }
        output
    }

    pub fn recommendation(recommendation: &Recommendation) -> String {
        Self::chat_message(&ChatMessage::assistant(
            recommendation.reply.clone(),
            recommendation.products.clone(),
        ))
    }

    pub fn user(user: Option<&User>) -> String {
        match user {
            Some(user) => format!(
                "Signed in as {} {}\n",
                user.name.bold(),
                format!("<{}>", user.email).dimmed()
            ),
            None => format!("{}\n", "Not signed in.".dimmed()),
        }
    }

    fn header(title: &str) -> String {
        format!(
            "{}\n{}\n{}\n",
            "=".repeat(60).cyan(),
            title.cyan().bold(),
            "=".repeat(60).cyan()
        )
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n", format!("── {} ──", title).yellow().bold())
    }
}
