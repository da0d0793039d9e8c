//! Built-in storefront catalog

use chrono::NaiveDate;
use storefront_domain::{Catalog, Category, Product, Review};

fn image(slug: &str) -> String {
    format!("/images/products/{slug}.jpg")
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // Literal dates below are all valid.
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn products() -> Vec<Product> {
    vec![
        Product::new("1", "MacBook Pro 14-inch Laptop", 1999.99, Category::Electronics)
            .with_rating(4.7, 3)
            .with_image(image("macbook-pro"))
            .with_images([image("macbook-pro-side"), image("macbook-pro-open")])
            .with_description(
                "Apple M3 Pro laptop with a Liquid Retina XDR display and all-day battery, \
                 built for demanding professional work.",
            )
            .with_spec("Processor", "Apple M3 Pro")
            .with_spec("Memory", "18GB unified memory")
            .with_spec("Storage", "512GB SSD")
            .with_spec("Display", "14.2-inch Liquid Retina XDR")
            .with_spec("Battery", "Up to 18 hours")
            .featured(),
        Product::new("2", "Dell XPS 13 Laptop", 1299.99, Category::Electronics)
            .with_rating(4.5, 0)
            .with_image(image("dell-xps-13"))
            .with_description(
                "Compact 13-inch laptop with an edge-to-edge display, machined aluminium \
                 chassis and a comfortable backlit keyboard.",
            )
            .with_spec("Processor", "Intel Core Ultra 7")
            .with_spec("Memory", "16GB LPDDR5x")
            .with_spec("Storage", "512GB SSD")
            .with_spec("Display", "13.4-inch FHD+"),
        Product::new("3", "Lenovo ThinkPad X1 Carbon", 1549.00, Category::Electronics)
            .with_rating(4.6, 0)
            .with_image(image("thinkpad-x1"))
            .with_description(
                "Lightweight business laptop with a legendary keyboard, strong security \
                 features and a carbon-fibre body.",
            )
            .with_spec("Processor", "Intel Core i7")
            .with_spec("Memory", "32GB")
            .with_spec("Storage", "1TB SSD")
            .with_spec("Weight", "1.12 kg"),
        Product::new("4", "Sony Wireless Party Speaker", 249.99, Category::Electronics)
            .with_rating(4.5, 2)
            .with_image(image("sony-speaker"))
            .with_description(
                "Portable Bluetooth speaker with deep bass, 24-hour battery and an \
                 IP67 rating for outdoor music.",
            )
            .with_spec("Battery", "24 hours")
            .with_spec("Water resistance", "IP67")
            .featured(),
        Product::new("5", "Bose SoundLink Flex Speaker", 149.00, Category::Electronics)
            .with_rating(4.4, 0)
            .with_image(image("bose-soundlink"))
            .with_description("Rugged, compact Bluetooth speaker with clear, balanced audio.")
            .with_spec("Battery", "12 hours")
            .with_spec("Connectivity", "Bluetooth 5.3"),
        Product::new("6", "Apple Watch Series 9", 399.00, Category::Electronics)
            .with_rating(4.8, 0)
            .with_image(image("apple-watch-9"))
            .with_description(
                "Smartwatch with heart-rate, sleep and fitness tracking and a bright \
                 always-on display.",
            )
            .with_spec("Case size", "45mm")
            .with_spec("Water resistance", "50m")
            .featured(),
        Product::new("7", "Garmin Forerunner 265 Watch", 449.99, Category::Sports)
            .with_rating(4.7, 0)
            .with_image(image("garmin-forerunner"))
            .with_description(
                "GPS running watch with AMOLED display, training readiness and \
                 recovery insights.",
            )
            .with_spec("Battery", "Up to 13 days")
            .with_spec("GPS", "Multi-band"),
        Product::new("8", "Nike Air Zoom Pegasus 40", 129.99, Category::Sports)
            .with_rating(4.3, 3)
            .with_image(image("nike-pegasus"))
            .with_description("Responsive everyday running shoe with Zoom Air cushioning.")
            .with_spec("Drop", "10mm")
            .with_spec("Weight", "280g"),
        Product::new("9", "Adidas Ultraboost Light", 189.99, Category::Sports)
            .with_rating(4.5, 0)
            .with_image(image("adidas-ultraboost"))
            .with_description("Lightweight cushioned shoe for long runs and daily training.")
            .with_spec("Drop", "10mm")
            .with_spec("Upper", "Primeknit")
            .with_in_stock(false),
        Product::new("10", "Organic Cotton Oxford Shirt", 59.00, Category::Fashion)
            .with_rating(4.2, 0)
            .with_image(image("oxford-shirt"))
            .with_description("Classic button-down shirt in breathable organic cotton.")
            .with_spec("Material", "100% organic cotton")
            .with_spec("Fit", "Regular"),
        Product::new("11", "Ceramic Pour-Over Coffee Set", 48.00, Category::Home)
            .with_rating(4.0, 1)
            .with_image(image("pour-over-set"))
            .with_description("Hand-glazed dripper and carafe for slow morning coffee in the kitchen.")
            .with_spec("Capacity", "600ml")
            .with_spec("Material", "Stoneware"),
        Product::new("12", "Rattan Table Lamp", 89.00, Category::Home)
            .with_rating(4.6, 0)
            .with_image(image("rattan-lamp"))
            .with_description("Hand-woven rattan shade casting a warm, patterned glow.")
            .with_spec("Height", "45cm")
            .with_spec("Bulb", "E27, not included")
            .featured(),
    ]
}

fn reviews() -> Vec<Review> {
    vec![
        Review::new("r1", "1", "Sarah K.", 5, date(2024, 1, 15))
            .with_text("Best laptop I've owned", "Fast, silent and the screen is stunning.")
            .with_helpful(24),
        Review::new("r2", "1", "Michael T.", 5, date(2024, 1, 28))
            .with_text("Worth every penny", "Compiles our whole codebase in half the time.")
            .with_helpful(12),
        Review::new("r3", "1", "Priya N.", 4, date(2024, 2, 3))
            .with_text("Great, but pricey", "Excellent machine. Upgrades cost too much.")
            .with_helpful(7),
        Review::new("r4", "4", "Jordan P.", 5, date(2024, 3, 11))
            .with_text("Loud and clear", "Took it to the beach, sounded great all day.")
            .with_helpful(9),
        Review::new("r5", "4", "Emily R.", 4, date(2024, 3, 20))
            .with_text("Solid speaker", "Bass is strong, app is a bit clunky.")
            .with_helpful(3),
        Review::new("r6", "8", "Chris D.", 5, date(2024, 4, 2))
            .with_text("My go-to trainer", "Comfortable from the first run.")
            .with_helpful(15),
        Review::new("r7", "8", "Alex M.", 4, date(2024, 4, 18))
            .with_text("Good all-rounder", "Runs slightly small, size up half.")
            .with_helpful(6),
        Review::new("r8", "8", "Taylor B.", 4, date(2024, 5, 6))
            .with_text("Reliable", "Second pair now, no complaints.")
            .with_helpful(2),
        Review::new("r9", "11", "Morgan L.", 4, date(2024, 5, 21))
            .with_text("Lovely set", "Pours evenly. Carafe lid fits loosely.")
            .with_helpful(1),
    ]
}

/// The built-in catalog
pub fn seed_catalog() -> Catalog {
    Catalog::new(products(), reviews())
}
