use anyhow::{Context, Result, anyhow};
use catalog::{Cents, ProductRecord, load_product};
use clap::{Parser, Subcommand};
use colored::Colorize;
use pipeline::render::DEFAULT_MEDIA_HOST;
use pipeline::{MediaHostRenderer, PriceBand, PrimeEligibility, ProductPage, SortBy};
use std::path::PathBuf;
use std::sync::Arc;

/// Product page composer
#[derive(Parser)]
#[command(name = "product-page")]
#[command(about = "Compose product detail page content from a product record", long_about = None)]
struct Cli {
    /// Path to a JSON product document
    #[arg(short, long)]
    product: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the product and its winning buying option
    Summary,

    /// List similar products, filtered and sorted
    Similar {
        /// Sort token, e.g. PRICE_LOW_TO_HIGH. Unknown tokens keep upstream order
        #[arg(long)]
        sort_by: Option<String>,

        /// Minimum price in cents (inclusive)
        #[arg(long)]
        min_price: Option<Cents>,

        /// Maximum price in cents (inclusive)
        #[arg(long)]
        max_price: Option<Cents>,

        /// Prime option: all, prime-only, free-shipping, same-day
        #[arg(long, default_value = "all")]
        prime: String,
    },

    /// Show the main and LOOK image URLs
    Images {
        /// Longest side of the rendered image in pixels
        #[arg(long, default_value = "500")]
        longest: u32,

        /// Media host used to render image URLs
        #[arg(long, default_value = DEFAULT_MEDIA_HOST)]
        media_host: String,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let product = load_product(&cli.product)
        .with_context(|| format!("Failed to load product from {}", cli.product.display()))?;
    // Only the images command renders URLs; the others get the default host
    let media_host = match &cli.command {
        Commands::Images { media_host, .. } => media_host.as_str(),
        _ => DEFAULT_MEDIA_HOST,
    };
    let page = ProductPage::new(product, Arc::new(MediaHostRenderer::new(media_host)));

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Summary => handle_summary(&page),
        Commands::Similar {
            sort_by,
            min_price,
            max_price,
            prime,
        } => handle_similar(&page, sort_by.as_deref(), min_price, max_price, &prime)?,
        Commands::Images { longest, .. } => handle_images(&page, longest)?,
    }

    Ok(())
}

/// Handle the 'summary' command
fn handle_summary(page: &ProductPage) {
    let product = page.product();
    println!("{}", format!("{} {}", product.asin, product.title).bold().blue());
    println!("{}Price: {}", "• ".green(), format_price(product.price));
    println!(
        "{}Total benefit: {}",
        "• ".green(),
        format_price(product.total_benefit_amount)
    );
    println!("{}Valid: {}", "• ".green(), product.is_valid());
    println!(
        "{}Similar products: {} (before filtering)",
        "• ".cyan(),
        product.similar_products().len()
    );
    println!("{}Images: {}", "• ".cyan(), product.images().len());

    match page.first_buying_option() {
        Some(option) => println!(
            "{}Buying option: {} from {} at {}",
            "• ".cyan(),
            option.offer_id,
            option.merchant,
            format_price(option.price)
        ),
        None => println!("{}Buying option: {}", "• ".cyan(), "none".dimmed()),
    }
}

/// Handle the 'similar' command
fn handle_similar(
    page: &ProductPage,
    sort_token: Option<&str>,
    min_price: Option<Cents>,
    max_price: Option<Cents>,
    prime: &str,
) -> Result<()> {
    let prime_option = PrimeEligibility::parse(prime)
        .ok_or_else(|| anyhow!("Unknown prime option '{}'", prime))?;
    let price_band = PriceBand::new(min_price, max_price);

    let sort_by = sort_token.and_then(SortBy::parse);
    if let (Some(token), None) = (sort_token, sort_by) {
        tracing::warn!("Unknown sort key '{}', keeping upstream order", token);
    }

    let similar = page.similar_products(sort_by, &price_band, &prime_option)?;
    print_products(&similar, sort_by);
    Ok(())
}

/// Handle the 'images' command
fn handle_images(page: &ProductPage, longest: u32) -> Result<()> {
    let main = page.main_image_url(longest)?;
    let look = page.look_image_url(longest)?;

    println!("{}", "Images:".bold().blue());
    print_image("Main", main.as_deref());
    print_image("Look", look.as_deref());
    Ok(())
}

fn print_products(products: &[&ProductRecord], sort_by: Option<SortBy>) {
    let order = sort_by
        .map(|sort_by| sort_by.to_string())
        .unwrap_or_else(|| "upstream order".to_string());
    println!(
        "{}",
        format!("Similar products ({}, {}):", products.len(), order)
            .bold()
            .blue()
    );
    for (index, product) in products.iter().enumerate() {
        println!(
            "{}. {} {} - {} (benefit {})",
            (index + 1).to_string().green(),
            product.asin,
            product.title,
            format_price(product.price),
            format_price(product.total_benefit_amount)
        );
    }
}

fn print_image(label: &str, url: Option<&str>) {
    match url {
        Some(url) => println!("{}{}: {}", "• ".green(), label, url),
        None => println!("{}{}: {}", "• ".green(), label, "not found".dimmed()),
    }
}

fn format_price(cents: Cents) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}
