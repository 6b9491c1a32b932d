//! # Dunn Delivery CLI
//!
//! Terminal front end for the Dunn Delivery order counter.
//!
//! ## Module Organization
//! ```text
//! dunn_cli/
//! ├── lib.rs          ◄─── You are here (arguments, logging, dispatch)
//! ├── config.rs       ◄─── Environment configuration
//! ├── prompt.rs       ◄─── Console: Y/N, budget and rating prompts
//! ├── receipt.rs      ◄─── Menu and order summary text
//! └── error.rs        ◄─── CliError and exit codes
//! ```
//!
//! ## Order Session
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  dunn order --location "ITEC Computer Lab" --item "Cold Press"          │
//! │             --item Colombiano --hour 9 --student                        │
//! │                                                                         │
//! │  1. validate_hour(9)                 (boundary check)                   │
//! │  2. OrderService::price_order        → summary printed                  │
//! │  3. "Would you like priority delivery? (Y/N)"  (unless --priority)      │
//! │  4. OrderService::finalize(yes/no)   → outcome printed                  │
//! │  5. "Enter your delivery rating"     (unless --rating)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod prompt;
pub mod receipt;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use dunn_core::validation::validate_hour;
use dunn_core::{Catalog, DeliveryEstimator, Money, Order, OrderService, PricingEngine};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use config::AppConfig;
use error::CliError;
use prompt::Console;

// =============================================================================
// Arguments
// =============================================================================

#[derive(Debug, Parser)]
#[command(name = "dunn", version, about = "Campus delivery order counter")]
pub struct Cli {
    /// Load the menu from a JSON file instead of the standard campus menu
    #[arg(long, global = true, value_name = "PATH")]
    pub menu: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the menu, or one category of it
    Menu {
        #[arg(long)]
        category: Option<String>,

        /// Print the menu as a JSON document that `--menu` can load back
        #[arg(long, conflicts_with = "category")]
        json: bool,
    },

    /// List items priced at or below a budget
    Budget {
        /// Dollar amount such as 3.00 (asked for when omitted)
        amount: Option<String>,
    },

    /// Price an order and print the summary
    Order(OrderArgs),
}

#[derive(Debug, Args)]
pub struct OrderArgs {
    /// Delivery location, e.g. "Library"
    #[arg(long)]
    pub location: String,

    /// Item to order; repeat for more items or for two of the same
    #[arg(long = "item", required = true, value_name = "NAME")]
    pub items: Vec<String>,

    /// Current hour on the 24-hour clock (0-23)
    #[arg(long, allow_negative_numbers = true)]
    pub hour: i32,

    /// Customer has a student ID
    #[arg(long)]
    pub student: bool,

    /// Answer the priority delivery question up front (yes/no)
    #[arg(long, value_parser = parse_yes_no)]
    pub priority: Option<bool>,

    /// Delivery rating; any whole number is accepted
    #[arg(long, allow_negative_numbers = true)]
    pub rating: Option<i64>,

    /// Print the final result as JSON instead of a receipt (no prompts)
    #[arg(long)]
    pub json: bool,
}

fn parse_yes_no(value: &str) -> Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "y" | "yes" | "true" => Ok(true),
        "n" | "no" | "false" => Ok(false),
        other => Err(format!("expected yes or no, got '{other}'")),
    }
}

// =============================================================================
// Entry Point
// =============================================================================

/// Parses arguments, runs one command, and maps failure to an exit code.
pub fn run() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    let config = AppConfig::from_env().with_menu_override(cli.menu.clone());
    debug!(?config, "Configuration loaded");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    match execute(&cli.command, &config, &mut console) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show engine decisions (totals, minutes)
/// - `RUST_LOG=dunn=trace` - Trace for dunn crates only
/// - Default: WARN, so receipts are not interleaved with log lines
///
/// Logs go to stderr; stdout carries only receipts and JSON.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Runs one command against the configured catalog.
pub fn execute<R: BufRead, W: Write>(
    command: &Command,
    config: &AppConfig,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    let custom;
    let catalog = match &config.menu_path {
        Some(path) => {
            custom = load_catalog(path)?;
            info!(path = %path.display(), "Using custom menu");
            &custom
        }
        None => Catalog::standard(),
    };

    let service = OrderService::new(PricingEngine::new(catalog), DeliveryEstimator::standard());

    match command {
        Command::Menu { category, json } => {
            show_menu(&service, category.as_deref(), *json, console)
        }
        Command::Budget { amount } => show_budget(&service, amount.as_deref(), console),
        Command::Order(args) => take_order(&service, config, args, console),
    }
}

fn load_catalog(path: &Path) -> Result<Catalog, CliError> {
    let json = std::fs::read_to_string(path).map_err(|source| CliError::MenuFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Catalog::from_json(&json)?)
}

// =============================================================================
// Commands
// =============================================================================

fn show_menu<R: BufRead, W: Write>(
    service: &OrderService<'_>,
    category: Option<&str>,
    json: bool,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    if json {
        let json = serde_json::to_string_pretty(&service.catalog().to_document())?;
        return console.print(&format!("{json}\n"));
    }

    let text = match category {
        Some(name) => receipt::render_category(name, service.list_category(name)?),
        None => receipt::render_menu(service.list_all()),
    };
    console.print(&text)
}

fn show_budget<R: BufRead, W: Write>(
    service: &OrderService<'_>,
    amount: Option<&str>,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    let budget = match amount {
        Some(text) => text.parse::<Money>()?,
        None => console.ask_money("\nEnter your budget price amount:\n")?,
    };

    let items = service.items_under_budget(budget);
    debug!(%budget, matches = items.len(), "Budget search");
    console.print(&receipt::render_budget(budget, &items))
}

fn take_order<R: BufRead, W: Write>(
    service: &OrderService<'_>,
    config: &AppConfig,
    args: &OrderArgs,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    validate_hour(args.hour)?;
    let order = Order::new(
        args.location.as_str(),
        args.items.iter().map(String::as_str),
        args.hour,
        args.student,
    )?;

    let quote = service.price_order(&order)?;

    if args.json {
        let result = service.finalize(quote, args.priority.unwrap_or(false))?;
        let json = serde_json::to_string_pretty(&result)?;
        return console.print(&format!("{json}\n"));
    }

    console.print(&receipt::render_summary(&config.store_name, &quote))?;

    let priority = match args.priority {
        Some(answer) => answer,
        None => console.ask_yes_no("\nWould you like priority delivery? (Y/N): ")?,
    };
    let result = service.finalize(quote, priority)?;
    console.print(&receipt::render_priority_outcome(&result))?;

    let rating = match args.rating {
        Some(rating) => Some(rating),
        None => console.ask_rating("\nEnter your delivery rating: ")?,
    };
    if let Some(rating) = rating {
        info!(rating, location = %result.location, "Delivery rated");
        console.print(&receipt::render_rating(rating))?;
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use dunn_core::CoreError;

    fn run_command(args: &[&str], input: &str) -> Result<String, CliError> {
        let cli = Cli::try_parse_from(std::iter::once("dunn").chain(args.iter().copied()))
            .expect("arguments should parse");
        let config = AppConfig::default().with_menu_override(cli.menu.clone());
        let mut console = Console::new(input.as_bytes(), Vec::new());
        execute(&cli.command, &config, &mut console)?;
        Ok(String::from_utf8(console.into_output()).unwrap())
    }

    const SCENARIO: &[&str] = &[
        "order",
        "--location",
        "ITEC Computer Lab",
        "--item",
        "Cold Press",
        "--item",
        "Colombiano",
        "--hour",
        "9",
        "--student",
    ];

    #[test]
    fn test_menu_single_category() {
        let out = run_command(&["menu", "--category", "Coffee Drinks"], "").unwrap();
        assert!(out.starts_with("\n=== Coffee Drinks ===\n"));
        assert!(out.contains("Colombiano: $8.95\n"));
        assert!(!out.contains("Monster"));
    }

    #[test]
    fn test_menu_json_loads_back_as_catalog() {
        let out = run_command(&["menu", "--json"], "").unwrap();
        let catalog = Catalog::from_json(&out).unwrap();
        assert_eq!(catalog.categories(), Catalog::standard().categories());
        assert_eq!(catalog.price_of("Muffin").unwrap().cents(), 299);
    }

    #[test]
    fn test_menu_json_conflicts_with_category() {
        let parsed = Cli::try_parse_from(["dunn", "menu", "--json", "--category", "Snacks"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_menu_unknown_category() {
        let err = run_command(&["menu", "--category", "Desserts"], "").unwrap_err();
        assert!(matches!(err, CliError::Core(CoreError::UnknownCategory(_))));
    }

    #[test]
    fn test_budget_from_argument_and_prompt() {
        let out = run_command(&["budget", "3.00"], "").unwrap();
        assert!(out.contains("Cold Press: $2.49\nBagel: $2.99\nMuffin: $2.99\nScone: $2.99\n"));
        assert!(!out.contains("Monster"));

        let out = run_command(&["budget"], "2.50\n").unwrap();
        assert!(out.contains("Enter your budget price amount:"));
        assert!(out.contains("Cold Press: $2.49\n"));
        assert!(!out.contains("Bagel"));
    }

    #[test]
    fn test_order_interactive_priority_yes() {
        let out = run_command(SCENARIO, "y\n5\n").unwrap();
        assert!(out.contains("Total after discount: $10.30\n"));
        assert!(out.contains("Estimated delivery time: 10 minutes\n"));
        assert!(out.contains("Priority delivery total: $12.30\n"));
        assert!(out.contains("New estimated delivery time: 7 minutes\n"));
        assert!(out.contains("You gave this delivery a rating of 5\n"));
    }

    #[test]
    fn test_order_interactive_priority_no_and_no_rating() {
        let out = run_command(SCENARIO, "N\n").unwrap();
        assert!(out.contains("remain the same"));
        assert!(!out.contains("Priority delivery total"));
        assert!(!out.contains("You gave this delivery"));
    }

    #[test]
    fn test_order_flags_skip_prompts() {
        let mut args = SCENARIO.to_vec();
        args.extend(["--priority", "yes", "--rating", "9"]);
        let out = run_command(&args, "").unwrap();
        assert!(!out.contains("(Y/N)"));
        assert!(out.contains("Priority delivery total: $12.30\n"));
        assert!(out.contains("rating of 9"));
    }

    #[test]
    fn test_order_json() {
        let mut args = SCENARIO.to_vec();
        args.extend(["--priority", "y", "--json"]);
        let out = run_command(&args, "").unwrap();

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["subtotal"], 1144);
        assert_eq!(value["total"], 1030);
        assert_eq!(value["priority"]["total"], 1230);
        assert_eq!(value["priority"]["delivery_minutes"], 7);
        assert_eq!(value["status"], "finalized_priority");
    }

    #[test]
    fn test_order_rejects_bad_hour_before_pricing() {
        let args = ["order", "--location", "Library", "--item", "Latte", "--hour", "24"];
        let err = run_command(&args, "").unwrap_err();
        assert!(matches!(err, CliError::Validation(_)));
    }

    #[test]
    fn test_order_unknown_item() {
        let args = ["order", "--location", "Library", "--item", "Mufin", "--hour", "8"];
        let err = run_command(&args, "").unwrap_err();
        assert!(matches!(err, CliError::Core(CoreError::UnknownItem(name)) if name == "Mufin"));
    }

    #[test]
    fn test_missing_menu_file() {
        let err = run_command(&["--menu", "/nonexistent/menu.json", "menu"], "").unwrap_err();
        assert!(matches!(err, CliError::MenuFile { .. }));
    }

    #[test]
    fn test_parse_yes_no() {
        assert_eq!(parse_yes_no("Y"), Ok(true));
        assert_eq!(parse_yes_no("no"), Ok(false));
        assert!(parse_yes_no("maybe").is_err());
    }
}
