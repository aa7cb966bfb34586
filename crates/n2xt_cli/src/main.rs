//! Command-line driver for the storefront core.
//!
//! # Responsibility
//! - Exercise core entry points against a file-backed store.
//! - Print the notification and badge state the UI would render.

use clap::{Parser, Subcommand};
use n2xt_core::{
    core_version, filter_visible, init_logging_from_config, AddOutcome, CoreConfig, FieldKind,
    FormField, KeyValueStore, NotificationKind, SqliteStore, Storefront, SystemClock,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

const WAIT_POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Parser)]
#[command(name = "n2xt", about = "N2XT storefront core driver")]
struct Cli {
    /// SQLite file holding the durable records.
    #[arg(long, default_value = "n2xt.sqlite3")]
    store: PathBuf,
    /// Optional JSON config file.
    #[arg(long)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Add one unit of a product to the cart.
    Add { id: String, name: String, price: f64 },
    /// Print the cart badge count.
    Count,
    /// Print every cart line.
    List,
    /// Show a notification.
    Notify {
        message: String,
        #[arg(long, default_value = "info")]
        kind: String,
        /// Block until the notification auto-dismisses.
        #[arg(long)]
        wait: bool,
    },
    /// Print the saved theme.
    Theme,
    /// Flip and save the theme.
    ToggleTheme,
    /// Validate a contact form submission.
    CheckForm {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long)]
        phone: Option<String>,
    },
    /// Print the `name:tag` items visible under a filter value.
    Filter { selected: String, items: Vec<String> },
    /// Print the core version.
    Version,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let config = match &cli.config {
        Some(path) => CoreConfig::from_file(path).map_err(|err| err.to_string())?,
        None => CoreConfig::default(),
    };
    init_logging_from_config(&config)?;

    match cli.command {
        Command::Version => {
            println!("n2xt_core version={}", core_version());
            Ok(())
        }
        Command::Filter { selected, items } => {
            let visible = filter_visible(&items, &selected, |item| {
                item.rsplit_once(':').map_or("", |(_, tag)| tag)
            });
            for item in visible {
                println!("{item}");
            }
            Ok(())
        }
        command => {
            let store = SqliteStore::open(&cli.store).map_err(|err| err.to_string())?;
            run_with_store(&store, &config, command)
        }
    }
}

fn run_with_store<S: KeyValueStore>(
    store: &S,
    config: &CoreConfig,
    command: Command,
) -> Result<(), String> {
    let mut storefront = Storefront::open(store, SystemClock::new(), config);

    match command {
        Command::Add { id, name, price } => {
            match storefront.add_to_cart(&id, &name, price) {
                AddOutcome::Rejected(err) => return Err(err.to_string()),
                AddOutcome::Added { line } | AddOutcome::AddedNotPersisted { line, .. } => {
                    println!("{} x{}", line.id, line.quantity);
                }
            }
            print_notification(&storefront);
            println!("badge={}", storefront.total_item_count());
        }
        Command::Count => {
            println!(
                "badge={} visible={}",
                storefront.total_item_count(),
                storefront.badge_visible()
            );
        }
        Command::List => {
            for item in storefront.cart_items() {
                println!(
                    "{}\t{}\t{:.2}\t{}",
                    item.id, item.name, item.price, item.quantity
                );
            }
            println!("total={:.2}", storefront.ledger().total_price());
        }
        Command::Notify {
            message,
            kind,
            wait,
        } => {
            let kind = NotificationKind::parse(&kind)
                .ok_or_else(|| format!("unknown notification kind `{kind}`"))?;
            storefront.notify(message, kind);
            print_notification(&storefront);
            if wait {
                while storefront.poll().is_none() {
                    std::thread::sleep(WAIT_POLL_INTERVAL);
                }
                println!("dismissed");
            }
        }
        Command::Theme => println!("{}", storefront.theme().as_str()),
        Command::ToggleTheme => println!("{}", storefront.toggle_theme().as_str()),
        Command::CheckForm { name, email, phone } => {
            let mut fields = vec![
                FormField::required("name", FieldKind::Text, name),
                FormField::required("email", FieldKind::Email, email),
            ];
            if let Some(phone) = phone {
                fields.push(FormField::required("phone", FieldKind::Tel, phone));
            }
            for error in storefront.submit_form(&fields) {
                println!("{}: {}", error.field, error.message);
            }
            print_notification(&storefront);
        }
        Command::Filter { .. } | Command::Version => {}
    }

    Ok(())
}

fn print_notification<S: KeyValueStore>(storefront: &Storefront<'_, S, SystemClock>) {
    if let Some(notification) = storefront.current_notification() {
        println!(
            "[{}] {} ({})",
            notification.kind.as_str(),
            notification.message,
            notification.kind.icon()
        );
    }
}
