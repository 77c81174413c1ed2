//! Amazin CLI - cart, checkout, and catalog from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Show the cart of the stored (or default) user
//! amazin cart show
//!
//! # Add two copies of a book, reported as a toast
//! amazin cart add b1 -q 2 --quick
//!
//! # Check out, prompting for anything not given
//! amazin checkout --card-name "Ada Lovelace" --card-number 4111111111111111
//!
//! # Recommendations sorted by price
//! amazin recommend --limit 5 --sort price
//!
//! # Switch the active user
//! amazin user set reader-7
//! ```
//!
//! # Commands
//!
//! - `cart` - Show, add, remove, update, step, clear
//! - `checkout` - Place an order for the cart
//! - `books` - List, create, update, delete
//! - `orders` - Order history, or one order by id
//! - `recommend` - Personalized recommendations
//! - `user` - Show, set, or clear the active user id

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use amazin_core::UserId;
use amazin_storefront::api::BookstoreClient;
use amazin_storefront::config::StorefrontConfig;
use amazin_storefront::session::JsonFileStore;
use amazin_storefront::ui::ToastHost;
use amazin_storefront::{Capabilities, Storefront};

mod commands;
mod terminal;

use terminal::{TerminalToasts, TerminalUi};

const DEFAULT_LOG_FILTER: &str = "amazin_storefront=info,amazin_cli=info";

#[derive(Parser)]
#[command(name = "amazin")]
#[command(author, version, about = "Amazin bookstore client")]
struct Cli {
    /// Bookstore backend URL (overrides `AMAZIN_API_BASE_URL`)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Act as this user instead of the stored one
    #[arg(long, global = true)]
    user: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Place an order for everything in the cart
    Checkout(commands::checkout::CheckoutArgs),
    /// Browse and administer the catalog
    Books {
        #[command(subcommand)]
        action: BooksAction,
    },
    /// Show order history, or a single order
    Orders {
        /// Order id
        id: Option<String>,
    },
    /// Show book recommendations
    Recommend {
        /// Maximum number of books
        #[arg(short, long, default_value_t = 10)]
        limit: u32,

        /// Only show this genre
        #[arg(short, long)]
        genre: Option<String>,

        /// `title`, `title-desc`, `price`, `price-desc`, or `author`
        #[arg(short, long)]
        sort: Option<String>,
    },
    /// Show or change the active user
    User {
        #[command(subcommand)]
        action: UserAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart contents and total
    Show,
    /// Add a book
    Add {
        /// Book id
        book: String,

        /// Number of copies
        #[arg(short, long, default_value = "1")]
        quantity: String,

        /// Report with a toast instead of a dialog
        #[arg(long)]
        quick: bool,
    },
    /// Remove a book
    Remove {
        /// Book id
        book: String,

        /// Skip the confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Change the quantity of a book
    Update {
        /// Book id
        book: String,

        /// New quantity
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Add one copy of a book already in the cart, up to its stock
    Inc {
        /// Book id
        book: String,
    },
    /// Remove one copy of a book, keeping at least one
    Dec {
        /// Book id
        book: String,
    },
    /// Remove everything
    Clear {
        /// Skip the confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum BooksAction {
    /// List books
    List {
        /// Only show this genre
        #[arg(short, long)]
        genre: Option<String>,

        /// `title`, `title-desc`, `price`, `price-desc`, or `author`
        #[arg(short, long)]
        sort: Option<String>,
    },
    /// Create a book
    Create(commands::books::BookFields),
    /// Replace a book's fields
    Update {
        /// Book id
        id: String,

        #[command(flatten)]
        fields: commands::books::BookFields,
    },
    /// Delete a book
    Delete {
        /// Book id
        id: String,

        /// Skip the confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Print the active user id
    Show,
    /// Store a new active user id
    Set {
        /// User id
        id: String,
    },
    /// Forget the stored user id
    Clear,
}

impl Commands {
    /// Whether confirmations should be answered automatically.
    const fn assume_yes(&self) -> bool {
        match self {
            Self::Cart {
                action: CartAction::Remove { yes, .. } | CartAction::Clear { yes },
            }
            | Self::Books {
                action: BooksAction::Delete { yes, .. },
            } => *yes,
            _ => false,
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = StorefrontConfig::from_env()?;
    if let Some(url) = &cli.api_url {
        config = config.with_api_base_url(url)?;
    }
    let storage = JsonFileStore::new(&config.storage_path);

    if let Commands::User { action } = &cli.command {
        match action {
            UserAction::Show => commands::user::show(&storage, &config.default_user_id),
            UserAction::Set { id } => commands::user::set(&storage, id)?,
            UserAction::Clear => commands::user::clear(&storage, &config.default_user_id)?,
        }
        return Ok(());
    }

    let ui = Arc::new(TerminalUi::new(cli.command.assume_yes()));
    let capabilities = Capabilities {
        dialogs: ui.clone(),
        navigator: ui.clone(),
        notifier: Arc::new(ToastHost::new(TerminalToasts, config.toast)),
    };
    let storefront = match cli.user {
        Some(id) => Storefront::new(
            BookstoreClient::new(&config.api_base_url)?,
            UserId::new(id),
            capabilities,
        ),
        None => Storefront::from_config(&config, &storage, capabilities)?,
    };

    match cli.command {
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&storefront).await?,
            CartAction::Add {
                book,
                quantity,
                quick,
            } => commands::cart::add(&storefront, &book, &quantity, quick).await?,
            CartAction::Remove { book, .. } => {
                commands::cart::remove(&storefront, &ui, &book).await?;
            }
            CartAction::Update { book, quantity } => {
                commands::cart::update(&storefront, &ui, &book, quantity).await?;
            }
            CartAction::Inc { book } => commands::cart::step(&storefront, &ui, &book, true).await?,
            CartAction::Dec { book } => {
                commands::cart::step(&storefront, &ui, &book, false).await?;
            }
            CartAction::Clear { .. } => commands::cart::clear(&storefront, &ui).await?,
        },
        Commands::Checkout(args) => commands::checkout::run(&storefront, args).await?,
        Commands::Books { action } => match action {
            BooksAction::List { genre, sort } => {
                commands::books::list(&storefront, genre.as_deref(), sort.as_deref()).await?;
            }
            BooksAction::Create(fields) => commands::books::create(&storefront, fields).await?,
            BooksAction::Update { id, fields } => {
                commands::books::update(&storefront, &id, fields).await?;
            }
            BooksAction::Delete { id, .. } => commands::books::delete(&storefront, &id).await?,
        },
        Commands::Orders { id: None } => commands::orders::list(&storefront).await?,
        Commands::Orders { id: Some(id) } => commands::orders::show(&storefront, &id).await?,
        Commands::Recommend {
            limit,
            genre,
            sort,
        } => {
            commands::recommend::run(&storefront, limit, genre.as_deref(), sort.as_deref())
                .await?;
        }
        Commands::User { .. } => {}
    }
    Ok(())
}
