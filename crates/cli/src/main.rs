//! Tienda CLI - storefront and back-office frontend for the commerce API.
//!
//! # Usage
//!
//! ```bash
//! # Sign in (cached under the session directory)
//! tienda auth login -e ana@example.com -p secret
//!
//! # Browse the catalog
//! tienda products list --active true
//!
//! # Place an order straight from a cart built on the command line
//! tienda orders create --item 3:2 --item 7:1 --payment-method efectivo
//!
//! # Back-office
//! tienda invoices list --status EMITIDA
//! tienda audit stats --from 2026-01-01
//! ```
//!
//! # Commands
//!
//! - `auth` - Sign in/out, register, password flows
//! - `products` - Catalog browsing and management
//! - `orders` - Order placement and tracking
//! - `invoices` - Invoicing
//! - `users` - User administration
//! - `audit` - Audit log

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout)]

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;

use tienda_core::{InvoiceId, InvoiceStatus, OrderId, OrderStatus, ProductId, UserId};

mod commands;

use commands::orders::CartItem;

#[derive(Parser)]
#[command(name = "tienda")]
#[command(author, version, about = "Tienda commerce CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in/out, register and password flows
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
    /// Browse and manage the product catalog
    Products {
        #[command(subcommand)]
        action: ProductAction,
    },
    /// Place and track orders
    Orders {
        #[command(subcommand)]
        action: OrderAction,
    },
    /// Invoicing
    Invoices {
        #[command(subcommand)]
        action: InvoiceAction,
    },
    /// User administration
    Users {
        #[command(subcommand)]
        action: UserAction,
    },
    /// Audit log
    Audit {
        #[command(subcommand)]
        action: AuditAction,
    },
}

#[derive(Subcommand)]
enum AuthAction {
    /// Sign in and cache the session
    Login {
        /// Account email
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },
    /// Drop the cached session
    Logout,
    /// Create a new account
    Register {
        /// Full name
        #[arg(short, long)]
        name: String,

        /// National id (cedula)
        #[arg(short = 'c', long)]
        national_id: String,

        /// Account email
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },
    /// Change the signed-in account's password
    ChangePassword {
        /// Current password
        #[arg(long)]
        current: String,

        /// New password
        #[arg(long)]
        new: String,
    },
    /// Request a password recovery code by email
    Recover {
        /// Account email
        #[arg(short, long)]
        email: String,
    },
    /// Reset the password with a recovery code
    Reset {
        /// Account email
        #[arg(short, long)]
        email: String,

        /// Recovery code from the email
        #[arg(short, long)]
        code: String,

        /// New password
        #[arg(short, long)]
        password: String,
    },
}

#[derive(Subcommand)]
enum ProductAction {
    /// List products
    List {
        /// Free-text search over name and description
        #[arg(short, long)]
        search: Option<String>,

        /// Filter on the active flag
        #[arg(short, long)]
        active: Option<bool>,

        #[arg(long)]
        page: Option<u32>,

        #[arg(long)]
        limit: Option<u32>,

        /// Field to sort by
        #[arg(long)]
        sort_by: Option<String>,

        #[arg(long, value_enum)]
        sort_order: Option<SortDirection>,
    },
    /// Show one product
    Get {
        id: ProductId,
    },
    /// Create a product
    Create {
        #[arg(short, long)]
        name: String,

        #[arg(short, long, default_value = "")]
        description: String,

        /// Unit price, e.g. 10.50
        #[arg(short, long)]
        price: Decimal,
    },
    /// Update a product (only provided fields change)
    Update {
        id: ProductId,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        #[arg(short, long)]
        price: Option<Decimal>,
    },
    /// Delete a product
    Delete {
        id: ProductId,
    },
    /// Flip a product's active flag
    Toggle {
        id: ProductId,
    },
}

#[derive(Subcommand)]
enum OrderAction {
    /// List orders
    List {
        /// Order status (pendiente, confirmado, en_proceso, enviado, entregado, cancelado)
        #[arg(short, long)]
        status: Option<OrderStatus>,

        /// Earliest order date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Latest order date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,

        #[arg(long)]
        page: Option<u32>,

        #[arg(long)]
        limit: Option<u32>,
    },
    /// Show one order
    Get {
        id: OrderId,
    },
    /// Build a cart and place an order
    Create {
        /// Cart line as `<product-id>:<quantity>`; repeatable
        #[arg(short, long = "item", required = true)]
        items: Vec<CartItem>,

        /// Payment method, e.g. efectivo, tarjeta
        #[arg(short, long)]
        payment_method: String,

        /// Delivery address
        #[arg(short, long)]
        address: Option<String>,

        /// Free-form notes for the order
        #[arg(long)]
        notes: Option<String>,
    },
    /// Change an order's status
    Status {
        id: OrderId,

        /// New status
        status: OrderStatus,
    },
    /// Cancel an order
    Cancel {
        id: OrderId,
    },
    /// Delete an order
    Delete {
        id: OrderId,
    },
    /// Aggregate order statistics
    Stats,
}

#[derive(Subcommand)]
enum InvoiceAction {
    /// List invoices
    List {
        /// Invoice status (EMITIDA, PAGADA, ANULADA)
        #[arg(short, long)]
        status: Option<InvoiceStatus>,

        /// Earliest issue date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Latest issue date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,

        #[arg(long)]
        page: Option<u32>,

        #[arg(long)]
        limit: Option<u32>,
    },
    /// Show one invoice
    Get {
        id: InvoiceId,
    },
    /// Issue a direct invoice (no originating order)
    CreateDirect {
        /// Customer user id
        #[arg(long)]
        customer: UserId,

        /// Customer display name
        #[arg(long)]
        customer_name: String,

        /// Customer national id (cedula)
        #[arg(long)]
        national_id: String,

        /// Invoice line as `<product-id>:<quantity>`; repeatable
        #[arg(short, long = "item", required = true)]
        items: Vec<CartItem>,

        /// Payment method
        #[arg(short, long)]
        payment_method: String,

        #[arg(long)]
        notes: Option<String>,
    },
    /// Change an invoice's status
    Status {
        id: InvoiceId,

        /// New status (EMITIDA, PAGADA, ANULADA)
        status: InvoiceStatus,
    },
    /// Look an invoice up by its printed number
    ByNumber {
        number: String,
    },
    /// List a customer's invoices
    ByClient {
        customer: UserId,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// List registered users
    List,
}

#[derive(Subcommand)]
enum AuditAction {
    /// List audit log entries
    List {
        /// Entity kind, e.g. producto, pedido
        #[arg(short, long)]
        entity: Option<String>,

        /// Entity identifier
        #[arg(long)]
        entity_id: Option<String>,

        /// Recorded action, e.g. create, update, change_status
        #[arg(short, long)]
        action: Option<String>,

        /// Acting user id
        #[arg(short, long)]
        user: Option<UserId>,

        /// Earliest entry date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Latest entry date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,

        #[arg(long)]
        page: Option<u32>,

        #[arg(long)]
        limit: Option<u32>,
    },
    /// Change history for one entity
    History {
        /// Entity kind, e.g. producto, pedido
        entity: String,

        /// Entity identifier
        entity_id: String,
    },
    /// Aggregate audit statistics
    Stats {
        /// Earliest entry date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Latest entry date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,
    },
}

/// Sort direction for listings.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortDirection {
    Asc,
    Desc,
}

impl From<SortDirection> for tienda_client::models::SortOrder {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Asc => Self::Asc,
            SortDirection::Desc => Self::Desc,
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CliError> {
    match cli.command {
        Commands::Auth { action } => match action {
            AuthAction::Login { email, password } => {
                commands::auth::login(&email, &password).await?;
            }
            AuthAction::Logout => commands::auth::logout().await?,
            AuthAction::Register {
                name,
                national_id,
                email,
                password,
            } => {
                commands::auth::register(&name, &national_id, &email, &password).await?;
            }
            AuthAction::ChangePassword { current, new } => {
                commands::auth::change_password(&current, &new).await?;
            }
            AuthAction::Recover { email } => commands::auth::recover(&email).await?,
            AuthAction::Reset {
                email,
                code,
                password,
            } => {
                commands::auth::reset(&email, &code, &password).await?;
            }
        },
        Commands::Products { action } => match action {
            ProductAction::List {
                search,
                active,
                page,
                limit,
                sort_by,
                sort_order,
            } => {
                commands::products::list(
                    search,
                    active,
                    page,
                    limit,
                    sort_by,
                    sort_order.map(Into::into),
                )
                .await?;
            }
            ProductAction::Get { id } => commands::products::get(id).await?,
            ProductAction::Create {
                name,
                description,
                price,
            } => {
                commands::products::create(name, description, price).await?;
            }
            ProductAction::Update {
                id,
                name,
                description,
                price,
            } => {
                commands::products::update(id, name, description, price).await?;
            }
            ProductAction::Delete { id } => commands::products::delete(id).await?,
            ProductAction::Toggle { id } => commands::products::toggle(id).await?,
        },
        Commands::Orders { action } => match action {
            OrderAction::List {
                status,
                from,
                to,
                page,
                limit,
            } => {
                commands::orders::list(status, from, to, page, limit).await?;
            }
            OrderAction::Get { id } => commands::orders::get(id).await?,
            OrderAction::Create {
                items,
                payment_method,
                address,
                notes,
            } => {
                commands::orders::create(&items, payment_method, address, notes).await?;
            }
            OrderAction::Status { id, status } => {
                commands::orders::set_status(id, status).await?;
            }
            OrderAction::Cancel { id } => commands::orders::cancel(id).await?,
            OrderAction::Delete { id } => commands::orders::delete(id).await?,
            OrderAction::Stats => commands::orders::stats().await?,
        },
        Commands::Invoices { action } => match action {
            InvoiceAction::List {
                status,
                from,
                to,
                page,
                limit,
            } => {
                commands::invoices::list(status, from, to, page, limit).await?;
            }
            InvoiceAction::Get { id } => commands::invoices::get(id).await?,
            InvoiceAction::CreateDirect {
                customer,
                customer_name,
                national_id,
                items,
                payment_method,
                notes,
            } => {
                commands::invoices::create_direct(
                    customer,
                    customer_name,
                    national_id,
                    &items,
                    payment_method,
                    notes,
                )
                .await?;
            }
            InvoiceAction::Status { id, status } => {
                commands::invoices::set_status(id, status).await?;
            }
            InvoiceAction::ByNumber { number } => {
                commands::invoices::by_number(&number).await?;
            }
            InvoiceAction::ByClient { customer } => {
                commands::invoices::by_client(customer).await?;
            }
        },
        Commands::Users { action } => match action {
            UserAction::List => commands::users::list().await?,
        },
        Commands::Audit { action } => match action {
            AuditAction::List {
                entity,
                entity_id,
                action,
                user,
                from,
                to,
                page,
                limit,
            } => {
                commands::audit::list(entity, entity_id, action, user, from, to, page, limit)
                    .await?;
            }
            AuditAction::History { entity, entity_id } => {
                commands::audit::history(&entity, &entity_id).await?;
            }
            AuditAction::Stats { from, to } => commands::audit::stats(from, to).await?,
        },
    }
    Ok(())
}
