//! Command-line interface for daytrader-fixtures
//!
//! # Usage Examples
//!
//! ## Records
//! ```bash
//! # Accounts with attached profiles
//! daytrader-fixtures accounts --seed 42 --with-profile
//!
//! # Profiles as HTML fragments
//! daytrader-fixtures profiles --count 3 --format html
//! ```
//!
//! ## Market data
//! ```bash
//! # Symbol lists for portfolio fixtures
//! daytrader-fixtures symbols --count 5 --seed 7
//!
//! # Quote rows
//! daytrader-fixtures quotes --count 5 --order-type sell
//! ```
//!
//! ## Users
//! ```bash
//! # Existing user IDs drawn from a smaller population
//! daytrader-fixtures users --max-users 50
//!
//! # Freshly registered user IDs
//! daytrader-fixtures users --new
//! ```

use clap::{Parser, Subcommand};
use daytrader_fixtures::args::{GeneratorArgs, RecordArgs};
use daytrader_fixtures::output::render;
use daytrader_fixtures::{random_account, random_account_profile, random_account_with_profile};

#[derive(Parser)]
#[command(name = "daytrader-fixtures")]
#[command(about = "Deterministic fixture data for the daytrader trading simulation")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate account records
    Accounts {
        #[command(flatten)]
        generator: GeneratorArgs,

        #[command(flatten)]
        record: RecordArgs,

        /// Attach a random profile to every account
        #[arg(long)]
        with_profile: bool,
    },

    /// Generate account profile records
    Profiles {
        #[command(flatten)]
        generator: GeneratorArgs,

        #[command(flatten)]
        record: RecordArgs,
    },

    /// Generate comma-separated symbol lists
    Symbols {
        #[command(flatten)]
        generator: GeneratorArgs,
    },

    /// Generate quote rows: symbol, price, quantity, price change factor, order fee
    Quotes {
        #[command(flatten)]
        generator: GeneratorArgs,

        /// Order type used to look up the fee
        #[arg(long, default_value = "buy")]
        order_type: String,
    },

    /// Generate user IDs
    Users {
        #[command(flatten)]
        generator: GeneratorArgs,

        /// Generate freshly registered user IDs instead of existing ones
        #[arg(long)]
        new: bool,

        /// Override the size of the existing user population
        #[arg(long)]
        max_users: Option<i32>,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only fixture data
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Accounts {
            generator,
            record,
            with_profile,
        } => {
            let mut trade_config = generator.build_generator()?;
            tracing::info!(
                "Generating {} accounts (seed={:?}, profiles={})",
                generator.count,
                generator.seed,
                with_profile
            );
            for _ in 0..generator.count {
                let account = if with_profile {
                    random_account_with_profile(&mut trade_config)
                } else {
                    random_account(&mut trade_config)
                };
                println!("{}", render(&account, record.format, record.zone)?);
            }
        }
        Commands::Profiles { generator, record } => {
            let mut trade_config = generator.build_generator()?;
            tracing::info!(
                "Generating {} profiles (seed={:?})",
                generator.count,
                generator.seed
            );
            for _ in 0..generator.count {
                let profile = random_account_profile(&mut trade_config);
                println!("{}", render(&profile, record.format, record.zone)?);
            }
        }
        Commands::Symbols { generator } => {
            let mut trade_config = generator.build_generator()?;
            for _ in 0..generator.count {
                println!("{}", trade_config.rnd_symbols());
            }
        }
        Commands::Quotes {
            generator,
            order_type,
        } => {
            let mut trade_config = generator.build_generator()?;
            let fee = trade_config.order_fee(&order_type);
            for _ in 0..generator.count {
                let symbol = trade_config.rnd_symbol();
                let price = trade_config.rnd_price();
                let quantity = trade_config.rnd_quantity();
                let factor = trade_config.random_price_change_factor();
                println!("{symbol},{price},{quantity},{factor},{fee}");
            }
        }
        Commands::Users {
            generator,
            new,
            max_users,
        } => {
            let mut trade_config = generator.build_generator()?;
            if let Some(max_users) = max_users {
                anyhow::ensure!(max_users > 0, "--max-users must be positive, got {max_users}");
                trade_config.set_max_users(max_users);
            }
            tracing::debug!("Host identifier: {}", trade_config.host());
            for _ in 0..generator.count {
                let user_id = if new {
                    trade_config.rnd_new_user_id()
                } else {
                    trade_config.rnd_user_id()
                };
                println!("{user_id}");
            }
        }
    }

    Ok(())
}
