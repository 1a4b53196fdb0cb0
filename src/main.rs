use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use payment_api::application::notifier::PaymentNotifier;
use payment_api::config::ServerConfig;
use payment_api::domain::calculation::calculate_number;
use payment_api::domain::ports::{CalculatorBox, PaymentReporterBox, PaymentTokenProvider};
use payment_api::infrastructure::calculator::RoundingCalculator;
use payment_api::infrastructure::console::{TracingReporter, WriterReporter};
use payment_api::infrastructure::token::StaticTokenProvider;
use payment_api::interfaces::http;
use payment_api::logger::init_logger;
use std::io;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Default log level when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the payment HTTP API
    Serve(ServerConfig),

    /// Evaluate SUM, SUBTRACT or DIVIDE over two rounded operands
    #[command(allow_negative_numbers = true)]
    Calc {
        /// Operation tag (SUM, SUBTRACT, DIVIDE)
        operation: String,
        a: f64,
        b: f64,
    },

    /// Total an amount and its shipping cost and print the result
    #[command(allow_negative_numbers = true)]
    Pay {
        total_amount: f64,
        total_shipping: f64,

        /// Report the total as a log event instead of on stdout
        #[arg(long)]
        log_total: bool,
    },

    /// Request a payment token
    Token {
        /// Simulate a declined request
        #[arg(long)]
        decline: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(&cli.log_level);

    match cli.command {
        Commands::Serve(config) => {
            http::serve(&config, shutdown_signal()).await.into_diagnostic()?;
        }
        Commands::Calc { operation, a, b } => match calculate_number(&operation, a, b) {
            Some(result) => println!("{}", result),
            None => tracing::warn!(operation = %operation, "Unknown operation, no result"),
        },
        Commands::Pay {
            total_amount,
            total_shipping,
            log_total,
        } => {
            let calculator: CalculatorBox = Box::new(RoundingCalculator);
            let reporter: PaymentReporterBox = if log_total {
                Box::new(TracingReporter)
            } else {
                Box::new(WriterReporter::new(io::stdout()))
            };

            let notifier = PaymentNotifier::new(calculator, reporter);
            notifier
                .send_payment_request_to_api(total_amount, total_shipping)
                .into_diagnostic()?;
        }
        Commands::Token { decline } => {
            let provider = StaticTokenProvider::new();
            if let Some(token) = provider.payment_token(!decline).await {
                println!("{}", serde_json::to_string(&token).into_diagnostic()?);
            }
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
