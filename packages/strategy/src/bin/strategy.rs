//! Strategy pattern demo.
//!
//! Prints the shipping cost of one order priced by the chosen carrier.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin strategy-demo
//! cargo run --bin strategy-demo -- --company dhl --weight 2.5
//! cargo run --bin strategy-demo -- --legacy fedex
//! ```

use clap::{Parser, ValueEnum};

use patterns_shared::{PatternError, logger::setup_logger};
use patterns_strategy::{
    Aramex, Dhl, Fedex, LegacyShippingCalculator, Order, ShippingCalculator, ShippingCompany,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CompanyArg {
    Fedex,
    Aramex,
    Dhl,
}

#[derive(Parser, Debug)]
#[command(name = "strategy-demo")]
#[command(about = "Calculate a shipping cost with an interchangeable carrier", long_about = None)]
struct Args {
    /// Carrier whose pricing strategy is used
    #[arg(short = 'c', long, value_enum, default_value = "aramex")]
    company: CompanyArg,

    /// Order weight
    #[arg(short = 'w', long, default_value_t = 5.0, allow_negative_numbers = true)]
    weight: f64,

    /// Use the tag-branching calculator with this carrier name instead
    #[arg(long, value_name = "METHOD", conflicts_with = "company")]
    legacy: Option<String>,
}

fn build_company(company: CompanyArg) -> Box<dyn ShippingCompany> {
    match company {
        CompanyArg::Fedex => Box::new(Fedex),
        CompanyArg::Aramex => Box::new(Aramex),
        CompanyArg::Dhl => Box::new(Dhl),
    }
}

fn run(args: &Args) -> Result<f64, PatternError> {
    let order = Order::new(args.weight)?;
    match &args.legacy {
        Some(method) => LegacyShippingCalculator::new().calculate(&order, method),
        None => ShippingCalculator::new(build_company(args.company)).calculate(&order),
    }
}

fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "warn");

    let args = Args::parse();

    match run(&args) {
        Ok(cost) => println!("{cost}"),
        Err(e) => {
            tracing::error!("Shipping error: {}", e);
            std::process::exit(1);
        }
    }
}
