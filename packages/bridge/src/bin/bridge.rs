//! Bridge pattern demo.
//!
//! Sends one notification through the chosen kind and channel.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin bridge-demo
//! cargo run --bin bridge-demo -- --kind report --channel sms "Weekly summary"
//! cargo run --bin bridge-demo -- --legacy email "Hello World"
//! ```

use clap::{Parser, ValueEnum};

use patterns_bridge::{
    AlertNotification, Email, LegacyNotification, Notification, NotificationType, Notifier, Push,
    ReportNotification, Sms,
};
use patterns_shared::logger::setup_logger;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    Plain,
    Alert,
    Report,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ChannelArg {
    Email,
    Sms,
    Push,
}

#[derive(Parser, Debug)]
#[command(name = "bridge-demo")]
#[command(about = "Send a notification through an interchangeable channel", long_about = None)]
struct Args {
    /// Notification kind (abstraction side)
    #[arg(short = 'k', long, value_enum, default_value = "alert")]
    kind: KindArg,

    /// Delivery channel (implementation side)
    #[arg(short = 'c', long, value_enum, default_value = "email")]
    channel: ChannelArg,

    /// Use the tag-branching notifier with this type tag instead
    #[arg(long, value_name = "TAG", conflicts_with_all = ["kind", "channel"])]
    legacy: Option<String>,

    /// Message to send
    #[arg(default_value = "Hello World")]
    message: String,
}

fn build_channel(channel: ChannelArg) -> Box<dyn NotificationType> {
    match channel {
        ChannelArg::Email => Box::new(Email::new()),
        ChannelArg::Sms => Box::new(Sms::new()),
        ChannelArg::Push => Box::new(Push::new()),
    }
}

fn build_notifier(args: &Args) -> Box<dyn Notifier> {
    if let Some(tag) = &args.legacy {
        return Box::new(LegacyNotification::new(tag.clone()));
    }

    let notification = Notification::new(build_channel(args.channel));
    match args.kind {
        KindArg::Plain => Box::new(notification),
        KindArg::Alert => Box::new(AlertNotification::new(notification)),
        KindArg::Report => Box::new(ReportNotification::new(notification)),
    }
}

fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "warn");

    let args = Args::parse();

    let notifier = build_notifier(&args);
    if let Err(e) = notifier.send(&args.message) {
        tracing::error!("Notification error: {}", e);
        std::process::exit(1);
    }
}
