use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "SAS verification code tools", long_about = None)]
pub struct Args {
    /// Print results as JSON
    #[clap(long, global = true)]
    pub json: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Parser, Debug)]
pub enum Command {
    /// Render hex SAS bytes as three 4-digit numbers
    Decimal {
        /// At least 5 bytes of hex; surplus bytes are ignored
        bytes: String,

        /// Separator between the numbers
        #[clap(long, short, default_value = " ")]
        separator: String,

        /// Print each number on its own line
        #[clap(long, conflicts_with = "separator")]
        lines: bool,
    },
    /// Render hex SAS bytes as seven emoji
    Emoji {
        /// At least 6 bytes of hex; surplus bytes are ignored
        bytes: String,
    },
    /// List the 64-entry emoji table
    Table,
    /// Show seven random emoji, unrelated to any shared secret
    Preview {
        /// Seed for a reproducible preview
        #[clap(long)]
        seed: Option<u64>,
    },
}
