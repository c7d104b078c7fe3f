mod cli;

use clap::Parser;
use cli::{Args, Command};
use sas_code::emoji::all_emojis;
use sas_code::sample::{seeded_preview, static_preview};
use sas_code::{DecimalCode, EmojiRepresentation, SasConfig, SasRenderer};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_emojis(entries: &[EmojiRepresentation], json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(entries)?);
    } else {
        for entry in entries {
            println!("{}  {}", entry.glyph(), entry.label());
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.command {
        Command::Decimal {
            bytes,
            separator,
            lines,
        } => {
            let separator = if lines { "\n".to_string() } else { separator };
            let renderer = SasRenderer::with_config(SasConfig::new().with_separator(separator)?)?;
            let secret = renderer.decode_hex(&bytes)?;

            if args.json {
                let code = DecimalCode::from_bytes(&secret)?;
                println!("{}", serde_json::to_string_pretty(&code)?);
            } else {
                println!("{}", renderer.decimal(&secret)?);
            }
        }
        Command::Emoji { bytes } => {
            let renderer = SasRenderer::new();
            let secret = renderer.decode_hex(&bytes)?;
            let code = renderer.emoji(&secret)?;

            if args.json {
                println!("{}", serde_json::to_string_pretty(&code)?);
            } else {
                println!("{}", code);
                print_emojis(code.entries(), false)?;
            }
        }
        Command::Table => {
            if args.json {
                print_emojis(all_emojis(), true)?;
            } else {
                for (index, entry) in all_emojis().iter().enumerate() {
                    println!("{:>2}  {}  {:<12} {}", index, entry.glyph(), entry.label(), entry.icon_ref());
                }
            }
        }
        Command::Preview { seed } => {
            let preview = match seed {
                Some(seed) => seeded_preview(seed),
                None => static_preview(),
            };
            print_emojis(&preview, args.json)?;
        }
    }

    Ok(())
}
