//! Validates the bundled translations and period catalog.
//!
//! Run in CI or before a release: exits with an error if any message is
//! missing or has mismatched placeholders, or if the catalog is malformed.

use anyhow::{bail, Result};
use clap::Parser;
use comete::{catalog, i18n, Language, MessageKey, Translator};

#[derive(Debug, Parser)]
#[command(name = "comete-check", version, about = "Checks Comète translations and content")]
struct Args {
    /// Also print every message key with its translations
    #[arg(long)]
    list_keys: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("comete=info").init();
    let args = Args::parse();

    if let Err(errors) = i18n::validate() {
        for error in &errors {
            eprintln!("error: {}", error);
        }
        bail!("{} translation problem(s)", errors.len());
    }
    println!(
        "translations: {} keys x {} languages OK",
        MessageKey::ALL.len(),
        Language::ALL.len()
    );

    let periods = catalog::periods()?;
    for period in periods {
        println!(
            "  {:<22} {} .. {} ({} events)",
            period.id,
            catalog::format_year(period.start_year, Language::Fr),
            catalog::format_year(period.end_year, Language::Fr),
            period.key_events.len()
        );
    }
    println!("catalog: {} periods OK", periods.len());

    if args.list_keys {
        for &key in MessageKey::ALL {
            println!("{}", key.code());
            for language in Language::ALL {
                println!("  {}: {}", language, Translator::new(language).t(key));
            }
        }
    }

    Ok(())
}
