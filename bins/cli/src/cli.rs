use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "lumenrate", version, about = "Exact lumen amount conversion and comparison")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

// Amounts and rates may be negative, so positionals accept leading hyphens.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert lumens into outside currency
    ToOutside {
        #[arg(allow_hyphen_values = true)]
        xlm_amount: String,
        #[arg(allow_hyphen_values = true, help = "Outside currency per 1 XLM")]
        rate: String,
    },
    /// Convert outside currency into lumens
    FromOutside {
        #[arg(allow_hyphen_values = true)]
        outside_amount: String,
        #[arg(allow_hyphen_values = true, help = "Outside currency per 1 XLM")]
        rate: String,
    },
    /// Compare two lumen amounts (-1, 0 or 1)
    Compare {
        #[arg(allow_hyphen_values = true)]
        amount1: String,
        #[arg(allow_hyphen_values = true)]
        amount2: String,
    },
    /// Check whether two lumen amounts are within a relative factor
    Within {
        #[arg(allow_hyphen_values = true)]
        amount1: String,
        #[arg(allow_hyphen_values = true)]
        amount2: String,
        #[arg(
            long,
            allow_hyphen_values = true,
            help = "Relative factor, e.g. 0.01 for 1% (defaults to configuration)"
        )]
        factor: Option<String>,
    },
    /// Parse a strict decimal into an exact fraction
    Parse {
        #[arg(allow_hyphen_values = true)]
        decimal: String,
    },
}
