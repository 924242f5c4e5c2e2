use std::error::Error;

use serde::Serialize;
use tracing::{debug, info};

use lumenrate_core::amount::{DECIMAL_PLACES, parse_minor_units};
use lumenrate_core::currency::{self, RelativeFactor, percentage_amount_change};
use lumenrate_core::decimal::{format_fixed, parse_decimal_strict};
use lumenrate_shared::{AppConfig, AppError, AppResult};

use crate::cli::Commands;

/// Result of a single command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Converted {
        amount: String,
        rate: String,
        result: String,
    },
    Compared {
        amount1: String,
        amount2: String,
        ordering: i8,
    },
    Within {
        amount1: String,
        amount2: String,
        factor: String,
        within: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        percentage_change: Option<f64>,
    },
    Parsed {
        input: String,
        numerator: String,
        denominator: String,
        fixed: String,
    },
}

impl Outcome {
    pub fn to_text(&self) -> String {
        match self {
            Self::Converted { result, .. } => result.clone(),
            Self::Compared { ordering, .. } => ordering.to_string(),
            Self::Within { within, .. } => within.to_string(),
            Self::Parsed {
                numerator,
                denominator,
                ..
            } => format!("{numerator}/{denominator}"),
        }
    }
}

pub fn execute(command: &Commands, config: &AppConfig) -> AppResult<Outcome> {
    match command {
        Commands::ToOutside { xlm_amount, rate } => {
            let result = currency::convert_xlm_to_outside(xlm_amount, rate).map_err(invalid)?;
            info!(%xlm_amount, %rate, %result, "converted to outside currency");
            Ok(Outcome::Converted {
                amount: xlm_amount.clone(),
                rate: rate.clone(),
                result,
            })
        }
        Commands::FromOutside {
            outside_amount,
            rate,
        } => {
            let result = currency::convert_outside_to_xlm(outside_amount, rate).map_err(invalid)?;
            info!(%outside_amount, %rate, %result, "converted to lumens");
            Ok(Outcome::Converted {
                amount: outside_amount.clone(),
                rate: rate.clone(),
                result,
            })
        }
        Commands::Compare { amount1, amount2 } => {
            let ordering = currency::compare_amounts(amount1, amount2).map_err(invalid)?;
            Ok(Outcome::Compared {
                amount1: amount1.clone(),
                amount2: amount2.clone(),
                ordering: ordering as i8,
            })
        }
        Commands::Within {
            amount1,
            amount2,
            factor,
        } => {
            let factor = match factor {
                Some(factor) => factor.clone(),
                None => configured_factor(config)?,
            };
            let within = currency::within_factor(amount1, amount2, &factor).map_err(invalid)?;
            let a = parse_minor_units(amount1).map_err(invalid)?;
            let b = parse_minor_units(amount2).map_err(invalid)?;
            Ok(Outcome::Within {
                amount1: amount1.clone(),
                amount2: amount2.clone(),
                factor,
                within,
                percentage_change: percentage_amount_change(a, b),
            })
        }
        Commands::Parse { decimal } => {
            let value = parse_decimal_strict(decimal).map_err(invalid)?;
            Ok(Outcome::Parsed {
                input: decimal.clone(),
                numerator: value.numer().to_string(),
                denominator: value.denom().to_string(),
                fixed: format_fixed(&value, DECIMAL_PLACES),
            })
        }
    }
}

fn configured_factor(config: &AppConfig) -> AppResult<String> {
    let factor = &config.tolerance.default_factor;
    RelativeFactor::parse(factor).map_err(|err| {
        AppError::Configuration(format!("tolerance.default_factor: {}", describe(&err)))
    })?;
    debug!(%factor, "using configured default factor");
    Ok(factor.clone())
}

fn invalid(err: impl Error) -> AppError {
    AppError::Validation(describe(&err))
}

/// Joins an error with all of its sources.
fn describe(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
