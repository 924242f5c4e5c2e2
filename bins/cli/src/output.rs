use serde::Serialize;

use lumenrate_shared::{AppError, AppResult};

use crate::commands::Outcome;

#[derive(Serialize)]
struct JsonOut<T: Serialize> {
    ok: bool,
    data: T,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    code: &'a str,
    message: String,
}

pub fn print_outcome(json: bool, outcome: &Outcome) -> AppResult<()> {
    if json {
        println!("{}", to_json(true, outcome)?);
    } else {
        println!("{}", outcome.to_text());
    }
    Ok(())
}

pub fn print_error(json: bool, err: &AppError) {
    let body = ErrorBody {
        code: err.error_code(),
        message: err.to_string(),
    };
    if json {
        if let Ok(text) = to_json(false, &body) {
            println!("{text}");
            return;
        }
    }
    eprintln!("error: {}", body.message);
}

fn to_json<T: Serialize>(ok: bool, data: T) -> AppResult<String> {
    serde_json::to_string_pretty(&JsonOut { ok, data })
        .map_err(|err| AppError::Internal(format!("serializing output: {err}")))
}
