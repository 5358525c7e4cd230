//! Basic ResultValue Example
//!
//! Parses a list of order quantities and shows:
//! - Construction and narrowing with pattern matching
//! - Transforming with map and match_with
//! - Aggregating with pack_results (first failure wins)
//! - Recovering with unwrap_or_else
//!
//! Run with: cargo run --example basic_result

use resolute::{pack_results, ResultValue};

enum QuantityError {
    NotANumber(String),
    Zero,
}

fn parse_quantity(raw: &str) -> ResultValue<u32, QuantityError> {
    match raw.trim().parse::<u32>() {
        Ok(0) => ResultValue::failure(QuantityError::Zero),
        Ok(quantity) => ResultValue::success(quantity),
        Err(_) => ResultValue::failure(QuantityError::NotANumber(raw.to_string())),
    }
}

fn explain(error: &QuantityError) -> String {
    match error {
        QuantityError::NotANumber(raw) => format!("'{raw}' is not a number"),
        QuantityError::Zero => "quantity must be at least 1".to_string(),
    }
}

fn describe(result: ResultValue<u32, QuantityError>) -> String {
    result.match_with(
        |quantity| format!("ok: {quantity} units"),
        |error| format!("rejected: {}", explain(&error)),
    )
}

fn main() {
    println!("=== Basic ResultValue Example ===\n");

    for raw in ["12", "0", "lots"] {
        println!("{raw:>5} -> {}", describe(parse_quantity(raw)));
    }

    println!("\n=== Aggregation ===\n");

    let clean = pack_results(["3", "4", "5"].into_iter().map(parse_quantity));
    match clean.map(|quantities| quantities.iter().sum::<u32>()) {
        ResultValue::Success(total) => println!("clean batch total: {total}"),
        ResultValue::Failure(error) => println!("clean batch failed: {}", explain(&error)),
    }

    let dirty = pack_results(["3", "x", "0"].into_iter().map(parse_quantity));
    if let Some(error) = dirty.error() {
        println!("dirty batch stopped at first failure: {}", explain(error));
    }

    println!("\n=== Recovery ===\n");

    let fallback = parse_quantity("n/a").unwrap_or_else(|error| match error {
        QuantityError::Zero => 0,
        QuantityError::NotANumber(_) => 1,
    });
    println!("fallback quantity: {fallback}");
}
