//! Interactive stdin prompt helpers.
//!
//! Every typed prompt loops until it gets valid input; the capture
//! prompts treat a lone `x` as cancellation and return `None`.

use std::io::{self, Write};

use anyhow::Result;

use shoestock_store::ShoeValidator;

/// Print `label` and read one trimmed line from stdin.
pub fn read_input(label: &str) -> Result<String> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut buffer = String::new();
    io::stdin().read_line(&mut buffer)?;
    Ok(buffer.trim().to_string())
}

/// `read_input` with `x` mapped to `None`.
fn read_or_cancel(label: &str) -> Result<Option<String>> {
    let input = read_input(label)?;
    if input.eq_ignore_ascii_case("x") {
        return Ok(None);
    }
    Ok(Some(input))
}

/// Prompt for a letters-and-spaces name (country or brand), title-cased.
pub fn prompt_name(label: &str) -> Result<Option<String>> {
    loop {
        let Some(input) = read_or_cancel(label)? else {
            return Ok(None);
        };
        if ShoeValidator::is_valid_name(&input) {
            return Ok(Some(title_case(&input)));
        }
        println!("Invalid input. Please enter only letters and spaces.");
    }
}

/// Prompt for a SKU code, upper-cased.
pub fn prompt_code(label: &str) -> Result<Option<String>> {
    loop {
        let Some(input) = read_or_cancel(label)? else {
            return Ok(None);
        };
        let code = input.to_uppercase();
        if ShoeValidator::is_valid_code(&code) {
            return Ok(Some(code));
        }
        println!("Invalid code format. Codes are 'SKU' followed by digits (e.g. SKU12345).");
    }
}

/// Prompt for a non-negative price.
pub fn prompt_cost(label: &str) -> Result<Option<f64>> {
    loop {
        let Some(input) = read_or_cancel(label)? else {
            return Ok(None);
        };
        match input.parse::<f64>() {
            Ok(cost) if cost >= 0.0 && cost.is_finite() => return Ok(Some(cost)),
            Ok(_) => println!("Error: cost cannot be negative."),
            Err(_) => println!("Error: please enter a valid amount."),
        }
    }
}

/// Prompt for a non-negative whole quantity.
pub fn prompt_quantity(label: &str) -> Result<Option<u32>> {
    loop {
        let Some(input) = read_or_cancel(label)? else {
            return Ok(None);
        };
        match input.parse::<u32>() {
            Ok(quantity) => return Ok(Some(quantity)),
            Err(_) => println!("Error: please enter a valid whole number."),
        }
    }
}

/// Title-case each whitespace-separated word.
pub fn title_case(input: &str) -> String {
    input
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
