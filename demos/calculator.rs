use fncli::{command, CommandModule};

/// Add two numbers.
///
/// :param a: The left operand.
/// :param b: The right operand.
/// :return: The sum.
#[command]
fn add(a: i64, #[default(1)] b: i64) -> i64 {
    a + b
}

/// Divide two numbers.
///
/// :param numerator: The number to divide.
/// :param denominator: The number to divide by.
/// :return: The quotient.
#[command(name = "div")]
fn divide(numerator: f64, denominator: f64) -> Result<f64, String> {
    if denominator == 0.0 {
        Err("Cannot divide by zero.".to_string())
    } else {
        Ok(numerator / denominator)
    }
}

/// Round a number.
///
/// :param value: The number to round.
/// :param up: Round towards positive infinity instead.
#[command]
fn round(value: f64, #[default(false)] up: bool) -> i64 {
    if up {
        value.ceil() as i64
    } else {
        value.round() as i64
    }
}

fn main() {
    CommandModule::new("calculator")
        .with_documentation("A tiny calculator.")
        .with_version(env!("CARGO_PKG_VERSION"))
        .with_command(add_command())
        .with_command(divide_command())
        .with_command(round_command())
        .build()
        .parse();
}
