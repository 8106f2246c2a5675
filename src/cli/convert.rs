use super::ui;
use crate::core::{ConversionRequest, ConversionResult, CurrencyConverter};
use anyhow::Result;

/// Renders a conversion as `100.00 USD = 90.00 EUR` with the rate underneath.
pub fn display_conversion(result: &ConversionResult) -> String {
    let converted = format!("{:.2} {}", result.converted, result.to);
    format!(
        "{:.2} {} = {}\n{}",
        result.amount,
        result.from,
        ui::style_text(&converted, ui::StyleType::TotalValue),
        ui::style_text(
            &format!("1 {} = {} {}", result.from, result.rate, result.to),
            ui::StyleType::Subtle
        ),
    )
}

pub fn display_currencies(currencies: &[String]) -> String {
    format!(
        "{}\n\n{}",
        ui::style_text("Supported currencies", ui::StyleType::Title),
        currencies.join(", ")
    )
}

pub async fn run(converter: &CurrencyConverter, amount: &str, from: &str, to: &str) -> Result<()> {
    let request = ConversionRequest::parse(Some(amount), Some(from), Some(to))?;
    let result = converter
        .convert(request.amount, &request.from, &request.to)
        .await?;
    println!("{}", display_conversion(&result));
    Ok(())
}

pub fn run_currencies(converter: &CurrencyConverter) -> Result<()> {
    println!("{}", display_currencies(&converter.supported_currencies()));
    Ok(())
}
