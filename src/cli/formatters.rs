use fintrack_core::{CategoryShare, ConvertedRow};
use fintrack_domain::CurrencyCode;

const BAR_WIDTH: usize = 30;

/// Formats `value` with the currency's minor units, e.g. `60.00 USD`.
pub fn format_money(value: f64, currency: CurrencyCode) -> String {
    let precision = usize::from(currency.minor_units());
    let value = if rounds_to_zero(value, currency) { 0.0 } else { value };
    format!("{value:.precision$} {currency}")
}

pub fn format_signed(value: f64, currency: CurrencyCode) -> String {
    let formatted = format_money(value, currency);
    if value > 0.0 && !rounds_to_zero(value, currency) {
        format!("+{formatted}")
    } else {
        formatted
    }
}

fn rounds_to_zero(value: f64, currency: CurrencyCode) -> bool {
    value.abs() < 0.5 / 10f64.powi(i32::from(currency.minor_units()))
}

/// Renders the transaction table with the value of each record in `base`.
pub fn render_transactions(rows: &[ConvertedRow<'_>], base: CurrencyCode) -> String {
    let headers = [
        "#".to_string(),
        "Date".to_string(),
        "Category".to_string(),
        "Original".to_string(),
        format!("Value ({base})"),
        "Type".to_string(),
    ];
    let body: Vec<[String; 6]> = rows
        .iter()
        .map(|row| {
            let tx = row.transaction;
            [
                row.index.to_string(),
                tx.date.format("%Y-%m-%d").to_string(),
                tx.category.clone(),
                format_money(tx.amount, tx.currency),
                row.converted
                    .map(|value| format_money(value, base))
                    .unwrap_or_else(|| "unavailable".to_string()),
                tx.kind.to_string(),
            ]
        })
        .collect();

    let mut widths = headers.clone().map(|cell| cell.chars().count());
    for cells in &body {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(render_line(&headers, &widths));
    lines.push(
        widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join("  "),
    );
    for cells in &body {
        lines.push(render_line(cells, &widths));
    }
    lines.join("\n")
}

fn render_line(cells: &[String; 6], widths: &[usize; 6]) -> String {
    cells
        .iter()
        .zip(widths.iter().copied())
        .enumerate()
        .map(|(column, (cell, width))| {
            // amounts read better right-aligned
            if column == 3 || column == 4 {
                format!("{cell:>width$}")
            } else {
                format!("{cell:<width$}")
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// Text stand-in for the expense pie chart.
pub fn render_breakdown(shares: &[CategoryShare], base: CurrencyCode) -> String {
    let label_width = shares
        .iter()
        .map(|share| share.category.chars().count())
        .max()
        .unwrap_or(0);
    let amounts: Vec<String> = shares
        .iter()
        .map(|share| format_money(share.total, base))
        .collect();
    let amount_width = amounts.iter().map(String::len).max().unwrap_or(0);

    shares
        .iter()
        .zip(&amounts)
        .map(|(share, amount)| {
            let filled = ((share.percent / 100.0) * BAR_WIDTH as f64).round() as usize;
            format!(
                "{:<label_width$}  {:>amount_width$}  {:>5.1}%  {}",
                share.category,
                amount,
                share.percent,
                "#".repeat(filled.min(BAR_WIDTH))
            )
            .trim_end()
            .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
