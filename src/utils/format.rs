//! Display formatting for amounts and dates.
//!
//! Amounts use the rupee sign with Indian digit grouping (last three digits,
//! then pairs: `1,23,456.78`) and always show two decimal places.

use chrono::NaiveDate;

const RUPEE: char = '₹';

/// Formats an amount like `₹1,23,456.78`; negatives carry a leading minus.
pub fn format_amount(amount: f64) -> String {
    let negative = amount < 0.0;
    let paise_total = (amount.abs() * 100.0).round() as u64;
    let rupees = paise_total / 100;
    let paise = paise_total % 100;
    let grouped = group_indian(&rupees.to_string());
    if negative {
        format!("-{RUPEE}{grouped}.{paise:02}")
    } else {
        format!("{RUPEE}{grouped}.{paise:02}")
    }
}

/// Renders a person's net position as the owner reads it.
pub fn describe_net(net: f64) -> String {
    if net > 0.0 {
        format!("owes you {}", format_amount(net))
    } else if net < 0.0 {
        format!("you owe {}", format_amount(-net))
    } else {
        format!("Settled ({})", format_amount(0.0))
    }
}

/// Short display form like `15 Jan 2024`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-d %b %Y").to_string()
}

fn group_indian(integer: &str) -> String {
    if integer.len() <= 3 {
        return integer.to_string();
    }
    let (head, tail) = integer.split_at(integer.len() - 3);
    let mut pairs = Vec::new();
    let mut index = head.len();
    while index > 2 {
        pairs.push(&head[index - 2..index]);
        index -= 2;
    }
    pairs.push(&head[..index]);

    let mut out = String::new();
    for part in pairs.iter().rev() {
        out.push_str(part);
        out.push(',');
    }
    out.push_str(tail);
    out
}
