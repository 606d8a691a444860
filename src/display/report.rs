//! Report display formatting

use std::collections::BTreeMap;

use crate::config::Settings;
use crate::models::{Kind, Money};

use super::transaction::format_amount;

/// Format per-category sums as a small table
pub fn format_category_report(
    kind: Kind,
    sums: &BTreeMap<String, Money>,
    settings: &Settings,
) -> String {
    let mut output = format!("{} by category\n", kind);
    output.push_str(&"-".repeat(40));
    output.push('\n');

    if sums.is_empty() {
        output.push_str("No transactions found.\n");
        return output;
    }

    for (category, total) in sums {
        output.push_str(&format!(
            "{:26} {:>12}\n",
            category,
            format_amount(*total, settings)
        ));
    }

    let overall: Money = sums.values().copied().sum();
    output.push_str(&"-".repeat(40));
    output.push('\n');
    output.push_str(&format!(
        "{:26} {:>12}\n",
        "Total",
        format_amount(overall, settings)
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_includes_categories_and_total() {
        let settings = Settings::default();
        let mut sums = BTreeMap::new();
        sums.insert("Food".to_string(), Money::from_cents(10500));
        sums.insert("Housing".to_string(), Money::from_cents(150000));

        let report = format_category_report(Kind::Expense, &sums, &settings);
        assert!(report.contains("Expense by category"));
        assert!(report.contains("Food"));
        assert!(report.contains("Rs.105.00"));
        assert!(report.contains("Rs.1605.00")); // total
    }

    #[test]
    fn test_empty_report() {
        let settings = Settings::default();
        let report = format_category_report(Kind::Income, &BTreeMap::new(), &settings);
        assert!(report.contains("No transactions found."));
    }
}
