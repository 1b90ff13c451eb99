//! Terminal output utilities.

use crate::processing::PairReport;
use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

fn format_flag(flag: Option<bool>) -> String {
    match flag {
        Some(true) => "yes".to_string(),
        Some(false) => "no".to_string(),
        None => "-".to_string(),
    }
}

/// Format one report as a comma separated row, without colors.
pub fn format_row(report: &PairReport) -> String {
    format!(
        "{left},{right},{l_r},{r_l},{supernet}",
        left = format_field(report.left, 22),
        right = format_field(report.right, 22),
        l_r = format_field(format_flag(report.left_contains_right), 6),
        r_l = format_field(format_flag(report.right_contains_left), 6),
        supernet = format_field(
            report
                .supernet
                .map(|s| s.to_string())
                .or_else(|| report.error.clone())
                .unwrap_or_default(),
            22
        ),
    )
}

/// Print reports to stdout, highlighting containment and failures.
pub fn print_text(reports: &[PairReport]) {
    println!(
        r#"                "left",                "right",  "l>r",  "r>l",             "supernet""#
    );

    for report in reports {
        let row = format_row(report);
        if report.error.is_some() {
            println!("{}", row.red());
        } else if report.left_contains_right == Some(true)
            || report.right_contains_left == Some(true)
        {
            println!("{}", row.green());
        } else {
            println!("{row}");
        }
    }
}
