/// `$` with thousands separators and two decimals; negatives render as `$-1,234.50`.
pub fn currency(value: f64) -> String {
    format!("${}", grouped(value))
}

fn grouped(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let (sign, digits) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (whole, cents) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut out = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, ch) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    format!("{sign}{out}.{cents}")
}

pub fn signed_percent(value: f64) -> String {
    format!("{value:+.2}%")
}

/// Bucket name is everything before the first `" - "`.
pub fn bucket_of(goal_name: &str) -> &str {
    goal_name
        .split_once(" - ")
        .map(|(bucket, _)| bucket)
        .unwrap_or(goal_name)
}

/// Goal label is everything after the first `" - "`.
pub fn goal_label(goal_name: &str) -> &str {
    goal_name
        .split_once(" - ")
        .map(|(_, label)| label)
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(currency(0.0), "$0.00");
        assert_eq!(currency(999.999), "$1,000.00");
        assert_eq!(currency(140_000.0), "$140,000.00");
        assert_eq!(currency(1_234_567.891), "$1,234,567.89");
        assert_eq!(currency(-2_500.5), "$-2,500.50");
    }

    #[test]
    fn signed_percent_always_carries_sign() {
        assert_eq!(signed_percent(3.14159), "+3.14%");
        assert_eq!(signed_percent(-0.5), "-0.50%");
        assert_eq!(signed_percent(0.0), "+0.00%");
    }

    #[test]
    fn goal_names_split_on_first_separator() {
        assert_eq!(bucket_of("House Purchase - Core - Balanced"), "House Purchase");
        assert_eq!(goal_label("House Purchase - Core - Balanced"), "Core - Balanced");
        assert_eq!(bucket_of("Standalone"), "Standalone");
        assert_eq!(goal_label("Standalone"), "");
    }
}
