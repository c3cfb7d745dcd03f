//! Certification roadmap totals: overall timeline and overall cost.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::market::summary::format_thousands;
use crate::models::Certification;

const DEFAULT_MONTHS: u32 = 3;
const DEFAULT_COST: u64 = 15_000;
const EMPTY_TIMELINE: &str = "6-12 months";
const EMPTY_COST: &str = "KES 35,000 - 50,000";

/// First number in a duration, with an optional unit after it (or after a range).
static RE_DURATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d+)(?:\s*-\s*\d+)?\s*(weeks?|months?|years?)?").unwrap()
});

static RE_AMOUNT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d[\d,]*").unwrap());

/// Whole months for one certification; weeks round up, missing durations count as 3.
pub fn duration_months(duration: &str) -> u32 {
    let Some(caps) = RE_DURATION.captures(duration) else {
        return DEFAULT_MONTHS;
    };
    let Ok(n) = caps[1].parse::<u32>() else {
        return DEFAULT_MONTHS;
    };
    let unit = caps
        .get(2)
        .map(|m| m.as_str().to_ascii_lowercase())
        .unwrap_or_default();

    if unit.starts_with("week") {
        n.div_ceil(4)
    } else if unit.starts_with("year") {
        n.saturating_mul(12)
    } else {
        n
    }
}

/// Amount of one certification cost. "Free" is 0; anything without digits
/// counts as the default fee.
pub fn cost_amount(cost: &str) -> u64 {
    if cost.trim().eq_ignore_ascii_case("free") {
        return 0;
    }
    RE_AMOUNT
        .find(cost)
        .and_then(|m| m.as_str().replace(',', "").parse().ok())
        .unwrap_or(DEFAULT_COST)
}

/// `"<total> months"`, or `"6-12 months"` for an empty list.
pub fn timeline(certifications: &[Certification]) -> String {
    if certifications.is_empty() {
        return EMPTY_TIMELINE.to_string();
    }
    let total: u32 = certifications
        .iter()
        .map(|c| duration_months(&c.duration))
        .fold(0, u32::saturating_add);
    format!("{total} months")
}

/// `"KES <total>"`, or a typical range for an empty list.
pub fn total_cost(certifications: &[Certification]) -> String {
    if certifications.is_empty() {
        return EMPTY_COST.to_string();
    }
    let total = certifications
        .iter()
        .map(|c| cost_amount(&c.cost))
        .fold(0, u64::saturating_add);
    format!("KES {}", format_thousands(total))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cert(cost: &str, duration: &str) -> Certification {
        Certification {
            certification: "Cert".to_string(),
            cost: cost.to_string(),
            duration: duration.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_duration_units() {
        assert_eq!(duration_months("3 months"), 3);
        assert_eq!(duration_months("6 weeks"), 2);
        assert_eq!(duration_months("8 Weeks"), 2);
        assert_eq!(duration_months("1 year"), 12);
        assert_eq!(duration_months("3-6 months"), 3);
        assert_eq!(duration_months("self-paced"), 3);
        assert_eq!(duration_months(""), 3);
    }

    #[test]
    fn test_cost_amounts() {
        assert_eq!(cost_amount("KES 20,000"), 20_000);
        assert_eq!(cost_amount("Free"), 0);
        assert_eq!(cost_amount("free "), 0);
        assert_eq!(cost_amount(""), 15_000);
        assert_eq!(cost_amount("Varies"), 15_000);
    }

    #[test]
    fn test_totals() {
        let certs = vec![cert("KES 45,000", "3 months"), cert("Free", "6 weeks")];
        assert_eq!(timeline(&certs), "5 months");
        assert_eq!(total_cost(&certs), "KES 45,000");
    }

    #[test]
    fn test_huge_durations_saturate() {
        assert_eq!(duration_months("400000000 years"), u32::MAX);
        let certs = vec![cert("Free", "4000000000 months"), cert("Free", "4000000000 months")];
        assert_eq!(timeline(&certs), format!("{} months", u32::MAX));
    }

    #[test]
    fn test_huge_costs_saturate() {
        let certs = vec![
            cert("KES 18,000,000,000,000,000,000", "3 months"),
            cert("KES 18,000,000,000,000,000,000", "3 months"),
        ];
        assert_eq!(total_cost(&certs), format!("KES {}", format_thousands(u64::MAX)));
    }

    #[test]
    fn test_empty_list_defaults() {
        assert_eq!(timeline(&[]), "6-12 months");
        assert_eq!(total_cost(&[]), "KES 35,000 - 50,000");
    }
}
