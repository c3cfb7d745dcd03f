use once_cell::sync::Lazy;
use regex::Regex;

use crate::fallback::{jobs::salary_band, CareerField};
use crate::gap::scoring::{rank_required_skills, TOP_REQUIRED_SKILLS};
use crate::models::{JobMarketSummary, JobPosting};

const MAX_LISTED: usize = 5;

/// `"KES 100,000 - 180,000"`, with an optional repeated currency on the upper bound.
static RE_SALARY_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Z]{3})\s*([\d,]+)\s*(?:-|–|to)\s*(?:[A-Z]{3}\s*)?([\d,]+)").unwrap()
});

pub fn summarize(jobs: Vec<JobPosting>, field: CareerField) -> JobMarketSummary {
    JobMarketSummary {
        total_jobs: jobs.len(),
        average_salary: average_salary(&jobs).unwrap_or_else(|| salary_band(field).to_string()),
        top_companies: first_unique(jobs.iter().map(|j| j.company.as_str())),
        required_skills: rank_required_skills(&jobs, TOP_REQUIRED_SKILLS),
        locations: first_unique(jobs.iter().map(|j| j.location.as_str())),
        remote_opportunities: remote_share(&jobs),
        jobs,
    }
}

fn parse_amount(digits: &str) -> Option<u64> {
    digits.replace(',', "").parse().ok()
}

/// Parses `"<CUR> <min> - <max>"` from a salary string.
pub fn parse_salary_range(text: &str) -> Option<(String, u64, u64)> {
    let caps = RE_SALARY_RANGE.captures(text)?;
    let min = parse_amount(&caps[2])?;
    let max = parse_amount(&caps[3])?;
    Some((caps[1].to_string(), min, max))
}

/// Averages the lower and upper bounds of every parsable range. The
/// currency of the first range labels the result.
pub fn average_salary(jobs: &[JobPosting]) -> Option<String> {
    let ranges: Vec<(String, u64, u64)> = jobs
        .iter()
        .filter_map(|job| parse_salary_range(&job.salary_range))
        .collect();
    let (currency, _, _) = ranges.first()?;

    // Sum in u128; the mean of u64 values fits back in u64.
    let n = ranges.len() as u128;
    let mean = |bound: fn(&(String, u64, u64)) -> u64| {
        (ranges.iter().map(|r| bound(r) as u128).sum::<u128>() / n) as u64
    };
    let min = mean(|(_, lo, _)| *lo);
    let max = mean(|(_, _, hi)| *hi);
    Some(format!(
        "{} {} - {}",
        currency,
        format_thousands(min),
        format_thousands(max)
    ))
}

/// `60000` → `"60,000"`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn first_unique<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for value in values.map(str::trim).filter(|v| !v.is_empty()) {
        if !seen.iter().any(|s| s == value) {
            seen.push(value.to_string());
        }
        if seen.len() == MAX_LISTED {
            break;
        }
    }
    seen
}

/// Share of remote postings as a whole percentage, e.g. `"65%"`.
fn remote_share(jobs: &[JobPosting]) -> String {
    if jobs.is_empty() {
        return "0%".to_string();
    }
    let remote = jobs.iter().filter(|job| job.is_remote()).count();
    format!("{:.0}%", remote as f64 / jobs.len() as f64 * 100.0)
}
