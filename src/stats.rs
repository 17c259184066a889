use crate::medications::MedicationNames;
use crate::models::{HeadacheEntry, MedicationStat, MonthlyPoint, Statistics};
use chrono::{Datelike, NaiveDate};
use std::collections::{BTreeMap, HashMap};

struct MonthBucket {
    label: String,
    count: u64,
    average_severity: f64,
}

/// Summarizes entries into totals, a severity histogram, per-month frequency
/// and ranked medication usage. Total function: malformed dates or severities
/// degrade to omission, never to a panic. Callers that care about medication
/// tie-breaking should pass entries in chronological order.
pub fn build_statistics(entries: &[HeadacheEntry], names: &MedicationNames) -> Statistics {
    let mut total_headaches = 0u64;
    let mut severity_distribution = [0u64; 5];
    // Keyed by (year, month) so iteration is chronological, not label order.
    let mut monthly: BTreeMap<(i32, u32), MonthBucket> = BTreeMap::new();
    let mut medication_counts: HashMap<String, u64> = HashMap::new();
    let mut medication_order: Vec<String> = Vec::new();

    for entry in entries {
        total_headaches += 1;

        let severity = entry.severity.filter(|value| (1..=5).contains(value));
        if let Some(value) = severity {
            severity_distribution[(value - 1) as usize] += 1;
        }

        if let Some(date) = parse_entry_date(&entry.date) {
            // Missing or out-of-range severity folds into the average as 0.
            let contribution = severity.unwrap_or(0) as f64;
            let bucket = monthly
                .entry((date.year(), date.month()))
                .or_insert_with(|| MonthBucket {
                    label: month_label(date),
                    count: 0,
                    average_severity: 0.0,
                });
            let old_count = bucket.count as f64;
            bucket.count += 1;
            bucket.average_severity =
                (bucket.average_severity * old_count + contribution) / bucket.count as f64;
        }

        for id in &entry.medications {
            if id.is_empty() {
                continue;
            }
            let name = names.resolve(id);
            match medication_counts.get_mut(name) {
                Some(count) => *count += 1,
                None => {
                    medication_counts.insert(name.to_string(), 1);
                    medication_order.push(name.to_string());
                }
            }
        }
    }

    let monthly_frequency = monthly
        .into_values()
        .map(|bucket| MonthlyPoint {
            month: bucket.label,
            count: bucket.count,
            average_severity: bucket.average_severity,
        })
        .collect();

    let mut medication_stats: Vec<MedicationStat> = medication_order
        .into_iter()
        .map(|name| {
            let count = medication_counts.get(&name).copied().unwrap_or(0);
            MedicationStat { name, count }
        })
        .collect();
    // Stable sort keeps first-encountered order for equal counts.
    medication_stats.sort_by(|a, b| b.count.cmp(&a.count));

    Statistics {
        total_headaches,
        severity_distribution,
        monthly_frequency,
        medication_stats,
    }
}

fn parse_entry_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

fn month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}
