use crate::models::{AveragePoint, LogCollection, MinMax, StatsResponse};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

pub fn build_stats(collection: &LogCollection) -> StatsResponse {
    StatsResponse {
        minmax: minmax(collection),
        weekly: weekly_average(collection),
        monthly: monthly_average(collection),
    }
}

/// Dates and values of the lowest and highest battery. `None` for an empty
/// collection. Ties go to the earliest date: the map iterates in ascending
/// date order and later equal values never displace the first one seen.
pub fn minmax(collection: &LogCollection) -> Option<MinMax> {
    let mut result: Option<MinMax> = None;
    for (date, entry) in &collection.entries {
        match result.as_mut() {
            None => {
                result = Some(MinMax {
                    min_date: date.clone(),
                    min_value: entry.battery,
                    max_date: date.clone(),
                    max_value: entry.battery,
                });
            }
            Some(current) => {
                if entry.battery < current.min_value {
                    current.min_date = date.clone();
                    current.min_value = entry.battery;
                }
                if entry.battery > current.max_value {
                    current.max_date = date.clone();
                    current.max_value = entry.battery;
                }
            }
        }
    }
    result
}

/// Mean battery per ISO calendar week, label "%G-W%V" (e.g. "2024-W22"),
/// ascending by label. Means are raw floats; rounding is up to the caller.
pub fn weekly_average(collection: &LogCollection) -> Vec<AveragePoint> {
    group_average(collection, |date| {
        let iso = date.iso_week();
        format!("{}-W{:02}", iso.year(), iso.week())
    })
}

/// Mean battery per calendar month, label "YYYY-MM", ascending by label.
pub fn monthly_average(collection: &LogCollection) -> Vec<AveragePoint> {
    group_average(collection, |date| format!("{}-{:02}", date.year(), date.month()))
}

fn group_average(
    collection: &LogCollection,
    label_for: impl Fn(NaiveDate) -> String,
) -> Vec<AveragePoint> {
    let mut buckets: BTreeMap<String, (u64, u32)> = BTreeMap::new();
    for (key, entry) in &collection.entries {
        // Keys written by this tool always parse; a hand-edited stray key is
        // skipped rather than poisoning the whole projection.
        let Ok(date) = NaiveDate::parse_from_str(key, "%Y-%m-%d") else {
            continue;
        };
        let bucket = buckets.entry(label_for(date)).or_default();
        bucket.0 += u64::from(entry.battery);
        bucket.1 += 1;
    }

    buckets
        .into_iter()
        .map(|(label, (sum, days))| AveragePoint {
            label,
            days,
            mean: sum as f64 / f64::from(days),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Entry;

    fn collection(records: &[(&str, u8)]) -> LogCollection {
        let mut collection = LogCollection::default();
        for (date, battery) in records {
            collection.entries.insert(
                (*date).to_string(),
                Entry {
                    battery: *battery,
                    note: String::new(),
                },
            );
        }
        collection
    }

    #[test]
    fn minmax_finds_extremes() {
        let data = collection(&[("2024-06-01", 10), ("2024-06-02", 90), ("2024-06-03", 50)]);
        let result = minmax(&data).unwrap();
        assert_eq!(result.min_date, "2024-06-01");
        assert_eq!(result.min_value, 10);
        assert_eq!(result.max_date, "2024-06-02");
        assert_eq!(result.max_value, 90);
    }

    #[test]
    fn minmax_ties_go_to_the_earliest_date() {
        let data = collection(&[("2024-06-03", 40), ("2024-06-01", 40), ("2024-06-02", 40)]);
        let result = minmax(&data).unwrap();
        assert_eq!(result.min_date, "2024-06-01");
        assert_eq!(result.max_date, "2024-06-01");
    }

    #[test]
    fn weekly_average_buckets_one_iso_week() {
        // Both dates fall in ISO week 2024-W22.
        let data = collection(&[("2024-06-01", 10), ("2024-06-02", 20)]);
        let weekly = weekly_average(&data);
        assert_eq!(weekly.len(), 1);
        assert_eq!(weekly[0].label, "2024-W22");
        assert_eq!(weekly[0].days, 2);
        assert_eq!(weekly[0].mean, 15.0);
    }

    #[test]
    fn weekly_average_splits_across_weeks_in_label_order() {
        // 2024-06-02 is a Sunday (W22); 2024-06-03 starts W23.
        let data = collection(&[("2024-06-03", 80), ("2024-06-02", 20), ("2024-06-01", 10)]);
        let weekly = weekly_average(&data);
        assert_eq!(weekly.len(), 2);
        assert_eq!(weekly[0].label, "2024-W22");
        assert_eq!(weekly[0].mean, 15.0);
        assert_eq!(weekly[1].label, "2024-W23");
        assert_eq!(weekly[1].mean, 80.0);
    }

    #[test]
    fn monthly_average_groups_by_calendar_month() {
        let data = collection(&[("2024-05-31", 30), ("2024-06-01", 10), ("2024-06-02", 20)]);
        let monthly = monthly_average(&data);
        assert_eq!(monthly.len(), 2);
        assert_eq!(monthly[0].label, "2024-05");
        assert_eq!(monthly[0].mean, 30.0);
        assert_eq!(monthly[1].label, "2024-06");
        assert_eq!(monthly[1].mean, 15.0);
    }

    #[test]
    fn empty_collection_yields_empty_projections() {
        let data = LogCollection::default();
        assert!(minmax(&data).is_none());
        assert!(weekly_average(&data).is_empty());
        assert!(monthly_average(&data).is_empty());
    }
}
