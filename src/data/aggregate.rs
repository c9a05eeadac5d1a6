use std::collections::BTreeMap;

use super::model::TradeRecord;

// ---------------------------------------------------------------------------
// Aggregation: raw year series and group-by-mean
// ---------------------------------------------------------------------------

/// The raw `(year, value)` points of a selection, sorted by year.
/// Rows without a trade value are dropped.
pub fn year_series(records: &[TradeRecord], indices: &[usize]) -> Vec<(i64, f64)> {
    let mut points: Vec<(i64, f64)> = indices
        .iter()
        .filter_map(|&i| {
            let rec = &records[i];
            rec.value.map(|v| (rec.year, v))
        })
        .collect();
    points.sort_by_key(|&(year, _)| year);
    points
}

/// Arithmetic mean of trade value per year over the selection.
///
/// One output row per distinct year; rows missing a value are excluded. A
/// year whose every row is missing produces no output row.
pub fn mean_by_year(records: &[TradeRecord], indices: &[usize]) -> Vec<(i64, f64)> {
    grouped_mean(records, indices, |rec| rec.year)
}

/// Arithmetic mean of trade value per decade over the selection.
/// Same exclusion rule as [`mean_by_year`].
pub fn mean_by_decade(records: &[TradeRecord], indices: &[usize]) -> Vec<(i64, f64)> {
    grouped_mean(records, indices, |rec| rec.decade())
}

fn grouped_mean<K>(records: &[TradeRecord], indices: &[usize], key: K) -> Vec<(i64, f64)>
where
    K: Fn(&TradeRecord) -> i64,
{
    let mut groups: BTreeMap<i64, (f64, usize)> = BTreeMap::new();
    for &i in indices {
        let rec = &records[i];
        if let Some(value) = rec.value {
            let (sum, count) = groups.entry(key(rec)).or_insert((0.0, 0));
            *sum += value;
            *count += 1;
        }
    }
    groups
        .into_iter()
        .map(|(k, (sum, count))| (k, sum / count as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: i64, value: Option<f64>) -> TradeRecord {
        TradeRecord {
            country: "Chile".to_string(),
            indicator: "Trade share".to_string(),
            region: "Latin America".to_string(),
            income_group: "High income".to_string(),
            year,
            value,
        }
    }

    fn all_indices(records: &[TradeRecord]) -> Vec<usize> {
        (0..records.len()).collect()
    }

    #[test]
    fn year_series_drops_missing_and_sorts() {
        let records = vec![
            record(2002, Some(30.0)),
            record(2000, Some(10.0)),
            record(2001, None),
        ];
        let points = year_series(&records, &all_indices(&records));
        assert_eq!(points, vec![(2000, 10.0), (2002, 30.0)]);
    }

    #[test]
    fn mean_by_decade_averages_present_values_only() {
        let records = vec![
            record(1991, Some(10.0)),
            record(1995, Some(30.0)),
            record(1999, None),
            record(2003, Some(50.0)),
        ];
        let means = mean_by_decade(&records, &all_indices(&records));
        assert_eq!(means, vec![(1990, 20.0), (2000, 50.0)]);
    }

    #[test]
    fn group_with_only_missing_values_is_absent() {
        let records = vec![record(1985, None), record(1995, Some(12.0))];
        let means = mean_by_decade(&records, &all_indices(&records));
        assert_eq!(means, vec![(1990, 12.0)]);
    }

    #[test]
    fn mean_by_year_one_row_per_distinct_year() {
        let records = vec![
            record(2000, Some(10.0)),
            record(2000, Some(20.0)),
            record(2001, Some(40.0)),
        ];
        let means = mean_by_year(&records, &all_indices(&records));
        assert_eq!(means, vec![(2000, 15.0), (2001, 40.0)]);
    }

    #[test]
    fn empty_selection_aggregates_to_nothing() {
        let records = vec![record(2000, Some(10.0))];
        assert!(mean_by_year(&records, &[]).is_empty());
        assert!(mean_by_decade(&records, &[]).is_empty());
        assert!(year_series(&records, &[]).is_empty());
    }
}
