use super::model::{TradeDataset, TradeRecord};

// ---------------------------------------------------------------------------
// Equality filters: each route pins one dimension plus the indicator
// ---------------------------------------------------------------------------

/// Return indices of rows matching the given country and indicator exactly.
///
/// Unknown values match nothing, so an unknown pair yields an empty set.
pub fn by_country_indicator(dataset: &TradeDataset, country: &str, indicator: &str) -> Vec<usize> {
    matching(dataset, |r| r.country == country && r.indicator == indicator)
}

/// Return indices of rows matching the given region and indicator exactly.
pub fn by_region_indicator(dataset: &TradeDataset, region: &str, indicator: &str) -> Vec<usize> {
    matching(dataset, |r| r.region == region && r.indicator == indicator)
}

/// Return indices of rows matching the given income group and indicator exactly.
pub fn by_income_indicator(dataset: &TradeDataset, income_group: &str, indicator: &str) -> Vec<usize> {
    matching(dataset, |r| {
        r.income_group == income_group && r.indicator == indicator
    })
}

fn matching<F>(dataset: &TradeDataset, predicate: F) -> Vec<usize>
where
    F: Fn(&TradeRecord) -> bool,
{
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| predicate(rec))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> TradeDataset {
        let row = |country: &str, indicator: &str, region: &str, income: &str, year: i64| TradeRecord {
            country: country.to_string(),
            indicator: indicator.to_string(),
            region: region.to_string(),
            income_group: income.to_string(),
            year,
            value: Some(10.0),
        };
        TradeDataset::from_records(vec![
            row("Chile", "Trade share", "Latin America", "High income", 2000),
            row("Chile", "Trade share", "Latin America", "High income", 2001),
            row("Chile", "Export share", "Latin America", "High income", 2000),
            row("Kenya", "Trade share", "Sub-Saharan Africa", "Lower middle income", 2000),
        ])
    }

    #[test]
    fn country_indicator_matches_both_fields() {
        let ds = dataset();
        assert_eq!(by_country_indicator(&ds, "Chile", "Trade share"), vec![0, 1]);
        assert_eq!(by_country_indicator(&ds, "Chile", "Export share"), vec![2]);
    }

    #[test]
    fn unknown_pair_yields_empty_set() {
        let ds = dataset();
        assert!(by_country_indicator(&ds, "Atlantis", "Trade share").is_empty());
        assert!(by_country_indicator(&ds, "Chile", "No such indicator").is_empty());
        assert!(by_region_indicator(&ds, "Mars", "Trade share").is_empty());
        assert!(by_income_indicator(&ds, "No income", "Trade share").is_empty());
    }

    #[test]
    fn region_and_income_filters() {
        let ds = dataset();
        assert_eq!(by_region_indicator(&ds, "Sub-Saharan Africa", "Trade share"), vec![3]);
        assert_eq!(
            by_income_indicator(&ds, "Lower middle income", "Trade share"),
            vec![3]
        );
    }
}
