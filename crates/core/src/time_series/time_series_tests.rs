//! Tests for the time series store.

#[cfg(test)]
mod tests {
    use crate::errors::Error;
    use crate::time_series::{Observation, TimeSeries};
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn usdclp() -> TimeSeries {
        let mut ts = TimeSeries::new();
        // Inserted out of order on purpose
        ts.set(d(2023, 12, 29), 900.0);
        ts.set(d(2023, 1, 2), 850.0);
        ts.set(d(2023, 6, 15), 870.0);
        ts
    }

    #[test]
    fn test_get_returns_last_write() {
        let mut ts = TimeSeries::new();
        assert_eq!(ts.set(d(2023, 1, 2), 850.0), None);
        assert_eq!(ts.set(d(2023, 1, 2), 851.5), Some(850.0));
        assert_eq!(ts.get(d(2023, 1, 2)).unwrap(), 851.5);
        assert_eq!(ts.len(), 1);
    }

    #[test]
    fn test_get_missing_date_is_not_found() {
        let ts = usdclp();
        let err = ts.get(d(2023, 1, 3)).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
        assert!(err.to_string().contains("2023-01-03"));
    }

    #[test]
    fn test_keys_are_ascending_regardless_of_insertion_order() {
        let keys: Vec<_> = usdclp().keys().collect();
        assert_eq!(keys, vec![d(2023, 1, 2), d(2023, 6, 15), d(2023, 12, 29)]);
    }

    #[test]
    fn test_range_is_inclusive_on_both_ends() {
        let ts = usdclp();
        let sub = ts.range(d(2023, 1, 2), d(2023, 6, 15));
        let values: Vec<_> = sub.iter().map(|o| o.value).collect();
        assert_eq!(values, vec![850.0, 870.0]);
    }

    #[test]
    fn test_range_full_year() {
        let ts = usdclp();
        let sub = ts.range(d(2023, 1, 1), d(2023, 12, 31));
        assert_eq!(sub, ts);
    }

    #[test]
    fn test_range_single_month() {
        let sub = usdclp().range(d(2023, 6, 1), d(2023, 6, 30));
        assert_eq!(
            sub.iter().collect::<Vec<_>>(),
            vec![Observation::new(d(2023, 6, 15), 870.0)]
        );
    }

    #[test]
    fn test_range_inverted_is_empty() {
        let sub = usdclp().range(d(2023, 12, 31), d(2023, 1, 1));
        assert!(sub.is_empty());
    }

    #[test]
    fn test_range_without_observations_is_empty() {
        let sub = usdclp().range(d(2024, 1, 1), d(2024, 12, 31));
        assert!(sub.is_empty());
    }

    #[test]
    fn test_range_returns_independent_copy() {
        let ts = usdclp();
        let mut sub = ts.range(d(2023, 1, 1), d(2023, 12, 31));
        sub.set(d(2023, 1, 2), 0.0);
        sub.set(d(2023, 3, 1), 1.0);
        assert_eq!(ts.get(d(2023, 1, 2)).unwrap(), 850.0);
        assert!(!ts.contains(d(2023, 3, 1)));
    }

    #[test]
    fn test_first_and_last() {
        let ts = usdclp();
        assert_eq!(ts.first(), Some(Observation::new(d(2023, 1, 2), 850.0)));
        assert_eq!(ts.last(), Some(Observation::new(d(2023, 12, 29), 900.0)));
        assert_eq!(TimeSeries::new().first(), None);
    }

    #[test]
    fn test_collect_keeps_last_duplicate() {
        let ts: TimeSeries = vec![(d(2023, 1, 2), 1.0), (d(2023, 1, 2), 2.0)]
            .into_iter()
            .collect();
        assert_eq!(ts.len(), 1);
        assert_eq!(ts.get(d(2023, 1, 2)).unwrap(), 2.0);
    }

    #[test]
    fn test_serializes_as_iso_date_map() {
        let json = serde_json::to_string(&usdclp()).unwrap();
        assert_eq!(
            json,
            r#"{"2023-01-02":850.0,"2023-06-15":870.0,"2023-12-29":900.0}"#
        );
    }
}
