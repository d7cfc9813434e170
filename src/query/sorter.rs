//! Result sorting for the listing query
//!
//! Sort is stable. Records without a value for the sort field always go
//! last, whatever the direction.

use std::cmp::Ordering;

use serde_json::{Number, Value};

use super::collation::locale_compare;
use super::options::{SortDirection, SortSpec};
use crate::record::UserRecord;

/// Sorts records by a single field
pub struct RecordSorter;

impl RecordSorter {
    /// Sorts records in place according to the sort specification
    pub fn sort(records: &mut [&UserRecord], sort_spec: &SortSpec) {
        records.sort_by(|a, b| {
            Self::compare(
                a.get(&sort_spec.field),
                b.get(&sort_spec.field),
                sort_spec.direction,
            )
        });
    }

    /// Compares two field values.
    ///
    /// Absent values are greater than any present value and that is not
    /// flipped by `direction`.
    pub fn compare(a: Option<&Value>, b: Option<&Value>, direction: SortDirection) -> Ordering {
        let ordering = match (a, b) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Greater,
            (Some(_), None) => return Ordering::Less,
            (Some(Value::String(a_s)), Some(Value::String(b_s))) => locale_compare(a_s, b_s),
            (Some(a_val), Some(b_val)) => Self::compare_values(a_val, b_val),
        };

        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    /// Generic ordering for non-string pairs.
    ///
    /// Ordering rules:
    /// - bool < number < string < array < object
    /// - numbers by exact value, `false < true`
    /// - arrays and objects are not compared
    fn compare_values(a: &Value, b: &Value) -> Ordering {
        let type_order = |v: &Value| -> u8 {
            match v {
                Value::Null => 0,
                Value::Bool(_) => 1,
                Value::Number(_) => 2,
                Value::String(_) => 3,
                Value::Array(_) => 4,
                Value::Object(_) => 5,
            }
        };

        let a_type = type_order(a);
        let b_type = type_order(b);
        if a_type != b_type {
            return a_type.cmp(&b_type);
        }

        match (a, b) {
            (Value::Bool(a_b), Value::Bool(b_b)) => a_b.cmp(b_b),
            (Value::Number(a_n), Value::Number(b_n)) => Self::compare_numbers(a_n, b_n),
            (Value::String(a_s), Value::String(b_s)) => locale_compare(a_s, b_s),
            _ => Ordering::Equal,
        }
    }

    /// Exact numeric ordering across integer and float representations.
    ///
    /// Never rounds an integer through `f64`, so the order stays transitive
    /// for integers beyond 2^53.
    fn compare_numbers(a: &Number, b: &Number) -> Ordering {
        match (Self::as_integer(a), Self::as_integer(b)) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(x), None) => Self::compare_int_float(x, b.as_f64().unwrap_or(0.0)),
            (None, Some(y)) => Self::compare_int_float(y, a.as_f64().unwrap_or(0.0)).reverse(),
            (None, None) => {
                let a_f = a.as_f64().unwrap_or(0.0);
                let b_f = b.as_f64().unwrap_or(0.0);
                // JSON numbers are never NaN
                a_f.partial_cmp(&b_f).unwrap_or(Ordering::Equal)
            }
        }
    }

    fn as_integer(n: &Number) -> Option<i128> {
        n.as_i64()
            .map(i128::from)
            .or_else(|| n.as_u64().map(i128::from))
    }

    fn compare_int_float(int: i128, float: f64) -> Ordering {
        // Outside the i64/u64 range the float decides on its own
        if float >= U64_LIMIT {
            return Ordering::Less;
        }
        if float < I64_FLOOR {
            return Ordering::Greater;
        }

        // |float| < 2^64 here, so its integral part is exact in i128
        let whole = float.trunc() as i128;
        match int.cmp(&whole) {
            Ordering::Equal => {
                let fract = float.fract();
                if fract > 0.0 {
                    Ordering::Less
                } else if fract < 0.0 {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
            }
            other => other,
        }
    }
}

/// 2^64, one past `u64::MAX`
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;
/// -2^63, `i64::MIN`
const I64_FLOOR: f64 = -9_223_372_036_854_775_808.0;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn users(values: Vec<Value>) -> Vec<UserRecord> {
        values.into_iter().map(UserRecord::from_value).collect()
    }

    fn sorted_ids(records: &[UserRecord], spec: &SortSpec) -> Vec<i64> {
        let mut refs: Vec<&UserRecord> = records.iter().collect();
        RecordSorter::sort(&mut refs, spec);
        refs.iter().filter_map(|u| u.id()).collect()
    }

    #[test]
    fn test_sort_ascending() {
        let records = users(vec![
            json!({"id": 3, "age": 30}),
            json!({"id": 1, "age": 20}),
            json!({"id": 2, "age": 25}),
        ]);
        assert_eq!(sorted_ids(&records, &SortSpec::asc("age")), vec![1, 2, 3]);
    }

    #[test]
    fn test_sort_descending() {
        let records = users(vec![
            json!({"id": 3, "age": 30}),
            json!({"id": 1, "age": 20}),
            json!({"id": 2, "age": 25}),
        ]);
        assert_eq!(sorted_ids(&records, &SortSpec::desc("age")), vec![3, 2, 1]);
    }

    #[test]
    fn test_sort_stable() {
        // Same value, original order preserved in both directions
        let records = users(vec![
            json!({"id": 1, "job": "dev"}),
            json!({"id": 2, "job": "dev"}),
            json!({"id": 3, "job": "dev"}),
        ]);
        assert_eq!(sorted_ids(&records, &SortSpec::asc("job")), vec![1, 2, 3]);
        assert_eq!(sorted_ids(&records, &SortSpec::desc("job")), vec![1, 2, 3]);
    }

    #[test]
    fn test_missing_values_last_both_directions() {
        let records = users(vec![
            json!({"id": 1}),
            json!({"id": 2, "lastName": "Berg"}),
            json!({"id": 3, "lastName": null}),
            json!({"id": 4, "lastName": "Adams"}),
        ]);
        assert_eq!(
            sorted_ids(&records, &SortSpec::asc("lastName")),
            vec![4, 2, 1, 3]
        );
        assert_eq!(
            sorted_ids(&records, &SortSpec::desc("lastName")),
            vec![2, 4, 1, 3]
        );
    }

    #[test]
    fn test_strings_use_locale_order() {
        let records = users(vec![
            json!({"id": 1, "firstName": "bob"}),
            json!({"id": 2, "firstName": "Alice"}),
            json!({"id": 3, "firstName": "Émile"}),
        ]);
        assert_eq!(
            sorted_ids(&records, &SortSpec::asc("firstName")),
            vec![2, 1, 3]
        );
    }

    #[test]
    fn test_booleans_and_mixed_kinds() {
        let records = users(vec![
            json!({"id": 1, "v": "x"}),
            json!({"id": 2, "v": true}),
            json!({"id": 3, "v": 5}),
            json!({"id": 4, "v": false}),
        ]);
        assert_eq!(sorted_ids(&records, &SortSpec::asc("v")), vec![4, 2, 3, 1]);
    }

    #[test]
    fn test_compare_absent() {
        let v = json!(1);
        assert_eq!(
            RecordSorter::compare(None, Some(&v), SortDirection::Desc),
            Ordering::Greater
        );
        assert_eq!(
            RecordSorter::compare(None, None, SortDirection::Asc),
            Ordering::Equal
        );
    }

    #[test]
    fn test_large_integers_against_floats() {
        let big = json!(9_007_199_254_740_993_i64);
        let exact = json!(9_007_199_254_740_992_i64);
        let float = json!(9_007_199_254_740_992.0);

        let cmp = |a: &Value, b: &Value| RecordSorter::compare(Some(a), Some(b), SortDirection::Asc);
        assert_eq!(cmp(&exact, &big), Ordering::Less);
        assert_eq!(cmp(&exact, &float), Ordering::Equal);
        assert_eq!(cmp(&big, &float), Ordering::Greater);
        assert_eq!(cmp(&float, &big), Ordering::Less);
    }

    #[test]
    fn test_sort_mixed_number_representations() {
        let records = users(vec![
            json!({"id": 1, "n": 9_007_199_254_740_993_i64}),
            json!({"id": 2, "n": 9_007_199_254_740_992.0}),
            json!({"id": 3, "n": 9_007_199_254_740_992_i64}),
            json!({"id": 4, "n": u64::MAX}),
            json!({"id": 5, "n": -0.5}),
            json!({"id": 6, "n": 0}),
            json!({"id": 7, "n": 0.5}),
        ]);
        assert_eq!(
            sorted_ids(&records, &SortSpec::asc("n")),
            vec![5, 6, 7, 2, 3, 1, 4]
        );
    }

    #[test]
    fn test_floats_beyond_integer_range() {
        let cmp = |a: Value, b: Value| RecordSorter::compare(Some(&a), Some(&b), SortDirection::Asc);
        assert_eq!(cmp(json!(u64::MAX), json!(1.0e20)), Ordering::Less);
        assert_eq!(cmp(json!(i64::MIN), json!(-1.0e20)), Ordering::Greater);
        assert_eq!(cmp(json!(i64::MIN), json!(-9_223_372_036_854_775_808.0)), Ordering::Equal);
    }
}
