//! Folding many results into one.
//!
//! Aggregation is all-or-first-error: the first `Failure` ends the fold and
//! is returned as-is, and nothing after it is pulled from the input.

use crate::core::ResultValue;
use tracing::trace;

/// Collect the success payloads of `results`, or return the first failure.
///
/// The input is consumed in order. On the first `Failure` the iterator is
/// dropped without being advanced again, so lazily produced elements after
/// it are never computed. Payloads gathered so far are discarded.
///
/// # Example
///
/// ```rust
/// use resolute::{pack_results, ResultValue};
///
/// let all_ok: Vec<ResultValue<i32, &str>> = vec![
///     ResultValue::success(1),
///     ResultValue::success(2),
///     ResultValue::success(3),
/// ];
/// assert_eq!(pack_results(all_ok), ResultValue::success(vec![1, 2, 3]));
///
/// let first_wins: Vec<ResultValue<i32, &str>> = vec![
///     ResultValue::failure("a"),
///     ResultValue::failure("b"),
/// ];
/// assert_eq!(pack_results(first_wins), ResultValue::failure("a"));
/// ```
pub fn pack_results<T, E, I>(results: I) -> ResultValue<Vec<T>, E>
where
    I: IntoIterator<Item = ResultValue<T, E>>,
{
    let mut packed = Vec::new();

    for (index, result) in results.into_iter().enumerate() {
        match result {
            ResultValue::Success(value) => packed.push(value),
            ResultValue::Failure(error) => {
                trace!(index, "pack short-circuited on failure");
                return ResultValue::Failure(error);
            }
        }
    }

    ResultValue::Success(packed)
}

/// Collect into any container of success payloads, stopping at the first
/// failure.
///
/// ```rust
/// use resolute::ResultValue;
/// use std::collections::BTreeSet;
///
/// let words = ["b", "a", "b"];
/// let set: ResultValue<BTreeSet<&str>, ()> =
///     words.iter().map(|w| ResultValue::success(*w)).collect();
/// assert_eq!(set.unwrap().len(), 2);
/// ```
impl<T, E, V> FromIterator<ResultValue<T, E>> for ResultValue<V, E>
where
    V: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = ResultValue<T, E>>>(iter: I) -> Self {
        let mut failure = None;
        let collected = iter
            .into_iter()
            .map_while(|result| match result {
                ResultValue::Success(value) => Some(value),
                ResultValue::Failure(error) => {
                    failure = Some(error);
                    None
                }
            })
            .collect::<V>();

        match failure {
            Some(error) => ResultValue::Failure(error),
            None => ResultValue::Success(collected),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn pack_results_collects_in_order() {
        let results: Vec<ResultValue<i32, &str>> = vec![
            ResultValue::success(1),
            ResultValue::success(2),
            ResultValue::success(3),
        ];
        assert_eq!(pack_results(results), ResultValue::success(vec![1, 2, 3]));
    }

    #[test]
    fn pack_results_returns_first_failure() {
        let results: Vec<ResultValue<i32, &str>> = vec![
            ResultValue::success(1),
            ResultValue::failure("x"),
            ResultValue::success(3),
        ];
        assert_eq!(pack_results(results), ResultValue::failure("x"));
    }

    #[test]
    fn pack_results_first_failure_wins() {
        let results: Vec<ResultValue<i32, &str>> =
            vec![ResultValue::failure("a"), ResultValue::failure("b")];
        assert_eq!(pack_results(results), ResultValue::failure("a"));
    }

    #[test]
    fn pack_results_of_nothing_is_empty_success() {
        let results: Vec<ResultValue<i32, &str>> = Vec::new();
        assert_eq!(pack_results(results), ResultValue::success(vec![]));
    }

    #[test]
    fn pack_results_never_produces_elements_after_failure() {
        let produced = Cell::new(0);
        let inputs = [Ok(1), Err("x"), Ok(3)];

        let packed = pack_results(inputs.iter().map(|input| {
            produced.set(produced.get() + 1);
            ResultValue::from(*input)
        }));

        assert_eq!(packed, ResultValue::failure("x"));
        assert_eq!(produced.get(), 2);
    }

    #[test]
    fn pack_results_ignores_reported_length_when_failing_first() {
        let endless = std::iter::repeat(ResultValue::<u64, &str>::failure("a")).take(usize::MAX);
        assert_eq!(pack_results(endless), ResultValue::failure("a"));
    }

    #[test]
    fn collect_matches_pack_results() {
        let results = vec![
            ResultValue::<i32, &str>::success(4),
            ResultValue::success(5),
        ];
        let collected: ResultValue<Vec<i32>, &str> = results.clone().into_iter().collect();
        assert_eq!(collected, pack_results(results));
    }

    #[test]
    fn collect_stops_at_first_failure() {
        let produced = Cell::new(0);
        let collected: ResultValue<Vec<i32>, &str> = [Ok(1), Err("a"), Err("b")]
            .into_iter()
            .map(|input| {
                produced.set(produced.get() + 1);
                ResultValue::from(input)
            })
            .collect();

        assert_eq!(collected, ResultValue::failure("a"));
        assert_eq!(produced.get(), 2);
    }

    #[test]
    fn collect_into_string() {
        let collected: ResultValue<String, ()> = "abc"
            .chars()
            .map(ResultValue::success)
            .collect();
        assert_eq!(collected, ResultValue::success("abc".to_string()));
    }
}
