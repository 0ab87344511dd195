/// Reduces the samples of one target to its reported score.
///
/// The samples are sorted in place from highest to lowest, after which the first
/// `best_measurement_count` of them are summed. The score is therefore the total of the best
/// cycles, not their mean. If fewer samples exist than requested, all of them are summed;
/// an empty buffer or a count of zero yields zero.
///
/// Sorting uses the IEEE total order, so a NaN sample ranks above every number and makes the
/// score NaN if it is selected.
///
/// # Examples
///
/// ```
/// use cycle_bench::aggregate;
///
/// let mut samples = vec![10.0, 40.0, 20.0, 30.0];
///
/// assert_eq!(aggregate(&mut samples, 2), 70.0);
/// assert_eq!(samples, [40.0, 30.0, 20.0, 10.0]);
/// ```
pub fn aggregate(samples: &mut [f64], best_measurement_count: u32) -> f64 {
    samples.sort_unstable_by(|a, b| b.total_cmp(a));

    let take = usize::try_from(best_measurement_count).unwrap_or(usize::MAX);

    samples.iter().take(take).sum()
}
