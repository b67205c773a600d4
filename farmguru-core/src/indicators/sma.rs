//! Simple Moving Average (SMA).
//!
//! Trailing mean of prices over a lookback window.
//! First defined value at index window - 1; earlier entries are `None`.

/// Compute trailing SMA values over a raw price slice.
///
/// `result[i]` is `Some(mean(values[i-window+1 ..= i]))` once at least
/// `window` values exist at or before `i`, otherwise `None`. A window that
/// contains a non-finite price also yields `None` at that index; the
/// classifier treats missing and unusable averages the same way.
///
/// `window == 0` and series shorter than `window` degrade to an all-`None`
/// result; callers that want a hard error validate the window first
/// (see [`crate::signal::annotate`]).
pub fn sma_of_series(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let n = values.len();
    let mut result = vec![None; n];

    if window == 0 || n < window {
        return result;
    }

    // Compute initial window sum
    let mut sum = 0.0;
    let mut bad_in_window = false;
    for &v in values.iter().take(window) {
        if !v.is_finite() {
            bad_in_window = true;
        }
        sum += v;
    }

    if !bad_in_window {
        result[window - 1] = Some(sum / window as f64);
    }

    // Roll the window forward
    for i in window..n {
        let leaving = values[i - window];
        let entering = values[i];
        sum = sum - leaving + entering;

        // A non-finite value entering or leaving poisons the running sum;
        // rescan the window to re-establish it.
        if !entering.is_finite() || !leaving.is_finite() || bad_in_window {
            bad_in_window = false;
            sum = 0.0;
            for &v in &values[(i + 1 - window)..=i] {
                if !v.is_finite() {
                    bad_in_window = true;
                }
                sum += v;
            }
            if bad_in_window {
                continue;
            }
        }

        result[i] = Some(sum / window as f64);
    }

    result
}
