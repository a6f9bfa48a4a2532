use log::debug;

/// Extract every maximal run of ASCII digits as an integer, in order of appearance.
///
/// This is a textual scan, not a tokenizer: `"10"` is the single number 10, but
/// `"2.5"` yields both 2 and 5 because the decimal point splits the run. Runs too
/// long for `u64` saturate to `u64::MAX`.
pub fn digit_runs(text: &str) -> Vec<u64> {
    let mut runs = Vec::new();
    let mut current: Option<u64> = None;

    for c in text.chars() {
        match c.to_digit(10) {
            Some(digit) => {
                let value = current.unwrap_or(0);
                current = Some(value.saturating_mul(10).saturating_add(u64::from(digit)));
            }
            None => {
                if let Some(value) = current.take() {
                    runs.push(value);
                }
            }
        }
    }
    if let Some(value) = current {
        runs.push(value);
    }

    debug!("Extracted digit runs {:?} from '{}'", runs, text);
    runs
}
