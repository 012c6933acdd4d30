//! Unit-cost edit distance and the normalized similarity score derived
//! from it.

/// Compute the Levenshtein distance between two strings.
///
/// Insertion, deletion, and substitution each cost 1; transpositions are not
/// discounted (classic Levenshtein, not Damerau-Levenshtein). Comparison is
/// per `char` and case sensitive, so `"Tee"` vs `"tee"` is distance 1.
///
/// Runs in O(|a|·|b|) time and O(min(|a|, |b|)) space using the usual
/// two-row dynamic program.
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Keep the DP rows sized by the shorter input.
    let (outer, inner) = if a.len() >= b.len() { (&a, &b) } else { (&b, &a) };

    let mut prev: Vec<usize> = (0..=inner.len()).collect();
    let mut curr: Vec<usize> = vec![0; inner.len() + 1];

    for (i, oc) in outer.iter().enumerate() {
        curr[0] = i + 1;
        for (j, ic) in inner.iter().enumerate() {
            let substitution = prev[j] + usize::from(oc != ic);
            let insertion = curr[j] + 1;
            let deletion = prev[j + 1] + 1;
            curr[j + 1] = substitution.min(insertion).min(deletion);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[inner.len()]
}

/// Normalized similarity in `[0, 1]` derived from [`levenshtein`].
///
/// Defined as `1 - distance / max(chars(a), chars(b))`. Two empty strings
/// score `1.0`. Symmetric in its arguments.
pub fn similarity(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    1.0 - levenshtein(a, b) as f64 / longest as f64
}
