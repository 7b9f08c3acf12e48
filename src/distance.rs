//! Levenshtein edit distance, the base metric of every scorer.

/// Minimum number of single-character insertions, deletions or substitutions
/// turning `a` into `b`.
///
/// Works on Unicode scalar values and is case-sensitive.
///
/// ```
/// use episode_matcher::distance::levenshtein;
///
/// assert_eq!(levenshtein("kitten", "sitting"), 3);
/// ```
pub fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let len_b = b_chars.len();

    if a.is_empty() {
        return len_b;
    }
    if len_b == 0 {
        return a.chars().count();
    }

    let mut prev_row: Vec<usize> = (0..=len_b).collect();
    let mut curr_row = vec![0; len_b + 1];

    for (i, ca) in a.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, &cb) in b_chars.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len_b]
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "",
        "a",
        "kitten",
        "sitting",
        "Attack on Titan",
        "Attack on Titan S3",
        "Shingeki no Kyojin",
        "My Hero Academia",
        "Gate",
        "Tôradora!",
    ];

    #[test]
    fn test_kitten_sitting() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abcd", ""), 4);
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(levenshtein("Gate", "gate"), 1);
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        assert_eq!(levenshtein("Tôradora", "Toradora"), 1);
        assert_eq!(levenshtein("", "ô"), 1);
    }

    #[test]
    fn test_identity() {
        for a in SAMPLES {
            assert_eq!(levenshtein(a, a), 0);
        }
    }

    #[test]
    fn test_symmetry() {
        for a in SAMPLES {
            for b in SAMPLES {
                assert_eq!(levenshtein(a, b), levenshtein(b, a), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn test_triangle_inequality() {
        for a in SAMPLES {
            for b in SAMPLES {
                for c in SAMPLES {
                    assert!(levenshtein(a, b) <= levenshtein(a, c) + levenshtein(c, b));
                }
            }
        }
    }

    #[test]
    fn test_matches_rapidfuzz() {
        use rapidfuzz::distance::levenshtein as oracle;

        for a in SAMPLES {
            for b in SAMPLES {
                assert_eq!(
                    levenshtein(a, b),
                    oracle::distance(a.chars(), b.chars()),
                    "{a:?} vs {b:?}"
                );
            }
        }
    }
}
