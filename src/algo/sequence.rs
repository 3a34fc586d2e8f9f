use super::*;

/// Erdős–Gallai realizability test: *true* iff some simple graph has exactly
/// the given degree sequence. The order of the input does not matter.
///
/// A sequence passes when every term lies in `[0, n - 1]`, the sum is even,
/// and for every prefix length `k` of the descending order
/// `Σ_{i≤k} d_i ≤ k(k-1) + Σ_{i>k} min(k, d_i)`.
pub fn is_graphic_sequence(sequence: &[NumNodes]) -> bool {
    let n = sequence.len();
    if sequence.iter().map(|&d| d as u64).sum::<u64>() % 2 != 0 {
        return false;
    }
    // a simple vertex has at most n - 1 neighbors
    if sequence.iter().any(|&d| d as usize >= n) {
        return false;
    }

    let mut degrees = sequence.to_vec();
    degrees.sort_unstable_by(|a, b| b.cmp(a));

    let mut prefix: u64 = 0;
    for (i, &d) in degrees.iter().enumerate() {
        let k = (i + 1) as u64;
        prefix += d as u64;
        let tail: u64 = degrees[i + 1..].iter().map(|&x| (x as u64).min(k)).sum();
        if prefix > k * (k - 1) + tail {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn realizable_sequences() {
        assert!(is_graphic_sequence(&[1, 1, 1, 1, 2, 2, 2, 4, 4]));
        assert!(is_graphic_sequence(&[2, 2, 2])); // triangle
        assert!(is_graphic_sequence(&[3, 3, 3, 3])); // K4
        assert!(is_graphic_sequence(&[0, 0, 0]));
        assert!(is_graphic_sequence(&[]));
    }

    #[test]
    fn unrealizable_sequences() {
        assert!(!is_graphic_sequence(&[1, 2, 3, 4, 5])); // 5 exceeds n - 1
        assert!(!is_graphic_sequence(&[0, 1, 2, 3, 4])); // degree-4 vertex next to an isolated one
        assert!(!is_graphic_sequence(&[1])); // odd sum
        assert!(!is_graphic_sequence(&[3, 3, 1, 1])); // fails the prefix inequality
    }

    #[test]
    fn order_is_irrelevant() {
        assert_eq!(
            is_graphic_sequence(&[4, 4, 2, 2, 2, 1, 1, 1, 1]),
            is_graphic_sequence(&[1, 1, 1, 1, 2, 2, 2, 4, 4])
        );
    }
}
