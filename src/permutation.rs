/// Every permutation of `0..n`, in lexicographic order starting from the
/// identity.
///
/// `n = 0` yields exactly one (empty) permutation.
#[derive(Debug, Clone)]
pub struct LexicographicPermutations {
    current: Vec<usize>,
    exhausted: bool,
}

impl LexicographicPermutations {
    pub fn new(n: usize) -> Self {
        Self {
            current: (0..n).collect(),
            exhausted: false,
        }
    }

    /// Rewinds to the identity permutation.
    pub fn restart(&mut self) {
        self.current.sort_unstable();
        self.exhausted = false;
    }
}

impl Iterator for LexicographicPermutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let item = self.current.clone();
        self.exhausted = !next_permutation(&mut self.current);
        Some(item)
    }
}

/// Rearranges `p` into its lexicographic successor. Returns `false` (leaving
/// `p` untouched) when `p` is already the last permutation.
fn next_permutation(p: &mut [usize]) -> bool {
    let Some(pivot) = p.windows(2).rposition(|w| w[0] < w[1]) else {
        return false;
    };

    // p[pivot + 1..] is non-increasing and holds something larger than p[pivot]
    let mut successor = p.len() - 1;
    while p[successor] <= p[pivot] {
        successor -= 1;
    }
    p.swap(pivot, successor);
    p[pivot + 1..].reverse();
    true
}
