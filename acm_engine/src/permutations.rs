/// ACM Engine: k-Permutation Enumeration
///
/// Ordered arrangements of `r` distinct indices out of `0..n`,
/// in lexicographic order. One buffer, reused between steps.

pub struct Permutations {
    n: usize,
    indices: Vec<usize>,
    used: Vec<bool>,
    started: bool,
    exhausted: bool,
}

impl Permutations {
    pub fn new(n: usize, r: usize) -> Self {
        let mut used = vec![false; n];
        let exhausted = r > n;
        let indices: Vec<usize> = if exhausted { Vec::new() } else { (0..r).collect() };
        for &i in &indices {
            used[i] = true;
        }
        Self {
            n,
            indices,
            used,
            started: false,
            exhausted,
        }
    }

    /// Step to the next arrangement. `None` once every arrangement was seen.
    pub fn advance(&mut self) -> Option<&[usize]> {
        if self.exhausted {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(&self.indices);
        }
        if self.step() {
            Some(&self.indices)
        } else {
            self.exhausted = true;
            None
        }
    }

    /// Bump the rightmost position that still has a larger free index,
    /// then refill everything to its right with the smallest free indices.
    fn step(&mut self) -> bool {
        let r = self.indices.len();
        for pos in (0..r).rev() {
            let current = self.indices[pos];
            self.used[current] = false;

            let mut candidate = current + 1;
            while candidate < self.n && self.used[candidate] {
                candidate += 1;
            }
            if candidate >= self.n {
                continue;
            }

            self.indices[pos] = candidate;
            self.used[candidate] = true;

            let mut fill = 0;
            for slot in pos + 1..r {
                while self.used[fill] {
                    fill += 1;
                }
                self.indices[slot] = fill;
                self.used[fill] = true;
            }
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(n: usize, r: usize) -> Vec<Vec<usize>> {
        let mut perms = Permutations::new(n, r);
        let mut out = Vec::new();
        while let Some(p) = perms.advance() {
            out.push(p.to_vec());
        }
        out
    }

    #[test]
    fn three_choose_two_in_lexicographic_order() {
        assert_eq!(
            collect(3, 2),
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![1, 0],
                vec![1, 2],
                vec![2, 0],
                vec![2, 1],
            ]
        );
    }

    #[test]
    fn counts_match_falling_factorial() {
        assert_eq!(collect(4, 1).len(), 4);
        assert_eq!(collect(4, 3).len(), 24);
        assert_eq!(collect(5, 5).len(), 120);
        assert_eq!(collect(6, 2).len(), 30);
    }

    #[test]
    fn zero_length_yields_one_empty_arrangement() {
        assert_eq!(collect(3, 0), vec![Vec::<usize>::new()]);
    }

    #[test]
    fn too_long_yields_nothing() {
        assert!(collect(2, 3).is_empty());
        assert!(collect(0, 1).is_empty());
    }

    #[test]
    fn exhausted_stays_exhausted() {
        let mut perms = Permutations::new(1, 1);
        assert!(perms.advance().is_some());
        assert!(perms.advance().is_none());
        assert!(perms.advance().is_none());
    }
}
