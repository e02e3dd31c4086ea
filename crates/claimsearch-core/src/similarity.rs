//! Sequence similarity based on longest matching blocks.
//!
//! [`SequenceMatcher`] finds the longest contiguous block shared by two
//! sequences, then recurses into the unmatched parts on either side. The
//! total size of all blocks, `M`, gives the ratio `2*M / (len(a) + len(b))`.
//!
//! ```
//! use claimsearch_core::similarity::{similarity, SequenceMatcher};
//!
//! let a: Vec<char> = "abcd".chars().collect();
//! let b: Vec<char> = "bcde".chars().collect();
//! assert_eq!(SequenceMatcher::new(&a, &b).ratio(), 0.75);
//!
//! assert_eq!(similarity("Engine", "ENGINE"), 1.0);
//! ```

use std::collections::HashMap;
use std::hash::Hash;

/// Second sequences at least this long get the popular-element heuristic
const AUTOJUNK_MIN_LEN: usize = 200;

/// A matching block: `a[a..a + size] == b[b..b + size]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Match {
    /// Start index in the first sequence
    pub a: usize,
    /// Start index in the second sequence
    pub b: usize,
    /// Block length
    pub size: usize,
}

/// Compares two sequences by their matching blocks
pub struct SequenceMatcher<'s, T> {
    a: &'s [T],
    b: &'s [T],
    /// Positions of each element of `b`, minus popular elements
    b2j: HashMap<T, Vec<usize>>,
}

impl<'s, T: Eq + Hash + Copy> SequenceMatcher<'s, T> {
    /// Create a matcher for `a` against `b`
    pub fn new(a: &'s [T], b: &'s [T]) -> Self {
        let mut b2j: HashMap<T, Vec<usize>> = HashMap::new();
        for (j, elt) in b.iter().enumerate() {
            b2j.entry(*elt).or_default().push(j);
        }

        // Very frequent elements in long sequences do not seed matches
        if b.len() >= AUTOJUNK_MIN_LEN {
            let ntest = b.len() / 100 + 1;
            b2j.retain(|_, indices| indices.len() <= ntest);
        }

        Self { a, b, b2j }
    }

    /// Find the longest matching block in `a[alo..ahi]` and `b[blo..bhi]`.
    ///
    /// Among equally long blocks the one starting earliest in `a` wins,
    /// then the one starting earliest in `b`. Returns a zero-size match at
    /// `(alo, blo)` when nothing matches.
    pub fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> Match {
        let (mut besti, mut bestj, mut bestsize) = (alo, blo, 0);

        // j2len[j] = length of the match ending at a[i - 1] and b[j]
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        for i in alo..ahi {
            let mut newj2len = HashMap::new();
            if let Some(indices) = self.b2j.get(&self.a[i]) {
                for &j in indices {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    newj2len.insert(j, k);
                    if k > bestsize {
                        besti = i + 1 - k;
                        bestj = j + 1 - k;
                        bestsize = k;
                    }
                }
            }
            j2len = newj2len;
        }

        // Grow the block over equal elements that were left out of b2j
        while besti > alo && bestj > blo && self.a[besti - 1] == self.b[bestj - 1] {
            besti -= 1;
            bestj -= 1;
            bestsize += 1;
        }
        while besti + bestsize < ahi
            && bestj + bestsize < bhi
            && self.a[besti + bestsize] == self.b[bestj + bestsize]
        {
            bestsize += 1;
        }

        Match {
            a: besti,
            b: bestj,
            size: bestsize,
        }
    }

    /// All matching blocks in order, adjacent blocks merged.
    ///
    /// The last entry is always the sentinel `Match { a: len(a), b: len(b), size: 0 }`.
    pub fn matching_blocks(&self) -> Vec<Match> {
        let (la, lb) = (self.a.len(), self.b.len());

        let mut queue = vec![(0, la, 0, lb)];
        let mut blocks = Vec::new();
        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let m = self.find_longest_match(alo, ahi, blo, bhi);
            if m.size == 0 {
                continue;
            }
            blocks.push(m);
            if alo < m.a && blo < m.b {
                queue.push((alo, m.a, blo, m.b));
            }
            if m.a + m.size < ahi && m.b + m.size < bhi {
                queue.push((m.a + m.size, ahi, m.b + m.size, bhi));
            }
        }
        blocks.sort();

        let mut collapsed: Vec<Match> = Vec::with_capacity(blocks.len() + 1);
        for m in blocks {
            match collapsed.last_mut() {
                Some(last) if last.a + last.size == m.a && last.b + last.size == m.b => {
                    last.size += m.size;
                }
                _ => collapsed.push(m),
            }
        }

        collapsed.push(Match {
            a: la,
            b: lb,
            size: 0,
        });
        collapsed
    }

    /// Similarity in `[0.0, 1.0]`; `1.0` when both sequences are empty
    pub fn ratio(&self) -> f64 {
        let matches: usize = self.matching_blocks().iter().map(|m| m.size).sum();
        calculate_ratio(matches, self.a.len() + self.b.len())
    }

    /// Upper bound on [`ratio`](Self::ratio) from shared element counts
    pub fn quick_ratio(&self) -> f64 {
        let mut avail: HashMap<T, usize> = HashMap::new();
        for elt in self.b {
            *avail.entry(*elt).or_default() += 1;
        }

        let mut matches = 0;
        for elt in self.a {
            if let Some(count) = avail.get_mut(elt) {
                if *count > 0 {
                    *count -= 1;
                    matches += 1;
                }
            }
        }

        calculate_ratio(matches, self.a.len() + self.b.len())
    }

    /// Upper bound on [`quick_ratio`](Self::quick_ratio) from lengths alone
    pub fn real_quick_ratio(&self) -> f64 {
        let (la, lb) = (self.a.len(), self.b.len());
        calculate_ratio(la.min(lb), la + lb)
    }
}

fn calculate_ratio(matches: usize, length: usize) -> f64 {
    if length == 0 {
        1.0
    } else {
        2.0 * matches as f64 / length as f64
    }
}

/// Case-insensitive similarity ratio of two strings
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = lowercase_chars(a);
    let b = lowercase_chars(b);
    SequenceMatcher::new(&a, &b).ratio()
}

/// Lower-case `text` and split it into chars
pub(crate) fn lowercase_chars(text: &str) -> Vec<char> {
    text.to_lowercase().chars().collect()
}
