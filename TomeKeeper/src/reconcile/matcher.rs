//! Fuzzy description matching

/// Scores how similar two free-text descriptions are
///
/// Higher is more similar; `0` means no evidence of a match. Implementations
/// must be deterministic.
pub trait SimilarityScorer {
    fn score(&self, a: &str, b: &str) -> usize;
}

/// Length of the longest common run of characters
///
/// Both inputs are lowercased and whitespace runs collapse to a single space
/// before comparing, so identical descriptions score their full normalized
/// length.
#[derive(Debug, Clone, Copy, Default)]
pub struct LongestRunScorer;

impl SimilarityScorer for LongestRunScorer {
    fn score(&self, a: &str, b: &str) -> usize {
        longest_common_run(&normalize(a), &normalize(b))
    }
}

fn normalize(text: &str) -> Vec<char> {
    let mut out = Vec::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.extend(word.chars().flat_map(char::to_lowercase));
    }
    out
}

fn longest_common_run(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    // Rolling row of run lengths ending at (i, j)
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];
    let mut best = 0;

    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb { prev[j] + 1 } else { 0 };
            best = best.max(curr[j + 1]);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    best
}
