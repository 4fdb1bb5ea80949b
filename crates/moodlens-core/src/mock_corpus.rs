//! Canned texts substituted when a live source is unavailable.

use rand::Rng;

/// Fixed fallback corpus. Read-only for the life of the process.
pub const MOCK_CORPUS: &[&str] = &[
    "AI is transforming the world rapidly!",
    "I'm scared of what AI might do in the future.",
    "AI is neutral - it's humans that matter.",
    "Amazing AI breakthrough announced by OpenAI!",
    "AI is overhyped in some areas, underused in others.",
    "So excited about the future of artificial intelligence!",
    "AI-generated content is both exciting and scary.",
    "I don't trust AI making decisions for humans.",
    "AI tools helped me become more productive.",
    "Too much hype, not enough real-world use cases.",
];

/// Draw `count` texts from [`MOCK_CORPUS`] with replacement.
///
/// `count` may exceed the corpus size.
pub fn sample_mock_with<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<String> {
    (0..count)
        .map(|_| MOCK_CORPUS[rng.random_range(0..MOCK_CORPUS.len())].to_string())
        .collect()
}

/// [`sample_mock_with`] using the thread-local RNG.
#[must_use]
pub fn sample_mock(count: usize) -> Vec<String> {
    sample_mock_with(&mut rand::rng(), count)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn samples_exact_count_beyond_corpus_size() {
        let texts = sample_mock(37);
        assert_eq!(texts.len(), 37);
        assert!(texts.iter().all(|t| MOCK_CORPUS.contains(&t.as_str())));
    }

    #[test]
    fn zero_count_is_empty() {
        assert!(sample_mock(0).is_empty());
    }

    #[test]
    fn seeded_sampling_is_reproducible() {
        let a = sample_mock_with(&mut StdRng::seed_from_u64(7), 12);
        let b = sample_mock_with(&mut StdRng::seed_from_u64(7), 12);
        assert_eq!(a, b);
    }
}
