use std::collections::BTreeMap;

/// Words shown before the user enters their own.
pub const DEFAULT_WORDS: [&str; 15] = [
    "education",
    "learning",
    "teaching",
    "school",
    "classroom",
    "student",
    "teacher",
    "knowledge",
    "skills",
    "curriculum",
    "lesson",
    "study",
    "academic",
    "education",
    "learning",
];

/// Trim and lower-case a token; `None` if nothing is left.
pub fn normalize(word: &str) -> Option<String> {
    let w = word.trim();
    (!w.is_empty()).then(|| w.to_lowercase())
}

/// Count occurrences of each normalized word.
pub fn word_frequencies<I, S>(words: I) -> BTreeMap<String, usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut freq = BTreeMap::new();
    for w in words {
        if let Some(w) = normalize(w.as_ref()) {
            *freq.entry(w).or_insert(0) += 1;
        }
    }
    freq
}

/// Split comma-separated input into raw tokens, dropping blank ones.
pub fn split_input(text: &str) -> Vec<String> {
    text.split(',')
        .filter(|w| !w.trim().is_empty())
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// Sizing
// ---------------------------------------------------------------------------

/// Font size = `base + count * step`, capped at `max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordScale {
    pub base: f32,
    pub step: f32,
    pub max: f32,
}

impl Default for WordScale {
    fn default() -> Self {
        Self {
            base: 10.0,
            step: 10.0,
            max: 96.0,
        }
    }
}

impl WordScale {
    /// Glyphs far beyond `max` overflow egui's font atlas.
    pub fn size(&self, count: usize) -> f32 {
        let max = self.max.max(self.base);
        (self.base + count as f32 * self.step).min(max)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeightedWord {
    pub text: String,
    pub count: usize,
    pub size: f32,
}

/// Words with their display size, most frequent first (ties alphabetical).
pub fn weighted_words(freq: &BTreeMap<String, usize>, scale: WordScale) -> Vec<WeightedWord> {
    let mut words: Vec<WeightedWord> = freq
        .iter()
        .map(|(text, &count)| WeightedWord {
            text: text.clone(),
            count,
            size: scale.size(count),
        })
        .collect();
    words.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.text.cmp(&b.text)));
    words
}

// ---------------------------------------------------------------------------
// WordCloud – page state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct WordCloud {
    /// Text box content.
    pub input: String,
    words: Vec<String>,
    freq: BTreeMap<String, usize>,
}

impl Default for WordCloud {
    fn default() -> Self {
        Self::with_words(DEFAULT_WORDS.iter().map(|w| w.to_string()).collect())
    }
}

impl WordCloud {
    pub fn with_words(words: Vec<String>) -> Self {
        let freq = word_frequencies(&words);
        Self {
            input: String::new(),
            words,
            freq,
        }
    }

    pub fn frequencies(&self) -> &BTreeMap<String, usize> {
        &self.freq
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Replace the words with the current input. Blank input changes nothing.
    pub fn submit(&mut self) -> bool {
        if self.input.trim().is_empty() {
            return false;
        }
        let words = split_input(&self.input);
        self.set_words(words);
        true
    }

    pub fn set_words(&mut self, words: Vec<String>) {
        self.freq = word_frequencies(&words);
        self.words = words;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn counts_normalized_words() {
        let freq = word_frequencies(["Cat", "cat ", "dog"]);
        assert_eq!(
            freq,
            BTreeMap::from([("cat".to_string(), 2), ("dog".to_string(), 1)])
        );
    }

    #[test]
    fn blank_tokens_are_dropped() {
        let freq = word_frequencies(["", "   ", "\t", "Owl"]);
        assert_eq!(freq.len(), 1);
        assert_eq!(freq["owl"], 1);
    }

    #[test]
    fn split_drops_empty_segments() {
        assert_eq!(split_input("a, b,, ,c"), vec!["a", " b", "c"]);
    }

    #[test]
    fn size_grows_with_count() {
        let scale = WordScale::default();
        assert_eq!(scale.size(1), 20.0);
        assert!(scale.size(3) > scale.size(2));
    }

    #[test]
    fn size_is_capped() {
        let scale = WordScale::default();
        assert_eq!(scale.size(10_000), scale.max);
        assert_eq!(scale.size(usize::MAX), scale.max);

        let tight = WordScale {
            base: 30.0,
            step: 5.0,
            max: 12.0,
        };
        assert_eq!(tight.size(0), 30.0);
        assert_eq!(tight.size(500), 30.0);
    }

    #[test]
    fn repeated_word_in_a_long_list_stays_within_cap() {
        let mut cloud = WordCloud::default();
        cloud.set_words(vec!["the".to_string(); 600]);
        let words = weighted_words(cloud.frequencies(), WordScale::default());
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].count, 600);
        assert!(words[0].size <= 96.0);
    }

    #[test]
    fn weighted_words_sorted_by_frequency() {
        let freq = word_frequencies(["b", "a", "b", "c", "a", "b"]);
        let words = weighted_words(&freq, WordScale::default());
        let order: Vec<&str> = words.iter().map(|w| w.text.as_str()).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
        assert_eq!(words[0].size, 40.0);
    }

    #[test]
    fn default_cloud_counts_repeats() {
        let cloud = WordCloud::default();
        assert_eq!(cloud.frequencies()["education"], 2);
        assert_eq!(cloud.frequencies()["learning"], 2);
        assert_eq!(cloud.frequencies().len(), 13);
    }

    #[test]
    fn blank_submit_keeps_words() {
        let mut cloud = WordCloud::default();
        cloud.input = "  ".into();
        assert!(!cloud.submit());
        assert_eq!(cloud.word_count(), 15);

        cloud.input = "Sun, moon, sun".into();
        assert!(cloud.submit());
        assert_eq!(cloud.frequencies()["sun"], 2);
        assert_eq!(cloud.word_count(), 3);
    }
}
