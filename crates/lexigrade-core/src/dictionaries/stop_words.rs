//! Stop-word sets for hard-word classification.
//!
//! A word that appears in its language's stop-word set is never counted as
//! "hard" regardless of syllable count. Both sets are loaded once and shared
//! read-only across evaluations.

use std::collections::HashSet;
use std::sync::LazyLock;

/// English stop words (function words, auxiliaries, common adverbs).
pub static ENGLISH_STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Articles, conjunctions, prepositions
    set.extend([
        "a", "an", "the", "and", "but", "or", "nor", "so", "yet", "for", "of", "in", "on", "at",
        "to", "from", "by", "with", "about", "against", "between", "among", "into", "through",
        "during", "before", "after", "above", "below", "under", "over", "again", "further",
        "within", "without", "along", "across", "behind", "beyond", "toward", "towards", "upon",
        "off", "out", "up", "down",
    ]);

    // Pronouns and determiners
    set.extend([
        "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
        "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
        "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "this", "that",
        "these", "those", "what", "which", "who", "whom", "whose", "whatever", "whoever", "any",
        "both", "each", "few", "more", "most", "other", "others", "some", "such", "all", "another",
        "every", "everyone", "everything", "everybody", "anyone", "anything", "anybody", "someone",
        "something", "somebody", "nobody", "nothing", "none", "several", "various",
    ]);

    // Auxiliaries and common verbs
    set.extend([
        "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
        "do", "does", "did", "doing", "will", "would", "shall", "should", "can", "could", "may",
        "might", "must", "ought", "need", "dare", "get", "got", "make", "made", "go", "went",
        "become", "became",
    ]);

    // Adverbs and connectives
    set.extend([
        "not", "no", "only", "own", "same", "than", "too", "very", "just", "now", "then", "here",
        "there", "when", "where", "why", "how", "because", "if", "unless", "until", "while",
        "whereas", "although", "though", "however", "therefore", "moreover", "otherwise",
        "perhaps", "maybe", "really", "quite", "rather", "almost", "already", "always", "never",
        "often", "sometimes", "usually", "together", "anywhere", "everywhere", "somewhere",
        "nowhere", "indeed", "instead", "meanwhile", "nevertheless", "besides", "whether",
        "either", "neither", "also", "even", "still", "ever", "once", "twice", "again", "away",
        "back", "else", "enough", "much", "many", "little", "less", "least",
    ]);

    set
});

/// Russian stop words, embedded and case-normalized.
pub static RUSSIAN_STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Particles, conjunctions, prepositions
    set.extend([
        "и", "в", "во", "не", "на", "с", "со", "как", "а", "то", "но", "да", "к", "у", "же", "за",
        "бы", "по", "только", "ли", "если", "уже", "или", "ни", "до", "ведь", "для", "без", "под",
        "будто", "чтоб", "чтобы", "при", "об", "про", "через", "над", "хоть", "после", "перед",
        "между", "из", "от", "о", "ж", "уж", "разве", "даже", "ну", "вдруг", "нибудь", "вот",
        "тоже", "также", "потому", "поэтому", "зато", "однако", "пусть", "лишь",
    ]);

    // Pronouns
    set.extend([
        "я", "он", "она", "оно", "они", "мы", "вы", "ты", "его", "ее", "её", "их", "ему", "ей",
        "им", "нас", "вас", "них", "ним", "ней", "нее", "неё", "мне", "меня", "тебя", "тебе",
        "себя", "себе", "сам", "сама", "само", "сами", "мой", "моя", "мое", "моё", "мои", "твой",
        "наш", "ваш", "свой", "свою", "это", "этот", "эта", "эти", "эту", "этом", "этой", "этого",
        "тот", "та", "те", "том", "тем", "того", "кто", "что", "чем", "чего", "какой", "какая",
        "какие", "весь", "вся", "все", "всё", "всех", "всю", "всего", "другой", "такой",
    ]);

    // High-frequency verbs and adverbs
    set.extend([
        "быть", "был", "была", "были", "было", "будет", "есть", "нет", "надо", "можно", "нельзя",
        "может", "мочь", "так", "там", "тут", "здесь", "где", "куда", "когда", "зачем", "почему",
        "теперь", "потом", "тогда", "сейчас", "еще", "ещё", "опять", "почти", "совсем", "очень",
        "более", "больше", "меньше", "много", "мало", "хорошо", "лучше", "раз", "два", "три",
        "один", "ничего", "никогда", "всегда", "иногда", "конечно", "наконец", "впрочем", "чуть",
    ]);

    set
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_function_words_present() {
        assert!(ENGLISH_STOP_WORDS.contains("the"));
        assert!(ENGLISH_STOP_WORDS.contains("everything"));
        assert!(!ENGLISH_STOP_WORDS.contains("organization"));
    }

    #[test]
    fn russian_particles_present() {
        assert!(RUSSIAN_STOP_WORDS.contains("и"));
        assert!(RUSSIAN_STOP_WORDS.contains("чтобы"));
        assert!(!RUSSIAN_STOP_WORDS.contains("правительство"));
    }
}
