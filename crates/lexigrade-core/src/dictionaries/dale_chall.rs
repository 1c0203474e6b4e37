//! Dale-Chall familiar-word list.
//!
//! Words an average 4th-grade reader is expected to know. The Dale-Chall
//! formula counts a word as hard when its lemma is absent from this set.
//! Embedded subset of the published 3,000-word list, case-normalized base
//! forms, loaded once and shared read-only.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Familiar words for the Dale-Chall formula (English only).
pub static DALE_CHALL_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    set.extend([
        "a", "able", "about", "above", "across", "act", "add", "afraid", "after", "afternoon",
        "again", "against", "age", "ago", "agree", "air", "all", "almost", "alone", "along",
        "already", "also", "always", "am", "among", "an", "and", "angry", "animal", "another",
        "answer", "any", "anybody", "anyone", "anything", "appear", "apple", "are", "arm",
        "around", "arrive", "art", "as", "ask", "asleep", "at", "ate", "attention", "aunt",
        "autumn", "away", "awake",
    ]);

    set.extend([
        "baby", "back", "bad", "bag", "ball", "band", "bank", "bark", "barn", "basket", "bath",
        "be", "bean", "bear", "beat", "beautiful", "became", "because", "become", "bed", "bee",
        "been", "before", "began", "begin", "behind", "believe", "bell", "belong", "below",
        "beside", "best", "better", "between", "big", "bird", "birthday", "bit", "bite", "black",
        "blanket", "blood", "blow", "blue", "board", "boat", "body", "bone", "book", "born",
        "both", "bottle", "bottom", "bought", "bow", "box", "boy", "branch", "brave", "bread",
        "break", "breakfast", "breath", "bridge", "bright", "bring", "brother", "brought",
        "brown", "build", "burn", "bus", "busy", "but", "butter", "buy", "by",
    ]);

    set.extend([
        "cake", "call", "came", "camp", "can", "candy", "cap", "captain", "car", "card", "care",
        "careful", "carry", "case", "cat", "catch", "cause", "cent", "certain", "chair", "chance",
        "change", "chase", "cheek", "cheese", "chicken", "chief", "child", "children", "church",
        "circle", "city", "class", "clean", "clear", "climb", "clock", "close", "cloth",
        "clothes", "cloud", "coat", "cold", "color", "come", "company", "cook", "cool", "corn",
        "corner", "correct", "cost", "could", "count", "country", "course", "cover", "cow",
        "cross", "crowd", "cry", "cup", "cut",
    ]);

    set.extend([
        "dance", "dark", "daughter", "day", "dead", "dear", "decide", "deep", "desk", "did",
        "die", "different", "dig", "dinner", "direction", "dish", "distance", "do", "doctor",
        "does", "dog", "dollar", "done", "door", "double", "down", "draw", "dream", "dress",
        "drink", "drive", "drop", "dry", "duck", "during", "dust",
    ]);

    set.extend([
        "each", "ear", "early", "earn", "earth", "east", "easy", "eat", "edge", "egg", "eight",
        "either", "electric", "else", "empty", "end", "enemy", "enjoy", "enough", "enter",
        "even", "evening", "ever", "every", "everybody", "everyone", "everything", "exact",
        "except", "excite", "expect", "explain", "eye",
    ]);

    set.extend([
        "face", "fact", "fair", "fall", "family", "far", "farm", "farmer", "fast", "fat",
        "father", "fear", "feed", "feel", "feet", "fell", "fellow", "felt", "fence", "few",
        "field", "fight", "fill", "finally", "find", "fine", "finger", "finish", "fire", "first",
        "fish", "fit", "five", "fix", "flag", "flat", "floor", "flower", "fly", "follow", "food",
        "foot", "for", "forest", "forget", "form", "found", "four", "free", "fresh", "friend",
        "from", "front", "fruit", "full", "fun", "funny",
    ]);

    set.extend([
        "game", "garden", "gate", "gave", "get", "gift", "girl", "give", "glad", "glass", "go",
        "goes", "gold", "gone", "good", "got", "grade", "grand", "grass", "gray", "great",
        "green", "grew", "ground", "group", "grow", "guess",
    ]);

    set.extend([
        "had", "hair", "half", "hall", "hand", "hang", "happen", "happy", "hard", "has", "hat",
        "hate", "have", "he", "head", "hear", "heard", "heart", "heavy", "held", "hello", "help",
        "her", "here", "herself", "hide", "high", "hill", "him", "himself", "his", "history",
        "hit", "hold", "hole", "holiday", "home", "hope", "horse", "hot", "hour", "house", "how",
        "hundred", "hungry", "hunt", "hurry", "hurt",
    ]);

    set.extend([
        "i", "ice", "idea", "if", "important", "in", "indeed", "inside", "instead", "into",
        "iron", "is", "it", "its", "itself",
    ]);

    set.extend([
        "job", "join", "joke", "joy", "jump", "just", "keep", "kept", "kill", "kind", "king",
        "kitchen", "knee", "knew", "know", "known",
    ]);

    set.extend([
        "ladder", "lady", "lake", "land", "language", "large", "last", "late", "laugh", "lay",
        "lead", "leaf", "learn", "least", "leave", "left", "leg", "less", "let", "letter",
        "life", "lift", "light", "like", "line", "lion", "lip", "list", "listen", "little",
        "live", "long", "look", "lost", "lot", "loud", "love", "low", "luck", "lunch",
    ]);

    set.extend([
        "made", "mail", "make", "man", "many", "map", "mark", "market", "mat", "matter", "may", "maybe",
        "me", "mean", "meat", "meet", "men", "middle", "might", "mile", "milk", "mind", "mine",
        "minute", "miss", "moment", "money", "month", "moon", "more", "morning", "most",
        "mother", "mountain", "mouse", "mouth", "move", "much", "music", "must", "my", "myself",
    ]);

    set.extend([
        "name", "near", "neck", "need", "neighbor", "nest", "never", "new", "news", "next",
        "nice", "night", "nine", "no", "noise", "none", "noon", "north", "nose", "not", "note",
        "nothing", "now", "number", "nut",
    ]);

    set.extend([
        "ocean", "of", "off", "office", "often", "old", "on", "once", "one", "only", "open",
        "or", "orange", "order", "other", "our", "out", "outside", "over", "own",
    ]);

    set.extend([
        "page", "paint", "pair", "paper", "part", "party", "pass", "past", "pay", "pen",
        "pencil", "penny", "people", "perhaps", "person", "pick", "picture", "piece", "place",
        "plain", "plan", "plant", "play", "please", "pocket", "point", "poor", "post", "pot",
        "pound", "present", "pretty", "pull", "push", "put",
    ]);

    set.extend([
        "queen", "question", "quick", "quiet", "quite", "rabbit", "race", "rain", "raise", "ran",
        "reach", "read", "ready", "real", "reason", "red", "remember", "rest", "return", "rich",
        "ride", "right", "ring", "river", "road", "rock", "roll", "roof", "room", "round", "row",
        "rule", "run",
    ]);

    set.extend([
        "sad", "safe", "said", "sail", "salt", "same", "sand", "sat", "save", "saw", "say",
        "school", "sea", "season", "seat", "second", "see", "seed", "seem", "seen", "sell",
        "send", "sent", "seven", "several", "shake", "shall", "shape", "share", "she", "sheep",
        "shine", "ship", "shoe", "shop", "short", "should", "show", "sick", "side", "sight",
        "sign", "silver", "simple", "since", "sing", "sister", "sit", "six", "size", "sky",
        "sleep", "slow", "small", "smell", "smile", "snow", "so", "soft", "sold", "some",
        "somebody", "someone", "something", "sometimes", "son", "song", "soon", "sound", "south",
        "space", "speak", "spell", "spend", "spoke", "spot", "spring", "square", "stand", "star",
        "start", "state", "station", "stay", "step", "stick", "still", "stone", "stood", "stop",
        "store", "storm", "story", "straight", "strange", "street", "strong", "such", "sudden",
        "sugar", "summer", "sun", "supper", "sure", "surprise", "sweet", "swim",
    ]);

    set.extend([
        "table", "tail", "take", "talk", "tall", "taste", "teach", "teacher", "team", "tell",
        "ten", "than", "thank", "that", "the", "their", "them", "then", "there", "these", "they",
        "thing", "think", "third", "this", "those", "though", "thought", "thousand", "three",
        "through", "throw", "tie", "till", "time", "tiny", "to", "today", "together", "told",
        "tomorrow", "tonight", "too", "took", "top", "touch", "toward", "town", "toy", "train",
        "tree", "trip", "trouble", "true", "try", "turn", "twelve", "twenty", "two",
    ]);

    set.extend([
        "uncle", "under", "understand", "until", "up", "upon", "us", "use", "very", "visit",
        "voice", "wait", "wake", "walk", "wall", "want", "war", "warm", "was", "wash", "watch",
        "water", "way", "we", "wear", "weather", "week", "well", "went", "were", "west", "wet",
        "what", "wheel", "when", "where", "which", "while", "white", "who", "whole", "whose",
        "why", "wide", "wild", "will", "win", "wind", "window", "winter", "wish", "with",
        "without", "woman", "women", "wonder", "wood", "word", "wore", "work", "world", "would",
        "write", "wrong", "yard", "year", "yellow", "yes", "yesterday", "yet", "you", "young",
        "your",
    ]);

    set
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn familiar_words_present() {
        assert!(DALE_CHALL_WORDS.contains("cat"));
        assert!(DALE_CHALL_WORDS.contains("understand"));
        assert!(DALE_CHALL_WORDS.contains("yesterday"));
    }

    #[test]
    fn technical_words_absent() {
        assert!(!DALE_CHALL_WORDS.contains("implementation"));
        assert!(!DALE_CHALL_WORDS.contains("algorithm"));
        assert!(!DALE_CHALL_WORDS.contains("infrastructure"));
    }
}
