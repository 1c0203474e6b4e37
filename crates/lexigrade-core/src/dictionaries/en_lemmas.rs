//! Irregular English base forms for lemmatization.
//!
//! Maps inflected surface forms to their dictionary base form. Regular
//! inflection (-s, -ed, -ing) is handled by suffix rules in
//! [`crate::lexicon`]; this table covers the forms those rules cannot
//! derive.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Irregular inflected form → base form.
pub static EN_IRREGULAR_LEMMAS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        let mut map = HashMap::new();

        // Verbs: to be, auxiliaries
        map.extend([
            ("am", "be"),
            ("is", "be"),
            ("are", "be"),
            ("was", "be"),
            ("were", "be"),
            ("been", "be"),
            ("has", "have"),
            ("had", "have"),
            ("does", "do"),
            ("did", "do"),
            ("done", "do"),
        ]);

        // Strong verbs: past and participle forms
        map.extend([
            ("went", "go"),
            ("gone", "go"),
            ("said", "say"),
            ("made", "make"),
            ("took", "take"),
            ("taken", "take"),
            ("came", "come"),
            ("saw", "see"),
            ("seen", "see"),
            ("knew", "know"),
            ("known", "know"),
            ("got", "get"),
            ("gotten", "get"),
            ("gave", "give"),
            ("given", "give"),
            ("found", "find"),
            ("thought", "think"),
            ("told", "tell"),
            ("became", "become"),
            ("left", "leave"),
            ("felt", "feel"),
            ("brought", "bring"),
            ("began", "begin"),
            ("begun", "begin"),
            ("kept", "keep"),
            ("held", "hold"),
            ("wrote", "write"),
            ("written", "write"),
            ("stood", "stand"),
            ("heard", "hear"),
            ("meant", "mean"),
            ("met", "meet"),
            ("ran", "run"),
            ("paid", "pay"),
            ("sat", "sit"),
            ("spoke", "speak"),
            ("spoken", "speak"),
            ("led", "lead"),
            ("grew", "grow"),
            ("grown", "grow"),
            ("lost", "lose"),
            ("fell", "fall"),
            ("fallen", "fall"),
            ("sent", "send"),
            ("built", "build"),
            ("understood", "understand"),
            ("drew", "draw"),
            ("drawn", "draw"),
            ("broke", "break"),
            ("broken", "break"),
            ("spent", "spend"),
            ("rose", "rise"),
            ("risen", "rise"),
            ("drove", "drive"),
            ("driven", "drive"),
            ("bought", "buy"),
            ("wore", "wear"),
            ("worn", "wear"),
            ("chose", "choose"),
            ("chosen", "choose"),
            ("ate", "eat"),
            ("eaten", "eat"),
            ("flew", "fly"),
            ("flown", "fly"),
            ("slept", "sleep"),
            ("sang", "sing"),
            ("sung", "sing"),
            ("swam", "swim"),
            ("swum", "swim"),
            ("threw", "throw"),
            ("thrown", "throw"),
            ("won", "win"),
            ("caught", "catch"),
            ("taught", "teach"),
            ("sold", "sell"),
            ("fought", "fight"),
            ("woke", "wake"),
            ("beat", "beat"),
            ("beaten", "beat"),
        ]);

        // Irregular plurals
        map.extend([
            ("men", "man"),
            ("women", "woman"),
            ("children", "child"),
            ("feet", "foot"),
            ("teeth", "tooth"),
            ("mice", "mouse"),
            ("geese", "goose"),
            ("people", "people"),
            ("leaves", "leaf"),
            ("lives", "life"),
            ("wives", "wife"),
            ("knives", "knife"),
            ("wolves", "wolf"),
            ("shelves", "shelf"),
        ]);

        // Comparatives and pronoun forms that shadow suffix rules
        map.extend([
            ("better", "good"),
            ("best", "good"),
            ("worse", "bad"),
            ("worst", "bad"),
            ("further", "far"),
            ("its", "it"),
            ("his", "he"),
            ("hers", "her"),
            ("theirs", "their"),
            ("ours", "our"),
            ("yours", "your"),
        ]);

        map
    });

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verb_forms() {
        assert_eq!(EN_IRREGULAR_LEMMAS.get("went"), Some(&"go"));
        assert_eq!(EN_IRREGULAR_LEMMAS.get("understood"), Some(&"understand"));
    }

    #[test]
    fn plural_forms() {
        assert_eq!(EN_IRREGULAR_LEMMAS.get("children"), Some(&"child"));
        assert_eq!(EN_IRREGULAR_LEMMAS.get("feet"), Some(&"foot"));
    }
}
