//! Porter suffix-stripping stemmer.
//!
//! Classic rule-based stemming over lowercase ASCII words: no dictionary,
//! just the ordered suffix tables and the measure condition from the
//! original algorithm. Words of one or two letters pass through unchanged.

// ────────────────────────────────────────────────────────────────────────────
// Letter classification and measure
// ────────────────────────────────────────────────────────────────────────────

/// A letter is a consonant unless it is a plain vowel, or a `y` that
/// follows a consonant.
fn is_consonant(word: &[u8], index: usize) -> bool {
    match word[index] {
        b'a' | b'e' | b'i' | b'o' | b'u' => false,
        b'y' => index == 0 || !is_consonant(word, index - 1),
        _ => true,
    }
}

/// The measure m of a stem: the number of vowel-to-consonant transitions,
/// i.e. m in the form [C](VC)^m[V].
fn measure(stem: &[u8]) -> usize {
    let mut m = 0;
    let mut prev_vowel = false;
    for index in 0..stem.len() {
        let vowel = !is_consonant(stem, index);
        if prev_vowel && !vowel {
            m += 1;
        }
        prev_vowel = vowel;
    }
    m
}

fn contains_vowel(stem: &[u8]) -> bool {
    (0..stem.len()).any(|index| !is_consonant(stem, index))
}

fn ends_double_consonant(word: &[u8]) -> bool {
    let n = word.len();
    n >= 2 && word[n - 1] == word[n - 2] && is_consonant(word, n - 1)
}

/// True when the word ends consonant-vowel-consonant and the final
/// consonant is not `w`, `x`, or `y`.
fn ends_cvc(word: &[u8]) -> bool {
    let n = word.len();
    if n < 3 {
        return false;
    }
    is_consonant(word, n - 3)
        && !is_consonant(word, n - 2)
        && is_consonant(word, n - 1)
        && !matches!(word[n - 1], b'w' | b'x' | b'y')
}

// ────────────────────────────────────────────────────────────────────────────
// Suffix tables (ordered: longer suffixes before their own endings)
// ────────────────────────────────────────────────────────────────────────────

const STEP_2: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("abli", "able"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
];

const STEP_3: &[(&str, &str)] = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

const STEP_4: &[&str] = &[
    "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment",
    "ent", "ou", "ism", "ate", "iti", "ous", "ive", "ize",
];

// ────────────────────────────────────────────────────────────────────────────
// Algorithm steps
// ────────────────────────────────────────────────────────────────────────────

/// Plurals: sses -> ss, ies -> i, ss -> ss, s -> (gone).
fn step_1a(word: &mut String) {
    if word.ends_with("sses") || word.ends_with("ies") {
        word.truncate(word.len() - 2);
    } else if !word.ends_with("ss") && word.ends_with('s') {
        word.pop();
    }
}

/// Past tense and gerunds, with the cleanup pass after a bare strip.
fn step_1b(word: &mut String) {
    if word.ends_with("eed") {
        if measure(&word.as_bytes()[..word.len() - 3]) > 0 {
            word.pop();
        }
        return;
    }

    let stripped = if word.ends_with("ed") && contains_vowel(&word.as_bytes()[..word.len() - 2]) {
        word.truncate(word.len() - 2);
        true
    } else if word.ends_with("ing") && contains_vowel(&word.as_bytes()[..word.len() - 3]) {
        word.truncate(word.len() - 3);
        true
    } else {
        false
    };

    if stripped {
        if word.ends_with("at") || word.ends_with("bl") || word.ends_with("iz") {
            word.push('e');
        } else if ends_double_consonant(word.as_bytes())
            && !matches!(word.as_bytes()[word.len() - 1], b'l' | b's' | b'z')
        {
            word.pop();
        } else if measure(word.as_bytes()) == 1 && ends_cvc(word.as_bytes()) {
            word.push('e');
        }
    }
}

/// Terminal y -> i when the rest of the word has a vowel.
fn step_1c(word: &mut String) {
    if word.ends_with('y') && contains_vowel(&word.as_bytes()[..word.len() - 1]) {
        word.pop();
        word.push('i');
    }
}

/// First textual suffix match wins; the replacement then only happens when
/// the remaining stem has measure > `min_measure`.
fn apply_table(word: &mut String, table: &[(&str, &str)], min_measure: usize) {
    for (suffix, replacement) in table {
        if word.ends_with(suffix) {
            let stem_len = word.len() - suffix.len();
            if measure(&word.as_bytes()[..stem_len]) > min_measure {
                word.truncate(stem_len);
                word.push_str(replacement);
            }
            return;
        }
    }
}

/// Bare suffix removal at measure > 1, with the s/t gate on "ion".
fn step_4(word: &mut String) {
    for suffix in STEP_4 {
        if word.ends_with(suffix) {
            let stem_len = word.len() - suffix.len();
            if measure(&word.as_bytes()[..stem_len]) > 1 {
                word.truncate(stem_len);
            }
            return;
        }
    }
    if word.ends_with("ion") {
        let stem_len = word.len() - 3;
        let stem = &word.as_bytes()[..stem_len];
        if measure(stem) > 1 && matches!(stem.last(), Some(b's') | Some(b't')) {
            word.truncate(stem_len);
        }
    }
}

/// Final e removal.
fn step_5a(word: &mut String) {
    if !word.ends_with('e') {
        return;
    }
    let stem = &word.as_bytes()[..word.len() - 1];
    let m = measure(stem);
    if m > 1 || (m == 1 && !ends_cvc(stem)) {
        word.pop();
    }
}

/// Double l reduction at measure > 1.
fn step_5b(word: &mut String) {
    let bytes = word.as_bytes();
    if measure(bytes) > 1 && ends_double_consonant(bytes) && bytes[bytes.len() - 1] == b'l' {
        word.pop();
    }
}

/// Stems one lowercase token. Words of length <= 2 or containing anything
/// but lowercase ASCII letters pass through unchanged.
pub fn stem(word: &str) -> String {
    if word.len() <= 2 || !word.bytes().all(|b| b.is_ascii_lowercase()) {
        return word.to_string();
    }

    let mut w = word.to_string();
    step_1a(&mut w);
    step_1b(&mut w);
    step_1c(&mut w);
    apply_table(&mut w, STEP_2, 0);
    apply_table(&mut w, STEP_3, 0);
    step_4(&mut w);
    step_5a(&mut w);
    step_5b(&mut w);
    w
}
