//! Post-OCR label repair.
//!
//! OCR output routinely garbles the very labels the extraction rules key on
//! (`Hemogl0bin`, `Cholesterd`). Words close to a known label are rewritten to
//! it. Only corrects when the match is unambiguous, within edit distance 2, and
//! the word is at least 5 characters long. Short labels such as `hb` or `fbs`
//! are left alone.

/// Long-form labels the extraction rules recognize. Sorted, lowercase.
const LABEL_TERMS: &[&str] = &["cholesterol", "glucose", "haemoglobin", "hemoglobin"];

const MIN_WORD_LEN: usize = 5;
const MAX_DISTANCE: u32 = 2;

/// Rewrite near-miss spellings of known labels in OCR text.
pub fn correct_label_terms(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut word_buf = String::new();

    for ch in text.chars() {
        if ch.is_alphanumeric() {
            word_buf.push(ch);
        } else {
            if !word_buf.is_empty() {
                result.push_str(&correct_word(&word_buf));
                word_buf.clear();
            }
            result.push(ch);
        }
    }

    if !word_buf.is_empty() {
        result.push_str(&correct_word(&word_buf));
    }

    result
}

fn correct_word(word: &str) -> String {
    if word.chars().count() < MIN_WORD_LEN || word.chars().all(|c| c.is_ascii_digit()) {
        return word.to_string();
    }

    let lower = word.to_lowercase();
    if LABEL_TERMS.binary_search(&lower.as_str()).is_ok() {
        return word.to_string();
    }

    match closest_term(&lower) {
        Some(term) => {
            tracing::debug!(term, "OCR label corrected");
            preserve_case(word, term)
        }
        None => word.to_string(),
    }
}

/// Unique closest label within `MAX_DISTANCE`, or `None` on a tie.
fn closest_term(lower: &str) -> Option<&'static str> {
    let len = lower.chars().count();
    let mut best: Option<&'static str> = None;
    let mut best_distance = MAX_DISTANCE + 1;
    let mut ambiguous = false;

    for &term in LABEL_TERMS {
        if len.abs_diff(term.len()) > MAX_DISTANCE as usize {
            continue;
        }

        let dist = edit_distance(lower, term);
        if dist < best_distance {
            best_distance = dist;
            best = Some(term);
            ambiguous = false;
        } else if dist == best_distance && best.is_some() {
            ambiguous = true;
        }
    }

    if ambiguous {
        None
    } else {
        best
    }
}

fn preserve_case(original: &str, correction: &str) -> String {
    if original.chars().all(|c| c.is_uppercase() || !c.is_alphabetic()) {
        return correction.to_uppercase();
    }

    if original.chars().next().is_some_and(char::is_uppercase) {
        let mut chars = correction.chars();
        return match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
    }

    correction.to_string()
}

/// Levenshtein distance over chars.
fn edit_distance(a: &str, b: &str) -> u32 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len() as u32;
    }
    if b.is_empty() {
        return a.len() as u32;
    }

    let mut prev: Vec<u32> = (0..=b.len() as u32).collect();
    let mut curr = vec![0u32; b.len() + 1];

    for (i, &a_ch) in a.iter().enumerate() {
        curr[0] = (i + 1) as u32;
        for (j, &b_ch) in b.iter().enumerate() {
            let cost = u32::from(a_ch != b_ch);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
