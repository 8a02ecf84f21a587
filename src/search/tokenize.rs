//! Text tokenization and stemming for search matching.

use rust_stemmers::Stemmer;

/// Minimum token length. Set to 1 so single-letter identifiers common in
/// Julia API docs (`f`, `z`, `θ`) stay searchable.
const MIN_TOKEN_LENGTH: usize = 1;

/// Common English stop words filtered from both queries and record text.
/// These high-frequency words add little value to search relevance.
pub(crate) const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in", "is", "it",
    "its", "of", "on", "that", "the", "to", "was", "will", "with",
];

/// Tokenizes text into searchable terms with stemming and case-aware splitting.
///
/// This function implements a state machine that splits text on multiple boundaries:
/// - **CamelCase**: "FrankWolfe" → ["frank", "wolf", "frankwolf"]
/// - **snake_case**: "simplex_projection" → ["simplex", "project", ...]
/// - **hyphen-case**: "gradient-descent" → ["gradient", "descent", ...]
/// - qualified names split at the dot: "DifferentiableFrankWolfe.dfw" → [..., "dfw"]
///
/// The state machine maintains two pointers:
/// - `word_start`: start of the complete word (e.g., "FrankWolfe")
/// - `subword_start`: start of the current sub-component (e.g., "Wolfe")
///
/// This allows extracting both individual components and the full compound term.
pub(crate) fn tokenize_and_stem(text: &str, stemmer: &Stemmer) -> Vec<String> {
    let mut tokens = vec![];

    // State machine variables
    let mut last_case = None; // Track case transitions (None/Some(false)/Some(true))
    let mut word_start = 0; // Start of full word (e.g., "FrankWolfe")
    let mut subword_start = 0; // Start of subword (e.g., "Wolfe")
    let mut word_start_next_char = true; // Flag: start new word at next char
    let mut subword_start_next_char = true; // Flag: start new subword at next char

    for (i, c) in text.char_indices() {
        // Initialize word/subword pointers at the start of a new word
        if word_start_next_char {
            word_start = i;
            subword_start = i;
            word_start_next_char = false;
            subword_start_next_char = false;
        }

        // Initialize subword pointer for CamelCase boundaries
        if subword_start_next_char {
            subword_start = i;
            subword_start_next_char = false;
        }

        // Detect case changes for CamelCase splitting (lowercase → uppercase)
        let current_case = c.is_alphabetic().then(|| c.is_uppercase());
        let case_change = last_case == Some(false) && current_case == Some(true);
        last_case = current_case;

        if c == '-' || c == '_' {
            // snake_case / hyphen-case boundary: extract the current subword
            if i.saturating_sub(subword_start) >= MIN_TOKEN_LENGTH {
                push_token(&text[subword_start..i], &mut tokens, stemmer);
            }
            // Start a new subword after the delimiter
            subword_start_next_char = true;
        } else if !c.is_alphabetic() {
            // Non-alphabetic character: end of complete word.
            // Extract last subword if different from word start
            if i.saturating_sub(subword_start) >= MIN_TOKEN_LENGTH && subword_start != word_start {
                push_token(&text[subword_start..i], &mut tokens, stemmer);
            }
            // Extract complete word (e.g., "FrankWolfe" from "FrankWolfe.dfw")
            if i.saturating_sub(word_start) >= MIN_TOKEN_LENGTH {
                push_token(&text[word_start..i], &mut tokens, stemmer);
            }
            // Start a new word after this non-alphabetic character
            word_start_next_char = true;
        } else if case_change {
            // CamelCase boundary: extract the previous subword
            if i.saturating_sub(subword_start) >= MIN_TOKEN_LENGTH {
                push_token(&text[subword_start..i], &mut tokens, stemmer);
            }
            // Start new subword at the uppercase character
            subword_start = i;
        }
    }

    // Handle final tokens at end of string
    if !word_start_next_char {
        // Extract last subword if it's different from word start
        let last_subword = &text[subword_start..];
        if word_start != subword_start && last_subword.len() >= MIN_TOKEN_LENGTH {
            push_token(last_subword, &mut tokens, stemmer);
        }
        // Extract complete final word
        let last_word = &text[word_start..];
        if last_word.len() >= MIN_TOKEN_LENGTH {
            push_token(last_word, &mut tokens, stemmer);
        }
    }

    tokens
}

/// Stems a token and appends it, filtering out stop words.
fn push_token(token: &str, tokens: &mut Vec<String>, stemmer: &Stemmer) {
    let lowercase = token.to_lowercase();

    if STOP_WORDS.contains(&lowercase.as_str()) {
        return;
    }

    let stemmed = stemmer.stem(&lowercase);
    tokens.push(stemmed.into_owned());
}
