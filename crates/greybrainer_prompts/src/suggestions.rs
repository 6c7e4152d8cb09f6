//! Title suggestion prompt.

use greybrainer_extract::MAX_SUGGESTIONS;

/// JSON-mode prompt asking for likely intended titles.
pub fn build_title_suggestion_prompt(title: &str) -> String {
    format!(
        "A user wants to analyze the movie or series \"{title}\". If the title is misspelled, \
         ambiguous, or matches several works, respond with a JSON array of up to \
         {MAX_SUGGESTIONS} full titles they most likely mean, including the year in \
         parentheses when that disambiguates. If the title is already exact and unambiguous, \
         respond with an empty JSON array []. If you must answer with an object, use \
         {{\"suggestions\": [...]}}. Respond with JSON only."
    )
}
