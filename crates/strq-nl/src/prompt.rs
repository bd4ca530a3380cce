/// The out-of-domain marker the collaborator returns when a query has
/// nothing to do with filterable string properties.
pub const OUT_OF_DOMAIN_MARKER: &str = "422";

/// Fixed instruction describing the five recognized fields, with worked
/// examples. The model is told to answer with JSON only, or with the
/// literal marker for unrelated queries.
const INSTRUCTION: &str = r#"You are a precise natural language to JSON converter.

Given a user's query about strings, output only a JSON object that describes filter criteria.

The JSON must always contain the following keys:
"is_palindrome", "min_length", "max_length", "word_count", "contains_character"

Rules:
- If something isn't mentioned, set its value to null.
- Do not include extra text or explanations.
- Always return valid JSON only.

Examples:

Input: "all single word palindromic strings"
Output:
{
"is_palindrome": true,
"min_length": null,
"max_length": null,
"word_count": 1,
"contains_character": null
}

Input: "strings longer than 10 characters"
Output:
{
"is_palindrome": null,
"min_length": 11,
"max_length": null,
"word_count": null,
"contains_character": null
}

Input: "palindromic strings that contain the first vowel"
Output:
{
"is_palindrome": true,
"min_length": null,
"max_length": null,
"word_count": null,
"contains_character": "a"
}

Input: "strings containing the letter z"
Output:
{
"is_palindrome": null,
"min_length": null,
"max_length": null,
"word_count": null,
"contains_character": "z"
}

If the query does not in any way relate to the output style just reply with 422

Now convert the following query:
"#;

/// Render the full prompt for one query.
pub fn render(query: &str) -> String {
    format!("{INSTRUCTION}\n\"{query}\"\n")
}
