//! Ingredient normalizer.
//!
//! Turns free text such as `"and chicken; with rice,, tomatoes"` into
//! `["chicken", "rice", "tomatoes"]`.

use log::debug;

use crate::error::ValidationError;

/// Characters that separate one ingredient from the next
const DELIMITERS: [char; 2] = [',', ';'];

/// Leading words dropped from an ingredient ("and tomatoes" -> "tomatoes")
const CONNECTIVES: [&str; 4] = ["and", "or", "with", "plus"];

/// Split raw input into cleaned ingredient names, in input order.
///
/// Returns an empty list when nothing usable is found; use [`normalize`] to
/// get that case as a [`ValidationError`].
pub fn parse_ingredients(raw: &str) -> Vec<String> {
    let ingredients: Vec<String> = raw
        .split(&DELIMITERS[..])
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| collapse_whitespace(strip_connectives(segment)))
        .filter(|ingredient| !ingredient.is_empty())
        .collect();

    debug!(
        "Parsed {} ingredients: {:?}",
        ingredients.len(),
        ingredients
    );

    ingredients
}

/// Like [`parse_ingredients`], but rejects input that yields no ingredients.
pub fn normalize(raw: &str) -> Result<Vec<String>, ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    let ingredients = parse_ingredients(raw);
    if ingredients.is_empty() {
        return Err(ValidationError::NoValidIngredients);
    }

    Ok(ingredients)
}

/// Drop leading connective words.
///
/// A connective only counts when whitespace follows it, so "Andrew" and a
/// lone "and" are kept. Repeats are stripped too ("and with salt" -> "salt"),
/// which keeps normalization idempotent.
fn strip_connectives(mut segment: &str) -> &str {
    while let Some(rest) = strip_connective(segment) {
        segment = rest;
    }
    segment
}

fn strip_connective(segment: &str) -> Option<&str> {
    let (word, rest) = segment.split_once(char::is_whitespace)?;
    CONNECTIVES
        .iter()
        .any(|connective| word.eq_ignore_ascii_case(connective))
        .then(|| rest.trim_start())
}

/// Collapse whitespace runs to single spaces and trim the ends.
fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
