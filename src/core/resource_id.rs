//! Resource identifier utilities
//!
//! Catalog collection URLs carry the numeric id as the last path segment
//! before the trailing slash: `.../pokemon/<id>/`.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExtractIdError {
    #[error("resource url has no trailing slash")]
    MissingTrailingSlash,
    #[error("resource url has an empty id segment")]
    EmptySegment,
    #[error("resource id is not a decimal number")]
    NotNumeric,
}

/// Extract the id segment of a resource URL
///
/// The URL must end with `/`; anything else is rejected instead of
/// silently returning the wrong segment.
///
/// # Examples
///
/// ```
/// use pokedex_client::core::resource_id::extract_id;
///
/// assert_eq!(extract_id("https://pokeapi.co/api/v2/pokemon/25/"), Ok("25"));
/// assert!(extract_id("https://pokeapi.co/api/v2/pokemon/25").is_err());
/// ```
pub fn extract_id(url: &str) -> Result<&str, ExtractIdError> {
    let trimmed = url
        .strip_suffix('/')
        .ok_or(ExtractIdError::MissingTrailingSlash)?;
    let segment = trimmed.rsplit('/').next().unwrap_or("");
    if segment.is_empty() {
        return Err(ExtractIdError::EmptySegment);
    }
    Ok(segment)
}

/// Extract the id segment of a resource URL and parse it as a number
///
/// # Examples
///
/// ```
/// use pokedex_client::core::resource_id::parse_id;
///
/// assert_eq!(parse_id("https://pokeapi.co/api/v2/pokemon/151/"), Ok(151));
/// ```
pub fn parse_id(url: &str) -> Result<u32, ExtractIdError> {
    let segment = extract_id(url)?;
    if !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ExtractIdError::NotNumeric);
    }
    segment.parse().map_err(|_| ExtractIdError::NotNumeric)
}
