/// Structural failure of a hero or page payload.
///
/// Each variant names the first defect the validator ran into, so callers
/// can log something more specific than "invalid data".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid {entity} data structure: not a JSON object")]
    NotAnObject { entity: &'static str },

    #[error("Invalid hero data structure: id must be a positive number")]
    InvalidId,

    #[error("Invalid hero data structure: {field} must be a non-empty string")]
    MissingText { field: &'static str },

    #[error("Invalid hero data structure: {group} is malformed")]
    InvalidGroup { group: &'static str },

    #[error("Invalid hero data structure: images has no usable URL")]
    NoImageUrl,

    #[error("Invalid paginated response structure: {field} must be a number >= {min}")]
    PageFieldOutOfRange { field: &'static str, min: u64 },

    #[error("Invalid paginated response structure: items must be an array")]
    ItemsNotArray,
}
