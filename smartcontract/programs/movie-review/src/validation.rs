use crate::error::MovieReviewError;

pub const MAX_TITLE_LENGTH: usize = 20;
pub const MAX_DESCRIPTION_LENGTH: usize = 50;
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Lengths are measured in UTF-8 bytes, which is what the record stores.
pub fn validate_title(title: &str) -> Result<(), MovieReviewError> {
    if title.len() > MAX_TITLE_LENGTH {
        return Err(MovieReviewError::FieldTooLong);
    }
    Ok(())
}

pub fn validate_description(description: &str) -> Result<(), MovieReviewError> {
    if description.len() > MAX_DESCRIPTION_LENGTH {
        return Err(MovieReviewError::FieldTooLong);
    }
    Ok(())
}

pub fn validate_rating(rating: u8) -> Result<(), MovieReviewError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(MovieReviewError::RatingOutOfRange);
    }
    Ok(())
}

pub fn validate_review_fields(
    title: &str,
    description: &str,
    rating: u8,
) -> Result<(), MovieReviewError> {
    validate_title(title)?;
    validate_description(description)?;
    validate_rating(rating)
}
