//! Input validation for the six tone slots.

use crate::error::ValidationError;
use crate::texture::{TamInputs, TextureBuffer};
use crate::TONE_COUNT;

/// Check that all six slots hold a texture and that they share dimensions.
///
/// Returns the common `(width, height)`.
pub fn validate_inputs(inputs: &TamInputs) -> Result<(u32, u32), ValidationError> {
    validated_textures(inputs).map(|textures| textures[0].dimensions())
}

/// Validate and borrow all six textures in tone order.
pub(crate) fn validated_textures(
    inputs: &TamInputs,
) -> Result<[&TextureBuffer; TONE_COUNT], ValidationError> {
    let mut present = Vec::with_capacity(TONE_COUNT);
    for (index, slot) in inputs.slots().enumerate() {
        present.push(slot.ok_or(ValidationError::MissingInput { index })?);
    }

    let expected = present[0].dimensions();
    for (index, texture) in present.iter().enumerate().skip(1) {
        let actual = texture.dimensions();
        if actual != expected {
            return Err(ValidationError::DimensionMismatch {
                index,
                expected,
                actual,
            });
        }
    }

    Ok(std::array::from_fn(|i| present[i]))
}
