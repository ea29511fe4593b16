//! Channel packing of tone textures into RGB hatch maps.
//!
//! Each output channel is a straight copy of one channel of one source
//! texture. There is no blending, gamma handling or rescaling: an 8-bit
//! source sample lands unchanged in the 8-bit output sample.
//!
//! # Example
//!
//! ```
//! use tampack::{pack_hatch_maps, ColorComponent, TamInputs, TextureBuffer};
//!
//! let tones = [10u8, 20, 30, 40, 50, 60].map(|v| TextureBuffer::gray(2, 1, v));
//! let maps = pack_hatch_maps(&TamInputs::from_textures(tones), ColorComponent::R).unwrap();
//!
//! assert_eq!(maps.hatch0.get(0, 0), [10, 20, 30]);
//! assert_eq!(maps.hatch1.get(0, 0), [40, 50, 60]);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, TamError};
use crate::texture::{RgbBuffer, TamInputs, TextureBuffer};
use crate::validate::validated_textures;
use crate::TONES_PER_MAP;

/// Color component to copy out of each source texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorComponent {
    /// Red channel
    #[default]
    R,
    /// Green channel
    G,
    /// Blue channel
    B,
    /// Alpha channel
    A,
}

impl ColorComponent {
    /// Byte offset of this component inside an RGBA8 pixel.
    #[inline]
    pub const fn offset(self) -> usize {
        match self {
            ColorComponent::R => 0,
            ColorComponent::G => 1,
            ColorComponent::B => 2,
            ColorComponent::A => 3,
        }
    }
}

impl std::str::FromStr for ColorComponent {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "r" | "red" => Ok(ColorComponent::R),
            "g" | "green" => Ok(ColorComponent::G),
            "b" | "blue" => Ok(ColorComponent::B),
            "a" | "alpha" => Ok(ColorComponent::A),
            other => Err(format!("unknown color component '{}'", other)),
        }
    }
}

/// The two packed textures of a Tonal Art Map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HatchMaps {
    /// Tones 0, 1, 2 in R, G, B.
    pub hatch0: RgbBuffer,
    /// Tones 3, 4, 5 in R, G, B.
    pub hatch1: RgbBuffer,
}

impl HatchMaps {
    /// Both maps in output order.
    pub fn maps(&self) -> [&RgbBuffer; 2] {
        [&self.hatch0, &self.hatch1]
    }
}

/// Pack one component of three same-sized textures into a single RGB buffer.
///
/// Fails with [`TamError::InvalidTexture`] unless all three sources share
/// their dimensions.
pub fn pack_channels(
    sources: [&TextureBuffer; TONES_PER_MAP],
    component: ColorComponent,
) -> Result<RgbBuffer> {
    let [r_src, g_src, b_src] = sources;
    let expected = r_src.dimensions();
    if let Some((index, src)) = sources
        .iter()
        .enumerate()
        .find(|(_, s)| s.dimensions() != expected)
    {
        return Err(TamError::InvalidTexture(format!(
            "source {} is {}x{}, expected {}x{}",
            index, src.width, src.height, expected.0, expected.1
        )));
    }

    let offset = component.offset();
    let data = r_src
        .data
        .iter()
        .zip(&g_src.data)
        .zip(&b_src.data)
        .map(|((r, g), b)| [r[offset], g[offset], b[offset]])
        .collect();

    Ok(RgbBuffer {
        width: r_src.width,
        height: r_src.height,
        data,
    })
}

/// Validate the six tone slots and pack them into `Hatch0` / `Hatch1`.
pub fn pack_hatch_maps(inputs: &TamInputs, component: ColorComponent) -> Result<HatchMaps> {
    let [t0, t1, t2, t3, t4, t5] = validated_textures(inputs)?;

    debug!(width = t0.width, height = t0.height, ?component, "packing tone textures");

    Ok(HatchMaps {
        hatch0: pack_channels([t0, t1, t2], component)?,
        hatch1: pack_channels([t3, t4, t5], component)?,
    })
}
