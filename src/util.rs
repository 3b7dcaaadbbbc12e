//! Environment generators for new annotations.
//!
//! New annotations get a random color and font family, matching the canvas
//! convention that each placed text starts visually distinct. The rng is
//! passed in so the presentation layer can seed it deterministically.

use rand::Rng;

use crate::model::{Color, FontFamily};

/// Uniformly random opaque color
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    Color::rgb(rng.gen(), rng.gen(), rng.gen())
}

/// Uniformly random font family from the supported set
pub fn random_font_family<R: Rng + ?Sized>(rng: &mut R) -> FontFamily {
    FontFamily::ALL[rng.gen_range(0..FontFamily::ALL.len())]
}
