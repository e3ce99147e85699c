//! Platform palette with generated fallback.
//!
//! Some platforms expose their own dynamic palette. When one is available and
//! well-formed it wins; otherwise a palette is generated from a fallback seed.

use crate::palette::{MaterialYouPalette, generate};
use crate::style::Style;
use tracing::{info, warn};

/// Something that may supply a ready-made palette.
pub trait NativePaletteSource {
    /// The platform palette, or `None` when the platform has none.
    fn palette(&self) -> Option<MaterialYouPalette>;
}

impl<F> NativePaletteSource for F
where
    F: Fn() -> Option<MaterialYouPalette>,
{
    fn palette(&self) -> Option<MaterialYouPalette> {
        self()
    }
}

/// A source that never has a palette.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unavailable;

impl NativePaletteSource for Unavailable {
    fn palette(&self) -> Option<MaterialYouPalette> {
        None
    }
}

/// Returns the native palette if there is a valid one, else generates from
/// `fallback_seed` with `style`.
///
/// A native palette that fails [`MaterialYouPalette::validate`] is discarded
/// with a warning.
pub fn material_you_palette(
    source: Option<&dyn NativePaletteSource>,
    fallback_seed: &str,
    style: Style,
) -> MaterialYouPalette {
    match source.and_then(|source| source.palette()) {
        Some(native) => match native.validate() {
            Ok(()) => return native,
            Err(err) => warn!(error = %err, fallback_seed, "Native palette rejected, generating from fallback seed"),
        },
        None => info!(fallback_seed, %style, "Native palette unavailable, generating from fallback seed"),
    }
    generate(fallback_seed, style)
}
