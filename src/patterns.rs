//! # Pattern library
//!
//! Named, immutable sets of live-cell offsets that can be stamped into
//! the grid at a chosen origin. Patterns come from two places: a handful
//! of built-in classics, and bitmap images decoded at load time where
//! every non-white pixel becomes a live-cell offset relative to the
//! image's own origin.
//!
//! The library is an explicit name-to-pattern map populated up front and
//! read-only afterwards; a stamp request at runtime only ever looks
//! patterns up.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// An ordered sequence of `(dx, dy)` live-cell offsets from a stamp
/// origin. Immutable once constructed.
#[derive(Clone, Debug)]
pub struct Pattern {
    name: String,
    offsets: Vec<(i32, i32)>,
}

impl Pattern {
    /// Build a pattern directly from offsets.
    pub fn from_offsets(name: &str, offsets: Vec<(i32, i32)>) -> Self {
        Self {
            name: name.to_string(),
            offsets,
        }
    }

    /// Decode a bitmap and record the coordinates of every non-white
    /// pixel, relative to the image's top-left corner. The alpha channel
    /// is ignored, matching the loader this replaces.
    ///
    /// # Arguments
    /// * `name` - Library key for the resulting pattern
    /// * `bytes` - Raw encoded image data (PNG, BMP, GIF, ...)
    pub fn from_image_bytes(name: &str, bytes: &[u8]) -> Result<Self> {
        let decoded = image::load_from_memory(bytes).map_err(|source| Error::PatternDecode {
            name: name.to_string(),
            source,
        })?;
        let rgba = decoded.to_rgba8();

        let mut offsets = Vec::new();
        for (x, y, pixel) in rgba.enumerate_pixels() {
            let [r, g, b, _] = pixel.0;
            if r < 255 && g < 255 && b < 255 {
                offsets.push((x as i32, y as i32));
            }
        }

        Ok(Self::from_offsets(name, offsets))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The `(dx, dy)` offsets in load order.
    pub fn offsets(&self) -> &[(i32, i32)] {
        &self.offsets
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

/// Name-keyed collection of patterns, populated at load time.
#[derive(Default)]
pub struct PatternLibrary {
    patterns: HashMap<String, Pattern>,
}

impl PatternLibrary {
    /// Empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Library preloaded with the classic still lifes, oscillators, and
    /// spaceships.
    pub fn with_classics() -> Self {
        let mut library = Self::new();
        for pattern in classic_patterns() {
            library.insert(pattern);
        }
        library
    }

    /// Add a pattern, replacing any existing pattern with the same name.
    pub fn insert(&mut self, pattern: Pattern) {
        self.patterns.insert(pattern.name().to_string(), pattern);
    }

    /// Decode and add a bitmap pattern, failing on undecodable input.
    pub fn load_image(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
        let pattern = Pattern::from_image_bytes(name, bytes)?;
        log::debug!(
            "loaded pattern '{}' with {} live cells",
            name,
            pattern.offsets().len()
        );
        self.insert(pattern);
        Ok(())
    }

    /// Decode and add a bitmap pattern; an undecodable image degrades to
    /// an empty pattern instead of an error, so one bad asset never takes
    /// down a running simulation.
    pub fn load_image_lossy(&mut self, name: &str, bytes: &[u8]) {
        match Pattern::from_image_bytes(name, bytes) {
            Ok(pattern) => self.insert(pattern),
            Err(error) => {
                log::warn!("pattern '{}' failed to load, stamping nothing: {}", name, error);
                self.insert(Pattern::from_offsets(name, Vec::new()));
            }
        }
    }

    /// Look a pattern up by name.
    pub fn get(&self, name: &str) -> Option<&Pattern> {
        self.patterns.get(name)
    }

    /// Pattern names in sorted order, for stable UI listings.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.patterns.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// The built-in pattern set.
fn classic_patterns() -> Vec<Pattern> {
    vec![
        Pattern::from_offsets("block", vec![(0, 0), (1, 0), (0, 1), (1, 1)]),
        Pattern::from_offsets("blinker", vec![(0, 0), (1, 0), (2, 0)]),
        Pattern::from_offsets("glider", vec![(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]),
        Pattern::from_offsets(
            "toad",
            vec![(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
        ),
        Pattern::from_offsets(
            "beacon",
            vec![
                (0, 0),
                (1, 0),
                (0, 1),
                (1, 1),
                (2, 2),
                (3, 2),
                (2, 3),
                (3, 3),
            ],
        ),
        Pattern::from_offsets(
            "gosper_gun",
            vec![
                (24, 0),
                (22, 1),
                (24, 1),
                (12, 2),
                (13, 2),
                (20, 2),
                (21, 2),
                (34, 2),
                (35, 2),
                (11, 3),
                (15, 3),
                (20, 3),
                (21, 3),
                (34, 3),
                (35, 3),
                (0, 4),
                (1, 4),
                (10, 4),
                (16, 4),
                (20, 4),
                (21, 4),
                (0, 5),
                (1, 5),
                (10, 5),
                (14, 5),
                (16, 5),
                (17, 5),
                (22, 5),
                (24, 5),
                (10, 6),
                (16, 6),
                (24, 6),
                (11, 7),
                (15, 7),
                (12, 8),
                (13, 8),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 2x2 PNG with one black pixel at (1, 0), rendered by `image` itself
    /// so the bytes stay in sync with the decoder we ship.
    fn one_pixel_png() -> Vec<u8> {
        let mut img = image::RgbaImage::from_pixel(2, 2, image::Rgba([255, 255, 255, 255]));
        img.put_pixel(1, 0, image::Rgba([0, 0, 0, 255]));
        let mut bytes = Vec::new();
        img.write_to(
            &mut std::io::Cursor::new(&mut bytes),
            image::ImageFormat::Png,
        )
        .unwrap();
        bytes
    }

    #[test]
    fn test_classics_present() {
        let library = PatternLibrary::with_classics();
        assert!(library.get("glider").is_some());
        assert!(library.get("blinker").is_some());
        assert_eq!(library.get("gosper_gun").unwrap().offsets().len(), 36);
        assert!(library.get("no_such_pattern").is_none());
    }

    #[test]
    fn test_image_decoding_keeps_non_white_pixels() {
        let pattern = Pattern::from_image_bytes("dot", &one_pixel_png()).unwrap();
        assert_eq!(pattern.offsets(), &[(1, 0)]);
    }

    #[test]
    fn test_undecodable_image_is_an_error() {
        let result = Pattern::from_image_bytes("garbage", b"not an image");
        assert!(matches!(
            result,
            Err(Error::PatternDecode { .. })
        ));
    }

    #[test]
    fn test_lossy_load_degrades_to_empty() {
        let mut library = PatternLibrary::new();
        library.load_image_lossy("garbage", b"not an image");
        let pattern = library.get("garbage").unwrap();
        assert!(pattern.is_empty());
    }

    #[test]
    fn test_names_are_sorted() {
        let mut library = PatternLibrary::new();
        library.insert(Pattern::from_offsets("zebra", vec![]));
        library.insert(Pattern::from_offsets("ant", vec![]));
        assert_eq!(library.names(), vec!["ant", "zebra"]);
    }
}
