//! Page slicing of one tall rendered surface.
//!
//! The surface is scaled to fill the page width. Every page draws the same
//! scaled image, shifted up by one page height per page and clipped by the
//! page frame, so consecutive pages show consecutive slices.

use serde::{Deserialize, Serialize};

/// A rendered surface in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Surface {
    pub width: f64,
    pub height: f64,
    /// Capture scale, device pixels per layout unit.
    pub pixels_per_unit: f64,
}

impl Surface {
    pub fn new(width: f64, height: f64, pixels_per_unit: f64) -> Self {
        Self {
            width,
            height,
            pixels_per_unit,
        }
    }
}

/// Output page size in page units (millimetres for PDF).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    pub width: f64,
    pub height: f64,
}

impl PageGeometry {
    /// A4 portrait, 210 × 297 mm.
    pub const A4: PageGeometry = PageGeometry {
        width: 210.0,
        height: 297.0,
    };
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::A4
    }
}

/// Placement of the scaled image on one page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSlice {
    pub index: usize,
    /// Vertical position of the image's top edge on this page; zero or negative.
    pub offset_y: f64,
    /// Top of the visible part, measured from the image's top edge.
    pub visible_top: f64,
    /// Height of the visible part; a full page except on the last page.
    pub visible_height: f64,
}

impl PageSlice {
    /// Source rows `(top, height)` of this slice in surface pixels.
    pub fn source_rows(&self, surface: &Surface, page: &PageGeometry) -> (f64, f64) {
        let ratio = surface.width / page.width;
        (self.visible_top * ratio, self.visible_height * ratio)
    }
}

/// Height of the surface once scaled to the page width.
pub fn image_height(surface: &Surface, page: &PageGeometry) -> f64 {
    if surface.width <= 0.0 {
        return 0.0;
    }
    surface.height * page.width / surface.width
}

/// Number of pages needed: `ceil(imageHeight / pageHeight)`, at least one.
pub fn page_count(surface: &Surface, page: &PageGeometry) -> usize {
    let height = image_height(surface, page);
    if page.height <= 0.0 || !height.is_finite() || height <= 0.0 {
        return 1;
    }
    ((height / page.height).ceil() as usize).max(1)
}

/// Slice the scaled surface into page-height strips, top to bottom.
pub fn paginate(surface: &Surface, page: &PageGeometry) -> Vec<PageSlice> {
    let height = image_height(surface, page);
    (0..page_count(surface, page))
        .map(|index| {
            let visible_top = index as f64 * page.height;
            PageSlice {
                index,
                offset_y: -visible_top,
                visible_top,
                visible_height: (height - visible_top).clamp(0.0, page.height),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// A surface that scales to `height` page units on A4.
    fn scaled_to(height: f64) -> Surface {
        Surface::new(210.0, height, 1.0)
    }

    #[test]
    fn test_650_units_make_three_pages() {
        let pages = paginate(&scaled_to(650.0), &PageGeometry::A4);
        assert_eq!(pages.len(), 3);
        let offsets: Vec<f64> = pages.iter().map(|p| p.offset_y).collect();
        assert_eq!(offsets, vec![0.0, -297.0, -594.0]);
        assert_eq!(pages[2].visible_height, 56.0);
    }

    #[test]
    fn test_short_content_still_one_page() {
        let pages = paginate(&scaled_to(100.0), &PageGeometry::A4);
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].offset_y, 0.0);
        assert_eq!(pages[0].visible_height, 100.0);
    }

    #[test]
    fn test_empty_surface_one_page() {
        assert_eq!(paginate(&scaled_to(0.0), &PageGeometry::A4).len(), 1);
        assert_eq!(paginate(&Surface::new(0.0, 500.0, 2.0), &PageGeometry::A4).len(), 1);
    }

    #[test]
    fn test_exact_multiple_has_no_trailing_blank_page() {
        assert_eq!(paginate(&scaled_to(594.0), &PageGeometry::A4).len(), 2);
    }

    #[test]
    fn test_scaling_preserves_aspect_ratio() {
        // ten pixels per millimetre
        let surface = Surface::new(2100.0, 5940.0, 2.0);
        let height = image_height(&surface, &PageGeometry::A4);
        assert!((height - 594.0).abs() < 1e-9);
        let pages = paginate(&surface, &PageGeometry::A4);
        let (top, rows) = pages[1].source_rows(&surface, &PageGeometry::A4);
        assert!((top - 2970.0).abs() < 1e-6);
        assert!((rows - 2970.0).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn page_count_is_ceil(width in 1u32..4000, height in 0u32..40_000) {
            let surface = Surface::new(width as f64, height as f64, 2.0);
            let page = PageGeometry::A4;
            let expected = ((image_height(&surface, &page) / page.height).ceil() as usize).max(1);
            prop_assert_eq!(paginate(&surface, &page).len(), expected);
        }

        #[test]
        fn slices_reconstruct_image(width in 1u32..4000, height in 1u32..40_000) {
            let surface = Surface::new(width as f64, height as f64, 2.0);
            let page = PageGeometry::A4;
            let pages = paginate(&surface, &page);

            let mut covered = 0.0;
            for slice in &pages {
                prop_assert!((slice.visible_top - covered).abs() < 1e-6);
                prop_assert!(slice.offset_y <= 0.0);
                prop_assert!(slice.visible_height <= page.height);
                covered += slice.visible_height;
            }
            prop_assert!((covered - image_height(&surface, &page)).abs() < 1e-6);
        }
    }
}
