//! RGB drawing surface with PNG persistence
//!
//! Drawing follows common raster conventions: rectangles cover
//! `[x, x + w) x [y, y + h)`, lines include both endpoints, and a stroke of
//! even width puts its extra pixel below a horizontal-ish line or right of a
//! vertical-ish one. Everything is clipped to the canvas.

use image::{Rgb, RgbImage, imageops};
use std::path::Path;

use crate::io::error::{MazeError, Result, WithPath, invalid_parameter};

/// Primitive drawing operations the renderer needs
pub trait DrawTarget {
    /// Canvas size in pixels (width, height)
    fn dimensions(&self) -> (u32, u32);

    /// Paint every pixel with `color`
    fn fill(&mut self, color: Rgb<u8>);

    /// Paint the `width` x `height` rectangle whose top-left is (`x`, `y`)
    fn draw_rect(&mut self, x: i64, y: i64, width: u32, height: u32, color: Rgb<u8>);

    /// Draw a line between two inclusive endpoints with the given stroke width
    fn draw_line(&mut self, from: (i64, i64), to: (i64, i64), color: Rgb<u8>, stroke_width: u32);
}

/// In-memory RGB canvas backed by an [`RgbImage`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Create a black canvas
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(invalid_parameter(
                "canvas",
                &format!("{width}x{height}"),
                &"canvas must be at least one pixel in each direction",
            ));
        }
        Ok(Self {
            image: RgbImage::new(width, height),
        })
    }

    /// Create a canvas filled with `color`
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero
    pub fn with_background(width: u32, height: u32, color: Rgb<u8>) -> Result<Self> {
        let mut canvas = Self::new(width, height)?;
        canvas.fill(color);
        Ok(canvas)
    }

    /// Wrap an existing image
    pub const fn from_image(image: RgbImage) -> Self {
        Self { image }
    }

    /// Borrow the underlying image
    pub const fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Take the underlying image
    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// Color at (`x`, `y`), if inside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb<u8>> {
        self.image.get_pixel_checked(x, y).copied()
    }

    /// Copy `other` onto this canvas with its top-left at (`x`, `y`)
    ///
    /// Parts of `other` falling outside this canvas are dropped.
    pub fn paste(&mut self, other: &Self, x: u32, y: u32) {
        imageops::replace(&mut self.image, &other.image, i64::from(x), i64::from(y));
    }

    /// Encode the canvas to `path`, with the format chosen by extension
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or the
    /// image cannot be encoded and written
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
        }

        self.image
            .save(path)
            .map_err(|source| MazeError::ImageExport {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Decode an image file into a canvas
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded
    pub fn load(path: &Path) -> Result<Self> {
        let image = image::open(path).map_err(|source| MazeError::ImageLoad {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_image(image.to_rgb8()))
    }

    fn plot(&mut self, x: i64, y: i64, color: Rgb<u8>) {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return;
        };
        if let Some(pixel) = self.image.get_pixel_mut_checked(x, y) {
            *pixel = color;
        }
    }
}

impl DrawTarget for Canvas {
    fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn fill(&mut self, color: Rgb<u8>) {
        for pixel in self.image.pixels_mut() {
            *pixel = color;
        }
    }

    fn draw_rect(&mut self, x: i64, y: i64, width: u32, height: u32, color: Rgb<u8>) {
        let (canvas_width, canvas_height) = self.image.dimensions();
        let x_start = x.max(0);
        let y_start = y.max(0);
        let x_end = (x + i64::from(width)).min(i64::from(canvas_width));
        let y_end = (y + i64::from(height)).min(i64::from(canvas_height));

        for py in y_start..y_end {
            for px in x_start..x_end {
                self.plot(px, py, color);
            }
        }
    }

    fn draw_line(&mut self, from: (i64, i64), to: (i64, i64), color: Rgb<u8>, stroke_width: u32) {
        if stroke_width == 0 {
            return;
        }

        let (mut x, mut y) = from;
        let dx = (to.0 - x).abs();
        let dy = -(to.1 - y).abs();
        let step_x = if x < to.0 { 1 } else { -1 };
        let step_y = if y < to.1 { 1 } else { -1 };
        // Thickness grows across the dominant axis
        let thicken_vertically = dx > -dy;
        let stroke = i64::from(stroke_width);
        let spread = -((stroke - 1) / 2)..(stroke - (stroke - 1) / 2);

        let mut error = dx + dy;
        loop {
            for offset in spread.clone() {
                if thicken_vertically {
                    self.plot(x, y + offset, color);
                } else {
                    self.plot(x + offset, y, color);
                }
            }

            if x == to.0 && y == to.1 {
                break;
            }
            let doubled = 2 * error;
            if doubled >= dy {
                error += dy;
                x += step_x;
            }
            if doubled <= dx {
                error += dx;
                y += step_y;
            }
        }
    }
}
