use std::sync::Arc;
use image::{GrayImage, Luma, RgbaImage};

/// Width and height of one block sprite.
pub const SPRITE_SIZE: u32 = 24;

/// Shared drawing resources handed to primitives when they start.
#[derive(Clone, Debug)]
pub struct Support {
	/// Coverage of a block's top face within its sprite.
	pub facemask_top: Option<Arc<GrayImage>>
}

impl Support {
	pub fn new() -> Self {
		Support {
			facemask_top: Some(Arc::new(top_face_mask()))
		}
	}

	/// Support data without any masks.
	pub fn empty() -> Self {
		Support { facemask_top: None }
	}
}

impl Default for Support {
	fn default() -> Self {
		Support::new()
	}
}

/// The isometric top face: a diamond spanning the full sprite width and the upper half of its
/// height.
pub fn top_face_mask() -> GrayImage {
	GrayImage::from_fn(SPRITE_SIZE, SPRITE_SIZE, |x, y| {
		// Measured in half pixels from the center of the face at (12, 6).
		let dx = ((2 * x + 1) as i32 - 24).abs();
		let dy = ((2 * y + 1) as i32 - 12).abs();

		if y < SPRITE_SIZE / 2 && dx + 2 * dy <= 25 {
			Luma([255])
		} else {
			Luma([0])
		}
	})
}

fn mul_div_255(a: u8, b: u8) -> u8 {
	((a as u32 * b as u32 + 127) / 255) as u8
}

fn blend(under: u8, over: u8, alpha: u8) -> u8 {
	let under = under as u32;
	let over = over as u32;
	let alpha = alpha as u32;

	((under * (255 - alpha) + over * alpha + 127) / 255) as u8
}

/// Calls `apply` with the coverage of every covered mask pixel that lands inside the image.
fn for_each_masked<F>(img: &mut RgbaImage, mask: &GrayImage, x: i32, y: i32, mut apply: F) where F: FnMut(&mut [u8; 4], u8) {
	let (width, height) = (img.width() as i32, img.height() as i32);

	for (mx, my, coverage) in mask.enumerate_pixels() {
		let coverage = coverage.0[0];

		if coverage == 0 {
			continue;
		}

		let (tx, ty) = (x + mx as i32, y + my as i32);

		if tx < 0 || ty < 0 || tx >= width || ty >= height {
			continue;
		}

		apply(&mut img.get_pixel_mut(tx as u32, ty as u32).0, coverage);
	}
}

/// Blends white over the masked area with an opacity of `alpha / 255`.
pub fn alpha_over_white(img: &mut RgbaImage, mask: &GrayImage, x: i32, y: i32, alpha: u8) {
	for_each_masked(img, mask, x, y, |pixel, coverage| {
		let alpha = mul_div_255(coverage, alpha);

		for channel in pixel.iter_mut() {
			*channel = blend(*channel, 255, alpha);
		}
	});
}

/// Multiplies the masked area by a color.
pub fn tint_with_mask(img: &mut RgbaImage, color: [u8; 3], mask: &GrayImage, x: i32, y: i32) {
	for_each_masked(img, mask, x, y, |pixel, coverage| {
		for (channel, &tint) in pixel.iter_mut().zip(color.iter()) {
			*channel = blend(*channel, mul_div_255(*channel, tint), coverage);
		}
	});
}
