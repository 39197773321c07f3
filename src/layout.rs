//! Sizing math for fitting an image inside the display box.

/// Largest size preserving `width:height` that fits inside
/// `box_width` x `box_height`.
///
/// The comparison is ratio-driven: a source narrower than the box is
/// height-bound, anything else (ties included) is width-bound. Both outputs
/// are truncated toward zero. Small sources scale up so one axis always fills
/// the box.
#[must_use]
pub fn scaled_size(width: u32, height: u32, box_width: u32, box_height: u32) -> (u32, u32) {
    let source_ratio = f64::from(width) / f64::from(height);
    let box_ratio = f64::from(box_width) / f64::from(box_height);
    if source_ratio < box_ratio {
        let scaled_width = f64::from(box_height) / f64::from(height) * f64::from(width);
        (scaled_width as u32, box_height)
    } else {
        let scaled_height = f64::from(box_width) / f64::from(width) * f64::from(height);
        (box_width, scaled_height as u32)
    }
}
