/// Left-right mirroring of decoded images
///
/// The output keeps the input's dimensions and color type. Pixel `(x, y)`
/// of the result is pixel `(width - 1 - x, y)` of the source, so applying
/// the mirror twice gives back the original image.
use image::DynamicImage;

/// Mirror an image across its vertical center axis
pub fn mirror(img: &DynamicImage) -> DynamicImage {
    img.fliph()
}
