//! Image decoding and face-box annotation.

use facelog_core::models::FaceBox;
use facelog_core::AppError;
use image::{DynamicImage, ImageFormat, ImageReader, Rgba};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;
use std::io::Cursor;

const BOX_COLOR: Rgba<u8> = Rgba([0, 255, 0, 255]);
const BOX_THICKNESS: i32 = 2;

/// Decode raw upload bytes, guessing the format from content.
pub fn decode_image(data: &[u8]) -> Result<(DynamicImage, ImageFormat), AppError> {
    let reader = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| AppError::Internal(format!("Failed to probe image format: {}", e)))?;
    let format = reader.format().unwrap_or(ImageFormat::Png);
    let image = reader.decode().map_err(|e| {
        tracing::warn!(error = %e, "Image decode failed");
        AppError::Decode("Could not read image file. Invalid format or corrupt.".to_string())
    })?;
    Ok((image, format))
}

/// Draw one hollow rectangle per detected face on a copy of `image`.
///
/// Boxes are used verbatim (no filtering or merging); coordinates are clamped
/// to the image bounds before drawing.
pub fn draw_face_boxes(image: &DynamicImage, boxes: &[FaceBox]) -> DynamicImage {
    let mut canvas = image.to_rgba8();
    let (img_w, img_h) = (canvas.width() as i32, canvas.height() as i32);

    for face in boxes {
        let x0 = face.x.clamp(0, img_w - 1);
        let y0 = face.y.clamp(0, img_h - 1);
        let x1 = (face.x + face.width as i32).clamp(x0 + 1, img_w);
        let y1 = (face.y + face.height as i32).clamp(y0 + 1, img_h);

        for inset in 0..BOX_THICKNESS {
            let w = (x1 - x0) - 2 * inset;
            let h = (y1 - y0) - 2 * inset;
            if w <= 0 || h <= 0 {
                break;
            }
            let rect = Rect::at(x0 + inset, y0 + inset).of_size(w as u32, h as u32);
            draw_hollow_rect_mut(&mut canvas, rect, BOX_COLOR);
        }
    }

    DynamicImage::ImageRgba8(canvas)
}

/// Encode `image` back to bytes in `format`.
///
/// JPEG has no alpha channel, so the image is flattened to RGB first. Formats
/// without an encoder fall back to PNG.
pub fn encode_image(image: &DynamicImage, format: ImageFormat) -> Result<Vec<u8>, AppError> {
    let mut buf = Cursor::new(Vec::new());
    let result = match format {
        ImageFormat::Jpeg => {
            DynamicImage::ImageRgb8(image.to_rgb8()).write_to(&mut buf, ImageFormat::Jpeg)
        }
        ImageFormat::Png => image.write_to(&mut buf, ImageFormat::Png),
        other if other.writing_enabled() => image.write_to(&mut buf, other),
        _ => image.write_to(&mut buf, ImageFormat::Png),
    };
    result.map_err(|e| AppError::Internal(format!("Failed to encode annotated image: {}", e)))?;
    Ok(buf.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GenericImageView;

    fn solid_png(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
            width,
            height,
            image::Rgb([40, 80, 120]),
        ));
        encode_image(&img, ImageFormat::Png).unwrap()
    }

    #[test]
    fn test_decode_valid_png() {
        let data = solid_png(10, 10);
        let (img, format) = decode_image(&data).unwrap();
        assert_eq!(img.dimensions(), (10, 10));
        assert_eq!(format, ImageFormat::Png);
    }

    #[test]
    fn test_decode_garbage_is_decode_error() {
        let result = decode_image(b"not an image");
        assert!(matches!(result, Err(AppError::Decode(_))));
    }

    #[test]
    fn test_draw_marks_box_outline() {
        let data = solid_png(64, 64);
        let (img, _) = decode_image(&data).unwrap();
        let boxes = [FaceBox::new(10, 10, 20, 20)];

        let annotated = draw_face_boxes(&img, &boxes);

        // Outline pixels are green, interior pixels untouched
        assert_eq!(annotated.get_pixel(10, 10), Rgba([0, 255, 0, 255]));
        assert_eq!(annotated.get_pixel(29, 10), Rgba([0, 255, 0, 255]));
        assert_eq!(annotated.get_pixel(10, 29), Rgba([0, 255, 0, 255]));
        // Second pixel of the 2px outline
        assert_eq!(annotated.get_pixel(11, 11), Rgba([0, 255, 0, 255]));
        // Center stays the original color
        assert_eq!(annotated.get_pixel(20, 20), Rgba([40, 80, 120, 255]));
    }

    #[test]
    fn test_draw_one_outline_per_box() {
        let data = solid_png(64, 64);
        let (img, _) = decode_image(&data).unwrap();
        let boxes = [FaceBox::new(4, 4, 10, 10), FaceBox::new(40, 40, 12, 12)];

        let annotated = draw_face_boxes(&img, &boxes);

        assert_eq!(annotated.get_pixel(4, 4), Rgba([0, 255, 0, 255]));
        assert_eq!(annotated.get_pixel(40, 40), Rgba([0, 255, 0, 255]));
        // A point away from both boxes is untouched
        assert_eq!(annotated.get_pixel(30, 4), Rgba([40, 80, 120, 255]));
    }

    #[test]
    fn test_draw_clamps_out_of_bounds_box() {
        let data = solid_png(32, 32);
        let (img, _) = decode_image(&data).unwrap();
        // Box starts outside the frame and extends past the right edge
        let boxes = [FaceBox::new(-5, -5, 100, 100)];

        let annotated = draw_face_boxes(&img, &boxes);
        assert_eq!(annotated.dimensions(), (32, 32));
        assert_eq!(annotated.get_pixel(0, 0), Rgba([0, 255, 0, 255]));
    }

    #[test]
    fn test_draw_no_boxes_leaves_pixels_unchanged() {
        let data = solid_png(16, 16);
        let (img, _) = decode_image(&data).unwrap();
        let annotated = draw_face_boxes(&img, &[]);
        for (_, _, px) in annotated.to_rgba8().enumerate_pixels() {
            assert_eq!(*px, Rgba([40, 80, 120, 255]));
        }
    }

    #[test]
    fn test_encode_jpeg_flattens_alpha() {
        let img = DynamicImage::new_rgba8(8, 8);
        let bytes = encode_image(&img, ImageFormat::Jpeg).unwrap();
        let (decoded, format) = decode_image(&bytes).unwrap();
        assert_eq!(format, ImageFormat::Jpeg);
        assert_eq!(decoded.dimensions(), (8, 8));
    }
}
