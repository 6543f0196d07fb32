use crate::error::ClassifierError;
use crate::image_classifier::models::model_config::Normalization;
use crate::selected_image::SelectedImage;
use image::{imageops, DynamicImage};
use tract_onnx::prelude::*;

const IMAGENET_MEAN: [f32; 3] = [0.485, 0.456, 0.406];
const IMAGENET_STD: [f32; 3] = [0.229, 0.224, 0.225];

/// Scales the image so it covers `width` x `height`, then cuts out the centre.
pub fn center_crop(image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    let (w, h) = (image.width() as f32, image.height() as f32);
    let scale = (width as f32 / w).max(height as f32 / h);
    let new_w = ((w * scale).round() as u32).max(width);
    let new_h = ((h * scale).round() as u32).max(height);

    let scaled = image.resize_exact(new_w, new_h, imageops::FilterType::Triangle);

    let x_offset = (new_w - width) / 2;
    let y_offset = (new_h - height) / 2;

    scaled.crop_imm(x_offset, y_offset, width, height)
}

fn image_to_tensor(image: &DynamicImage, normalization: Normalization) -> Tensor {
    let rgb = image.to_rgb8();
    let (width, height) = (rgb.width() as usize, rgb.height() as usize);

    let tensor = tract_ndarray::Array4::from_shape_fn((1, 3, height, width), |(_, c, y, x)| {
        let value = rgb.get_pixel(x as u32, y as u32)[c] as f32 / 255.0;
        match normalization {
            Normalization::UnitRange => value,
            Normalization::ImageNet => (value - IMAGENET_MEAN[c]) / IMAGENET_STD[c],
        }
    });

    tensor.into_tensor()
}

/// Orients, center-crops and converts an image into an NCHW f32 tensor.
pub fn selected_image_to_tensor(
    selected: &SelectedImage,
    width: u32,
    height: u32,
    normalization: Normalization,
) -> Result<Tensor, ClassifierError> {
    if selected.image.width() == 0 || selected.image.height() == 0 {
        return Err(ClassifierError::Conversion(format!(
            "{} has no pixels",
            selected.name
        )));
    }
    if width == 0 || height == 0 {
        return Err(ClassifierError::Conversion(format!(
            "invalid model input size {}x{}",
            width, height
        )));
    }

    let oriented = selected.oriented();
    let cropped = center_crop(&oriented, width, height);

    Ok(image_to_tensor(&cropped, normalization))
}
