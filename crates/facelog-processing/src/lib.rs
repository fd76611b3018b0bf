//! Facelog Processing Library
//!
//! Image decode/annotation helpers and the upload pipeline orchestrator.

pub mod annotate;
pub mod pipeline;

pub use annotate::{decode_image, draw_face_boxes, encode_image};
pub use pipeline::{ProcessedUpload, UploadPipeline};
