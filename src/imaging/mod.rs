//! Illustration of glosses.
//!
//! # Submodules
//!
//! - `generator`: Provider-backed image generation with caching and a
//!   placeholder fallback.
//! - `postprocess`: Metadata stamping of image records.

pub mod generator;
pub mod postprocess;

pub use generator::{image_prompt, placeholder_url, ImageGenerator, ImageIds};
pub use postprocess::{Postprocessor, ProcessedImage, ProcessingMetadata, PROCESSING_VERSION};
