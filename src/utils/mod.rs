/// Hugging Face utilities
pub mod hugging_face;

/// Shared HTTP client
pub mod http;

/// Utilities for classification tasks
pub mod classes;
