pub mod paths;

pub use paths::{MAX_EXPORT_SIZE_BYTES, format_path_with_tilde, validate_file_size};
