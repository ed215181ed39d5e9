/*!
 * # ttscribe - TTML transcript extraction
 *
 * A Rust library for converting TTML timed-text documents into plain-text
 * transcripts.
 *
 * ## Features
 *
 * - Parse TTML caption documents into a body/div/paragraph/span tree
 * - Extract per-paragraph transcript lines, flattening arbitrarily
 *   nested spans in document order
 * - Optional `[HH:MM:SS]` timestamp prefixes derived from paragraph
 *   begin times
 * - Batch processing of a whole TTML cache directory with deterministic,
 *   deduplicated output filenames
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `ttml`: TTML document model and parser
 * - `transcript`: Transcript extraction and timestamp formatting
 * - `batch`: Document discovery and output name assignment
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod batch;
pub mod errors;
pub mod file_utils;
pub mod transcript;
pub mod ttml;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use batch::{BatchEntry, assign_output_names, collect_documents, identifier_from_path};
pub use errors::{AppError, ParseError};
pub use transcript::{TranscriptLine, extract_lines, extract_transcript, format_timestamp};
pub use ttml::{Document, Paragraph, Span};
