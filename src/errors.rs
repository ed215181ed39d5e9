/*!
 * Error types for the ttscribe application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when parsing a TTML document
#[derive(Error, Debug)]
pub enum ParseError {
    /// The input is not well-formed XML
    #[error("XML error: {0}")]
    Xml(#[from] roxmltree::Error),

    /// The XML is well-formed but does not have the expected
    /// tt/body/div/p shape
    #[error("Malformed TTML document: {0}")]
    Shape(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// The input file could not be read
    #[error("Failed to read {path}: {source}")]
    Read {
        /// Path of the unreadable input
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// The output file could not be written
    #[error("Failed to write {path}: {source}")]
    Write {
        /// Path of the output that could not be written
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// The input file could not be parsed as TTML
    #[error("Failed to parse {path}: {source}")]
    Parse {
        /// Path of the unparseable input
        path: PathBuf,
        /// Underlying parse error
        source: ParseError,
    },

    /// The command line did not match a recognized mode
    #[error("Invalid usage: {0}")]
    InvalidUsage(String),
}
