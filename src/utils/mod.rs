/// Utility modules for text analyzer
///
/// This module contains utility functions for loading documents and for
/// formatting and exporting analysis reports.

pub mod file_utils;
pub mod output_formatter;
