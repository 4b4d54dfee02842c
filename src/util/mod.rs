//! Utility functions shared by the loader and the widgets.
//!
//! - **URL validation**: scheme and host checks for the FAQ source URL
//! - **Text processing**: Unicode-aware width calculation and truncation,
//!   terminal control stripping
//! - **HTML**: display-only conversion of answer bodies into text lines
//!
//! # Examples
//!
//! ```
//! use faqview::util::{html_to_lines, truncate_to_width, validate_source_url};
//!
//! let url = validate_source_url("http://localhost:8080/api/faq/all").unwrap();
//! assert_eq!(url.path(), "/api/faq/all");
//!
//! assert_eq!(html_to_lines("<p>Yes<br>really</p>"), vec!["Yes", "really"]);
//! assert_eq!(truncate_to_width("Long question title", 10), "Long qu...");
//! ```

mod html;
mod text;
mod url_validator;

pub use html::html_to_lines;
pub use text::{display_width, strip_control_chars, truncate_to_width, wrap_to_width};
pub use url_validator::{validate_source_url, UrlValidationError};

/// Maximum allowed search term length, enforced by the input handler.
pub const MAX_SEARCH_TERM_LENGTH: usize = 256;
