//! Text extraction for Greybrainer model responses.
//!
//! Every parser here is pure and total: on input it does not recognize it
//! returns `None` (or the verbatim text) instead of failing. The anchor
//! strings the parsers look for live in [`anchors`] and are embedded in the
//! prompts by `greybrainer_prompts`.
//!
//! # Example
//!
//! ```
//! use greybrainer_extract::{parse_director, parse_score};
//!
//! let text = "Director: Denis Villeneuve\nSuggested Score: 8.5/10";
//! assert_eq!(parse_director(text).as_deref(), Some("Denis Villeneuve"));
//! assert_eq!(parse_score(text), Some(8.5));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod anchors;
mod clean;
mod delimited;
mod fence;
mod financials;
mod layer;
mod list;
mod personnel;
mod plot_shape;
mod report;
mod score;
mod suggestions;

pub use clean::{clean_layer_text, collapse_blank_lines};
pub use delimited::{Delimited, find_delimited};
pub use fence::{extract_json_payload, strip_code_fences};
pub use financials::parse_financials;
pub use layer::parse_layer_response;
pub use list::{parse_improvements, parse_list};
pub use personnel::{parse_cast, parse_director};
pub use plot_shape::parse_plot_shape;
pub use report::{ReportSections, split_report};
pub use score::parse_score;
pub use suggestions::{MAX_SUGGESTIONS, parse_title_suggestions};
