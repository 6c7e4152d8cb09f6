//! Prompt builders for Greybrainer.
//!
//! Each builder is a pure function of its arguments. The output embeds the
//! markers from [`greybrainer_extract::anchors`] so the matching parser can
//! recover structured fields from the reply.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod financial;
mod layer;
mod personnel;
mod report;
mod suggestions;

pub use financial::{build_financials_prompt, build_roi_prompt};
pub use layer::build_layer_prompt;
pub use personnel::build_personnel_prompt;
pub use report::{NO_ANALYSIS, build_final_report_prompt};
pub use suggestions::build_title_suggestion_prompt;
