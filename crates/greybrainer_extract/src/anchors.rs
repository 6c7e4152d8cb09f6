//! Literal markers shared between prompt text and the parsers.
//!
//! Changing one of these means changing the prompt and parser together.

/// Score line label, followed by `<value>/10`.
pub const SUGGESTED_SCORE: &str = "Suggested Score:";
/// Director line label.
pub const DIRECTOR: &str = "Director:";
/// Cast line label, followed by a comma separated list.
pub const MAIN_CAST: &str = "Main Cast:";
/// Heading of the per-layer improvement list.
pub const POTENTIAL_ENHANCEMENTS: &str = "Potential Enhancements:";

/// Opens the story shape block.
pub const PLOT_SHAPE_START: &str = "---VONNEGUT STORY SHAPE START---";
/// Closes the story shape block.
pub const PLOT_SHAPE_END: &str = "---VONNEGUT STORY SHAPE END---";
/// Shape name label inside the story shape block.
pub const SHAPE_NAME: &str = "Shape Name:";
/// Justification label inside the story shape block.
pub const JUSTIFICATION: &str = "Justification:";
/// Point list label inside the story shape block.
pub const PLOT_POINTS: &str = "Plot Points:";

/// Opens the Twitter post block.
pub const TWITTER_START: &str = "---TWITTER POST START---";
/// Closes the Twitter post block.
pub const TWITTER_END: &str = "---TWITTER POST END---";
/// Opens the LinkedIn post block.
pub const LINKEDIN_START: &str = "---LINKEDIN POST START---";
/// Closes the LinkedIn post block.
pub const LINKEDIN_END: &str = "---LINKEDIN POST END---";
/// Final section of the report body.
pub const OVERALL_IMPROVEMENTS: &str = "Overall Improvement Opportunities:";
