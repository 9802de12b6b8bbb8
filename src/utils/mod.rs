// Small standalone helpers used by scoring and the CLI walkthroughs

pub mod arrays;
pub mod math;
pub mod text;
