mod home;
mod output;
mod render;

pub use home::{DEFAULT_REVALIDATE, HomePage};
pub use output::{
    FileStatus, PAGE_FILENAME, PROPS_FILENAME, WriteSummary, content_hash, write_page,
};
pub use render::{render_home_page, render_props};
