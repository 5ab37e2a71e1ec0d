//! Static site generation on top of `markdown-sitegen-engine`.

pub mod site;

pub use site::{SiteError, copy_static, generate_page, generate_pages_recursive};
