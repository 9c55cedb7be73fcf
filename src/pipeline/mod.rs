//! Pipeline entry points for static site generation.
//!
//! - `run_crawler`: Fetch articles from every configured site
//! - `run_renderer`: Write the index page and per-site feed files
//! - `run_assets`: Overlay the static assets tree onto the output
//! - `run_pipeline`: Full run (wipe output, then the three steps above)

pub mod assets;
pub mod crawl;
pub mod pipeline;
pub mod render;

pub use assets::run_assets;
pub use crawl::run_crawler;
pub use pipeline::run_pipeline;
pub use render::run_renderer;
