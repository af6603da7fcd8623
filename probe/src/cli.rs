use clap::Parser;

/// Reference instance of the blog service.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Run one request per blog endpoint and print what comes back.
#[derive(Debug, Parser)]
#[command(name = "blog-probe", version, about)]
pub struct Cli {
    /// Base URL of the blog API
    #[arg(long, value_name = "URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
}
