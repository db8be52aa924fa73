use clap::Parser;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/";

#[derive(Parser, Debug, Clone)]
#[command(name = "image-describer", about = "Describe an image with a remote AI service")]
pub struct Opts {
    /// base url of the image description service
    #[arg(long, env = "IMAGE_DESCRIBER_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: Url,
    /// log at debug level
    #[arg(long)]
    pub debug: bool,
}
