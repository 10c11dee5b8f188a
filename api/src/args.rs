use clap::Parser;
use platelens_core::domain::common::{PlateLensConfig, RecognitionConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "platelens-api", version, about = "PlateLens food recognition API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub recognition: RecognitionArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ServerArgs {
    #[arg(long = "host", env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "port", env = "PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "root-path", env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,

    /// Largest accepted raw image upload, in bytes.
    #[arg(long = "max-image-bytes", env = "MAX_IMAGE_BYTES", default_value_t = 10 * 1024 * 1024)]
    pub max_image_bytes: usize,
}

#[derive(clap::Args, Debug, Clone)]
pub struct RecognitionArgs {
    #[arg(long = "latency-base-ms", env = "LATENCY_BASE_MS", default_value_t = 2000)]
    pub latency_base_ms: u64,

    #[arg(long = "latency-jitter-ms", env = "LATENCY_JITTER_MS", default_value_t = 2000)]
    pub latency_jitter_ms: u64,
}

#[derive(clap::Args, Debug, Clone)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for PlateLensConfig {
    fn from(args: Args) -> Self {
        Self {
            recognition: RecognitionConfig {
                latency_base_ms: args.recognition.latency_base_ms,
                latency_jitter_ms: args.recognition.latency_jitter_ms,
            },
        }
    }
}
