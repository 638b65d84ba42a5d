//! Command-line configuration. Every option can also come from the
//! environment; an explicit flag wins over the variable.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use listings_core::{SweepSettings, DEFAULT_IMAGE_HOST};
use listings_engine::{FetchSettings, HarvestSettings, RetryPolicy};
use log::LevelFilter;

pub const DEFAULT_API: &str =
    "https://api.encar.com/search/car/list/general?count=true&q=(And.Hidden.N._.CarType.Y.)";

#[derive(Parser, Debug, Clone)]
#[command(name = "listings_harvester")]
#[command(version)]
#[command(about = "Sweeps the paginated listings API into a single JSON array file", long_about = None)]
pub struct Args {
    /// Listings requested per page.
    #[arg(long, env = "PER_PAGE", default_value_t = 20, value_parser = clap::value_parser!(u64).range(1..))]
    pub per_page: u64,

    /// Upper bound on the number of waves.
    #[arg(long, env = "MAX_PAGES", default_value_t = 2000, value_parser = clap::value_parser!(u64).range(1..))]
    pub max_pages: u64,

    /// Pages fetched concurrently per wave.
    #[arg(long, env = "CONCURRENT", default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    pub concurrent: u64,

    /// Base search query; the sort window is appended per request.
    #[arg(long, env = "API_URL", default_value = DEFAULT_API)]
    pub api: String,

    #[arg(long, env = "OUT", default_value = "cars.json")]
    pub out: PathBuf,

    /// Extra attempts per page after the first failure.
    #[arg(long, env = "RETRIES", default_value_t = 2)]
    pub retries: u32,

    /// Base of the linear backoff between attempts.
    #[arg(long, env = "RETRY_DELAY_MS", default_value_t = 500)]
    pub retry_delay_ms: u64,

    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value_t = 30)]
    pub request_timeout_secs: u64,

    #[arg(long, env = "IMAGE_HOST", default_value = DEFAULT_IMAGE_HOST)]
    pub image_host: String,

    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: LevelFilter,

    /// Also write logs to this file.
    #[arg(long, env = "LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn harvest_settings(&self) -> HarvestSettings {
        HarvestSettings {
            sweep: SweepSettings::new(self.per_page, self.concurrent, self.max_pages),
            retry: RetryPolicy {
                retries: self.retries,
                base_delay: Duration::from_millis(self.retry_delay_ms),
            },
            image_host: self.image_host.clone(),
        }
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            ..FetchSettings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let args = Args::try_parse_from([
            "listings_harvester",
            "--per-page",
            "50",
            "--concurrent",
            "4",
            "--max-pages",
            "10",
            "--retries",
            "5",
            "--retry-delay-ms",
            "100",
            "--out",
            "public/cars.json",
            "--log-level",
            "debug",
        ])
        .unwrap();

        let settings = args.harvest_settings();
        assert_eq!(settings.sweep, SweepSettings::new(50, 4, 10));
        assert_eq!(settings.retry.retries, 5);
        assert_eq!(settings.retry.base_delay, Duration::from_millis(100));
        assert_eq!(args.out, PathBuf::from("public/cars.json"));
        assert_eq!(args.log_level, LevelFilter::Debug);
    }

    #[test]
    fn zero_wave_width_is_rejected() {
        assert!(Args::try_parse_from(["listings_harvester", "--concurrent", "0"]).is_err());
        assert!(Args::try_parse_from(["listings_harvester", "--per-page", "0"]).is_err());
    }

    #[test]
    fn request_timeout_flows_into_fetch_settings() {
        let args =
            Args::try_parse_from(["listings_harvester", "--request-timeout-secs", "3"]).unwrap();
        assert_eq!(args.fetch_settings().request_timeout, Duration::from_secs(3));
    }
}
