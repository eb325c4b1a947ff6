pub mod cli;

/// Taito shop list filtered to STREET FIGHTER 6 TYPE ARCADE cabinets, all prefectures.
pub const ARCADE_LIST_URL: &str = "https://www.taito.co.jp/api/NxLShopList/?category=sf6_ac&pref=";
/// Published copy of the arcade document that the network link points at.
pub const NETWORK_LINK_HREF: &str = "https://matsuu.github.io/sf6ta-kml/arcades.kml";
pub const NETWORK_LINK_NAME: &str = "STREET FIGHTER 6 TYPE ARCADE 稼働店舗";

pub const DEFAULT_OUTPUT_PATH: &str = "public";
pub const NETWORK_LINK_FILE: &str = "sf6ta.kml";
pub const ARCADE_FILE: &str = "arcades.kml";

#[cfg(feature = "cli")]
pub use self::cli_config::CliConfig;

#[cfg(feature = "cli")]
mod cli_config {
    use super::{ARCADE_LIST_URL, DEFAULT_OUTPUT_PATH, NETWORK_LINK_HREF};
    use crate::core::ConfigProvider;
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_path, validate_url, Validate};
    use clap::Parser;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "sf6ta-kml")]
    #[command(about = "Export STREET FIGHTER 6 TYPE ARCADE locations as KML")]
    pub struct CliConfig {
        #[arg(long, default_value = ARCADE_LIST_URL)]
        pub api_endpoint: String,

        #[arg(long, default_value = NETWORK_LINK_HREF)]
        pub network_link_href: String,

        #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
        pub output_path: String,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl Default for CliConfig {
        fn default() -> Self {
            Self {
                api_endpoint: ARCADE_LIST_URL.to_string(),
                network_link_href: NETWORK_LINK_HREF.to_string(),
                output_path: DEFAULT_OUTPUT_PATH.to_string(),
                verbose: false,
            }
        }
    }

    impl ConfigProvider for CliConfig {
        fn api_endpoint(&self) -> &str {
            &self.api_endpoint
        }

        fn network_link_href(&self) -> &str {
            &self.network_link_href
        }

        fn output_path(&self) -> &str {
            &self.output_path
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_url("api_endpoint", &self.api_endpoint)?;
            validate_url("network_link_href", &self.network_link_href)?;
            validate_path("output_path", &self.output_path)?;
            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_no_flags_matches_defaults() {
            let config = CliConfig::parse_from(["sf6ta-kml"]);

            assert_eq!(config.api_endpoint, ARCADE_LIST_URL);
            assert_eq!(config.network_link_href, NETWORK_LINK_HREF);
            assert_eq!(config.output_path, "public");
            assert!(!config.verbose);
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_flags_override_defaults() {
            let config = CliConfig::parse_from([
                "sf6ta-kml",
                "--api-endpoint",
                "http://127.0.0.1:9000/shops",
                "--output-path",
                "out",
                "--verbose",
            ]);

            assert_eq!(config.api_endpoint(), "http://127.0.0.1:9000/shops");
            assert_eq!(config.output_path(), "out");
            assert_eq!(config.network_link_href(), NETWORK_LINK_HREF);
            assert!(config.verbose);
        }

        #[test]
        fn test_validate_rejects_bad_endpoint() {
            let config = CliConfig {
                api_endpoint: "taito.co.jp".to_string(),
                ..CliConfig::default()
            };

            assert!(config.validate().is_err());
        }
    }
}
