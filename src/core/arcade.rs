use crate::config::ARCADE_FILE;
use crate::core::render::{kml_root, save, write_kml};
use crate::core::{ArcadeRecord, ConfigProvider, KmlOutput, Pipeline, Result, Storage};
use crate::utils::error::EtlError;
use kml::types::{Coord, Geometry, Placemark, Point};
use kml::Kml;
use reqwest::{Client, StatusCode};
use std::io::Write;

/// Fetches the shop list and turns every shop into a placemark.
pub struct ArcadePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> ArcadePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
        }
    }

    /// Fetch, convert and serialize straight into `sink`.
    pub async fn write_to<W: Write>(&self, sink: W) -> Result<()> {
        let records = self.extract().await?;
        let output = self.transform(records).await?;
        write_kml(&output.document, sink)
    }
}

fn placemark(record: ArcadeRecord) -> Kml {
    let description = record.description();
    let point = Point {
        coord: Coord {
            x: record.longitude,
            y: record.latitude,
            z: None,
        },
        ..Default::default()
    };

    Kml::Placemark(Placemark {
        name: Some(record.name),
        description: Some(description),
        geometry: Some(Geometry::Point(point)),
        ..Default::default()
    })
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ArcadePipeline<S, C> {
    type Extracted = Vec<ArcadeRecord>;

    fn name(&self) -> &'static str {
        "arcades"
    }

    async fn extract(&self) -> Result<Vec<ArcadeRecord>> {
        let url = self.config.api_endpoint();

        tracing::debug!("Making API request to: {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| EtlError::RequestError {
                url: url.to_string(),
                source,
            })?;

        tracing::debug!("API response status: {}", response.status());
        if response.status() != StatusCode::OK {
            return Err(EtlError::StatusError {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| EtlError::RequestError {
                url: url.to_string(),
                source,
            })?;
        let records: Vec<ArcadeRecord> =
            serde_json::from_slice(&body).map_err(|source| EtlError::DecodeError {
                url: url.to_string(),
                source,
            })?;

        if records.is_empty() {
            return Err(EtlError::EmptyResultError {
                url: url.to_string(),
            });
        }

        Ok(records)
    }

    async fn transform(&self, data: Vec<ArcadeRecord>) -> Result<KmlOutput> {
        let placemark_count = data.len();
        let document = Kml::Document {
            attrs: Default::default(),
            elements: data.into_iter().map(placemark).collect(),
        };

        Ok(KmlOutput {
            file_name: ARCADE_FILE.to_string(),
            document: kml_root(vec![document]),
            placemark_count,
        })
    }

    async fn load(&self, output: KmlOutput) -> Result<String> {
        save(&self.storage, self.config.output_path(), &output).await
    }
}
