use crate::config::{NETWORK_LINK_FILE, NETWORK_LINK_NAME};
use crate::core::render::{kml_root, save, write_kml};
use crate::core::{ConfigProvider, KmlOutput, Pipeline, Result, Storage};
use kml::types::Element;
use kml::Kml;
use std::io::Write;

/// Produces the small pointer document that makes map viewers fetch the
/// hosted arcade list lazily instead of embedding it.
pub struct NetworkLinkPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> NetworkLinkPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    /// The document only depends on the configured href.
    pub fn build(&self) -> Kml {
        let link = Element {
            name: "Link".to_string(),
            children: vec![text_element("href", self.config.network_link_href())],
            ..Default::default()
        };
        let network_link = Element {
            name: "NetworkLink".to_string(),
            children: vec![text_element("name", NETWORK_LINK_NAME), link],
            ..Default::default()
        };

        kml_root(vec![Kml::Element(network_link)])
    }

    pub fn write_to<W: Write>(&self, sink: W) -> Result<()> {
        write_kml(&self.build(), sink)
    }
}

fn text_element(name: &str, content: &str) -> Element {
    Element {
        name: name.to_string(),
        content: Some(content.to_string()),
        ..Default::default()
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for NetworkLinkPipeline<S, C> {
    type Extracted = ();

    fn name(&self) -> &'static str {
        "network-link"
    }

    async fn extract(&self) -> Result<()> {
        Ok(())
    }

    async fn transform(&self, _data: ()) -> Result<KmlOutput> {
        Ok(KmlOutput {
            file_name: NETWORK_LINK_FILE.to_string(),
            document: self.build(),
            placemark_count: 0,
        })
    }

    async fn load(&self, output: KmlOutput) -> Result<String> {
        save(&self.storage, self.config.output_path(), &output).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NETWORK_LINK_HREF;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct MockConfig {
        href: String,
    }

    impl ConfigProvider for MockConfig {
        fn api_endpoint(&self) -> &str {
            "http://unused.invalid/"
        }

        fn network_link_href(&self) -> &str {
            &self.href
        }

        fn output_path(&self) -> &str {
            "test_output"
        }
    }

    fn pipeline(storage: MockStorage) -> NetworkLinkPipeline<MockStorage, MockConfig> {
        NetworkLinkPipeline::new(
            storage,
            MockConfig {
                href: NETWORK_LINK_HREF.to_string(),
            },
        )
    }

    #[test]
    fn test_write_to_layout() {
        let mut sink = Vec::new();
        pipeline(MockStorage::new()).write_to(&mut sink).unwrap();

        let text = String::from_utf8(sink).unwrap();
        assert!(text.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<kml"));
        assert!(text.ends_with(
            "\n  <NetworkLink>\n    <name>STREET FIGHTER 6 TYPE ARCADE 稼働店舗</name>\n    <Link>\n      <href>https://matsuu.github.io/sf6ta-kml/arcades.kml</href>\n    </Link>\n  </NetworkLink>\n</kml>\n"
        ));
    }

    #[test]
    fn test_output_is_stable() {
        let mut first = Vec::new();
        let mut second = Vec::new();
        pipeline(MockStorage::new()).write_to(&mut first).unwrap();
        pipeline(MockStorage::new()).write_to(&mut second).unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_load_writes_pointer_file() {
        let storage = MockStorage::new();
        let pipeline = pipeline(storage.clone());

        pipeline.extract().await.unwrap();
        let output = pipeline.transform(()).await.unwrap();
        assert_eq!(output.placemark_count, 0);

        let path = pipeline.load(output).await.unwrap();
        assert_eq!(path, "test_output/sf6ta.kml");

        let data = storage.get_file("sf6ta.kml").await.unwrap();
        let mut expected = Vec::new();
        pipeline.write_to(&mut expected).unwrap();
        assert_eq!(data, expected);
    }
}
