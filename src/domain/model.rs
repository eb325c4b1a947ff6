use kml::Kml;
use serde::{Deserialize, Serialize};

/// One shop entry from the Taito shop list API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArcadeRecord {
    #[serde(rename = "ADDR")]
    pub address: String,
    /// Number of installed cabinets. The API sends it as a string and it is only re-emitted as text.
    #[serde(rename = "CNT")]
    pub device_count: String,
    #[serde(rename = "LAT")]
    pub latitude: f64,
    #[serde(rename = "LNG")]
    pub longitude: f64,
    #[serde(rename = "PREF")]
    pub prefecture: String,
    #[serde(rename = "TNAME")]
    pub name: String,
}

impl ArcadeRecord {
    /// Placemark description: full address on the first line, cabinet count on the second.
    pub fn description(&self) -> String {
        format!(
            "{}{}\n設置台数 {}",
            self.prefecture, self.address, self.device_count
        )
    }
}

#[derive(Debug, Clone)]
pub struct KmlOutput {
    /// File name relative to the storage base path.
    pub file_name: String,
    pub document: Kml,
    pub placemark_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_api_keys() {
        let json = r#"[{"ADDR":"町1-2-3","CNT":"5","LAT":35.0,"LNG":139.0,"PREF":"東京都","TNAME":"Game Center A"}]"#;
        let records: Vec<ArcadeRecord> = serde_json::from_str(json).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].address, "町1-2-3");
        assert_eq!(records[0].device_count, "5");
        assert_eq!(records[0].latitude, 35.0);
        assert_eq!(records[0].longitude, 139.0);
        assert_eq!(records[0].prefecture, "東京都");
        assert_eq!(records[0].name, "Game Center A");
    }

    #[test]
    fn test_decode_rejects_numeric_count() {
        let json = r#"[{"ADDR":"a","CNT":5,"LAT":35.0,"LNG":139.0,"PREF":"p","TNAME":"n"}]"#;
        assert!(serde_json::from_str::<Vec<ArcadeRecord>>(json).is_err());
    }

    #[test]
    fn test_description_format() {
        let record = ArcadeRecord {
            address: "町1-2-3".to_string(),
            device_count: "5".to_string(),
            latitude: 35.0,
            longitude: 139.0,
            prefecture: "東京都".to_string(),
            name: "Game Center A".to_string(),
        };

        assert_eq!(record.description(), "東京都町1-2-3\n設置台数 5");
    }
}
