use std::{collections::BTreeMap, io};

use super::{ConfigError, StoreBuilder};

/// A parameter value is either the usual string form (`"32m"`) or a plain
/// byte count or sector index, as written by serializing a `StoreConfig`.
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum ParamValue {
    Text(String),
    Number(u64),
}

impl ParamValue {
    fn into_string(self) -> String {
        match self {
            ParamValue::Text(text) => text,
            ParamValue::Number(number) => number.to_string(),
        }
    }
}

impl StoreBuilder {
    /// Reads a JSON object of parameters, e.g.
    /// `{"size": "1m", "badsector": "0"}` or `{"size": 1048576, "badsector": 0}`,
    /// and applies each of them.
    ///
    /// Parameters are applied in key order.
    pub fn from_json_reader(reader: impl io::Read) -> Result<Self, ConfigError> {
        let params: BTreeMap<String, ParamValue> = serde_json::from_reader(reader)?;
        StoreBuilder::new().configure(params.into_iter().map(|(key, value)| (key, value.into_string())))
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Seek, Write};

    use super::*;
    use crate::{block::BlockDevice, config::StoreConfig, parse::SizeParseError};

    #[test]
    fn test_from_json_reader() {
        let builder = StoreBuilder::from_json_reader(r#"{"size": "64k", "badsector": "3"}"#.as_bytes()).unwrap();
        assert_eq!(*builder.config(), StoreConfig { size: 65536, bad_sector: 3 });

        let builder = StoreBuilder::from_json_reader("{}".as_bytes()).unwrap();
        assert_eq!(*builder.config(), StoreConfig::default());
    }

    #[test]
    fn test_from_json_reader_errors() {
        let result = StoreBuilder::from_json_reader(r#"{"size": true}"#.as_bytes());
        assert!(matches!(result, Err(ConfigError::Json(_))));

        let result = StoreBuilder::from_json_reader(r#"{"badsector": -1}"#.as_bytes());
        assert!(matches!(result, Err(ConfigError::Json(_))));

        let result = StoreBuilder::from_json_reader(r#"["size", "1m"]"#.as_bytes());
        assert!(matches!(result, Err(ConfigError::Json(_))));

        let result = StoreBuilder::from_json_reader(r#"{"size": "1m", "bogus": "1"}"#.as_bytes());
        assert!(matches!(result, Err(ConfigError::UnrecognizedParameter(key)) if key == "bogus"));

        let result = StoreBuilder::from_json_reader(r#"{"size": "1p"}"#.as_bytes());
        assert!(matches!(result, Err(ConfigError::InvalidSize { source: SizeParseError::UnrecognizedSuffix, .. })));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::tempfile().unwrap();
        file.write_all(br#"{"size": "1m", "badsector": "0"}"#).unwrap();
        file.rewind().unwrap();

        let store = StoreBuilder::from_json_reader(&file).unwrap().finish().unwrap();
        assert_eq!(store.size(), 1048576);
        assert_eq!(store.fault_region().bad_sector(), 0);
    }

    #[test]
    fn test_from_json_reader_numbers() {
        let builder = StoreBuilder::from_json_reader(r#"{"size": 4096, "badsector": 5}"#.as_bytes()).unwrap();
        assert_eq!(*builder.config(), StoreConfig { size: 4096, bad_sector: 5 });
    }

    #[test]
    fn test_store_config_json() {
        let config = StoreConfig { size: 1024, bad_sector: 2 };
        let json = serde_json::to_vec(&config).unwrap();
        assert_eq!(serde_json::from_slice::<serde_json::Value>(&json).unwrap(), serde_json::json!({"size": 1024, "badsector": 2}));

        // the serialized form is a valid parameter file
        let builder = StoreBuilder::from_json_reader(json.as_slice()).unwrap();
        assert_eq!(*builder.config(), config);
    }
}
