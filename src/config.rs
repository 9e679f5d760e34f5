// Copyright (c) 2019 DDN. All rights reserved.
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file.

use crate::{
    catalog::{DefaultCatalog, ExtractorCatalog, StaticCatalog},
    extractor::ExtractorType,
    routes::{InputExtractorRoutes, RouteBuilder},
};

/// Optional configuration passed in alongside the props.
#[derive(serde::Deserialize, serde::Serialize, Debug, Default, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Path prefix the host application is served under, e.g. `/graylog`
    pub route_prefix: Option<String>,
    /// Restricts and orders the offered extractor types
    pub extractor_types: Option<Vec<ExtractorType>>,
}

impl Config {
    /// Builds a config from the host page's globals.
    pub fn from_environment() -> Self {
        Self {
            route_prefix: crate::environment::app_path_prefix(),
            extractor_types: None,
        }
    }

    pub fn catalog(&self) -> Box<dyn ExtractorCatalog> {
        match &self.extractor_types {
            Some(xs) => Box::new(StaticCatalog::new(xs.iter().cloned())),
            None => Box::new(DefaultCatalog),
        }
    }

    pub fn route_builder(&self) -> Box<dyn RouteBuilder> {
        Box::new(InputExtractorRoutes::new(self.route_prefix.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::RouteParams;
    use serde_json::json;

    #[test]
    fn test_empty_config() {
        let config: Config = serde_json::from_value(json!({})).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.catalog().extractor_types(), &ExtractorType::ALL);
    }

    #[test]
    fn test_config_selects_catalog() {
        let config: Config = serde_json::from_value(json!({
            "extractorTypes": ["grok", "regex"]
        }))
        .unwrap();

        assert_eq!(
            config.catalog().extractor_types(),
            &[ExtractorType::Grok, ExtractorType::Regex]
        );
    }

    #[test]
    fn test_config_route_prefix() {
        let config: Config = serde_json::from_value(json!({ "routePrefix": "/graylog" })).unwrap();

        let params = RouteParams {
            source_node_id: "n1",
            source_input_id: "i1",
            field_name: "source",
            index: "graylog_0",
            message_id: "m1",
        };

        let route = config
            .route_builder()
            .new_extractor_route(ExtractorType::Substring, &params)
            .unwrap();

        assert!(route.starts_with("/graylog/system/inputs/n1/i1/"), "{}", route);
    }
}
