// Copyright (c) 2019 DDN. All rights reserved.
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file.

use crate::{error::FieldExtractorMenuError, routes::is_dot_segment};

/// The parts of a search result message needed to locate it again.
#[derive(serde::Deserialize, serde::Serialize, Debug, PartialEq, Clone)]
pub struct Message {
    pub id: String,
    pub index: String,
    pub source_node_id: String,
    pub source_input_id: String,
}

/// Props is what is being passed into the component.
#[derive(serde::Deserialize, serde::Serialize, Debug, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Props {
    pub field_name: String,
    pub message: Message,
}

impl Props {
    /// Rejects props that would produce routes with empty or dropped components.
    pub fn validate(self) -> Result<Self, FieldExtractorMenuError> {
        let Props {
            field_name,
            message,
        } = &self;

        let required = [
            ("fieldName", field_name),
            ("message.id", &message.id),
            ("message.index", &message.index),
            ("message.source_node_id", &message.source_node_id),
            ("message.source_input_id", &message.source_input_id),
        ];

        if let Some((name, _)) = required.iter().find(|(_, x)| x.trim().is_empty()) {
            return Err(FieldExtractorMenuError::MissingProperty(*name));
        }

        let path_segments = [
            ("message.source_node_id", &message.source_node_id),
            ("message.source_input_id", &message.source_input_id),
        ];

        if let Some((name, _)) = path_segments.iter().find(|(_, x)| is_dot_segment(x)) {
            return Err(FieldExtractorMenuError::InvalidProperty(*name));
        }

        Ok(self)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub(crate) fn message() -> Message {
        Message {
            id: "m1".into(),
            index: "graylog_0".into(),
            source_node_id: "n1".into(),
            source_input_id: "i1".into(),
        }
    }

    pub(crate) fn props(field_name: &str) -> Props {
        Props {
            field_name: field_name.into(),
            message: message(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_props() {
        let props: Props = serde_json::from_value(json!({
            "fieldName": "http_method",
            "message": {
                "id": "m1",
                "index": "graylog_0",
                "source_node_id": "n1",
                "source_input_id": "i1",
                "timestamp": "2019-10-01T10:00:00.000Z",
                "fields": { "http_method": "GET" }
            }
        }))
        .unwrap();

        assert_eq!(props, fixtures::props("http_method"));
    }

    #[test]
    fn test_missing_message_fails() {
        let x = serde_json::from_value::<Props>(json!({ "fieldName": "http_method" }));

        assert!(x.is_err());
    }

    #[test]
    fn test_missing_message_attribute_fails() {
        let x = serde_json::from_value::<Props>(json!({
            "fieldName": "http_method",
            "message": { "id": "m1", "index": "graylog_0", "source_node_id": "n1" }
        }));

        assert!(x.is_err());
    }

    #[test]
    fn test_validate_ok() {
        let props = fixtures::props("http_method");

        assert_eq!(props.clone().validate().unwrap(), props);
    }

    #[test]
    fn test_validate_empty_field_name() {
        let err = fixtures::props("").validate().unwrap_err();

        assert_eq!(err.to_string(), "Missing required property: fieldName");
    }

    #[test]
    fn test_validate_blank_message_attribute() {
        let mut props = fixtures::props("http_method");
        props.message.source_input_id = "  ".into();

        let err = props.validate().unwrap_err();

        assert_eq!(
            err.to_string(),
            "Missing required property: message.source_input_id"
        );
    }

    #[test]
    fn test_validate_dot_input_id() {
        let mut props = fixtures::props("http_method");
        props.message.source_input_id = "..".into();

        let err = props.validate().unwrap_err();

        assert_eq!(
            err.to_string(),
            "Invalid value for property: message.source_input_id"
        );
    }

    #[test]
    fn test_validate_dot_node_id() {
        let mut props = fixtures::props("http_method");
        props.message.source_node_id = ".".into();

        assert!(props.validate().is_err());
    }

    #[test]
    fn test_validate_dots_elsewhere() {
        let mut props = fixtures::props("..");
        props.message.id = ".".into();
        props.message.source_node_id = "node.1".into();

        assert!(props.validate().is_ok());
    }
}
