// Copyright (c) 2019 DDN. All rights reserved.
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum FieldExtractorMenuError {
    #[error("Missing required property: {0}")]
    MissingProperty(&'static str),
    #[error("Invalid value for property: {0}")]
    InvalidProperty(&'static str),
    #[error("Route path segment cannot be encoded: {0}")]
    InvalidPathSegment(String),
    #[error("Unusable route prefix: {0}")]
    InvalidRoutePrefix(String),
    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),
    #[error(transparent)]
    UrlParseError(#[from] url::ParseError),
    #[error("Route base cannot hold path segments: {0}")]
    CannotBeABase(String),
}

impl From<FieldExtractorMenuError> for JsValue {
    fn from(err: FieldExtractorMenuError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
