// Copyright (c) 2019 DDN. All rights reserved.
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file.

use crate::{
    catalog::ExtractorCatalog, error::FieldExtractorMenuError, extractor::ExtractorType,
    message::Props,
};
use std::collections::HashMap;
use url::{Position, Url};

/// A route map is a map of extractor types to the route that creates one
pub type RouteMap = HashMap<ExtractorType, String>;

/// Everything a "new extractor" route is scoped to.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub struct RouteParams<'a> {
    pub source_node_id: &'a str,
    pub source_input_id: &'a str,
    pub field_name: &'a str,
    pub index: &'a str,
    pub message_id: &'a str,
}

impl<'a> From<&'a Props> for RouteParams<'a> {
    fn from(props: &'a Props) -> Self {
        RouteParams {
            source_node_id: &props.message.source_node_id,
            source_input_id: &props.message.source_input_id,
            field_name: &props.field_name,
            index: &props.message.index,
            message_id: &props.message.id,
        }
    }
}

pub trait RouteBuilder {
    fn new_extractor_route(
        &self,
        extractor_type: ExtractorType,
        params: &RouteParams,
    ) -> Result<String, FieldExtractorMenuError>;
}

/// Builds routes to the input extractor pages, optionally under an application path prefix.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct InputExtractorRoutes {
    prefix: Option<String>,
}

impl InputExtractorRoutes {
    pub fn new(prefix: Option<String>) -> Self {
        let prefix = prefix
            .map(|x| x.trim_matches('/').to_string())
            .filter(|x| !x.is_empty());

        Self { prefix }
    }

    fn base(&self) -> Result<Url, FieldExtractorMenuError> {
        let mut url = Url::parse("http://localhost/")?;

        if let Some(prefix) = &self.prefix {
            if prefix.contains(&['?', '#'][..]) || prefix.contains("://") {
                return Err(FieldExtractorMenuError::InvalidRoutePrefix(prefix.clone()));
            }

            let segments: Vec<&str> = prefix.split('/').filter(|x| !x.is_empty()).collect();

            push_segments(&mut url, &segments)?;
        }

        Ok(url)
    }
}

/// `.` and `..` would be dropped by the url path normalization.
pub fn is_dot_segment(x: &str) -> bool {
    x == "." || x == ".."
}

/// Appends each segment as-is, percent-encoding anything that would change the path shape.
fn push_segments(url: &mut Url, segments: &[&str]) -> Result<(), FieldExtractorMenuError> {
    if let Some(x) = segments.iter().find(|x| is_dot_segment(x)) {
        return Err(FieldExtractorMenuError::InvalidPathSegment(x.to_string()));
    }

    let base = url.to_string();

    url.path_segments_mut()
        .map_err(|_| FieldExtractorMenuError::CannotBeABase(base))?
        .pop_if_empty()
        .extend(segments);

    Ok(())
}

impl RouteBuilder for InputExtractorRoutes {
    fn new_extractor_route(
        &self,
        extractor_type: ExtractorType,
        params: &RouteParams,
    ) -> Result<String, FieldExtractorMenuError> {
        let mut url = self.base()?;

        push_segments(
            &mut url,
            &[
                "system",
                "inputs",
                params.source_node_id,
                params.source_input_id,
                "extractors",
                "new",
            ],
        )?;

        url.query_pairs_mut()
            .append_pair("extractor_type", extractor_type.as_str())
            .append_pair("field", params.field_name)
            .append_pair("example_index", params.index)
            .append_pair("example_id", params.message_id);

        Ok(url[Position::BeforePath..].to_string())
    }
}

/// Computes a fresh route for every extractor type in the catalog.
pub fn new_extractor_routes(
    catalog: &dyn ExtractorCatalog,
    builder: &dyn RouteBuilder,
    params: &RouteParams,
) -> Result<RouteMap, FieldExtractorMenuError> {
    catalog
        .extractor_types()
        .iter()
        .map(|&x| builder.new_extractor_route(x, params).map(|route| (x, route)))
        .collect()
}
