// Copyright (c) 2019 DDN. All rights reserved.
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file.

use crate::extractor::ExtractorType;
use std::borrow::Cow;

/// Supplies the extractor types offered by the menu and how to label them.
pub trait ExtractorCatalog {
    /// Extractor types, in the order they should be displayed.
    fn extractor_types(&self) -> &[ExtractorType];
    fn readable_name(&self, extractor_type: ExtractorType) -> Cow<'static, str>;
}

/// Offers every known extractor type.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultCatalog;

impl ExtractorCatalog for DefaultCatalog {
    fn extractor_types(&self) -> &[ExtractorType] {
        &ExtractorType::ALL
    }
    fn readable_name(&self, extractor_type: ExtractorType) -> Cow<'static, str> {
        Cow::from(extractor_type.readable_name())
    }
}

/// Offers a fixed subset of extractor types in a caller-chosen order.
///
/// Duplicates are dropped, keeping the first occurrence.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticCatalog {
    types: Vec<ExtractorType>,
}

impl StaticCatalog {
    pub fn new(xs: impl IntoIterator<Item = ExtractorType>) -> Self {
        let mut types: Vec<ExtractorType> = vec![];

        for x in xs {
            if !types.contains(&x) {
                types.push(x);
            }
        }

        Self { types }
    }
}

impl ExtractorCatalog for StaticCatalog {
    fn extractor_types(&self) -> &[ExtractorType] {
        &self.types
    }
    fn readable_name(&self, extractor_type: ExtractorType) -> Cow<'static, str> {
        Cow::from(extractor_type.readable_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_order() {
        let xs = DefaultCatalog.extractor_types();

        assert_eq!(xs.len(), 8);
        assert_eq!(xs.first(), Some(&ExtractorType::CopyInput));
        assert_eq!(xs.last(), Some(&ExtractorType::LookupTable));
    }

    #[test]
    fn test_static_catalog_keeps_order() {
        let catalog = StaticCatalog::new(vec![ExtractorType::Substring, ExtractorType::Grok]);

        assert_eq!(
            catalog.extractor_types(),
            &[ExtractorType::Substring, ExtractorType::Grok]
        );
    }

    #[test]
    fn test_static_catalog_drops_duplicates() {
        let catalog = StaticCatalog::new(vec![
            ExtractorType::Grok,
            ExtractorType::Regex,
            ExtractorType::Grok,
        ]);

        assert_eq!(
            catalog.extractor_types(),
            &[ExtractorType::Grok, ExtractorType::Regex]
        );
    }

    #[test]
    fn test_empty_static_catalog() {
        let catalog = StaticCatalog::new(vec![]);

        assert!(catalog.extractor_types().is_empty());
    }
}
