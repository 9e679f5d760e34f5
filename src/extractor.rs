// Copyright (c) 2019 DDN. All rights reserved.
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file.

use std::fmt;

/// The kinds of extractor that can be created for a message field.
#[derive(serde::Deserialize, serde::Serialize, Debug, Eq, PartialEq, Hash, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum ExtractorType {
    CopyInput,
    Grok,
    Json,
    Regex,
    RegexReplace,
    SplitAndIndex,
    Substring,
    LookupTable,
}

impl ExtractorType {
    /// Every known extractor type, in menu order.
    pub const ALL: [ExtractorType; 8] = [
        ExtractorType::CopyInput,
        ExtractorType::Grok,
        ExtractorType::Json,
        ExtractorType::Regex,
        ExtractorType::RegexReplace,
        ExtractorType::SplitAndIndex,
        ExtractorType::Substring,
        ExtractorType::LookupTable,
    ];

    /// The name used in routes and on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            ExtractorType::CopyInput => "copy_input",
            ExtractorType::Grok => "grok",
            ExtractorType::Json => "json",
            ExtractorType::Regex => "regex",
            ExtractorType::RegexReplace => "regex_replace",
            ExtractorType::SplitAndIndex => "split_and_index",
            ExtractorType::Substring => "substring",
            ExtractorType::LookupTable => "lookup_table",
        }
    }

    pub fn readable_name(self) -> &'static str {
        match self {
            ExtractorType::CopyInput => "Copy input",
            ExtractorType::Grok => "Grok pattern",
            ExtractorType::Json => "JSON",
            ExtractorType::Regex => "Regular expression",
            ExtractorType::RegexReplace => "Replace with regular expression",
            ExtractorType::SplitAndIndex => "Split & Index",
            ExtractorType::Substring => "Substring",
            ExtractorType::LookupTable => "Lookup Table",
        }
    }
}

impl fmt::Display for ExtractorType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
