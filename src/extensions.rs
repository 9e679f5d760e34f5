// Copyright (c) 2019 DDN. All rights reserved.
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file.

use wasm_bindgen::JsValue;

/// Extension methods for values handed over by the host page
pub(crate) trait IntoSerdeOpt {
    /// Deserializes the value, treating `undefined` and `null` as absent.
    fn into_serde_opt<T>(&self) -> serde_json::Result<Option<T>>
    where
        T: for<'a> serde::de::Deserialize<'a>;
}

impl IntoSerdeOpt for JsValue {
    fn into_serde_opt<T>(&self) -> serde_json::Result<Option<T>>
    where
        T: for<'a> serde::de::Deserialize<'a>,
    {
        if self.is_undefined() || self.is_null() {
            Ok(None)
        } else {
            self.into_serde().map(Some)
        }
    }
}
