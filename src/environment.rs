// Copyright (c) 2019 DDN. All rights reserved.
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file.

use crate::extensions::IntoSerdeOpt;
use seed::window;
use wasm_bindgen::JsValue;

/// The subset of the host's global `appConfig` object this component reads.
#[derive(serde::Deserialize, Debug, Default)]
struct AppConfig {
    #[serde(rename = "gl2AppPathPrefix")]
    app_path_prefix: Option<String>,
}

/// Returns the path prefix the host application is served under, if any.
pub(crate) fn app_path_prefix() -> Option<String> {
    let app_config: JsValue = window().get("appConfig")?.into();

    match app_config.into_serde_opt::<AppConfig>() {
        Ok(x) => x.and_then(|x| x.app_path_prefix),
        Err(e) => {
            log::warn!("Ignoring unreadable appConfig: {}", e);

            None
        }
    }
}
