// Copyright (c) 2019 DDN. All rights reserved.
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file.

mod bootstrap;
pub mod catalog;
pub mod config;
mod dropdown;
mod environment;
pub mod error;
mod extensions;
pub mod extractor;
pub mod field_extractor_menu;
pub mod message;
pub mod routes;

use cfg_if::cfg_if;
use config::Config;
use error::FieldExtractorMenuError;
use extensions::IntoSerdeOpt;
use field_extractor_menu::{update, view, window_events, Model, Msg};
use message::Props;
use seed::prelude::*;
use wasm_bindgen::JsValue;
use web_sys::Element;

cfg_if! {
    if #[cfg(feature = "console_log")] {
        fn init_log() {
            use log::Level;

            if let Err(e) = console_log::init_with_level(Level::Trace) {
                log::info!("Error initializing logger (it may have already been initialized): {:?}", e)
            }
        }
    } else {
        fn init_log() {}
    }
}

#[wasm_bindgen]
pub struct FieldExtractorMenuCallbacks {
    app: seed::App<Msg, Model, Node<Msg>>,
}

#[wasm_bindgen]
impl FieldExtractorMenuCallbacks {
    pub fn destroy(&self) {
        self.app.update(Msg::Destroy);
    }
    pub fn set_props(&self, props: JsValue) -> Result<(), JsValue> {
        let props: Props = props
            .into_serde()
            .map_err(FieldExtractorMenuError::from)?;

        let props = props.validate()?;

        self.app.update(Msg::SetProps(props));

        Ok(())
    }
}

#[wasm_bindgen]
pub fn render_field_extractor_menu(
    props: &JsValue,
    config: &JsValue,
    el: Element,
) -> Result<FieldExtractorMenuCallbacks, JsValue> {
    init_log();

    log::info!("Incoming props are: {:?}", props);

    let props: Props = props
        .into_serde()
        .map_err(FieldExtractorMenuError::from)?;

    let config = config
        .into_serde_opt::<Config>()
        .map_err(FieldExtractorMenuError::from)?
        .unwrap_or_else(Config::from_environment);

    let model = Model::new(props, config.catalog(), config.route_builder())?;

    let app = seed::App::build(|_, _| model, update, view)
        .mount(el)
        .window_events(window_events)
        .finish()
        .run();

    Ok(FieldExtractorMenuCallbacks { app })
}
