// Copyright (c) 2019 DDN. All rights reserved.
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file.

use crate::{
    bootstrap::{bs_button, bs_dropdown, PULL_RIGHT},
    catalog::ExtractorCatalog,
    dropdown,
    error::FieldExtractorMenuError,
    message::Props,
    routes::{new_extractor_routes, RouteBuilder, RouteMap, RouteParams},
};
use seed::{attrs, button, class, div, prelude::*};
use std::borrow::Cow;

pub const TITLE: &str = "Select extractor type";

/// A single rendered choice of the menu
#[derive(Debug, PartialEq)]
pub struct MenuItem<'a> {
    pub label: Cow<'static, str>,
    pub href: &'a str,
}

pub struct Model {
    props: Props,
    routes: RouteMap,
    dropdown: dropdown::Model,
    catalog: Box<dyn ExtractorCatalog>,
    route_builder: Box<dyn RouteBuilder>,
    destroyed: bool,
}

impl Model {
    pub fn new(
        props: Props,
        catalog: Box<dyn ExtractorCatalog>,
        route_builder: Box<dyn RouteBuilder>,
    ) -> Result<Self, FieldExtractorMenuError> {
        let props = props.validate()?;
        let routes = new_extractor_routes(
            catalog.as_ref(),
            route_builder.as_ref(),
            &RouteParams::from(&props),
        )?;

        Ok(Self {
            props,
            routes,
            dropdown: dropdown::Model::default(),
            catalog,
            route_builder,
            destroyed: false,
        })
    }

    /// Replaces the props and recomputes every route from them.
    ///
    /// Nothing changes if the new props are rejected.
    pub fn set_props(&mut self, props: Props) -> Result<(), FieldExtractorMenuError> {
        let props = props.validate()?;
        let routes = new_extractor_routes(
            self.catalog.as_ref(),
            self.route_builder.as_ref(),
            &RouteParams::from(&props),
        )?;

        log::debug!(
            "Recomputed {} extractor routes for field {}",
            routes.len(),
            props.field_name
        );

        self.props = props;
        self.routes = routes;

        Ok(())
    }

    /// Applies props pushed by the host, keeping the last valid state on rejection.
    pub fn receive_props(&mut self, props: Props) {
        if self.destroyed {
            log::debug!("Ignoring props for destroyed menu");

            return;
        }

        if let Err(e) = self.set_props(props) {
            log::error!("Could not update extractor routes: {}", e);
        }
    }

    pub fn close_on_window_click(&mut self) {
        if self.dropdown.is_open() {
            dropdown::update(dropdown::Msg::Close, &mut self.dropdown);
        }
    }

    /// Drops all derived state. The menu renders nothing afterwards.
    pub fn destroy(&mut self) {
        self.routes = RouteMap::new();
        self.dropdown = dropdown::Model::Close;
        self.destroyed = true;
    }

    pub fn routes(&self) -> &RouteMap {
        &self.routes
    }

    pub fn is_open(&self) -> bool {
        self.dropdown.is_open()
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn dropdown_id(&self) -> String {
        format!(
            "select-extractor-type-dropdown-field-{}",
            self.props.field_name
        )
    }

    /// The menu entries, in catalog order.
    pub fn menu_items(&self) -> Vec<MenuItem> {
        self.catalog
            .extractor_types()
            .iter()
            .map(|x| MenuItem {
                label: self.catalog.readable_name(*x),
                href: self.routes.get(x).map(String::as_str).unwrap_or_default(),
            })
            .collect()
    }
}

#[derive(Clone, Debug)]
pub enum Msg {
    SetProps(Props),
    Dropdown(dropdown::Msg),
    WindowClick,
    Destroy,
}

pub fn update(msg: Msg, model: &mut Model, _orders: &mut impl Orders<Msg>) {
    match msg {
        Msg::SetProps(props) => model.receive_props(props),
        Msg::Dropdown(msg) => dropdown::update(msg, &mut model.dropdown),
        Msg::WindowClick => model.close_on_window_click(),
        Msg::Destroy => model.destroy(),
    }
}

pub fn view(model: &Model) -> Node<Msg> {
    if model.destroyed {
        return seed::empty();
    }

    let items = model
        .menu_items()
        .into_iter()
        .map(|x| bs_dropdown::link_item(x.href, &x.label))
        .collect();

    div![
        class!["message-field-actions", PULL_RIGHT],
        bs_dropdown::wrapper(
            dropdown::open_class(model.dropdown),
            vec![
                button![
                    bs_button::btn_cfg(class![
                        bs_button::BTN_DEFAULT,
                        bs_button::EXTRASMALL,
                        bs_dropdown::DROPDOWN_TOGGLE
                    ]),
                    attrs! { At::Id => model.dropdown_id() },
                    TITLE,
                    " ",
                    bs_dropdown::caret(),
                    mouse_ev(Ev::Click, |ev| {
                        ev.stop_propagation();

                        Msg::Dropdown(dropdown::Msg::Toggle)
                    })
                ],
                bs_dropdown::menu(class![bs_dropdown::DROPDOWN_MENU_RIGHT], items)
            ]
        )
    ]
}

pub fn window_events(model: &Model) -> Vec<seed::events::Listener<Msg>> {
    if model.destroyed {
        return vec![];
    }

    vec![simple_ev(Ev::Click, Msg::WindowClick)]
}
