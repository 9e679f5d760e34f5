// Copyright (c) 2019 DDN. All rights reserved.
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file.

pub const PULL_RIGHT: &str = "pull-right";

pub mod bs_button {
    use seed::{attrs, class, dom_types::Attrs, prelude::*};

    pub const BTN: &str = "btn";
    pub const BTN_DEFAULT: &str = "btn-default";

    pub const EXTRASMALL: &str = "btn-xs";

    pub fn btn_cfg(more_attrs: Attrs) -> Attrs {
        let mut attrs = class![BTN];

        attrs.merge(attrs! { At::Type => "button" });
        attrs.merge(more_attrs);

        attrs
    }
}

pub mod bs_dropdown {
    use seed::{a, attrs, class, div, dom_types::Attrs, li, prelude::*, span, ul};

    pub const DROPDOWN_TOGGLE: &str = "dropdown-toggle";
    pub const DROPDOWN_MENU_RIGHT: &str = "dropdown-menu-right";

    pub fn caret<T>() -> Node<T> {
        span![class!["caret"]]
    }

    pub fn wrapper<T>(open_class: &str, children: Vec<Node<T>>) -> Node<T> {
        div![class!["btn-group", "dropdown", open_class], children]
    }

    pub fn menu<T>(more_attrs: Attrs, children: Vec<Node<T>>) -> Node<T> {
        let mut attrs = class!["dropdown-menu"];
        attrs.merge(more_attrs);

        ul![attrs, children]
    }

    /// A menu entry that navigates to `href`
    pub fn link_item<T>(href: &str, label: &str) -> Node<T> {
        li![a![attrs! { At::Href => href }, label]]
    }
}
