// Copyright (c) 2019 DDN. All rights reserved.
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file.

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Model {
    Open,
    Close,
}

impl Model {
    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::Close
    }
}

#[derive(Clone, Debug)]
pub enum Msg {
    Close,
    Toggle,
}

pub fn update(msg: Msg, model: &mut Model) {
    match msg {
        Msg::Close => *model = Model::Close,
        Msg::Toggle => {
            *model = match *model {
                Model::Open => Model::Close,
                Model::Close => Model::Open,
            };
        }
    }
}

/// The bootstrap class that shows the dropdown menu
pub fn open_class(model: Model) -> &'static str {
    if model.is_open() {
        "open"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        let model = Model::default();

        assert!(!model.is_open());
        assert_eq!(open_class(model), "");
    }

    #[test]
    fn test_toggle() {
        let mut model = Model::default();

        update(Msg::Toggle, &mut model);

        assert_eq!(model, Model::Open);
        assert_eq!(open_class(model), "open");

        update(Msg::Toggle, &mut model);

        assert_eq!(model, Model::Close);
    }

    #[test]
    fn test_close() {
        let mut model = Model::Open;

        update(Msg::Close, &mut model);
        update(Msg::Close, &mut model);

        assert_eq!(model, Model::Close);
    }
}
