#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuIcon {
    Bars,
    Close,
}

impl MenuIcon {
    /// Font Awesome glyph class for the toggle button.
    pub fn glyph(&self) -> &'static str {
        match self {
            MenuIcon::Bars => "fa-bars",
            MenuIcon::Close => "fa-times",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    /// Choosing any navigation link closes the menu, whatever state it was in.
    pub fn closed(self) -> Self {
        Self { open: false }
    }

    pub fn icon(&self) -> MenuIcon {
        if self.open {
            MenuIcon::Close
        } else {
            MenuIcon::Bars
        }
    }
}
