#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }
}

/// Open/closed state of the mobile menu. Starts closed.
#[derive(Clone, Copy, Debug, Default)]
pub struct MenuToggle {
    state: MenuState,
}

impl MenuToggle {
    pub fn toggle(&mut self) -> MenuState {
        self.state = match self.state {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
        self.state
    }

    pub fn state(&self) -> MenuState {
        self.state
    }
}
