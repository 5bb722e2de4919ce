//! Menu state machine definition
//!
//! All display and run behavior is a function of the current state and
//! a key click.

use super::events::MenuAction;
use crate::config::SliderConfig;
use crate::input::ButtonId;
use crate::params::{DigitEditor, Direction, Field, RunParameters};

/// Top-level menu items, in navigation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuItem {
    Distance,
    Duration,
    Steps,
    Direction,
    Go,
}

impl MenuItem {
    /// Item to the left, clamped at Distance
    pub fn prev(self) -> Self {
        match self {
            MenuItem::Distance | MenuItem::Duration => MenuItem::Distance,
            MenuItem::Steps => MenuItem::Duration,
            MenuItem::Direction => MenuItem::Steps,
            MenuItem::Go => MenuItem::Direction,
        }
    }

    /// Item to the right, clamped at Go
    pub fn next(self) -> Self {
        match self {
            MenuItem::Distance => MenuItem::Duration,
            MenuItem::Duration => MenuItem::Steps,
            MenuItem::Steps => MenuItem::Direction,
            MenuItem::Direction | MenuItem::Go => MenuItem::Go,
        }
    }

    /// Menu label
    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Distance => "Distance",
            MenuItem::Duration => "Duration",
            MenuItem::Steps => "Steps",
            MenuItem::Direction => "Direction",
            MenuItem::Go => "Go",
        }
    }

    /// Numeric field edited by this item, if any
    pub fn field(self) -> Option<Field> {
        match self {
            MenuItem::Distance => Some(Field::Distance),
            MenuItem::Duration => Some(Field::Duration),
            MenuItem::Steps => Some(Field::Steps),
            MenuItem::Direction | MenuItem::Go => None,
        }
    }
}

impl From<Field> for MenuItem {
    fn from(field: Field) -> Self {
        match field {
            Field::Distance => MenuItem::Distance,
            Field::Duration => MenuItem::Duration,
            Field::Steps => MenuItem::Steps,
        }
    }
}

/// Menu states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuState {
    /// Browsing the top-level list
    Top(MenuItem),
    /// Editing a numeric field digit by digit
    EditDigits { field: Field, editor: DigitEditor },
    /// Choosing the travel direction
    EditDirection,
    /// A run is in progress; input is owned by the motion engine
    Running,
}

impl MenuState {
    /// Item this state belongs to
    pub fn item(&self) -> MenuItem {
        match self {
            MenuState::Top(item) => *item,
            MenuState::EditDigits { field, .. } => MenuItem::from(*field),
            MenuState::EditDirection => MenuItem::Direction,
            MenuState::Running => MenuItem::Go,
        }
    }

    /// Check if this is a secondary (editing) state
    pub fn is_editing(&self) -> bool {
        matches!(self, MenuState::EditDigits { .. } | MenuState::EditDirection)
    }
}

/// Application menu: navigation state plus the parameters it edits
#[derive(Debug, Clone)]
pub struct Menu {
    state: MenuState,
    params: RunParameters,
}

impl Default for Menu {
    fn default() -> Self {
        Self::new(RunParameters::default())
    }
}

impl Menu {
    /// Create a menu on the first item
    pub fn new(params: RunParameters) -> Self {
        Self {
            state: MenuState::Top(MenuItem::Distance),
            params,
        }
    }

    /// Current state
    pub fn state(&self) -> &MenuState {
        &self.state
    }

    /// Current run parameters
    pub fn params(&self) -> &RunParameters {
        &self.params
    }

    /// Process a key click
    pub fn handle(&mut self, button: ButtonId, config: &SliderConfig) -> MenuAction {
        match self.state {
            MenuState::Top(item) => self.handle_top(item, button, config),
            MenuState::EditDigits { field, mut editor } => {
                let action = self.handle_digits(field, &mut editor, button, config);
                if let MenuState::EditDigits { editor: stored, .. } = &mut self.state {
                    *stored = editor;
                }
                action
            }
            MenuState::EditDirection => self.handle_direction(button),
            MenuState::Running => MenuAction::None,
        }
    }

    /// Return to the top level after a run, on the Go item
    pub fn run_finished(&mut self) {
        if self.state == MenuState::Running {
            self.state = MenuState::Top(MenuItem::Go);
        }
    }

    fn handle_top(&mut self, item: MenuItem, button: ButtonId, config: &SliderConfig) -> MenuAction {
        let next = match button {
            ButtonId::Left => item.prev(),
            ButtonId::Right => item.next(),
            ButtonId::Select => return self.enter(item, config),
            _ => item,
        };

        if next == item {
            MenuAction::None
        } else {
            self.state = MenuState::Top(next);
            MenuAction::Refresh
        }
    }

    fn enter(&mut self, item: MenuItem, config: &SliderConfig) -> MenuAction {
        match item {
            MenuItem::Distance | MenuItem::Duration | MenuItem::Steps => {
                // field() is Some for every numeric item
                let Some(field) = item.field() else {
                    return MenuAction::None;
                };
                let editor = DigitEditor::new(self.params.get(field), field.digits(config));
                self.state = MenuState::EditDigits { field, editor };
                MenuAction::Refresh
            }
            MenuItem::Direction => {
                self.state = MenuState::EditDirection;
                MenuAction::Refresh
            }
            MenuItem::Go => {
                self.state = MenuState::Running;
                MenuAction::StartRun
            }
        }
    }

    fn handle_digits(
        &mut self,
        field: Field,
        editor: &mut DigitEditor,
        button: ButtonId,
        config: &SliderConfig,
    ) -> MenuAction {
        let digit_changed = |editor: &DigitEditor| MenuAction::DigitChanged {
            cursor: editor.cursor(),
            digit: editor.current(),
        };

        match button {
            ButtonId::Up if editor.increment() => digit_changed(&*editor),
            ButtonId::Down if editor.decrement() => digit_changed(&*editor),
            ButtonId::Left if editor.cursor_left() => MenuAction::CursorMoved {
                cursor: editor.cursor(),
            },
            ButtonId::Right if editor.cursor_right() => MenuAction::CursorMoved {
                cursor: editor.cursor(),
            },
            ButtonId::Select => {
                let value = self.params.commit(field, editor.value(), config);
                self.state = MenuState::Top(MenuItem::from(field));
                MenuAction::Committed { field, value }
            }
            _ => MenuAction::None,
        }
    }

    fn handle_direction(&mut self, button: ButtonId) -> MenuAction {
        let direction = match button {
            ButtonId::Up => Direction::Forward,
            ButtonId::Down => Direction::Reverse,
            ButtonId::Select => {
                self.state = MenuState::Top(MenuItem::Direction);
                return MenuAction::Refresh;
            }
            _ => return MenuAction::None,
        };

        if direction == self.params.direction {
            MenuAction::None
        } else {
            self.params.direction = direction;
            MenuAction::Refresh
        }
    }
}
