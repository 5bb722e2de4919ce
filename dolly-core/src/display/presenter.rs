//! Screen layouts
//!
//! Row 0 carries a label, row 1 a value. While a numeric field is being
//! edited the hardware cursor blinks on the digit under edit, and digit
//! changes only rewrite that one cell.

use core::fmt::Write;

use dolly_hal::CharDisplay;
use heapless::String;

use crate::motion::{MotionPlan, PlanError, RunOutcome};
use crate::state::{Menu, MenuAction, MenuItem, MenuState};

/// Boot banner
pub const SPLASH_TITLE: &str = "Dolly slider";

/// Value line shown on the Go item
const GO_IDLE: &str = "Stopped";

const PROGRESS_MARK: &str = "#";

type Line = String<40>;

/// Renders application screens onto a character display
pub struct Presenter<L> {
    lcd: L,
    cols: u8,
}

impl<L: CharDisplay> Presenter<L> {
    /// Create a presenter for a display `cols` characters wide
    pub fn new(lcd: L, cols: u8) -> Self {
        Self { lcd, cols }
    }

    /// Boot screen
    pub fn show_splash(&mut self) {
        self.lcd.blink_off();
        self.lcd.clear();
        self.print_line(0, SPLASH_TITLE);
        self.print_line(1, concat!("v", env!("CARGO_PKG_VERSION")));
    }

    /// Full redraw of the current menu state
    pub fn render(&mut self, menu: &Menu) {
        self.lcd.blink_off();
        self.lcd.clear();

        let state = *menu.state();
        let item = state.item();
        let params = menu.params();

        let mut label = Line::new();
        if state.is_editing() {
            let _ = write!(label, "Set {}", item.label());
        } else {
            let _ = label.push_str(item.label());
        }
        self.print_line(0, &label);

        let mut value = Line::new();
        match state {
            MenuState::Top(MenuItem::Go) | MenuState::Running => {
                let _ = value.push_str(GO_IDLE);
            }
            MenuState::Top(MenuItem::Direction) | MenuState::EditDirection => {
                let _ = value.push_str(params.direction.label());
            }
            MenuState::Top(MenuItem::Steps) if !params.is_time_lapse() => {
                let _ = value.push_str("0 (video)");
            }
            MenuState::Top(item) => {
                if let Some(field) = item.field() {
                    let _ = write!(value, "{} {}", params.get(field), field.unit());
                }
            }
            MenuState::EditDigits { field, editor } => {
                for &digit in editor.digits() {
                    let _ = value.push((b'0' + digit) as char);
                }
                let _ = write!(value, " {}", field.unit());
            }
        }
        self.print_line(1, &value);

        if let MenuState::EditDigits { editor, .. } = state {
            self.lcd.set_cursor(editor.cursor(), 1);
            self.lcd.blink_on();
        }
    }

    /// Reflect a menu transition, redrawing as little as possible
    pub fn apply(&mut self, menu: &Menu, action: MenuAction) {
        match action {
            MenuAction::None | MenuAction::StartRun => {}
            MenuAction::DigitChanged { cursor, digit } => {
                let mut cell = Line::new();
                let _ = cell.push((b'0' + digit) as char);
                self.lcd.set_cursor(cursor, 1);
                self.lcd.print(&cell);
                self.lcd.set_cursor(cursor, 1);
            }
            MenuAction::CursorMoved { cursor } => {
                self.lcd.set_cursor(cursor, 1);
            }
            MenuAction::Refresh | MenuAction::Committed { .. } => self.render(menu),
        }
    }

    /// Running screen with an empty progress bar on row 1
    pub fn show_running(&mut self, plan: &MotionPlan) {
        self.lcd.blink_off();
        self.lcd.clear();

        let mut label = Line::new();
        if plan.is_time_lapse() {
            let _ = write!(label, "Running: {}x", plan.shutter_count());
        } else {
            let _ = label.push_str("Running: video");
        }
        self.print_line(0, &label);
        self.lcd.set_cursor(0, 1);
    }

    /// Draw progress marker `index` (0-based) on row 1
    pub fn progress_marker(&mut self, index: u8) {
        if index < self.cols {
            self.lcd.set_cursor(index, 1);
            self.lcd.print(PROGRESS_MARK);
        }
    }

    /// Post-run screen
    pub fn show_outcome(&mut self, outcome: RunOutcome) {
        self.lcd.blink_off();
        self.lcd.clear();
        let text = match outcome {
            RunOutcome::Completed => "Done",
            RunOutcome::UserCancelled => "Cancelled",
        };
        self.print_line(0, text);
        self.print_line(1, GO_IDLE);
    }

    /// Explain why a run did not start
    pub fn show_plan_error(&mut self, error: PlanError) {
        self.lcd.blink_off();
        self.lcd.clear();
        self.print_line(0, error.message());
        self.print_line(1, GO_IDLE);
    }

    /// Underlying display
    pub fn lcd(&self) -> &L {
        &self.lcd
    }

    fn print_line(&mut self, row: u8, text: &str) {
        let end = floor_char_boundary(text, self.cols as usize);
        self.lcd.set_cursor(0, row);
        self.lcd.print(&text[..end]);
    }
}

/// Largest byte index `<= max` that lies on a char boundary
fn floor_char_boundary(text: &str, max: usize) -> usize {
    if max >= text.len() {
        return text.len();
    }
    (0..=max).rev().find(|&i| text.is_char_boundary(i)).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SliderConfig;
    use crate::display::mock::MockLcd;
    use crate::input::ButtonId;
    use crate::params::{Direction, RunParameters};

    fn presenter() -> Presenter<MockLcd> {
        Presenter::new(MockLcd::new(), 16)
    }

    fn drive(menu: &mut Menu, presenter: &mut Presenter<MockLcd>, buttons: &[ButtonId]) {
        let config = SliderConfig::default();
        for &b in buttons {
            let action = menu.handle(b, &config);
            presenter.apply(menu, action);
        }
    }

    #[test]
    fn test_splash() {
        let mut p = presenter();
        p.show_splash();
        assert_eq!(p.lcd().line(0), "Dolly slider");
        assert!(p.lcd().line(1).starts_with('v'));
    }

    #[test]
    fn test_top_level_screens() {
        let mut p = presenter();
        let mut menu = Menu::default();

        p.render(&menu);
        assert_eq!(p.lcd().line(0), "Distance");
        assert_eq!(p.lcd().line(1), "500 mm");
        assert!(!p.lcd().blinking);

        drive(&mut menu, &mut p, &[ButtonId::Right]);
        assert_eq!(p.lcd().line(0), "Duration");
        assert_eq!(p.lcd().line(1), "60 s");

        drive(&mut menu, &mut p, &[ButtonId::Right]);
        assert_eq!(p.lcd().line(1), "0 (video)");

        drive(&mut menu, &mut p, &[ButtonId::Right]);
        assert_eq!(p.lcd().line(1), "Forward");

        drive(&mut menu, &mut p, &[ButtonId::Right]);
        assert_eq!(p.lcd().line(0), "Go");
        assert_eq!(p.lcd().line(1), "Stopped");
    }

    #[test]
    fn test_digit_edit_updates_single_cell() {
        let mut p = presenter();
        let mut menu = Menu::new(RunParameters {
            distance_mm: 120,
            ..Default::default()
        });
        p.render(&menu);

        drive(&mut menu, &mut p, &[ButtonId::Select]);
        assert_eq!(p.lcd().line(0), "Set Distance");
        assert_eq!(p.lcd().line(1), "0120 mm");
        assert!(p.lcd().blinking);
        assert_eq!(p.lcd().cursor(), (0, 1));

        let clears = p.lcd().clears;
        drive(&mut menu, &mut p, &[ButtonId::Right, ButtonId::Right, ButtonId::Up]);
        assert_eq!(p.lcd().line(1), "0130 mm");
        assert_eq!(p.lcd().cursor(), (2, 1));
        assert_eq!(p.lcd().clears, clears);

        drive(&mut menu, &mut p, &[ButtonId::Select]);
        assert_eq!(p.lcd().line(0), "Distance");
        assert_eq!(p.lcd().line(1), "130 mm");
        assert!(!p.lcd().blinking);
    }

    #[test]
    fn test_direction_edit_screen() {
        let mut p = presenter();
        let mut menu = Menu::default();
        drive(
            &mut menu,
            &mut p,
            &[ButtonId::Right, ButtonId::Right, ButtonId::Right, ButtonId::Select, ButtonId::Down],
        );
        assert_eq!(menu.params().direction, Direction::Reverse);
        assert_eq!(p.lcd().line(0), "Set Direction");
        assert_eq!(p.lcd().line(1), "Reverse");
    }

    #[test]
    fn test_running_and_progress() {
        let config = SliderConfig::default();
        let params = RunParameters {
            distance_mm: 100,
            duration_s: 60,
            steps: 5,
            direction: Direction::Forward,
        };
        let plan = MotionPlan::new(&params, &config).unwrap();

        let mut p = presenter();
        p.show_running(&plan);
        assert_eq!(p.lcd().line(0), "Running: 5x");
        assert_eq!(p.lcd().line(1), "");

        for i in 0..3 {
            p.progress_marker(i);
        }
        assert_eq!(p.lcd().line(1), "###");

        // Past the right edge is ignored
        p.progress_marker(16);
        assert_eq!(p.lcd().line(1), "###");
    }

    #[test]
    fn test_outcome_and_error_screens() {
        let mut p = presenter();
        p.show_outcome(RunOutcome::UserCancelled);
        assert_eq!(p.lcd().line(0), "Cancelled");

        p.show_outcome(RunOutcome::Completed);
        assert_eq!(p.lcd().line(0), "Done");
        assert_eq!(p.lcd().line(1), "Stopped");

        p.show_plan_error(PlanError::ZeroDuration);
        assert_eq!(p.lcd().line(0), "Err: no time");
    }

    #[test]
    fn test_lines_truncate_to_width() {
        let mut p = Presenter::new(MockLcd::new(), 8);
        p.show_plan_error(PlanError::TooManyIntervals);
        assert_eq!(p.lcd().line(0), "Err: too");
    }
}
