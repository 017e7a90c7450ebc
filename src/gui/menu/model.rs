use super::geometry::{self, Point, RingParams, Wedge};
use palette::Srgba;
use std::fmt;
use std::rc::Rc;

/// One entry in the ring. Order in the button list determines angular
/// position (0-indexed, clockwise from the configured rotation offset).
#[derive(Clone, Default)]
pub struct ButtonSpec {
    pub text: String,
    pub action: Option<Rc<dyn Fn()>>,
    pub background: Option<Srgba<f64>>,
    pub border: Option<Srgba<f64>>,
    pub text_color: Option<Srgba<f64>>,
}

impl ButtonSpec {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_action(mut self, action: impl Fn() + 'static) -> Self {
        self.action = Some(Rc::new(action));
        self
    }

    pub fn with_background(mut self, color: Srgba<f64>) -> Self {
        self.background = Some(color);
        self
    }

    pub fn with_border(mut self, color: Srgba<f64>) -> Self {
        self.border = Some(color);
        self
    }

    pub fn with_text_color(mut self, color: Srgba<f64>) -> Self {
        self.text_color = Some(color);
        self
    }
}

impl fmt::Debug for ButtonSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonSpec")
            .field("text", &self.text)
            .field("action", &self.action.as_ref().map(|_| "Fn"))
            .field("background", &self.background)
            .field("border", &self.border)
            .field("text_color", &self.text_color)
            .finish()
    }
}

/// Runtime state of the menu: the button list, the anchor the ring is
/// centered on (viewport coordinates), visibility, and the computed wedges.
/// The wedge list is rebuilt wholesale whenever buttons or layout parameters
/// change, so a redraw after any mutation shows exactly the current set.
pub struct State {
    pub visible: bool,
    pub anchor: Point,
    pub params: RingParams,
    pub buttons: Vec<ButtonSpec>,
    pub wedges: Vec<Wedge>,
    pub hover_index: Option<usize>,
}

impl State {
    pub fn new(buttons: Vec<ButtonSpec>, params: RingParams, anchor: Point, visible: bool) -> Self {
        let mut state = Self {
            visible,
            anchor,
            params,
            buttons,
            wedges: Vec::new(),
            hover_index: None,
        };
        state.recompute_wedges();
        state
    }

    pub fn show(&mut self) {
        self.visible = true;
        self.hover_index = None;
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.hover_index = None;
    }

    /// Moves the ring so its geometric center lands on `pos`.
    pub fn set_pos(&mut self, pos: Point) {
        self.anchor = pos;
    }

    pub fn set_params(&mut self, params: RingParams) {
        self.params = params;
        self.recompute_wedges();
    }

    /// Replaces the button list and recomputes the ring from scratch.
    pub fn update_buttons(&mut self, buttons: Vec<ButtonSpec>) {
        self.buttons = buttons;
        self.hover_index = None;
        self.recompute_wedges();
    }

    fn recompute_wedges(&mut self) {
        self.wedges = geometry::layout(&self.params, self.buttons.len());
    }

    /// Index of the wedge under `cursor` (viewport coordinates), if any.
    pub fn hit_test(&self, cursor: Point) -> Option<usize> {
        let local = Point::new(cursor.x - self.anchor.x, cursor.y - self.anchor.y);
        self.wedges
            .iter()
            .find(|w| w.contains(local, &self.params))
            .map(|w| w.index)
    }

    /// The callback of the indexed button. A button without one is a no-op.
    pub fn action(&self, index: usize) -> Option<Rc<dyn Fn()>> {
        self.buttons.get(index).and_then(|b| b.action.clone())
    }

    pub fn activate(&self, index: usize) {
        if let Some(action) = self.action(index) {
            action();
        }
    }

    /// Tracks the hovered wedge; returns whether a redraw is needed.
    pub fn update_cursor(&mut self, cursor: Point) -> bool {
        if !self.visible {
            return false;
        }
        let new_idx = self.hit_test(cursor);
        let changed = self.hover_index != new_idx;
        self.hover_index = new_idx;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::menu::geometry::polar;
    use std::cell::Cell;
    use std::f64::consts::FRAC_PI_2;

    fn params() -> RingParams {
        RingParams {
            outer_radius: 100.0,
            inner_radius: 50.0,
            rotation: FRAC_PI_2,
            gap: 0.0,
        }
    }

    fn buttons(n: usize) -> Vec<ButtonSpec> {
        (0..n).map(|i| ButtonSpec::new(format!("b{i}"))).collect()
    }

    #[test]
    fn update_buttons_with_empty_list_clears_wedges() {
        let mut state = State::new(buttons(4), params(), Point::default(), true);
        assert_eq!(state.wedges.len(), 4);

        state.update_buttons(Vec::new());
        assert!(state.wedges.is_empty());
        assert_eq!(state.hit_test(Point::new(75.0, 0.0)), None);
    }

    #[test]
    fn update_buttons_replaces_previous_wedges_exactly() {
        let mut state = State::new(buttons(3), params(), Point::default(), true);
        state.update_buttons(buttons(7));
        assert_eq!(state.wedges.len(), 7);
        assert_eq!(state.buttons.len(), 7);
    }

    #[test]
    fn ring_is_centered_on_the_anchor() {
        let mut state = State::new(buttons(4), params(), Point::default(), false);
        state.set_pos(Point::new(100.0, 100.0));
        state.show();
        assert!(state.visible);

        // the dead zone at the anchor itself hits nothing
        assert_eq!(state.hit_test(Point::new(100.0, 100.0)), None);

        // a point at mid-radius along each wedge's mid-angle hits that wedge
        for wedge in state.wedges.clone() {
            let probe = polar(75.0, wedge.mid_angle());
            let cursor = Point::new(100.0 + probe.x, 100.0 + probe.y);
            assert_eq!(state.hit_test(cursor), Some(wedge.index));
        }
    }

    #[test]
    fn activation_runs_the_callback_once() {
        let count = Rc::new(Cell::new(0u32));
        let seen = count.clone();
        let list = vec![
            ButtonSpec::new("hit").with_action(move || seen.set(seen.get() + 1)),
            ButtonSpec::new("no-op"),
        ];
        let state = State::new(list, params(), Point::default(), true);

        state.activate(0);
        assert_eq!(count.get(), 1);

        // missing callback and out-of-range index are both silent no-ops
        state.activate(1);
        state.activate(9);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn cursor_tracking_reports_hover_changes() {
        let mut state = State::new(buttons(4), params(), Point::default(), true);
        let wedge_mid = polar(75.0, state.wedges[0].mid_angle());

        assert!(state.update_cursor(wedge_mid));
        assert_eq!(state.hover_index, Some(0));
        // same spot again: no redraw needed
        assert!(!state.update_cursor(wedge_mid));

        // leaving the ring clears the hover
        assert!(state.update_cursor(Point::new(500.0, 500.0)));
        assert_eq!(state.hover_index, None);
    }

    #[test]
    fn hidden_menu_ignores_cursor_movement() {
        let mut state = State::new(buttons(4), params(), Point::default(), true);
        state.hide();
        let wedge_mid = polar(75.0, FRAC_PI_2 + 0.1);
        assert!(!state.update_cursor(wedge_mid));
        assert_eq!(state.hover_index, None);
    }

    #[test]
    fn show_and_hide_reset_hover() {
        let mut state = State::new(buttons(4), params(), Point::default(), true);
        state.update_cursor(polar(75.0, state.wedges[1].mid_angle()));
        assert!(state.hover_index.is_some());
        state.hide();
        assert_eq!(state.hover_index, None);
        state.show();
        assert!(state.visible);
        assert_eq!(state.hover_index, None);
    }
}
