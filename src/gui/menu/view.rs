use super::geometry::{RingParams, Wedge};
use super::model::{ButtonSpec, State};
use crate::gui::theme::Theme;
use cairo::Context;
use std::iter::zip;

struct WedgeRenderer<'a> {
    button: &'a ButtonSpec,
    wedge: &'a Wedge,
    hovered: bool,
}

impl<'a> WedgeRenderer<'a> {
    fn new(button: &'a ButtonSpec, wedge: &'a Wedge, hovered: bool) -> Self {
        Self {
            button,
            wedge,
            hovered,
        }
    }

    fn draw(&self, cr: &Context, params: &RingParams, theme: &Theme) -> Result<(), cairo::Error> {
        self.draw_sector(cr, params, theme)?;
        self.draw_label(cr, theme)
    }

    /// Outer arc, radial edge, inner arc traced backwards, close. The path
    /// is filled first and the same path stroked for the border.
    fn draw_sector(
        &self,
        cr: &Context,
        params: &RingParams,
        theme: &Theme,
    ) -> Result<(), cairo::Error> {
        cr.new_path();
        cr.arc(
            0.0,
            0.0,
            params.outer_radius,
            self.wedge.start,
            self.wedge.end,
        );
        cr.line_to(self.wedge.inner_end.x, self.wedge.inner_end.y);
        cr.arc_negative(
            0.0,
            0.0,
            params.inner_radius,
            self.wedge.end,
            self.wedge.start,
        );
        cr.close_path();

        let (r, g, b, a) = theme.fill(self.button, self.hovered).into_components();
        cr.set_source_rgba(r, g, b, a);
        cr.fill_preserve()?;

        let (r, g, b, a) = theme.border(self.button).into_components();
        cr.set_source_rgba(r, g, b, a);
        cr.stroke()
    }

    fn draw_label(&self, cr: &Context, theme: &Theme) -> Result<(), cairo::Error> {
        if self.button.text.is_empty() {
            return Ok(());
        }

        let (r, g, b, a) = theme.text(self.button).into_components();
        cr.set_source_rgba(r, g, b, a);
        cr.select_font_face(
            &theme.font_family,
            cairo::FontSlant::Normal,
            cairo::FontWeight::Normal,
        );
        cr.set_font_size(theme.font_size);

        if let Ok(ext) = cr.text_extents(&self.button.text) {
            cr.move_to(
                self.wedge.label_pos.x - ext.width() / 2.0,
                self.wedge.label_pos.y + ext.height() / 2.0,
            );
            cr.show_text(&self.button.text)?;
        }
        Ok(())
    }
}

/// Full redraw of the ring. Draws nothing while the menu is hidden; each
/// label is painted over its wedge but never takes part in hit testing.
pub fn draw(cr: &Context, state: &State, theme: &Theme) -> Result<(), cairo::Error> {
    if !state.visible {
        return Ok(());
    }

    cr.save()?;
    cr.translate(state.anchor.x, state.anchor.y);

    for (i, (button, wedge)) in zip(&state.buttons, &state.wedges).enumerate() {
        WedgeRenderer::new(button, wedge, state.hover_index == Some(i)).draw(
            cr,
            &state.params,
            theme,
        )?;
    }

    cr.restore()
}
