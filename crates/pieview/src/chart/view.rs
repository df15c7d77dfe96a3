use super::model::{ChartState, LegendEntry};
use super::{
    BOUNDARY_STROKE_WIDTH, HIGHLIGHT_SCALE, LABEL_RADIUS_FACTOR, LEGEND_MARGIN, LEGEND_ROW_HEIGHT,
    LEGEND_SWATCH_SIZE, LEGEND_WIDTH,
};
use cairo::Context;
use piekit::color::Color;
use piekit::hit::Point;
use piekit::slice::Slice;
use std::path::Path;
use thiserror::Error;

const DIMMED_ALPHA: f64 = 0.5;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Cairo(#[from] cairo::Error),
    #[error(transparent)]
    Png(#[from] cairo::IoError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn set_source(cr: &Context, color: Color) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

struct SliceRenderer<'a> {
    slice: &'a Slice,
    color: Color,
    background: Color,
    center: Point,
    radius: f64,
    scale: f64,
}

impl SliceRenderer<'_> {
    fn draw(&self, cr: &Context, show_percentage: bool) -> Result<(), cairo::Error> {
        cr.save()?;
        cr.translate(self.center.x, self.center.y);
        cr.scale(self.scale, self.scale);

        self.draw_wedge(cr)?;
        if show_percentage {
            self.draw_label(cr)?;
        }
        cr.restore()
    }

    fn draw_wedge(&self, cr: &Context) -> Result<(), cairo::Error> {
        cr.new_path();
        cr.arc(
            0.0,
            0.0,
            self.radius,
            self.slice.start_deg.to_radians(),
            self.slice.end_deg.to_radians(),
        );
        cr.line_to(0.0, 0.0);
        cr.close_path();
        set_source(cr, self.color);

        // a lone full circle has no edges to separate
        if self.slice.is_full_circle() {
            return cr.fill();
        }
        cr.fill_preserve()?;
        set_source(cr, self.background);
        cr.set_line_width(BOUNDARY_STROKE_WIDTH);
        cr.stroke()
    }

    fn draw_label(&self, cr: &Context) -> Result<(), cairo::Error> {
        let text = self.slice.percentage_label();
        let (dx, dy) = self.slice.label_offset(self.radius, LABEL_RADIUS_FACTOR);

        cr.set_source_rgb(0.0, 0.0, 0.0);
        cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Normal);
        cr.set_font_size(11.0);
        if let Ok(ext) = cr.text_extents(&text) {
            cr.move_to(dx - ext.width() / 2.0, dy + ext.height() / 2.0);
            cr.show_text(&text)?;
        }
        Ok(())
    }
}

fn draw_legend_entry(
    cr: &Context,
    entry: &LegendEntry,
    origin: Point,
) -> Result<(), cairo::Error> {
    cr.save()?;
    cr.translate(origin.x, origin.y);
    if entry.highlighted {
        cr.scale(HIGHLIGHT_SCALE, HIGHLIGHT_SCALE);
    }

    cr.rectangle(0.0, 0.0, LEGEND_SWATCH_SIZE, LEGEND_SWATCH_SIZE);
    set_source(cr, entry.color);
    cr.fill_preserve()?;
    cr.set_source_rgb(0.0, 0.0, 0.0);
    cr.set_line_width(1.0);
    cr.stroke()?;

    let alpha = if entry.dimmed { DIMMED_ALPHA } else { 1.0 };
    cr.set_source_rgba(0.0, 0.0, 0.0, alpha);
    cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Normal);
    cr.set_font_size(12.0);
    cr.move_to(LEGEND_SWATCH_SIZE + 6.0, LEGEND_SWATCH_SIZE);
    cr.show_text(entry.name.as_str())?;

    cr.restore()
}

pub fn draw(cr: &Context, state: &ChartState) -> Result<(), cairo::Error> {
    let center = state.bounds.center();
    let radius = state.bounds.radius();

    for (i, (slice, color)) in state.slices.iter().zip(&state.slice_colors).enumerate() {
        if slice.sweep_deg() <= 0.0 {
            continue;
        }
        SliceRenderer {
            slice,
            color: *color,
            background: state.background,
            center,
            radius,
            scale: state.scale_for(i),
        }
        .draw(cr, state.show_percentage)?;
    }

    let legend_x = state.bounds.x + state.bounds.width + LEGEND_MARGIN;
    for (i, entry) in state.legend().iter().enumerate() {
        let row_y = state.bounds.y + LEGEND_MARGIN + i as f64 * LEGEND_ROW_HEIGHT;
        draw_legend_entry(cr, entry, Point::new(legend_x, row_y))?;
    }
    Ok(())
}

/// Draws the chart onto a fresh canvas filled with the background color and
/// writes it out as PNG.
pub fn render_png(state: &ChartState, path: &Path) -> Result<(), RenderError> {
    let legend_height = 2.0 * LEGEND_MARGIN + state.slices.len() as f64 * LEGEND_ROW_HEIGHT;
    let width = (state.bounds.x + state.bounds.width + LEGEND_WIDTH).ceil() as i32;
    let height = (state.bounds.y + state.bounds.height).max(legend_height).ceil() as i32;

    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
    let cr = Context::new(&surface)?;

    set_source(&cr, state.background);
    cr.paint()?;
    draw(&cr, state)?;
    drop(cr);

    let mut file = fs_err::File::create(path)?;
    surface.write_to_png(&mut file)?;
    log::info!("Rendered {}x{} chart to {}", width, height, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::sample_config;
    use crate::events::AppEvent;
    use piekit::hit::Bounds;
    use piekit::slice::DataPoint;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

    #[test]
    fn test_render_sample_chart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.png");
        let state = ChartState::from_config(&sample_config(), Bounds::from_size(200.0, 200.0));

        render_png(&state, &path).unwrap();

        let bytes = fs_err::read(&path).unwrap();
        assert!(bytes.len() > PNG_SIGNATURE.len());
        assert_eq!(bytes[..8], PNG_SIGNATURE);
    }

    #[test]
    fn test_render_highlighted_single_slice() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("full.png");
        let mut state = ChartState::from_config(&sample_config(), Bounds::from_size(64.0, 64.0));
        state.update(AppEvent::DataChanged(DataPoint::from_integers(&[1])));
        state.update(AppEvent::PointerMove(Point::new(50.0, 40.0)));
        assert_eq!(state.active_index(), Some(0));

        render_png(&state, &path).unwrap();
        assert!(fs_err::metadata(&path).unwrap().len() > 0);
    }
}
