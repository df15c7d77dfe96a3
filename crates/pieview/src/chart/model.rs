use super::HIGHLIGHT_SCALE;
use crate::config::Config;
use crate::events::AppEvent;
use piekit::color::Color;
use piekit::hit::{Bounds, Point};
use piekit::scheme::ColorScheme;
use piekit::slice::{self, DataPoint, Slice, SliceError, SliceName};
use piekit::touch::{PointerEvent, TouchState};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ChartAction {
    pub should_redraw: bool,
    pub active_changed: bool,
}

impl ChartAction {
    pub fn new(should_redraw: bool, active_changed: bool) -> Self {
        Self {
            should_redraw,
            active_changed,
        }
    }

    fn redraw() -> Self {
        Self::new(true, false)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub name: SliceName,
    pub color: Color,
    pub highlighted: bool,
    /// Another entry is highlighted.
    pub dimmed: bool,
}

/// Everything the renderer needs, plus the one piece of mutable interaction
/// state (the touch). Slices and colors are recomputed whenever their inputs
/// change.
pub struct ChartState {
    pub data: Vec<DataPoint>,
    pub slices: Vec<Slice>,
    pub slice_colors: Vec<Color>,
    pub scheme: ColorScheme,
    pub background: Color,
    pub bounds: Bounds,
    pub touch: TouchState,
    pub touches_enabled: bool,
    pub show_percentage: bool,
    slice_error: Option<SliceError>,
}

impl ChartState {
    pub fn new(data: Vec<DataPoint>, colors: &[Color], background: Color, bounds: Bounds) -> Self {
        let mut state = Self {
            data,
            slices: Vec::new(),
            slice_colors: Vec::new(),
            scheme: ColorScheme::from_colors(colors),
            background,
            bounds,
            touch: TouchState::cleared(),
            touches_enabled: true,
            show_percentage: true,
            slice_error: None,
        };
        state.recalculate_slices();
        state
    }

    pub fn from_config(config: &Config, bounds: Bounds) -> Self {
        let mut state = Self::new(
            config.data.clone(),
            &config.colors(),
            config.background.color(),
            bounds,
        );
        state.touches_enabled = config.touches_enabled;
        state.show_percentage = config.show_percentage;
        state
    }

    pub fn set_data(&mut self, data: Vec<DataPoint>) {
        self.data = data;
        self.touch = TouchState::cleared();
        self.recalculate_slices();
    }

    pub fn set_colors(&mut self, colors: &[Color]) {
        self.scheme = ColorScheme::from_colors(colors);
        self.recalculate_colors();
    }

    pub fn update(&mut self, event: AppEvent) -> ChartAction {
        match event {
            AppEvent::PointerMove(point) => self.apply_pointer(PointerEvent::Moved(point)),
            AppEvent::PointerUp => self.apply_pointer(PointerEvent::Ended),
            AppEvent::Resize { width, height } => {
                let before = self.active_index();
                self.bounds = Bounds::from_size(width, height);
                self.touch = TouchState::cleared();
                ChartAction::new(true, before.is_some())
            }
            AppEvent::DataChanged(data) => {
                let before = self.active_index();
                self.set_data(data);
                ChartAction::new(true, before.is_some())
            }
            AppEvent::ColorsChanged(colors) => {
                self.set_colors(&colors);
                ChartAction::redraw()
            }
        }
    }

    fn apply_pointer(&mut self, event: PointerEvent) -> ChartAction {
        if !self.touches_enabled {
            return ChartAction::default();
        }

        let update = self.touch.apply(event, &self.bounds, &self.slices);
        self.touch = update.state;
        if update.index_changed {
            log::debug!("Active slice: {:?}", self.touch.active_index);
        }
        ChartAction::new(update.should_redraw, update.index_changed)
    }

    pub fn active_index(&self) -> Option<usize> {
        self.touch.active_index
    }

    pub fn touch_location(&self) -> Option<Point> {
        self.touch.location
    }

    pub fn active_slice(&self) -> Option<(&DataPoint, &Slice)> {
        let idx = self.active_index()?;
        self.data.get(idx).zip(self.slices.get(idx))
    }

    /// Why there is nothing to draw, when the data could not be laid out.
    pub fn slice_error(&self) -> Option<SliceError> {
        self.slice_error
    }

    pub fn scale_for(&self, index: usize) -> f64 {
        if self.active_index() == Some(index) {
            HIGHLIGHT_SCALE
        } else {
            1.0
        }
    }

    pub fn legend(&self) -> Vec<LegendEntry> {
        let active = self.active_index();
        self.data
            .iter()
            .zip(&self.slice_colors)
            .enumerate()
            .map(|(i, (point, color))| LegendEntry {
                name: point.name.clone(),
                color: *color,
                highlighted: active == Some(i),
                dimmed: active.is_some_and(|a| a != i),
            })
            .collect()
    }

    fn recalculate_slices(&mut self) {
        match slice::compute_slices(&self.data) {
            Ok(slices) => {
                self.slices = slices;
                self.slice_error = None;
            }
            Err(e) => {
                log::warn!("Cannot lay out chart data: {}", e);
                self.slices = Vec::new();
                self.slice_error = Some(e);
            }
        }
        self.recalculate_colors();
    }

    fn recalculate_colors(&mut self) {
        self.slice_colors = self.scheme.colors_for(self.slices.len());
    }
}
