use chrono::{Local, NaiveDate};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::core::{
    DataPoint, DateRange, Interpolation, Viewport, generate_date_range, parse_interpolation,
    populate_sample_data,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{CHART_ROOT_CLASS, ChartLayout, ChartSurface, LineChartFrame, LineStyle};

use super::{ChartOptions, ChartSnapshot};

/// Line chart widget bound to one container.
///
/// Construction generates a dataset but draws nothing. Every mutator
/// (`update`, `set_interpolator`, `resize`) removes the previous output and
/// draws again, so the container never holds more than one chart after a
/// mutator returns. Mutators prepare the new scene before touching the
/// container; on error the previous output and state are left as they were.
pub struct ChartRenderer<S: ChartSurface> {
    surface: S,
    options: ChartOptions,
    interpolation: Interpolation,
    sample_data: Vec<DataPoint>,
    rng: StdRng,
    start_date: Option<NaiveDate>,
    last_canvas: Option<Viewport>,
    rendered: bool,
}

impl<S: ChartSurface> ChartRenderer<S> {
    pub fn new(surface: S, options: ChartOptions) -> Self {
        let mut renderer = Self {
            surface,
            options,
            interpolation: options.interpolation,
            sample_data: Vec::new(),
            rng: StdRng::from_entropy(),
            start_date: None,
            last_canvas: None,
            rendered: false,
        };
        renderer.sample_data = renderer.populate_sample_data();
        debug!(
            container = renderer.surface.id(),
            interpolation = %renderer.interpolation,
            points = renderer.sample_data.len(),
            "chart renderer constructed"
        );
        renderer
    }

    /// Reseeds the value generator and regenerates the dataset.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self.sample_data = self.populate_sample_data();
        self
    }

    /// Pins the first day of generated datasets instead of using today.
    #[must_use]
    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self.sample_data = self.populate_sample_data();
        self
    }

    /// Draws a fresh dataset. The caller decides whether to keep it.
    pub fn populate_sample_data(&mut self) -> Vec<DataPoint> {
        let start = self
            .start_date
            .unwrap_or_else(|| Local::now().date_naive());
        populate_sample_data(start, &mut self.rng)
    }

    #[must_use]
    pub fn generate_date_range(start_date: NaiveDate, end_date: NaiveDate) -> DateRange {
        generate_date_range(start_date, end_date)
    }

    /// Draws the current dataset on the configured default canvas.
    ///
    /// Output from earlier draws is not removed; call `destroy` first.
    pub fn draw_line(&mut self) -> ChartResult<()> {
        self.draw_line_sized(self.options.canvas)
    }

    /// Draws the current dataset on a canvas of the given size.
    pub fn draw_line_sized(&mut self, canvas: Viewport) -> ChartResult<()> {
        self.ensure_attached()?;
        let frame = self.build_frame(&self.sample_data, self.interpolation, canvas)?;
        self.mount(frame)
    }

    /// Removes every rendered chart from the container.
    pub fn destroy(&mut self) -> usize {
        let removed = self.surface.remove_children_with_class(CHART_ROOT_CLASS);
        if removed > 0 {
            debug!(container = self.surface.id(), removed, "destroyed chart output");
        }
        self.rendered = false;
        removed
    }

    /// Switches interpolation by name and redraws the existing data.
    pub fn set_interpolator(&mut self, name: &str) -> ChartResult<()> {
        self.set_interpolation(parse_interpolation(name)?)
    }

    pub fn set_interpolation(&mut self, interpolation: Interpolation) -> ChartResult<()> {
        self.ensure_attached()?;
        let canvas = self.current_canvas();
        let frame = self.build_frame(&self.sample_data, interpolation, canvas)?;
        debug!(from = %self.interpolation, to = %interpolation, "interpolation changed");
        self.interpolation = interpolation;
        self.replace(frame)
    }

    /// Replaces the dataset with a fresh random draw and redraws.
    pub fn update(&mut self) -> ChartResult<()> {
        self.ensure_attached()?;
        let canvas = self.current_canvas();
        let data = self.populate_sample_data();
        let frame = self.build_frame(&data, self.interpolation, canvas)?;
        self.sample_data = data;
        debug!(points = self.sample_data.len(), "sample data regenerated");
        self.replace(frame)
    }

    /// Redraws sized to the container's current bounding box.
    pub fn resize(&mut self) -> ChartResult<()> {
        self.ensure_attached()?;
        let bounding_box = self.surface.bounding_box().ok_or(ChartError::NotRendered)?;
        let canvas = bounding_box.to_viewport()?;
        let frame = self.build_frame(&self.sample_data, self.interpolation, canvas)?;
        debug!(width = canvas.width, height = canvas.height, "resizing chart");
        self.replace(frame)
    }

    /// Replaces the dataset with caller data, ordered by date. Nothing is
    /// redrawn until the next draw or mutator call.
    pub fn set_data(&mut self, mut points: Vec<DataPoint>) {
        points.sort_by_key(|point| point.x);
        debug!(points = points.len(), "set chart data");
        self.sample_data = points;
    }

    #[must_use]
    pub fn sample_data(&self) -> &[DataPoint] {
        &self.sample_data
    }

    #[must_use]
    pub fn options(&self) -> ChartOptions {
        self.options
    }

    #[must_use]
    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    /// Canvas of the most recent successful draw.
    #[must_use]
    pub fn last_canvas(&self) -> Option<Viewport> {
        self.last_canvas
    }

    #[must_use]
    pub fn is_rendered(&self) -> bool {
        self.rendered
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }

    #[must_use]
    pub fn snapshot(&self) -> ChartSnapshot {
        ChartSnapshot {
            options: self.options,
            interpolation: self.interpolation,
            canvas: self.last_canvas,
            points: self.sample_data.clone(),
        }
    }

    fn current_canvas(&self) -> Viewport {
        self.last_canvas.unwrap_or(self.options.canvas)
    }

    fn ensure_attached(&self) -> ChartResult<()> {
        if self.surface.is_attached() {
            Ok(())
        } else {
            Err(ChartError::ContainerNotFound(self.surface.id().to_owned()))
        }
    }

    fn build_frame(
        &self,
        points: &[DataPoint],
        interpolation: Interpolation,
        canvas: Viewport,
    ) -> ChartResult<LineChartFrame> {
        let layout = ChartLayout::new(canvas, self.options.margins)?;
        LineChartFrame::build(
            points,
            layout,
            LineStyle {
                x_tick_count: self.options.x_tick_count,
                y_tick_count: self.options.y_tick_count,
                interpolation,
            },
        )
    }

    fn replace(&mut self, frame: LineChartFrame) -> ChartResult<()> {
        self.destroy();
        self.mount(frame)
    }

    fn mount(&mut self, frame: LineChartFrame) -> ChartResult<()> {
        let canvas = frame.layout.canvas;
        self.surface.append_child(frame.to_element())?;
        self.last_canvas = Some(canvas);
        self.rendered = true;
        debug!(
            container = self.surface.id(),
            width = canvas.width,
            height = canvas.height,
            "chart drawn"
        );
        Ok(())
    }
}
