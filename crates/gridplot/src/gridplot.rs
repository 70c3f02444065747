pub type Color = String;

/// How matrix cells are rasterized: crisp cell boundaries or anti-aliased
/// blending between neighboring cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interpolation {
    Nearest,
    Smooth,
}

/// Which matrix row is drawn at the bottom of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Lower,
    Upper,
}

#[derive(Debug, PartialEq)]
pub struct Bar {
    pub pos: u32,  // 0-based slot along the x axis
    pub frac: f64, // height as a fraction of the panel height
    pub color: Color,
}

/// Tick position is a fraction of the axis length, measured from the
/// data origin of that axis.
#[derive(Debug, PartialEq)]
pub struct Tick {
    pub frac: f64,
    pub label: Option<String>,
}

#[derive(Debug)]
pub struct Axis {
    pub title: String,
    pub ticks: Vec<Tick>,
}

/// Row-major square grid of pre-colored cells.
#[derive(Debug)]
pub struct MatrixPanel {
    pub dim: usize,
    pub cells: Vec<Color>,
    pub interpolation: Interpolation,
    pub origin: Origin,
}

#[derive(Debug)]
pub struct Colorbar {
    pub stops: Vec<(f64, Color)>, // offset in [0, 1] from the low end
    pub low_label: String,
    pub high_label: String,
}

#[derive(Debug)]
pub enum Panel {
    Bars(Vec<Bar>),
    Matrix(MatrixPanel),
}

#[derive(Debug)]
pub struct GridPlot {
    pub panel: Panel,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub colorbar: Option<Colorbar>,
    pub title: Option<String>,
}

impl MatrixPanel {
    pub fn get(&self, row: usize, col: usize) -> &Color {
        &self.cells[row * self.dim + col]
    }
}
