use crate::gridplot::{
    Axis, Bar, Color, Colorbar, GridPlot, Interpolation, MatrixPanel, Origin, Panel,
};
use std::fmt::Write;
use std::path::Path;

const BAR_PANEL_WIDTH: f64 = 750.0;
const BAR_PANEL_HEIGHT: f64 = 240.0;
const MATRIX_PANEL_SIDE: f64 = 560.0;
const MARGIN_LEFT: f64 = 64.0;
const MARGIN_BOTTOM: f64 = 56.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_RIGHT: f64 = 16.0;
const TITLE_SPACE: f64 = 26.0;
const COLORBAR_SPACE: f64 = 76.0;
const COLORBAR_WIDTH: f64 = 18.0;
const TICK_LEN: f64 = 4.0;

pub fn generate_string(plot: &GridPlot) -> String {
    let mut generator = Generator::new(plot);
    generator.generate(plot);
    generator.out
}

pub fn render_from_string(svg_content: &str, path: &Path) -> Result<(), String> {
    std::fs::write(path, svg_content).map_err(|e| e.to_string())
}

struct Generator {
    out: String,
    panel_w: f64,
    panel_h: f64,
    left: f64,
    top: f64,
}

impl Generator {
    fn new(plot: &GridPlot) -> Self {
        let (panel_w, panel_h) = match &plot.panel {
            Panel::Bars(_) => (BAR_PANEL_WIDTH, BAR_PANEL_HEIGHT),
            Panel::Matrix(_) => (MATRIX_PANEL_SIDE, MATRIX_PANEL_SIDE),
        };
        let top = match plot.title {
            Some(_) => MARGIN_TOP + TITLE_SPACE,
            None => MARGIN_TOP,
        };
        Self {
            out: String::new(),
            panel_w,
            panel_h,
            left: MARGIN_LEFT,
            top,
        }
    }

    fn generate(&mut self, plot: &GridPlot) {
        let mut width = self.left + self.panel_w + MARGIN_RIGHT;
        if plot.colorbar.is_some() {
            width += COLORBAR_SPACE;
        }
        let height = self.top + self.panel_h + MARGIN_BOTTOM;

        self.start_svg(width, height);
        self.add_background();

        if let Some(title) = &plot.title {
            self.plot_title(title);
        }

        match &plot.panel {
            Panel::Bars(bars) => self.plot_bars(bars),
            Panel::Matrix(matrix) => self.plot_matrix(matrix),
        }

        self.plot_x_axis(&plot.x_axis);
        self.plot_y_axis(&plot.y_axis);

        if let Some(colorbar) = &plot.colorbar {
            self.plot_colorbar(colorbar);
        }

        self.end_svg();
    }

    fn plot_title(&mut self, title: &str) {
        let x = self.left + self.panel_w / 2.0;
        let y = self.top - 10.0;
        let style =
            r#"font-family="monospace" font-size="16px" font-weight="bold" text-anchor="middle""#;
        let line = format!("<text x=\"{}\" y=\"{}\" {} >{}</text>", x, y, style, title);
        writeln!(self.out, "{}", line).unwrap();
    }

    fn plot_bars(&mut self, bars: &[Bar]) {
        let count = bars.iter().map(|bar| bar.pos + 1).max().unwrap_or(0);
        if count == 0 {
            return;
        }
        let slot = self.panel_w / count as f64;
        // Keep a hairline of whitespace between bars when slots are wide enough
        let gap = if slot > 3.0 { 1.0 } else { 0.0 };

        for bar in bars {
            let bar_height = self.panel_h * bar.frac;
            let x = self.left + bar.pos as f64 * slot;
            let y = self.top + self.panel_h - bar_height;
            self.add_rect((x, y), (slot - gap, bar_height), &bar.color);
        }
    }

    fn plot_matrix(&mut self, matrix: &MatrixPanel) {
        if matrix.dim == 0 {
            return;
        }
        let cell = self.panel_w / matrix.dim as f64;
        // Nearest keeps crisp cell boundaries, smooth lets neighboring
        // cells blend during rasterization
        let (rendering, overlap) = match matrix.interpolation {
            Interpolation::Nearest => (r#" shape-rendering="crispEdges""#, 0.0),
            Interpolation::Smooth => ("", cell * 0.08),
        };
        writeln!(self.out, "<g{}>", rendering).unwrap();

        for row in 0..matrix.dim {
            let y_slot = match matrix.origin {
                Origin::Lower => matrix.dim - 1 - row,
                Origin::Upper => row,
            };
            let y = self.top + y_slot as f64 * cell;
            for col in 0..matrix.dim {
                let x = self.left + col as f64 * cell;
                let dims = (cell + overlap, cell + overlap);
                self.add_rect((x, y), dims, matrix.get(row, col));
            }
        }

        writeln!(self.out, "</g>").unwrap();
    }

    fn plot_x_axis(&mut self, axis: &Axis) {
        let y = self.top + self.panel_h;
        self.add_line((self.left, y), (self.left + self.panel_w, y));

        for tick in &axis.ticks {
            let x = self.left + tick.frac * self.panel_w;
            self.add_line((x, y), (x, y + TICK_LEN));
            if let Some(label) = &tick.label {
                let style = r#"font-family="monospace" font-size="12px" text-anchor="middle""#;
                let text = format!(
                    "<text x=\"{}\" y=\"{}\" {} >{}</text>",
                    x,
                    y + TICK_LEN + 14.0,
                    style,
                    label
                );
                writeln!(self.out, "{}", text).unwrap();
            }
        }

        if !axis.title.is_empty() {
            let x = self.left + self.panel_w / 2.0;
            let style = r#"font-family="monospace" font-size="14px" text-anchor="middle""#;
            let text = format!(
                "<text x=\"{}\" y=\"{}\" {} >{}</text>",
                x,
                y + MARGIN_BOTTOM - 12.0,
                style,
                axis.title
            );
            writeln!(self.out, "{}", text).unwrap();
        }
    }

    fn plot_y_axis(&mut self, axis: &Axis) {
        let x = self.left;
        self.add_line((x, self.top), (x, self.top + self.panel_h));

        for tick in &axis.ticks {
            // Tick fractions are measured from the data origin at the bottom
            let y = self.top + (1.0 - tick.frac) * self.panel_h;
            self.add_line((x - TICK_LEN, y), (x, y));
            if let Some(label) = &tick.label {
                let style = r#"font-family="monospace" font-size="12px" text-anchor="end""#;
                let text = format!(
                    "<text x=\"{}\" y=\"{}\" {} >{}</text>",
                    x - TICK_LEN - 4.0,
                    y + 4.0,
                    style,
                    label
                );
                writeln!(self.out, "{}", text).unwrap();
            }
        }

        if !axis.title.is_empty() {
            let tx = self.left - MARGIN_LEFT + 16.0;
            let ty = self.top + self.panel_h / 2.0;
            let style = r#"font-family="monospace" font-size="14px" text-anchor="middle""#;
            let text = format!(
                "<text x=\"{}\" y=\"{}\" {} transform=\"rotate(-90 {} {})\" >{}</text>",
                tx, ty, style, tx, ty, axis.title
            );
            writeln!(self.out, "{}", text).unwrap();
        }
    }

    fn plot_colorbar(&mut self, colorbar: &Colorbar) {
        writeln!(self.out, "<defs>").unwrap();
        // SVG gradients run top-down, the colorbar low end is at the bottom
        writeln!(
            self.out,
            r#"<linearGradient id="cbar" x1="0" y1="1" x2="0" y2="0">"#
        )
        .unwrap();
        for (offset, color) in &colorbar.stops {
            writeln!(
                self.out,
                "<stop offset=\"{}%\" stop-color=\"{}\" />",
                (offset * 100.0).round(),
                color
            )
            .unwrap();
        }
        writeln!(self.out, "</linearGradient>").unwrap();
        writeln!(self.out, "</defs>").unwrap();

        let x = self.left + self.panel_w + MARGIN_RIGHT + 12.0;
        let pos = format!("x=\"{}\" y=\"{}\"", x, self.top);
        let dim = format!("width=\"{}\" height=\"{}\"", COLORBAR_WIDTH, self.panel_h);
        let style = r##"fill="url(#cbar)" stroke="#000000" stroke-width="0.5""##;
        writeln!(self.out, "<rect {} {} {} />", pos, dim, style).unwrap();

        let label_x = x + COLORBAR_WIDTH + 4.0;
        let style = r#"font-family="monospace" font-size="12px" text-anchor="start""#;
        let high = format!(
            "<text x=\"{}\" y=\"{}\" {} >{}</text>",
            label_x,
            self.top + 10.0,
            style,
            colorbar.high_label
        );
        writeln!(self.out, "{}", high).unwrap();
        let low = format!(
            "<text x=\"{}\" y=\"{}\" {} >{}</text>",
            label_x,
            self.top + self.panel_h - 2.0,
            style,
            colorbar.low_label
        );
        writeln!(self.out, "{}", low).unwrap();
    }

    fn add_rect(&mut self, pos: (f64, f64), dims: (f64, f64), color: &Color) {
        let (x, y) = pos;
        let (w, h) = dims;
        let pos = format!("x=\"{}\" y=\"{}\"", x, y);
        let dim = format!("width=\"{}\" height=\"{}\"", w, h);
        let style = format!("fill=\"{}\" stroke-width=\"0\"", color);
        let rect = format!("<rect {} {} {} />", pos, dim, style);
        writeln!(self.out, "{}", rect).unwrap();
    }

    fn add_line(&mut self, from: (f64, f64), to: (f64, f64)) {
        let x1y1 = format!("x1=\"{}\" y1=\"{}\"", from.0, from.1);
        let x2y2 = format!("x2=\"{}\" y2=\"{}\"", to.0, to.1);
        let style = r##"stroke="#000000" stroke-width="1""##;
        let line = format!("<line {} {} {} />", x1y1, x2y2, style);
        writeln!(self.out, "{}", line).unwrap();
    }

    fn start_svg(&mut self, width: f64, height: f64) {
        writeln!(self.out, r#"<?xml version="1.0"?>"#).unwrap();
        let line = r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" "#;
        write!(self.out, "{}", line).unwrap();
        writeln!(self.out, "width=\"{}\" height=\"{}\">", width, height).unwrap();
    }

    fn end_svg(&mut self) {
        writeln!(self.out, "</svg>").unwrap();
    }

    fn add_background(&mut self) {
        writeln!(
            self.out,
            r#"<rect width="100%" height="100%" fill="white"/>"#
        )
        .unwrap();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gridplot::Tick;

    fn bar_plot(bars: Vec<Bar>) -> GridPlot {
        GridPlot {
            panel: Panel::Bars(bars),
            x_axis: Axis {
                title: "Position".to_string(),
                ticks: vec![Tick {
                    frac: 0.5,
                    label: Some("5".to_string()),
                }],
            },
            y_axis: Axis {
                title: String::new(),
                ticks: Vec::new(),
            },
            colorbar: None,
            title: None,
        }
    }

    #[test]
    fn bar_svg_contains_one_rect_per_bar() {
        let bars = (0..10)
            .map(|pos| Bar {
                pos,
                frac: 0.5,
                color: "#1383C6".to_string(),
            })
            .collect();
        let svg = generate_string(&bar_plot(bars));
        // 10 bars plus the background rect
        assert_eq!(svg.matches("<rect").count(), 11);
        assert!(svg.starts_with("<?xml"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn tick_labels_are_rendered() {
        let svg = generate_string(&bar_plot(vec![Bar {
            pos: 0,
            frac: 1.0,
            color: "#1383C6".to_string(),
        }]));
        assert!(svg.contains(">5</text>"));
        assert!(svg.contains(">Position</text>"));
    }

    #[test]
    fn matrix_svg_respects_origin() {
        let matrix = MatrixPanel {
            dim: 2,
            cells: vec![
                "#000001".to_string(),
                "#000002".to_string(),
                "#000003".to_string(),
                "#000004".to_string(),
            ],
            interpolation: Interpolation::Nearest,
            origin: Origin::Lower,
        };
        let svg = generate_string(&GridPlot {
            panel: Panel::Matrix(matrix),
            x_axis: Axis {
                title: String::new(),
                ticks: Vec::new(),
            },
            y_axis: Axis {
                title: String::new(),
                ticks: Vec::new(),
            },
            colorbar: None,
            title: None,
        });
        // With a lower origin row 0 is drawn below row 1
        let y_of = |color: &str| {
            let rect = svg.lines().find(|line| line.contains(color)).unwrap();
            let y_field = rect.split("y=\"").nth(1).unwrap();
            y_field.split('"').next().unwrap().parse::<f64>().unwrap()
        };
        assert!(y_of("#000001") > y_of("#000003"));
        assert!(svg.contains("crispEdges"));
    }

    #[test]
    fn colorbar_adds_gradient() {
        let mut plot = bar_plot(Vec::new());
        plot.colorbar = Some(Colorbar {
            stops: vec![(0.0, "#0049FF".to_string()), (1.0, "#FF0000".to_string())],
            low_label: "0.00".to_string(),
            high_label: "1.00".to_string(),
        });
        let svg = generate_string(&plot);
        assert!(svg.contains("linearGradient"));
        assert!(svg.contains(">0.00</text>"));
        assert!(svg.contains(">1.00</text>"));
    }
}
