use crate::game_engine::SpeedObserver;
use crate::models::color::Rgb;
use crate::models::constants::TITLE;
use crate::models::speed::Speed;
use crate::models::world::World;

const CELL_WIDTH: usize = 3;
const PANE_GAP: &str = "   ";
/// Lines above the top grid border: title and a blank spacer.
const HEADER_LINES: usize = 2;

/// The marker glyph and where it sits in a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub row: usize,
    pub column: usize,
    pub glyph: char,
    pub color: Rgb,
}

/// One character of the pen trail and its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stroke {
    pub row: usize,
    pub column: usize,
    pub glyph: char,
    pub color: Rgb,
}

/// One rendered screen. Lines are plain ASCII; trail and marker glyphs are
/// already present in them and are repeated in `strokes` and `marker` so a
/// color-capable writer can paint over them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub lines: Vec<String>,
    pub strokes: Vec<Stroke>,
    pub marker: Option<Marker>,
}

impl Frame {
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Side panel listing the key bindings and the current speed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoPane {
    speed: Speed,
}

impl InfoPane {
    pub fn new(speed: Speed) -> Self {
        InfoPane { speed }
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn lines(&self) -> Vec<String> {
        vec![
            "COMMANDS:".to_string(),
            "FORWARD: UP ARROW".to_string(),
            "RIGHT: RIGHT ARROW".to_string(),
            "LEFT: LEFT ARROW".to_string(),
            "COLOR: C".to_string(),
            "CHANGE SPEED: F/S".to_string(),
            "EXIT: Q".to_string(),
            String::new(),
            format!("SPEED: {}", self.speed),
        ]
    }
}

impl SpeedObserver for InfoPane {
    fn speed_changed(&mut self, speed: Speed) {
        self.speed = speed;
    }
}

pub struct GridPresenter;

impl GridPresenter {
    /// Render the grid with one cell per lattice point, top row first, the
    /// trail drawn between cells, and the info pane to its right when given.
    ///
    /// Lattice rows are separated by spacer lines that carry the vertical
    /// trail segments; horizontal segments fill the gap between two cells.
    pub fn frame(world: &World, info: Option<&InfoPane>) -> Frame {
        let boundaries = world.boundaries();
        let actor = world.actor();
        let cell = boundaries.cell_of(actor.position());

        let inner_width = boundaries.columns() * CELL_WIDTH;
        let inner_height = boundaries.rows() * 2 - 1;
        let mut canvas = vec![vec![' '; inner_width]; inner_height];
        for row in 0..boundaries.rows() {
            for column in 0..boundaries.columns() {
                canvas[row * 2][column * CELL_WIDTH + 1] = '.';
            }
        }

        let mut strokes = Vec::with_capacity(world.trail().len() * 2);
        for segment in world.trail().segments() {
            let (Some(a), Some(b)) = (boundaries.cell_of(segment.from), boundaries.cell_of(segment.to))
            else {
                continue;
            };
            let (column, row) = (a.0.min(b.0), a.1.min(b.1));
            let painted: Vec<(usize, usize, char)> = if a.1 == b.1 {
                let x = column * CELL_WIDTH + 1;
                vec![(row * 2, x + 1, '-'), (row * 2, x + 2, '-')]
            } else {
                vec![(row * 2 + 1, column * CELL_WIDTH + 1, '|')]
            };
            for (y, x, glyph) in painted {
                canvas[y][x] = glyph;
                strokes.push(Stroke {
                    row: HEADER_LINES + 1 + y,
                    column: 1 + x,
                    glyph,
                    color: segment.color,
                });
            }
        }

        let marker = cell.map(|(column, row)| {
            let (y, x) = (row * 2, column * CELL_WIDTH + 1);
            canvas[y][x] = actor.heading().glyph();
            Marker {
                // +1 for the top border and for the side border
                row: HEADER_LINES + 1 + y,
                column: 1 + x,
                glyph: actor.heading().glyph(),
                color: actor.color(),
            }
        });

        let border = format!("+{}+", "-".repeat(inner_width));
        let mut grid = Vec::with_capacity(inner_height + 2);
        grid.push(border.clone());
        for chars in canvas {
            let mut line = String::with_capacity(inner_width + 2);
            line.push('|');
            line.extend(chars);
            line.push('|');
            grid.push(line);
        }
        grid.push(border);

        if let Some(pane) = info {
            let grid_width = inner_width + 2;
            let pane_lines = pane.lines();
            if pane_lines.len() > grid.len() {
                grid.resize(pane_lines.len(), String::new());
            }
            for (line, pane_line) in grid.iter_mut().zip(pane_lines) {
                let pad = grid_width - line.len();
                line.push_str(&" ".repeat(pad));
                line.push_str(PANE_GAP);
                line.push_str(&pane_line);
            }
        }

        let mut lines = Vec::with_capacity(grid.len() + HEADER_LINES);
        lines.push(TITLE.to_string());
        lines.push(String::new());
        lines.extend(grid);

        Frame {
            lines,
            strokes,
            marker,
        }
    }
}
