use log::debug;
use rand::Rng;
use thiserror::Error;
use crate::config::BuilderConfig;
use crate::core::{Cell, Maze, Vec2};
use crate::maze::aligner::{horizontally_aligned, vertically_aligned};
use crate::maze::catalog::TemplateCatalog;
use crate::maze::template::Template;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("no template satisfies the sockets at ({x}, {y}) after {draws} draws")]
    NoSatisfyingTemplate { x: usize, y: usize, draws: usize },
    #[error("template grid range {min}..{max} is empty")]
    EmptySizeRange { min: usize, max: usize },
}

/// Assembles mazes out of catalog templates. Each grid slot is filled by
/// rejection sampling against its already placed top and left neighbours;
/// there is no backtracking across slots.
pub struct MazeBuilder<'a> {
    catalog: &'a TemplateCatalog,
    config: &'a BuilderConfig,
}

impl<'a> MazeBuilder<'a> {
    pub fn new(catalog: &'a TemplateCatalog, config: &'a BuilderConfig) -> Self {
        MazeBuilder { catalog, config }
    }

    pub fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Maze, BuildError> {
        let (min, max) = (self.config.min_tiles, self.config.max_tiles);
        if min >= max {
            return Err(BuildError::EmptySizeRange { min, max });
        }
        let width = rng.random_range(min..max);
        let height = rng.random_range(min..max);
        debug!("building {}x{} template maze", width, height);

        let templates = self.pick_templates(width, height, rng)?;
        Ok(self.stitch(width, height, &templates))
    }

    pub fn pick_templates<R: Rng + ?Sized>(
        &self,
        width: usize,
        height: usize,
        rng: &mut R,
    ) -> Result<Vec<Vec<Template>>, BuildError> {
        let mut rows: Vec<Vec<Template>> = Vec::with_capacity(height);
        for y in 0..height {
            let mut row: Vec<Template> = Vec::with_capacity(width);
            for x in 0..width {
                let top = if y > 0 { Some(&rows[y - 1][x]) } else { None };
                let left = row.last();
                let template = self.find_template(
                    x,
                    y,
                    y == height - 1,
                    x == width - 1,
                    top,
                    left,
                    rng,
                )?;
                row.push(template);
            }
            rows.push(row);
        }
        Ok(rows)
    }

    #[allow(clippy::too_many_arguments)]
    fn find_template<R: Rng + ?Sized>(
        &self,
        x: usize,
        y: usize,
        is_bottom_edge: bool,
        is_right_edge: bool,
        top: Option<&Template>,
        left: Option<&Template>,
        rng: &mut R,
    ) -> Result<Template, BuildError> {
        let boundary = self.catalog.boundary();
        let top = top.unwrap_or(boundary);
        let left = left.unwrap_or(boundary);

        for _ in 0..self.config.max_template_draws {
            let index = rng.random_range(0..self.catalog.len());
            let rotations = rng.random_range(0..4);
            let Some(template) = self.catalog.get(index) else {
                continue;
            };
            let template = template.rotated(rotations);
            if vertically_aligned(top, &template)
                && horizontally_aligned(left, &template)
                && (!is_bottom_edge || vertically_aligned(&template, boundary))
                && (!is_right_edge || horizontally_aligned(&template, boundary))
            {
                return Ok(template);
            }
        }
        Err(BuildError::NoSatisfyingTemplate {
            x,
            y,
            draws: self.config.max_template_draws,
        })
    }

    /// Copies template interiors into one grid surrounded by a wall ring.
    pub fn stitch(&self, width: usize, height: usize, templates: &[Vec<Template>]) -> Maze {
        let fill = self.catalog.boundary().fill_size();
        let mut maze = Maze::new_with_size(
            2 + fill * height as i32,
            2 + fill * width as i32,
            Cell::WALL,
        );
        for (y, row) in templates.iter().enumerate() {
            for (x, template) in row.iter().enumerate() {
                for ti in 0..fill {
                    for tj in 0..fill {
                        let pos = Vec2 {
                            i: 1 + fill * y as i32 + ti,
                            j: 1 + fill * x as i32 + tj,
                        };
                        maze[pos] = template.at(1 + ti, 1 + tj);
                    }
                }
            }
        }
        maze
    }
}
