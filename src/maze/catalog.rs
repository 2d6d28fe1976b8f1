use std::path::Path;
use thiserror::Error;
use crate::core::{BoundedGrid, Cell, Tile};
use crate::maze::template::Template;

// '#' wall, ' ' floor, '_' void. A floor cell on the border is an open socket.
const BUILTIN_TEMPLATES: &[[&str; 5]] = &[
    [
        "_____",
        "_____",
        "_____",
        "_____",
        "_____",
    ],
    [
        "_____",
        "_   _",
        "_   _",
        "_   _",
        "_____",
    ],
    [
        "_____",
        "_#  _",
        "_   _",
        "_   _",
        "_____",
    ],
    [
        "_____",
        "_## _",
        "_   _",
        "_   _",
        "_____",
    ],
    [
        "_____",
        "_   _",
        "_ # _",
        "_   _",
        "_____",
    ],
    [
        "_____",
        "_#  _",
        "_#  _",
        "_   _",
        "_____",
    ],
    [
        "_____",
        "_# #_",
        "_   _",
        "_# #_",
        "_____",
    ],
    [
        "__ __",
        "_   _",
        "_## _",
        "_   _",
        "__ __",
    ],
    [
        "_____",
        "_ # _",
        "_   _",
        "_ # _",
        "_____",
    ],
    [
        "_____",
        "_   _",
        " ## _",
        "_   _",
        "_____",
    ],
    [
        "_____",
        "_## _",
        "_#  _",
        "_   _",
        "_____",
    ],
    [
        "__ __",
        "_# #_",
        "     ",
        "_# #_",
        "__ __",
    ],
    [
        "_____",
        "_ # _",
        "_ # _",
        "_   _",
        "_____",
    ],
    [
        "_____",
        "_   _",
        "_ # _",
        "_   _",
        "__ __",
    ],
    [
        "_____",
        "_#  _",
        "_  #_",
        "_   _",
        "_____",
    ],
    [
        "_____",
        "_###_",
        "_   _",
        "_   _",
        "__ __",
    ],
    [
        "_____",
        "_   _",
        "_   _",
        "_###_",
        "_____",
    ],
];

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("template {index} is not a square of at least 3x3 cells")]
    NotSquare { index: usize },
    #[error("template {index} has size {found}, expected {expected}")]
    SizeMismatch { index: usize, expected: i32, found: i32 },
    #[error("template {index} contains unsupported character {found:?}")]
    UnknownCharacter { index: usize, found: char },
    #[error("catalog has no templates")]
    Empty,
    #[error("cannot read template file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse template file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read-only set of prefab rooms used to assemble mazes, plus the all-void
/// template standing in for everything beyond the maze edge.
#[derive(Clone, Debug)]
pub struct TemplateCatalog {
    templates: Vec<Template>,
    boundary: Template,
}

fn parse_tile(ch: char) -> Option<Tile> {
    match ch {
        '#' => Some(Tile::Wall),
        ' ' => Some(Tile::Floor),
        '.' => Some(Tile::Goal),
        '_' => Some(Tile::Void),
        _ => None,
    }
}

fn parse_indexed(index: usize, rows: &[&str]) -> Result<Template, CatalogError> {
    let mut grid_rows = Vec::with_capacity(rows.len());
    for row in rows {
        let mut cells = Vec::with_capacity(row.len());
        for ch in row.chars() {
            let tile = parse_tile(ch).ok_or(CatalogError::UnknownCharacter { index, found: ch })?;
            cells.push(Cell::tile(tile));
        }
        grid_rows.push(cells);
    }
    BoundedGrid::from_rows(grid_rows)
        .and_then(Template::new)
        .ok_or(CatalogError::NotSquare { index })
}

pub fn parse_template(rows: &[&str]) -> Result<Template, CatalogError> {
    parse_indexed(0, rows)
}

impl TemplateCatalog {
    pub fn new(templates: Vec<Template>) -> Result<TemplateCatalog, CatalogError> {
        let first = templates.first().ok_or(CatalogError::Empty)?;
        let expected = first.size();
        if let Some((index, t)) = templates.iter().enumerate().find(|(_, t)| t.size() != expected) {
            return Err(CatalogError::SizeMismatch { index, expected, found: t.size() });
        }
        Ok(TemplateCatalog {
            boundary: Template::filled(expected, Cell::VOID),
            templates,
        })
    }

    pub fn builtin() -> TemplateCatalog {
        let templates = BUILTIN_TEMPLATES
            .iter()
            .enumerate()
            .map(|(index, rows)| parse_indexed(index, rows))
            .collect::<Result<Vec<_>, _>>()
            .expect("built-in templates are well formed");
        TemplateCatalog::new(templates).expect("built-in templates share one size")
    }

    /// Parses a JSON array of templates, each an array of row strings.
    pub fn from_json_str(json: &str) -> Result<TemplateCatalog, CatalogError> {
        let raw: Vec<Vec<String>> = serde_json::from_str(json)?;
        let templates = raw
            .iter()
            .enumerate()
            .map(|(index, rows)| {
                let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
                parse_indexed(index, &rows)
            })
            .collect::<Result<Vec<_>, _>>()?;
        TemplateCatalog::new(templates)
    }

    pub fn from_json_file(path: &Path) -> Result<TemplateCatalog, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        TemplateCatalog::from_json_str(&json)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Template> {
        self.templates.get(index)
    }

    pub fn boundary(&self) -> &Template {
        &self.boundary
    }

    pub fn template_size(&self) -> i32 {
        self.boundary.size()
    }
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        TemplateCatalog::builtin()
    }
}
