mod aligner;
mod builder;
mod catalog;
mod reducer;
mod template;

pub use aligner::{compatible, horizontally_aligned, vertically_aligned};
pub use builder::{BuildError, MazeBuilder};
pub use catalog::{parse_template, CatalogError, TemplateCatalog};
pub use reducer::{reduce_maze, remove_extra_walls, strip_void_lines};
pub use template::Template;
