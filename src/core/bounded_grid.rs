use crate::core::bounds::BoundsOriginRoot;
use crate::core::models::Vec2;

/// Row-major rectangular grid. Every row has the same width by construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BoundedGrid<T> {
    bounds: BoundsOriginRoot,
    cells: Vec<T>,
}

impl<T> BoundedGrid<T> {
    pub fn new_with_size(height: i32, width: i32, default: T) -> Self
    where
        T: Clone,
    {
        let bounds = BoundsOriginRoot::new(height.max(0), width.max(0));
        BoundedGrid::new(bounds, default)
    }

    pub fn new(bounds: BoundsOriginRoot, default: T) -> Self
    where
        T: Clone,
    {
        let cells = vec![default; bounds.area() as usize];
        BoundedGrid {
            bounds,
            cells,
        }
    }

    /// Builds a grid from rows, returning `None` when the rows are ragged.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }
        let cells: Vec<T> = rows.into_iter().flatten().collect();
        Some(BoundedGrid {
            bounds: BoundsOriginRoot::new(height as i32, width as i32),
            cells,
        })
    }

    pub fn size(&self) -> BoundsOriginRoot {
        self.bounds
    }

    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, pos: &Vec2) -> bool {
        self.bounds.contains(pos)
    }

    pub fn get(&self, pos: &Vec2) -> Option<&T> {
        if !self.bounds.contains(pos) {
            return None;
        }
        Some(&self[pos])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks panics on zero, and a zero width grid has no cells anyway
        self.cells.chunks(self.bounds.width().max(1) as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Vec2, &T)> {
        self.bounds.positions().zip(self.cells.iter())
    }

    pub fn map<U, F>(&self, f: F) -> BoundedGrid<U>
    where
        F: Fn(&T) -> U,
    {
        BoundedGrid {
            bounds: self.bounds,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    pub fn swap(&mut self, a: &Vec2, b: &Vec2) {
        let a = self.index_of(a);
        let b = self.index_of(b);
        self.cells.swap(a, b);
    }

    fn index_of(&self, pos: &Vec2) -> usize {
        debug_assert!(self.bounds.contains(pos), "{:?} outside of {:?}", pos, self.bounds);
        (pos.i * self.bounds.extent.j + pos.j) as usize
    }
}

impl<T> std::ops::Index<&Vec2> for BoundedGrid<T> {
    type Output = T;

    fn index(&self, index: &Vec2) -> &Self::Output {
        &self.cells[self.index_of(index)]
    }
}

impl<T> std::ops::IndexMut<&Vec2> for BoundedGrid<T> {
    fn index_mut(&mut self, index: &Vec2) -> &mut Self::Output {
        let index = self.index_of(index);
        &mut self.cells[index]
    }
}

impl<T> std::ops::Index<Vec2> for BoundedGrid<T> {
    type Output = T;

    fn index(&self, index: Vec2) -> &Self::Output {
        &self[&index]
    }
}

impl<T> std::ops::IndexMut<Vec2> for BoundedGrid<T> {
    fn index_mut(&mut self, index: Vec2) -> &mut Self::Output {
        &mut self[&index]
    }
}

impl<T: serde::Serialize> serde::Serialize for BoundedGrid<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for BoundedGrid<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<Vec<T>>::deserialize(deserializer)?;
        BoundedGrid::from_rows(rows)
            .ok_or_else(|| serde::de::Error::custom("grid rows must all have the same width"))
    }
}
