use crate::core::Cell;
use crate::maze::template::Template;

/// A walkable socket cell must face a walkable cell across the seam.
/// Anything non walkable on the reference side imposes nothing.
pub fn compatible(reference: Cell, other: Cell) -> bool {
    !reference.is_walkable() || other.is_walkable()
}

/// `bottom` placed directly under `top`. Both must have the same size.
pub fn vertically_aligned(top: &Template, bottom: &Template) -> bool {
    let n = top.size();
    debug_assert_eq!(n, bottom.size());
    (0..n).all(|c| {
        compatible(bottom.at(0, c), top.at(n - 2, c)) && compatible(top.at(n - 1, c), bottom.at(1, c))
    })
}

/// `right` placed directly to the right of `left`. Both must have the same size.
pub fn horizontally_aligned(left: &Template, right: &Template) -> bool {
    let n = left.size();
    debug_assert_eq!(n, right.size());
    (0..n).all(|r| {
        compatible(right.at(r, 0), left.at(r, n - 2)) && compatible(left.at(r, n - 1), right.at(r, 1))
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::{Element, Tile};
    use crate::maze::catalog::parse_template;
    use proptest::prelude::*;

    #[test]
    fn compatibility_truth_table() {
        let walkable = [Cell::FLOOR, Cell::GOAL, Cell::new(Tile::Floor, Element::Box)];
        let blocked = [Cell::VOID, Cell::WALL];
        for &r in &walkable {
            for &o in &walkable {
                assert!(compatible(r, o));
            }
            for &o in &blocked {
                assert!(!compatible(r, o), "{r:?} against {o:?}");
            }
        }
        for &r in &blocked {
            for &o in walkable.iter().chain(blocked.iter()) {
                assert!(compatible(r, o));
            }
        }
    }

    proptest! {
        #[test]
        fn compatible_is_false_only_for_walkable_against_blocked(a in 0u8..4, b in 0u8..4) {
            let reference = Cell::try_from(a).unwrap();
            let other = Cell::try_from(b).unwrap();
            let expected = !(reference.is_walkable() && !other.is_walkable());
            prop_assert_eq!(compatible(reference, other), expected);
        }
    }

    #[test]
    fn open_socket_requires_open_neighbour_interior() {
        let top = parse_template(&[
            "_____",
            "_   _",
            "_   _",
            "_   _",
            "__ __",
        ]).unwrap();
        let open_below = parse_template(&[
            "_____",
            "_   _",
            "_   _",
            "_   _",
            "_____",
        ]).unwrap();
        let walled_below = parse_template(&[
            "_____",
            "_###_",
            "_   _",
            "_   _",
            "_____",
        ]).unwrap();
        assert!(vertically_aligned(&top, &open_below));
        assert!(!vertically_aligned(&top, &walled_below));
    }

    #[test]
    fn first_interior_column_must_serve_left_socket() {
        let void = Template::filled(5, Cell::VOID);
        let left_open = parse_template(&[
            "_____",
            "_   _",
            "    _",
            "_   _",
            "_____",
        ]).unwrap();
        // the void template cannot provide floor behind the open socket
        assert!(!horizontally_aligned(&void, &left_open));
        assert!(horizontally_aligned(&left_open, &void));
        let rotated = left_open.rotated(1);
        assert!(!vertically_aligned(&void, &rotated));
    }
}
