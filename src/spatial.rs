//! Axis-selectable spatial sort over point sets.
//!
//! Builds a lightweight index over a point sequence and sorts it in place
//! by one coordinate axis, leaving the points themselves untouched. The
//! index borrows the points, so the point sequence must outlive it.

use crate::core::{Axis, Sequence, Vec3};
use crate::error::{Error, Result};

/// One entry of the sorted index: the point's position in the original
/// sequence and a borrowed reference to it.
#[derive(Debug, Clone, Copy)]
pub struct PointNode<'a> {
    /// Index into the original, unsorted point sequence
    pub index: u32,
    /// The referenced point
    pub point: &'a Vec3,
}

/// Pivot-at-end partition over the selected coordinate.
///
/// Scans left to right, swapping every element `<=` the pivot value into
/// the next low slot, then swaps the pivot into its final position and
/// returns it.
fn partition(nodes: &mut [PointNode<'_>], axis: Axis, start: isize, end: isize) -> isize {
    let pivot_value = nodes[end as usize].point.axis(axis);
    let mut i = start - 1;
    for j in start..end {
        if nodes[j as usize].point.axis(axis) <= pivot_value {
            i += 1;
            nodes.swap(i as usize, j as usize);
        }
    }
    i += 1;
    nodes.swap(i as usize, end as usize);
    i
}

fn quicksort(nodes: &mut [PointNode<'_>], axis: Axis, start: isize, end: isize) {
    if end <= start {
        return;
    }
    let pivot = partition(nodes, axis, start, end);
    quicksort(nodes, axis, start, pivot - 1);
    quicksort(nodes, axis, pivot + 1, end);
}

/// Build and sort an index over `points` by the selected axis.
///
/// On success `nodes` holds exactly one entry per point, ordered
/// non-decreasingly on the chosen coordinate, each entry still carrying the
/// point's original index. Ties may reorder (the sort is unstable), and
/// pre-sorted input hits the quicksort's O(n²) worst case; both are
/// accepted characteristics of the always-last pivot strategy.
///
/// Fails with [`Error::Capacity`] and performs no work when the destination
/// capacity is below the point count.
pub fn sort_by_axis<'a>(
    nodes: &mut Sequence<PointNode<'a>>,
    axis: Axis,
    points: &'a Sequence<Vec3>,
) -> Result<()> {
    if nodes.capacity() < points.len() {
        log::error!(
            "Node capacity {} must match point count {}",
            nodes.capacity(),
            points.len()
        );
        return Err(Error::Capacity {
            capacity: nodes.capacity(),
            required: points.len(),
        });
    }

    nodes.clear();
    for (i, point) in points.into_iter().enumerate() {
        nodes.push(PointNode {
            index: i as u32,
            point,
        })?;
    }

    quicksort(
        nodes.as_mut_slice(),
        axis,
        0,
        points.len() as isize - 1,
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points_from(coords: &[(f32, f32, f32)]) -> Sequence<Vec3> {
        let mut points = Sequence::new();
        for &(x, y, z) in coords {
            points.push(Vec3::new(x, y, z)).unwrap();
        }
        points
    }

    fn sorted_nodes(points: &Sequence<Vec3>, axis: Axis) -> Sequence<PointNode<'_>> {
        let mut nodes = Sequence::new();
        nodes.reserve(points.len()).unwrap();
        sort_by_axis(&mut nodes, axis, points).unwrap();
        nodes
    }

    #[test]
    fn test_sort_on_x_axis() {
        let points = points_from(&[(3.0, 0.0, 0.0), (1.0, 0.0, 0.0), (2.0, 0.0, 0.0)]);
        let nodes = sorted_nodes(&points, Axis::X);

        let order: Vec<u32> = nodes.into_iter().map(|n| n.index).collect();
        assert_eq!(order, vec![1, 2, 0]);
        assert_eq!(nodes[0].point.x, 1.0);
        assert_eq!(nodes[1].point.x, 2.0);
        assert_eq!(nodes[2].point.x, 3.0);
    }

    #[test]
    fn test_sort_each_axis_non_decreasing() {
        let points = points_from(&[
            (5.0, -1.0, 9.0),
            (2.0, 4.0, -3.0),
            (8.0, 0.0, 0.5),
            (-1.0, 2.5, 7.0),
            (3.0, 3.0, 3.0),
            (0.0, -6.0, 1.0),
        ]);

        for axis in [Axis::X, Axis::Y, Axis::Z] {
            let nodes = sorted_nodes(&points, axis);
            assert_eq!(nodes.len(), points.len());
            for pair in nodes.as_slice().windows(2) {
                assert!(pair[0].point.axis(axis) <= pair[1].point.axis(axis));
            }
        }
    }

    #[test]
    fn test_sort_is_a_permutation() {
        let points = points_from(&[
            (4.0, 1.0, 0.0),
            (4.0, 2.0, 0.0),
            (-2.0, 3.0, 0.0),
            (7.0, 4.0, 0.0),
            (0.0, 5.0, 0.0),
        ]);
        let nodes = sorted_nodes(&points, Axis::X);

        let mut seen: Vec<u32> = nodes.into_iter().map(|n| n.index).collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);

        // Each node still references its original point
        for node in &nodes {
            assert_eq!(node.point.x, points[node.index as usize].x);
        }
    }

    #[test]
    fn test_capacity_error_performs_no_work() {
        let points = points_from(&[(3.0, 0.0, 0.0), (1.0, 0.0, 0.0), (2.0, 0.0, 0.0)]);
        let mut nodes: Sequence<PointNode<'_>> = Sequence::new();
        // Capacity 0 < 3 points: new() has no backing storage yet
        let err = sort_by_axis(&mut nodes, Axis::X, &points).unwrap_err();
        match err {
            Error::Capacity { capacity, required } => {
                assert_eq!(capacity, 0);
                assert_eq!(required, 3);
            }
            other => panic!("expected capacity error, got {other}"),
        }
        assert!(nodes.is_empty());
    }

    #[test]
    fn test_sort_with_duplicate_coordinates() {
        let points = points_from(&[(1.0, 0.0, 0.0), (1.0, 1.0, 0.0), (0.5, 2.0, 0.0)]);
        let nodes = sorted_nodes(&points, Axis::X);

        assert_eq!(nodes[0].index, 2);
        // The two ties land in positions 1 and 2 in either order
        let mut tied: Vec<u32> = vec![nodes[1].index, nodes[2].index];
        tied.sort_unstable();
        assert_eq!(tied, vec![0, 1]);
    }

    #[test]
    fn test_sort_already_sorted_input() {
        let points = points_from(&[(1.0, 0.0, 0.0), (2.0, 0.0, 0.0), (3.0, 0.0, 0.0)]);
        let nodes = sorted_nodes(&points, Axis::X);
        let order: Vec<u32> = nodes.into_iter().map(|n| n.index).collect();
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn test_sort_empty_points() {
        let points: Sequence<Vec3> = Sequence::new();
        let mut nodes = Sequence::new();
        sort_by_axis(&mut nodes, Axis::Z, &points).unwrap();
        assert!(nodes.is_empty());
    }

    #[test]
    fn test_resort_replaces_previous_index() {
        let points = points_from(&[(2.0, 9.0, 0.0), (1.0, 3.0, 0.0)]);
        let mut nodes = Sequence::new();
        nodes.reserve(points.len()).unwrap();
        sort_by_axis(&mut nodes, Axis::X, &points).unwrap();
        assert_eq!(nodes[0].index, 1);

        sort_by_axis(&mut nodes, Axis::Y, &points).unwrap();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].index, 1);
        assert_eq!(nodes[1].index, 0);
    }
}
