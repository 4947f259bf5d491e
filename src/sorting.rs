//! Painter's-algorithm ordering of prepared faces.

use crate::face::Face;

/// Indices of `faces` in back-to-front paint order.
///
/// Faces are first ordered by their farthest depth (`z_max`, descending),
/// then adjacent pairs are swapped with bubble passes wherever
/// [`Face::is_in_front_of`] says the earlier face occludes the later one and
/// not the other way round. Passes are capped at `faces.len()`, so scenes
/// that break the convex, non-intersecting precondition still terminate
/// with some order.
///
/// Every face must have been through [`Face::prepare_for_sort`].
pub fn paint_order(faces: &[Face], treat_as_outside: bool) -> Vec<usize> {
    let mut order: Vec<usize> = (0..faces.len()).collect();
    order.sort_by(|&a, &b| {
        faces[b]
            .extrema()
            .z_max
            .total_cmp(&faces[a].extrema().z_max)
    });

    let len = order.len();
    for i in 0..len {
        let mut swapped = false;
        for j in 0..len - i - 1 {
            let back = &faces[order[j]];
            let front = &faces[order[j + 1]];
            if back.is_in_front_of(front, treat_as_outside)
                && !front.is_in_front_of(back, treat_as_outside)
            {
                order.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }

    log::debug!("paint order for {} faces: {:?}", len, order);
    order
}
