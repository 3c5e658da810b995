use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use kdtree_map::{Coordinate, KdTreeMap, Rectangle};

//// Utility functions

pub(crate) fn build_map(coords: &[Coordinate]) -> KdTreeMap<usize> {
    let mut map = KdTreeMap::new();
    for (i, &coord) in coords.iter().enumerate() {
        map.insert(coord, i).unwrap();
    }
    map
}

pub(crate) fn get_random_coords(rect: Rectangle, n: usize, seed: u64) -> Vec<Coordinate> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results = Vec::new();
    for _i in 0..n {
        results.push(Coordinate::new(
            rng.gen_range(rect.x_min, rect.x_max),
            rng.gen_range(rect.y_min, rect.y_max),
        ));
    }

    results
}

/// Square query windows centered on random points, `half_width` per side.
pub(crate) fn get_query_rects(
    rect: Rectangle,
    half_width: f64,
    n: usize,
    seed: u64,
) -> Vec<Rectangle> {
    get_random_coords(rect, n, seed)
        .into_iter()
        .map(|c| {
            Rectangle::new(
                Coordinate::new(c.x - half_width, c.y - half_width),
                Coordinate::new(c.x + half_width, c.y + half_width),
            )
        })
        .collect()
}
