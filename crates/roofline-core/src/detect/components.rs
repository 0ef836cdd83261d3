use std::collections::HashMap;

use ndarray::Array2;

use crate::geometry::BoundingBox;

/// A connected region of the edge map.
///
/// Intermediate only: regions are produced by labeling, consumed by the
/// filter stages, and never persisted.
#[derive(Clone, Debug)]
pub struct Region {
    /// Resolved component label.
    pub label: u32,
    /// Pixel count of the component.
    pub area: usize,
    /// Smallest enclosing axis-aligned rectangle.
    pub bbox: BoundingBox,
}

/// Label connected components of a binary mask with two-pass union-find,
/// using 8-connectivity (the four already-scanned neighbors: left, upper
/// left, up, upper right).
///
/// Regions come back in scan order of their first pixel.
pub fn label_regions(mask: &Array2<bool>) -> Vec<Region> {
    let (h, w) = mask.dim();
    if h == 0 || w == 0 {
        return Vec::new();
    }

    let mut labels = Array2::<u32>::zeros((h, w));
    let mut next_label: u32 = 1;
    // Union-find parent array. Index 0 unused; labels start at 1.
    let mut parent: Vec<u32> = vec![0; h * w / 2 + 2];

    // Pass 1: assign provisional labels, unioning across all previously
    // scanned 8-neighbors.
    for row in 0..h {
        for col in 0..w {
            if !mask[[row, col]] {
                continue;
            }

            let mut neighbors = [0u32; 4];
            let mut n = 0;
            if col > 0 && labels[[row, col - 1]] > 0 {
                neighbors[n] = labels[[row, col - 1]];
                n += 1;
            }
            if row > 0 {
                if col > 0 && labels[[row - 1, col - 1]] > 0 {
                    neighbors[n] = labels[[row - 1, col - 1]];
                    n += 1;
                }
                if labels[[row - 1, col]] > 0 {
                    neighbors[n] = labels[[row - 1, col]];
                    n += 1;
                }
                if col + 1 < w && labels[[row - 1, col + 1]] > 0 {
                    neighbors[n] = labels[[row - 1, col + 1]];
                    n += 1;
                }
            }

            if n == 0 {
                if next_label as usize >= parent.len() {
                    parent.resize(parent.len() * 2, 0);
                }
                parent[next_label as usize] = next_label;
                labels[[row, col]] = next_label;
                next_label += 1;
            } else {
                let smallest = *neighbors[..n].iter().min().unwrap();
                labels[[row, col]] = smallest;
                for &other in &neighbors[..n] {
                    if other != smallest {
                        union(&mut parent, smallest, other);
                    }
                }
            }
        }
    }

    // Flatten parent references.
    for i in 1..next_label as usize {
        parent[i] = find(&parent, i as u32);
    }

    // Pass 2: resolve labels and collect region stats.
    let mut regions: HashMap<u32, Region> = HashMap::new();
    let mut order: Vec<u32> = Vec::new();

    for row in 0..h {
        for col in 0..w {
            let lbl = labels[[row, col]];
            if lbl == 0 {
                continue;
            }
            let root = parent[lbl as usize];

            let entry = regions.entry(root).or_insert_with(|| {
                order.push(root);
                Region {
                    label: root,
                    area: 0,
                    bbox: BoundingBox::new(row, col, row, col),
                }
            });

            entry.area += 1;
            entry.bbox.min_row = entry.bbox.min_row.min(row);
            entry.bbox.max_row = entry.bbox.max_row.max(row);
            entry.bbox.min_col = entry.bbox.min_col.min(col);
            entry.bbox.max_col = entry.bbox.max_col.max(col);
        }
    }

    order
        .into_iter()
        .map(|root| regions.remove(&root).unwrap())
        .collect()
}

fn find(parent: &[u32], mut x: u32) -> u32 {
    while parent[x as usize] != x {
        x = parent[x as usize];
    }
    x
}

fn union(parent: &mut [u32], a: u32, b: u32) {
    let ra = find(parent, a);
    let rb = find(parent, b);
    if ra != rb {
        // Merge larger root into smaller root to keep labels consistent.
        let (small, big) = if ra < rb { (ra, rb) } else { (rb, ra) };
        parent[big as usize] = small;
    }
}
