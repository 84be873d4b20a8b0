//! Myers' linear space midpoint search.
//!
//! A D-path is a path from (0,0) with exactly D non-diagonal edges. Running the greedy algorithm
//! forward from (0,0) and backward from (N,M) at the same time, the furthest reaching paths of the
//! two searches overlap on a point of some shortest edit path. Splitting the texts at that point
//! leaves two independent, smaller problems.
//!
//! See "An O(ND) Difference Algorithm and Its Variations" by Eugene W. Myers.

use std::ops::{Index, IndexMut};

/// Sentinel for a diagonal which hasn't been reached yet
const UNREACHED: isize = -1;

#[derive(Debug, Clone)]
/// `V` holds, for each diagonal `k`, the x coordinate of the furthest reaching path on it. `y` is
/// recovered as `x - k`.
///
/// `k` can be negative so `V` is a Vec plus an `offset` mapping diagonal `k` to slot `k + offset`.
/// Every slot starts out as [`UNREACHED`].
struct V {
    offset: isize,
    v: Vec<isize>,
}

impl V {
    fn new(offset: usize) -> Self {
        let mut v = Self {
            offset: offset as isize,
            v: vec![UNREACHED; 2 * offset],
        };
        // The starting point, one diagonal to the right of the origin
        v[1] = 0;
        v
    }

    /// Value at diagonal `k`, or `None` if `k` falls outside of the vector or hasn't been reached
    fn get(&self, k: isize) -> Option<isize> {
        usize::try_from(k + self.offset)
            .ok()
            .and_then(|idx| self.v.get(idx))
            .copied()
            .filter(|&x| x != UNREACHED)
    }
}

impl Index<isize> for V {
    type Output = isize;

    fn index(&self, k: isize) -> &Self::Output {
        &self.v[(k + self.offset) as usize]
    }
}

impl IndexMut<isize> for V {
    fn index_mut(&mut self, k: isize) -> &mut Self::Output {
        &mut self.v[(k + self.offset) as usize]
    }
}

/// The diagonals still worth exploring, as distances trimmed off of `-d..=d`.
///
/// Paths which run off the right or bottom edge of the edit graph can't lead anywhere, so the
/// range shrinks from the matching end whenever that happens.
#[derive(Debug, Default)]
struct Frontier {
    start: isize,
    end: isize,
}

impl Frontier {
    fn first(&self, d: isize) -> isize {
        -d + self.start
    }

    fn contains(&self, k: isize, d: isize) -> bool {
        k <= d - self.end
    }
}

/// Step onto diagonal `k` at depth `d`, either down from `k + 1` or right from `k - 1`, whichever
/// neighbor reached further.
fn step(v: &V, k: isize, d: isize) -> isize {
    if k == -d || (k != d && v[k - 1] < v[k + 1]) {
        v[k + 1]
    } else {
        v[k - 1] + 1
    }
}

/// Follow the snake starting at `(x, y)` for as long as `at_old(x) == at_new(y)`
fn follow_snake<T, F, G>(
    mut x: isize,
    mut y: isize,
    n: isize,
    m: isize,
    at_old: F,
    at_new: G,
) -> (isize, isize)
where
    T: PartialEq,
    F: Fn(usize) -> T,
    G: Fn(usize) -> T,
{
    while (0..n).contains(&x) && (0..m).contains(&y) && at_old(x as usize) == at_new(y as usize) {
        x += 1;
        y += 1;
    }
    (x, y)
}

/// Find a point `(x, y)` lying on a shortest edit path between `old` and `new`.
///
/// Returns `None` if the searches never overlap, in which case the caller should replace the whole
/// of `old` with the whole of `new`.
pub(super) fn find_midpoint<T: PartialEq>(old: &[T], new: &[T]) -> Option<(usize, usize)> {
    let n = old.len() as isize;
    let m = new.len() as isize;

    let max_d = (old.len() + new.len()).div_ceil(2);
    // Too small to hold the starting point, nothing worth searching
    if max_d < 2 {
        return None;
    }

    // `vf` searches from the top left, `vb` from the bottom right (both in their own coordinates)
    let mut vf = V::new(max_d);
    let mut vb = V::new(max_d);
    let mut forward = Frontier::default();
    let mut backward = Frontier::default();

    // The searches can only meet on a diagonal whose parity matches `delta`, so only one of the
    // two needs to check for overlap.
    let delta = n - m;
    let check_forward = delta % 2 != 0;

    for d in 0..max_d as isize {
        // Forward path
        let mut k = forward.first(d);
        while forward.contains(k, d) {
            let x = step(&vf, k, d);
            let (x, y) = follow_snake(x, x - k, n, m, |i| &old[i], |j| &new[j]);
            vf[k] = x;

            if x > n {
                // Ran off the right of the graph
                forward.end += 2;
            } else if y > m {
                // Ran off the bottom of the graph
                forward.start += 2;
            } else if check_forward {
                if let Some(xb) = vb.get(delta - k) {
                    if x >= n - xb {
                        return Some(midpoint(x, y, n, m));
                    }
                }
            }
            k += 2;
        }

        // Backward path
        let mut k = backward.first(d);
        while backward.contains(k, d) {
            let x = step(&vb, k, d);
            let (x, y) = follow_snake(
                x,
                x - k,
                n,
                m,
                |i| &old[old.len() - i - 1],
                |j| &new[new.len() - j - 1],
            );
            vb[k] = x;

            if x > n {
                backward.end += 2;
            } else if y > m {
                backward.start += 2;
            } else if !check_forward {
                if let Some(xf) = vf.get(delta - k) {
                    let yf = xf - (delta - k);
                    if xf >= n - x {
                        return Some(midpoint(xf, yf, n, m));
                    }
                }
            }
            k += 2;
        }
    }

    None
}

// The forward path may have overshot the graph, clamp it back onto it.
fn midpoint(x: isize, y: isize, n: isize, m: isize) -> (usize, usize) {
    (x.clamp(0, n) as usize, y.clamp(0, m) as usize)
}
