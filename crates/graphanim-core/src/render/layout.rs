//! Seeded force-directed layout
//!
//! Fruchterman-Reingold style: every vertex pair repels, every edge pulls
//! its endpoints together, and displacement per step is capped by a cooling
//! temperature. Start positions come from a seeded `ChaCha8Rng`, so the same
//! graph and seed always give the same drawing.

use std::collections::HashMap;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::graph::{Graph, VertexId};

/// Pairs closer than this are treated as this far apart
const MIN_DISTANCE: f64 = 0.01;

/// Represents a 2D position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance(&self, other: &Self) -> f64 {
        (*other - *self).length()
    }
}

impl Add for Position {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Position::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Position {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Position::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Position {
    type Output = Self;

    fn mul(self, factor: f64) -> Self {
        Position::new(self.x * factor, self.y * factor)
    }
}

impl AddAssign for Position {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl SubAssign for Position {
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

/// Vertex positions, normalized into `[-1, 1]` on both axes
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Layout {
    positions: Vec<(VertexId, Position)>,
}

impl Layout {
    pub fn get(&self, vertex: VertexId) -> Option<Position> {
        self.positions
            .iter()
            .find(|(v, _)| *v == vertex)
            .map(|(_, p)| *p)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(VertexId, Position)> {
        self.positions.iter()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Compute a spring layout for `graph`
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn spring_layout(graph: &Graph, seed: u64, iterations: u32) -> Layout {
    let vertices: Vec<VertexId> = graph.vertices().collect();
    match vertices.len() {
        0 => return Layout::default(),
        1 => {
            return Layout {
                positions: vec![(vertices[0], Position::ORIGIN)],
            }
        }
        _ => {}
    }

    let index: HashMap<VertexId, usize> = vertices
        .iter()
        .enumerate()
        .map(|(i, v)| (*v, i))
        .collect();
    let edges: Vec<(usize, usize)> = graph
        .edges()
        .filter_map(|e| Some((*index.get(&e.a)?, *index.get(&e.b)?)))
        .filter(|(i, j)| i != j)
        .collect();

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut pos: Vec<Position> = vertices
        .iter()
        .map(|_| Position::new(rng.gen::<f64>(), rng.gen::<f64>()))
        .collect();

    let k = (1.0 / vertices.len() as f64).sqrt();
    let mut temperature = spread(&pos) * 0.1;
    let cooling = temperature / (f64::from(iterations) + 1.0);

    for _ in 0..iterations {
        let mut disp = vec![Position::ORIGIN; pos.len()];

        for i in 0..pos.len() {
            for j in 0..pos.len() {
                if i == j {
                    continue;
                }
                let delta = pos[i] - pos[j];
                let dist = delta.length().max(MIN_DISTANCE);
                disp[i] += delta * (k * k / (dist * dist));
            }
        }

        for &(i, j) in &edges {
            let delta = pos[i] - pos[j];
            let dist = delta.length().max(MIN_DISTANCE);
            let pull = delta * (dist / k);
            disp[i] -= pull;
            disp[j] += pull;
        }

        for (p, d) in pos.iter_mut().zip(&disp) {
            let length = d.length().max(MIN_DISTANCE);
            *p += *d * (length.min(temperature) / length);
        }

        temperature -= cooling;
    }

    Layout {
        positions: vertices.into_iter().zip(rescale(pos)).collect(),
    }
}

/// Largest extent of the point cloud along either axis
fn spread(pos: &[Position]) -> f64 {
    let (min_x, max_x) = bounds(pos.iter().map(|p| p.x));
    let (min_y, max_y) = bounds(pos.iter().map(|p| p.y));
    (max_x - min_x).max(max_y - min_y)
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

/// Center on the origin and scale so the farthest coordinate sits at 1
fn rescale(pos: Vec<Position>) -> Vec<Position> {
    let n = pos.len() as f64;
    let center = pos.iter().fold(Position::ORIGIN, |acc, p| acc + *p) * (1.0 / n);
    let centered: Vec<Position> = pos.into_iter().map(|p| p - center).collect();
    let extent = centered
        .iter()
        .map(|p| p.x.abs().max(p.y.abs()))
        .fold(0.0_f64, f64::max);
    if extent < f64::EPSILON {
        return centered;
    }
    centered.into_iter().map(|p| p * (1.0 / extent)).collect()
}
