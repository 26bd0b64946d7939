extern crate wasm_bindgen;
extern crate serde_derive;

mod geometry;
mod match_collector;
mod matcher;
mod normalized_stroke;
mod recognizer;

use serde_derive::{Deserialize, Serialize};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

pub use geometry::Rect;
pub use normalized_stroke::NUM_POINTS;
pub use recognizer::Recognizer;

/// A single stroke point, in the caller's coordinate space.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// One scored template. A perfect match scores 1; scores fall off with
/// distance and can go negative for very poor matches.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Match {
    pub name: String,
    pub score: f32,
}

/// Failure modes of recognition and template registration.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// The stroke has fewer than two points, or all its points coincide.
    #[error("stroke is too short to recognize")]
    TooShort,
    /// Recognition was requested before any template was registered.
    #[error("no templates registered")]
    NoTemplates,
}

// Drawing canvases on the JS side are 250x250 unless the caller says otherwise.
const DEFAULT_REGION: Rect = Rect {
    x: 0.0,
    y: 0.0,
    width: 250.0,
    height: 250.0,
};

thread_local!(static RECOGNIZER: RefCell<Recognizer> = RefCell::new(Recognizer::new(DEFAULT_REGION)));

#[wasm_bindgen]
pub fn add_template(name: &str, points: &JsValue) -> bool {
    // Input is a vector of [x, y] pairs - how stroke points are represented in JS
    let input: Vec<Vec<f32>> = points.into_serde().unwrap();
    let points = to_points(&input);
    RECOGNIZER.with(|recognizer| recognizer.borrow_mut().add_template(name, &points).is_ok())
}

#[wasm_bindgen]
pub fn remove_template(name: &str) {
    RECOGNIZER.with(|recognizer| {
        recognizer.borrow_mut().remove_template(name);
    });
}

#[wasm_bindgen]
pub fn recognize(points: &JsValue, limit: usize) -> String {
    let input: Vec<Vec<f32>> = points.into_serde().unwrap();
    let points = to_points(&input);
    let matches = recognize_typed(&points, limit);
    serde_json::to_string(&matches).unwrap()
}

fn to_points(input: &[Vec<f32>]) -> Vec<Point> {
    let mut points: Vec<Point> = Vec::with_capacity(input.len());
    for pair in input {
        points.push(Point {
            x: pair[0],
            y: pair[1],
        });
    }
    points
}

/// Ranks the query against the thread-local recognizer's templates.
/// Strokes that cannot be normalized, or an empty store, yield no matches.
pub fn recognize_typed(points: &[Point], limit: usize) -> Vec<Match> {
    RECOGNIZER.with(|recognizer| {
        recognizer
            .borrow()
            .rank(points, limit)
            .unwrap_or_default()
    })
}
