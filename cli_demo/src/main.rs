extern crate serde_derive;
extern crate gesture_lookup;

use serde_derive::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::time::Instant;

use gesture_lookup::{Point, Recognizer, Rect};

const ITERS: usize = 1_000;

// One recorded gesture: its intended name and the captured stroke points.
#[derive(Serialize, Deserialize)]
struct Sample {
    name: String,
    points: Vec<Vec<f32>>,
}

fn read_samples(fname: &str) -> Vec<Sample> {
    let mut res: Vec<Sample> = Vec::new();
    let file = File::open(fname).expect("Failed to open file.");
    for line in BufReader::new(file).lines() {
        let line = line.expect("Line huh?");
        if line.is_empty() {
            continue;
        }
        let sample: Sample = serde_json::from_str(&line).unwrap();
        res.push(sample);
    }
    res
}

fn get_points(raw: &[Vec<f32>]) -> Vec<Point> {
    let mut points: Vec<Point> = Vec::with_capacity(raw.len());
    for pt in raw {
        points.push(Point {
            x: pt[0],
            y: pt[1],
        });
    }
    points
}

fn main() {
    tracing_subscriber::fmt::init();
    let fname = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "debug/gestures.txt".to_owned());
    println!("Loading evaluation data.");
    let samples = read_samples(&fname);

    // The first sample of each name becomes its template; every later
    // sample of that name is a query.
    let mut recognizer = Recognizer::new(Rect::new(0.0, 0.0, 250.0, 250.0));
    let mut queries: Vec<(String, Vec<Point>)> = Vec::new();
    for sample in &samples {
        let points = get_points(&sample.points);
        let known = recognizer.templates().any(|(name, _)| name == sample.name);
        if known {
            queries.push((sample.name.clone(), points));
        } else {
            recognizer
                .add_template(&sample.name, &points)
                .expect("Bad template stroke.");
        }
    }
    println!(
        "Loaded {} templates and {} queries; starting {} cycles of evaluation.",
        recognizer.template_count(),
        queries.len(),
        ITERS
    );

    let start = Instant::now();
    let mut guessed = 0;
    for _ in 0..ITERS {
        for (name, points) in &queries {
            match recognizer.recognize(points) {
                Ok(best) if best.name == *name => guessed += 1,
                _ => {}
            }
        }
    }
    let duration = start.elapsed();
    println!("Finished in {:?}. Correct guesses: {}.", duration, guessed);
}
