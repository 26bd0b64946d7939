use std::collections::HashMap;

use super::geometry::Rect;
use super::match_collector::MatchCollector;
use super::matcher;
use super::normalized_stroke::NormalizedStroke;
use super::{Error, Match, Point};

// One named template: the raw points as registered, plus the normalized
// form actually used for matching.
struct Template {
    raw: Vec<Point>,
    normalized: NormalizedStroke,
}

/// The recognizer facade: a store of named templates plus the region whose
/// size serves as the reference square for normalization.
pub struct Recognizer {
    templates: HashMap<String, Template>,
    region: Rect,
}

impl Recognizer {
    /// Creates a recognizer with an empty template store.
    pub fn new(region: Rect) -> Recognizer {
        Recognizer {
            templates: HashMap::new(),
            region,
        }
    }

    /// Creates a recognizer pre-loaded with raw template strokes.
    pub fn with_templates(
        templates: HashMap<String, Vec<Point>>,
        region: Rect,
    ) -> Result<Recognizer, Error> {
        let mut recognizer = Recognizer::new(region);
        for (name, points) in &templates {
            recognizer.add_template(name, points)?;
        }
        Ok(recognizer)
    }

    pub fn region(&self) -> Rect {
        self.region
    }

    /// Changes the reference square and renormalizes every stored template
    /// against it. Stored templates and future queries are therefore always
    /// normalized against the same square.
    pub fn set_region(&mut self, region: Rect) {
        self.region = region;
        for template in self.templates.values_mut() {
            // Raw points were validated when the template was registered.
            template.normalized = NormalizedStroke::from_validated(&template.raw, &region);
        }
    }

    /// Read-only view of the raw, pre-normalization template points.
    pub fn templates(&self) -> impl Iterator<Item = (&str, &[Point])> {
        self.templates
            .iter()
            .map(|(name, template)| (name.as_str(), template.raw.as_slice()))
    }

    pub fn template_count(&self) -> usize {
        self.templates.len()
    }

    /// Registers a template under `name`, replacing any previous template
    /// with the same name.
    pub fn add_template(&mut self, name: &str, points: &[Point]) -> Result<(), Error> {
        let normalized = NormalizedStroke::new(points, &self.region)?;
        tracing::debug!(name, points = points.len(), "template registered");
        self.templates.insert(
            name.to_owned(),
            Template {
                raw: points.to_vec(),
                normalized,
            },
        );
        Ok(())
    }

    /// Removes the template under `name`. Removing an unknown name is a no-op.
    pub fn remove_template(&mut self, name: &str) {
        if self.templates.remove(name).is_some() {
            tracing::debug!(name, "template removed");
        }
    }

    /// Scores the query stroke against every stored template and returns
    /// the winner.
    pub fn recognize(&self, points: &[Point]) -> Result<Match, Error> {
        self.rank(points, 1)?
            .into_iter()
            .next()
            .ok_or(Error::NoTemplates)
    }

    /// Scores the query stroke against every stored template and returns
    /// the best `limit` matches, best first.
    pub fn rank(&self, points: &[Point], limit: usize) -> Result<Vec<Match>, Error> {
        if self.templates.is_empty() {
            return Err(Error::NoTemplates);
        }
        // Normalized once; the rotation search shares this stroke across
        // all template comparisons.
        let query = NormalizedStroke::new(points, &self.region)?;
        let half_diagonal = 0.5
            * (self.region.width * self.region.width + self.region.height * self.region.height)
                .sqrt();
        let mut matches: Vec<Match> = Vec::with_capacity(limit);
        let mut collector = MatchCollector::new(&mut matches, limit);
        for (name, template) in &self.templates {
            let distance = matcher::distance_at_best_angle(&query, &template.normalized);
            tracing::trace!(template = name.as_str(), distance, "template compared");
            collector.file_match(Match {
                name: name.clone(),
                score: 1.0 - distance / half_diagonal,
            });
        }
        if let Some(best) = matches.first() {
            tracing::debug!(name = best.name.as_str(), score = best.score, "best match");
        }
        Ok(matches)
    }
}
