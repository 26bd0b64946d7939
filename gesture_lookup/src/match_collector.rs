use super::Match;

/// Files candidate matches as they are produced, keeping at most `max` of
/// them, sorted best score first, with a single entry per template name.
pub struct MatchCollector<'a> {
    max: usize,
    matches: &'a mut Vec<Match>,
}

impl<'a> MatchCollector<'a> {
    pub fn new(matches: &mut Vec<Match>, max: usize) -> MatchCollector {
        assert!(max > 0, "Expected a positive number for the maximum number of matches.");
        assert!(matches.is_empty(), "The pre-existing matches vector must be empty.");
        MatchCollector { max, matches }
    }

    // Returns true if the new match must be skipped because the same name
    // is already filed with a better score.
    fn remove_existing_lower(&mut self, mc: &Match) -> bool {
        let ix = match self.matches.iter().position(|x| x.name == mc.name) {
            Some(ix) => ix,
            // Not there yet: we're good, match doesn't need to be skipped
            None => return false,
        };
        // New score is not better: skip new match
        if mc.score <= self.matches[ix].score {
            return true;
        }
        // Remove existing match; don't skip new.
        self.matches.remove(ix);
        false
    }

    pub fn file_match(&mut self, mc: Match) {
        // Already at limit: don't bother if the new score is below the current minimum
        if self.matches.len() == self.max && mc.score <= self.matches[self.matches.len() - 1].score {
            return;
        }
        // Remove if we already have this name with a lower score
        if self.remove_existing_lower(&mc) {
            return;
        }
        // Where does the new match go? (Keep the vector sorted, largest score first.)
        let ix = self.matches.iter().position(|x| x.score < mc.score);
        match ix {
            Some(ix) => self.matches.insert(ix, mc),
            None => self.matches.push(mc),
        }
        // Beyond limit? Drop last item.
        if self.matches.len() > self.max {
            self.matches.pop();
        }
    }
}
