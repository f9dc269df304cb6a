use indexmap::IndexMap;
use itertools::{Itertools, MinMaxResult};

/// A tag that survived threshold filtering, ready for display.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightedTag {
    pub name: String,
    pub count: usize,
    /// Relative weight on a 0..1 scale.
    pub weight: f64,
}

impl WeightedTag {
    /// Discrete weight bucket from 0 to 10, for styling with a fixed
    /// set of size classes.
    pub fn bucket(&self) -> u32 {
        (self.weight * 10.0).round() as u32
    }

    /// Map the weight into an output range, eg. font sizes.
    ///
    /// Expects `min < max`, checking this is up to the caller.
    pub fn scaled(&self, min: f64, max: f64) -> f64 {
        min + self.weight * (max - min)
    }
}

/// Turn a tag count mapping into a display-ordered weighted list.
///
/// Tags with fewer than `min_occurrences` occurrences are dropped.
/// Weights interpolate linearly between the smallest and largest
/// surviving count, and when every survivor shares one count they all
/// get weight zero. The result is sorted by tag name with a
/// case-insensitive comparison so display order does not depend on
/// collection order.
///
/// An empty result means either that `counts` was empty to begin with
/// or that no tag met the threshold. Callers that care which, say to
/// show a different message, check `counts.is_empty()` themselves.
pub fn normalize(
    counts: &IndexMap<String, usize>,
    min_occurrences: usize,
) -> Vec<WeightedTag> {
    let survivors: Vec<(&str, usize)> = counts
        .iter()
        .filter(|&(_, &n)| n >= min_occurrences)
        .map(|(name, &n)| (name.as_str(), n))
        .collect();

    let (min_count, max_count) =
        match survivors.iter().map(|&(_, n)| n).minmax() {
            MinMaxResult::NoElements => return Vec::new(),
            MinMaxResult::OneElement(n) => (n, n),
            MinMaxResult::MinMax(a, b) => (a, b),
        };

    // A shared count would make the range zero, use one instead so
    // everything lands on the low end rather than dividing by zero.
    let range = (max_count - min_count).max(1) as f64;

    survivors
        .into_iter()
        .map(|(name, count)| WeightedTag {
            name: name.to_owned(),
            count,
            weight: (count - min_count) as f64 / range,
        })
        .sorted_by(|a, b| {
            (a.name.to_lowercase(), &a.name)
                .cmp(&(b.name.to_lowercase(), &b.name))
        })
        .collect()
}
