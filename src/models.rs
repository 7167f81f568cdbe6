//models.rs
use serde::Deserialize;

/// One workout entry as it appears in workouts.json. Only `title` is
/// required; section fields that are absent simply don't render.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct WorkoutRecord {
    pub title: String,
    #[serde(default)]
    pub warmup: Option<Vec<String>>,
    #[serde(default)]
    pub strength: Option<Vec<String>>,
    #[serde(default)]
    pub practice: Option<Vec<String>>,
    #[serde(default)]
    pub wod: Option<Vec<String>>,
    #[serde(default)]
    pub workout: Option<Vec<String>>,
}

/// Top-level shape of workouts.json: two named, ordered collections.
/// Replaced wholesale on load, never mutated in place.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct WorkoutDataset {
    #[serde(default)]
    pub crossfit: Vec<WorkoutRecord>,
    #[serde(default)]
    pub engine: Vec<WorkoutRecord>,
}

impl WorkoutDataset {
    pub fn len(&self) -> usize {
        self.crossfit.len() + self.engine.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crossfit.is_empty() && self.engine.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Crossfit,
    Engine,
}

impl Category {
    pub fn badge(self) -> &'static str {
        match self {
            Category::Crossfit => "CrossFit",
            Category::Engine => "Engine",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Filter {
    All,
    Crossfit,
    Engine,
}

impl Filter {
    /// Tab set in display order.
    pub const TABS: [Filter; 3] = [Filter::All, Filter::Crossfit, Filter::Engine];

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Crossfit => "CrossFit",
            Filter::Engine => "Engine",
        }
    }

    pub fn includes(self, category: Category) -> bool {
        match self {
            Filter::All => true,
            Filter::Crossfit => category == Category::Crossfit,
            Filter::Engine => category == Category::Engine,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_parses_with_only_title() {
        let record: WorkoutRecord = serde_json::from_str(r#"{"title": "Rest Day"}"#).unwrap();
        assert_eq!(record.title, "Rest Day");
        assert!(record.warmup.is_none());
        assert!(record.strength.is_none());
        assert!(record.practice.is_none());
        assert!(record.wod.is_none());
        assert!(record.workout.is_none());
    }

    #[test]
    fn dataset_parses_with_missing_category() {
        let dataset: WorkoutDataset =
            serde_json::from_str(r#"{"engine": [{"title": "Row", "workout": ["5k row"]}]}"#)
                .unwrap();
        assert!(dataset.crossfit.is_empty());
        assert_eq!(dataset.engine.len(), 1);
        assert_eq!(
            dataset.engine[0].workout.as_deref(),
            Some(&["5k row".to_string()][..])
        );
    }

    #[test]
    fn dataset_preserves_record_order() {
        let dataset: WorkoutDataset = serde_json::from_str(
            r#"{"crossfit": [{"title": "Mon"}, {"title": "Tue"}, {"title": "Wed"}], "engine": []}"#,
        )
        .unwrap();
        let titles: Vec<&str> = dataset.crossfit.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["Mon", "Tue", "Wed"]);
        assert_eq!(dataset.len(), 3);
        assert!(!dataset.is_empty());
    }

    #[test]
    fn filter_includes_expected_categories() {
        assert!(Filter::All.includes(Category::Crossfit));
        assert!(Filter::All.includes(Category::Engine));
        assert!(Filter::Crossfit.includes(Category::Crossfit));
        assert!(!Filter::Crossfit.includes(Category::Engine));
        assert!(Filter::Engine.includes(Category::Engine));
        assert!(!Filter::Engine.includes(Category::Crossfit));
    }
}
