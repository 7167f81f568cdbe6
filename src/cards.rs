//cards.rs
use crate::models::{Category, WorkoutRecord};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineStyle {
    Plain,
    Bold,
    /// Highlighted treatment for "time cap" lines inside a WOD section.
    TimeCap,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CardLine {
    pub text: String,
    pub style: LineStyle,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CardSection {
    pub heading: &'static str,
    pub lines: Vec<CardLine>,
}

/// Display-ready form of one record. Owned by the grid for a single
/// render and rebuilt from scratch on every re-render.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedCard {
    pub title: String,
    pub category: Category,
    pub sections: Vec<CardSection>,
    /// Entrance delay in seconds, assigned by the grid builder.
    pub delay: f32,
}

impl RenderedCard {
    pub fn badge(&self) -> &'static str {
        self.category.badge()
    }
}

fn is_time_cap(line: &str) -> bool {
    line.to_ascii_lowercase().contains("time cap:")
}

fn section(heading: &'static str, lines: &[String], style: LineStyle) -> CardSection {
    CardSection {
        heading,
        lines: lines
            .iter()
            .map(|text| CardLine {
                text: text.clone(),
                style,
            })
            .collect(),
    }
}

fn wod_section(lines: &[String]) -> CardSection {
    CardSection {
        heading: "WOD",
        lines: lines
            .iter()
            .map(|text| CardLine {
                text: text.clone(),
                style: if is_time_cap(text) {
                    LineStyle::TimeCap
                } else {
                    LineStyle::Bold
                },
            })
            .collect(),
    }
}

/// Builds the card for one record. Crossfit cards get one section per
/// populated field in the fixed order WARM UP, STRENGTH, PRACTICE, WOD;
/// engine cards get a single WORKOUT section. A record with no populated
/// fields is a header-only card.
pub fn format_card(record: &WorkoutRecord, category: Category) -> RenderedCard {
    let mut sections = Vec::new();

    match category {
        Category::Crossfit => {
            if let Some(lines) = &record.warmup {
                sections.push(section("WARM UP", lines, LineStyle::Plain));
            }
            if let Some(lines) = &record.strength {
                sections.push(section("STRENGTH", lines, LineStyle::Bold));
            }
            if let Some(lines) = &record.practice {
                sections.push(section("PRACTICE", lines, LineStyle::Plain));
            }
            if let Some(lines) = &record.wod {
                sections.push(wod_section(lines));
            }
        }
        Category::Engine => {
            if let Some(lines) = &record.workout {
                sections.push(section("WORKOUT", lines, LineStyle::Bold));
            }
        }
    }

    RenderedCard {
        title: record.title.clone(),
        category,
        sections,
        delay: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Option<Vec<String>> {
        Some(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn crossfit_sections_come_in_fixed_order() {
        let record = WorkoutRecord {
            title: "Monday".to_string(),
            warmup: lines(&["3 rounds easy"]),
            strength: lines(&["Back squat 5x5"]),
            practice: lines(&["Handstand holds"]),
            wod: lines(&["21-15-9 thrusters"]),
            workout: None,
        };
        let card = format_card(&record, Category::Crossfit);
        let headings: Vec<&str> = card.sections.iter().map(|s| s.heading).collect();
        assert_eq!(headings, ["WARM UP", "STRENGTH", "PRACTICE", "WOD"]);
        assert_eq!(card.badge(), "CrossFit");
    }

    #[test]
    fn absent_fields_are_skipped_without_reordering() {
        let record = WorkoutRecord {
            title: "Tuesday".to_string(),
            strength: lines(&["Deadlift 3x3"]),
            wod: lines(&["5 rounds for time"]),
            ..Default::default()
        };
        let card = format_card(&record, Category::Crossfit);
        let headings: Vec<&str> = card.sections.iter().map(|s| s.heading).collect();
        assert_eq!(headings, ["STRENGTH", "WOD"]);
    }

    #[test]
    fn line_styles_per_section() {
        let record = WorkoutRecord {
            title: "Wednesday".to_string(),
            warmup: lines(&["row 500m"]),
            strength: lines(&["Press 5x3"]),
            practice: lines(&["Double unders"]),
            ..Default::default()
        };
        let card = format_card(&record, Category::Crossfit);
        assert_eq!(card.sections[0].lines[0].style, LineStyle::Plain);
        assert_eq!(card.sections[1].lines[0].style, LineStyle::Bold);
        assert_eq!(card.sections[2].lines[0].style, LineStyle::Plain);
    }

    #[test]
    fn wod_time_cap_line_is_highlighted() {
        let record = WorkoutRecord {
            title: "Thursday".to_string(),
            wod: lines(&["Time cap: 20 min", "21-15-9 thrusters"]),
            ..Default::default()
        };
        let card = format_card(&record, Category::Crossfit);
        let wod = &card.sections[0];
        assert_eq!(wod.lines.len(), 2);
        assert_eq!(wod.lines[0].style, LineStyle::TimeCap);
        assert_eq!(wod.lines[0].text, "Time cap: 20 min");
        assert_eq!(wod.lines[1].style, LineStyle::Bold);
        assert_eq!(wod.lines[1].text, "21-15-9 thrusters");
    }

    #[test]
    fn time_cap_match_is_case_insensitive() {
        assert!(is_time_cap("TIME CAP: 12 min"));
        assert!(is_time_cap("time cap: 12 min"));
        assert!(is_time_cap("For time, Time Cap: 8 min"));
        assert!(!is_time_cap("no cap here"));
    }

    #[test]
    fn engine_card_has_single_workout_section_with_bold_lines() {
        let record = WorkoutRecord {
            title: "Erg Day".to_string(),
            workout: lines(&["5x1000m row", "2 min rest"]),
            ..Default::default()
        };
        let card = format_card(&record, Category::Engine);
        assert_eq!(card.sections.len(), 1);
        assert_eq!(card.sections[0].heading, "WORKOUT");
        assert!(card.sections[0]
            .lines
            .iter()
            .all(|l| l.style == LineStyle::Bold));
        assert_eq!(card.badge(), "Engine");
    }

    #[test]
    fn engine_card_ignores_crossfit_fields() {
        let record = WorkoutRecord {
            title: "Mixed".to_string(),
            warmup: lines(&["jog"]),
            wod: lines(&["amrap 12"]),
            workout: lines(&["30 min zone 2"]),
            ..Default::default()
        };
        let card = format_card(&record, Category::Engine);
        let headings: Vec<&str> = card.sections.iter().map(|s| s.heading).collect();
        assert_eq!(headings, ["WORKOUT"]);
    }

    #[test]
    fn record_without_sections_yields_header_only_card() {
        let record = WorkoutRecord {
            title: "Rest Day".to_string(),
            ..Default::default()
        };
        let card = format_card(&record, Category::Crossfit);
        assert_eq!(card.title, "Rest Day");
        assert!(card.sections.is_empty());
    }
}
