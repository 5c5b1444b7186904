use serde::{Deserialize, Serialize};

use super::DifficultyTier;

/// Rating of one difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub stars: u32,
    /// Branching charts are not modeled; always false.
    pub branch: bool,
}

impl Course {
    pub fn new(stars: u32) -> Self {
        Self {
            stars,
            branch: false,
        }
    }
}

/// One optional course per difficulty tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSet {
    pub easy: Option<Course>,
    pub normal: Option<Course>,
    pub hard: Option<Course>,
    pub oni: Option<Course>,
    pub ura: Option<Course>,
}

impl CourseSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, tier: DifficultyTier) -> Option<&Course> {
        match tier {
            DifficultyTier::Easy => self.easy.as_ref(),
            DifficultyTier::Normal => self.normal.as_ref(),
            DifficultyTier::Hard => self.hard.as_ref(),
            DifficultyTier::Oni => self.oni.as_ref(),
            DifficultyTier::Ura => self.ura.as_ref(),
        }
    }

    pub fn slot_mut(&mut self, tier: DifficultyTier) -> &mut Option<Course> {
        match tier {
            DifficultyTier::Easy => &mut self.easy,
            DifficultyTier::Normal => &mut self.normal,
            DifficultyTier::Hard => &mut self.hard,
            DifficultyTier::Oni => &mut self.oni,
            DifficultyTier::Ura => &mut self.ura,
        }
    }

    pub fn set(&mut self, tier: DifficultyTier, course: Course) {
        *self.slot_mut(tier) = Some(course);
    }

    pub fn contains(&self, tier: DifficultyTier) -> bool {
        self.get(tier).is_some()
    }

    /// Populated tiers in ordinal order
    pub fn iter(&self) -> impl Iterator<Item = (DifficultyTier, &Course)> {
        DifficultyTier::ALL
            .into_iter()
            .filter_map(|tier| self.get(tier).map(|course| (tier, course)))
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_course_set() {
        let courses = CourseSet::new();
        assert!(courses.is_empty());
        assert_eq!(courses.len(), 0);
        assert!(courses.get(DifficultyTier::Oni).is_none());
    }

    #[test]
    fn test_set_and_iterate_in_tier_order() {
        let mut courses = CourseSet::new();
        courses.set(DifficultyTier::Ura, Course::new(10));
        courses.set(DifficultyTier::Easy, Course::new(2));

        let tiers: Vec<_> = courses.iter().map(|(tier, _)| tier).collect();
        assert_eq!(tiers, vec![DifficultyTier::Easy, DifficultyTier::Ura]);
        assert_eq!(courses.get(DifficultyTier::Ura).map(|c| c.stars), Some(10));
        assert!(!courses.contains(DifficultyTier::Hard));
    }

    #[test]
    fn test_serialized_shape() {
        let mut courses = CourseSet::new();
        courses.set(DifficultyTier::Oni, Course::new(8));

        let json = serde_json::to_value(courses).unwrap();
        assert_eq!(json["oni"]["stars"], 8);
        assert_eq!(json["oni"]["branch"], false);
        assert!(json["easy"].is_null());
        assert!(json["ura"].is_null());
    }
}
