//! Aggregate statistics shown on the admin dashboard.
//!
//! Statistics are derived on demand from the registration list and never
//! stored.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::types::Registration;

/// Count of registrations per preference value.
///
/// Iterates in order of first occurrence. Serializes as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferenceCounts(Vec<(String, usize)>);

impl PreferenceCounts {
    /// Count one registration holding `value`. Empty values are ignored.
    fn record(&mut self, value: &str) {
        if value.is_empty() {
            return;
        }
        match self.0.iter_mut().find(|(v, _)| v == value) {
            Some((_, count)) => *count += 1,
            None => self.0.push((value.to_owned(), 1)),
        }
    }

    /// Count for `value`, if any registration holds it.
    #[must_use]
    pub fn get(&self, value: &str) -> Option<usize> {
        self.0.iter().find(|(v, _)| v == value).map(|(_, c)| *c)
    }

    /// Number of distinct values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no value has been counted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `(value, count)` pairs in order of first occurrence.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(v, c)| (v.as_str(), *c))
    }
}

impl Serialize for PreferenceCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (value, count) in &self.0 {
            map.serialize_entry(value, count)?;
        }
        map.end()
    }
}

/// Totals and preference breakdowns over a set of registrations.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_registrations: usize,
    pub total_attendees: u64,
    pub meal_stats: PreferenceCounts,
    pub beverage_stats: PreferenceCounts,
}

impl Statistics {
    /// Derive statistics from `registrations`.
    ///
    /// Registrations with an empty preference still count towards the totals
    /// but not towards that preference's breakdown.
    #[must_use]
    pub fn compute(registrations: &[Registration]) -> Self {
        let mut stats = Self {
            total_registrations: registrations.len(),
            ..Self::default()
        };
        for reg in registrations {
            stats.total_attendees += u64::from(reg.attendees);
            stats.meal_stats.record(&reg.meal_preference);
            stats.beverage_stats.record(&reg.beverage_preference);
        }
        stats
    }

    /// Share of all registrations that `count` represents, as a percentage.
    ///
    /// Used for the dashboard's preference bars. Returns 0 when there are no
    /// registrations.
    #[must_use]
    pub fn percent_of_registrations(&self, count: usize) -> f64 {
        if self.total_registrations == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)] // registration counts stay far below 2^52
        let pct = count as f64 / self.total_registrations as f64 * 100.0;
        pct
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::types::RegistrationDraft;

    fn reg(attendees: u32, meal: &str, beverage: &str) -> Registration {
        RegistrationDraft {
            full_name: "Guest".to_string(),
            email: "guest@example.com".to_string(),
            phone: "123".to_string(),
            attendees,
            meal_preference: meal.to_string(),
            beverage_preference: beverage.to_string(),
            ..RegistrationDraft::default()
        }
        .into_registration(Utc::now())
    }

    #[test]
    fn test_empty_input() {
        let stats = Statistics::compute(&[]);
        assert_eq!(stats.total_registrations, 0);
        assert_eq!(stats.total_attendees, 0);
        assert!(stats.meal_stats.is_empty());
        assert!(stats.beverage_stats.is_empty());
        assert!(stats.percent_of_registrations(3).abs() < f64::EPSILON);
    }

    #[test]
    fn test_total_attendees_is_sum() {
        let regs = [reg(1, "", ""), reg(4, "", ""), reg(2, "", "")];
        let stats = Statistics::compute(&regs);
        assert_eq!(stats.total_registrations, 3);
        assert_eq!(stats.total_attendees, 7);
    }

    #[test]
    fn test_meal_counts_in_first_occurrence_order() {
        let regs = [reg(1, "braai", ""), reg(1, "vegan", ""), reg(1, "braai", "")];
        let stats = Statistics::compute(&regs);
        assert_eq!(stats.meal_stats.get("braai"), Some(2));
        assert_eq!(stats.meal_stats.get("vegan"), Some(1));
        let order: Vec<_> = stats.meal_stats.iter().map(|(v, _)| v).collect();
        assert_eq!(order, ["braai", "vegan"]);
    }

    #[test]
    fn test_empty_preference_only_counts_in_totals() {
        let regs = [reg(2, "", "beer"), reg(1, "vegan", "")];
        let stats = Statistics::compute(&regs);
        assert_eq!(stats.total_registrations, 2);
        assert_eq!(stats.meal_stats.len(), 1);
        assert_eq!(stats.meal_stats.get(""), None);
        assert_eq!(stats.beverage_stats.len(), 1);
        assert_eq!(stats.beverage_stats.get("beer"), Some(1));
    }

    #[test]
    fn test_serializes_as_object() {
        let regs = [reg(1, "braai", "wine"), reg(3, "braai", "")];
        let json = serde_json::to_value(Statistics::compute(&regs)).unwrap();
        assert_eq!(json["totalRegistrations"], 2);
        assert_eq!(json["totalAttendees"], 4);
        assert_eq!(json["mealStats"]["braai"], 2);
        assert_eq!(json["beverageStats"]["wine"], 1);
    }

    #[test]
    fn test_percent_of_registrations() {
        let regs = [reg(1, "braai", ""), reg(1, "", ""), reg(1, "", ""), reg(1, "", "")];
        let stats = Statistics::compute(&regs);
        assert!((stats.percent_of_registrations(1) - 25.0).abs() < 1e-9);
    }
}
