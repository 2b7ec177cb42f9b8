use serde::{de, Deserialize, Deserializer, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TripPlan {
    pub destination: String,
    pub duration: String,
    pub highlights: Vec<String>,
    pub itinerary: Vec<ItineraryDay>,
    pub tips: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ItineraryDay {
    #[serde(deserialize_with = "day_number")]
    pub day: u32,
    pub activities: Vec<String>,
}

// Models often emit JSON numbers like `1.0` for day indexes.
fn day_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if value.fract() == 0.0 && value >= 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(de::Error::custom(format!("invalid itinerary day {}", value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_whole_number_days() {
        let day: ItineraryDay =
            serde_json::from_value(json!({ "day": 2.0, "activities": ["Hike"] })).unwrap();
        assert_eq!(day.day, 2);

        let day: ItineraryDay =
            serde_json::from_value(json!({ "day": 3, "activities": [] })).unwrap();
        assert_eq!(day.day, 3);
    }

    #[test]
    fn rejects_fractional_or_negative_days() {
        assert!(serde_json::from_value::<ItineraryDay>(json!({ "day": 1.5, "activities": [] })).is_err());
        assert!(serde_json::from_value::<ItineraryDay>(json!({ "day": -1, "activities": [] })).is_err());
    }
}
