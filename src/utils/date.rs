pub const DATE_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f";

pub mod serializer {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::DATE_FMT;

    pub fn serialize<S: Serializer>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        time.format(DATE_FMT).to_string().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let str_time: String = Deserialize::deserialize(deserializer)?;
        let time = NaiveDateTime::parse_from_str(&str_time, DATE_FMT).map_err(D::Error::custom)?;
        Ok(time)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use serde::{Deserialize, Serialize};
    use crate::utils::date::serializer;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Stamped {
        #[serde(with = "serializer")]
        at: NaiveDateTime,
    }

    #[test]
    fn test_should_serialize_with_date_format() {
        let at = NaiveDate::from_ymd_opt(2023, 10, 14).and_then(|d| d.and_hms_milli_opt(9, 30, 0, 250)).expect("valid date");
        let json = serde_json::to_string(&Stamped { at }).expect("should serialize");
        assert_eq!(r#"{"at":"2023-10-14T09:30:00.250"}"#, json);
        let parsed: Stamped = serde_json::from_str(json.as_str()).expect("should parse");
        assert_eq!(at, parsed.at);
    }

    #[test]
    fn test_should_reject_bad_date() {
        assert!(serde_json::from_str::<Stamped>(r#"{"at":"yesterday"}"#).is_err());
    }
}
