use chrono::{Local, NaiveDateTime, SubsecRound};
use serde::{Deserialize, Serialize};

/// On-disk timestamp layout: sortable, second precision.
pub const STORE_TIME_FMT: &str = "%Y%m%d%H%M%S";
pub const DISPLAY_TIME_FMT: &str = "%Y-%m-%d, %H:%M";
pub const DEFAULT_TITLE: &str = "Untitled";
/// Appended to a list label taken from multi-line content.
pub const MULTILINE_MARK: &str = "(...)";

/// A single note. `id` is positional: it always equals the note's 1-based
/// index in its notebook once the notebook has been saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: usize,
    #[serde(with = "stamp")]
    pub created: NaiveDateTime,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "stamp::option"
    )]
    pub edited: Option<NaiveDateTime>,
    pub title: String,
    pub content: String,
}

impl Note {
    pub fn new(
        id: usize,
        content: &str,
        title: Option<&str>,
        created: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            created,
            edited: None,
            title: normalize_title(title),
            content: content.to_string(),
        }
    }

    /// The timestamp shown to the user: last edit, else creation.
    pub fn last_touched(&self) -> NaiveDateTime {
        self.edited.unwrap_or(self.created)
    }

    pub fn display_time(&self) -> String {
        self.last_touched().format(DISPLAY_TIME_FMT).to_string()
    }

    /// One-line label for list views. Untitled notes are labelled by the
    /// first line of their content.
    pub fn list_label(&self) -> String {
        if self.title != DEFAULT_TITLE {
            return self.title.clone();
        }
        let first = self.content.lines().next().unwrap_or("");
        if first.trim().is_empty() {
            return DEFAULT_TITLE.to_string();
        }
        if self.content.contains('\n') {
            format!("{first}{MULTILINE_MARK}")
        } else {
            first.to_string()
        }
    }
}

/// Missing, empty and whitespace-only titles all become "Untitled".
pub fn normalize_title(title: Option<&str>) -> String {
    match title {
        Some(t) if !t.trim().is_empty() => t.to_string(),
        _ => DEFAULT_TITLE.to_string(),
    }
}

/// Current local time, truncated to what the store can represent.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(0)
}

pub fn parse_stamp(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, STORE_TIME_FMT).ok()
}

pub fn format_stamp(dt: &NaiveDateTime) -> String {
    dt.format(STORE_TIME_FMT).to_string()
}

/// Serde adapter for `YYYYMMDDHHMMSS` strings.
pub(crate) mod stamp {
    use chrono::NaiveDateTime;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        dt: &NaiveDateTime,
        s: S,
    ) -> Result<S::Ok, S::Error> {
        s.serialize_str(&super::format_stamp(dt))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_stamp(&raw).ok_or_else(|| {
            D::Error::custom(format!(
                "invalid timestamp `{raw}`, expected YYYYMMDDHHMMSS"
            ))
        })
    }

    pub mod option {
        use chrono::NaiveDateTime;
        use serde::de::Error as _;
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            dt: &Option<NaiveDateTime>,
            s: S,
        ) -> Result<S::Ok, S::Error> {
            match dt {
                Some(dt) => s.serialize_some(&super::super::format_stamp(dt)),
                None => s.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            d: D,
        ) -> Result<Option<NaiveDateTime>, D::Error> {
            match Option::<String>::deserialize(d)? {
                None => Ok(None),
                Some(raw) => super::super::parse_stamp(&raw)
                    .map(Some)
                    .ok_or_else(|| {
                        D::Error::custom(format!(
                            "invalid timestamp `{raw}`, expected YYYYMMDDHHMMSS"
                        ))
                    }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(raw: &str) -> NaiveDateTime {
        parse_stamp(raw).unwrap()
    }

    #[test]
    fn test_normalize_title() {
        assert_eq!(normalize_title(None), "Untitled");
        assert_eq!(normalize_title(Some("")), "Untitled");
        assert_eq!(normalize_title(Some("   ")), "Untitled");
        assert_eq!(normalize_title(Some("Groceries")), "Groceries");
    }

    #[test]
    fn test_display_time_prefers_edited() {
        let mut note = Note::new(1, "body", None, at("20220527215900"));
        assert_eq!(note.display_time(), "2022-05-27, 21:59");
        note.edited = Some(at("20220601080510"));
        assert_eq!(note.display_time(), "2022-06-01, 08:05");
    }

    #[test]
    fn test_list_label() {
        let created = at("20220527215900");
        let titled = Note::new(1, "ignored", Some("Greeting"), created);
        assert_eq!(titled.list_label(), "Greeting");

        let single = Note::new(2, "This is another example", None, created);
        assert_eq!(single.list_label(), "This is another example");

        let multi = Note::new(3, "first line\nsecond line", None, created);
        assert_eq!(multi.list_label(), "first line(...)");

        let trailing = Note::new(4, "hello\n", None, created);
        assert_eq!(trailing.list_label(), "hello(...)");

        let padded = Note::new(5, "spaced out  ", None, created);
        assert_eq!(padded.list_label(), "spaced out  ");

        let blank = Note::new(6, "", None, created);
        assert_eq!(blank.list_label(), "Untitled");
    }

    #[test]
    fn test_serialized_shape() {
        let mut note = Note::new(1, "hello", None, at("20240102030405"));
        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(json["created"], "20240102030405");
        assert!(json.get("edited").is_none());

        note.edited = Some(at("20240102040000"));
        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(json["edited"], "20240102040000");
    }

    #[test]
    fn test_bad_timestamp_is_rejected() {
        let raw = r#"{"id":1,"created":"yesterday","title":"t","content":"c"}"#;
        let err = serde_json::from_str::<Note>(raw).unwrap_err();
        assert!(err.to_string().contains("YYYYMMDDHHMMSS"));
    }

    #[test]
    fn test_now_has_no_subseconds() {
        use chrono::Timelike;
        assert_eq!(now().nanosecond(), 0);
    }
}
