//! Serde support: a history serializes as a plain list, oldest reading first

use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

use crate::ReadingSequence;

impl<T: Serialize> Serialize for ReadingSequence<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

struct SequenceVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for SequenceVisitor<T> {
    type Value = ReadingSequence<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a list of readings")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut sequence = ReadingSequence::new();
        let mut readings = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(value) = seq.next_element()? {
            readings.push(value);
        }
        sequence.extend(readings);
        Ok(sequence)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ReadingSequence<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(SequenceVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_serializes_as_list() {
        let history: ReadingSequence<i32> = [10, 20, 30].into_iter().collect();
        let json = serde_json::to_string(&history).unwrap();
        assert_eq!(json, "[10,20,30]");
    }

    #[test]
    fn test_history_deserializes_in_order() {
        let history: ReadingSequence<f32> = serde_json::from_str("[5.0, 1.0, 3.0]").unwrap();
        assert_eq!(history.len(), 3);
        assert_eq!(history.first(), Some(&5.0));
        assert_eq!(history.last(), Some(&3.0));
    }

    #[test]
    fn test_rejects_non_list() {
        let result: Result<ReadingSequence<i32>, _> = serde_json::from_str("{\"v\": 1}");
        assert!(result.is_err());
    }
}
