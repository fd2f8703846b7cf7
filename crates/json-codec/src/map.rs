//! Keyed-container decoder: decodes a JSON object into a mutable
//! associative container through pluggable key/value sub-decoders and an
//! instance factory.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;

use crate::codec::ReadValue;
use crate::error::{BoxError, DecodeError};
use crate::reader::JsonReader;

/// A mutable associative container being populated during decode.
///
/// `put` follows standard associative semantics: a later duplicate key
/// overwrites the earlier entry. Implement this on a custom container to
/// get different insertion behavior.
pub trait Keyed {
    type Key;
    type Value;

    fn put(&mut self, key: Self::Key, value: Self::Value);
}

impl<K: Eq + Hash, V, S: BuildHasher> Keyed for HashMap<K, V, S> {
    type Key = K;
    type Value = V;

    fn put(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

impl<K: Ord, V> Keyed for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn put(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

/// Decoder for keyed containers.
///
/// Holds a key sub-decoder, a value sub-decoder, a zero-argument instance
/// factory, and a diagnostic type label. The decoder itself is immutable
/// and reusable across independent decode calls; each call produces a
/// fresh instance via the factory (or none at all when the stream holds
/// null). Value absence is legal and stored as `None`, so the container's
/// value type is `Option<VR::Value>`.
///
/// `MapDecoder` also implements [`ReadValue`], so it can serve as the
/// value sub-decoder of another `MapDecoder` to decode nested objects.
pub struct MapDecoder<M, KR, VR, F> {
    label: String,
    new_instance: F,
    key_decoder: KR,
    value_decoder: VR,
    _instance: PhantomData<fn() -> M>,
}

impl<M, KR, VR, F> MapDecoder<M, KR, VR, F>
where
    KR: ReadValue,
    VR: ReadValue,
    F: Fn() -> Result<M, BoxError>,
    M: Keyed<Key = KR::Value, Value = Option<VR::Value>>,
{
    pub fn new(
        label: impl Into<String>,
        new_instance: F,
        key_decoder: KR,
        value_decoder: VR,
    ) -> Self {
        Self {
            label: label.into(),
            new_instance,
            key_decoder,
            value_decoder,
            _instance: PhantomData,
        }
    }

    /// Decodes one object. The reader must be positioned at the null
    /// marker or the object-open delimiter.
    ///
    /// Returns `None` for null without creating an instance; otherwise
    /// the factory runs exactly once and the populated instance is
    /// returned. The first error aborts the call.
    pub fn read(&self, reader: &mut JsonReader<'_>) -> Result<Option<M>, DecodeError> {
        if reader.was_null()? {
            return Ok(None);
        }
        if reader.last() != b'{' {
            return Err(reader.expecting("{"));
        }
        let mut instance = (self.new_instance)().map_err(|source| DecodeError::InstanceCreation {
            label: self.label.clone(),
            source,
        })?;
        if reader.next_token()? == b'}' {
            return Ok(Some(instance));
        }
        loop {
            let key = match self.key_decoder.read(reader)? {
                Some(key) => key,
                None => {
                    return Err(DecodeError::NullKey {
                        label: self.label.clone(),
                        position: reader.position(),
                    })
                }
            };
            if reader.next_token()? != b':' {
                return Err(reader.expecting(":"));
            }
            reader.next_token()?;
            let value = self.value_decoder.read(reader)?;
            instance.put(key, value);
            if reader.next_token()? != b',' {
                break;
            }
            reader.next_token()?;
        }
        if reader.last() != b'}' {
            return Err(reader.expecting("}"));
        }
        Ok(Some(instance))
    }
}

impl<M, KR, VR, F> ReadValue for MapDecoder<M, KR, VR, F>
where
    KR: ReadValue,
    VR: ReadValue,
    F: Fn() -> Result<M, BoxError>,
    M: Keyed<Key = KR::Value, Value = Option<VR::Value>>,
{
    type Value = M;

    fn read(&self, reader: &mut JsonReader<'_>) -> Result<Option<M>, DecodeError> {
        MapDecoder::read(self, reader)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::collections::{BTreeMap, HashMap};

    use super::*;
    use crate::boolean::NullableBoolReader;
    use crate::string::StringReader;

    type BoolMap = HashMap<String, Option<bool>>;

    fn bool_map_decoder() -> MapDecoder<BoolMap, StringReader, NullableBoolReader, impl Fn() -> Result<BoolMap, BoxError>>
    {
        MapDecoder::new(
            "map<String, bool>",
            || Ok::<BoolMap, BoxError>(HashMap::new()),
            StringReader,
            NullableBoolReader,
        )
    }

    #[test]
    fn empty_object_invokes_factory_once() {
        let calls = Cell::new(0);
        let decoder = MapDecoder::new(
            "map<String, bool>",
            || {
                calls.set(calls.get() + 1);
                Ok::<BoolMap, BoxError>(HashMap::new())
            },
            StringReader,
            NullableBoolReader,
        );
        let mut reader = JsonReader::new(b"{}").unwrap();
        let map = decoder.read(&mut reader).unwrap().unwrap();
        assert!(map.is_empty());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn null_returns_absence_without_factory_call() {
        let calls = Cell::new(0);
        let decoder = MapDecoder::new(
            "map<String, bool>",
            || {
                calls.set(calls.get() + 1);
                Ok::<BoolMap, BoxError>(HashMap::new())
            },
            StringReader,
            NullableBoolReader,
        );
        let mut reader = JsonReader::new(b"null").unwrap();
        assert!(decoder.read(&mut reader).unwrap().is_none());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn decodes_pairs() {
        let decoder = bool_map_decoder();
        let mut reader = JsonReader::new(br#"{"a":true,"b":false}"#).unwrap();
        let map = decoder.read(&mut reader).unwrap().unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["a"], Some(true));
        assert_eq!(map["b"], Some(false));
    }

    #[test]
    fn null_value_is_stored_as_absence() {
        let decoder = bool_map_decoder();
        let mut reader = JsonReader::new(br#"{"a":null}"#).unwrap();
        let map = decoder.read(&mut reader).unwrap().unwrap();
        assert_eq!(map["a"], None);
    }

    #[test]
    fn duplicate_keys_collapse_to_last_value() {
        let decoder = bool_map_decoder();
        let mut reader = JsonReader::new(br#"{"a":true,"a":false}"#).unwrap();
        let map = decoder.read(&mut reader).unwrap().unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["a"], Some(false));
    }

    #[test]
    fn null_key_is_rejected_with_position() {
        let decoder = bool_map_decoder();
        let mut reader = JsonReader::new(b"{null:true}").unwrap();
        let err = decoder.read(&mut reader).unwrap_err();
        match err {
            DecodeError::NullKey { label, position } => {
                assert_eq!(label, "map<String, bool>");
                assert_eq!(position, 5);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn null_key_after_prior_pairs_is_rejected() {
        let decoder = bool_map_decoder();
        let mut reader = JsonReader::new(br#"{"a":true,null:false}"#).unwrap();
        let err = decoder.read(&mut reader).unwrap_err();
        assert!(matches!(err, DecodeError::NullKey { .. }));
    }

    #[test]
    fn missing_separator_names_expected_token() {
        let decoder = bool_map_decoder();
        let mut reader = JsonReader::new(br#"{"a" true}"#).unwrap();
        let err = decoder.read(&mut reader).unwrap_err();
        match err {
            DecodeError::Syntax {
                expected, found, ..
            } => {
                assert_eq!(expected, ":");
                assert_eq!(found, 't');
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_object_open_is_rejected() {
        let decoder = bool_map_decoder();
        let mut reader = JsonReader::new(b"[true]").unwrap();
        let err = decoder.read(&mut reader).unwrap_err();
        match err {
            DecodeError::Syntax { expected, .. } => assert_eq!(expected, "{"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_object_close_is_rejected() {
        let decoder = bool_map_decoder();
        let mut reader = JsonReader::new(br#"{"a":true]"#).unwrap();
        let err = decoder.read(&mut reader).unwrap_err();
        match err {
            DecodeError::Syntax { expected, .. } => assert_eq!(expected, "}"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn factory_failure_is_wrapped_with_label() {
        let decoder = MapDecoder::new(
            "map<String, bool>",
            || Err::<BoolMap, BoxError>("out of handles".into()),
            StringReader,
            NullableBoolReader,
        );
        let mut reader = JsonReader::new(b"{}").unwrap();
        let err = decoder.read(&mut reader).unwrap_err();
        match err {
            DecodeError::InstanceCreation { label, source } => {
                assert_eq!(label, "map<String, bool>");
                assert_eq!(source.to_string(), "out of handles");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn btree_map_is_a_keyed_container() {
        let decoder = MapDecoder::new(
            "sorted map<String, bool>",
            || Ok::<BTreeMap<String, Option<bool>>, BoxError>(BTreeMap::new()),
            StringReader,
            NullableBoolReader,
        );
        let mut reader = JsonReader::new(br#"{"b":false,"a":true}"#).unwrap();
        let map = decoder.read(&mut reader).unwrap().unwrap();
        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, ["a", "b"]);
    }

    #[test]
    fn whitespace_between_tokens_is_skipped() {
        let decoder = bool_map_decoder();
        let mut reader = JsonReader::new(b"{ \"a\" : true , \"b\" : null }").unwrap();
        let map = decoder.read(&mut reader).unwrap().unwrap();
        assert_eq!(map["a"], Some(true));
        assert_eq!(map["b"], None);
    }
}
