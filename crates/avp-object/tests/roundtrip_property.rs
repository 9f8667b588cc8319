use diameter_avp_object::{Avp, AvpTranslator, AvpValue, NameTable, Scalar};
use proptest::prelude::*;

const NAMES: &[&str] = &[
    "Session-Id",
    "Origin-Host",
    "Origin-Realm",
    "Result-Code",
    "Auth-Application-Id",
    "CC-Request-Type",
    "CC-Request-Number",
    "Subscription-Id",
    "Subscription-Id-Type",
    "Subscription-Id-Data",
];

fn translator() -> AvpTranslator {
    AvpTranslator::with_table(NameTable::from_names(NAMES.iter().copied()))
}

// Floats are left out: NaN breaks structural equality.
fn scalar_strategy() -> impl Strategy<Value = Scalar> {
    prop_oneof![
        any::<bool>().prop_map(Scalar::Bool),
        any::<i64>().prop_map(Scalar::Integer),
        any::<u64>().prop_map(Scalar::Unsigned),
        "[a-z0-9]{0,12}".prop_map(Scalar::Str),
        proptest::collection::vec(any::<u8>(), 0..16).prop_map(Scalar::Bytes),
    ]
}

fn value_strategy(depth: u32, level: fn(u32) -> BoxedStrategy<Vec<Avp>>) -> BoxedStrategy<AvpValue> {
    if depth == 0 {
        scalar_strategy().prop_map(AvpValue::Scalar).boxed()
    } else {
        prop_oneof![
            3 => scalar_strategy().prop_map(AvpValue::Scalar),
            1 => level(depth - 1).prop_map(AvpValue::Grouped),
        ]
        .boxed()
    }
}

/// Sequences whose names are distinct at every nesting level; these
/// round-trip without any repeat folding.
fn unique_name_level(depth: u32) -> BoxedStrategy<Vec<Avp>> {
    proptest::sample::subsequence(NAMES.to_vec(), 0..=NAMES.len())
        .prop_flat_map(move |names| {
            let count = names.len();
            (
                Just(names),
                proptest::collection::vec(value_strategy(depth, unique_name_level), count..=count),
            )
        })
        .prop_map(|(names, values)| {
            names
                .into_iter()
                .zip(values)
                .map(|(name, value)| Avp {
                    name: name.to_owned(),
                    value,
                })
                .collect()
        })
        .boxed()
}

/// Sequences with arbitrary name repetition, interleaving included.
fn general_level(depth: u32) -> BoxedStrategy<Vec<Avp>> {
    proptest::collection::vec(
        (proptest::sample::select(NAMES), value_strategy(depth, general_level)).prop_map(
            |(name, value)| Avp {
                name: name.to_owned(),
                value,
            },
        ),
        0..8,
    )
    .boxed()
}

proptest! {
    #[test]
    fn unique_name_sequences_roundtrip_exactly(avps in unique_name_level(2)) {
        let translator = translator();
        let object = translator.to_object(&avps).unwrap();
        let back = translator.from_object(&object).unwrap();
        prop_assert_eq!(back, avps);
    }

    #[test]
    fn conversion_is_idempotent_from_the_first_pass(avps in general_level(2)) {
        let translator = translator();
        // the first pass may regroup interleaved repeats; after that the
        // pair of conversions is a fixed point in both directions
        let object = translator.to_object(&avps).unwrap();
        let normalized = translator.from_object(&object).unwrap();
        let object_again = translator.to_object(&normalized).unwrap();
        prop_assert_eq!(&object_again, &object);
        let normalized_again = translator.from_object(&object_again).unwrap();
        prop_assert_eq!(normalized_again, normalized);
    }

    #[test]
    fn forward_key_count_never_exceeds_input_length(avps in general_level(1)) {
        let translator = translator();
        let object = translator.to_object(&avps).unwrap();
        prop_assert!(object.len() <= avps.len());
    }
}
