//! Property tests across every variant and padding mode.

use base64_variants::{decode, decoded_len_estimate, encode, encoded_len, Base64Error, Variant};
use proptest::prelude::*;

fn any_variant() -> impl Strategy<Value = Variant> {
    prop_oneof![
        Just(Variant::Standard),
        Just(Variant::UrlSafe),
        Just(Variant::MailboxSafe),
    ]
}

fn encode_vec(data: &[u8], padding: bool, variant: Variant) -> Vec<u8> {
    let mut dest = vec![0u8; encoded_len(data.len(), padding).unwrap()];
    let len = encode(data, &mut dest, padding, variant).unwrap();
    dest.truncate(len);
    dest
}

fn decode_vec(encoded: &[u8], padding: bool, variant: Variant) -> Result<Vec<u8>, Base64Error> {
    let mut dest = vec![0u8; decoded_len_estimate(encoded.len())];
    let len = decode(encoded, &mut dest, padding, variant)?;
    dest.truncate(len);
    Ok(dest)
}

proptest! {
    #[test]
    fn round_trip(data in prop::collection::vec(any::<u8>(), 0..256), padding in any::<bool>(), variant in any_variant()) {
        let encoded = encode_vec(&data, padding, variant);
        prop_assert_eq!(decode_vec(&encoded, padding, variant), Ok(data));
    }

    #[test]
    fn output_stays_in_alphabet(data in prop::collection::vec(any::<u8>(), 0..256), padding in any::<bool>(), variant in any_variant()) {
        let encoded = encode_vec(&data, padding, variant);
        let payload = encoded.iter().take_while(|&&c| c != b'=').count();
        prop_assert!(encoded[..payload].iter().all(|c| variant.alphabet().contains(c)));
        prop_assert!(encoded[payload..].iter().all(|&c| c == b'='));
        prop_assert!(encoded.len() - payload <= 2);
    }

    #[test]
    fn wrong_variant_rejects_62_and_63(data in prop::collection::vec(any::<u8>(), 1..64), variant in any_variant(), other in any_variant()) {
        prop_assume!(variant != other);
        let encoded = encode_vec(&data, true, variant);
        let foreign = encoded
            .iter()
            .any(|&c| c != b'=' && other.decode_symbol(c).is_none());
        let result = decode_vec(&encoded, true, other);
        if foreign {
            prop_assert_eq!(result, Err(Base64Error::Malformed));
        } else {
            prop_assert_eq!(result, Ok(data));
        }
    }

    #[test]
    fn single_corruption_is_rejected(
        data in prop::collection::vec(any::<u8>(), 1..128),
        padding in any::<bool>(),
        variant in any_variant(),
        position in any::<prop::sample::Index>(),
        bad in any::<u8>(),
    ) {
        prop_assume!(bad != b'=' && variant.decode_symbol(bad).is_none());
        let mut encoded = encode_vec(&data, padding, variant);
        let i = position.index(encoded.len());
        encoded[i] = bad;
        prop_assert_eq!(decode_vec(&encoded, padding, variant), Err(Base64Error::Malformed));
    }

    #[test]
    fn accepted_input_is_canonical(
        input in prop::collection::vec(prop::sample::select(b"AQgw/+-_,=!".to_vec()), 0..16),
        padding in any::<bool>(),
        variant in any_variant(),
    ) {
        if let Ok(decoded) = decode_vec(&input, padding, variant) {
            prop_assert_eq!(encode_vec(&decoded, padding, variant), input);
        }
    }
}
