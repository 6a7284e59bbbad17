use neo_crypto::Keypair;
use neo_io::ErrorKind;
use neo_wallet::{decrypt, decrypt_with_version, encrypt, encrypt_with_version, Nep2Key, ScryptParameters};
use rand::{rngs::StdRng, SeedableRng};

const PASSWORD: &str = "city of zion";
const PRIVATE_KEY: &str = "7d128a6d096f0c14c3a25a2b0c41cf79661bfcb4a8cc95aaaea28bde4d732344";

fn private_key() -> [u8; 32] {
    hex::decode(PRIVATE_KEY).unwrap().try_into().unwrap()
}

#[test]
fn random_keys_roundtrip() {
    let mut rng = StdRng::seed_from_u64(0x4e45_5032);
    let params = ScryptParameters::fast();
    for _ in 0..4 {
        let keypair = Keypair::generate(&mut rng);
        let secret = *keypair.private_key.as_be_bytes();

        let nep2 = encrypt("correct horse", &secret, &params).unwrap();
        assert!(nep2.as_str().starts_with("6P"));
        assert_eq!(Nep2Key::parse(nep2.as_str()).unwrap(), nep2);

        let recovered = decrypt("correct horse", nep2.as_str(), &params).unwrap();
        assert_eq!(recovered, keypair.private_key);

        let err = decrypt("battery staple", nep2.as_str(), &params).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidPassword);
    }
}

#[test]
fn address_version_is_bound_into_the_record() {
    let params = ScryptParameters::fast();
    let nep2 = encrypt_with_version(PASSWORD, &private_key(), &params, 0x17).unwrap();
    assert!(decrypt_with_version(PASSWORD, nep2.as_str(), &params, 0x17).is_ok());

    let err = decrypt(PASSWORD, nep2.as_str(), &params).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidPassword);
}

#[test]
fn unicode_passwords() {
    let params = ScryptParameters::fast();
    let nep2 = encrypt("пароль 密码 🔑", &private_key(), &params).unwrap();
    let key = decrypt("пароль 密码 🔑", nep2.as_str(), &params).unwrap();
    assert_eq!(key.as_be_bytes(), &private_key());
}

#[test]
#[ignore = "production scrypt parameters are slow"]
fn nep2_reference_vector() {
    let params = ScryptParameters::default();
    let expected = "6PYUUUFei9PBBfVkSn8q7hFCnewWFRBKPxcn6Kz6Bmk3FqWyLyuTQE2XFH";

    let nep2 = encrypt(PASSWORD, &private_key(), &params).unwrap();
    assert_eq!(nep2.as_str(), expected);

    let key = decrypt(PASSWORD, expected, &params).unwrap();
    assert_eq!(key.as_be_bytes(), &private_key());
}
