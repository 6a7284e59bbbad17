// Copyright @ 2023 - 2024, R3E Network
// All Rights Reserved

use aes::cipher::{generic_array::GenericArray, BlockDecrypt, BlockEncrypt, KeyInit};
use aes::Aes256;

use crate::CryptoError;

pub const AES256_KEY_SIZE: usize = 32;

pub const AES_BLOCK_SIZE: usize = 16;

/// Encrypts `data` in place, block by block, without padding.
pub fn aes256_ecb_encrypt(key: &[u8; AES256_KEY_SIZE], data: &mut [u8]) -> Result<(), CryptoError> {
    if data.len() % AES_BLOCK_SIZE != 0 {
        return Err(CryptoError::InvalidBlockLength(data.len()));
    }

    let cipher = Aes256::new(GenericArray::from_slice(key));
    data.chunks_mut(AES_BLOCK_SIZE)
        .map(GenericArray::from_mut_slice)
        .for_each(|block| cipher.encrypt_block(block));
    Ok(())
}

/// Decrypts `data` in place, block by block, without padding.
pub fn aes256_ecb_decrypt(key: &[u8; AES256_KEY_SIZE], data: &mut [u8]) -> Result<(), CryptoError> {
    if data.len() % AES_BLOCK_SIZE != 0 {
        return Err(CryptoError::InvalidBlockLength(data.len()));
    }

    let cipher = Aes256::new(GenericArray::from_slice(key));
    data.chunks_mut(AES_BLOCK_SIZE)
        .map(GenericArray::from_mut_slice)
        .for_each(|block| cipher.decrypt_block(block));
    Ok(())
}

#[cfg(test)]
mod test {
    use hex_literal::hex;

    use super::*;

    #[test]
    fn test_aes256_ecb_roundtrip() {
        let key = [0x42u8; AES256_KEY_SIZE];
        let mut data = *b"Hello world!....Hello world!....";

        aes256_ecb_encrypt(&key, &mut data).unwrap();
        assert_ne!(&data, b"Hello world!....Hello world!....");
        // identical plaintext blocks produce identical ciphertext blocks
        assert_eq!(data[..16], data[16..]);

        aes256_ecb_decrypt(&key, &mut data).unwrap();
        assert_eq!(&data, b"Hello world!....Hello world!....");
    }

    #[test]
    fn test_aes256_known_answer() {
        // FIPS-197 appendix C.3
        let key = hex!("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f");
        let mut block = hex!("00112233445566778899aabbccddeeff");
        aes256_ecb_encrypt(&key, &mut block).unwrap();
        assert_eq!(block, hex!("8ea2b7ca516745bfeafc49904b496089"));
    }

    #[test]
    fn test_unaligned_rejected() {
        let key = [0u8; AES256_KEY_SIZE];
        let mut data = [0u8; 15];
        assert_eq!(
            aes256_ecb_encrypt(&key, &mut data),
            Err(CryptoError::InvalidBlockLength(15))
        );
    }
}
