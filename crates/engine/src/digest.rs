//! Digest computation
//!
//! Wraps the RustCrypto digest implementations behind a single entry point
//! keyed by algorithm name. Extendable-output algorithms honor the
//! configured output length; fixed-output algorithms ignore it.

use md5::Md5;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};
use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::{Sha3_224, Sha3_256, Sha3_384, Sha3_512, Shake128, Shake256};

use crate::error::{Error, Result};
use crate::settings::HashArgs;

/// Default output length in bytes for shake128
const SHAKE128_DEFAULT_LENGTH: usize = 16;

/// Default output length in bytes for shake256
const SHAKE256_DEFAULT_LENGTH: usize = 32;

/// Compute a lowercase hex digest of `input` using the configured
/// algorithm
///
/// Deterministic: identical input and arguments always produce an
/// identical digest.
///
/// # Errors
///
/// Returns [`Error::UnsupportedAlgorithm`] when the algorithm name is
/// not recognized.
pub fn compute(input: &[u8], args: &HashArgs) -> Result<String> {
    let output_length = args.options().and_then(|options| options.output_length);

    let digest = match args.algorithm().to_ascii_lowercase().as_str() {
        "md5" => hex::encode(Md5::digest(input)),
        "sha224" => hex::encode(Sha224::digest(input)),
        "sha256" => hex::encode(Sha256::digest(input)),
        "sha384" => hex::encode(Sha384::digest(input)),
        "sha512" => hex::encode(Sha512::digest(input)),
        "sha3-224" => hex::encode(Sha3_224::digest(input)),
        "sha3-256" => hex::encode(Sha3_256::digest(input)),
        "sha3-384" => hex::encode(Sha3_384::digest(input)),
        "sha3-512" => hex::encode(Sha3_512::digest(input)),
        "shake128" => xof::<Shake128>(input, output_length.unwrap_or(SHAKE128_DEFAULT_LENGTH)),
        "shake256" => xof::<Shake256>(input, output_length.unwrap_or(SHAKE256_DEFAULT_LENGTH)),
        other => {
            return Err(Error::UnsupportedAlgorithm {
                algorithm: other.to_string(),
            });
        }
    };

    Ok(digest)
}

/// Run an extendable-output hash with the requested output length
fn xof<H>(input: &[u8], output_length: usize) -> String
where
    H: ExtendableOutput + Update + Default,
{
    let mut hasher = H::default();
    hasher.update(input);

    let mut output = vec![0u8; output_length];
    hasher.finalize_xof().read(&mut output);
    hex::encode(output)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::settings::HashOptions;

    fn args(algorithm: &str) -> HashArgs {
        HashArgs::Algorithm(algorithm.to_string())
    }

    #[test]
    fn test_default_args_give_six_hex_chars() {
        let digest = compute(b"const answer = 42;\n", &HashArgs::default()).unwrap();

        assert_eq!(digest.len(), 6);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(digest, digest.to_lowercase());
    }

    #[test]
    fn test_md5() {
        let digest = compute(b"abc", &args("md5")).unwrap();
        assert_eq!(digest, "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn test_sha256() {
        let digest = compute(b"hello world", &args("sha256")).unwrap();
        assert_eq!(
            digest,
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[test]
    fn test_shake256_output_length_option() {
        let hash_args = HashArgs::WithOptions(
            "shake256".to_string(),
            HashOptions {
                output_length: Some(5),
            },
        );

        let digest = compute(b"abc", &hash_args).unwrap();
        assert_eq!(digest.len(), 10);
    }

    #[test]
    fn test_shake256_default_output_length() {
        let digest = compute(b"abc", &args("shake256")).unwrap();
        assert_eq!(digest.len(), 64);
    }

    #[test]
    fn test_shake128_default_output_length() {
        let digest = compute(b"abc", &args("shake128")).unwrap();
        assert_eq!(digest.len(), 32);
    }

    #[test]
    fn test_deterministic() {
        let first = compute(b"same input", &HashArgs::default()).unwrap();
        let second = compute(b"same input", &HashArgs::default()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_different_input_different_digest() {
        let first = compute(b"input one", &args("sha256")).unwrap();
        let second = compute(b"input two", &args("sha256")).unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_algorithm_name_is_case_insensitive() {
        let lower = compute(b"abc", &args("md5")).unwrap();
        let upper = compute(b"abc", &args("MD5")).unwrap();

        assert_eq!(lower, upper);
    }

    #[test]
    fn test_unknown_algorithm_is_rejected() {
        let result = compute(b"abc", &args("whirlpool-x"));

        assert!(matches!(
            result,
            Err(Error::UnsupportedAlgorithm { algorithm }) if algorithm == "whirlpool-x"
        ));
    }
}
