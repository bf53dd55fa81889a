use htlc_types::{Secret, SecretHash};
use rand::{CryptoRng, RngCore};

use crate::hasher::SecretHasher;

/// A freshly generated secret together with its commitment.
#[derive(Clone, Debug)]
pub struct SecretPair {
    pub secret: Secret,
    pub hash: SecretHash,
}

/// Generate a random 32-byte secret from the thread-local CSPRNG.
pub fn generate_secret() -> SecretPair {
    generate_secret_with(&mut rand::thread_rng())
}

/// Generate a secret from a caller-supplied RNG.
pub fn generate_secret_with<R: RngCore + CryptoRng>(rng: &mut R) -> SecretPair {
    let mut bytes = [0u8; 32];
    rng.fill_bytes(&mut bytes);
    let secret = Secret::from_bytes(bytes);
    let hash = SecretHasher::commit(&secret);
    SecretPair { secret, hash }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn pair_is_consistent() {
        let pair = generate_secret();
        assert_eq!(SecretHasher::commit(&pair.secret), pair.hash);
        assert_eq!(pair.secret.to_hex().len(), 64);
        assert_eq!(pair.hash.to_hex().len(), 64);
    }

    #[test]
    fn successive_secrets_differ() {
        let a = generate_secret();
        let b = generate_secret();
        assert_ne!(a.secret, b.secret);
        assert_ne!(a.hash, b.hash);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let a = generate_secret_with(&mut StdRng::seed_from_u64(42));
        let b = generate_secret_with(&mut StdRng::seed_from_u64(42));
        assert_eq!(a.secret, b.secret);
        assert_eq!(hex::encode(a.hash.as_bytes()), b.hash.to_hex());
    }
}
