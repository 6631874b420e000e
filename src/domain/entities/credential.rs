use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use subtle::ConstantTimeEq;
use uuid::Uuid;

const SCHEME: &str = "pbkdf2-sha256";
const KEY_LEN: usize = 32;
#[cfg(not(test))]
const ITERATIONS: u32 = 200_000;
#[cfg(test)]
const ITERATIONS: u32 = 1_000;

/// Password digest in the `pbkdf2-sha256$<iterations>$<salt>$<hex>` storage
/// form. The iteration count travels with the digest.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    pub fn from_plain(password: &str) -> Self {
        let salt = Uuid::new_v4().simple().to_string();
        let key = derive_hex(password, &salt, ITERATIONS);
        PasswordDigest(format!("{SCHEME}${ITERATIONS}${salt}${key}"))
    }

    /// Wraps a digest read back from storage. Malformed values never verify.
    pub fn from_stored(stored: impl Into<String>) -> Self {
        PasswordDigest(stored.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn verify(&self, password: &str) -> bool {
        let mut parts = self.0.splitn(4, '$');
        let (Some(scheme), Some(iterations), Some(salt), Some(expected)) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return false;
        };
        let Ok(iterations) = iterations.parse::<u32>() else {
            return false;
        };
        if scheme != SCHEME || iterations == 0 || salt.is_empty() {
            return false;
        }
        let actual = derive_hex(password, salt, iterations);
        actual.as_bytes().ct_eq(expected.as_bytes()).into()
    }
}

impl std::fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PasswordDigest(..)")
    }
}

fn derive_hex(password: &str, salt: &str, iterations: u32) -> String {
    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt.as_bytes(), iterations, &mut key);
    key.iter().map(|byte| format!("{byte:02x}")).collect()
}
