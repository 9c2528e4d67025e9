//! Content digests and login credential derivation.

use md5::Md5;
use sha2::{Digest, Sha256};

/// Lowercase hex MD5 digest of `data`.
///
/// This is the content digest the service uses to identify uploads.
///
/// # Examples
/// ```
/// use supernote_cloud::crypto::md5_hex;
///
/// assert_eq!(md5_hex(b""), "d41d8cd98f00b204e9800998ecf8427e");
/// ```
pub fn md5_hex(data: &[u8]) -> String {
    hex::encode(Md5::digest(data))
}

/// Lowercase hex SHA-256 digest of `data`.
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// Derive the password credential sent to the login endpoint.
///
/// The credential is `sha256_hex(md5_hex(password) + random_code)`, where
/// `random_code` is the one-time challenge issued for this login attempt.
///
/// # Examples
/// ```
/// use supernote_cloud::crypto::login_password_hash;
///
/// let credential = login_password_hash("password", "123456");
/// assert_eq!(credential.len(), 64);
/// ```
pub fn login_password_hash(password: &str, random_code: &str) -> String {
    let mut salted = md5_hex(password.as_bytes());
    salted.push_str(random_code);
    sha256_hex(salted.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_md5_known_vectors() {
        assert_eq!(md5_hex(b""), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(md5_hex(b"password"), "5f4dcc3b5aa765d61d8327deb882cf99");
        assert_eq!(
            md5_hex(b"Hello, Supernote!"),
            "5ee6ad0b96ace5e52104296c1842dfce"
        );
    }

    #[test]
    fn test_sha256_known_vector() {
        assert_eq!(
            sha256_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_login_password_hash() {
        assert_eq!(
            login_password_hash("password", "123456"),
            "756016da9afe2e4b4c9ac2495c13c67dca5129f636365d1e652c10938b7275f3"
        );
        assert_eq!(
            login_password_hash("secret", "987654"),
            "be13756106fb7038ed17b9ccda66ee30b1591e15f9dbcfe919ca7173deb7a997"
        );
    }

    #[test]
    fn test_login_password_hash_depends_on_code() {
        assert_ne!(
            login_password_hash("password", "123456"),
            login_password_hash("password", "123457")
        );
    }
}
