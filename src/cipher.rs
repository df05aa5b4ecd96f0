use crate::error::Error;
use crate::hash::HashBackend;
use crate::kdf;
use crate::salt::{SaltSource, SystemSalt};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::fmt;
use std::str::FromStr;

/// Iteration count for stretching a password into a key stream
pub const KEY_STREAM_ITERATIONS: u32 = 1000;
/// Character length of the salt carried in an envelope
pub const SALT_PREFIX_LEN: usize = 16;

/// Ciphertext together with the salt needed to reverse it.
///
/// The serial form is `ciphertext.salt`, split on the last dot. Base64
/// ciphertext and hex salts never contain a dot themselves, so the
/// separator is unambiguous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub ciphertext: String,
    pub salt: String,
}

impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{}", self.ciphertext, self.salt)
    }
}

impl FromStr for Envelope {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (ciphertext, salt) = s.rsplit_once('.').ok_or_else(|| {
            Error::MalformedEnvelope("missing ciphertext/salt separator".to_string())
        })?;
        Ok(Envelope {
            ciphertext: ciphertext.to_string(),
            salt: salt.to_string(),
        })
    }
}

/// Reversible cipher for private keys held in the wallet store.
///
/// The password is stretched into a key stream, XORed over the plaintext
/// bytes (cycling the stream when the plaintext is longer), and the result
/// is base64 encoded. The envelope carries no integrity tag: decrypting
/// with the wrong password succeeds and yields garbage rather than an
/// error.
#[derive(Debug, Clone)]
pub struct StorageCipher<S: SaltSource = SystemSalt> {
    backend: HashBackend,
    salts: S,
}

impl StorageCipher {
    /// Cipher with the primary digest and wall-clock salts
    pub fn standard() -> Self {
        StorageCipher::new(HashBackend::Sha256, SystemSalt)
    }
}

impl<S: SaltSource> StorageCipher<S> {
    /// Cipher with an explicit digest backend and salt source
    pub fn new(backend: HashBackend, salts: S) -> Self {
        StorageCipher { backend, salts }
    }

    /// Encrypt a private key under a password
    pub fn encrypt(&self, private_key: &str, password: &str) -> Envelope {
        let mut salt = self.salts.fresh_salt("store");
        salt.truncate(SALT_PREFIX_LEN);

        let key_stream = kdf::derive(self.backend, password, &salt, KEY_STREAM_ITERATIONS);
        let mixed = xor_bytes(private_key.as_bytes(), key_stream.as_bytes());

        Envelope {
            ciphertext: STANDARD.encode(mixed),
            salt,
        }
    }

    /// Decrypt an envelope with a password.
    ///
    /// Only transport decoding can fail; a wrong password decodes fine and
    /// produces garbage output. Plaintext bytes that do not form valid
    /// UTF-8 are rendered lossily, which never happens for the password
    /// the envelope was encrypted under.
    pub fn decrypt(&self, envelope: &Envelope, password: &str) -> Result<String, Error> {
        let key_stream = kdf::derive(self.backend, password, &envelope.salt, KEY_STREAM_ITERATIONS);
        let mixed = STANDARD
            .decode(envelope.ciphertext.as_bytes())
            .map_err(|err| Error::Base64DecodeError(err.to_string()))?;
        let plain = xor_bytes(&mixed, key_stream.as_bytes());
        Ok(String::from_utf8_lossy(&plain).into_owned())
    }

    /// Decrypt directly from the `ciphertext.salt` serial form
    pub fn decrypt_str(&self, envelope: &str, password: &str) -> Result<String, Error> {
        let envelope = Envelope::from_str(envelope)?;
        self.decrypt(&envelope, password)
    }
}

/// XOR data against a key, cycling the key when it is shorter
fn xor_bytes(data: &[u8], key: &[u8]) -> Vec<u8> {
    if key.is_empty() {
        return data.to_vec();
    }
    data.iter()
        .zip(key.iter().cycle())
        .map(|(byte, key_byte)| byte ^ key_byte)
        .collect()
}
