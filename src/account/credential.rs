/// Salted digest stored per account. The plaintext secret only exists in the
/// accounts file and is hashed on load.
#[derive(Debug, Clone)]
pub(crate) struct Credential {
    salt: String,
    digest: String,
}

impl Credential {
    pub(crate) fn new(salt: String, digest: String) -> Credential {
        Credential { salt, digest }
    }

    pub(crate) fn salt(&self) -> &str {
        &self.salt
    }

    pub(crate) fn digest(&self) -> &str {
        &self.digest
    }
}

/// Verifies a claimed secret against a stored credential. The directory depends
/// on this seam rather than comparing secrets directly.
pub(crate) trait CredentialVerifier {
    fn derive(&self, salt: &str, secret: &str) -> Credential;

    fn verify(&self, secret: &str, credential: &Credential) -> bool;
}

pub(crate) struct SaltedMd5Verifier;

impl CredentialVerifier for SaltedMd5Verifier {
    fn derive(&self, salt: &str, secret: &str) -> Credential {
        Credential::new(salt.to_string(), hex_digest(salt, secret))
    }

    fn verify(&self, secret: &str, credential: &Credential) -> bool {
        hex_digest(credential.salt(), secret) == credential.digest()
    }
}

fn hex_digest(salt: &str, secret: &str) -> String {
    let digest = md5::compute(format!("{salt}{secret}"));
    format!("{digest:x}")
}
