use rand::{distributions::Alphanumeric, Rng};

/// Generates an alphanumeric secret, used for the create user code and
/// the session signing key when none are configured.
pub fn create_random_secret(secret_len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(secret_len)
        .map(char::from)
        .collect()
}

/// Hides everything but the first characters of a secret so that it can
/// be written to the logs.
pub fn mask_secret(secret: &str, visible: usize) -> String {
    let shown = secret.chars().take(visible).collect::<String>();
    let hidden = secret.chars().count().saturating_sub(visible);
    format!("{}{}", shown, "*".repeat(hidden))
}
