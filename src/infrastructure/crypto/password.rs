//! Password hashing utilities

use bcrypt::hash;

/// Hash with an explicit work factor (bcrypt accepts 4..=31).
pub fn hash_password_with_cost(password: &str, cost: u32) -> Result<String, bcrypt::BcryptError> {
    hash(password, cost)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_verifies_only_the_original_password() {
        let hashed = hash_password_with_cost("s3cret-pass", 4).unwrap();
        assert_ne!(hashed, "s3cret-pass");
        assert!(bcrypt::verify("s3cret-pass", &hashed).unwrap());
        assert!(!bcrypt::verify("other", &hashed).unwrap());
    }

    #[test]
    fn invalid_cost_is_an_error() {
        assert!(hash_password_with_cost("pw", 2).is_err());
    }
}
