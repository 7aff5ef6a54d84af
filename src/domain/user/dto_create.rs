use validator::Validate;

#[derive(Debug, Clone, Validate)]
pub struct CreateUserDto {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(email, length(max = 255))]
    pub email: String,
    #[validate(length(max = 512))]
    pub photo: Option<String>,
    /// Plain password; hashed by the repository before storage.
    #[validate(length(min = 8))]
    pub password: String,
    pub role_id: Option<i32>,
}
