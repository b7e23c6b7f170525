use validator::Validate;

/// Registration form as submitted by the storefront.
#[derive(Debug, Clone, Validate)]
pub struct Registration {
    #[validate(length(min = 2, max = 20))]
    pub name: String,
    #[validate(length(min = 2, max = 20))]
    pub surname: String,
    #[validate(length(max = 20))]
    pub patronymic: String,
    #[validate(length(min = 1, max = 32))]
    pub telephone: String,
    #[validate(length(min = 3, max = 100))]
    pub login: String,
    #[validate(length(min = 6, max = 100))]
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct Credentials {
    pub login: String,
    pub password: String,
}

/// Customer row ready for insertion; the password is already hashed.
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub name: String,
    pub surname: String,
    pub patronymic: String,
    pub telephone: String,
    pub login: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub login: String,
    pub password_hash: String,
}
