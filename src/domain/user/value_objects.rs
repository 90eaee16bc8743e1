use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use validator::Validate;

lazy_static! {
    static ref USERNAME_REGEX: regex::Regex =
        regex::Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_.-]{2,29}$").unwrap();
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Username {
    #[validate(regex(path = *USERNAME_REGEX))]
    pub value: String,
}

impl Username {
    pub fn new(value: String) -> Result<Self, validator::ValidationErrors> {
        let username = Self { value };
        username.validate()?;
        Ok(username)
    }
}
