//! Authentication service.
//!
//! Sign-in is simulated: any non-blank password is accepted and the role is
//! derived from the email domain. Staff addresses under the configured admin
//! domain get back-office access.

mod error;

pub use error::AuthError;

use gymstore_core::{Email, Role};

use crate::models::{LoginRequest, RegisterRequest, User};

/// Display name given to every admin.
pub const ADMIN_DISPLAY_NAME: &str = "Admin User";

/// Authentication service.
pub struct AuthService<'a> {
    admin_domain: &'a str,
}

impl<'a> AuthService<'a> {
    /// Create a service treating `admin_domain` addresses as staff.
    #[must_use]
    pub const fn new(admin_domain: &'a str) -> Self {
        Self { admin_domain }
    }

    /// Sign in with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingField` if the email or password is blank and
    /// `AuthError::InvalidEmail` if the email is malformed.
    pub fn log_in(&self, request: &LoginRequest) -> Result<User, AuthError> {
        let email = required("email", &request.email)?;
        required("password", &request.password)?;
        let email = Email::parse(&email)?;

        let role = self.role_for(&email);
        let name = match role {
            Role::Admin => ADMIN_DISPLAY_NAME.to_owned(),
            Role::Customer => {
                let name = request
                    .full_name
                    .as_deref()
                    .map(str::trim)
                    .filter(|n| !n.is_empty())
                    .unwrap_or_else(|| email.local_part());
                capitalize(name)
            }
        };

        Ok(User { name, email, role })
    }

    /// Validate a registration form.
    ///
    /// Registration does not sign the visitor in; the returned address is
    /// what they should sign in with.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingField` for blank fields,
    /// `AuthError::PasswordMismatch` if the confirmation differs and
    /// `AuthError::InvalidEmail` if the email is malformed.
    pub fn register(&self, request: &RegisterRequest) -> Result<Email, AuthError> {
        required("full_name", &request.full_name)?;
        let email = required("email", &request.email)?;
        required("password", &request.password)?;

        if request.password != request.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }

        Ok(Email::parse(&email)?)
    }

    /// The role an address signs in with.
    #[must_use]
    pub fn role_for(&self, email: &Email) -> Role {
        if email.is_in_domain(self.admin_domain) {
            Role::Admin
        } else {
            Role::Customer
        }
    }
}

fn required(field: &'static str, value: &str) -> Result<String, AuthError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AuthError::MissingField { field });
    }
    Ok(value.to_owned())
}

/// Uppercase the first character.
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const ADMIN_DOMAIN: &str = "stu.ptit.edu.vn";

    fn login(email: &str, full_name: Option<&str>) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: "hunter22".to_string(),
            full_name: full_name.map(str::to_string),
        }
    }

    #[test]
    fn test_admin_domain_gets_admin_role() {
        let service = AuthService::new(ADMIN_DOMAIN);
        let user = service.log_in(&login("b21dccn001@stu.ptit.edu.vn", Some("Ignored"))).unwrap();
        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.name, ADMIN_DISPLAY_NAME);
    }

    #[test]
    fn test_customer_name_from_local_part() {
        let service = AuthService::new(ADMIN_DOMAIN);
        let user = service.log_in(&login("minh@example.com", None)).unwrap();
        assert_eq!(user.role, Role::Customer);
        assert_eq!(user.name, "Minh");

        let user = service.log_in(&login("minh@example.com", Some("đặng minh"))).unwrap();
        assert_eq!(user.name, "Đặng minh");
    }

    #[test]
    fn test_lookalike_domain_is_customer() {
        let service = AuthService::new(ADMIN_DOMAIN);
        let user = service.log_in(&login("eve@notstu.ptit.edu.vn.example.com", None)).unwrap();
        assert_eq!(user.role, Role::Customer);
    }

    #[test]
    fn test_login_requires_password() {
        let service = AuthService::new(ADMIN_DOMAIN);
        let mut request = login("minh@example.com", None);
        request.password = String::new();
        assert_eq!(
            service.log_in(&request),
            Err(AuthError::MissingField { field: "password" })
        );
    }

    #[test]
    fn test_register() {
        let service = AuthService::new(ADMIN_DOMAIN);
        let mut request = RegisterRequest {
            full_name: "Nguyễn Văn An".to_string(),
            email: "an.nguyen@example.com".to_string(),
            password: "hunter22".to_string(),
            confirm_password: "hunter23".to_string(),
        };
        assert_eq!(service.register(&request), Err(AuthError::PasswordMismatch));

        request.confirm_password = "hunter22".to_string();
        assert_eq!(
            service.register(&request).unwrap().as_str(),
            "an.nguyen@example.com"
        );

        request.full_name = " ".to_string();
        assert_eq!(
            service.register(&request),
            Err(AuthError::MissingField { field: "full_name" })
        );
    }
}
