//! Session commands.

use std::io::Write;

use thiserror::Error;

use super::{CommandError, Shop};

/// Reasons a login request is rejected before it reaches the session store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoginError {
    /// The token is empty.
    #[error("token cannot be empty")]
    EmptyToken,
    /// The user id is empty.
    #[error("user id cannot be empty")]
    EmptyUserId,
    /// The email has no `@` or an empty local part or domain.
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
}

/// Credentials handed over by the login form.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    /// Token issued by the auth backend.
    pub token: String,
    /// Whether the user has admin rights.
    pub is_admin: bool,
    /// User id.
    pub user_id: String,
    /// User email address.
    pub email: String,
}

impl LoginRequest {
    /// Check the form fields.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), LoginError> {
        if self.token.trim().is_empty() {
            return Err(LoginError::EmptyToken);
        }
        if self.user_id.trim().is_empty() {
            return Err(LoginError::EmptyUserId);
        }
        match self.email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(LoginError::InvalidEmail(self.email.clone())),
        }
    }
}

/// Log in and persist the session.
///
/// # Errors
///
/// Returns an error if the request is invalid or writing fails.
pub fn login(
    shop: &mut Shop,
    request: LoginRequest,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    request.validate()?;
    let LoginRequest {
        token,
        is_admin,
        user_id,
        email,
    } = request;

    shop.context_mut()
        .session_mut()
        .login(token, is_admin, user_id, email.as_str());
    let role = if is_admin { "admin" } else { "customer" };
    writeln!(out, "Logged in as {email} ({role}).")?;
    Ok(())
}

/// Log out, clearing the session and the cart.
///
/// # Errors
///
/// Returns an error if the cart cannot be saved or writing fails.
pub fn logout(shop: &mut Shop, out: &mut impl Write) -> Result<(), CommandError> {
    shop.context_mut().sign_out();
    shop.save_cart()?;
    writeln!(out, "Logged out.")?;
    Ok(())
}

/// Describe the current session.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn status(shop: &Shop, out: &mut impl Write) -> Result<(), CommandError> {
    let session = shop.context().session();
    if !session.is_logged_in() {
        writeln!(out, "Not logged in.")?;
        return Ok(());
    }

    writeln!(
        out,
        "Logged in as {} (user {}){}.",
        session.current_user_email().unwrap_or("<no email>"),
        session.current_user_id().unwrap_or("<no id>"),
        if session.is_admin_user() { ", admin" } else { "" }
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(token: &str, user_id: &str, email: &str) -> LoginRequest {
        LoginRequest {
            token: token.to_string(),
            is_admin: false,
            user_id: user_id.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_well_formed() {
        assert_eq!(request("tok", "u1", "a@b.com").validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_empty_token() {
        assert_eq!(
            request(" ", "u1", "a@b.com").validate(),
            Err(LoginError::EmptyToken)
        );
    }

    #[test]
    fn test_validate_rejects_empty_user_id() {
        assert_eq!(
            request("tok", "", "a@b.com").validate(),
            Err(LoginError::EmptyUserId)
        );
    }

    #[test]
    fn test_validate_rejects_bad_email() {
        for email in ["", "no-at", "@b.com", "a@"] {
            assert!(
                matches!(
                    request("tok", "u1", email).validate(),
                    Err(LoginError::InvalidEmail(_))
                ),
                "{email:?} should be rejected"
            );
        }
    }
}
