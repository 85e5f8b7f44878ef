//! Credential management for the TRACERS portal
//!
//! Credentials come from command-line flags or from the `TRACERS_USERNAME` /
//! `TRACERS_PASSWORD` environment variables, which `auth setup` stores in a
//! `.env` file with owner-only permissions.

use std::env;
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use url::Url;

use crate::app::client::{ClientConfig, PortalClient};
use crate::constants::{auth, env as env_constants};
use crate::errors::{AuthError, AuthResult};

/// Username and password for HTTP Basic Auth
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Resolve credentials, preferring explicit values over the environment
    ///
    /// Each field falls back to its environment variable independently.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingCredentials` if either value is unavailable
    pub fn resolve(username: Option<String>, password: Option<String>) -> AuthResult<Self> {
        let username = username
            .or_else(|| env::var(env_constants::USERNAME).ok())
            .filter(|u| !u.is_empty())
            .ok_or(AuthError::MissingCredentials)?;
        let password = password
            .or_else(|| env::var(env_constants::PASSWORD).ok())
            .filter(|p| !p.is_empty())
            .ok_or(AuthError::MissingCredentials)?;

        Ok(Self { username, password })
    }
}

/// Authentication status information
#[derive(Debug, Clone)]
pub struct AuthStatus {
    /// Whether username environment variable is set
    pub username_set: bool,
    /// Whether password environment variable is set
    pub password_set: bool,
    /// Whether .env file exists in current directory
    pub dotenv_file_exists: bool,
    /// Whether credentials have been verified (None = not tested)
    pub credentials_valid: Option<bool>,
}

impl AuthStatus {
    /// Check if both credentials are available in environment
    pub fn has_credentials(&self) -> bool {
        self.username_set && self.password_set
    }

    /// Get descriptive status message for display
    pub fn status_message(&self) -> String {
        match (self.has_credentials(), self.credentials_valid) {
            (false, _) => "Missing credentials - run 'auth setup' to configure".to_string(),
            (true, None) => "Credentials configured but not verified".to_string(),
            (true, Some(true)) => "Credentials configured and verified".to_string(),
            (true, Some(false)) => "Credentials configured but invalid".to_string(),
        }
    }
}

/// Check current authentication status
pub fn get_auth_status() -> AuthStatus {
    AuthStatus {
        username_set: env::var(env_constants::USERNAME).is_ok(),
        password_set: env::var(env_constants::PASSWORD).is_ok(),
        dotenv_file_exists: Path::new(auth::ENV_FILE_NAME).exists(),
        credentials_valid: None,
    }
}

/// Prompt user for credentials interactively
pub fn prompt_credentials() -> AuthResult<Credentials> {
    print!("TRACERS portal username: ");
    io::stdout().flush()?;

    let mut username = String::new();
    io::stdin().read_line(&mut username)?;
    let username = username.trim().to_string();

    if username.is_empty() {
        return Err(AuthError::InvalidUsername {
            reason: "Username cannot be empty".to_string(),
        });
    }

    if !is_valid_username(&username) {
        return Err(AuthError::InvalidUsername {
            reason: "Username should be alphanumeric with optional dots, hyphens, or underscores"
                .to_string(),
        });
    }

    let password = rpassword::prompt_password("TRACERS portal password: ")?;

    if password.is_empty() {
        return Err(AuthError::InvalidUsername {
            reason: "Password cannot be empty".to_string(),
        });
    }

    Ok(Credentials::new(username, password))
}

/// Validate username format
fn is_valid_username(username: &str) -> bool {
    if username.len() < auth::MIN_USERNAME_LENGTH || username.len() > auth::MAX_USERNAME_LENGTH {
        return false;
    }

    username
        .chars()
        .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == '_' || c == '@')
}

/// Save credentials to a dotenv file, replacing earlier values and keeping other lines
pub fn save_credentials(env_path: &Path, credentials: &Credentials) -> AuthResult<()> {
    let mut lines = Vec::new();
    let mut username_found = false;
    let mut password_found = false;

    let username_line = format!("{}={}", env_constants::USERNAME, credentials.username);
    let password_line = format!("{}={}", env_constants::PASSWORD, credentials.password);

    if env_path.exists() {
        let reader = BufReader::new(File::open(env_path)?);

        for line in reader.lines() {
            let line = line?;
            let trimmed = line.trim();

            if trimmed.starts_with(&format!("{}=", env_constants::USERNAME)) {
                lines.push(username_line.clone());
                username_found = true;
            } else if trimmed.starts_with(&format!("{}=", env_constants::PASSWORD)) {
                lines.push(password_line.clone());
                password_found = true;
            } else {
                lines.push(line);
            }
        }
    }

    if !username_found {
        lines.push(username_line);
    }
    if !password_found {
        lines.push(password_line);
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(env_path)?;

    for line in lines {
        writeln!(file, "{}", line)?;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = file.metadata()?.permissions();
        perms.set_mode(auth::ENV_FILE_PERMISSIONS);
        file.set_permissions(perms)?;
    }

    tracing::info!("Saved credentials to {}", env_path.display());
    Ok(())
}

/// Verify credentials against the portal
pub async fn verify_credentials(
    credentials: Credentials,
    base_url: &Url,
    config: &ClientConfig,
) -> AuthResult<bool> {
    println!("Verifying credentials with the TRACERS portal...");

    let client = PortalClient::new(credentials, base_url.clone(), config)?;
    let valid = client.verify().await?;

    if valid {
        println!("Credentials verified successfully!");
    } else {
        println!("Credential verification failed: access refused");
    }
    Ok(valid)
}

/// Interactive credential setup workflow
pub async fn setup_credentials(base_url: &Url, config: &ClientConfig) -> AuthResult<()> {
    println!("TRACERS Portal Authentication Setup");
    println!("===================================");
    println!();
    println!("Your credentials will be stored in a .env file in the current directory.");
    println!();

    if get_auth_status().has_credentials() {
        println!("Warning: Credentials are already configured.");
        print!("Do you want to update them? [y/N]: ");
        io::stdout().flush()?;

        let mut response = String::new();
        io::stdin().read_line(&mut response)?;

        if !response.trim().to_lowercase().starts_with('y') {
            println!("Setup cancelled.");
            return Ok(());
        }
        println!();
    }

    let credentials = prompt_credentials()?;

    println!();
    save_credentials(Path::new(auth::ENV_FILE_NAME), &credentials)?;
    println!("Credentials saved to {}", auth::ENV_FILE_NAME);
    #[cfg(unix)]
    println!("File permissions set to owner-only (600)");

    println!();
    if verify_credentials(credentials, base_url, config).await? {
        println!();
        println!("Setup complete! You can now run 'tracers_fetcher download'.");
    } else {
        println!();
        println!("Setup failed. Please check your credentials and try again.");
        println!("   You can run 'auth setup' again to re-enter your credentials.");
    }

    Ok(())
}

/// Show current authentication status, verifying credentials when present
pub async fn show_auth_status(base_url: &Url, config: &ClientConfig) -> AuthResult<()> {
    let mut status = get_auth_status();

    println!("TRACERS Portal Authentication Status");
    println!("====================================");
    println!();

    match env::var(env_constants::USERNAME) {
        Ok(username) => println!("Username: {} (set)", username),
        Err(_) => println!("Username: Not set"),
    }
    println!(
        "Password: {}",
        if status.password_set { "Set" } else { "Not set" }
    );
    println!(
        ".env file: {}",
        if status.dotenv_file_exists {
            "Exists"
        } else {
            "Not found"
        }
    );
    println!();

    if status.has_credentials() {
        let credentials = Credentials::resolve(None, None)?;
        status.credentials_valid = Some(verify_credentials(credentials, base_url, config).await?);
        println!();
    }

    println!("Status: {}", status.status_message());
    if !status.has_credentials() || status.credentials_valid == Some(false) {
        println!();
        println!("To configure credentials, run: tracers_fetcher auth setup");
    }

    Ok(())
}
