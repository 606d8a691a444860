//! Signup, login, and session commands

use anyhow::{bail, Result};
use clap::Args;

use crate::auth::validate::{password_strength, strength_label, validate_confirmation};
use crate::auth::CredentialStore;
use crate::display::format_timestamp_long;

use super::AppContext;

/// Arguments for `trackfunds signup`
#[derive(Args, Debug)]
pub struct SignupArgs {
    /// Email address
    pub email: String,

    /// Username (letters, numbers, underscores)
    pub username: String,

    /// Password; prompted for when omitted
    #[arg(long, env = "TRACKFUNDS_PASSWORD")]
    pub password: Option<String>,
}

/// Arguments for `trackfunds login`
#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Email address
    pub email: String,

    /// Password; prompted for when omitted
    #[arg(long, env = "TRACKFUNDS_PASSWORD")]
    pub password: Option<String>,
}

/// Register the (single) user account
pub fn handle_signup(ctx: &AppContext, args: SignupArgs) -> Result<()> {
    let password = match args.password {
        Some(password) => password,
        None => {
            let password = rpassword::prompt_password("Password: ")?;
            let confirmation = rpassword::prompt_password("Confirm password: ")?;
            validate_confirmation(&password, &confirmation)?;
            password
        }
    };

    let creds = CredentialStore::new(&ctx.store);
    creds.register(&args.email, &args.username, &password)?;

    println!("{}", strength_label(password_strength(&password)));
    println!("Account created successfully! Please login.");
    Ok(())
}

/// Authenticate and open a session
pub fn handle_login(ctx: &AppContext, args: LoginArgs) -> Result<()> {
    let password = match args.password {
        Some(password) => password,
        None => rpassword::prompt_password("Password: ")?,
    };

    let creds = CredentialStore::new(&ctx.store);
    let session = creds.login(&args.email, &password)?;
    println!("Login successful. Welcome back, {}!", session.username);
    Ok(())
}

/// Close the active session
pub fn handle_logout(ctx: &AppContext) -> Result<()> {
    let creds = CredentialStore::new(&ctx.store);
    if creds.session()?.is_none() {
        bail!("Not logged in");
    }
    creds.logout()?;
    println!("Logged out.");
    Ok(())
}

/// Show the active session
pub fn handle_whoami(ctx: &AppContext) -> Result<()> {
    let creds = CredentialStore::new(&ctx.store);
    match creds.session()? {
        Some(session) => println!(
            "Logged in as {} since {}",
            session.username,
            format_timestamp_long(&session.logged_in_at)
        ),
        None => println!("Not logged in."),
    }
    Ok(())
}
