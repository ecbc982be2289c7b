use std::io::Write;

use rentora_core::Credentials;

use crate::state::AppState;

pub async fn login<W: Write>(
    state: &AppState,
    email: String,
    password: String,
    json: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    let credentials = Credentials::new(email, password);
    let session = state.identity.sign_in(&credentials).await?;

    if json {
        serde_json::to_writer_pretty(&mut *out, &session)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "Welcome back! Signed in as {}", session.email.expose())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_login_greets_user() {
        let state = AppState::in_memory();
        let mut out = Vec::new();

        login(&state, "priya@example.com".into(), "secret".into(), false, &mut out)
            .await
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Welcome back! Signed in as priya@example.com\n"
        );
    }

    #[tokio::test]
    async fn test_login_rejects_bad_email() {
        let state = AppState::in_memory();
        let mut out = Vec::new();
        assert!(login(&state, "nobody".into(), "secret".into(), false, &mut out)
            .await
            .is_err());
    }
}
