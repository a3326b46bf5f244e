use std::io::{self, BufRead, Write};

use uuid::Uuid;

use crate::cli::render::{output_success, render_schedule};
use crate::cli::OutputFormat;
use crate::dashboard::state::validate_new;
use crate::dashboard::{
    AddMedicine, DashboardState, MedicineClient, Session, SessionError, TokenStore,
};

/// Bootstrap the session and build an API client from it.
fn client() -> anyhow::Result<MedicineClient> {
    let store = TokenStore::new()?;
    let session = Session::bootstrap(&store).map_err(|e| match e {
        SessionError::LoginRequired => {
            anyhow::anyhow!("No session. Run `medremind login <token>` first")
        }
        other => anyhow::anyhow!(other),
    })?;

    Ok(MedicineClient::new(
        MedicineClient::base_url_from_env(),
        &session,
    ))
}

pub async fn list(output_format: &OutputFormat) -> anyhow::Result<()> {
    let client = client()?;

    let mut state = DashboardState::new();
    state.replace_all(client.list().await?);

    render_schedule(&state, output_format)
}

pub async fn add(
    name: String,
    time: String,
    dosage: Option<String>,
    notes: Option<String>,
    output_format: &OutputFormat,
) -> anyhow::Result<()> {
    validate_new(&name, &time).map_err(|msg| anyhow::anyhow!(msg))?;

    let client = client()?;
    client
        .add(&AddMedicine {
            user_id: client.user_id(),
            name,
            time,
            dosage,
            notes,
        })
        .await?;

    // Re-fetch rather than appending locally so the view carries the
    // store-assigned id.
    let mut state = DashboardState::new();
    state.replace_all(client.list().await?);

    output_success(output_format, "Medication added to schedule", None)?;
    render_schedule(&state, output_format)
}

pub async fn remove(id: Uuid, yes: bool, output_format: &OutputFormat) -> anyhow::Result<()> {
    if !yes && !confirm("Are you sure you want to remove this medication?")? {
        return output_success(output_format, "Cancelled", None);
    }

    let client = client()?;

    let mut state = DashboardState::new();
    state.replace_all(client.list().await?);

    if !state.begin_delete(id) {
        anyhow::bail!("No medication with id {} in the current schedule", id);
    }

    match client.remove(id).await {
        Ok(()) => {
            state.confirm_delete(id);
            output_success(output_format, "Medication removed", None)?;
            render_schedule(&state, output_format)
        }
        Err(e) => {
            // Roll the optimistic removal back so the rendered schedule
            // matches the store again.
            state.fail_delete(id);
            render_schedule(&state, output_format)?;
            anyhow::bail!("Failed to delete: {}", e)
        }
    }
}

pub async fn taken(id: Uuid, taken: bool, output_format: &OutputFormat) -> anyhow::Result<()> {
    let client = client()?;
    client.set_taken(id, taken).await?;

    let message = if taken {
        "Marked as taken"
    } else {
        "Marked as not taken"
    };
    output_success(output_format, message, None)
}

fn confirm(prompt: &str) -> anyhow::Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
