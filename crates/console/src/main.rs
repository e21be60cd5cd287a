//! `orgdesk-console` -- demo driver for the membership admin client.
//!
//! Stands in for the visual layer: logs in, lists members, roles, and
//! org units through the active data source, and (in fixture mode)
//! creates a sample member. Useful for offline demos and for smoke
//! testing a live backend.
//!
//! # Environment variables
//!
//! | Variable               | Required | Default                     | Description                    |
//! |------------------------|----------|-----------------------------|--------------------------------|
//! | `ORGDESK_API_URL`      | no       | `http://localhost:8080/api` | Live backend base URL          |
//! | `ORGDESK_MOCK`         | no       | `false`                     | Start against fixture data     |
//! | `ORGDESK_SESSION_FILE` | no       | `orgdesk-session.json`      | Durable session file path      |
//! | `ORGDESK_USERNAME`     | no       | `admin`                     | Login username                 |
//! | `ORGDESK_PASSWORD`     | no       | `admin`                     | Login password                 |

use orgdesk_client::config::ClientConfig;
use orgdesk_client::context::AuthContext;
use orgdesk_client::source::DataSource;
use orgdesk_client::storage::FileStorage;
use orgdesk_core::auth::Credentials;
use orgdesk_core::member::{CreateMember, MemberQuery, MemberStatus};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "orgdesk=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClientConfig::from_env();
    tracing::info!(
        api_url = %config.api_url,
        mock = config.mock_mode,
        session_file = %config.session_file.display(),
        "Starting orgdesk-console",
    );

    let storage = FileStorage::open(&config.session_file)?;
    let context = AuthContext::new(&config, Box::new(storage));

    let credentials = Credentials {
        username: std::env::var("ORGDESK_USERNAME").unwrap_or_else(|_| "admin".into()),
        password: std::env::var("ORGDESK_PASSWORD").unwrap_or_else(|_| "admin".into()),
    };

    let user = context.login(&credentials).await?;
    tracing::info!(username = %user.username, full_name = %user.full_name, "Authenticated");

    let source = context.source();

    let members = source.list_members(&MemberQuery::default()).await?;
    tracing::info!(total = members.meta.total, "Fetched members");
    for member in &members.data {
        tracing::info!(
            id = member.id,
            username = %member.username,
            status = member.status.as_str(),
            is_virtual = member.is_virtual,
            "member",
        );
    }

    let roles = source.list_roles().await?;
    tracing::info!(total = roles.meta.total, "Fetched roles");

    let orgs = source.list_orgs().await?;
    tracing::info!(total = orgs.meta.total, "Fetched org units");

    // Demonstrate a write without touching live data.
    if context.is_mock() {
        let created = source
            .create_member(&CreateMember {
                username: "demo-agent".to_string(),
                full_name: None,
                nickname: None,
                email: "demo-agent@agents.example.com".to_string(),
                phone: None,
                status: MemberStatus::Active,
                is_virtual: true,
                agent_type: Some("workflow".to_string()),
            })
            .await?;
        tracing::info!(id = created.id, username = %created.username, "Created fixture member");

        let after = source.list_members(&MemberQuery::default()).await?;
        tracing::info!(total = after.meta.total, "Member list after create");
    }

    Ok(())
}
