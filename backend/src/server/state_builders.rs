//! Adapter selection and HTTP state assembly.
//!
//! Each driven port gets its network adapter when the settings carry the
//! credentials it needs, and its fixture otherwise so the landing page keeps
//! working in development.

use std::sync::Arc;

use color_eyre::eyre::{Context, Result, bail};
use mockable::DefaultClock;
use tracing::{info, warn};

use backend::domain::ports::{
    ChatCompletionSource, FixtureChatCompletionSource, FixtureSessionProvider,
    FixtureTicketingProvider, RegistrationRepository, SessionProvider, TicketingProvider,
};
use backend::domain::{ChatRelayService, EventBrief, RegistrationService, chat_system_prompt};
use backend::inbound::http::state::{HttpState, HttpStatePorts};
use backend::outbound::eventbrite::EventbriteTicketingProvider;
use backend::outbound::openai::OpenAiChatSource;
use backend::outbound::persistence::{
    DbPool, DieselRegistrationRepository, InMemoryRegistrationRepository, PoolConfig,
    run_pending_migrations,
};
use backend::outbound::supabase::SupabaseSessionProvider;

use super::config::AppSettings;

/// Driven-port implementations chosen at startup.
#[derive(Clone)]
pub struct Adapters {
    pub sessions: Arc<dyn SessionProvider>,
    pub registrations: Arc<dyn RegistrationRepository>,
    pub ticketing: Arc<dyn TicketingProvider>,
    pub chat: Arc<dyn ChatCompletionSource>,
}

impl Adapters {
    /// Pick adapters for the given settings, connecting to PostgreSQL and
    /// applying migrations when a database is configured.
    ///
    /// # Errors
    ///
    /// Fails on malformed URLs, an unreachable database or a failed
    /// migration.
    pub async fn from_settings(settings: &AppSettings) -> Result<Self> {
        Ok(Self {
            sessions: build_session_provider(settings)?,
            registrations: build_registration_repository(settings).await?,
            ticketing: build_ticketing_provider(settings)?,
            chat: build_chat_source(settings)?,
        })
    }
}

fn build_session_provider(settings: &AppSettings) -> Result<Arc<dyn SessionProvider>> {
    match settings.supabase()? {
        Some((url, key)) => {
            let provider =
                SupabaseSessionProvider::new(&url, key.as_str(), settings.outbound_timeout())
                    .wrap_err("building identity service client")?;
            info!(%url, "resolving sessions via identity service");
            Ok(Arc::new(provider))
        }
        None => {
            warn!("identity service not configured; accepting the fixture session token only");
            Ok(Arc::new(FixtureSessionProvider))
        }
    }
}

async fn build_registration_repository(
    settings: &AppSettings,
) -> Result<Arc<dyn RegistrationRepository>> {
    let Some(database_url) = settings.database_url() else {
        warn!("database not configured; registrations are kept in memory");
        return Ok(Arc::new(InMemoryRegistrationRepository::new()));
    };

    let applied = run_pending_migrations(&database_url)
        .await
        .wrap_err("applying database migrations")?;
    info!(applied, "database schema up to date");

    let config =
        PoolConfig::new(database_url.as_str()).with_max_size(settings.database_pool_size());
    let pool = DbPool::connect(&config)
        .await
        .wrap_err("connecting to the registration database")?;
    Ok(Arc::new(DieselRegistrationRepository::new(pool)))
}

fn build_ticketing_provider(settings: &AppSettings) -> Result<Arc<dyn TicketingProvider>> {
    let Some(api_key) = settings.eventbrite_api_key() else {
        // Real visitors must never receive fixture order ids.
        if settings.supabase()?.is_some() {
            bail!("identity service is configured but the ticketing API key is not");
        }
        warn!("ticketing API key not configured; issuing fixture order ids");
        return Ok(Arc::new(FixtureTicketingProvider));
    };
    let provider = EventbriteTicketingProvider::new(
        settings.eventbrite_api_url()?,
        api_key.as_str(),
        settings.outbound_timeout(),
    )
    .wrap_err("building ticketing client")?;
    Ok(Arc::new(provider))
}

fn build_chat_source(settings: &AppSettings) -> Result<Arc<dyn ChatCompletionSource>> {
    let Some(api_key) = settings.openai_api_key() else {
        warn!("completion API key not configured; chat answers with a canned reply");
        return Ok(Arc::new(FixtureChatCompletionSource));
    };
    let source = OpenAiChatSource::new(
        &settings.openai_api_url()?,
        api_key.as_str(),
        settings.openai_model(),
        settings.outbound_timeout(),
    )
    .wrap_err("building completion client")?;
    Ok(Arc::new(source))
}

/// Wire the domain services over `adapters` into handler state.
pub fn build_http_state(adapters: Adapters) -> HttpState {
    let Adapters {
        sessions,
        registrations,
        ticketing,
        chat,
    } = adapters;
    let brief = EventBrief::brunch_du_baron();
    let ports = HttpStatePorts {
        registrations: Arc::new(RegistrationService::new(sessions, registrations, ticketing)),
        chat: Arc::new(ChatRelayService::new(chat, chat_system_prompt(&brief))),
        clock: Arc::new(DefaultClock),
    };
    HttpState::with_event(ports, brief)
}
