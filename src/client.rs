use crate::error::Result;
use crate::resources::{
    AttributeService, CalendarService, CampaignService, CharacterService, ConversationService,
    DiceRollService, EntityEventService, EntityFileService, EntityInventoryService,
    EntityNoteService, EntityTagService, EventService, FamilyService, ItemService,
    JournalService, LocationService, MapPointService, NoteService, OrganizationMemberService,
    OrganizationService, ProfileService, QuestCharacterService, QuestItemService,
    QuestLocationService, QuestOrganizationService, QuestService, RaceService, RelationService,
    SearchService, TagService,
};
use crate::rest::{ReqwestTransport, RestContext, Transport};
use crate::token::Token;
use reqwest::blocking::ClientBuilder;
use std::sync::Arc;
use std::time::Duration;

/// Create the HTTP client for REST API requests
/// with the timeouts from the given configuration
pub fn create_rest_client(config: &Config) -> Result<reqwest::blocking::Client> {
    let client = ClientBuilder::new()
        .pool_max_idle_per_host(10)
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .build()?;
    Ok(client)
}

/// Configuration for the Kanka API client
#[derive(Debug, Clone)]
pub struct Config {
    /// URL scheme (http or https)
    pub scheme: String,
    /// API host
    pub host: String,
    /// Path prefix of the API version, ending with `/`
    pub prefix: String,
    /// Total time allowed for one request
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            scheme: "https".to_string(),
            host: "kanka.io".to_string(),
            prefix: "api/1.0/".to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl Config {
    /// Create a new configuration with the given scheme and host
    pub fn new(scheme: impl Into<String>, host: impl Into<String>) -> Self {
        Config {
            scheme: scheme.into(),
            host: host.into(),
            ..Config::default()
        }
    }

    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the API path prefix; a trailing `/` is added when missing
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        let mut prefix = prefix.into();
        if !prefix.is_empty() && !prefix.ends_with('/') {
            prefix.push('/');
        }
        self.prefix = prefix;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Get the base URL every endpoint path is appended to
    pub fn base_url(&self) -> String {
        format!("{}://{}/{}", self.scheme, self.host, self.prefix.trim_start_matches('/'))
    }
}

/// A session with the Kanka API.
///
/// Holds one service per resource kind. All services share the same
/// transport, base URL and token, and none of them keeps state between calls.
#[derive(Debug, Clone)]
pub struct Client {
    rest: Arc<RestContext>,

    pub profile: ProfileService,
    pub campaigns: CampaignService,
    pub characters: CharacterService,
    pub locations: LocationService,
    pub families: FamilyService,
    pub organizations: OrganizationService,
    pub items: ItemService,
    pub notes: NoteService,
    pub events: EventService,
    pub calendars: CalendarService,
    pub races: RaceService,
    pub quests: QuestService,
    pub journals: JournalService,
    pub tags: TagService,
    pub conversations: ConversationService,
    pub dice_rolls: DiceRollService,
    pub attributes: AttributeService,
    pub entity_events: EntityEventService,
    pub entity_files: EntityFileService,
    pub entity_inventory: EntityInventoryService,
    pub entity_notes: EntityNoteService,
    pub entity_tags: EntityTagService,
    pub relations: RelationService,
    pub map_points: MapPointService,
    pub organization_members: OrganizationMemberService,
    pub quest_characters: QuestCharacterService,
    pub quest_items: QuestItemService,
    pub quest_locations: QuestLocationService,
    pub quest_organizations: QuestOrganizationService,
    pub search: SearchService,
}

impl Client {
    /// Create a client for kanka.io with the default configuration
    pub fn new(token: impl Into<Token>) -> Result<Self> {
        Self::with_config(token, Config::default())
    }

    /// Create a client with a custom configuration
    pub fn with_config(token: impl Into<Token>, config: Config) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(token, config, transport))
    }

    /// Create a client that sends its requests through the given transport
    pub fn with_transport<T>(token: impl Into<Token>, config: Config, transport: T) -> Self
    where
        T: Transport + 'static,
    {
        let rest = Arc::new(RestContext::new(token.into(), config, Box::new(transport)));

        Client {
            profile: ProfileService::new(rest.clone()),
            campaigns: CampaignService::new(rest.clone()),
            characters: CharacterService::new(rest.clone()),
            locations: LocationService::new(rest.clone()),
            families: FamilyService::new(rest.clone()),
            organizations: OrganizationService::new(rest.clone()),
            items: ItemService::new(rest.clone()),
            notes: NoteService::new(rest.clone()),
            events: EventService::new(rest.clone()),
            calendars: CalendarService::new(rest.clone()),
            races: RaceService::new(rest.clone()),
            quests: QuestService::new(rest.clone()),
            journals: JournalService::new(rest.clone()),
            tags: TagService::new(rest.clone()),
            conversations: ConversationService::new(rest.clone()),
            dice_rolls: DiceRollService::new(rest.clone()),
            attributes: AttributeService::new(rest.clone()),
            entity_events: EntityEventService::new(rest.clone()),
            entity_files: EntityFileService::new(rest.clone()),
            entity_inventory: EntityInventoryService::new(rest.clone()),
            entity_notes: EntityNoteService::new(rest.clone()),
            entity_tags: EntityTagService::new(rest.clone()),
            relations: RelationService::new(rest.clone()),
            map_points: MapPointService::new(rest.clone()),
            organization_members: OrganizationMemberService::new(rest.clone()),
            quest_characters: QuestCharacterService::new(rest.clone()),
            quest_items: QuestItemService::new(rest.clone()),
            quest_locations: QuestLocationService::new(rest.clone()),
            quest_organizations: QuestOrganizationService::new(rest.clone()),
            search: SearchService::new(rest.clone()),
            rest,
        }
    }

    /// The dispatcher shared by every service
    pub fn rest(&self) -> &RestContext {
        &self.rest
    }

    pub fn config(&self) -> &Config {
        self.rest.config()
    }
}
