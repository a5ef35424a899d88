//! RealtyClient - one store, one transport, typed access to every resource.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::cookies::CookieJar;
use crate::entities::{
    register_all, Agent, Appointment, Career, ClosedDeal, Event, Inquiry, Meeting, Office, Property,
    PropertySearch, Seminar, Statistic, Submission, Testimonial, Video,
};
use crate::error::{Error, StorageError};
use crate::operation::{Completion, Outcome, ResourceClient};
use crate::resource::Resource;
use crate::storage::{InMemoryStorage, LocalStorage, SavedSearch, SearchCache};
use crate::store::{Store, Subscriber, SubscriptionId};
use crate::transport::{HttpTransport, RetryTransport, Transport};

/// Entry point for the admin dashboard and public site.
///
/// ```ignore
/// let client = RealtyClient::new(ClientConfig::from_env()?)?;
/// client.subscribe(Arc::new(Toaster::new(LogSink::new()).quiet_reads()));
/// client.cookies().set("auth_token", token);
///
/// client.agents().list().await;
/// let agents = client.store().select::<Agent, _>(|c| c.items().to_vec())?;
/// ```
#[derive(Clone)]
pub struct RealtyClient {
    config: ClientConfig,
    store: Store,
    cookies: CookieJar,
    transport: Arc<dyn Transport>,
    stats: Arc<dyn Transport>,
    searches: SearchCache<Arc<dyn LocalStorage>>,
}

impl RealtyClient {
    /// Validate `config` and talk to it over HTTP.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        config.validate()?;
        let cookies = CookieJar::new();
        let http = HttpTransport::new(config.clone(), cookies.clone())?;
        Ok(Self::with_transport(config, Arc::new(http)).with_cookies(cookies))
    }

    /// Use `transport` for every call. Statistics reads get a retry wrapper
    /// around it.
    ///
    /// The client starts with an empty jar that `transport` knows nothing
    /// about; pass the transport's own jar to [`with_cookies`](Self::with_cookies)
    /// so `cookies().set(..)` reaches it.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        let stats = RetryTransport::new(Arc::clone(&transport)).with_retries(config.stats_retries);
        let store = register_all(Store::with_consistency(config.consistency));
        debug!(
            origin = %config.origin,
            consistency = ?config.consistency,
            resources = store.resources().len(),
            "client ready"
        );
        Self {
            store,
            cookies: CookieJar::new(),
            transport,
            stats: Arc::new(stats),
            searches: SearchCache::new(Arc::new(InMemoryStorage::new())),
            config,
        }
    }

    /// Share `cookies` with the transport that reads them.
    pub fn with_cookies(mut self, cookies: CookieJar) -> Self {
        self.cookies = cookies;
        self
    }

    /// Keep saved searches in `storage` instead of memory.
    pub fn with_storage(mut self, storage: Arc<dyn LocalStorage>) -> Self {
        self.searches = SearchCache::new(storage);
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn cookies(&self) -> &CookieJar {
        &self.cookies
    }

    pub fn subscribe(&self, subscriber: Arc<dyn Subscriber>) -> SubscriptionId {
        self.store.subscribe(subscriber)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    /// Operations for any resource over the main transport.
    pub fn resource<R: Resource>(&self) -> ResourceClient<R> {
        ResourceClient::new(self.store.clone(), Arc::clone(&self.transport))
    }

    pub fn agents(&self) -> ResourceClient<Agent> {
        self.resource()
    }

    pub fn careers(&self) -> ResourceClient<Career> {
        self.resource()
    }

    pub fn offices(&self) -> ResourceClient<Office> {
        self.resource()
    }

    pub fn properties(&self) -> ResourceClient<Property> {
        self.resource()
    }

    pub fn testimonials(&self) -> ResourceClient<Testimonial> {
        self.resource()
    }

    pub fn videos(&self) -> ResourceClient<Video> {
        self.resource()
    }

    pub fn appointments(&self) -> ResourceClient<Appointment> {
        self.resource()
    }

    pub fn events(&self) -> ResourceClient<Event> {
        self.resource()
    }

    pub fn meetings(&self) -> ResourceClient<Meeting> {
        self.resource()
    }

    pub fn seminars(&self) -> ResourceClient<Seminar> {
        self.resource()
    }

    pub fn closed_deals(&self) -> ResourceClient<ClosedDeal> {
        self.resource()
    }

    pub fn client_properties(&self) -> ResourceClient<Submission> {
        self.resource()
    }

    pub fn inquiries(&self) -> ResourceClient<Inquiry> {
        self.resource()
    }

    /// Dashboard counters, retried up to `stats_retries` times.
    pub fn statistics(&self) -> ResourceClient<Statistic> {
        ResourceClient::new(self.store.clone(), Arc::clone(&self.stats))
    }

    /// Search properties and remember the search. Results land in the
    /// container's `results`, never in the full listing.
    pub async fn search_properties(&self, search: &PropertySearch) -> Outcome<Property> {
        let outcome = self.properties().search(search.query()).await;
        if let Some(Completion::Searched(results)) = outcome.completion() {
            let saved = SavedSearch {
                filters: search.filters(),
                results: results.clone(),
            };
            if let Err(err) = self.searches.save(&saved) {
                warn!(error = %err, "could not save property search");
            }
        }
        outcome
    }

    pub fn last_search(&self) -> Result<Option<SavedSearch>, StorageError> {
        self.searches.load()
    }

    pub fn clear_search(&self) -> Result<(), StorageError> {
        self.searches.clear()
    }
}
