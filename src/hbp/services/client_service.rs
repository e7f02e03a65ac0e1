use super::{RecordSource, RefreshOutcome, Resource};

use crate::export::{self, Delivery};
use crate::filter::filter_clients;
use crate::ids::ClientId;
use crate::input::map_clients;
use crate::models::Client;

use chrono::FixedOffset;

/// State of the clients view
pub struct ClientService {
    source: Box<dyn RecordSource>,
    clients: Vec<Client>,
}

impl ClientService {
    pub fn new(source: Box<dyn RecordSource>) -> Self {
        return Self {
            source,
            clients: vec![],
        };
    }

    pub fn refresh(&mut self) -> RefreshOutcome {
        log::debug!("Refreshing clients");

        let payload = match self.source.fetch(Resource::Clients) {
            Ok(payload) => payload,
            Err(e) => {
                log::warn!("Fetching clients failed: {e:#}");
                return RefreshOutcome::Failed;
            }
        };

        self.clients = map_clients(payload);

        return RefreshOutcome::Loaded(self.clients.len());
    }

    pub fn clients(&self) -> &[Client] {
        return &self.clients;
    }

    pub fn search(&self, query: &str) -> Vec<&Client> {
        return filter_clients(&self.clients, query);
    }

    pub fn find(&self, id: &ClientId) -> Option<&Client> {
        return self.clients.iter().find(|client| &client.id == id);
    }

    pub fn print_card(&self, id: &ClientId, utc_offset: FixedOffset, delivery: &dyn Delivery) -> bool {
        let client = match self.find(id) {
            Some(client) => client,
            None => {
                log::warn!("No client {} to print", id.as_str());
                return false;
            }
        };

        let document = export::render_client_card(client, utc_offset);
        let outcome = delivery.print(&export::document_name("client", id.as_str()), &document);

        return export::deliver("Client card", outcome);
    }
}
