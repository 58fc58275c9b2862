pub mod api;
pub mod credentials;
pub mod date_utils;
pub mod logging;
pub mod navigation;

use std::rc::Rc;

use shared::CredentialProvider;

use crate::config::AppConfig;
use api::ApiClient;
use credentials::LocalStorageToken;
use navigation::{BrowserNavigator, Navigator};

/// Collaborators handed to the views through context.
#[derive(Clone)]
pub struct AppServices {
    pub api_client: ApiClient,
    pub credentials: Rc<dyn CredentialProvider>,
    pub navigator: Rc<dyn Navigator>,
}

impl AppServices {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            api_client: ApiClient::with_base_url(config.api_base_url.clone()),
            credentials: Rc::new(LocalStorageToken::new(config.token_storage_key.clone())),
            navigator: Rc::new(BrowserNavigator),
        }
    }
}

impl PartialEq for AppServices {
    fn eq(&self, other: &Self) -> bool {
        self.api_client == other.api_client
            && Rc::ptr_eq(&self.credentials, &other.credentials)
            && Rc::ptr_eq(&self.navigator, &other.navigator)
    }
}
