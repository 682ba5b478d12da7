//! The Beacon command dispatcher.

use std::sync::Arc;

use bridge_traits::{BeaconSdk, PrefillSource};
use bytes::Bytes;
use core_model::{
    decode_identity, decode_prefill_form, decode_suggestions, BeaconRoute, BeaconSettings,
    Platform, SettingsMapper,
};
use serde_json::Value;
use tokio::sync::oneshot;
use tracing::debug;

use crate::error::{BeaconError, Result};
use crate::prefill::PrefillSlot;
use crate::scheduler::UiScheduler;

/// Builder for [`BeaconService`].
///
/// The SDK adapter is optional on purpose: a host missing its native adapter
/// still gets a service, and every operation on it fails with the same
/// linking error carrying remediation steps.
pub struct BeaconServiceBuilder {
    platform: Platform,
    sdk: Option<Arc<dyn BeaconSdk>>,
}

impl BeaconServiceBuilder {
    /// Install the platform SDK adapter.
    pub fn sdk(mut self, sdk: Arc<dyn BeaconSdk>) -> Self {
        self.sdk = Some(sdk);
        self
    }

    /// Build the service, spawning the UI scheduler when an adapter is
    /// installed. Must be called inside a tokio runtime.
    pub fn build(self) -> BeaconService {
        BeaconService {
            scheduler: self.sdk.map(UiScheduler::spawn),
            mapper: self.platform.mapper(),
            prefill: Arc::new(PrefillSlot::new()),
        }
    }
}

/// Asynchronous command surface presented to script-level callers.
///
/// Each operation validates its arguments, maps untyped input to typed SDK
/// objects, schedules the SDK call on the UI-owning execution context, and
/// resolves as soon as scheduling succeeds. Callers observe "the request was
/// accepted and dispatched", never UI-level completion.
pub struct BeaconService {
    scheduler: Option<UiScheduler>,
    mapper: &'static dyn SettingsMapper,
    prefill: Arc<PrefillSlot>,
}

impl BeaconService {
    pub fn builder(platform: Platform) -> BeaconServiceBuilder {
        BeaconServiceBuilder {
            platform,
            sdk: None,
        }
    }

    /// Read seam for the vendor SDK's contact-form population callback.
    ///
    /// Platform adapters hand this to their SDK wiring; the SDK reads the
    /// last-set snapshot at a time of its own choosing.
    pub fn prefill_source(&self) -> Arc<dyn PrefillSource> {
        Arc::clone(&self.prefill) as Arc<dyn PrefillSource>
    }

    fn scheduler(&self) -> Result<&UiScheduler> {
        self.scheduler.as_ref().ok_or(BeaconError::NotLinked)
    }

    fn decode_settings(&self, raw: &Value) -> Result<BeaconSettings> {
        let decoded = self.mapper.decode(raw)?;
        if !decoded.ignored_keys.is_empty() {
            debug!(keys = ?decoded.ignored_keys, "Ignored unknown settings fields");
        }
        Ok(decoded.value)
    }

    /// Open the widget, optionally in Secure Mode.
    ///
    /// When the settings carry an identity, an auxiliary identify call is
    /// issued right after the open.
    pub async fn open(&self, settings: Option<Value>, signature: Option<String>) -> Result<()> {
        let scheduler = self.scheduler()?;
        let raw = settings.ok_or_else(missing_settings)?;
        let settings = self.decode_settings(&raw)?;

        debug!(beacon_id = %settings.beacon_id, secure = signature.is_some(), "Dispatching open");
        scheduler.post(Box::new(move |sdk| {
            sdk.open(&settings, signature.as_deref())?;
            if let Some(identity) = &settings.identity {
                sdk.identify(identity)?;
            }
            Ok(())
        }))
    }

    /// Authenticate the user.
    pub async fn identify(&self, identity: Option<Value>) -> Result<()> {
        let scheduler = self.scheduler()?;
        let user = identity
            .as_ref()
            .and_then(decode_identity)
            .ok_or_else(|| BeaconError::missing("identity", "Missing or invalid identity."))?;

        scheduler.post(Box::new(move |sdk| sdk.identify(&user)))
    }

    /// Reset the Beacon state and clear stored credentials.
    pub async fn logout(&self) -> Result<()> {
        self.scheduler()?.post(Box::new(|sdk| sdk.logout()))
    }

    /// Register a push notification token.
    ///
    /// The SDK receives the UTF-8 byte encoding of the exact token string.
    pub async fn register_push_notification_token(&self, token: Option<String>) -> Result<()> {
        let scheduler = self.scheduler()?;
        let token =
            token.ok_or_else(|| BeaconError::missing("token", "Missing or invalid token."))?;
        if token.is_empty() {
            return Err(BeaconError::Validation(
                "push token must not be empty".to_owned(),
            ));
        }

        let token = Bytes::from(token.into_bytes());
        scheduler.post(Box::new(move |sdk| sdk.set_device_token(token)))
    }

    /// Suggest links or articles for the user.
    pub async fn suggest(&self, suggestions: Option<Value>) -> Result<()> {
        let scheduler = self.scheduler()?;
        let raw = suggestions
            .ok_or_else(|| BeaconError::missing("suggestions", "Missing or invalid suggestions."))?;
        let list = raw
            .as_array()
            .ok_or_else(|| BeaconError::missing("suggestions", "Missing or invalid suggestions."))?;
        let suggestions = decode_suggestions(list)?;

        debug!(count = suggestions.len(), "Dispatching suggest");
        scheduler.post(Box::new(move |sdk| sdk.suggest(&suggestions)))
    }

    /// Open the widget on a specific screen.
    pub async fn navigate(
        &self,
        route: Option<String>,
        settings: Option<Value>,
        signature: Option<String>,
        article_id: Option<String>,
    ) -> Result<()> {
        let scheduler = self.scheduler()?;
        let raw_settings = settings.ok_or_else(missing_settings)?;
        let route_name = route.ok_or_else(|| BeaconError::missing("route", "Missing route."))?;

        let route = BeaconRoute::resolve(&route_name, article_id.as_deref())?;
        let settings = self.decode_settings(&raw_settings)?;

        debug!(route = %route_name, secure = signature.is_some(), "Dispatching navigate");
        scheduler.post(Box::new(move |sdk| {
            sdk.navigate(&route, &settings, signature.as_deref())?;
            if let Some(identity) = &settings.identity {
                sdk.identify(identity)?;
            }
            Ok(())
        }))
    }

    /// Open the widget on the docs search results screen.
    pub async fn search(
        &self,
        query: Option<String>,
        settings: Option<Value>,
        signature: Option<String>,
    ) -> Result<()> {
        let scheduler = self.scheduler()?;
        let raw_settings = settings.ok_or_else(missing_settings)?;
        let query = query.ok_or_else(|| BeaconError::missing("query", "Missing query."))?;
        let settings = self.decode_settings(&raw_settings)?;

        scheduler.post(Box::new(move |sdk| {
            sdk.search(&query, &settings, signature.as_deref())?;
            if let Some(identity) = &settings.identity {
                sdk.identify(identity)?;
            }
            Ok(())
        }))
    }

    /// Store a contact form prefill snapshot.
    ///
    /// No SDK call happens here; the SDK reads the snapshot through
    /// [`BeaconService::prefill_source`] when it decides to show the form.
    pub async fn prefill_contact_form(&self, form: Option<Value>) -> Result<()> {
        self.scheduler()?;
        let raw = form.ok_or_else(|| BeaconError::missing("formData", "Missing form data."))?;
        let form = decode_prefill_form(&raw)?;

        self.prefill.set(form);
        Ok(())
    }

    /// Clear any partially composed contact form and the prefill snapshot.
    pub async fn reset_contact_form(&self) -> Result<()> {
        let scheduler = self.scheduler()?;
        self.prefill.clear();
        scheduler.post(Box::new(|sdk| sdk.contact_form_reset()))
    }

    /// Clear the prefilled form values and the prefill snapshot.
    pub async fn reset_prefilled_form(&self) -> Result<()> {
        let scheduler = self.scheduler()?;
        self.prefill.clear();
        scheduler.post(Box::new(|sdk| sdk.prefilled_form_reset()))
    }

    /// Wait until every previously posted job has reached the SDK adapter.
    ///
    /// Useful for orderly shutdown and for tests; script callers normally
    /// never need it because operations resolve at schedule time.
    pub async fn flush(&self) -> Result<()> {
        let scheduler = self.scheduler()?;
        let (tx, rx) = oneshot::channel();
        scheduler.post(Box::new(move |_| {
            let _ = tx.send(());
            Ok(())
        }))?;
        rx.await
            .map_err(|_| BeaconError::Dispatch("UI scheduler stopped before flush".to_owned()))
    }
}

fn missing_settings() -> BeaconError {
    BeaconError::missing("settings", "Missing settings. The beacon id is obligatory.")
}
