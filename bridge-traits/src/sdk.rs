//! Vendor SDK seam.

use bytes::Bytes;
use core_model::{BeaconIdentity, BeaconRoute, BeaconSettings, Suggestion};

use crate::error::Result;

/// Entry points of the vendor Beacon SDK, implemented per host platform.
///
/// Methods are deliberately synchronous: the dispatcher invokes them on the
/// single UI-owning scheduler task, because the underlying SDK is not safe to
/// drive from arbitrary execution contexts. An adapter method returning `Ok`
/// means the native call was issued, not that any UI work finished.
///
/// Where an operation has an authenticated (Secure Mode) variant, the adapter
/// selects it when `signature` is present.
pub trait BeaconSdk: Send + Sync {
    /// Show the widget.
    fn open(&self, settings: &BeaconSettings, signature: Option<&str>) -> Result<()>;

    /// Authenticate the user, pre-populating and hiding the matching contact
    /// form fields.
    fn identify(&self, identity: &BeaconIdentity) -> Result<()>;

    /// Reset the Beacon state and clear the credentials stored on device.
    fn logout(&self) -> Result<()>;

    /// Register a push notification token with the SDK.
    fn set_device_token(&self, token: Bytes) -> Result<()>;

    /// Override the suggested articles/links shown on the widget home screen.
    fn suggest(&self, suggestions: &[Suggestion]) -> Result<()>;

    /// Open the widget on a specific screen.
    fn navigate(
        &self,
        route: &BeaconRoute,
        settings: &BeaconSettings,
        signature: Option<&str>,
    ) -> Result<()>;

    /// Open the widget on the docs search results for `query`.
    fn search(&self, query: &str, settings: &BeaconSettings, signature: Option<&str>) -> Result<()>;

    /// Clear any partially composed contact form.
    fn contact_form_reset(&self) -> Result<()>;

    /// Clear the prefilled form values held by the SDK.
    fn prefilled_form_reset(&self) -> Result<()>;
}
