use crate::prelude::*;

use async_trait::async_trait;
use std::sync::Arc;

/// A plugin which can be mounted onto the host's event stream.
#[async_trait]
pub trait Plugin: Send + Sync + 'static
{
    /// Name used to refer to the plugin in host configuration
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Whether the host should enable this plugin when its configuration does
    /// not say either way
    fn default_enabled(&self) -> bool;

    /// Bind this plugin's handlers to the dispatcher.
    async fn mount(self: Arc<Self>, dispatcher: &mut EventDispatcher);

    async fn unmount(&self) {}
}
