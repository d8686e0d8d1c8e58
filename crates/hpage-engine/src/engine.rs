//! Engine
//!
//! The collaborators every page of one browsing session shares.

use std::fmt;
use std::rc::Rc;

use hpage_a11y::{AssertionSink, LogAssertions};
use hpage_js::ScriptHost;
use hpage_net::Transport;

use crate::{Config, Page, WindowOwner};

/// Shared page collaborators
pub struct Engine {
    config: Config,
    script_host: Option<Rc<dyn ScriptHost<Page>>>,
    transport: Option<Rc<dyn Transport>>,
    window_owner: Option<Rc<dyn WindowOwner>>,
    assertions: Rc<dyn AssertionSink>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Engine {
    /// Engine with no script host, transport or window owner. Assertion
    /// failures are logged.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            script_host: None,
            transport: None,
            window_owner: None,
            assertions: Rc::new(LogAssertions),
        }
    }

    pub fn with_script_host(mut self, host: Rc<dyn ScriptHost<Page>>) -> Self {
        self.script_host = Some(host);
        self
    }

    pub fn with_transport(mut self, transport: Rc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Use the reqwest transport with the configured user agent
    #[cfg(feature = "http")]
    pub fn with_http_transport(self) -> Result<Self, hpage_net::NetError> {
        let transport = hpage_net::HttpTransport::new(&self.config.user_agent)?;
        Ok(self.with_transport(Rc::new(transport)))
    }

    pub fn with_window_owner(mut self, owner: Rc<dyn WindowOwner>) -> Self {
        self.window_owner = Some(owner);
        self
    }

    pub fn with_assertions(mut self, sink: Rc<dyn AssertionSink>) -> Self {
        self.assertions = sink;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Host to run script with; `None` when scripting is off
    pub fn script_host(&self) -> Option<Rc<dyn ScriptHost<Page>>> {
        if !self.config.enable_javascript {
            return None;
        }
        self.script_host.clone()
    }

    pub fn transport(&self) -> Option<Rc<dyn Transport>> {
        self.transport.clone()
    }

    pub fn window_owner(&self) -> Option<Rc<dyn WindowOwner>> {
        self.window_owner.clone()
    }

    pub fn assertions(&self) -> &dyn AssertionSink {
        self.assertions.as_ref()
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("config", &self.config)
            .field("script_host", &self.script_host.is_some())
            .field("transport", &self.transport.is_some())
            .field("window_owner", &self.window_owner.is_some())
            .finish_non_exhaustive()
    }
}
