use anyhow::{anyhow, Result};
use authpanel::cmd_args::ScreenKind;
use authpanel::config::AppConfig;
use authpanel::models::{FieldId, FormMode};
use authpanel::{ActiveScreen, AppController, InputEvent, MockSurface, TestInputSource, TextTable};
use cucumber::World;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const SIGN_IN_PATH: &str = "/login";
pub const SIGN_UP_PATH: &str = "/users";

/// Time the controller gets to settle after a submit or toggle
const SETTLE_TIMEOUT: Duration = Duration::from_secs(5);

/// Headless application driven by queued input and drawn to a `MockSurface`
#[derive(World)]
#[world(init = Self::new)]
pub struct AuthPanelWorld {
    /// Mock authentication API
    pub server: Option<MockServer>,

    /// Base URL the application posts to; a dead address when the server is down
    pub base_url: Option<String>,

    /// Real AppController with test I/O
    pub app: Option<AppController<TestInputSource, MockSurface>>,
}

impl std::fmt::Debug for AuthPanelWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthPanelWorld")
            .field("base_url", &self.base_url)
            .field("app_started", &self.app.is_some())
            .finish()
    }
}

impl AuthPanelWorld {
    pub fn new() -> Self {
        Self {
            server: None,
            base_url: None,
            app: None,
        }
    }

    pub async fn start_server(&mut self) {
        let server = MockServer::start().await;
        self.base_url = Some(server.uri());
        self.server = Some(server);
    }

    /// Point the application at a port nobody listens on
    pub fn use_unreachable_server(&mut self) -> Result<()> {
        let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
        let address = listener.local_addr()?;
        drop(listener);
        self.base_url = Some(format!("http://{address}"));
        Ok(())
    }

    pub async fn answer(&self, request_path: &str, status: u16, body: &str) -> Result<()> {
        let server = self.server.as_ref().ok_or_else(|| anyhow!("server not started"))?;
        Mock::given(method("POST"))
            .and(path(request_path))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(server)
            .await;
        Ok(())
    }

    pub fn open(&mut self, screen: ScreenKind) -> Result<()> {
        let base_url = self
            .base_url
            .clone()
            .ok_or_else(|| anyhow!("no auth server configured"))?;
        let config = AppConfig {
            screen,
            sign_in_url: format!("{base_url}{SIGN_IN_PATH}"),
            sign_up_url: format!("{base_url}{SIGN_UP_PATH}"),
            timeout: Duration::from_secs(2),
            ..AppConfig::default()
        };
        let app = AppController::with_io(
            &config,
            TextTable::builtin()?,
            TestInputSource::new(),
            MockSurface::new(),
        )?;
        self.app = Some(app);
        self.tick()
    }

    pub fn app(&self) -> &AppController<TestInputSource, MockSurface> {
        self.app.as_ref().expect("application not started")
    }

    pub fn app_mut(&mut self) -> &mut AppController<TestInputSource, MockSurface> {
        self.app.as_mut().expect("application not started")
    }

    pub fn tick(&mut self) -> Result<()> {
        self.app_mut().tick(0.016)
    }

    pub fn send(&mut self, event: InputEvent) -> Result<()> {
        self.app_mut().input_mut().push(event);
        self.tick()
    }

    /// Click into a text box of the screen in front and type `text`
    pub fn type_into(&mut self, field: FieldId, text: &str) -> Result<()> {
        let (x, y) = match self.app().screen() {
            ActiveScreen::Panel(panel) => {
                let mode = panel
                    .state()
                    .active_mode()
                    .ok_or_else(|| anyhow!("panel is still sliding"))?;
                panel.layout().field_rect(mode, field).center()
            }
            ActiveScreen::Registration(registration) => {
                registration.layout().field_rect(field).center()
            }
        };
        let input = self.app_mut().input_mut();
        input.push_click(x, y);
        input.push_text(text);
        self.tick()
    }

    pub async fn settle(&mut self) -> Result<()> {
        if !self.app_mut().run_until_idle(SETTLE_TIMEOUT).await? {
            return Err(anyhow!("application did not settle in {SETTLE_TIMEOUT:?}"));
        }
        Ok(())
    }

    /// Status message on the panel screen or footer on the registration screen
    pub fn shown_message(&self) -> Option<String> {
        match self.app().screen() {
            ActiveScreen::Panel(panel) => panel.state().message().map(|m| m.text().to_string()),
            ActiveScreen::Registration(registration) => {
                registration.state().footer().map(str::to_string)
            }
        }
    }

    pub fn field_value(&self, mode: FormMode, field: FieldId) -> Option<String> {
        match self.app().screen() {
            ActiveScreen::Panel(panel) => panel
                .state()
                .fields(mode)
                .value(field)
                .map(str::to_string),
            ActiveScreen::Registration(registration) => {
                registration.state().fields().value(field).map(str::to_string)
            }
        }
    }

    pub async fn received_request_count(&self) -> usize {
        match &self.server {
            Some(server) => server
                .received_requests()
                .await
                .map(|requests| requests.len())
                .unwrap_or_default(),
            None => 0,
        }
    }
}

impl Default for AuthPanelWorld {
    fn default() -> Self {
        Self::new()
    }
}
