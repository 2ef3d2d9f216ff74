//! # Application Controller
//!
//! Owns the frame loop. Each tick runs, in order: drain input, advance
//! animation, dispatch submits, collect finished requests, redraw.

use crate::config::{AppConfig, FRAME_INTERVAL};
use crate::cmd_args::ScreenKind;
use crate::panel::io::{InputEvent, InputSource, Surface};
use crate::panel::services::{AuthEndpoints, AuthService};
use crate::panel::text_table::TextTable;
use crate::panel::view_models::{
    ActiveScreen, AuthFormViewModel, RegistrationViewModel, ScreenCommand, ScreenInput,
};
use anyhow::Result;
use std::time::{Duration, Instant};

/// The main application controller
pub struct AppController<IS: InputSource, S: Surface> {
    screen: ActiveScreen,
    service: AuthService,
    input: IS,
    surface: S,
    should_quit: bool,
}

impl<IS: InputSource, S: Surface> AppController<IS, S> {
    /// Create a controller with injected input and output
    pub fn with_io(config: &AppConfig, texts: TextTable, input: IS, surface: S) -> Result<Self> {
        let logical_size = surface.logical_size();
        let screen = match config.screen {
            ScreenKind::Panel => ActiveScreen::Panel(AuthFormViewModel::new(
                texts,
                logical_size,
                config.resolution.slide_speed(),
            )),
            ScreenKind::Registration => {
                ActiveScreen::Registration(RegistrationViewModel::new(texts, logical_size))
            }
        };
        let endpoints = AuthEndpoints {
            sign_in_url: config.sign_in_url.clone(),
            sign_up_url: config.sign_up_url.clone(),
        };
        let service = AuthService::new(endpoints, config.timeout)?;
        tracing::debug!("Opening {:?} screen on a {:?} canvas", config.screen, logical_size);

        Ok(Self {
            screen,
            service,
            input,
            surface,
            should_quit: false,
        })
    }

    /// Run the frame loop until the user quits
    pub async fn run(&mut self) -> Result<()> {
        self.surface.initialize()?;
        let result = self.run_frames().await;

        // Leave the terminal usable even when a frame failed
        if self.service.cancel().is_some() {
            tracing::info!("Aborted request in flight on exit");
        }
        self.surface.cleanup()?;
        result
    }

    async fn run_frames(&mut self) -> Result<()> {
        self.render()?;
        let mut last_frame = Instant::now();

        while !self.should_quit {
            let frame_start = Instant::now();
            let dt = frame_start.duration_since(last_frame).as_secs_f32();
            last_frame = frame_start;

            self.tick(dt)?;

            if let Some(rest) = FRAME_INTERVAL.checked_sub(frame_start.elapsed()) {
                tokio::time::sleep(rest).await;
            }
        }
        tracing::info!("Quit requested");
        Ok(())
    }

    /// Run one frame with `dt` seconds of elapsed time
    pub fn tick(&mut self, dt: f32) -> Result<()> {
        let mut submits = Vec::new();

        for event in self.input.drain()? {
            match self.handle_event(event) {
                ScreenCommand::None => {}
                ScreenCommand::Submit(request) => submits.push(request),
                ScreenCommand::CancelRequest => {
                    // Submits queued this frame belong to the departing form
                    submits.clear();
                    self.cancel_request();
                }
            }
            if self.should_quit {
                return Ok(());
            }
        }

        self.screen.as_screen_mut().update(dt);

        for request in submits {
            let kind = request.kind();
            if self.service.dispatch(request) {
                self.screen.as_screen_mut().on_request_sent(kind);
            }
        }

        if let Some(reply) = self.service.poll_reply() {
            self.screen.as_screen_mut().on_reply(reply);
        }

        self.render()
    }

    fn handle_event(&mut self, event: InputEvent) -> ScreenCommand {
        let input = match event {
            InputEvent::Quit => {
                self.should_quit = true;
                return ScreenCommand::None;
            }
            InputEvent::Resize { columns, rows } => {
                tracing::debug!("Terminal resized to {}x{}", columns, rows);
                self.surface.resize(columns, rows);
                return ScreenCommand::None;
            }
            InputEvent::Cancel => return ScreenCommand::CancelRequest,
            InputEvent::Click { column, row } => {
                let (x, y) = self.surface.to_logical(column, row);
                ScreenInput::Click { x, y }
            }
            InputEvent::Text(ch) => ScreenInput::Text(ch),
            InputEvent::Backspace => ScreenInput::Backspace,
            InputEvent::FocusNext => ScreenInput::FocusNext,
            InputEvent::Submit => ScreenInput::Submit,
            InputEvent::Toggle => ScreenInput::Toggle,
        };

        self.screen.as_screen_mut().handle_input(input)
    }

    fn cancel_request(&mut self) {
        if let Some(reply) = self.service.cancel() {
            self.screen.as_screen_mut().on_reply(reply);
        }
    }

    fn render(&mut self) -> Result<()> {
        self.screen.as_screen().render(&mut self.surface)
    }

    /// Tick until no request is in flight and no slide is running, or until
    /// `timeout` passes. Returns true when the screen settled.
    pub async fn run_until_idle(&mut self, timeout: Duration) -> Result<bool> {
        let deadline = Instant::now() + timeout;
        let dt = FRAME_INTERVAL.as_secs_f32();
        loop {
            self.tick(dt)?;
            if !self.service.is_pending() && !self.is_sliding() {
                return Ok(true);
            }
            if Instant::now() >= deadline {
                return Ok(false);
            }
            tokio::time::sleep(FRAME_INTERVAL).await;
        }
    }

    fn is_sliding(&self) -> bool {
        self.screen
            .panel()
            .is_some_and(|panel| panel.state().toggle().is_sliding())
    }

    pub fn input_mut(&mut self) -> &mut IS {
        &mut self.input
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn screen(&self) -> &ActiveScreen {
        &self.screen
    }

    pub fn is_request_pending(&self) -> bool {
        self.service.is_pending()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
