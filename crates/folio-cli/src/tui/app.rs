//! Main TUI application
//!
//! Core application state and event loop.
//! Handler implementations are in the handlers/ module.

use anyhow::Result;
use crossterm::{
    event::{
        DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture, Event,
        EventStream,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io,
    sync::Arc,
    time::{Duration, Instant},
};
use tracing::{debug, info, warn};

use folio_core::constants::page::{HEADER_SCROLLED_THRESHOLD, SCROLL_TO_TOP_THRESHOLD};
use folio_core::contact::{ContactController, EmailJsClient, EmailTransport, Field};
use folio_core::i18n::{self, LanguageSelector};
use folio_core::page::PageChrome;
use folio_core::projects::{spawn_refresh, GithubClient, ProjectListing};
use folio_core::{
    paths, Database, FolioConfig, Locale, PageShell, Preferences, Section, StackedDocument,
    Translator,
};

use crate::tui::components::{Toast, ToastQueue};
use crate::tui::content::skill_card_count;
use crate::tui::popups::MobileMenuPopup;
use crate::tui::state::LayoutState;
use crate::tui::themes::{Theme, DEFAULT_THEME, THEME_REGISTRY};
use crate::tui::utils::AsyncChannels;

/// Browser pixels per terminal row, for thresholds expressed in pixels
const PX_PER_ROW: u32 = 20;

/// Frame interval while idle
const FRAME: Duration = Duration::from_millis(16);

/// Popup types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popup {
    None,
    Menu,
    Language,
}

/// Startup choices from the command line
#[derive(Debug, Default)]
pub struct AppOptions {
    pub config: FolioConfig,
    pub theme: Option<String>,
    pub lang: Option<String>,
}

/// Application state
pub struct App {
    pub config: FolioConfig,
    pub theme: Arc<Theme>,
    pub theme_name: String,
    pub translator: Translator,
    pub preferences: Option<Preferences>,

    pub page: PageShell<StackedDocument>,
    pub listing: ProjectListing,
    pub contact: ContactController,
    /// Form field receiving keystrokes, `None` while browsing
    pub contact_focus: Option<Field>,
    pub transport: Option<Arc<dyn EmailTransport>>,

    pub language: LanguageSelector,
    pub menu: MobileMenuPopup,
    pub channels: AsyncChannels,
    pub toasts: ToastQueue,
    pub layout: LayoutState,

    pub needs_redraw: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(options: AppOptions) -> Self {
        let AppOptions {
            config,
            theme: cli_theme,
            lang,
        } = options;

        let preferences = match Database::new(&paths::database_file()) {
            Ok(db) => Some(Preferences::new(db)),
            Err(e) => {
                warn!("Preferences unavailable: {:#}", e);
                None
            }
        };

        // Flag, then stored choice, then config default, then environment
        let stored_locale = preferences.as_ref().and_then(Preferences::get_locale);
        let mut system_tags: Vec<String> = config.default_locale.iter().cloned().collect();
        system_tags.extend(i18n::system_locale_tags());
        let locale = i18n::detect(
            lang.as_deref(),
            stored_locale.map(Locale::code),
            &system_tags,
        );
        let translator = Translator::new(locale);
        info!(locale = locale.code(), "Language selected");

        let theme_name = cli_theme
            .filter(|name| {
                let known = THEME_REGISTRY.contains(name);
                if !known {
                    warn!(theme = %name, "Unknown theme, ignoring");
                }
                known
            })
            .or_else(|| preferences.as_ref().and_then(Preferences::get_theme))
            .filter(|name| THEME_REGISTRY.contains(name))
            .unwrap_or_else(|| DEFAULT_THEME.to_string());
        let theme = Arc::new(THEME_REGISTRY.get_or_default(&theme_name).clone());

        let chrome = PageChrome::new(
            HEADER_SCROLLED_THRESHOLD / PX_PER_ROW,
            SCROLL_TO_TOP_THRESHOLD / PX_PER_ROW,
        );
        let mut page = PageShell::new(StackedDocument::new(80, 24))
            .with_chrome(chrome)
            .with_cursor(config.cursor);
        if let Some(skills) = page.reveals_mut().get_mut(Section::Skills) {
            skills.set_children(skill_card_count());
        }
        if let Some(about) = page.reveals_mut().get_mut(Section::About) {
            about.set_children(config.profile.experience.len());
        }

        let transport: Option<Arc<dyn EmailTransport>> =
            match EmailJsClient::new(config.emailjs.clone()) {
                Ok(client) => Some(Arc::new(client)),
                Err(e) => {
                    debug!("Contact delivery disabled: {}", e);
                    None
                }
            };

        let contact = ContactController::new(translator.t("contact.form.error"));

        Self {
            config,
            theme,
            theme_name,
            translator,
            preferences,
            page,
            listing: ProjectListing::new(),
            contact,
            contact_focus: None,
            transport,
            language: LanguageSelector::new(),
            menu: MobileMenuPopup::new(),
            channels: AsyncChannels::new(),
            toasts: ToastQueue::new(),
            layout: LayoutState::new(),
            needs_redraw: true,
            should_quit: false,
        }
    }

    /// Which overlay currently owns the keyboard
    pub fn popup(&self) -> Popup {
        if self.language.is_open() {
            Popup::Language
        } else if self.page.is_menu_open() {
            Popup::Menu
        } else {
            Popup::None
        }
    }

    pub fn show_toast(&mut self, toast: Toast) {
        self.toasts.push(toast, Instant::now());
        self.needs_redraw = true;
    }

    /// Start the background repository listing
    fn start_projects_refresh(&mut self) {
        match GithubClient::new(&self.config.github_user) {
            Ok(client) => {
                self.channels.projects =
                    Some(spawn_refresh(Arc::new(client), self.config.refresh_interval()));
            }
            Err(e) => {
                warn!("Repository listing disabled: {}", e);
                self.listing.apply(Err(e));
            }
        }
    }

    /// Run the application
    pub async fn run(&mut self) -> Result<()> {
        self.start_projects_refresh();

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableFocusChange
        )?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;

        let result = {
            // Release the scroll lock and stop the refresh task however the loop ends
            let mut app = scopeguard::guard(&mut *self, |app| app.teardown());
            app.page.mount(Instant::now());
            app.main_loop(&mut terminal).await
        };

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            DisableFocusChange
        )?;
        terminal.show_cursor()?;
        result
    }

    fn teardown(&mut self) {
        self.page.teardown();
        if let Some(refresh) = self.channels.projects.take() {
            refresh.cancel();
        }
        info!("Folio shut down");
    }

    /// Main event loop
    async fn main_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        loop {
            let now = Instant::now();

            if self.poll_projects() {
                self.needs_redraw = true;
            }
            if self.poll_contact(now) || self.contact.tick(now) {
                self.needs_redraw = true;
            }
            if self.toasts.tick(now) || !self.toasts.is_empty() {
                self.needs_redraw = true;
            }

            let before = self.page.visual_offset();
            if self.page.tick(now) || self.page.visual_offset() != before {
                self.needs_redraw = true;
            }

            if self.needs_redraw {
                terminal.draw(|f| self.ui(f, now))?;
                self.needs_redraw = false;
            }

            tokio::select! {
                biased;

                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(e)) => warn!("Terminal event error: {}", e),
                        None => self.should_quit = true,
                    }
                }
                _ = tokio::time::sleep(FRAME) => {}
            }

            if self.should_quit {
                break;
            }
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            Event::FocusGained => self.page.cursor_mut().on_enter(),
            Event::FocusLost => self.page.cursor_mut().on_leave(),
            _ => {}
        }
        self.needs_redraw = true;
    }
}
