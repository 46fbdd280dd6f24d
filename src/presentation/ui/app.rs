//! Main application orchestrator.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::{debug, info, warn};

use crate::application::dto::{AuthOutcome, LoginRequest, SignupRequest};
use crate::application::services::NotificationManager;
use crate::application::use_cases::{
    LoginUseCase, ResolveTokenUseCase, SignupUseCase, SubmitQuizUseCase,
};
use crate::domain::entities::{AnswerSet, EligibilityReport, SessionToken};
use crate::domain::ports::{AuthPort, QuizPort, TokenStoragePort};
use crate::presentation::events;
use crate::presentation::ui::{
    LoginAction, LoginScreen, QuizKeyResult, QuizScreen, ResultsAction, ResultsScreen,
    SignupAction, SignupScreen,
};
use crate::presentation::widgets::NotificationPopup;

const TICK_RATE: Duration = Duration::from_millis(250);

#[derive(Debug)]
enum Action {
    AuthSucceeded(Box<AuthOutcome>),
    AuthFailed(String),
    SubmitSucceeded(Box<EligibilityReport>),
    SubmitFailed(String),
}

enum CurrentScreen {
    Login(LoginScreen),
    Signup(SignupScreen),
    Quiz(Box<QuizScreen>),
    Results(Box<ResultsScreen>),
}

/// Owns the screens, the use cases, and the event loop.
pub struct App {
    screen: CurrentScreen,
    login_use_case: LoginUseCase,
    signup_use_case: SignupUseCase,
    resolve_token_use_case: ResolveTokenUseCase,
    submit_use_case: SubmitQuizUseCase,
    notifications: NotificationManager,
    current_token: Option<SessionToken>,
    persist_token: bool,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    exiting: bool,
}

impl App {
    /// Wires the application together from its ports.
    #[must_use]
    pub fn new(
        auth_port: Arc<dyn AuthPort>,
        quiz_port: Arc<dyn QuizPort>,
        storage_port: Arc<dyn TokenStoragePort>,
        persist_token: bool,
        notification_duration: Duration,
    ) -> Self {
        let login_use_case = LoginUseCase::new(auth_port.clone(), storage_port.clone());
        let signup_use_case = SignupUseCase::new(auth_port, storage_port.clone());
        let resolve_token_use_case = ResolveTokenUseCase::new(storage_port.clone());
        let submit_use_case = SubmitQuizUseCase::new(quiz_port, storage_port);
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        Self {
            screen: CurrentScreen::Login(LoginScreen::new()),
            login_use_case,
            signup_use_case,
            resolve_token_use_case,
            submit_use_case,
            notifications: NotificationManager::new(notification_duration),
            current_token: None,
            persist_token,
            action_tx,
            action_rx,
            exiting: false,
        }
    }

    /// Runs the application until the user quits.
    ///
    /// # Errors
    /// Returns error if terminal drawing or token resolution fails.
    pub async fn run(
        mut self,
        terminal: &mut DefaultTerminal,
        cli_token: Option<String>,
    ) -> color_eyre::Result<()> {
        if let Some(resolved) = self.resolve_token_use_case.execute(cli_token).await? {
            info!(source = %resolved.source, "Found existing token, skipping login");
            self.notifications
                .info("Welcome back", format!("Using token from {}", resolved.source));
            self.current_token = Some(resolved.token);
            self.screen = CurrentScreen::Quiz(Box::new(QuizScreen::new()));
        }

        self.run_event_loop(terminal).await?;

        info!("Application exiting normally");
        Ok(())
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut tick = interval(TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        while !self.exiting {
            tokio::select! {
                biased;

                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                    terminal.draw(|frame| self.render(frame))?;
                }

                Some(Ok(event)) = terminal_events.next() => {
                    if let Event::Key(key) = event {
                        self.handle_key(key).await;
                    }
                    terminal.draw(|frame| self.render(frame))?;
                }

                _ = tick.tick() => {
                    self.notifications.tick();
                    terminal.draw(|frame| self.render(frame))?;
                }
            }
        }

        Ok(())
    }

    async fn handle_key(&mut self, key: KeyEvent) {
        if events::is_quit_event(&key) {
            self.exiting = true;
            return;
        }

        match &mut self.screen {
            CurrentScreen::Login(screen) => match screen.handle_key(key) {
                LoginAction::Submit => self.spawn_login(),
                LoginAction::SwitchToSignup => {
                    self.screen = CurrentScreen::Signup(SignupScreen::new());
                }
                LoginAction::DeleteToken => self.delete_saved_token().await,
                LoginAction::Quit => self.exiting = true,
                LoginAction::None => {}
            },
            CurrentScreen::Signup(screen) => match screen.handle_key(key) {
                SignupAction::Submit => self.spawn_signup(),
                SignupAction::SwitchToLogin => {
                    self.screen = CurrentScreen::Login(LoginScreen::new());
                }
                SignupAction::Quit => self.exiting = true,
                SignupAction::None => {}
            },
            CurrentScreen::Quiz(screen) => match screen.handle_key(key) {
                QuizKeyResult::Blocked => {
                    self.notifications
                        .warn("Hold on", "Please answer this question");
                }
                QuizKeyResult::Submit => self.spawn_submit(),
                QuizKeyResult::Quit => self.exiting = true,
                QuizKeyResult::None => {}
            },
            CurrentScreen::Results(screen) => match screen.handle_key(key) {
                ResultsAction::Quit => self.exiting = true,
                ResultsAction::None => {}
            },
        }
    }

    fn spawn_login(&mut self) {
        let CurrentScreen::Login(screen) = &mut self.screen else {
            return;
        };

        let mut request =
            LoginRequest::new(screen.email().to_string(), screen.password().to_string());
        if !self.persist_token {
            request = request.without_persistence();
        }
        screen.set_busy(true);

        let use_case = self.login_use_case.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let action = match use_case.execute(request).await {
                Ok(outcome) => Action::AuthSucceeded(Box::new(outcome)),
                Err(e) => Action::AuthFailed(e.to_string()),
            };
            let _ = tx.send(action);
        });
    }

    fn spawn_signup(&mut self) {
        let CurrentScreen::Signup(screen) = &mut self.screen else {
            return;
        };

        let mut request = SignupRequest::new(
            screen.name().to_string(),
            screen.email().to_string(),
            screen.password().to_string(),
        );
        if !self.persist_token {
            request = request.without_persistence();
        }
        screen.set_busy(true);

        let use_case = self.signup_use_case.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let action = match use_case.execute(request).await {
                Ok(outcome) => Action::AuthSucceeded(Box::new(outcome)),
                Err(e) => Action::AuthFailed(e.to_string()),
            };
            let _ = tx.send(action);
        });
    }

    fn spawn_submit(&mut self) {
        let CurrentScreen::Quiz(screen) = &mut self.screen else {
            return;
        };

        screen.set_busy(true);
        let answers: AnswerSet = screen.answers().clone();
        let token = self.current_token.clone();

        let use_case = self.submit_use_case.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let action = match use_case.execute(token, &answers).await {
                Ok(report) => Action::SubmitSucceeded(Box::new(report)),
                Err(e) => Action::SubmitFailed(e.to_string()),
            };
            let _ = tx.send(action);
        });
    }

    async fn delete_saved_token(&mut self) {
        match self.login_use_case.delete_token().await {
            Ok(()) => {
                self.current_token = None;
                self.notifications
                    .info("Saved token cleared", "You will need to log in again");
            }
            Err(e) => {
                self.notifications.error("Could not clear token", e.to_string());
            }
        }
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::AuthSucceeded(outcome) => {
                let message = match &self.screen {
                    CurrentScreen::Signup(_) => "Account created successfully!",
                    _ => "Login successful!",
                };
                debug!(user = %outcome.user().name(), "Authentication completed");
                self.notifications.info(message, format!("Welcome, {}", outcome.user().name()));
                self.current_token = Some(outcome.session.token.clone());
                self.screen = CurrentScreen::Quiz(Box::new(QuizScreen::new()));
            }
            Action::AuthFailed(message) => {
                warn!(%message, "Authentication failed");
                self.notifications.error("Error", message);
                match &mut self.screen {
                    CurrentScreen::Login(screen) => screen.set_busy(false),
                    CurrentScreen::Signup(screen) => screen.set_busy(false),
                    _ => {}
                }
            }
            Action::SubmitSucceeded(report) => {
                self.screen = CurrentScreen::Results(Box::new(ResultsScreen::new(*report)));
            }
            Action::SubmitFailed(message) => {
                warn!(%message, "Quiz submission failed");
                self.notifications.error("Error", message);
                // The flow stays at the last step so the user can retry.
                if let CurrentScreen::Quiz(screen) = &mut self.screen {
                    screen.set_busy(false);
                }
            }
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        match &mut self.screen {
            CurrentScreen::Login(screen) => frame.render_widget(&*screen, area),
            CurrentScreen::Signup(screen) => frame.render_widget(&*screen, area),
            CurrentScreen::Quiz(screen) => frame.render_widget(&mut **screen, area),
            CurrentScreen::Results(screen) => frame.render_widget(&mut **screen, area),
        }

        if let Some(notification) = self.notifications.current_notification() {
            frame.render_widget(NotificationPopup::new(notification), area);
        }
    }
}
