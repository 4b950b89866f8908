use crate::app::{Action, App, AppState, Submission};
use crate::download::ResumeDownload;
use crate::errors::{ChatfolioError, ChatfolioResult};
use crate::typing::{play_replies, TypingDelay};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{info, warn};
use std::sync::Arc;
use tokio::sync::Mutex;

pub async fn handle_key_event(key: KeyEvent, app: &Arc<Mutex<App>>) -> ChatfolioResult<()> {
    let mut guard = app.lock().await;
    match guard.state {
        AppState::Chat => handle_chat_input(key, &mut guard, app),
        AppState::QuitConfirm => handle_quit_confirm_input(key, &mut guard),
        AppState::Quit => {}
    }
    Ok(())
}

fn handle_chat_input(key: KeyEvent, app: &mut App, shared: &Arc<Mutex<App>>) {
    match key.code {
        KeyCode::Esc => {
            app.state = AppState::QuitConfirm;
        }
        KeyCode::Enter => {
            if let Submission::Replies(replies) = app.submit() {
                let delay = TypingDelay::from_config(&app.config);
                tokio::spawn(play_replies(shared.clone(), replies, delay));
            }
        }
        KeyCode::Tab => app.focus_previous(),
        KeyCode::BackTab => app.focus_next(),
        KeyCode::PageUp => app.scroll_up(),
        KeyCode::PageDown => app.scroll_down(),
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'c' => app.state = AppState::QuitConfirm,
                    'u' => app.scroll_up(),
                    'd' => app.scroll_down(),
                    'o' => {
                        if let Some((_, action)) = app.focused() {
                            run_action(app, &action);
                        }
                    }
                    _ => {}
                }
            } else {
                app.clear_focus();
                app.input.push(c);
            }
        }
        _ => {}
    }
}

pub fn handle_quit_confirm_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => {
            app.state = AppState::Quit;
        }
        KeyCode::Char('n') | KeyCode::Esc => {
            app.state = AppState::Chat;
        }
        _ => {}
    }
}

/// Opens a link in the default handler or saves the resume.
/// Failures end up in the status line; nothing is retried.
pub fn run_action(app: &mut App, action: &Action) {
    let outcome = match action {
        Action::Open(href) => open::that_detached(href)
            .map(|()| format!("Opened {}", href))
            .map_err(|e| ChatfolioError::link_error(format!("{}: {}", href, e))),
        Action::Download => ResumeDownload::from_config(&app.config)
            .trigger()
            .map(|path| format!("Resume saved to {}", path.display())),
    };

    match outcome {
        Ok(status) => {
            info!("{}", status);
            app.status_indicator.set_status(status);
        }
        Err(e) => {
            warn!("{}", e);
            app.status_indicator.set_status(e.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::fs;
    use std::time::Duration;
    use tempfile::tempdir;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    async fn type_text(app: &Arc<Mutex<App>>, text: &str) {
        for c in text.chars() {
            handle_key_event(key(KeyCode::Char(c)), app).await.unwrap();
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_enter_plays_replies() {
        let app = Arc::new(Mutex::new(App::new(Config::default())));
        type_text(&app, "address").await;
        handle_key_event(key(KeyCode::Enter), &app).await.unwrap();

        {
            let guard = app.lock().await;
            assert!(guard.input.is_empty());
            assert!(guard.replying);
        }

        tokio::time::sleep(Duration::from_millis(2100)).await;

        let guard = app.lock().await;
        assert!(!guard.replying);
        assert_eq!(guard.conversation.len(), 5);
        assert_eq!(
            guard.conversation.last().unwrap().text,
            "📍 Location:\nParsad, Udaipur, Rajasthan"
        );
    }

    #[tokio::test]
    async fn test_backspace_edits_input() {
        let app = Arc::new(Mutex::new(App::new(Config::default())));
        type_text(&app, "morex").await;
        handle_key_event(key(KeyCode::Backspace), &app).await.unwrap();
        assert_eq!(app.lock().await.input, "more");
    }

    #[tokio::test]
    async fn test_quit_flow() {
        let app = Arc::new(Mutex::new(App::new(Config::default())));
        handle_key_event(key(KeyCode::Esc), &app).await.unwrap();
        assert_eq!(app.lock().await.state, AppState::QuitConfirm);

        handle_key_event(key(KeyCode::Char('n')), &app).await.unwrap();
        assert_eq!(app.lock().await.state, AppState::Chat);

        handle_key_event(ctrl('c'), &app).await.unwrap();
        handle_key_event(key(KeyCode::Char('y')), &app).await.unwrap();
        assert_eq!(app.lock().await.state, AppState::Quit);
    }

    #[tokio::test]
    async fn test_ctrl_o_downloads_resume() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("resume.pdf");
        fs::write(&source, b"%PDF-1.4").unwrap();

        let mut config = Config::default();
        config.resume_path = source.display().to_string();
        config.download_dir = Some(dir.path().join("Downloads").display().to_string());

        let app = Arc::new(Mutex::new(App::new(config)));
        {
            let mut guard = app.lock().await;
            guard
                .conversation
                .finish_typing(crate::dispatcher::Reply::download("📄 Click to download resume"));
        }

        handle_key_event(key(KeyCode::Tab), &app).await.unwrap();
        handle_key_event(ctrl('o'), &app).await.unwrap();

        let saved = dir.path().join("Downloads").join("DikshitDarji_Resume.pdf");
        assert_eq!(fs::read(&saved).unwrap(), b"%PDF-1.4");
        assert!(app
            .lock()
            .await
            .status_indicator
            .status()
            .starts_with("Resume saved to"));
    }

    #[test]
    fn test_missing_resume_is_reported_in_status() {
        let dir = tempdir().unwrap();
        let mut config = Config::default();
        config.resume_path = dir.path().join("absent.pdf").display().to_string();
        config.download_dir = Some(dir.path().display().to_string());

        let mut app = App::new(config);
        run_action(&mut app, &Action::Download);
        assert!(app.status_indicator.status().contains("absent.pdf"));
    }
}
