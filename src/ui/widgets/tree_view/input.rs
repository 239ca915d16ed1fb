//! Keyboard input handling and interactive loop.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::view::{TreeView, ViewAction};

/// Convert a keyboard event to a ViewAction
pub fn key_to_action(key: KeyEvent) -> Option<ViewAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('d') => Some(ViewAction::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up => Some(ViewAction::Up),
        KeyCode::Down => Some(ViewAction::Down),
        KeyCode::Enter | KeyCode::Char(' ') => Some(ViewAction::Toggle),
        KeyCode::Right => Some(ViewAction::Open),
        KeyCode::Left => Some(ViewAction::Close),
        KeyCode::Backspace => Some(ViewAction::Backspace),
        KeyCode::Esc => Some(ViewAction::Escape),
        KeyCode::Char(c) => Some(ViewAction::Type(c)),
        _ => None,
    }
}

/// Run the tree view interactively until the user quits
pub fn run_interactive(
    view: &mut TreeView,
    supports_unicode: bool,
    supports_color: bool,
) -> anyhow::Result<()> {
    use crossterm::{
        cursor,
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{self, ClearType},
    };
    use std::io::{stdout, Write};

    terminal::enable_raw_mode()?;
    let mut stdout = stdout();

    let render_ui = |stdout: &mut std::io::Stdout, view: &TreeView| -> anyhow::Result<()> {
        execute!(stdout, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        let screen = view.render(supports_unicode, supports_color)?;
        for line in screen.lines() {
            write!(stdout, "{}\r\n", line)?;
        }
        stdout.flush()?;
        Ok(())
    };

    let result = (|| -> anyhow::Result<()> {
        execute!(stdout, cursor::Hide)?;
        render_ui(&mut stdout, view)?;
        loop {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let Some(action) = key_to_action(key) else {
                continue;
            };
            tracing::trace!(?action, "key action");
            if view.handle_action(action) {
                return Ok(());
            }
            render_ui(&mut stdout, view)?;
        }
    })();

    // Restore terminal even when rendering failed
    let restored = restore_terminal(&mut stdout, terminal::disable_raw_mode);
    result?;
    restored?;
    Ok(())
}

/// Leave raw mode first, so a failed screen write cannot strand the
/// terminal in it.
fn restore_terminal(
    out: &mut impl std::io::Write,
    disable_raw_mode: impl FnOnce() -> std::io::Result<()>,
) -> std::io::Result<()> {
    use crossterm::{cursor, execute, terminal};

    let raw = disable_raw_mode();
    execute!(
        out,
        cursor::Show,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;
    raw
}
