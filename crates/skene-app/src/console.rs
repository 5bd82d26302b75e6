//! Line-oriented console front end.
//!
//! Turns typed commands into the same actions the counter buttons and menu
//! items trigger, and prints the window snapshot after each change.
//!
//! Commands:
//! - `+` / `inc`, `-` / `dec`, `0` / `reset`, `set <n>`
//! - `lang <code>`, `langs`, `menu`, `about`, `show`, `help`
//! - `quit` / `exit`

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use skene_core::error::{Result, SkeneError};

use crate::ui::{App, Button, Flow, MenuAction};

pub const HELP: &str = "\
commands:
  + | inc        increment
  - | dec        decrement
  0 | reset      reset to zero
  set <n>        set value
  lang <code>    switch language
  langs          list languages
  menu           show menu bar
  about          about
  show           show window
  help           this help
  quit | exit    quit
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Press(Button),
    Set(i64),
    Lang(String),
    Langs,
    Menu,
    About,
    Show,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Err(SkeneError::BadCommand("empty input".into()));
    };
    let arg = parts.next();
    if parts.next().is_some() {
        return Err(SkeneError::BadCommand(format!("too many arguments: {line}")));
    }

    let cmd = match (head, arg) {
        ("+" | "inc", None) => Command::Press(Button::Increment),
        ("-" | "dec", None) => Command::Press(Button::Decrement),
        ("0" | "reset", None) => Command::Press(Button::Reset),
        ("set", Some(n)) => {
            let v = n
                .parse::<i64>()
                .map_err(|e| SkeneError::BadCommand(format!("set expects an integer: {e}")))?;
            Command::Set(v)
        }
        ("lang", Some(code)) => Command::Lang(code.to_string()),
        ("langs", None) => Command::Langs,
        ("menu", None) => Command::Menu,
        ("about", None) => Command::About,
        ("show", None) => Command::Show,
        ("help", None) => Command::Help,
        ("quit" | "exit", None) => Command::Quit,
        ("set" | "lang", None) => {
            return Err(SkeneError::BadCommand(format!("{head} needs an argument")))
        }
        _ => return Err(SkeneError::BadCommand(format!("unknown command: {line}"))),
    };
    Ok(cmd)
}

/// Apply one command. Returns the text to print and whether to stop.
pub fn execute(app: &mut App, cmd: Command) -> Result<(String, bool)> {
    let flow = match cmd {
        Command::Press(b) => {
            app.press(b);
            Flow::Continue
        }
        Command::Set(v) => {
            app.service().set_value(v);
            Flow::Continue
        }
        Command::Lang(code) => app.handle(&MenuAction::SetLanguage(code))?,
        Command::About => app.handle(&MenuAction::About)?,
        Command::Quit => app.handle(&MenuAction::Exit)?,
        Command::Langs => {
            let localizer = app.localizer();
            let current = localizer.current_language();
            let lines: Vec<String> = localizer
                .available_languages()
                .into_iter()
                .map(|l| if l == current { format!("* {l}") } else { format!("  {l}") })
                .collect();
            return Ok((lines.join("\n") + "\n", false));
        }
        Command::Menu => return Ok((app.menu().render(), false)),
        Command::Help => return Ok((HELP.to_string(), false)),
        Command::Show => Flow::Continue,
    };

    Ok(match flow {
        Flow::Continue => (app.render(), false),
        Flow::Show(msg) => (msg + "\n", false),
        Flow::Quit => (String::new(), true),
    })
}

/// Drive `app` from `input` until EOF or a quit command.
pub async fn run<R, W>(app: &mut App, input: R, mut output: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    write_out(&mut output, &app.render()).await?;

    while let Some(line) = lines
        .next_line()
        .await
        .map_err(|e| SkeneError::Internal(format!("read input failed: {e}")))?
    {
        if line.trim().is_empty() {
            continue;
        }
        let reply = parse_command(&line).and_then(|cmd| execute(app, cmd));
        match reply {
            Ok((text, quit)) => {
                write_out(&mut output, &text).await?;
                if quit {
                    break;
                }
            }
            Err(e) => {
                tracing::debug!(kind = e.kind().as_str(), error = %e, "command rejected");
                write_out(&mut output, &format!("error[{}]: {e}\n", e.kind().as_str())).await?;
            }
        }
    }

    tracing::info!(value = app.service().get_value(), "console closed");
    Ok(())
}

async fn write_out<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> Result<()> {
    output
        .write_all(text.as_bytes())
        .await
        .map_err(|e| SkeneError::Internal(format!("write output failed: {e}")))?;
    output
        .flush()
        .await
        .map_err(|e| SkeneError::Internal(format!("write output failed: {e}")))
}
